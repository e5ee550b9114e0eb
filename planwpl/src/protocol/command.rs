use std::fmt::{Display, Formatter};

/// MAVLink mission commands known to the converter.
///
/// Identifiers `50000` and above are Parrot extensions.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
#[repr(u16)]
pub enum MavCommand {
    /// `MAV_CMD_NAV_WAYPOINT`
    NavWaypoint = 16,
    /// `MAV_CMD_NAV_LOITER_UNLIM`
    NavLoiterUnlim = 17,
    /// `MAV_CMD_NAV_LOITER_TURNS`
    NavLoiterTurns = 18,
    /// `MAV_CMD_NAV_LOITER_TIME`
    NavLoiterTime = 19,
    /// `MAV_CMD_NAV_RETURN_TO_LAUNCH`
    NavReturnToLaunch = 20,
    /// `MAV_CMD_NAV_LAND`
    NavLand = 21,
    /// `MAV_CMD_NAV_TAKEOFF`
    NavTakeoff = 22,
    /// `MAV_CMD_NAV_DELAY`
    NavDelay = 93,
    /// `MAV_CMD_CONDITION_DELAY`
    ConditionDelay = 112,
    /// `MAV_CMD_DO_CHANGE_SPEED`
    DoChangeSpeed = 178,
    /// `MAV_CMD_DO_SET_ROI`
    DoSetRoi = 201,
    /// `MAV_CMD_DO_MOUNT_CONTROL`
    DoMountControl = 205,
    /// `MAV_CMD_DO_SET_CAM_TRIGG_DIST`
    DoSetCamTriggDist = 206,
    /// `MAV_CMD_IMAGE_START_CAPTURE`
    ImageStartCapture = 2000,
    /// `MAV_CMD_IMAGE_STOP_CAPTURE`
    ImageStopCapture = 2001,
    /// `MAV_CMD_VIDEO_START_CAPTURE`
    VideoStartCapture = 2500,
    /// `MAV_CMD_VIDEO_STOP_CAPTURE`
    VideoStopCapture = 2501,
    /// `MAV_CMD_PANORAMA_CREATE`
    PanoramaCreate = 2800,
    /// `MAV_CMD_SET_VIEW_MODE` (Parrot)
    SetViewMode = 50000,
    /// `MAV_CMD_SET_STILL_CAPTURE_MODE` (Parrot)
    SetStillCaptureMode = 50001,
}

impl MavCommand {
    /// Numeric command identifier.
    #[inline(always)]
    pub fn id(self) -> u16 {
        self as u16
    }

    /// Command name without the `MAV_CMD_` prefix.
    pub fn name(self) -> &'static str {
        match self {
            MavCommand::NavWaypoint => "NAV_WAYPOINT",
            MavCommand::NavLoiterUnlim => "NAV_LOITER_UNLIM",
            MavCommand::NavLoiterTurns => "NAV_LOITER_TURNS",
            MavCommand::NavLoiterTime => "NAV_LOITER_TIME",
            MavCommand::NavReturnToLaunch => "NAV_RETURN_TO_LAUNCH",
            MavCommand::NavLand => "NAV_LAND",
            MavCommand::NavTakeoff => "NAV_TAKEOFF",
            MavCommand::NavDelay => "NAV_DELAY",
            MavCommand::ConditionDelay => "CONDITION_DELAY",
            MavCommand::DoChangeSpeed => "DO_CHANGE_SPEED",
            MavCommand::DoSetRoi => "DO_SET_ROI",
            MavCommand::DoMountControl => "DO_MOUNT_CONTROL",
            MavCommand::DoSetCamTriggDist => "DO_SET_CAM_TRIGG_DIST",
            MavCommand::ImageStartCapture => "IMAGE_START_CAPTURE",
            MavCommand::ImageStopCapture => "IMAGE_STOP_CAPTURE",
            MavCommand::VideoStartCapture => "VIDEO_START_CAPTURE",
            MavCommand::VideoStopCapture => "VIDEO_STOP_CAPTURE",
            MavCommand::PanoramaCreate => "PANORAMA_CREATE",
            MavCommand::SetViewMode => "SET_VIEW_MODE",
            MavCommand::SetStillCaptureMode => "SET_STILL_CAPTURE_MODE",
        }
    }
}

impl Display for MavCommand {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}
