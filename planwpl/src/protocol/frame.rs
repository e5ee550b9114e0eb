/// MAVLink coordinate frame (`MAV_FRAME`).
///
/// Only frames that may appear in QGroundControl plans are listed. Any other value is kept as
/// [`MavFrame::Other`] and rejected by the converter where a position is required.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum MavFrame {
    /// `MAV_FRAME_GLOBAL`: altitude above mean sea level.
    Global,
    /// `MAV_FRAME_MISSION`: item has no spatial meaning.
    Mission,
    /// `MAV_FRAME_GLOBAL_RELATIVE_ALT`: altitude relative to home.
    GlobalRelativeAlt,
    /// `MAV_FRAME_GLOBAL_INT`
    GlobalInt,
    /// `MAV_FRAME_GLOBAL_RELATIVE_ALT_INT`
    GlobalRelativeAltInt,
    /// `MAV_FRAME_GLOBAL_TERRAIN_ALT`: altitude above terrain.
    GlobalTerrainAlt,
    /// Any other frame.
    Other(u8),
}

impl MavFrame {
    /// Numeric frame identifier.
    pub fn id(self) -> u8 {
        match self {
            MavFrame::Global => 0,
            MavFrame::Mission => 2,
            MavFrame::GlobalRelativeAlt => 3,
            MavFrame::GlobalInt => 5,
            MavFrame::GlobalRelativeAltInt => 6,
            MavFrame::GlobalTerrainAlt => 10,
            MavFrame::Other(id) => id,
        }
    }

    /// Returns `true` if altitude is measured above mean sea level.
    #[inline]
    pub fn is_absolute(self) -> bool {
        matches!(self, MavFrame::Global | MavFrame::GlobalInt)
    }

    /// Returns `true` if altitude is measured relative to home.
    #[inline]
    pub fn is_relative(self) -> bool {
        matches!(self, MavFrame::GlobalRelativeAlt | MavFrame::GlobalRelativeAltInt)
    }
}

impl From<u8> for MavFrame {
    fn from(value: u8) -> Self {
        match value {
            0 => MavFrame::Global,
            2 => MavFrame::Mission,
            3 => MavFrame::GlobalRelativeAlt,
            5 => MavFrame::GlobalInt,
            6 => MavFrame::GlobalRelativeAltInt,
            10 => MavFrame::GlobalTerrainAlt,
            other => MavFrame::Other(other),
        }
    }
}
