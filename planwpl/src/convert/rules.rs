//! Command table: maps input command identifiers to packing functions and location policies.

use crate::conf::ConverterConf;
use crate::consts::{IMAGE_CAPTURE_INTERVAL, SPEED_TYPE_GROUND};
use crate::plan::MissionItem;
use crate::protocol::{MavCommand, StillCaptureMode};

use crate::prelude::*;

const PARAM_NAMES: [&str; 4] = ["param1", "param2", "param3", "param4"];

/// Packs mission item parameters into one or more output steps.
pub(super) type PackFn = fn(&Packing<'_>) -> Result<Vec<Step>>;

/// How the coordinate of an output record is obtained.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub(super) enum LocationPolicy {
    /// Item must define latitude, longitude, and altitude.
    Required,
    /// Like [`LocationPolicy::Required`], but altitude-only items are placed above home.
    PositionOrHome,
    /// Like [`LocationPolicy::Required`], but items without position stay at the last known one.
    PositionOrLastKnown,
    /// Item has no spatial meaning, coordinate is zero.
    Zero,
    /// `param5`..`param7` are copied verbatim.
    Raw,
}

/// Entry of the command table.
pub(super) struct CommandRule {
    pub(super) command: MavCommand,
    pub(super) pack: PackFn,
    pub(super) location: LocationPolicy,
}

/// Output command with packed parameters.
#[derive(Copy, Clone, Debug, PartialEq)]
pub(super) struct Step {
    pub(super) command: MavCommand,
    pub(super) params: [f64; 4],
}

/// Input for a [`PackFn`].
pub(super) struct Packing<'a> {
    pub(super) index: usize,
    pub(super) command: MavCommand,
    pub(super) item: &'a MissionItem,
    pub(super) conf: &'a ConverterConf,
}

static COMMAND_RULES: &[CommandRule] = &[
    CommandRule {
        command: MavCommand::NavWaypoint,
        pack: pack_waypoint,
        location: LocationPolicy::Required,
    },
    CommandRule {
        command: MavCommand::NavLoiterUnlim,
        pack: pack_loiter_unlim,
        location: LocationPolicy::Required,
    },
    CommandRule {
        command: MavCommand::NavLoiterTurns,
        pack: pack_loiter_limited,
        location: LocationPolicy::Required,
    },
    CommandRule {
        command: MavCommand::NavLoiterTime,
        pack: pack_loiter_limited,
        location: LocationPolicy::Required,
    },
    CommandRule {
        command: MavCommand::NavReturnToLaunch,
        pack: pack_return_to_launch,
        location: LocationPolicy::Zero,
    },
    CommandRule {
        command: MavCommand::NavLand,
        pack: pack_verbatim,
        location: LocationPolicy::PositionOrLastKnown,
    },
    CommandRule {
        command: MavCommand::NavTakeoff,
        pack: pack_verbatim,
        location: LocationPolicy::PositionOrHome,
    },
    CommandRule {
        command: MavCommand::NavDelay,
        pack: pack_delay,
        location: LocationPolicy::Zero,
    },
    CommandRule {
        command: MavCommand::ConditionDelay,
        pack: pack_delay,
        location: LocationPolicy::Zero,
    },
    CommandRule {
        command: MavCommand::DoChangeSpeed,
        pack: pack_change_speed,
        location: LocationPolicy::Zero,
    },
    CommandRule {
        command: MavCommand::DoSetRoi,
        pack: pack_verbatim,
        location: LocationPolicy::Required,
    },
    CommandRule {
        command: MavCommand::DoMountControl,
        pack: pack_verbatim,
        location: LocationPolicy::Raw,
    },
    CommandRule {
        command: MavCommand::DoSetCamTriggDist,
        pack: pack_camera_trigger_distance,
        location: LocationPolicy::Zero,
    },
    CommandRule {
        command: MavCommand::ImageStartCapture,
        pack: pack_image_start_capture,
        location: LocationPolicy::Zero,
    },
    CommandRule {
        command: MavCommand::ImageStopCapture,
        pack: pack_verbatim,
        location: LocationPolicy::Zero,
    },
    CommandRule {
        command: MavCommand::VideoStartCapture,
        pack: pack_verbatim,
        location: LocationPolicy::Zero,
    },
    CommandRule {
        command: MavCommand::VideoStopCapture,
        pack: pack_verbatim,
        location: LocationPolicy::Zero,
    },
    CommandRule {
        command: MavCommand::PanoramaCreate,
        pack: pack_verbatim,
        location: LocationPolicy::Zero,
    },
    CommandRule {
        command: MavCommand::SetViewMode,
        pack: pack_verbatim,
        location: LocationPolicy::Zero,
    },
    CommandRule {
        command: MavCommand::SetStillCaptureMode,
        pack: pack_verbatim,
        location: LocationPolicy::Zero,
    },
];

/// Finds a rule for a raw command identifier.
pub(super) fn lookup(command: u16) -> Option<&'static CommandRule> {
    COMMAND_RULES
        .iter()
        .find(|rule| rule.command.id() == command)
}

impl Step {
    pub(super) fn new(command: MavCommand, params: [f64; 4]) -> Self {
        Self { command, params }
    }
}

impl Packing<'_> {
    /// Parameter value or `0.0`.
    fn param(&self, n: usize) -> f64 {
        self.item.param(n).unwrap_or_default()
    }

    /// Parameter value or `default` if parameter is absent or zero.
    fn param_or(&self, n: usize, default: f64) -> f64 {
        match self.item.param(n) {
            Some(value) if value != 0.0 => value,
            _ => default,
        }
    }

    /// Parameter value that must be present.
    fn required(&self, n: usize) -> Result<f64> {
        self.item.param(n).ok_or_else(|| Error::InvalidParameter {
            index: self.index,
            item_type: self.command.name().to_string(),
            field: PARAM_NAMES[n - 1],
        })
    }

    fn single(&self, params: [f64; 4]) -> Result<Vec<Step>> {
        Ok(vec![Step::new(self.command, params)])
    }
}

fn pack_verbatim(p: &Packing<'_>) -> Result<Vec<Step>> {
    p.single([p.param(1), p.param(2), p.param(3), p.param(4)])
}

fn pack_waypoint(p: &Packing<'_>) -> Result<Vec<Step>> {
    p.single([
        p.param_or(1, p.conf.waypoint_time()),
        p.param_or(2, p.conf.waypoint_radius()),
        p.param(3),
        p.param(4),
    ])
}

fn pack_loiter_unlim(p: &Packing<'_>) -> Result<Vec<Step>> {
    p.single([0.0, 0.0, p.param_or(3, p.conf.loiter_radius()), p.param(4)])
}

// Negative radius means counter-clockwise loiter.
fn pack_loiter_limited(p: &Packing<'_>) -> Result<Vec<Step>> {
    p.single([
        p.required(1)?,
        p.param(2),
        p.param_or(3, p.conf.loiter_radius()),
        p.param(4),
    ])
}

fn pack_return_to_launch(p: &Packing<'_>) -> Result<Vec<Step>> {
    if p.conf.envelope() {
        return Ok(Vec::new());
    }
    p.single([0.0; 4])
}

fn pack_delay(p: &Packing<'_>) -> Result<Vec<Step>> {
    p.single([p.required(1)?, p.param(2), p.param(3), p.param(4)])
}

fn pack_change_speed(p: &Packing<'_>) -> Result<Vec<Step>> {
    p.single([
        p.param_or(1, SPEED_TYPE_GROUND),
        p.required(2)?,
        p.param(3),
        0.0,
    ])
}

fn pack_camera_trigger_distance(p: &Packing<'_>) -> Result<Vec<Step>> {
    let distance = p.required(1)?;

    if distance <= 0.0 {
        return Ok(vec![Step::new(MavCommand::ImageStopCapture, [0.0; 4])]);
    }

    Ok(vec![
        Step::new(
            MavCommand::SetStillCaptureMode,
            [StillCaptureMode::GpsPosition.value(), distance, 0.0, 0.0],
        ),
        Step::new(
            MavCommand::ImageStartCapture,
            [
                0.0,
                IMAGE_CAPTURE_INTERVAL,
                p.conf.image_format().value(),
                0.0,
            ],
        ),
    ])
}

fn pack_image_start_capture(p: &Packing<'_>) -> Result<Vec<Step>> {
    p.single([
        p.param(1),
        IMAGE_CAPTURE_INTERVAL,
        p.conf.image_format().value(),
        p.param(4),
    ])
}
