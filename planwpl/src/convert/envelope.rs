//! Flight envelope: takeoff sequence before mission items and return / landing sequence after them.
//!
//! The Anafi does not take off or land by itself when running a flight plan, so the converter
//! may wrap mission items into:
//!
//! 1. takeoff speed
//! 1. initial delay (if any)
//! 1. still capture mode
//! 1. gimbal tilt
//! 1. takeoff
//! 1. waypoint above home
//! 1. flying speed (if differs from takeoff speed)
//! 1. *mission items*
//! 1. waypoint above home
//! 1. landing speed (if differs from flying speed)
//! 1. land

use crate::conf::ConverterConf;
use crate::consts::SPEED_TYPE_GROUND;
use crate::convert::converter::{Draft, Position};
use crate::plan::HomePosition;
use crate::protocol::{MavCommand, MountMode, StillCaptureMode};

/// Wraps mission drafts into the flight envelope.
///
/// Home waypoints are placed at home latitude / longitude and the provided `altitude`. The
/// returning home waypoint gets `return_heading` as yaw.
pub(super) fn wrap(
    items: Vec<Draft>,
    home: &HomePosition,
    altitude: f64,
    return_heading: f64,
    conf: &ConverterConf,
) -> Vec<Draft> {
    let home_waypoint = Draft::new(
        MavCommand::NavWaypoint,
        [conf.waypoint_time(), conf.waypoint_radius(), 0.0, 0.0],
        Position::new(home.latitude, home.longitude, altitude),
    );
    let mut return_waypoint = home_waypoint;
    return_waypoint.params[3] = return_heading;

    let mut drafts = Vec::with_capacity(items.len() + 10);

    drafts.push(change_speed(conf.speed_takeoff()));
    if conf.initial_wait() > 0.0 {
        drafts.push(Draft::new(
            MavCommand::NavDelay,
            [conf.initial_wait(), 0.0, 0.0, 0.0],
            Position::ZERO,
        ));
    }
    drafts.push(Draft::new(
        MavCommand::SetStillCaptureMode,
        [
            StillCaptureMode::GpsPosition.value(),
            conf.waypoint_radius(),
            0.0,
            0.0,
        ],
        Position::ZERO,
    ));
    // Mount mode goes into `param7` which is the altitude column.
    drafts.push(Draft::new(
        MavCommand::DoMountControl,
        [conf.gimbal_angle(), 0.0, 0.0, 0.0],
        Position::new(0.0, 0.0, MountMode::MavlinkTargeting.value()),
    ));
    drafts.push(Draft::new(MavCommand::NavTakeoff, [0.0; 4], Position::ZERO));
    drafts.push(home_waypoint);
    if conf.speed_flying() != conf.speed_takeoff() {
        drafts.push(change_speed(conf.speed_flying()));
    }

    drafts.extend(items);

    drafts.push(return_waypoint);
    if conf.speed_landing() != conf.speed_flying() {
        drafts.push(change_speed(conf.speed_landing()));
    }
    drafts.push(Draft::new(MavCommand::NavLand, [0.0; 4], Position::ZERO));

    drafts
}

fn change_speed(speed: f64) -> Draft {
    Draft::new(
        MavCommand::DoChangeSpeed,
        [SPEED_TYPE_GROUND, speed, 0.0, 0.0],
        Position::ZERO,
    )
}

#[cfg(test)]
mod envelope_tests {
    use super::*;

    fn commands(drafts: &[Draft]) -> Vec<MavCommand> {
        drafts.iter().map(|draft| draft.command).collect()
    }

    #[test]
    fn full_envelope() {
        let conf = ConverterConf::builder()
            .speed_takeoff(3.0)
            .speed_flying(5.0)
            .speed_landing(2.0)
            .initial_wait(10.0)
            .build()
            .unwrap();
        let home = HomePosition::new(1.0, 2.0, 100.0);
        let item = Draft::new(
            MavCommand::NavWaypoint,
            [0.0; 4],
            Position::new(1.1, 2.1, 40.0),
        );

        let drafts = wrap(vec![item], &home, 40.0, 0.0, &conf);

        assert_eq!(
            commands(&drafts),
            vec![
                MavCommand::DoChangeSpeed,
                MavCommand::NavDelay,
                MavCommand::SetStillCaptureMode,
                MavCommand::DoMountControl,
                MavCommand::NavTakeoff,
                MavCommand::NavWaypoint,
                MavCommand::DoChangeSpeed,
                MavCommand::NavWaypoint,
                MavCommand::NavWaypoint,
                MavCommand::DoChangeSpeed,
                MavCommand::NavLand,
            ]
        );
        assert_eq!(drafts[0].params, [1.0, 3.0, 0.0, 0.0]);
        assert_eq!(drafts[1].params, [10.0, 0.0, 0.0, 0.0]);
        assert_eq!(drafts[3].params[0], -90.0);
        assert_eq!(drafts[3].position.altitude, 2.0);
        assert_eq!(drafts[5].position, Position::new(1.0, 2.0, 40.0));
        assert_eq!(drafts[5].params, [1.0, 2.0, 0.0, 0.0]);
        assert_eq!(drafts[6].params[1], 5.0);
        assert_eq!(drafts[8], drafts[5]);
        assert_eq!(drafts[9].params[1], 2.0);
    }

    #[test]
    fn return_waypoint_carries_heading() {
        let conf = ConverterConf::default();
        let home = HomePosition::new(1.0, 2.0, 100.0);

        let drafts = wrap(vec![], &home, 25.0, 135.0, &conf);
        let waypoints: Vec<&Draft> = drafts
            .iter()
            .filter(|draft| draft.command == MavCommand::NavWaypoint)
            .collect();

        assert_eq!(waypoints[0].params[3], 0.0);
        assert_eq!(waypoints[1].params[3], 135.0);
        assert_eq!(waypoints[0].position, waypoints[1].position);
    }

    #[test]
    fn conditional_records_are_skipped() {
        let conf = ConverterConf::builder()
            .speed_takeoff(3.0)
            .speed_flying(3.0)
            .speed_landing(3.0)
            .initial_wait(0.0)
            .build()
            .unwrap();
        let home = HomePosition::new(1.0, 2.0, 100.0);

        let drafts = wrap(vec![], &home, 25.0, 0.0, &conf);

        assert_eq!(
            commands(&drafts),
            vec![
                MavCommand::DoChangeSpeed,
                MavCommand::SetStillCaptureMode,
                MavCommand::DoMountControl,
                MavCommand::NavTakeoff,
                MavCommand::NavWaypoint,
                MavCommand::NavWaypoint,
                MavCommand::NavLand,
            ]
        );
    }
}
