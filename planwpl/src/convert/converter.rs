use crate::conf::ConverterConf;
use crate::convert::envelope;
use crate::convert::rules::{self, CommandRule, LocationPolicy, Packing, Step};
use crate::convert::WaypointRecord;
use crate::plan::{HomeOverride, HomePosition, MissionDocument, MissionItem};
use crate::protocol::{MavCommand, MavFrame};

use crate::prelude::*;

/// Resolved coordinate of an output record in the output frame.
#[derive(Copy, Clone, Debug, PartialEq)]
pub(super) struct Position {
    pub(super) latitude: f64,
    pub(super) longitude: f64,
    pub(super) altitude: f64,
}

/// Output record before sequence numbering.
#[derive(Copy, Clone, Debug, PartialEq)]
pub(super) struct Draft {
    pub(super) command: MavCommand,
    pub(super) params: [f64; 4],
    pub(super) position: Position,
}

/// Mapping pass state.
struct Converter<'a> {
    home: &'a HomePosition,
    conf: &'a ConverterConf,
    drafts: Vec<Draft>,
    last_known: Option<Position>,
    previous_waypoint: Option<Position>,
    first_waypoint_altitude: Option<f64>,
}

/// Resolves home position.
///
/// Explicit override takes precedence over the home position embedded into the plan. If override
/// does not define altitude, the altitude of embedded home is used (or `0.0` if the plan has no
/// home). Fails with [`Error::MissingHome`] if neither is available.
pub fn resolve_home(
    document: &MissionDocument,
    home_override: Option<&HomeOverride>,
) -> Result<HomePosition> {
    match (home_override, document.home()) {
        (Some(home), embedded) => Ok(HomePosition::new(
            home.latitude,
            home.longitude,
            home.altitude
                .or(embedded.map(|embedded| embedded.altitude))
                .unwrap_or_default(),
        )),
        (None, Some(embedded)) => Ok(*embedded),
        (None, None) => Err(Error::MissingHome),
    }
}

/// Converts mission document into waypoint records.
///
/// Records are numbered contiguously from `0` in plan order, the first record is marked as
/// current. All records share the frame from [`ConverterConf::frame`]. The document is not
/// modified.
///
/// # Errors
///
/// * [`Error::EmptyMission`] if the document has no items.
/// * [`Error::UnsupportedCommand`] if an item command is not in the command table.
/// * [`Error::InvalidParameter`] if a required parameter or coordinate is missing.
/// * [`Error::UnsupportedFrame`] if item altitude can't be expressed relative to home.
/// * [`Error::MalformedDocument`] if the flight envelope altitude can't be derived.
pub fn convert(
    document: &MissionDocument,
    home: &HomePosition,
    conf: &ConverterConf,
) -> Result<Vec<WaypointRecord>> {
    if document.is_empty() {
        return Err(Error::EmptyMission);
    }

    let mut converter = Converter::new(home, conf);
    for (index, item) in document.items().iter().enumerate() {
        converter.push_item(index, item)?;
    }

    let drafts = if conf.envelope() {
        let altitude = conf
            .envelope_altitude()
            .or(converter.first_waypoint_altitude)
            .ok_or_else(|| {
                Error::MalformedDocument(
                    "plan has no waypoints to take envelope altitude from".into(),
                )
            })?;
        let return_heading = match converter.previous_waypoint {
            Some(previous) if conf.track_yaw() => {
                heading(previous, Position::new(home.latitude, home.longitude, altitude))
            }
            _ => 0.0,
        };
        envelope::wrap(converter.drafts, home, altitude, return_heading, conf)
    } else {
        converter.drafts
    };

    number(drafts, conf.frame())
}

fn number(drafts: Vec<Draft>, frame: MavFrame) -> Result<Vec<WaypointRecord>> {
    drafts
        .into_iter()
        .enumerate()
        .map(|(seq, draft)| {
            let seq = u16::try_from(seq).map_err(|_| {
                Error::MalformedDocument(format!("mission exceeds {} records", u16::MAX))
            })?;
            Ok(WaypointRecord {
                seq,
                current: seq == 0,
                frame,
                command: draft.command.id(),
                params: draft.params,
                latitude: draft.position.latitude,
                longitude: draft.position.longitude,
                altitude: draft.position.altitude,
                autocontinue: true,
            })
        })
        .collect()
}

impl Position {
    pub(super) const ZERO: Position = Position::new(0.0, 0.0, 0.0);

    pub(super) const fn new(latitude: f64, longitude: f64, altitude: f64) -> Self {
        Self {
            latitude,
            longitude,
            altitude,
        }
    }
}

impl Draft {
    pub(super) fn new(command: MavCommand, params: [f64; 4], position: Position) -> Self {
        Self {
            command,
            params,
            position,
        }
    }
}

impl<'a> Converter<'a> {
    fn new(home: &'a HomePosition, conf: &'a ConverterConf) -> Self {
        Self {
            home,
            conf,
            drafts: Vec::new(),
            last_known: None,
            // With the envelope the drone reaches the first waypoint from above home.
            previous_waypoint: conf
                .envelope()
                .then(|| Position::new(home.latitude, home.longitude, 0.0)),
            first_waypoint_altitude: None,
        }
    }

    fn push_item(&mut self, index: usize, item: &MissionItem) -> Result<()> {
        let rule = rules::lookup(item.command()).ok_or_else(|| Error::UnsupportedCommand {
            index,
            item_type: format!("command {}", item.command()),
        })?;

        let steps = (rule.pack)(&Packing {
            index,
            command: rule.command,
            item,
            conf: self.conf,
        })?;
        if steps.is_empty() {
            return Ok(());
        }

        let position = self.locate(index, item, rule)?;
        for mut step in steps {
            if step.command == MavCommand::NavWaypoint {
                self.track_waypoint(&mut step, position);
            }
            self.drafts
                .push(Draft::new(step.command, step.params, position));
        }

        Ok(())
    }

    fn track_waypoint(&mut self, step: &mut Step, position: Position) {
        self.first_waypoint_altitude.get_or_insert(position.altitude);

        if self.conf.track_yaw() {
            step.params[3] = self
                .previous_waypoint
                .map_or(0.0, |previous| heading(previous, position));
        }
        self.previous_waypoint = Some(position);
    }

    fn locate(&mut self, index: usize, item: &MissionItem, rule: &CommandRule) -> Result<Position> {
        let coordinate = item.coordinate();

        let position = match rule.location {
            LocationPolicy::Zero => return Ok(Position::ZERO),
            LocationPolicy::Raw => {
                return Ok(Position::new(
                    coordinate.latitude.unwrap_or_default(),
                    coordinate.longitude.unwrap_or_default(),
                    coordinate.altitude.unwrap_or_default(),
                ))
            }
            LocationPolicy::PositionOrHome if coordinate.has_no_position() => Position::new(
                self.home.latitude,
                self.home.longitude,
                self.relative_altitude(index, item, rule.command)?,
            ),
            LocationPolicy::PositionOrLastKnown if coordinate.has_no_position() => {
                let last = self
                    .last_known
                    .unwrap_or(Position::new(self.home.latitude, self.home.longitude, 0.0));
                let altitude = match coordinate.altitude {
                    Some(_) => self.relative_altitude(index, item, rule.command)?,
                    None => last.altitude,
                };
                Position::new(last.latitude, last.longitude, altitude)
            }
            LocationPolicy::Required
            | LocationPolicy::PositionOrHome
            | LocationPolicy::PositionOrLastKnown => Position::new(
                coordinate
                    .latitude
                    .ok_or_else(|| missing(index, rule.command, "latitude"))?,
                coordinate
                    .longitude
                    .ok_or_else(|| missing(index, rule.command, "longitude"))?,
                self.relative_altitude(index, item, rule.command)?,
            ),
        };

        self.last_known = Some(position);
        Ok(position)
    }

    /// Item altitude relative to home.
    fn relative_altitude(&self, index: usize, item: &MissionItem, command: MavCommand) -> Result<f64> {
        let frame = item.frame();
        let altitude = item
            .coordinate()
            .altitude
            .ok_or_else(|| missing(index, command, "altitude"))?;

        if frame.is_relative() {
            Ok(altitude)
        } else if frame.is_absolute() {
            Ok(altitude - self.home.altitude)
        } else {
            Err(Error::UnsupportedFrame {
                index,
                frame: frame.id(),
            })
        }
    }
}

fn missing(index: usize, command: MavCommand, field: &'static str) -> Error {
    Error::InvalidParameter {
        index,
        item_type: command.name().to_string(),
        field,
    }
}

/// Heading from one position to another in degrees clockwise from north, `[0, 360)`.
///
/// Uses equirectangular approximation which is accurate enough for waypoints of a single flight.
fn heading(from: Position, to: Position) -> f64 {
    let mean_latitude = ((from.latitude + to.latitude) / 2.0).to_radians();
    let east = (to.longitude - from.longitude) * mean_latitude.cos();
    let north = to.latitude - from.latitude;

    if east == 0.0 && north == 0.0 {
        return 0.0;
    }

    let heading = east.atan2(north).to_degrees().rem_euclid(360.0);
    if heading >= 360.0 {
        0.0
    } else {
        heading
    }
}

#[cfg(test)]
mod converter_tests {
    use super::*;

    use crate::plan::Coordinate;

    fn home() -> HomePosition {
        HomePosition::new(33.30, -118.20, 10.0)
    }

    fn waypoint(latitude: f64, longitude: f64, altitude: f64) -> MissionItem {
        MissionItem::new(MavCommand::NavWaypoint.id(), MavFrame::GlobalRelativeAlt)
            .with_params([Some(0.0), Some(0.0), Some(0.0), None])
            .with_coordinate(Coordinate::new(latitude, longitude, altitude))
    }

    fn document(items: Vec<MissionItem>) -> MissionDocument {
        MissionDocument::new(items, Some(home()))
    }

    #[test]
    fn home_resolution_precedence() {
        let with_home = document(vec![]);
        let without_home = MissionDocument::new(vec![], None);
        let full_override = HomeOverride::new(1.0, 2.0, Some(3.0));
        let partial_override = HomeOverride::new(1.0, 2.0, None);

        assert_eq!(
            resolve_home(&with_home, Some(&full_override)).unwrap(),
            HomePosition::new(1.0, 2.0, 3.0)
        );
        assert_eq!(
            resolve_home(&with_home, Some(&partial_override)).unwrap(),
            HomePosition::new(1.0, 2.0, 10.0)
        );
        assert_eq!(
            resolve_home(&without_home, Some(&partial_override)).unwrap(),
            HomePosition::new(1.0, 2.0, 0.0)
        );
        assert_eq!(resolve_home(&with_home, None).unwrap(), home());
        assert!(matches!(
            resolve_home(&without_home, None),
            Err(Error::MissingHome)
        ));
    }

    #[test]
    fn absolute_altitude_is_converted_to_relative() {
        let item = MissionItem::new(MavCommand::NavWaypoint.id(), MavFrame::Global)
            .with_coordinate(Coordinate::new(33.301, -118.201, 60.0));

        let records = convert(&document(vec![item]), &home(), &ConverterConf::default()).unwrap();

        assert_eq!(records[0].altitude, 50.0);
        assert_eq!(records[0].frame, MavFrame::GlobalRelativeAlt);
    }

    #[test]
    fn terrain_frame_is_rejected() {
        let item = MissionItem::new(MavCommand::NavWaypoint.id(), MavFrame::GlobalTerrainAlt)
            .with_coordinate(Coordinate::new(33.301, -118.201, 60.0));

        assert!(matches!(
            convert(
                &document(vec![waypoint(33.3, -118.2, 5.0), item]),
                &home(),
                &ConverterConf::default()
            ),
            Err(Error::UnsupportedFrame { index: 1, frame: 10 })
        ));
    }

    #[test]
    fn partial_coordinates_are_rejected() {
        let item = MissionItem::new(MavCommand::NavWaypoint.id(), MavFrame::GlobalRelativeAlt)
            .with_coordinate(Coordinate {
                latitude: Some(33.3),
                longitude: None,
                altitude: Some(20.0),
            });

        assert!(matches!(
            convert(&document(vec![item]), &home(), &ConverterConf::default()),
            Err(Error::InvalidParameter {
                index: 0,
                field: "longitude",
                ..
            })
        ));
    }

    #[test]
    fn altitude_only_takeoff_is_placed_above_home() {
        let takeoff = MissionItem::new(MavCommand::NavTakeoff.id(), MavFrame::GlobalRelativeAlt)
            .with_coordinate(Coordinate::altitude_only(30.0));

        let records =
            convert(&document(vec![takeoff]), &home(), &ConverterConf::default()).unwrap();

        assert_eq!(records[0].command, 22);
        assert_eq!(
            (records[0].latitude, records[0].longitude, records[0].altitude),
            (33.30, -118.20, 30.0)
        );
    }

    #[test]
    fn land_without_position_stays_at_last_known() {
        let land = MissionItem::new(MavCommand::NavLand.id(), MavFrame::GlobalRelativeAlt)
            .with_coordinate(Coordinate::altitude_only(0.0));
        let delay = MissionItem::new(MavCommand::ConditionDelay.id(), MavFrame::Mission)
            .with_params([Some(5.0), None, None, None]);

        let records = convert(
            &document(vec![waypoint(33.31, -118.21, 40.0), delay, land]),
            &home(),
            &ConverterConf::default(),
        )
        .unwrap();

        assert_eq!((records[1].latitude, records[1].altitude), (0.0, 0.0));
        assert_eq!(
            (records[2].latitude, records[2].longitude, records[2].altitude),
            (33.31, -118.21, 0.0)
        );
    }

    #[test]
    fn mount_control_keeps_raw_location_params() {
        let mount = MissionItem::new(MavCommand::DoMountControl.id(), MavFrame::Mission)
            .with_params([Some(-45.0), Some(0.0), Some(0.0), None])
            .with_coordinate(Coordinate {
                latitude: Some(0.0),
                longitude: None,
                altitude: Some(2.0),
            });

        let records = convert(&document(vec![mount]), &home(), &ConverterConf::default()).unwrap();

        assert_eq!(records[0].params, [-45.0, 0.0, 0.0, 0.0]);
        assert_eq!(records[0].altitude, 2.0);
    }

    #[test]
    fn yaw_tracking_follows_path() {
        let conf = ConverterConf::builder().track_yaw(true).build().unwrap();
        let records = convert(
            &document(vec![
                waypoint(0.0, 0.0, 10.0),
                waypoint(0.001, 0.0, 10.0),
                waypoint(0.001, 0.001, 10.0),
                waypoint(0.0, 0.001, 10.0),
                waypoint(0.0, 0.0, 10.0),
            ]),
            &home(),
            &conf,
        )
        .unwrap();

        let headings: Vec<f64> = records.iter().map(|r| r.params[3].round()).collect();
        assert_eq!(headings, vec![0.0, 0.0, 90.0, 180.0, 270.0]);
    }

    #[test]
    fn yaw_tracking_covers_envelope_home_legs() {
        let conf = ConverterConf::builder()
            .track_yaw(true)
            .envelope(true)
            .build()
            .unwrap();
        let records = convert(
            &document(vec![
                waypoint(33.301, -118.20, 20.0),
                waypoint(33.301, -118.199, 20.0),
            ]),
            &home(),
            &conf,
        )
        .unwrap();

        let waypoints: Vec<&WaypointRecord> = records
            .iter()
            .filter(|record| record.command == MavCommand::NavWaypoint.id())
            .collect();
        assert_eq!(waypoints.len(), 4);

        // Takeoff waypoint above home.
        assert_eq!(waypoints[0].params[3], 0.0);
        // Home to the first waypoint goes north.
        assert_eq!(waypoints[1].params[3].round(), 0.0);
        assert_eq!(waypoints[2].params[3].round(), 90.0);

        // Return leg goes south-west back to home.
        let return_heading = waypoints[3].params[3];
        assert!(
            (180.0..270.0).contains(&return_heading),
            "return heading {return_heading}"
        );
        assert_eq!(
            (waypoints[3].latitude, waypoints[3].longitude),
            (33.30, -118.20)
        );
    }

    #[test]
    fn return_heading_is_zero_without_yaw_tracking() {
        let conf = ConverterConf::builder().envelope(true).build().unwrap();
        let records = convert(
            &document(vec![waypoint(33.301, -118.199, 20.0)]),
            &home(),
            &conf,
        )
        .unwrap();

        assert!(records
            .iter()
            .filter(|record| record.command == MavCommand::NavWaypoint.id())
            .all(|record| record.params[3] == 0.0));
    }

    #[test]
    fn heading_of_same_point_is_zero() {
        let point = Position::new(12.0, 34.0, 0.0);
        assert_eq!(heading(point, point), 0.0);
    }
}
