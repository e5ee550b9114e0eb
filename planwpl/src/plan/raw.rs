//! Wire representation of QGroundControl `.plan` files.
//!
//! Fields are optional where QGroundControl may omit them, so that structural problems are reported
//! as [`Error::MalformedDocument`] with a meaningful message instead of a generic decoding error.

use serde::Deserialize;

use crate::plan::{Coordinate, HomePosition, MissionDocument, MissionItem};
use crate::protocol::MavFrame;

use crate::prelude::*;

/// Number of entries in the `params` array of a simple item.
const PARAMS_LEN: usize = 7;

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(super) struct RawPlan {
    pub(super) file_type: Option<String>,
    mission: Option<RawMission>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct RawMission {
    items: Option<Vec<RawItem>>,
    planned_home_position: Option<Vec<Option<f64>>>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct RawItem {
    #[serde(rename = "type")]
    item_type: Option<String>,
    command: Option<u16>,
    frame: Option<u8>,
    params: Option<Vec<Option<f64>>>,
    complex_item_type: Option<String>,
    #[serde(rename = "TransectStyleComplexItem")]
    transect: Option<RawTransect>,
}

#[derive(Debug, Deserialize)]
struct RawTransect {
    #[serde(rename = "Items")]
    items: Option<Vec<RawItem>>,
}

impl TryFrom<RawPlan> for MissionDocument {
    type Error = Error;

    fn try_from(value: RawPlan) -> Result<Self> {
        let mission = value
            .mission
            .ok_or_else(|| Error::MalformedDocument("missing `mission` section".into()))?;
        let raw_items = mission
            .items
            .ok_or_else(|| Error::MalformedDocument("missing `mission.items` list".into()))?;

        let home = match mission.planned_home_position {
            None => None,
            Some(position) => Some(home_from_raw(&position)?),
        };

        let mut items = Vec::with_capacity(raw_items.len());
        for raw_item in raw_items {
            flatten_into(raw_item, &mut items)?;
        }

        Ok(MissionDocument::new(items, home))
    }
}

fn home_from_raw(position: &[Option<f64>]) -> Result<HomePosition> {
    match position {
        [Some(latitude), Some(longitude), Some(altitude)] => {
            Ok(HomePosition::new(*latitude, *longitude, *altitude))
        }
        _ => Err(Error::MalformedDocument(
            "`plannedHomePosition` must contain latitude, longitude, and altitude".into(),
        )),
    }
}

/// Appends a raw item to `items`, replacing transect-style complex items by their simple
/// sub-items.
fn flatten_into(raw_item: RawItem, items: &mut Vec<MissionItem>) -> Result<()> {
    if let Some(transect) = raw_item.transect {
        let index = items.len();
        let sub_items = transect.items.ok_or_else(|| {
            Error::MalformedDocument(format!(
                "complex item #{index} has no `TransectStyleComplexItem.Items` list"
            ))
        })?;
        for sub_item in sub_items {
            flatten_into(sub_item, items)?;
        }
        return Ok(());
    }

    let index = items.len();
    let Some(params) = raw_item.params else {
        let item_type = raw_item
            .complex_item_type
            .or(raw_item.item_type)
            .unwrap_or_else(|| "unknown".into());
        return Err(Error::UnsupportedCommand { index, item_type });
    };
    let command = raw_item.command.ok_or_else(|| {
        Error::MalformedDocument(format!("mission item #{index} has no `command`"))
    })?;
    if params.len() != PARAMS_LEN {
        return Err(Error::MalformedDocument(format!(
            "mission item #{index} has {} params, expected {PARAMS_LEN}",
            params.len()
        )));
    }

    let frame = MavFrame::from(raw_item.frame.unwrap_or(MavFrame::Mission.id()));
    items.push(
        MissionItem::new(command, frame)
            .with_params([params[0], params[1], params[2], params[3]])
            .with_coordinate(Coordinate {
                latitude: params[4],
                longitude: params[5],
                altitude: params[6],
            }),
    );

    Ok(())
}

#[cfg(test)]
mod raw_tests {
    use super::*;

    fn parse(json: &str) -> Result<MissionDocument> {
        let raw: RawPlan = serde_json::from_str(json)?;
        MissionDocument::try_from(raw)
    }

    #[test]
    fn simple_items_are_decoded() {
        let doc = parse(
            r#"{"fileType": "Plan", "mission": {
                "plannedHomePosition": [33.3, -118.2, 12.5],
                "items": [
                    {"type": "SimpleItem", "command": 16, "frame": 3, "autoContinue": true,
                     "params": [0, 0, 0, null, 33.301, -118.201, 50]}
                ]
            }}"#,
        )
        .unwrap();

        assert_eq!(doc.home(), Some(&HomePosition::new(33.3, -118.2, 12.5)));
        assert_eq!(doc.items().len(), 1);
        let item = &doc.items()[0];
        assert_eq!(item.command(), 16);
        assert_eq!(item.frame(), MavFrame::GlobalRelativeAlt);
        assert_eq!(item.params(), [Some(0.0), Some(0.0), Some(0.0), None]);
        assert_eq!(item.coordinate().latitude, Some(33.301));
        assert_eq!(item.coordinate().altitude, Some(50.0));
    }

    #[test]
    fn transect_items_are_flattened_in_order() {
        let doc = parse(
            r#"{"mission": {"items": [
                {"type": "SimpleItem", "command": 22, "frame": 3,
                 "params": [0, 0, 0, null, 0, 0, 30]},
                {"type": "ComplexItem", "complexItemType": "survey",
                 "TransectStyleComplexItem": {"Items": [
                    {"type": "SimpleItem", "command": 16, "frame": 3,
                     "params": [0, 0, 0, null, 1.0, 2.0, 30]},
                    {"type": "SimpleItem", "command": 206, "frame": 2,
                     "params": [25, 0, 1, 0, 0, 0, 0]}
                 ]}},
                {"type": "SimpleItem", "command": 20, "frame": 2,
                 "params": [0, 0, 0, 0, 0, 0, 0]}
            ]}}"#,
        )
        .unwrap();

        let commands: Vec<u16> = doc.items().iter().map(|item| item.command()).collect();
        assert_eq!(commands, vec![22, 16, 206, 20]);
        assert!(doc.home().is_none());
    }

    #[test]
    fn unsupported_complex_items_are_rejected() {
        let err = parse(
            r#"{"mission": {"items": [
                {"type": "SimpleItem", "command": 16, "params": [0, 0, 0, 0, 1, 2, 3]},
                {"type": "ComplexItem", "complexItemType": "StructureScan"}
            ]}}"#,
        )
        .unwrap_err();

        match err {
            Error::UnsupportedCommand { index, item_type } => {
                assert_eq!(index, 1);
                assert_eq!(item_type, "StructureScan");
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn structural_errors_are_malformed_document() {
        assert!(matches!(
            parse(r#"{"fileType": "Plan"}"#),
            Err(Error::MalformedDocument(_))
        ));
        assert!(matches!(
            parse(r#"{"mission": {}}"#),
            Err(Error::MalformedDocument(_))
        ));
        assert!(matches!(
            parse(r#"{"mission": {"items": [{"command": 16, "params": [0, 0, 0]}]}}"#),
            Err(Error::MalformedDocument(_))
        ));
        assert!(matches!(
            parse(r#"{"mission": {"items": [], "plannedHomePosition": [1.0, null, 0]}}"#),
            Err(Error::MalformedDocument(_))
        ));
        assert!(matches!(
            parse(r#"{"mission": {"items": "nope"}}"#),
            Err(Error::MalformedDocument(_))
        ));
    }
}
