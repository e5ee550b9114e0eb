//! # Plan to waypoint list conversion
//!
//! Conversion is performed in three steps:
//!
//! 1. [`resolve_home`] picks the home position: explicit override, then the plan's planned home.
//! 1. [`convert`] maps mission items onto [`WaypointRecord`]s through a fixed command table.
//! 1. [`render`] serializes records into `QGC WPL 120` text.
//!
//! [`convert_to_wpl`] performs all three.
//!
//! # Usage
//!
//! ```rust
//! use planwpl::conf::ConverterConf;
//! use planwpl::convert::{convert, render, resolve_home};
//! use planwpl::plan::MissionDocument;
//!
//! let document = MissionDocument::from_json_str(r#"{
//!     "fileType": "Plan",
//!     "mission": {
//!         "plannedHomePosition": [33.30, -118.20, 0],
//!         "items": [
//!             {"type": "SimpleItem", "command": 16, "frame": 3,
//!              "params": [0, 0, 0, null, 33.301, -118.201, 50]}
//!         ]
//!     }
//! }"#).unwrap();
//!
//! let home = resolve_home(&document, None).unwrap();
//! let records = convert(&document, &home, &ConverterConf::default()).unwrap();
//! let text = render(&records);
//!
//! assert!(text.starts_with("QGC WPL 120\r\n0\t1\t3\t16\t"));
//! ```

mod converter;
mod envelope;
mod record;
mod render;
mod rules;

pub use converter::{convert, resolve_home};
pub use record::WaypointRecord;
pub use render::render;

use crate::conf::ConverterConf;
use crate::plan::{HomeOverride, MissionDocument};

use crate::prelude::*;

/// Converts mission document into `QGC WPL 120` text.
///
/// Shorthand for [`resolve_home`], [`convert`], and [`render`].
pub fn convert_to_wpl(
    document: &MissionDocument,
    home_override: Option<&HomeOverride>,
    conf: &ConverterConf,
) -> Result<String> {
    let home = resolve_home(document, home_override)?;
    let records = convert(document, &home, conf)?;
    Ok(render(&records))
}
