//! # Planwpl
//!
//! Converts [QGroundControl](https://docs.qgroundcontrol.com/) `.plan` flight plans into
//! [`QGC WPL 120`](https://mavlink.io/en/file_formats/#mission_plain_text_file) waypoint lists
//! accepted by MAVLink autopilots through the mission protocol. The produced lists target the
//! [Parrot Anafi](https://developer.parrot.com/docs/mavlink-flightplan/overview.html) flight-plan
//! runner which has its own set of vendor commands and supports only relative altitudes.
//!
//! Conversion is a single pass over the plan:
//!
//! * [`plan`] decodes `.plan` JSON into a [`MissionDocument`](plan::MissionDocument).
//! * [`convert`] resolves home position, maps mission items onto
//!   [`WaypointRecord`](convert::WaypointRecord)s, and renders them as text.
//! * [`conf`] defines converter options and their defaults.
//!
//! The library never performs I/O or logging inside the conversion itself. All failures are
//! reported through [`Error`](errors::Error).
//!
//! # Usage
//!
//! ```rust
//! use planwpl::conf::ConverterConf;
//! use planwpl::convert::convert_to_wpl;
//! use planwpl::plan::{HomeOverride, MissionDocument};
//!
//! let document = MissionDocument::from_json_str(r#"{
//!     "mission": {
//!         "items": [
//!             {"type": "SimpleItem", "command": 22, "frame": 3,
//!              "params": [0, 0, 0, null, 0, 0, 30]},
//!             {"type": "SimpleItem", "command": 16, "frame": 3,
//!              "params": [0, 0, 0, null, 48.8790, 2.3677, 30]}
//!         ]
//!     }
//! }"#).unwrap();
//!
//! let home: HomeOverride = "48.8785,2.3670".parse().unwrap();
//! let conf = ConverterConf::builder().envelope(true).build().unwrap();
//!
//! let wpl = convert_to_wpl(&document, Some(&home), &conf).unwrap();
//! assert!(wpl.starts_with("QGC WPL 120"));
//! ```
//!
//! # Feature flags
#![doc = document_features::document_features!()]
#![warn(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]

pub mod conf;
pub mod consts;
pub mod convert;
pub mod errors;
pub mod plan;
pub mod prelude;
pub mod protocol;

mod utils;
