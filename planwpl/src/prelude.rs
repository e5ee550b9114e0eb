//! # Basic imports

pub use crate::errors::{Error, Result};

pub use crate::conf::ConverterConf;
pub use crate::convert::{convert, convert_to_wpl, render, resolve_home, WaypointRecord};
pub use crate::plan::{HomeOverride, HomePosition, MissionDocument, MissionItem};
