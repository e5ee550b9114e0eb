//! # QGroundControl flight plans
//!
//! Decoding of `.plan` documents into [`MissionDocument`]. Complex items based on transects
//! (surveys, corridor scans) are flattened into their simple items during decoding.

mod document;
mod home;
mod raw;

pub use document::{Coordinate, MissionDocument, MissionItem};
pub use home::{HomeOverride, HomePosition};

use std::fs;
use std::path::Path;

use raw::RawPlan;

use crate::prelude::*;

/// Expected value of the `fileType` field.
const PLAN_FILE_TYPE: &str = "Plan";

impl MissionDocument {
    /// Decodes a mission document from `.plan` JSON.
    pub fn from_json_str(json: &str) -> Result<Self> {
        let raw: RawPlan = serde_json::from_str(json)?;

        match raw.file_type.as_deref() {
            Some(PLAN_FILE_TYPE) | None => {}
            Some(other) => log::warn!("unexpected plan file type `{other}`, trying anyway"),
        }

        MissionDocument::try_from(raw)
    }
}

/// Loads a mission document from a `.plan` file.
pub fn load_plan(path: &Path) -> Result<MissionDocument> {
    log::debug!("[{path:?}] reading plan");
    let json = fs::read_to_string(path)?;
    let document = MissionDocument::from_json_str(&json)?;
    log::debug!(
        "[{path:?}] {} mission items, planned home: {:?}",
        document.items().len(),
        document.home()
    );
    Ok(document)
}
