//! # Planwpl errors
//!
//! Every error is fatal for a conversion run: there is no partial output and no retry. Variants carry
//! the position of the offending mission item (in the flattened item list) so the caller can report
//! precise messages.

use std::sync::Arc;

/// Common result type returned by `planwpl` functions and methods.
pub type Result<T> = core::result::Result<T, Error>;

/// `planwpl` top-level error.
#[derive(Debug, thiserror::Error, Clone)]
pub enum Error {
    /// Home position is neither provided explicitly nor embedded into the plan.
    #[error("no home position: set `plannedHomePosition` in the plan or provide a home override")]
    MissingHome,

    /// Mission item type is not present in the command table.
    #[error("mission item #{index}: unsupported item type `{item_type}`")]
    UnsupportedCommand {
        /// Index of the mission item.
        index: usize,
        /// Item type as it appears in the plan.
        item_type: String,
    },

    /// A required numeric field is missing and has no default.
    #[error("mission item #{index} ({item_type}): missing required field `{field}`")]
    InvalidParameter {
        /// Index of the mission item.
        index: usize,
        /// Item type as it appears in the plan.
        item_type: String,
        /// Name of the missing field.
        field: &'static str,
    },

    /// Mission item uses a coordinate frame that can't be mapped onto the output frame.
    #[error("mission item #{index}: unsupported coordinate frame {frame}")]
    UnsupportedFrame {
        /// Index of the mission item.
        index: usize,
        /// Raw MAVLink frame identifier.
        frame: u8,
    },

    /// Plan contains no mission items.
    #[error("mission is empty")]
    EmptyMission,

    /// Plan is structurally invalid.
    #[error("malformed plan: {0}")]
    MalformedDocument(String),

    /// Converter configuration is invalid.
    #[error("invalid configuration: {0}")]
    InvalidConf(String),

    /// I/O error at the file boundary.
    #[error("I/O error: {0:?}")]
    Io(#[from] Arc<std::io::Error>),
}

impl From<std::io::Error> for Error {
    fn from(value: std::io::Error) -> Self {
        Self::Io(Arc::new(value))
    }
}

impl From<serde_json::Error> for Error {
    fn from(value: serde_json::Error) -> Self {
        Self::MalformedDocument(value.to_string())
    }
}
