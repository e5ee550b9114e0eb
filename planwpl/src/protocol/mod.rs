//! MAVLink protocol entities.
//!
//! Only the subset of MAVLink used by Anafi flight plans is defined here. Vendor-specific commands
//! follow the [Parrot flight plan](https://developer.parrot.com/docs/mavlink-flightplan/messages.html)
//! documentation.

mod command;
mod frame;
mod options;

pub use command::MavCommand;
pub use frame::MavFrame;
pub use options::{ImageFormat, MountMode, StillCaptureMode};
