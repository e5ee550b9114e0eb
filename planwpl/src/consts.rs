//! Common constants.

use crate::protocol::{ImageFormat, MavFrame};

/// Header token of the produced waypoint list.
pub const WPL_HEADER: &str = "QGC WPL 120";
/// Line terminator of the produced waypoint list.
pub const WPL_LINE_ENDING: &str = "\r\n";
/// Column separator of the produced waypoint list.
pub const WPL_SEPARATOR: char = '\t';

/// Decimal places for `param1`..`param4`.
pub const PARAM_PRECISION: usize = 6;
/// Decimal places for latitude and longitude.
pub const LAT_LON_PRECISION: usize = 8;
/// Decimal places for altitude.
pub const ALT_PRECISION: usize = 6;

/// The only coordinate frame supported by the Anafi flight-plan runner.
pub const OUTPUT_FRAME: MavFrame = MavFrame::GlobalRelativeAlt;

/// Default time to hold at each waypoint (seconds).
pub const DEFAULT_WAYPOINT_TIME: f64 = 1.0;
/// Default waypoint acceptance radius (meters).
pub const DEFAULT_WAYPOINT_RADIUS: f64 = 2.0;
/// Default loiter radius (meters).
pub const DEFAULT_LOITER_RADIUS: f64 = 10.0;
/// Default takeoff speed (m/s).
pub const DEFAULT_SPEED_TAKEOFF: f64 = 3.0;
/// Default cruise speed between waypoints (m/s).
pub const DEFAULT_SPEED_FLYING: f64 = 3.0;
/// Default landing speed (m/s).
pub const DEFAULT_SPEED_LANDING: f64 = 2.0;
/// Default image capture format.
pub const DEFAULT_IMAGE_FORMAT: ImageFormat = ImageFormat::Jpeg;
/// Default gimbal tilt (degrees, negative is down).
pub const DEFAULT_GIMBAL_ANGLE: f64 = -90.0;
/// Default delay before takeoff (seconds).
pub const DEFAULT_INITIAL_WAIT: f64 = 20.0;

/// Minimum speed accepted by the autopilot (m/s).
pub const MIN_SPEED: f64 = 1.0;
/// Maximum speed accepted by the autopilot (m/s).
pub const MAX_SPEED: f64 = 10.0;
/// Gimbal tilt limit in both directions (degrees).
pub const MAX_GIMBAL_ANGLE: f64 = 90.0;

/// Speed type used in `DO_CHANGE_SPEED` (ground speed).
pub const SPEED_TYPE_GROUND: f64 = 1.0;
/// Capture interval written into `IMAGE_START_CAPTURE`.
pub const IMAGE_CAPTURE_INTERVAL: f64 = 1.0;
