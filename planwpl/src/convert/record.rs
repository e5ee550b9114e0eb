use std::fmt::{Display, Formatter};

use crate::consts::{ALT_PRECISION, LAT_LON_PRECISION, PARAM_PRECISION, WPL_SEPARATOR};
use crate::protocol::MavFrame;

/// Single line of a `QGC WPL 120` waypoint list.
///
/// [`Display`] renders the record as a tab-separated line without line terminator:
///
/// ```text
/// seq  current  frame  command  param1  param2  param3  param4  lat  lon  alt  autocontinue
/// ```
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct WaypointRecord {
    /// Sequence number.
    pub seq: u16,
    /// Whether this is the current (starting) waypoint.
    pub current: bool,
    /// Coordinate frame.
    pub frame: MavFrame,
    /// MAVLink command identifier.
    pub command: u16,
    /// `param1`..`param4`.
    pub params: [f64; 4],
    /// Latitude (degrees).
    pub latitude: f64,
    /// Longitude (degrees).
    pub longitude: f64,
    /// Altitude (meters) in the record's frame.
    pub altitude: f64,
    /// Whether the autopilot continues to the next item automatically.
    pub autocontinue: bool,
}

impl Display for WaypointRecord {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        let sep = WPL_SEPARATOR;

        write!(
            f,
            "{}{sep}{}{sep}{}{sep}{}",
            self.seq,
            u8::from(self.current),
            self.frame.id(),
            self.command
        )?;
        for param in self.params {
            write!(f, "{sep}{}", fixed(param, PARAM_PRECISION))?;
        }
        write!(
            f,
            "{sep}{}{sep}{}{sep}{}{sep}{}",
            fixed(self.latitude, LAT_LON_PRECISION),
            fixed(self.longitude, LAT_LON_PRECISION),
            fixed(self.altitude, ALT_PRECISION),
            u8::from(self.autocontinue)
        )
    }
}

/// Fixed-point representation. Negative zero is printed as zero.
fn fixed(value: f64, precision: usize) -> String {
    format!("{:.*}", precision, value + 0.0)
}

#[cfg(test)]
mod record_tests {
    use super::*;

    #[test]
    fn record_line_layout() {
        let record = WaypointRecord {
            seq: 4,
            current: false,
            frame: MavFrame::GlobalRelativeAlt,
            command: 16,
            params: [1.0, 2.0, 0.0, -0.0],
            latitude: 33.301,
            longitude: -118.201,
            altitude: 50.0,
            autocontinue: true,
        };

        assert_eq!(
            record.to_string(),
            "4\t0\t3\t16\t1.000000\t2.000000\t0.000000\t0.000000\t\
             33.30100000\t-118.20100000\t50.000000\t1"
        );
    }

    #[test]
    fn fixed_precision_is_stable() {
        assert_eq!(fixed(-0.0, 2), "0.00");
        assert_eq!(fixed(1.0 / 3.0, 8), "0.33333333");
        assert_eq!(fixed(12.3456789, 2), "12.35");
    }
}
