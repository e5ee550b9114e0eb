use crate::conf::ConverterConf;
use crate::consts::{MAX_GIMBAL_ANGLE, MAX_SPEED, MIN_SPEED, OUTPUT_FRAME};
use crate::protocol::{ImageFormat, MavFrame};

use crate::prelude::*;

/// Builder for [`ConverterConf`].
///
/// Setters never fail, all options are validated by [`ConverterConfBuilder::build`].
#[derive(Clone, Debug, Default)]
pub struct ConverterConfBuilder {
    pub(crate) conf: ConverterConf,
}

impl ConverterConfBuilder {
    /// Creates a builder with default settings.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets coordinate frame of produced records.
    ///
    /// Only [`MavFrame::GlobalRelativeAlt`] is supported by the Anafi flight-plan runner, any
    /// other frame will be rejected by [`build`](Self::build).
    pub fn frame(mut self, frame: MavFrame) -> Self {
        self.conf.frame = frame;
        self
    }

    /// Sets default waypoint hold time.
    pub fn waypoint_time(mut self, seconds: f64) -> Self {
        self.conf.waypoint_time = seconds;
        self
    }

    /// Sets default waypoint acceptance radius.
    pub fn waypoint_radius(mut self, meters: f64) -> Self {
        self.conf.waypoint_radius = meters;
        self
    }

    /// Sets default loiter radius.
    pub fn loiter_radius(mut self, meters: f64) -> Self {
        self.conf.loiter_radius = meters;
        self
    }

    /// Sets takeoff speed.
    pub fn speed_takeoff(mut self, speed: f64) -> Self {
        self.conf.speed_takeoff = speed;
        self
    }

    /// Sets speed between waypoints.
    pub fn speed_flying(mut self, speed: f64) -> Self {
        self.conf.speed_flying = speed;
        self
    }

    /// Sets landing speed.
    pub fn speed_landing(mut self, speed: f64) -> Self {
        self.conf.speed_landing = speed;
        self
    }

    /// Sets image capture format.
    pub fn image_format(mut self, format: ImageFormat) -> Self {
        self.conf.image_format = format;
        self
    }

    /// Sets gimbal tilt.
    pub fn gimbal_angle(mut self, degrees: f64) -> Self {
        self.conf.gimbal_angle = degrees;
        self
    }

    /// Sets delay before takeoff.
    pub fn initial_wait(mut self, seconds: f64) -> Self {
        self.conf.initial_wait = seconds;
        self
    }

    /// Enables or disables yaw tracking.
    pub fn track_yaw(mut self, track_yaw: bool) -> Self {
        self.conf.track_yaw = track_yaw;
        self
    }

    /// Enables or disables the takeoff / return / landing envelope.
    pub fn envelope(mut self, envelope: bool) -> Self {
        self.conf.envelope = envelope;
        self
    }

    /// Sets altitude of home waypoints in the flight envelope.
    pub fn envelope_altitude(mut self, altitude: Option<f64>) -> Self {
        self.conf.envelope_altitude = altitude;
        self
    }

    /// Validates options and builds [`ConverterConf`].
    pub fn build(self) -> Result<ConverterConf> {
        let conf = self.conf;

        if conf.frame != OUTPUT_FRAME {
            return Err(Error::InvalidConf(format!(
                "frame {} is not supported, only {} (relative altitude) is allowed",
                conf.frame.id(),
                OUTPUT_FRAME.id()
            )));
        }

        for (name, speed) in [
            ("takeoff speed", conf.speed_takeoff),
            ("flying speed", conf.speed_flying),
            ("landing speed", conf.speed_landing),
        ] {
            if !(MIN_SPEED..=MAX_SPEED).contains(&speed) {
                return Err(Error::InvalidConf(format!(
                    "{name} {speed} is out of [{MIN_SPEED}, {MAX_SPEED}]"
                )));
            }
        }

        if !(-MAX_GIMBAL_ANGLE..=MAX_GIMBAL_ANGLE).contains(&conf.gimbal_angle) {
            return Err(Error::InvalidConf(format!(
                "gimbal angle {} is out of [-{MAX_GIMBAL_ANGLE}, {MAX_GIMBAL_ANGLE}]",
                conf.gimbal_angle
            )));
        }

        for (name, value) in [
            ("initial wait", conf.initial_wait),
            ("waypoint time", conf.waypoint_time),
            ("waypoint radius", conf.waypoint_radius),
        ] {
            if !value.is_finite() || value < 0.0 {
                return Err(Error::InvalidConf(format!(
                    "{name} must be non-negative and finite, got {value}"
                )));
            }
        }

        if !conf.loiter_radius.is_finite() || conf.loiter_radius <= 0.0 {
            return Err(Error::InvalidConf(format!(
                "loiter radius must be positive and finite, got {}",
                conf.loiter_radius
            )));
        }

        if let Some(altitude) = conf.envelope_altitude {
            if !altitude.is_finite() || altitude <= 0.0 {
                return Err(Error::InvalidConf(format!(
                    "envelope altitude must be positive and finite, got {altitude}"
                )));
            }
        }

        Ok(conf)
    }
}
