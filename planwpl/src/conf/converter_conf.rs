use crate::conf::ConverterConfBuilder;
use crate::consts::{
    DEFAULT_GIMBAL_ANGLE, DEFAULT_IMAGE_FORMAT, DEFAULT_INITIAL_WAIT, DEFAULT_LOITER_RADIUS,
    DEFAULT_SPEED_FLYING, DEFAULT_SPEED_LANDING, DEFAULT_SPEED_TAKEOFF, DEFAULT_WAYPOINT_RADIUS,
    DEFAULT_WAYPOINT_TIME, OUTPUT_FRAME,
};
use crate::protocol::{ImageFormat, MavFrame};

/// Converter configuration.
///
/// Configuration can be obtained either from [`ConverterConf::default`] or from
/// [`ConverterConfBuilder::build`]. Once created, it can be updated via [`ConverterConf::update`]
/// which turns it back into a [`ConverterConfBuilder`] populated with current settings.
///
/// # Usage
///
/// ```rust
/// use planwpl::conf::ConverterConf;
///
/// let conf = ConverterConf::builder()
///     .waypoint_radius(5.0)
///     .speed_flying(6.0)
///     .envelope(true)
///     .build()
///     .unwrap();
///
/// assert_eq!(conf.waypoint_radius(), 5.0);
/// assert!(conf.envelope());
/// ```
#[derive(Clone, Debug, PartialEq)]
pub struct ConverterConf {
    pub(crate) frame: MavFrame,
    pub(crate) waypoint_time: f64,
    pub(crate) waypoint_radius: f64,
    pub(crate) loiter_radius: f64,
    pub(crate) speed_takeoff: f64,
    pub(crate) speed_flying: f64,
    pub(crate) speed_landing: f64,
    pub(crate) image_format: ImageFormat,
    pub(crate) gimbal_angle: f64,
    pub(crate) initial_wait: f64,
    pub(crate) track_yaw: bool,
    pub(crate) envelope: bool,
    pub(crate) envelope_altitude: Option<f64>,
}

impl Default for ConverterConf {
    fn default() -> Self {
        Self {
            frame: OUTPUT_FRAME,
            waypoint_time: DEFAULT_WAYPOINT_TIME,
            waypoint_radius: DEFAULT_WAYPOINT_RADIUS,
            loiter_radius: DEFAULT_LOITER_RADIUS,
            speed_takeoff: DEFAULT_SPEED_TAKEOFF,
            speed_flying: DEFAULT_SPEED_FLYING,
            speed_landing: DEFAULT_SPEED_LANDING,
            image_format: DEFAULT_IMAGE_FORMAT,
            gimbal_angle: DEFAULT_GIMBAL_ANGLE,
            initial_wait: DEFAULT_INITIAL_WAIT,
            track_yaw: false,
            envelope: false,
            envelope_altitude: None,
        }
    }
}

impl ConverterConf {
    /// Creates a [`ConverterConfBuilder`] with default settings.
    pub fn builder() -> ConverterConfBuilder {
        ConverterConfBuilder::new()
    }

    /// Creates a [`ConverterConfBuilder`] initialised with current configuration.
    pub fn update(self) -> ConverterConfBuilder {
        ConverterConfBuilder { conf: self }
    }

    /// Coordinate frame of produced records.
    #[inline(always)]
    pub fn frame(&self) -> MavFrame {
        self.frame
    }

    /// Time to hold at waypoints that do not define one (seconds).
    #[inline(always)]
    pub fn waypoint_time(&self) -> f64 {
        self.waypoint_time
    }

    /// Acceptance radius for waypoints that do not define one (meters).
    #[inline(always)]
    pub fn waypoint_radius(&self) -> f64 {
        self.waypoint_radius
    }

    /// Radius for loiter items that do not define one (meters).
    #[inline(always)]
    pub fn loiter_radius(&self) -> f64 {
        self.loiter_radius
    }

    /// Takeoff speed (m/s).
    #[inline(always)]
    pub fn speed_takeoff(&self) -> f64 {
        self.speed_takeoff
    }

    /// Speed between waypoints (m/s).
    #[inline(always)]
    pub fn speed_flying(&self) -> f64 {
        self.speed_flying
    }

    /// Landing speed (m/s).
    #[inline(always)]
    pub fn speed_landing(&self) -> f64 {
        self.speed_landing
    }

    /// Image capture format.
    #[inline(always)]
    pub fn image_format(&self) -> ImageFormat {
        self.image_format
    }

    /// Gimbal tilt set before takeoff (degrees, negative is down).
    #[inline(always)]
    pub fn gimbal_angle(&self) -> f64 {
        self.gimbal_angle
    }

    /// Delay before takeoff (seconds).
    #[inline(always)]
    pub fn initial_wait(&self) -> f64 {
        self.initial_wait
    }

    /// Whether waypoint yaw follows the flight path.
    ///
    /// When disabled, waypoints keep yaw from the plan.
    #[inline(always)]
    pub fn track_yaw(&self) -> bool {
        self.track_yaw
    }

    /// Whether mission is wrapped into takeoff / return / landing sequence.
    #[inline(always)]
    pub fn envelope(&self) -> bool {
        self.envelope
    }

    /// Altitude of home waypoints in the flight envelope.
    ///
    /// If not set, altitude of the first mission waypoint is used.
    #[inline(always)]
    pub fn envelope_altitude(&self) -> Option<f64> {
        self.envelope_altitude
    }
}
