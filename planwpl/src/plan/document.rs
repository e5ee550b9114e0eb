use crate::plan::HomePosition;
use crate::protocol::MavFrame;

/// Parsed flight plan.
///
/// Holds mission items in plan order (complex items already flattened) and an optional planned
/// home position. The document is never modified by the converter.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct MissionDocument {
    items: Vec<MissionItem>,
    home: Option<HomePosition>,
}

/// Single mission item of a [`MissionDocument`].
///
/// All numeric fields are optional since QGroundControl writes `null` for parameters that are not
/// set. Interpretation of parameters depends on the [`command`](MissionItem::command).
#[derive(Clone, Debug, PartialEq)]
pub struct MissionItem {
    command: u16,
    frame: MavFrame,
    params: [Option<f64>; 4],
    coordinate: Coordinate,
}

/// Possibly incomplete geographic coordinate of a mission item.
#[derive(Copy, Clone, Debug, Default, PartialEq)]
pub struct Coordinate {
    /// Latitude (degrees).
    pub latitude: Option<f64>,
    /// Longitude (degrees).
    pub longitude: Option<f64>,
    /// Altitude (meters) in the item's frame.
    pub altitude: Option<f64>,
}

impl MissionDocument {
    /// Creates a document from mission items and an optional planned home position.
    pub fn new(items: Vec<MissionItem>, home: Option<HomePosition>) -> Self {
        Self { items, home }
    }

    /// Mission items in plan order.
    #[inline]
    pub fn items(&self) -> &[MissionItem] {
        self.items.as_slice()
    }

    /// Planned home position embedded into the plan.
    #[inline]
    pub fn home(&self) -> Option<&HomePosition> {
        self.home.as_ref()
    }

    /// Returns `true` if the document has no mission items.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

impl MissionItem {
    /// Creates a mission item without parameters and coordinate.
    pub fn new(command: u16, frame: MavFrame) -> Self {
        Self {
            command,
            frame,
            params: [None; 4],
            coordinate: Coordinate::default(),
        }
    }

    /// Sets `param1`..`param4`.
    pub fn with_params(mut self, params: [Option<f64>; 4]) -> Self {
        self.params = params;
        self
    }

    /// Sets coordinate.
    pub fn with_coordinate(mut self, coordinate: Coordinate) -> Self {
        self.coordinate = coordinate;
        self
    }

    /// Raw MAVLink command identifier.
    #[inline(always)]
    pub fn command(&self) -> u16 {
        self.command
    }

    /// Coordinate frame of the item.
    #[inline(always)]
    pub fn frame(&self) -> MavFrame {
        self.frame
    }

    /// Parameters `param1`..`param4`.
    #[inline(always)]
    pub fn params(&self) -> [Option<f64>; 4] {
        self.params
    }

    /// Parameter by its 1-based MAVLink position.
    ///
    /// Returns [`None`] if the parameter is not set or `n` is out of `1..=4`.
    pub fn param(&self, n: usize) -> Option<f64> {
        n.checked_sub(1)
            .and_then(|i| self.params.get(i))
            .copied()
            .flatten()
    }

    /// Item coordinate.
    #[inline(always)]
    pub fn coordinate(&self) -> Coordinate {
        self.coordinate
    }
}

impl Coordinate {
    /// Creates a fully defined coordinate.
    pub fn new(latitude: f64, longitude: f64, altitude: f64) -> Self {
        Self {
            latitude: Some(latitude),
            longitude: Some(longitude),
            altitude: Some(altitude),
        }
    }

    /// Creates a coordinate that only defines altitude.
    pub fn altitude_only(altitude: f64) -> Self {
        Self {
            altitude: Some(altitude),
            ..Default::default()
        }
    }

    /// Returns `true` if neither latitude nor longitude carry a position.
    ///
    /// QGroundControl writes `0, 0` for items that only define altitude.
    pub fn has_no_position(&self) -> bool {
        let unset = |value: Option<f64>| value.map_or(true, |v| v == 0.0);
        unset(self.latitude) && unset(self.longitude)
    }
}
