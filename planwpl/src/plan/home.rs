use std::str::FromStr;

use crate::prelude::*;

/// Home position: reference for home-relative coordinates.
///
/// Altitude is measured above mean sea level.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct HomePosition {
    /// Latitude (degrees).
    pub latitude: f64,
    /// Longitude (degrees).
    pub longitude: f64,
    /// Altitude (meters).
    pub altitude: f64,
}

/// Explicit home position provided by the caller.
///
/// Parsed from `"lat,lon"` or `"lat,lon,alt"`. When altitude is omitted, it will be taken from the
/// plan's home position (or `0.0` if the plan has none).
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct HomeOverride {
    /// Latitude (degrees).
    pub latitude: f64,
    /// Longitude (degrees).
    pub longitude: f64,
    /// Optional altitude (meters).
    pub altitude: Option<f64>,
}

impl HomePosition {
    /// Creates a new home position.
    pub fn new(latitude: f64, longitude: f64, altitude: f64) -> Self {
        Self {
            latitude,
            longitude,
            altitude,
        }
    }
}

impl HomeOverride {
    /// Creates a home override.
    pub fn new(latitude: f64, longitude: f64, altitude: Option<f64>) -> Self {
        Self {
            latitude,
            longitude,
            altitude,
        }
    }
}

impl FromStr for HomeOverride {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        let invalid = || Error::InvalidConf(format!("invalid home `{s}`, expected `lat,lon[,alt]`"));

        let values = s
            .trim()
            .trim_matches(|c| c == '"' || c == '\'')
            .split(',')
            .map(|value| match value.trim().parse::<f64>() {
                Ok(value) if value.is_finite() => Ok(value),
                _ => Err(invalid()),
            })
            .collect::<Result<Vec<_>>>()?;

        let home = match values.as_slice() {
            [latitude, longitude] => HomeOverride::new(*latitude, *longitude, None),
            [latitude, longitude, altitude] => {
                HomeOverride::new(*latitude, *longitude, Some(*altitude))
            }
            _ => return Err(invalid()),
        };

        if !(-90.0..=90.0).contains(&home.latitude) || !(-180.0..=180.0).contains(&home.longitude)
        {
            return Err(Error::InvalidConf(format!(
                "home `{s}` is out of latitude/longitude range"
            )));
        }

        Ok(home)
    }
}
