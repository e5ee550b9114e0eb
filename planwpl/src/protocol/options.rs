use std::str::FromStr;

use crate::errors::Error;

/// Image format for `IMAGE_START_CAPTURE` (Parrot).
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub enum ImageFormat {
    /// Snapshot.
    Snapshot,
    /// JPEG rectilinear (default).
    #[default]
    Jpeg,
    /// JPEG fisheye.
    JpegFisheye,
    /// Raw DNG.
    ///
    /// Known to be unreliable on the Anafi.
    Raw,
}

/// Still capture mode for `SET_STILL_CAPTURE_MODE` (Parrot).
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum StillCaptureMode {
    /// Capture every time the vehicle travels a given distance.
    GpsPosition,
}

/// Gimbal mount mode for `DO_MOUNT_CONTROL`.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum MountMode {
    /// `MAV_MOUNT_MODE_MAVLINK_TARGETING`
    MavlinkTargeting,
}

impl ImageFormat {
    /// Parameter value as written into a waypoint record.
    pub fn value(self) -> f64 {
        match self {
            ImageFormat::Snapshot => 0.0,
            ImageFormat::Jpeg => 12.0,
            ImageFormat::JpegFisheye => 13.0,
            ImageFormat::Raw => 14.0,
        }
    }
}

impl TryFrom<f64> for ImageFormat {
    type Error = Error;

    fn try_from(value: f64) -> Result<Self, Self::Error> {
        [
            ImageFormat::Snapshot,
            ImageFormat::Jpeg,
            ImageFormat::JpegFisheye,
            ImageFormat::Raw,
        ]
        .into_iter()
        .find(|format| format.value() == value)
        .ok_or_else(|| Error::InvalidConf(format!("unknown image format {value}")))
    }
}

impl FromStr for ImageFormat {
    type Err = Error;

    /// Parses either a format name (`snapshot`, `jpeg`, `jpeg-fisheye`, `raw`) or its numeric
    /// value.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "snapshot" => Ok(ImageFormat::Snapshot),
            "jpeg" => Ok(ImageFormat::Jpeg),
            "jpeg-fisheye" | "jpeg_fisheye" => Ok(ImageFormat::JpegFisheye),
            "raw" | "dng" => Ok(ImageFormat::Raw),
            other => other
                .parse::<f64>()
                .map_err(|_| Error::InvalidConf(format!("unknown image format `{s}`")))
                .and_then(ImageFormat::try_from),
        }
    }
}

impl StillCaptureMode {
    /// Parameter value as written into a waypoint record.
    pub fn value(self) -> f64 {
        match self {
            StillCaptureMode::GpsPosition => 1.0,
        }
    }
}

impl MountMode {
    /// Parameter value as written into a waypoint record.
    pub fn value(self) -> f64 {
        match self {
            MountMode::MavlinkTargeting => 2.0,
        }
    }
}

#[cfg(test)]
mod options_tests {
    use super::*;

    #[test]
    fn image_format_from_str() {
        assert_eq!(
            "jpeg-fisheye".parse::<ImageFormat>().unwrap(),
            ImageFormat::JpegFisheye
        );
        assert_eq!("14".parse::<ImageFormat>().unwrap(), ImageFormat::Raw);
        assert_eq!("0.0".parse::<ImageFormat>().unwrap(), ImageFormat::Snapshot);
        assert!("11".parse::<ImageFormat>().is_err());
        assert!("tiff".parse::<ImageFormat>().is_err());
    }
}
