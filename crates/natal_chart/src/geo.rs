//! Observer input: a UTC instant at a geographic location.

use natal_time::UtcTime;

use crate::error::ChartError;

/// A UTC instant paired with an observer location.
///
/// The immutable input to every chart computation. Latitude and longitude
/// are decimal degrees, east and north positive.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GeoMoment {
    pub utc: UtcTime,
    pub latitude_deg: f64,
    pub longitude_deg: f64,
}

impl GeoMoment {
    /// Create a moment, validating the coordinates.
    pub fn new(utc: UtcTime, latitude_deg: f64, longitude_deg: f64) -> Result<Self, ChartError> {
        if !latitude_deg.is_finite()
            || !longitude_deg.is_finite()
            || latitude_deg.abs() > 90.0
            || longitude_deg.abs() > 180.0
        {
            return Err(ChartError::InvalidLocation {
                latitude_deg,
                longitude_deg,
            });
        }
        Ok(Self {
            utc,
            latitude_deg,
            longitude_deg,
        })
    }

    /// Create a moment from local wall-clock time and a fixed UTC offset.
    ///
    /// Birth records usually carry local time; this applies the offset once,
    /// here, so everything downstream sees UTC only.
    #[allow(clippy::too_many_arguments)]
    pub fn from_local(
        year: i32,
        month: u32,
        day: u32,
        hour: u32,
        minute: u32,
        second: f64,
        utc_offset_hours: f64,
        latitude_deg: f64,
        longitude_deg: f64,
    ) -> Result<Self, ChartError> {
        let utc = UtcTime::from_local(year, month, day, hour, minute, second, utc_offset_hours)?;
        Self::new(utc, latitude_deg, longitude_deg)
    }

    /// UTC Julian Date of this moment.
    pub fn jd_utc(&self) -> f64 {
        self.utc.to_jd_utc()
    }
}
