//! Error types for chart computation.

use std::error::Error;
use std::fmt::{Display, Formatter};

use natal_ephem::EphemError;
use natal_time::TimeError;

/// Errors from house, placement, and chart computation.
#[derive(Debug, Clone, PartialEq)]
#[non_exhaustive]
pub enum ChartError {
    /// Latitude outside [-90, 90] or longitude outside [-180, 180].
    InvalidLocation {
        latitude_deg: f64,
        longitude_deg: f64,
    },
    /// Latitude close enough to a pole that the Ascendant formula degenerates.
    SingularAscendant { latitude_deg: f64 },
    /// No house interval matched a longitude. Indicates a malformed cusp
    /// table, which is an implementation bug rather than bad user input.
    UnmatchedHouse { longitude_deg: f64 },
    /// A configuration value failed validation.
    InvalidConfig(&'static str),
    /// The ephemeris provider failed for an instant or body.
    Ephemeris(EphemError),
    /// A date/time input failed validation or parsing.
    Time(TimeError),
}

impl Display for ChartError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidLocation {
                latitude_deg,
                longitude_deg,
            } => write!(
                f,
                "location ({latitude_deg}, {longitude_deg}) outside valid range"
            ),
            Self::SingularAscendant { latitude_deg } => {
                write!(f, "ascendant undefined at latitude {latitude_deg}")
            }
            Self::UnmatchedHouse { longitude_deg } => {
                write!(f, "no house interval contains longitude {longitude_deg}")
            }
            Self::InvalidConfig(msg) => write!(f, "invalid configuration: {msg}"),
            Self::Ephemeris(e) => write!(f, "ephemeris error: {e}"),
            Self::Time(e) => write!(f, "time error: {e}"),
        }
    }
}

impl Error for ChartError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Ephemeris(e) => Some(e),
            Self::Time(e) => Some(e),
            _ => None,
        }
    }
}

impl From<EphemError> for ChartError {
    fn from(e: EphemError) -> Self {
        Self::Ephemeris(e)
    }
}

impl From<TimeError> for ChartError {
    fn from(e: TimeError) -> Self {
        Self::Time(e)
    }
}
