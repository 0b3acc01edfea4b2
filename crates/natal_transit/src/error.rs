//! Error types for the transit engine.

use std::error::Error;
use std::fmt::{Display, Formatter};

use natal_chart::ChartError;
use natal_ephem::EphemError;

/// Errors from transit scanning.
#[derive(Debug, Clone, PartialEq)]
#[non_exhaustive]
pub enum TransitError {
    /// The scan range is empty or reversed.
    InvalidRange(&'static str),
    /// A configuration value failed validation.
    InvalidConfig(&'static str),
    /// A chart-level failure (house lookup, location) during the scan.
    Chart(ChartError),
    /// The ephemeris provider failed at a sampled instant.
    Ephemeris(EphemError),
}

impl Display for TransitError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidRange(msg) => write!(f, "invalid transit range: {msg}"),
            Self::InvalidConfig(msg) => write!(f, "invalid configuration: {msg}"),
            Self::Chart(e) => write!(f, "chart error: {e}"),
            Self::Ephemeris(e) => write!(f, "ephemeris error: {e}"),
        }
    }
}

impl Error for TransitError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Chart(e) => Some(e),
            Self::Ephemeris(e) => Some(e),
            _ => None,
        }
    }
}

impl From<ChartError> for TransitError {
    fn from(e: ChartError) -> Self {
        match e {
            ChartError::Ephemeris(inner) => Self::Ephemeris(inner),
            other => Self::Chart(other),
        }
    }
}

impl From<EphemError> for TransitError {
    fn from(e: EphemError) -> Self {
        Self::Ephemeris(e)
    }
}
