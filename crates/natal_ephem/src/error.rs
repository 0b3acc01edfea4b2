//! Error types for the ephemeris provider.

use std::error::Error;
use std::fmt::{Display, Formatter};

/// Errors from ephemeris evaluation.
#[derive(Debug, Clone, PartialEq)]
#[non_exhaustive]
pub enum EphemError {
    /// Epoch outside the validity range of the element tables.
    EpochOutOfRange { jd_utc: f64 },
    /// Kepler's equation did not converge within the iteration cap.
    NoConvergence { body: &'static str },
    /// Epoch is not a finite number.
    NonFiniteEpoch,
}

impl Display for EphemError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::EpochOutOfRange { jd_utc } => {
                write!(f, "epoch JD {jd_utc} outside element table range (1800-2050)")
            }
            Self::NoConvergence { body } => {
                write!(f, "Kepler iteration did not converge for {body}")
            }
            Self::NonFiniteEpoch => write!(f, "epoch must be finite"),
        }
    }
}

impl Error for EphemError {}
