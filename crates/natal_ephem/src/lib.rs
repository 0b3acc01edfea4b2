//! Planetary position provider for chart computation.
//!
//! This crate provides:
//! - The closed [`Body`] enum of the 10 chart bodies
//! - The [`EphemerisSource`] trait, the seam between chart computation and
//!   any position provider
//! - [`KeplerEphemeris`], the built-in provider: Standish mean Keplerian
//!   elements (1800–2050) for the planets and a truncated Meeus periodic
//!   series for the Moon
//!
//! Accuracy is a few arcminutes for the planets and ~10 arcminutes for the
//! Moon: ample for sign, house, and orb decisions, and deliberately not
//! an almanac-grade ephemeris.

pub mod elements;
pub mod error;
pub mod kepler;
pub mod moon;

use serde::{Deserialize, Serialize};

pub use error::EphemError;
pub use kepler::KeplerEphemeris;

/// The 10 bodies placed in a chart.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Body {
    Sun,
    Moon,
    Mercury,
    Venus,
    Mars,
    Jupiter,
    Saturn,
    Uranus,
    Neptune,
    Pluto,
}

/// All 10 bodies in traditional chart order.
pub const ALL_BODIES: [Body; 10] = [
    Body::Sun,
    Body::Moon,
    Body::Mercury,
    Body::Venus,
    Body::Mars,
    Body::Jupiter,
    Body::Saturn,
    Body::Uranus,
    Body::Neptune,
    Body::Pluto,
];

/// The slow-moving bodies tracked by the transit engine.
pub const SLOW_BODIES: [Body; 5] = [
    Body::Jupiter,
    Body::Saturn,
    Body::Uranus,
    Body::Neptune,
    Body::Pluto,
];

impl Body {
    /// English display name.
    pub const fn name(self) -> &'static str {
        match self {
            Self::Sun => "Sun",
            Self::Moon => "Moon",
            Self::Mercury => "Mercury",
            Self::Venus => "Venus",
            Self::Mars => "Mars",
            Self::Jupiter => "Jupiter",
            Self::Saturn => "Saturn",
            Self::Uranus => "Uranus",
            Self::Neptune => "Neptune",
            Self::Pluto => "Pluto",
        }
    }

    /// 0-based index into [`ALL_BODIES`].
    pub const fn index(self) -> u8 {
        match self {
            Self::Sun => 0,
            Self::Moon => 1,
            Self::Mercury => 2,
            Self::Venus => 3,
            Self::Mars => 4,
            Self::Jupiter => 5,
            Self::Saturn => 6,
            Self::Uranus => 7,
            Self::Neptune => 8,
            Self::Pluto => 9,
        }
    }

    /// All 10 bodies in order.
    pub const fn all() -> &'static [Body; 10] {
        &ALL_BODIES
    }

    /// Whether this body is in the transit engine's slow subset.
    pub const fn is_slow(self) -> bool {
        matches!(
            self,
            Self::Jupiter | Self::Saturn | Self::Uranus | Self::Neptune | Self::Pluto
        )
    }
}

/// A provider of geocentric ecliptic longitudes.
///
/// The seam between chart computation and the underlying planetary theory.
/// Implementations must return longitudes normalized to [0, 360) and must
/// report failure for epochs they cannot cover, never a silent 0°.
pub trait EphemerisSource {
    /// Geocentric ecliptic longitude of `body` at a UTC Julian Date, degrees
    /// in [0, 360).
    fn ecliptic_longitude(&self, body: Body, jd_utc: f64) -> Result<f64, EphemError>;
}
