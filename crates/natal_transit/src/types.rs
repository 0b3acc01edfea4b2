//! Transit scan configuration and result types.

use serde::{Deserialize, Serialize};

use natal_chart::{Aspect, AspectOrbs, ChartPoint, Sign};
use natal_ephem::Body;
use natal_time::UtcTime;

use crate::error::TransitError;

/// The scanned date range; endpoints are UTC instants.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TransitRange {
    pub start: UtcTime,
    pub end: UtcTime,
}

impl TransitRange {
    pub fn new(start: UtcTime, end: UtcTime) -> Result<Self, TransitError> {
        if end.to_jd_utc() <= start.to_jd_utc() {
            return Err(TransitError::InvalidRange("end must be after start"));
        }
        Ok(Self { start, end })
    }

    /// The three sampled Julian Dates: start, midpoint, end.
    pub fn sample_jds(&self) -> [f64; 3] {
        let a = self.start.to_jd_utc();
        let b = self.end.to_jd_utc();
        [a, (a + b) / 2.0, b]
    }
}

/// Additive score weights: slower bodies and harder aspects score higher.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TransitWeights {
    pub jupiter: u32,
    pub saturn: u32,
    pub uranus: u32,
    pub neptune: u32,
    pub pluto: u32,
    pub conjunction: u32,
    pub sextile: u32,
    pub square: u32,
    pub trine: u32,
    pub opposition: u32,
}

impl TransitWeights {
    pub const fn standard() -> Self {
        Self {
            jupiter: 3,
            saturn: 5,
            uranus: 4,
            neptune: 4,
            pluto: 5,
            conjunction: 5,
            sextile: 2,
            square: 4,
            trine: 2,
            opposition: 5,
        }
    }

    /// Weight of a transiting body; zero for bodies outside the slow set.
    pub const fn body_weight(&self, body: Body) -> u32 {
        match body {
            Body::Jupiter => self.jupiter,
            Body::Saturn => self.saturn,
            Body::Uranus => self.uranus,
            Body::Neptune => self.neptune,
            Body::Pluto => self.pluto,
            _ => 0,
        }
    }

    pub const fn aspect_weight(&self, aspect: Aspect) -> u32 {
        match aspect {
            Aspect::Conjunction => self.conjunction,
            Aspect::Sextile => self.sextile,
            Aspect::Square => self.square,
            Aspect::Trine => self.trine,
            Aspect::Opposition => self.opposition,
        }
    }
}

impl Default for TransitWeights {
    fn default() -> Self {
        Self::standard()
    }
}

/// Transit scan settings.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TransitConfig {
    /// Orbs for transit contacts; tighter than natal by default.
    pub orbs: AspectOrbs,
    pub weights: TransitWeights,
    /// Whether natal Ascendant/Midheaven receive transit contacts.
    pub include_axes: bool,
}

impl Default for TransitConfig {
    fn default() -> Self {
        Self {
            orbs: AspectOrbs::transit(),
            weights: TransitWeights::standard(),
            include_axes: false,
        }
    }
}

impl TransitConfig {
    pub fn validate(&self) -> Result<(), TransitError> {
        self.orbs
            .validate()
            .map_err(|_| TransitError::InvalidConfig("transit orbs out of range"))
    }
}

/// One slow body's motion across the scanned range.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BodyMovement {
    pub body: Body,
    pub start_longitude_deg: f64,
    pub end_longitude_deg: f64,
    pub start_sign: Sign,
    pub end_sign: Sign,
    /// Natal houses occupied at the range endpoints.
    pub start_house: u8,
    pub end_house: u8,
}

impl BodyMovement {
    pub fn changed_sign(&self) -> bool {
        self.start_sign != self.end_sign
    }

    pub const fn changed_house(&self) -> bool {
        self.start_house != self.end_house
    }
}

/// One scored transit contact with a natal point.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TransitHit {
    pub transiting: Body,
    pub natal: ChartPoint,
    pub aspect: Aspect,
    /// Natal house the transiting body occupied at the matching sample.
    pub house: u8,
    pub score: u32,
}

impl TransitHit {
    /// Rendered deduplication key: one entry per described contact.
    pub fn key(&self) -> String {
        format!(
            "{} {} natal {}",
            self.transiting.name(),
            self.aspect.name(),
            self.natal.name()
        )
    }
}

/// The full transit scan output.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TransitReport {
    /// One movement line per slow body, chart order.
    pub movements: Vec<BodyMovement>,
    /// Deduplicated contacts, sorted by descending score.
    pub hits: Vec<TransitHit>,
}
