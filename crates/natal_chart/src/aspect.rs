//! Aspect detection between chart points.

use serde::{Deserialize, Serialize};

use crate::angle::separation_deg;
use crate::chart::{ChartPoint, Placement};
use crate::error::ChartError;

/// The five Ptolemaic aspects, in match-priority order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Aspect {
    Conjunction,
    Sextile,
    Square,
    Trine,
    Opposition,
}

/// All aspects in priority order.
pub const ALL_ASPECTS: [Aspect; 5] = [
    Aspect::Conjunction,
    Aspect::Sextile,
    Aspect::Square,
    Aspect::Trine,
    Aspect::Opposition,
];

impl Aspect {
    /// Exact angle of the aspect, degrees.
    pub const fn angle_deg(self) -> f64 {
        match self {
            Self::Conjunction => 0.0,
            Self::Sextile => 60.0,
            Self::Square => 90.0,
            Self::Trine => 120.0,
            Self::Opposition => 180.0,
        }
    }

    /// English display name.
    pub const fn name(self) -> &'static str {
        match self {
            Self::Conjunction => "Conjunction",
            Self::Sextile => "Sextile",
            Self::Square => "Square",
            Self::Trine => "Trine",
            Self::Opposition => "Opposition",
        }
    }
}

/// Per-aspect orb tolerances, degrees.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct AspectOrbs {
    pub conjunction: f64,
    pub sextile: f64,
    pub square: f64,
    pub trine: f64,
    pub opposition: f64,
}

impl AspectOrbs {
    /// Orbs for natal aspects: wide for the luminaries' classical set.
    pub const fn natal() -> Self {
        Self {
            conjunction: 8.0,
            sextile: 6.0,
            square: 7.0,
            trine: 7.0,
            opposition: 8.0,
        }
    }

    /// Tight orbs for transit contacts, which are time-sensitive events.
    pub const fn transit() -> Self {
        Self {
            conjunction: 3.0,
            sextile: 2.0,
            square: 2.5,
            trine: 2.0,
            opposition: 3.0,
        }
    }

    /// Orb for one aspect type.
    pub const fn orb(&self, aspect: Aspect) -> f64 {
        match aspect {
            Aspect::Conjunction => self.conjunction,
            Aspect::Sextile => self.sextile,
            Aspect::Square => self.square,
            Aspect::Trine => self.trine,
            Aspect::Opposition => self.opposition,
        }
    }

    /// Check the orbs keep aspect bands disjoint.
    ///
    /// With every orb below 15° no separation can sit inside two bands
    /// (adjacent exact angles are 30° or 60° apart), so first-match-wins
    /// equals only-match.
    pub fn validate(&self) -> Result<(), ChartError> {
        for aspect in ALL_ASPECTS {
            let orb = self.orb(aspect);
            if !orb.is_finite() || orb <= 0.0 {
                return Err(ChartError::InvalidConfig("orb must be positive"));
            }
            if orb >= 15.0 {
                return Err(ChartError::InvalidConfig("orb must be below 15 degrees"));
            }
        }
        Ok(())
    }
}

impl Default for AspectOrbs {
    fn default() -> Self {
        Self::natal()
    }
}

/// Aspect scan settings.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct AspectConfig {
    pub orbs: AspectOrbs,
    /// Whether the Ascendant/Midheaven participate in pairwise aspects.
    pub include_axes: bool,
}

impl Default for AspectConfig {
    fn default() -> Self {
        Self {
            orbs: AspectOrbs::natal(),
            include_axes: false,
        }
    }
}

impl AspectConfig {
    pub fn validate(&self) -> Result<(), ChartError> {
        self.orbs.validate()
    }
}

/// One detected aspect between two chart points.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct AspectHit {
    pub a: ChartPoint,
    pub b: ChartPoint,
    pub aspect: Aspect,
    /// Actual angular separation, degrees in [0, 180].
    pub separation_deg: f64,
    /// Deviation from the aspect's exact angle, degrees.
    pub orb_deg: f64,
}

/// Classify an angular separation against the orb table.
///
/// Aspects are tested in priority order; the first within orb wins and no
/// further types are considered for the pair.
pub fn classify(separation_deg: f64, orbs: &AspectOrbs) -> Option<(Aspect, f64)> {
    for aspect in ALL_ASPECTS {
        let deviation = (separation_deg - aspect.angle_deg()).abs();
        if deviation <= orbs.orb(aspect) {
            return Some((aspect, deviation));
        }
    }
    None
}

/// Find all aspects among a set of placements.
///
/// Every unordered pair is tested once; pairs with no aspect are simply
/// absent from the result. Output order follows input order, so runs over
/// the same placements are identical.
pub fn scan_aspects(placements: &[Placement], config: &AspectConfig) -> Vec<AspectHit> {
    let eligible: Vec<&Placement> = placements
        .iter()
        .filter(|p| config.include_axes || matches!(p.point, ChartPoint::Body(_)))
        .collect();

    let mut hits = Vec::new();
    for (i, pa) in eligible.iter().enumerate() {
        for pb in &eligible[i + 1..] {
            let sep = separation_deg(pa.longitude_deg, pb.longitude_deg);
            if let Some((aspect, orb)) = classify(sep, &config.orbs) {
                hits.push(AspectHit {
                    a: pa.point,
                    b: pb.point,
                    aspect,
                    separation_deg: sep,
                    orb_deg: orb,
                });
            }
        }
    }
    hits
}
