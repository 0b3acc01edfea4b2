//! Element and modality balance across a chart's placements.

use serde::{Deserialize, Serialize};

use crate::chart::{ChartPoint, Placement};
use crate::sign::{Element, Modality};
use natal_ephem::Body;

/// Per-point weights for the balance tally.
///
/// Luminaries and the Ascendant dominate the temperament picture; the outer
/// planets, being generational, barely register.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct BalanceWeights {
    pub sun: u32,
    pub moon: u32,
    pub mercury: u32,
    pub venus: u32,
    pub mars: u32,
    pub jupiter: u32,
    pub saturn: u32,
    pub uranus: u32,
    pub neptune: u32,
    pub pluto: u32,
    pub ascendant: u32,
    pub midheaven: u32,
    /// Whether the Ascendant/Midheaven enter the tally at all.
    pub include_axes: bool,
}

impl BalanceWeights {
    /// The default weighting scheme.
    pub const fn standard() -> Self {
        Self {
            sun: 4,
            moon: 4,
            mercury: 3,
            venus: 3,
            mars: 3,
            jupiter: 2,
            saturn: 2,
            uranus: 1,
            neptune: 1,
            pluto: 1,
            ascendant: 4,
            midheaven: 2,
            include_axes: true,
        }
    }

    /// Unweighted: every body counts once, axes excluded.
    pub const fn flat() -> Self {
        Self {
            sun: 1,
            moon: 1,
            mercury: 1,
            venus: 1,
            mars: 1,
            jupiter: 1,
            saturn: 1,
            uranus: 1,
            neptune: 1,
            pluto: 1,
            ascendant: 0,
            midheaven: 0,
            include_axes: false,
        }
    }

    /// Weight of one chart point; zero means excluded.
    pub const fn weight_of(&self, point: ChartPoint) -> u32 {
        match point {
            ChartPoint::Body(Body::Sun) => self.sun,
            ChartPoint::Body(Body::Moon) => self.moon,
            ChartPoint::Body(Body::Mercury) => self.mercury,
            ChartPoint::Body(Body::Venus) => self.venus,
            ChartPoint::Body(Body::Mars) => self.mars,
            ChartPoint::Body(Body::Jupiter) => self.jupiter,
            ChartPoint::Body(Body::Saturn) => self.saturn,
            ChartPoint::Body(Body::Uranus) => self.uranus,
            ChartPoint::Body(Body::Neptune) => self.neptune,
            ChartPoint::Body(Body::Pluto) => self.pluto,
            ChartPoint::Ascendant => {
                if self.include_axes {
                    self.ascendant
                } else {
                    0
                }
            }
            ChartPoint::Midheaven => {
                if self.include_axes {
                    self.midheaven
                } else {
                    0
                }
            }
        }
    }
}

impl Default for BalanceWeights {
    fn default() -> Self {
        Self::standard()
    }
}

/// Weighted element and modality tallies with their argmax winners.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChartBalance {
    /// Fire, Earth, Air, Water in enum order.
    pub elements: [u32; 4],
    /// Cardinal, Fixed, Mutable in enum order.
    pub modalities: [u32; 3],
    pub dominant_element: Element,
    pub dominant_modality: Modality,
}

impl ChartBalance {
    pub const fn element_total(&self, element: Element) -> u32 {
        self.elements[element as usize]
    }

    pub const fn modality_total(&self, modality: Modality) -> u32 {
        self.modalities[modality as usize]
    }
}

const ELEMENT_ORDER: [Element; 4] = [Element::Fire, Element::Earth, Element::Air, Element::Water];
const MODALITY_ORDER: [Modality; 3] = [Modality::Cardinal, Modality::Fixed, Modality::Mutable];

/// Tally placements by element and modality.
///
/// The dominant entry is the argmax of the weighted sums; ties go to the
/// earlier enum variant, so results are stable across runs.
pub fn chart_balance(placements: &[Placement], weights: &BalanceWeights) -> ChartBalance {
    let mut elements = [0u32; 4];
    let mut modalities = [0u32; 3];

    for p in placements {
        let w = weights.weight_of(p.point);
        if w == 0 {
            continue;
        }
        elements[p.sign.element() as usize] += w;
        modalities[p.sign.modality() as usize] += w;
    }

    let dominant_element = ELEMENT_ORDER[argmax(&elements)];
    let dominant_modality = MODALITY_ORDER[argmax(&modalities)];

    ChartBalance {
        elements,
        modalities,
        dominant_element,
        dominant_modality,
    }
}

/// Index of the first maximum.
fn argmax(totals: &[u32]) -> usize {
    let mut best = 0;
    for (i, &v) in totals.iter().enumerate() {
        if v > totals[best] {
            best = i;
        }
    }
    best
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sign::Sign;

    fn place(point: ChartPoint, sign: Sign) -> Placement {
        Placement {
            point,
            sign,
            longitude_deg: sign.start_degree() + 5.0,
            house: 1,
        }
    }

    #[test]
    fn weighted_sun_beats_three_outers() {
        // Sun (4) in a Fire sign vs Uranus+Neptune+Pluto (1 each) in Water.
        let placements = [
            place(ChartPoint::Body(Body::Sun), Sign::Aries),
            place(ChartPoint::Body(Body::Uranus), Sign::Cancer),
            place(ChartPoint::Body(Body::Neptune), Sign::Scorpio),
            place(ChartPoint::Body(Body::Pluto), Sign::Pisces),
        ];
        let b = chart_balance(&placements, &BalanceWeights::standard());
        assert_eq!(b.element_total(Element::Fire), 4);
        assert_eq!(b.element_total(Element::Water), 3);
        assert_eq!(b.dominant_element, Element::Fire);
    }

    #[test]
    fn flat_weights_count_each_once() {
        let placements = [
            place(ChartPoint::Body(Body::Sun), Sign::Taurus),
            place(ChartPoint::Body(Body::Moon), Sign::Virgo),
            place(ChartPoint::Ascendant, Sign::Leo),
        ];
        let b = chart_balance(&placements, &BalanceWeights::flat());
        // Ascendant excluded under flat weights.
        assert_eq!(b.element_total(Element::Earth), 2);
        assert_eq!(b.element_total(Element::Fire), 0);
    }

    #[test]
    fn ties_break_by_enum_order() {
        let placements = [
            place(ChartPoint::Body(Body::Venus), Sign::Gemini), // Air, 3
            place(ChartPoint::Body(Body::Mars), Sign::Cancer),  // Water, 3
        ];
        let b = chart_balance(&placements, &BalanceWeights::standard());
        assert_eq!(b.element_total(Element::Air), b.element_total(Element::Water));
        // Air precedes Water in enum order.
        assert_eq!(b.dominant_element, Element::Air);
    }

    #[test]
    fn modality_tally() {
        let placements = [
            place(ChartPoint::Body(Body::Sun), Sign::Aries), // Cardinal, 4
            place(ChartPoint::Body(Body::Moon), Sign::Leo),  // Fixed, 4
            place(ChartPoint::Body(Body::Mercury), Sign::Aries), // Cardinal, 3
        ];
        let b = chart_balance(&placements, &BalanceWeights::standard());
        assert_eq!(b.modality_total(Modality::Cardinal), 7);
        assert_eq!(b.modality_total(Modality::Fixed), 4);
        assert_eq!(b.dominant_modality, Modality::Cardinal);
    }

    #[test]
    fn axes_weighted_when_included() {
        let placements = [place(ChartPoint::Midheaven, Sign::Capricorn)];
        let b = chart_balance(&placements, &BalanceWeights::standard());
        assert_eq!(b.element_total(Element::Earth), 2);
    }
}
