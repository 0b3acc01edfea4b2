//! Rendering of longitudes, placements, and aspect lines.

use natal_chart::{AspectHit, Placement, sign_position};

/// Render a longitude as degree-within-sign plus sign name, e.g.
/// `26°17' Taurus`.
pub fn format_position(longitude_deg: f64) -> String {
    let (sign, dms) = sign_position(longitude_deg);
    format!("{dms} {}", sign.name())
}

/// One placement line: point, position, house.
pub fn format_placement(p: &Placement) -> String {
    format!(
        "{}: {} (house {})",
        p.point.name(),
        format_position(p.longitude_deg),
        p.house
    )
}

/// One aspect line: pair, type, and how tight the contact is.
pub fn format_aspect(hit: &AspectHit) -> String {
    format!(
        "{} {} {} (orb {:.1}\u{b0})",
        hit.a.name(),
        hit.aspect.name(),
        hit.b.name(),
        hit.orb_deg
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use natal_chart::{Aspect, ChartPoint, Sign};
    use natal_ephem::Body;

    #[test]
    fn position_renders_sign_and_dms() {
        assert_eq!(format_position(56.284), "26°17' Taurus");
        assert_eq!(format_position(0.0), "0°00' Aries");
    }

    #[test]
    fn position_carries_rounded_minutes() {
        // 29.9999° of a sign: minutes round to 60 and carry.
        assert_eq!(format_position(59.9999), "30°00' Taurus");
    }

    #[test]
    fn placement_line() {
        let p = Placement {
            point: ChartPoint::Body(Body::Moon),
            sign: Sign::Cancer,
            longitude_deg: 95.5,
            house: 4,
        };
        assert_eq!(format_placement(&p), "Moon: 5°30' Cancer (house 4)");
    }

    #[test]
    fn aspect_line() {
        let hit = AspectHit {
            a: ChartPoint::Body(Body::Sun),
            b: ChartPoint::Body(Body::Moon),
            aspect: Aspect::Trine,
            separation_deg: 121.3,
            orb_deg: 1.3,
        };
        assert_eq!(format_aspect(&hit), "Sun Trine Moon (orb 1.3°)");
    }
}
