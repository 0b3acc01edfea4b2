//! Small angle helpers shared across the crate.

/// Normalize degrees into [0, 360).
pub fn norm_deg(deg: f64) -> f64 {
    deg.rem_euclid(360.0)
}

/// Forward (counter-clockwise) arc from one longitude to another, in [0, 360).
pub fn arc_forward_deg(from_deg: f64, to_deg: f64) -> f64 {
    (to_deg - from_deg).rem_euclid(360.0)
}

/// Shortest angular separation between two longitudes, in [0, 180].
pub fn separation_deg(a_deg: f64, b_deg: f64) -> f64 {
    let d = (a_deg - b_deg).abs() % 360.0;
    d.min(360.0 - d)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn norm_wraps_both_directions() {
        assert_eq!(norm_deg(370.0), 10.0);
        assert_eq!(norm_deg(-10.0), 350.0);
        assert_eq!(norm_deg(0.0), 0.0);
        assert_eq!(norm_deg(360.0), 0.0);
    }

    #[test]
    fn forward_arc_wraps() {
        assert_eq!(arc_forward_deg(350.0, 10.0), 20.0);
        assert_eq!(arc_forward_deg(10.0, 350.0), 340.0);
        assert_eq!(arc_forward_deg(90.0, 90.0), 0.0);
    }

    #[test]
    fn separation_is_shortest() {
        assert_eq!(separation_deg(10.0, 190.0), 180.0);
        assert_eq!(separation_deg(5.0, 8.0), 3.0);
        assert_eq!(separation_deg(359.0, 1.0), 2.0);
        assert_eq!(separation_deg(0.0, 0.0), 0.0);
    }

    #[test]
    fn separation_symmetric() {
        for &(a, b) in &[(12.3, 275.9), (0.0, 180.0), (359.99, 0.01)] {
            assert_eq!(separation_deg(a, b), separation_deg(b, a));
        }
    }
}
