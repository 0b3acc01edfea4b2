//! House cusp computation and house lookup.
//!
//! Cusp chain: UTC JD -> GMST -> local sidereal time (RAMC) -> angles ->
//! intermediate cusps. The Ascendant and Midheaven come from the standard
//! spherical-astronomy formulas; the intermediate cusps trisect the two
//! eastern quadrant arcs (MC->ASC and ASC->IC) and mirror the results to
//! the western hemisphere. This is the Porphyry-style arc trisection, not
//! the iterative semi-arc Placidus construction; it is well defined at any
//! non-polar latitude and is used consistently throughout.

use natal_time::{gmst_rad, local_sidereal_time_rad};

use crate::angle::{arc_forward_deg, norm_deg};
use crate::error::ChartError;
use crate::geo::GeoMoment;

/// Mean obliquity of the ecliptic at J2000 (IAU 2006), degrees.
///
/// Treated as a constant over the supported epoch range; the secular drift
/// (~47″/century) moves cusps by well under the arc-minute level the chart
/// renders at.
pub const OBLIQUITY_DEG: f64 = 23.439_291_1;

/// Above this absolute latitude the quadrant arcs degenerate enough that
/// house results carry no astronomical meaning (circumpolar ecliptic).
pub const HIGH_LATITUDE_DEG: f64 = 66.5;

/// At or above this absolute latitude the Ascendant formula is rejected
/// outright rather than evaluated near its singularity.
pub const SINGULAR_LATITUDE_DEG: f64 = 89.9;

/// The 12 house cusp longitudes. Index 0 holds house 1.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CuspTable([f64; 12]);

impl CuspTable {
    /// Cusp longitude of a house in 1..=12.
    ///
    /// # Panics
    /// Panics on a house number outside 1..=12; house numbers in this
    /// workspace come from [`house_of`] and the fixed wheel, never user input.
    pub fn cusp(&self, house: u8) -> f64 {
        assert!((1..=12).contains(&house), "house {house} outside 1..=12");
        self.0[house as usize - 1]
    }

    /// All 12 cusps, house 1 first.
    pub fn as_array(&self) -> &[f64; 12] {
        &self.0
    }
}

/// The computed house wheel for one moment.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HouseWheel {
    pub ascendant_deg: f64,
    pub midheaven_deg: f64,
    pub cusps: CuspTable,
    /// Set above [`HIGH_LATITUDE_DEG`]; the numbers are still produced but
    /// callers should flag them as unreliable.
    pub high_latitude: bool,
}

/// Local sidereal time (RAMC) for a moment, degrees in [0, 360).
pub fn ramc_deg(moment: &GeoMoment) -> f64 {
    let gmst = gmst_rad(moment.jd_utc());
    local_sidereal_time_rad(gmst, moment.longitude_deg.to_radians()).to_degrees()
}

/// Midheaven longitude from RAMC, degrees in [0, 360).
///
/// λ_MC = atan2(sin RAMC, cos RAMC · cos ε), which is quadrant-correct by
/// construction (the MC always lies within 90° of the RAMC).
pub fn midheaven_deg(ramc_deg: f64, obliquity_deg: f64) -> f64 {
    let ramc = ramc_deg.to_radians();
    let eps = obliquity_deg.to_radians();
    norm_deg(f64::atan2(ramc.sin(), ramc.cos() * eps.cos()).to_degrees())
}

/// Ascendant longitude from RAMC and geographic latitude, degrees in [0, 360).
///
/// λ_ASC = atan2(cos RAMC, −(sin RAMC · cos ε + tan φ · sin ε)). This is the
/// eastern-horizon (rising) branch; flipping the signs of both arguments
/// yields the Descendant instead.
pub fn ascendant_deg(ramc_deg: f64, latitude_deg: f64, obliquity_deg: f64) -> f64 {
    let ramc = ramc_deg.to_radians();
    let eps = obliquity_deg.to_radians();
    let phi = latitude_deg.to_radians();
    let lon = f64::atan2(ramc.cos(), -(ramc.sin() * eps.cos() + phi.tan() * eps.sin()));
    norm_deg(lon.to_degrees())
}

/// Compute the full house wheel for a moment.
///
/// Fails with [`ChartError::SingularAscendant`] near the poles; sets the
/// `high_latitude` flag above the polar circles.
pub fn compute_houses(moment: &GeoMoment) -> Result<HouseWheel, ChartError> {
    if moment.latitude_deg.abs() >= SINGULAR_LATITUDE_DEG {
        return Err(ChartError::SingularAscendant {
            latitude_deg: moment.latitude_deg,
        });
    }

    let ramc = ramc_deg(moment);
    let mc = midheaven_deg(ramc, OBLIQUITY_DEG);
    let asc = ascendant_deg(ramc, moment.latitude_deg, OBLIQUITY_DEG);
    let ic = norm_deg(mc + 180.0);
    let dsc = norm_deg(asc + 180.0);

    // Trisect the two eastern quadrants, then mirror.
    let upper_arc = arc_forward_deg(mc, asc);
    let c11 = norm_deg(mc + upper_arc / 3.0);
    let c12 = norm_deg(mc + 2.0 * upper_arc / 3.0);
    let lower_arc = arc_forward_deg(asc, ic);
    let c2 = norm_deg(asc + lower_arc / 3.0);
    let c3 = norm_deg(asc + 2.0 * lower_arc / 3.0);

    let cusps = CuspTable([
        asc,
        c2,
        c3,
        ic,
        norm_deg(c11 + 180.0),
        norm_deg(c12 + 180.0),
        dsc,
        norm_deg(c2 + 180.0),
        norm_deg(c3 + 180.0),
        mc,
        c11,
        c12,
    ]);

    Ok(HouseWheel {
        ascendant_deg: asc,
        midheaven_deg: mc,
        cusps,
        high_latitude: moment.latitude_deg.abs() > HIGH_LATITUDE_DEG,
    })
}

/// House (1..=12) containing an ecliptic longitude.
///
/// Each house is the half-open interval [cusp_i, cusp_{i+1}) walked forward
/// around the circle, so a body exactly on a cusp belongs to the house that
/// cusp opens. A miss means the table does not partition the circle, which
/// is an internal invariant violation, reported rather than masked.
pub fn house_of(longitude_deg: f64, cusps: &CuspTable) -> Result<u8, ChartError> {
    let lon = norm_deg(longitude_deg);
    for house in 1..=12u8 {
        let start = cusps.cusp(house);
        let end = cusps.cusp(if house == 12 { 1 } else { house + 1 });
        let inside = if start <= end {
            (start..end).contains(&lon)
        } else {
            lon >= start || lon < end
        };
        if inside {
            return Ok(house);
        }
    }
    Err(ChartError::UnmatchedHouse {
        longitude_deg: lon,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;
    use natal_time::UtcTime;

    fn istanbul_noon() -> GeoMoment {
        let utc = UtcTime::new(1990, 5, 17, 9, 0, 0.0).unwrap();
        GeoMoment::new(utc, 41.0, 29.0).unwrap()
    }

    #[test]
    fn deterministic_for_fixed_input() {
        let a = compute_houses(&istanbul_noon()).unwrap();
        let b = compute_houses(&istanbul_noon()).unwrap();
        assert_eq!(a.ascendant_deg, b.ascendant_deg);
        assert_eq!(a.midheaven_deg, b.midheaven_deg);
        assert_eq!(a.cusps.as_array(), b.cusps.as_array());
    }

    #[test]
    fn mc_within_quadrant_of_ramc() {
        // The MC must always lie within 90° of the RAMC (mod 360).
        for hour in 0..24 {
            let utc = UtcTime::new(2024, 3, 20, hour, 0, 0.0).unwrap();
            let m = GeoMoment::new(utc, 41.0, 29.0).unwrap();
            let ramc = ramc_deg(&m);
            let mc = midheaven_deg(ramc, OBLIQUITY_DEG);
            let d = (mc - ramc).abs() % 360.0;
            let d = d.min(360.0 - d);
            assert!(d <= 90.0 + 1e-9, "hour {hour}: RAMC {ramc}, MC {mc}");
        }
    }

    #[test]
    fn vernal_point_rises_when_ramc_is_270() {
        // With RAMC = 270° the vernal equinox sits 90° east of the meridian:
        // 0° Aries is on the eastern horizon for an equatorial observer, so
        // the Ascendant must read ~0°, not the setting point at 180°.
        let asc = ascendant_deg(270.0, 0.0, OBLIQUITY_DEG);
        let dist = asc.min(360.0 - asc);
        assert!(dist < 1e-6, "ASC at RAMC 270 = {asc}");

        // Mirror case: at RAMC = 90° the vernal point is setting, so the
        // Ascendant is the autumn equinox point at 180°.
        let asc = ascendant_deg(90.0, 0.0, OBLIQUITY_DEG);
        assert!((asc - 180.0).abs() < 1e-6, "ASC at RAMC 90 = {asc}");
    }

    #[test]
    fn ascendant_is_rising_point() {
        // The Ascendant must sit 90° of oblique ascension east of the MC:
        // the forward arc MC -> ASC stays inside (0, 180) at temperate
        // latitudes.
        for hour in 0..24 {
            let utc = UtcTime::new(2024, 6, 1, hour, 0, 0.0).unwrap();
            let m = GeoMoment::new(utc, 41.0, 29.0).unwrap();
            let w = compute_houses(&m).unwrap();
            let arc = arc_forward_deg(w.midheaven_deg, w.ascendant_deg);
            assert!(
                arc > 0.0 && arc < 180.0,
                "hour {hour}: MC {} ASC {} arc {arc}",
                w.midheaven_deg,
                w.ascendant_deg
            );
        }
    }

    #[test]
    fn equator_ascendant_matches_zero_latitude_form() {
        // At φ = 0 the tan φ term vanishes; sanity-check a couple of hours.
        let utc = UtcTime::new(2024, 3, 20, 6, 0, 0.0).unwrap();
        let m = GeoMoment::new(utc, 0.0, 0.0).unwrap();
        let w = compute_houses(&m).unwrap();
        assert!((0.0..360.0).contains(&w.ascendant_deg));
        assert!(!w.high_latitude);
    }

    #[test]
    fn antipodal_invariants() {
        let w = compute_houses(&istanbul_noon()).unwrap();
        let c = &w.cusps;
        assert_abs_diff_eq!(c.cusp(7), norm_deg(c.cusp(1) + 180.0), epsilon = 1e-9);
        assert_abs_diff_eq!(c.cusp(4), norm_deg(c.cusp(10) + 180.0), epsilon = 1e-9);
        assert_abs_diff_eq!(c.cusp(5), norm_deg(c.cusp(11) + 180.0), epsilon = 1e-9);
        assert_abs_diff_eq!(c.cusp(6), norm_deg(c.cusp(12) + 180.0), epsilon = 1e-9);
        assert_abs_diff_eq!(c.cusp(8), norm_deg(c.cusp(2) + 180.0), epsilon = 1e-9);
        assert_abs_diff_eq!(c.cusp(9), norm_deg(c.cusp(3) + 180.0), epsilon = 1e-9);
    }

    #[test]
    fn all_cusps_normalized() {
        let w = compute_houses(&istanbul_noon()).unwrap();
        for &c in w.cusps.as_array() {
            assert!((0.0..360.0).contains(&c), "cusp {c}");
        }
    }

    #[test]
    fn houses_partition_circle_densely() {
        let w = compute_houses(&istanbul_noon()).unwrap();
        let mut step = 0;
        while step < 36_000 {
            let lon = step as f64 * 0.01;
            let h = house_of(lon, &w.cusps).unwrap();
            assert!((1..=12).contains(&h), "{lon} -> {h}");
            step += 1;
        }
    }

    #[test]
    fn body_on_cusp_belongs_to_opening_house() {
        let w = compute_houses(&istanbul_noon()).unwrap();
        for house in 1..=12u8 {
            let on_cusp = w.cusps.cusp(house);
            assert_eq!(house_of(on_cusp, &w.cusps).unwrap(), house);
        }
    }

    #[test]
    fn ascendant_opens_house_one() {
        let w = compute_houses(&istanbul_noon()).unwrap();
        assert_eq!(house_of(w.ascendant_deg, &w.cusps).unwrap(), 1);
        assert_eq!(house_of(w.midheaven_deg, &w.cusps).unwrap(), 10);
    }

    #[test]
    fn polar_latitude_rejected() {
        let utc = UtcTime::new(2024, 3, 20, 12, 0, 0.0).unwrap();
        let m = GeoMoment::new(utc, 89.95, 0.0).unwrap();
        assert!(matches!(
            compute_houses(&m),
            Err(ChartError::SingularAscendant { .. })
        ));
    }

    #[test]
    fn high_latitude_flagged_not_rejected() {
        let utc = UtcTime::new(2024, 3, 20, 12, 0, 0.0).unwrap();
        let m = GeoMoment::new(utc, 70.0, 25.0).unwrap();
        let w = compute_houses(&m).unwrap();
        assert!(w.high_latitude);
    }

    #[test]
    fn malformed_table_reports_unmatched() {
        // All cusps equal makes every half-open interval empty, so no house
        // can match. This must surface as an error, never a silent house 1.
        let degenerate = CuspTable([42.0; 12]);
        assert!(matches!(
            house_of(100.0, &degenerate),
            Err(ChartError::UnmatchedHouse { .. })
        ));
    }
}
