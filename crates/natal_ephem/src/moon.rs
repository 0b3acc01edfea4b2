//! Lunar ecliptic longitude from a truncated periodic series.
//!
//! The 16 largest longitude terms of the ELP-derived series in Meeus,
//! *Astronomical Algorithms* ch. 47, evaluated against the five fundamental
//! arguments. Truncation error stays under ~0.1°, which is far inside the
//! tightest aspect orb used anywhere in the workspace.

/// A single periodic term: coefficient (degrees) and integer multipliers of
/// the arguments D, M, M′, F.
struct LonTerm {
    coeff_deg: f64,
    d: i32,
    m: i32,
    mp: i32,
    f: i32,
}

const LON_TERMS: [LonTerm; 16] = [
    LonTerm { coeff_deg: 6.288_774, d: 0, m: 0, mp: 1, f: 0 },
    LonTerm { coeff_deg: 1.274_027, d: 2, m: 0, mp: -1, f: 0 },
    LonTerm { coeff_deg: 0.658_314, d: 2, m: 0, mp: 0, f: 0 },
    LonTerm { coeff_deg: 0.213_618, d: 0, m: 0, mp: 2, f: 0 },
    LonTerm { coeff_deg: -0.185_116, d: 0, m: 1, mp: 0, f: 0 },
    LonTerm { coeff_deg: -0.114_332, d: 0, m: 0, mp: 0, f: 2 },
    LonTerm { coeff_deg: 0.058_793, d: 2, m: 0, mp: -2, f: 0 },
    LonTerm { coeff_deg: 0.057_066, d: 2, m: -1, mp: -1, f: 0 },
    LonTerm { coeff_deg: 0.053_322, d: 2, m: 0, mp: 1, f: 0 },
    LonTerm { coeff_deg: 0.045_758, d: 2, m: -1, mp: 0, f: 0 },
    LonTerm { coeff_deg: -0.040_923, d: 0, m: 1, mp: -1, f: 0 },
    LonTerm { coeff_deg: -0.034_720, d: 1, m: 0, mp: 0, f: 0 },
    LonTerm { coeff_deg: -0.030_383, d: 0, m: 1, mp: 1, f: 0 },
    LonTerm { coeff_deg: 0.015_327, d: 2, m: 0, mp: 0, f: -2 },
    LonTerm { coeff_deg: -0.012_528, d: 0, m: 0, mp: 1, f: 2 },
    LonTerm { coeff_deg: 0.010_980, d: 0, m: 0, mp: 1, f: -2 },
];

/// Geocentric ecliptic longitude of the Moon, degrees in [0, 360).
///
/// `t` is Julian centuries since J2000.0.
pub fn moon_longitude_deg(t: f64) -> f64 {
    // Fundamental arguments, degrees (Meeus 47.1–47.5, cubic+ terms dropped).
    let lp = 218.316_447_7 + 481_267.881_234_21 * t - 0.001_578_6 * t * t;
    let d = 297.850_192_1 + 445_267.111_403_4 * t - 0.001_881_9 * t * t;
    let m = 357.529_109_2 + 35_999.050_290_9 * t - 0.000_153_6 * t * t;
    let mp = 134.963_396_4 + 477_198.867_505_5 * t + 0.008_741_4 * t * t;
    let f = 93.272_095_0 + 483_202.017_523_3 * t - 0.003_653_9 * t * t;

    let (d, m, mp, f) = (d.to_radians(), m.to_radians(), mp.to_radians(), f.to_radians());

    let mut sum = 0.0;
    for term in &LON_TERMS {
        let arg = term.d as f64 * d + term.m as f64 * m + term.mp as f64 * mp + term.f as f64 * f;
        sum += term.coeff_deg * arg.sin();
    }

    (lp + sum).rem_euclid(360.0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn meeus_example_47a() {
        // 1992-Apr-12 00:00 TT (JD 2448724.5): λ ≈ 133.162655°.
        // The truncated series should land within its ~0.1° budget; allow
        // the full budget plus a margin for the dropped additive terms.
        let t = (2_448_724.5 - 2_451_545.0) / 36_525.0;
        let lon = moon_longitude_deg(t);
        assert!((lon - 133.162_655).abs() < 0.2, "got {lon}");
    }

    #[test]
    fn longitude_normalized_over_a_saros() {
        // ~18 years of daily samples, all in [0, 360).
        for i in 0..6_585 {
            let t = (i as f64 - 3_000.0) / 36_525.0;
            let lon = moon_longitude_deg(t);
            assert!((0.0..360.0).contains(&lon), "day {i}: {lon}");
        }
    }

    #[test]
    fn advances_about_thirteen_degrees_per_day() {
        let day = 1.0 / 36_525.0;
        let a = moon_longitude_deg(0.0);
        let b = moon_longitude_deg(day);
        let step = (b - a).rem_euclid(360.0);
        assert!((11.0..16.0).contains(&step), "daily motion {step}°");
    }
}
