//! Keplerian position evaluation and the built-in ephemeris provider.
//!
//! Follows the Standish recipe: propagate mean elements, solve Kepler's
//! equation, form the perifocal position, rotate into the J2000 ecliptic.
//! Geocentric longitudes subtract the Earth–Moon barycenter position and are
//! then precessed to the mean equinox of date, so they share a frame with
//! the tropical signs and the of-date house cusps. The lunar series already
//! yields of-date longitudes.
//!
//! Epochs are UTC Julian Dates. The UTC→TT offset (~70 s) moves the fastest
//! planet by under 0.005°, well below the accuracy of the element tables,
//! so no dynamical-time conversion is performed.

use natal_time::J2000_JD;

use crate::elements::{HelioTarget, PropagatedElements};
use crate::error::EphemError;
use crate::moon::moon_longitude_deg;
use crate::{Body, EphemerisSource};

/// First supported epoch: 1800-Jan-01 00:00 UTC.
pub const JD_MIN: f64 = 2_378_496.5;

/// Last supported epoch: 2050-Jan-01 00:00 UTC.
pub const JD_MAX: f64 = 2_469_807.5;

/// Newton iteration cap for Kepler's equation.
const MAX_KEPLER_ITERATIONS: usize = 50;

/// Convergence threshold for the eccentric anomaly, radians.
const KEPLER_TOLERANCE: f64 = 1e-12;

/// Accumulated general precession in ecliptic longitude since J2000, degrees.
///
/// p_A ≈ 5028.796195″·t + 1.1054348″·t², t in Julian centuries (IAU 2006).
/// The Standish elements are referred to the J2000 frame; adding p_A moves a
/// longitude to the mean equinox of date.
fn precession_deg(t: f64) -> f64 {
    (5_028.796_195 + 1.105_434_8 * t) * t / 3_600.0
}

/// Solve Kepler's equation M = E − e·sin E for the eccentric anomaly.
///
/// Newton's method seeded with E₀ = M + e·sin M. Converges in a handful of
/// iterations for all planetary eccentricities (max is Pluto at ~0.25).
fn solve_kepler(m_rad: f64, e: f64) -> Option<f64> {
    let mut ecc_anom = m_rad + e * m_rad.sin();
    for _ in 0..MAX_KEPLER_ITERATIONS {
        let delta = (ecc_anom - e * ecc_anom.sin() - m_rad) / (1.0 - e * ecc_anom.cos());
        ecc_anom -= delta;
        if delta.abs() < KEPLER_TOLERANCE {
            return Some(ecc_anom);
        }
    }
    None
}

/// Heliocentric J2000-ecliptic position (au) from propagated elements.
fn helio_position(el: &PropagatedElements) -> Option<[f64; 3]> {
    let peri = el.peri_deg.to_radians();
    let node = el.node_deg.to_radians();
    let incl = el.i_deg.to_radians();

    // Argument of perihelion and mean anomaly.
    let arg_peri = peri - node;
    let mean_anom = (el.l_deg - el.peri_deg).to_radians().rem_euclid(std::f64::consts::TAU);

    let ecc_anom = solve_kepler(mean_anom, el.e)?;

    // Perifocal coordinates.
    let xp = el.a * (ecc_anom.cos() - el.e);
    let yp = el.a * (1.0 - el.e * el.e).sqrt() * ecc_anom.sin();

    // Rotate by argument of perihelion, inclination, ascending node.
    let (sin_w, cos_w) = arg_peri.sin_cos();
    let (sin_o, cos_o) = node.sin_cos();
    let (sin_i, cos_i) = incl.sin_cos();

    let x = (cos_w * cos_o - sin_w * sin_o * cos_i) * xp
        + (-sin_w * cos_o - cos_w * sin_o * cos_i) * yp;
    let y = (cos_w * sin_o + sin_w * cos_o * cos_i) * xp
        + (-sin_w * sin_o + cos_w * cos_o * cos_i) * yp;
    let z = (sin_w * sin_i) * xp + (cos_w * sin_i) * yp;

    Some([x, y, z])
}

/// The built-in mean-element ephemeris provider.
///
/// Stateless and cheap to construct; a single instance can serve any number
/// of requests.
#[derive(Debug, Clone, Copy, Default)]
pub struct KeplerEphemeris;

impl KeplerEphemeris {
    pub fn new() -> Self {
        Self
    }

    fn check_epoch(jd_utc: f64) -> Result<(), EphemError> {
        if !jd_utc.is_finite() {
            return Err(EphemError::NonFiniteEpoch);
        }
        if !(JD_MIN..=JD_MAX).contains(&jd_utc) {
            return Err(EphemError::EpochOutOfRange { jd_utc });
        }
        Ok(())
    }

    /// Heliocentric J2000-ecliptic position of a Standish target, au.
    fn helio(target: HelioTarget, t: f64, name: &'static str) -> Result<[f64; 3], EphemError> {
        let el = target.elements().at(t);
        helio_position(&el).ok_or(EphemError::NoConvergence { body: name })
    }

    /// Geocentric ecliptic longitude (J2000 frame) from a heliocentric
    /// position and the observer (EMB) position.
    fn geocentric_longitude(planet: [f64; 3], emb: [f64; 3]) -> f64 {
        let x = planet[0] - emb[0];
        let y = planet[1] - emb[1];
        f64::atan2(y, x).to_degrees().rem_euclid(360.0)
    }
}

impl EphemerisSource for KeplerEphemeris {
    fn ecliptic_longitude(&self, body: Body, jd_utc: f64) -> Result<f64, EphemError> {
        Self::check_epoch(jd_utc)?;
        let t = (jd_utc - J2000_JD) / 36_525.0;

        let target = match body {
            // The lunar series is already referred to the equinox of date.
            Body::Moon => return Ok(moon_longitude_deg(t)),
            Body::Sun => {
                // Geocentric Sun is the antipode of the heliocentric EMB.
                let emb = Self::helio(HelioTarget::EmBary, t, "Sun")?;
                let lon = f64::atan2(-emb[1], -emb[0]).to_degrees();
                return Ok((lon + precession_deg(t)).rem_euclid(360.0));
            }
            Body::Mercury => HelioTarget::Mercury,
            Body::Venus => HelioTarget::Venus,
            Body::Mars => HelioTarget::Mars,
            Body::Jupiter => HelioTarget::Jupiter,
            Body::Saturn => HelioTarget::Saturn,
            Body::Uranus => HelioTarget::Uranus,
            Body::Neptune => HelioTarget::Neptune,
            Body::Pluto => HelioTarget::Pluto,
        };

        let planet = Self::helio(target, t, body.name())?;
        let emb = Self::helio(HelioTarget::EmBary, t, "Earth")?;
        let lon = Self::geocentric_longitude(planet, emb);
        Ok((lon + precession_deg(t)).rem_euclid(360.0))
    }
}
