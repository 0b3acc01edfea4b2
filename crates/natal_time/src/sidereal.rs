//! Sidereal time, the bridge from a UTC instant to the RAMC.
//!
//! The cusp engine needs the right ascension of the local meridian, which is
//! nothing more than the local sidereal time. It is assembled in two steps:
//! the Earth Rotation Angle in the modern stellar-angle formulation (IERS
//! Conventions 2010, Eq. 5.15), plus the small accumulated-precession
//! polynomial that turns ERA into GMST (Capitaine et al. 2003, Table 2),
//! then the observer's east longitude on top.
//!
//! The formulas want UT1 Julian Dates. This workspace feeds UTC JD straight
//! in and accepts the sub-second UT1−UTC difference (see the crate docs).

use std::f64::consts::{PI, TAU};

use crate::julian::J2000_JD;

const ARCSEC_TO_RAD: f64 = PI / (180.0 * 3600.0);

/// Earth Rotation Angle, radians in [0, 2π).
///
/// θ(Dᵤ) = 2π (0.7790572732640 + 1.00273781191135448 Dᵤ), with Dᵤ the UT1
/// days elapsed since J2000.0.
pub fn earth_rotation_angle_rad(jd_ut1: f64) -> f64 {
    let du = jd_ut1 - J2000_JD;
    (TAU * (0.779_057_273_264_0 + 1.002_737_811_911_354_6 * du)).rem_euclid(TAU)
}

/// Greenwich Mean Sidereal Time, radians in [0, 2π).
///
/// ERA plus the Capitaine polynomial, evaluated in Julian centuries from
/// J2000.0 and expressed in arcseconds.
pub fn gmst_rad(jd_ut1: f64) -> f64 {
    let t = (jd_ut1 - J2000_JD) / 36_525.0;
    let poly_arcsec = 0.014_506
        + t * (4_612.156_534
            + t * (1.391_581_7
                + t * (-0.000_000_44 + t * (-0.000_029_956 + t * -0.000_000_036_8))));
    (earth_rotation_angle_rad(jd_ut1) + poly_arcsec * ARCSEC_TO_RAD).rem_euclid(TAU)
}

/// Local sidereal time: GMST shifted by the observer's east longitude,
/// radians in [0, 2π). Numerically equal to the RAMC the cusps are built on.
pub fn local_sidereal_time_rad(gmst: f64, longitude_east_rad: f64) -> f64 {
    (gmst + longitude_east_rad).rem_euclid(TAU)
}
