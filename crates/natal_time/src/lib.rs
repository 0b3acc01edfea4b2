//! Calendar and sidereal time support for chart computation.
//!
//! This crate provides:
//! - Julian Date ↔ calendar conversions
//! - Earth Rotation Angle / GMST / Local Sidereal Time
//! - A `UtcTime` calendar type with ISO-8601 parsing
//!
//! All chart computations run on UTC Julian Dates. The UT1−UTC offset
//! (never more than 0.9 s, under 0.004° of sidereal rotation) is ignored;
//! this is far below the accuracy of the house cusp approximation.

pub mod error;
pub mod julian;
pub mod sidereal;
pub mod utc_time;

pub use error::TimeError;
pub use julian::{J2000_JD, calendar_to_jd, jd_to_calendar};
pub use sidereal::{earth_rotation_angle_rad, gmst_rad, local_sidereal_time_rad};
pub use utc_time::UtcTime;
