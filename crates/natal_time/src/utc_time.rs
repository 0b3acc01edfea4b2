//! UTC calendar date/time.
//!
//! `UtcTime` is the canonical instant type consumed by the chart pipeline.
//! It parses the `YYYY-MM-DDThh:mm:ssZ` form (seconds optional) and converts
//! to a UTC Julian Date.

use std::str::FromStr;

use crate::error::TimeError;
use crate::julian::{calendar_to_jd, jd_to_calendar};

/// UTC calendar date with sub-second precision.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct UtcTime {
    pub year: i32,
    pub month: u32,
    pub day: u32,
    pub hour: u32,
    pub minute: u32,
    pub second: f64,
}

impl UtcTime {
    /// Create a UTC time, validating field ranges.
    pub fn new(
        year: i32,
        month: u32,
        day: u32,
        hour: u32,
        minute: u32,
        second: f64,
    ) -> Result<Self, TimeError> {
        if !(1..=12).contains(&month) {
            return Err(TimeError::InvalidDate("month must be 1-12"));
        }
        if !(1..=days_in_month(year, month)).contains(&day) {
            return Err(TimeError::InvalidDate("day outside the month"));
        }
        if hour > 23 {
            return Err(TimeError::InvalidDate("hour must be 0-23"));
        }
        if minute > 59 {
            return Err(TimeError::InvalidDate("minute must be 0-59"));
        }
        if !(0.0..60.0).contains(&second) {
            return Err(TimeError::InvalidDate("second must be in [0, 60)"));
        }
        Ok(Self {
            year,
            month,
            day,
            hour,
            minute,
            second,
        })
    }

    /// Julian Date of this instant on the UTC scale.
    pub fn to_jd_utc(&self) -> f64 {
        let day_frac = self.day as f64
            + self.hour as f64 / 24.0
            + self.minute as f64 / 1440.0
            + self.second / 86_400.0;
        calendar_to_jd(self.year, self.month, day_frac)
    }

    /// Reconstruct a calendar time from a UTC Julian Date.
    ///
    /// The JD is snapped to the nearest millisecond first. An f64 JD in the
    /// covered era quantizes at tens of microseconds, so a microsecond snap
    /// would preserve that error and still decompose a :30:00 as :29:59.999;
    /// the millisecond grid absorbs it.
    pub fn from_jd_utc(jd_utc: f64) -> Self {
        let sec_past = ((jd_utc - crate::julian::J2000_JD) * 86_400.0 * 1e3).round() / 1e3;
        // J2000.0 is at 12:00, so civil midnights sit at −43200 mod 86400.
        let mut midnight_sec =
            (sec_past + 43_200.0).div_euclid(86_400.0) * 86_400.0 - 43_200.0;
        let mut sec_of_day = ((sec_past - midnight_sec) * 1e3).round() / 1e3;
        if sec_of_day >= 86_400.0 {
            midnight_sec += 86_400.0;
            sec_of_day = 0.0;
        }

        let jd_noon = crate::julian::J2000_JD + midnight_sec / 86_400.0 + 0.5;
        let (year, month, day_frac) = jd_to_calendar(jd_noon);
        let day = day_frac.floor() as u32;
        let hour = (sec_of_day / 3600.0).floor() as u32;
        let minute = ((sec_of_day % 3600.0) / 60.0).floor() as u32;
        let second = sec_of_day % 60.0;
        Self {
            year,
            month,
            day,
            hour,
            minute,
            second,
        }
    }

    /// Interpret a local wall-clock time with a fixed UTC offset in hours.
    ///
    /// A birth at 14:30 local with `utc_offset_hours = 3.0` is 11:30 UTC.
    /// Fractional offsets (e.g. +5.5 for IST) are supported.
    pub fn from_local(
        year: i32,
        month: u32,
        day: u32,
        hour: u32,
        minute: u32,
        second: f64,
        utc_offset_hours: f64,
    ) -> Result<Self, TimeError> {
        if utc_offset_hours.abs() > 14.0 {
            return Err(TimeError::InvalidDate("UTC offset must be within ±14 h"));
        }
        let local = Self::new(year, month, day, hour, minute, second)?;
        Ok(Self::from_jd_utc(local.to_jd_utc() - utc_offset_hours / 24.0))
    }
}

impl FromStr for UtcTime {
    type Err = TimeError;

    /// Parse `YYYY-MM-DDThh:mm:ssZ` (trailing `Z` and `:ss` optional).
    fn from_str(s: &str) -> Result<Self, TimeError> {
        let s = s.strip_suffix('Z').unwrap_or(s);
        let (date, time) = s
            .split_once('T')
            .ok_or_else(|| TimeError::Parse(format!("missing 'T' separator in {s:?}")))?;

        let mut date_parts = date.splitn(3, '-');
        let year = parse_field::<i32>(date_parts.next(), "year")?;
        let month = parse_field::<u32>(date_parts.next(), "month")?;
        let day = parse_field::<u32>(date_parts.next(), "day")?;

        let mut time_parts = time.splitn(3, ':');
        let hour = parse_field::<u32>(time_parts.next(), "hour")?;
        let minute = parse_field::<u32>(time_parts.next(), "minute")?;
        let second = match time_parts.next() {
            Some(sec) => parse_field::<f64>(Some(sec), "second")?,
            None => 0.0,
        };

        Self::new(year, month, day, hour, minute, second)
    }
}

fn days_in_month(year: i32, month: u32) -> u32 {
    match month {
        4 | 6 | 9 | 11 => 30,
        2 => {
            if is_leap_year(year) {
                29
            } else {
                28
            }
        }
        _ => 31,
    }
}

fn is_leap_year(year: i32) -> bool {
    year % 4 == 0 && (year % 100 != 0 || year % 400 == 0)
}

fn parse_field<T: FromStr>(field: Option<&str>, name: &str) -> Result<T, TimeError> {
    let raw = field.ok_or_else(|| TimeError::Parse(format!("missing {name}")))?;
    raw.parse()
        .map_err(|_| TimeError::Parse(format!("invalid {name}: {raw:?}")))
}

impl std::fmt::Display for UtcTime {
    /// ISO 8601 form with the seconds truncated to whole seconds. Truncation
    /// keeps :59.9 from rendering as an out-of-range :60.
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{:04}-{:02}-{:02}T{:02}:{:02}:{:02}Z",
            self.year,
            self.month,
            self.day,
            self.hour,
            self.minute,
            self.second.floor() as u32
        )
    }
}
