//! Zodiac signs, their element/modality classification, and degree formatting.

use serde::{Deserialize, Serialize};

/// The 12 tropical zodiac signs, 30° each from 0° Aries.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Sign {
    Aries,
    Taurus,
    Gemini,
    Cancer,
    Leo,
    Virgo,
    Libra,
    Scorpio,
    Sagittarius,
    Capricorn,
    Aquarius,
    Pisces,
}

/// All 12 signs in zodiacal order.
pub const ALL_SIGNS: [Sign; 12] = [
    Sign::Aries,
    Sign::Taurus,
    Sign::Gemini,
    Sign::Cancer,
    Sign::Leo,
    Sign::Virgo,
    Sign::Libra,
    Sign::Scorpio,
    Sign::Sagittarius,
    Sign::Capricorn,
    Sign::Aquarius,
    Sign::Pisces,
];

/// The four classical elements.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Element {
    Fire,
    Earth,
    Air,
    Water,
}

/// The three modalities (qualities).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Modality {
    Cardinal,
    Fixed,
    Mutable,
}

impl Sign {
    /// Sign containing an ecliptic longitude.
    ///
    /// Equal 30° segments from 0° Aries. The input is normalized first; the
    /// index is clamped so a longitude of exactly 360.0 (possible only
    /// through float round-off upstream) still lands in Pisces.
    pub fn from_longitude(longitude_deg: f64) -> Self {
        let idx = (longitude_deg.rem_euclid(360.0) / 30.0) as usize;
        ALL_SIGNS[idx.min(11)]
    }

    /// English display name.
    pub const fn name(self) -> &'static str {
        match self {
            Self::Aries => "Aries",
            Self::Taurus => "Taurus",
            Self::Gemini => "Gemini",
            Self::Cancer => "Cancer",
            Self::Leo => "Leo",
            Self::Virgo => "Virgo",
            Self::Libra => "Libra",
            Self::Scorpio => "Scorpio",
            Self::Sagittarius => "Sagittarius",
            Self::Capricorn => "Capricorn",
            Self::Aquarius => "Aquarius",
            Self::Pisces => "Pisces",
        }
    }

    /// 0-based zodiacal index (Aries = 0).
    pub const fn index(self) -> u8 {
        match self {
            Self::Aries => 0,
            Self::Taurus => 1,
            Self::Gemini => 2,
            Self::Cancer => 3,
            Self::Leo => 4,
            Self::Virgo => 5,
            Self::Libra => 6,
            Self::Scorpio => 7,
            Self::Sagittarius => 8,
            Self::Capricorn => 9,
            Self::Aquarius => 10,
            Self::Pisces => 11,
        }
    }

    /// Ecliptic longitude where this sign begins.
    pub const fn start_degree(self) -> f64 {
        self.index() as f64 * 30.0
    }

    /// Classical element, by the fixed element wheel (Fire-Earth-Air-Water
    /// repeating from Aries).
    pub const fn element(self) -> Element {
        match self {
            Self::Aries | Self::Leo | Self::Sagittarius => Element::Fire,
            Self::Taurus | Self::Virgo | Self::Capricorn => Element::Earth,
            Self::Gemini | Self::Libra | Self::Aquarius => Element::Air,
            Self::Cancer | Self::Scorpio | Self::Pisces => Element::Water,
        }
    }

    /// Modality, by the fixed quality wheel (Cardinal-Fixed-Mutable
    /// repeating from Aries).
    pub const fn modality(self) -> Modality {
        match self {
            Self::Aries | Self::Cancer | Self::Libra | Self::Capricorn => Modality::Cardinal,
            Self::Taurus | Self::Leo | Self::Scorpio | Self::Aquarius => Modality::Fixed,
            Self::Gemini | Self::Virgo | Self::Sagittarius | Self::Pisces => Modality::Mutable,
        }
    }

    /// All 12 signs in order.
    pub const fn all() -> &'static [Sign; 12] {
        &ALL_SIGNS
    }
}

impl Element {
    pub const fn name(self) -> &'static str {
        match self {
            Self::Fire => "Fire",
            Self::Earth => "Earth",
            Self::Air => "Air",
            Self::Water => "Water",
        }
    }
}

impl Modality {
    pub const fn name(self) -> &'static str {
        match self {
            Self::Cardinal => "Cardinal",
            Self::Fixed => "Fixed",
            Self::Mutable => "Mutable",
        }
    }
}

/// Degrees and arc-minutes within a sign.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Dms {
    pub degrees: u32,
    pub minutes: u32,
}

impl Dms {
    /// Convert a degree value in [0, 30) (or any non-negative span) to
    /// whole degrees plus rounded arc-minutes, carrying when the minutes
    /// round up to 60.
    pub fn from_degrees(value: f64) -> Self {
        let value = value.max(0.0);
        let mut degrees = value.floor() as u32;
        let mut minutes = ((value - value.floor()) * 60.0).round() as u32;
        if minutes == 60 {
            degrees += 1;
            minutes = 0;
        }
        Self { degrees, minutes }
    }

    /// Back to decimal degrees.
    pub fn to_degrees(self) -> f64 {
        self.degrees as f64 + self.minutes as f64 / 60.0
    }
}

impl std::fmt::Display for Dms {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}°{:02}'", self.degrees, self.minutes)
    }
}

/// Split an ecliptic longitude into its sign and degree-within-sign.
pub fn sign_position(longitude_deg: f64) -> (Sign, Dms) {
    let lon = longitude_deg.rem_euclid(360.0);
    let sign = Sign::from_longitude(lon);
    (sign, Dms::from_degrees(lon - sign.start_degree()))
}
