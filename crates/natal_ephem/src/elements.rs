//! Mean Keplerian elements for the planets.
//!
//! Values from E.M. Standish, "Keplerian Elements for Approximate Positions
//! of the Major Planets" (JPL), Table 1: elements and secular rates valid
//! for 1800 AD – 2050 AD, referred to the mean ecliptic and equinox of
//! J2000. Public domain.
//!
//! "EmBary" is the Earth–Moon barycenter; geocentric longitudes treat it as
//! the observer, which is fine at arcminute accuracy.

/// One planet's mean elements at J2000 plus per-century rates.
///
/// Units: au for `a`, degrees for the four angles, Julian centuries for rates.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MeanElements {
    /// Semi-major axis, au.
    pub a: f64,
    /// Eccentricity.
    pub e: f64,
    /// Inclination to the ecliptic, degrees.
    pub i_deg: f64,
    /// Mean longitude, degrees.
    pub l_deg: f64,
    /// Longitude of perihelion, degrees.
    pub peri_deg: f64,
    /// Longitude of the ascending node, degrees.
    pub node_deg: f64,
    /// Rates per Julian century, same order and units.
    pub a_dot: f64,
    pub e_dot: f64,
    pub i_dot: f64,
    pub l_dot: f64,
    pub peri_dot: f64,
    pub node_dot: f64,
}

impl MeanElements {
    /// Propagate the elements to `t` Julian centuries past J2000.
    pub fn at(&self, t: f64) -> PropagatedElements {
        PropagatedElements {
            a: self.a + self.a_dot * t,
            e: self.e + self.e_dot * t,
            i_deg: self.i_deg + self.i_dot * t,
            l_deg: self.l_deg + self.l_dot * t,
            peri_deg: self.peri_deg + self.peri_dot * t,
            node_deg: self.node_deg + self.node_dot * t,
        }
    }
}

/// Elements evaluated at a specific epoch.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PropagatedElements {
    pub a: f64,
    pub e: f64,
    pub i_deg: f64,
    pub l_deg: f64,
    pub peri_deg: f64,
    pub node_deg: f64,
}

/// Heliocentric targets with Standish element entries.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum HelioTarget {
    Mercury,
    Venus,
    EmBary,
    Mars,
    Jupiter,
    Saturn,
    Uranus,
    Neptune,
    Pluto,
}

pub const MERCURY: MeanElements = MeanElements {
    a: 0.387_099_27,
    e: 0.205_635_93,
    i_deg: 7.004_979_02,
    l_deg: 252.250_323_50,
    peri_deg: 77.457_796_28,
    node_deg: 48.330_765_93,
    a_dot: 0.000_000_37,
    e_dot: 0.000_019_06,
    i_dot: -0.005_947_49,
    l_dot: 149_472.674_111_75,
    peri_dot: 0.160_476_89,
    node_dot: -0.125_340_81,
};

pub const VENUS: MeanElements = MeanElements {
    a: 0.723_335_66,
    e: 0.006_776_72,
    i_deg: 3.394_676_05,
    l_deg: 181.979_099_50,
    peri_deg: 131.602_467_18,
    node_deg: 76.679_842_55,
    a_dot: 0.000_003_90,
    e_dot: -0.000_041_07,
    i_dot: -0.000_788_90,
    l_dot: 58_517.815_387_29,
    peri_dot: 0.002_683_29,
    node_dot: -0.277_694_18,
};

pub const EM_BARY: MeanElements = MeanElements {
    a: 1.000_002_61,
    e: 0.016_711_23,
    i_deg: -0.000_015_31,
    l_deg: 100.464_571_66,
    peri_deg: 102.937_681_93,
    node_deg: 0.0,
    a_dot: 0.000_005_62,
    e_dot: -0.000_043_92,
    i_dot: -0.012_946_68,
    l_dot: 35_999.372_449_81,
    peri_dot: 0.323_273_64,
    node_dot: 0.0,
};

pub const MARS: MeanElements = MeanElements {
    a: 1.523_710_34,
    e: 0.093_394_10,
    i_deg: 1.849_691_42,
    l_deg: -4.553_432_05,
    peri_deg: -23.943_629_59,
    node_deg: 49.559_538_91,
    a_dot: 0.000_018_47,
    e_dot: 0.000_078_82,
    i_dot: -0.008_131_31,
    l_dot: 19_140.302_684_99,
    peri_dot: 0.444_410_88,
    node_dot: -0.292_573_43,
};

pub const JUPITER: MeanElements = MeanElements {
    a: 5.202_887_00,
    e: 0.048_386_24,
    i_deg: 1.304_396_95,
    l_deg: 34.396_440_51,
    peri_deg: 14.728_479_83,
    node_deg: 100.473_909_09,
    a_dot: -0.000_116_07,
    e_dot: -0.000_132_53,
    i_dot: -0.001_837_14,
    l_dot: 3_034.746_127_75,
    peri_dot: 0.212_526_68,
    node_dot: 0.204_691_06,
};

pub const SATURN: MeanElements = MeanElements {
    a: 9.536_675_94,
    e: 0.053_861_79,
    i_deg: 2.485_991_87,
    l_deg: 49.954_244_23,
    peri_deg: 92.598_878_31,
    node_deg: 113.662_424_48,
    a_dot: -0.001_250_60,
    e_dot: -0.000_509_91,
    i_dot: 0.001_936_09,
    l_dot: 1_222.493_622_01,
    peri_dot: -0.418_972_16,
    node_dot: -0.288_677_94,
};

pub const URANUS: MeanElements = MeanElements {
    a: 19.189_164_64,
    e: 0.047_257_44,
    i_deg: 0.772_637_83,
    l_deg: 313.238_104_51,
    peri_deg: 170.954_276_30,
    node_deg: 74.016_925_03,
    a_dot: -0.001_961_76,
    e_dot: -0.000_043_97,
    i_dot: -0.002_429_39,
    l_dot: 428.482_027_85,
    peri_dot: 0.408_052_81,
    node_dot: 0.042_405_89,
};

pub const NEPTUNE: MeanElements = MeanElements {
    a: 30.069_922_76,
    e: 0.008_590_48,
    i_deg: 1.770_043_47,
    l_deg: -55.120_029_69,
    peri_deg: 44.964_762_27,
    node_deg: 131.784_225_74,
    a_dot: 0.000_262_91,
    e_dot: 0.000_051_05,
    i_dot: 0.000_353_72,
    l_dot: 218.459_453_25,
    peri_dot: -0.322_414_64,
    node_dot: -0.005_086_64,
};

pub const PLUTO: MeanElements = MeanElements {
    a: 39.482_116_75,
    e: 0.248_827_30,
    i_deg: 17.140_012_06,
    l_deg: 238.929_038_33,
    peri_deg: 224.068_916_29,
    node_deg: 110.303_936_84,
    a_dot: -0.000_315_96,
    e_dot: 0.000_051_70,
    i_dot: 0.000_048_18,
    l_dot: 145.207_805_15,
    peri_dot: -0.040_629_42,
    node_dot: -0.011_834_82,
};

impl HelioTarget {
    /// The Standish element entry for this target.
    pub const fn elements(self) -> &'static MeanElements {
        match self {
            Self::Mercury => &MERCURY,
            Self::Venus => &VENUS,
            Self::EmBary => &EM_BARY,
            Self::Mars => &MARS,
            Self::Jupiter => &JUPITER,
            Self::Saturn => &SATURN,
            Self::Uranus => &URANUS,
            Self::Neptune => &NEPTUNE,
            Self::Pluto => &PLUTO,
        }
    }
}
