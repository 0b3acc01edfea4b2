//! Natal chart assembly: the full pipeline from a moment to placements,
//! aspects, and balance.

use serde::{Deserialize, Serialize};

use natal_ephem::{ALL_BODIES, Body, EphemerisSource};

use crate::aspect::{AspectConfig, AspectHit, scan_aspects};
use crate::balance::{BalanceWeights, ChartBalance, chart_balance};
use crate::cusps::{HouseWheel, compute_houses, house_of};
use crate::error::ChartError;
use crate::geo::GeoMoment;
use crate::sign::Sign;

/// A point placed in a chart: one of the 10 bodies or a chart axis.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ChartPoint {
    Body(Body),
    Ascendant,
    Midheaven,
}

impl ChartPoint {
    /// English display name.
    pub const fn name(self) -> &'static str {
        match self {
            Self::Body(b) => b.name(),
            Self::Ascendant => "Ascendant",
            Self::Midheaven => "Midheaven",
        }
    }
}

/// One chart point located by sign, longitude, and house.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Placement {
    pub point: ChartPoint,
    pub sign: Sign,
    /// Ecliptic longitude, degrees in [0, 360).
    pub longitude_deg: f64,
    pub house: u8,
}

/// Settings for a natal chart computation.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, Default)]
pub struct ChartConfig {
    pub aspects: AspectConfig,
    pub weights: BalanceWeights,
}

impl ChartConfig {
    pub fn validate(&self) -> Result<(), ChartError> {
        self.aspects.validate()
    }
}

/// A fully computed natal chart.
#[derive(Debug, Clone, PartialEq)]
pub struct NatalChart {
    pub moment: GeoMoment,
    pub houses: HouseWheel,
    /// The 10 bodies followed by the Ascendant and Midheaven.
    pub placements: Vec<Placement>,
    pub aspects: Vec<AspectHit>,
    pub balance: ChartBalance,
}

impl NatalChart {
    /// The placement of one chart point, if present.
    pub fn placement(&self, point: ChartPoint) -> Option<&Placement> {
        self.placements.iter().find(|p| p.point == point)
    }

    /// Body placements only, axes skipped.
    pub fn body_placements(&self) -> impl Iterator<Item = &Placement> {
        self.placements
            .iter()
            .filter(|p| matches!(p.point, ChartPoint::Body(_)))
    }
}

/// Place one longitude into the wheel.
fn place(
    point: ChartPoint,
    longitude_deg: f64,
    houses: &HouseWheel,
) -> Result<Placement, ChartError> {
    let lon = longitude_deg.rem_euclid(360.0);
    Ok(Placement {
        point,
        sign: Sign::from_longitude(lon),
        longitude_deg: lon,
        house: house_of(lon, &houses.cusps)?,
    })
}

/// Compute a complete natal chart.
///
/// Fails as a whole on any error: placements depend on the cusp table, so
/// there is no meaningful partial result.
pub fn compute_natal_chart<E: EphemerisSource>(
    ephemeris: &E,
    moment: &GeoMoment,
    config: &ChartConfig,
) -> Result<NatalChart, ChartError> {
    config.validate()?;
    let houses = compute_houses(moment)?;
    let jd = moment.jd_utc();

    let mut placements = Vec::with_capacity(ALL_BODIES.len() + 2);
    for body in ALL_BODIES {
        let lon = ephemeris.ecliptic_longitude(body, jd)?;
        placements.push(place(ChartPoint::Body(body), lon, &houses)?);
    }
    placements.push(place(ChartPoint::Ascendant, houses.ascendant_deg, &houses)?);
    placements.push(place(ChartPoint::Midheaven, houses.midheaven_deg, &houses)?);

    let aspects = scan_aspects(&placements, &config.aspects);
    let balance = chart_balance(&placements, &config.weights);

    Ok(NatalChart {
        moment: *moment,
        houses,
        placements,
        aspects,
        balance,
    })
}
