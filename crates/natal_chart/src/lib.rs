//! Tropical natal chart computation.
//!
//! The pipeline: a [`GeoMoment`] (UTC instant + observer location) feeds the
//! house cusp engine and the ephemeris provider; their outputs are resolved
//! into sign/house [`Placement`]s, scanned for [`AspectHit`]s, and tallied
//! into a [`ChartBalance`]. [`compute_natal_chart`] runs the whole chain.
//!
//! House system: Ascendant/Midheaven from the standard spherical formulas,
//! intermediate cusps by Porphyry-style quadrant trisection (see
//! [`cusps`] for why this is not true Placidus).

pub mod angle;
pub mod aspect;
pub mod balance;
pub mod chart;
pub mod cusps;
pub mod error;
pub mod geo;
pub mod sign;

pub use aspect::{ALL_ASPECTS, Aspect, AspectConfig, AspectHit, AspectOrbs};
pub use balance::{BalanceWeights, ChartBalance};
pub use chart::{ChartConfig, ChartPoint, NatalChart, Placement, compute_natal_chart};
pub use cusps::{CuspTable, HouseWheel, OBLIQUITY_DEG, compute_houses, house_of};
pub use error::ChartError;
pub use geo::GeoMoment;
pub use sign::{ALL_SIGNS, Dms, Element, Modality, Sign, sign_position};
