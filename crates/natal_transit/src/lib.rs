//! Slow-body transit scanning against a natal chart.
//!
//! The scan samples Jupiter through Pluto at the start, midpoint, and end
//! of a date range, records each body's movement (sign and natal house at
//! the endpoints), and scores aspect contacts with natal points using
//! tight transit orbs. Results are deduplicated and ranked; see
//! [`scan_transits`].

pub mod error;
pub mod scan;
pub mod types;

pub use error::TransitError;
pub use scan::scan_transits;
pub use types::{
    BodyMovement, TransitConfig, TransitHit, TransitRange, TransitReport, TransitWeights,
};
