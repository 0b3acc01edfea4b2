//! Plain-text rendering of natal charts and transit scans.
//!
//! The output-contract layer: computation crates produce enums and numbers,
//! this crate turns them into the report text. Degree-within-sign follows
//! the conventional `D°MM'` form, minutes rounded with carry.

pub mod format;
pub mod text;

pub use format::{format_aspect, format_placement, format_position};
pub use text::{aspect_phrase, full_report, house_theme, natal_report, transit_report};
