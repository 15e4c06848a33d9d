//! Terminal and NDJSON presentation for the `strata` binary

pub mod json;
pub mod primitives;
pub mod terminal;
pub mod theme;
pub mod views;
