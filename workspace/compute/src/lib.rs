//! Data layer for the dashboard: CSV loading and the per-chart aggregations.
//!
//! Every aggregator is a pure function over an already-loaded [`polars`]
//! `DataFrame` and returns the typed derived table from the `common` crate
//! that exactly one chart consumes. Nothing here mutates the shared tables.

pub mod counts;
pub mod distribution;
pub mod error;
pub mod forecast;
pub mod histogram;
pub mod loader;

pub use error::{ComputeError, Result};

#[cfg(test)]
pub(crate) mod testing;
