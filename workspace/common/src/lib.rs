//! Common transport-layer types shared between the compute crate and the server.
//! Each struct here is the derived table one chart consumes; the backend
//! serializes them as-is in API responses, so the shapes double as the wire
//! contract.

mod counts;
mod distribution;
mod forecast;

pub use counts::{CategoryCount, CategoryCounts};
pub use distribution::{AgeHistogram, OutcomeBins, OutcomeBoxSummary};
pub use forecast::{ForecastPoint, ForecastSeries};
