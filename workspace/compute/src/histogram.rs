//! Stacked age histogram: 15 equal-width bins subdivided by `outcome`.
//!
//! Bin edges are computed once from the full table's age range, never per
//! outcome, so the per-outcome counts stack over identical bins. Bins are
//! half-open `[e_i, e_i+1)` except the last, which is closed so the observed
//! maximum lands in the final bin and the bins partition `[min, max]` exactly.

use common::{AgeHistogram, OutcomeBins};
use polars::prelude::*;
use tracing::instrument;

use crate::error::{ComputeError, Result};

/// Number of equal-width bins the age axis is partitioned into.
pub const AGE_BINS: usize = 15;

/// Stacked frequency histogram of `age` subdivided by `outcome`, with
/// outcomes in first-appearance order. Rows with a null age or outcome are
/// excluded. An empty table yields empty edges and no series.
#[instrument(skip(df))]
pub fn age_histogram(df: &DataFrame) -> Result<AgeHistogram> {
    for column in ["outcome", "age"] {
        if df.column(column).is_err() {
            return Err(ComputeError::MissingColumn {
                column: column.to_string(),
            });
        }
    }

    let outcomes = df.column("outcome")?.as_materialized_series().clone();
    let outcomes = outcomes.str()?;
    let ages = df
        .column("age")?
        .as_materialized_series()
        .cast(&DataType::Float64)?;
    let ages = ages.f64()?;

    let mut rows: Vec<(String, f64)> = Vec::with_capacity(df.height());
    for (outcome, age) in outcomes.into_iter().zip(ages) {
        let (Some(outcome), Some(age)) = (outcome, age) else {
            continue;
        };
        rows.push((outcome.to_string(), age));
    }

    if rows.is_empty() {
        return Ok(AgeHistogram {
            edges: Vec::new(),
            series: Vec::new(),
        });
    }

    let min = rows.iter().map(|(_, a)| *a).fold(f64::INFINITY, f64::min);
    let max = rows
        .iter()
        .map(|(_, a)| *a)
        .fold(f64::NEG_INFINITY, f64::max);
    let width = (max - min) / AGE_BINS as f64;

    let mut edges: Vec<f64> = (0..=AGE_BINS).map(|i| min + width * i as f64).collect();
    // Pin the last edge to the observed max so no float drift leaks past it.
    edges[AGE_BINS] = max;

    let mut order: Vec<String> = Vec::new();
    let mut series: Vec<Vec<u32>> = Vec::new();
    for (outcome, age) in rows {
        let idx = match order.iter().position(|o| *o == outcome) {
            Some(idx) => idx,
            None => {
                order.push(outcome);
                series.push(vec![0; AGE_BINS]);
                series.len() - 1
            }
        };
        series[idx][bin_index(age, min, width)] += 1;
    }

    Ok(AgeHistogram {
        edges,
        series: order
            .into_iter()
            .zip(series)
            .map(|(outcome, counts)| OutcomeBins { outcome, counts })
            .collect(),
    })
}

/// Bin index for `age`; a zero-width range (all ages equal) collapses to bin 0
/// and the maximum falls in the last bin.
fn bin_index(age: f64, min: f64, width: f64) -> usize {
    if width == 0.0 {
        return 0;
    }
    (((age - min) / width).floor() as usize).min(AGE_BINS - 1)
}
