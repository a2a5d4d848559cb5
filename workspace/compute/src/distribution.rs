//! Grouped box-plot summary of `symptom_score` by `outcome`.
//!
//! Quartiles use linear interpolation between closest ranks (the chart
//! library's default quartile method, re-implemented here so the derived
//! table is a testable value): `pos = p * (n - 1)`, interpolating between the
//! neighbouring order statistics. Whiskers extend to the most extreme
//! observations within 1.5 IQR of the quartiles; anything beyond is an
//! outlier.

use common::OutcomeBoxSummary;
use polars::prelude::*;
use tracing::instrument;

use crate::error::{ComputeError, Result};

/// Five-number summary plus outliers of `symptom_score` per distinct
/// `outcome`, in first-appearance order. Rows with a null outcome or score
/// are excluded.
#[instrument(skip(df))]
pub fn score_distribution(df: &DataFrame) -> Result<Vec<OutcomeBoxSummary>> {
    for column in ["outcome", "symptom_score"] {
        if df.column(column).is_err() {
            return Err(ComputeError::MissingColumn {
                column: column.to_string(),
            });
        }
    }

    let outcomes = df.column("outcome")?.as_materialized_series().clone();
    let outcomes = outcomes.str()?;
    let scores = df
        .column("symptom_score")?
        .as_materialized_series()
        .cast(&DataType::Float64)?;
    let scores = scores.f64()?;

    // Group scores per outcome, preserving the order outcomes first appear in.
    let mut order: Vec<String> = Vec::new();
    let mut groups: Vec<Vec<f64>> = Vec::new();
    for (outcome, score) in outcomes.into_iter().zip(scores) {
        let (Some(outcome), Some(score)) = (outcome, score) else {
            continue;
        };
        match order.iter().position(|o| o == outcome) {
            Some(idx) => groups[idx].push(score),
            None => {
                order.push(outcome.to_string());
                groups.push(vec![score]);
            }
        }
    }

    Ok(order
        .into_iter()
        .zip(groups)
        .map(|(outcome, scores)| summarize(outcome, scores))
        .collect())
}

fn summarize(outcome: String, mut scores: Vec<f64>) -> OutcomeBoxSummary {
    scores.sort_by(|a, b| a.total_cmp(b));
    let count = scores.len() as u32;
    let min = scores[0];
    let max = scores[scores.len() - 1];
    let q1 = quantile(&scores, 0.25);
    let median = quantile(&scores, 0.5);
    let q3 = quantile(&scores, 0.75);

    let iqr = q3 - q1;
    let lower_fence = q1 - 1.5 * iqr;
    let upper_fence = q3 + 1.5 * iqr;
    let lower_whisker = scores
        .iter()
        .copied()
        .find(|&s| s >= lower_fence)
        .unwrap_or(min);
    let upper_whisker = scores
        .iter()
        .rev()
        .copied()
        .find(|&s| s <= upper_fence)
        .unwrap_or(max);
    let outliers: Vec<f64> = scores
        .iter()
        .copied()
        .filter(|&s| s < lower_fence || s > upper_fence)
        .collect();

    OutcomeBoxSummary {
        outcome,
        count,
        min,
        q1,
        median,
        q3,
        max,
        lower_whisker,
        upper_whisker,
        outliers,
    }
}

/// Linear interpolation between closest ranks over an ascending slice.
fn quantile(sorted: &[f64], p: f64) -> f64 {
    debug_assert!(!sorted.is_empty());
    let pos = p * (sorted.len() - 1) as f64;
    let lo = pos.floor() as usize;
    let hi = pos.ceil() as usize;
    if lo == hi {
        return sorted[lo];
    }
    sorted[lo] + (sorted[hi] - sorted[lo]) * (pos - lo as f64)
}
