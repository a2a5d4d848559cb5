use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Box-plot summary of `symptom_score` for one `outcome` group.
///
/// Quartiles use linear interpolation between closest ranks; whiskers extend to
/// the most extreme observations within 1.5×IQR of the quartiles, and values
/// beyond the whiskers are listed in `outliers`.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema, PartialEq)]
pub struct OutcomeBoxSummary {
    /// Outcome label the group is restricted to.
    pub outcome: String,
    /// Number of scores in the group.
    pub count: u32,
    /// Smallest observed score.
    pub min: f64,
    /// First quartile.
    pub q1: f64,
    /// Median.
    pub median: f64,
    /// Third quartile.
    pub q3: f64,
    /// Largest observed score.
    pub max: f64,
    /// Lower whisker end (smallest value >= q1 - 1.5*IQR).
    pub lower_whisker: f64,
    /// Upper whisker end (largest value <= q3 + 1.5*IQR).
    pub upper_whisker: f64,
    /// Scores outside the whiskers, in ascending order.
    pub outliers: Vec<f64>,
}

/// Per-outcome bin counts of the stacked age histogram.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema, PartialEq)]
pub struct OutcomeBins {
    /// Outcome label of the stack segment.
    pub outcome: String,
    /// One count per bin, aligned with `AgeHistogram::edges`.
    pub counts: Vec<u32>,
}

/// Stacked frequency histogram of `age`, subdivided by `outcome`.
///
/// The bin edges are computed once from the full table's age range so every
/// outcome's counts stack over the same bins.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema, PartialEq)]
pub struct AgeHistogram {
    /// Bin edges, ascending; `bins + 1` values for `bins` equal-width bins.
    /// Empty when the source table has no rows.
    pub edges: Vec<f64>,
    /// One entry per outcome, in first-appearance order.
    pub series: Vec<OutcomeBins>,
}

impl AgeHistogram {
    /// Number of bins described by `edges`.
    pub fn bin_count(&self) -> usize {
        self.edges.len().saturating_sub(1)
    }

    /// Sum of all bin counts across outcomes; equals the source row count.
    pub fn total(&self) -> u64 {
        self.series
            .iter()
            .flat_map(|s| s.counts.iter())
            .map(|&c| u64::from(c))
            .sum()
    }
}
