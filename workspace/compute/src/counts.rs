//! Category-count aggregation: distinct value -> occurrence count.
//!
//! Used three times by the dashboard (department, diagnosis, month). The
//! department and diagnosis variants order by descending count; the monthly
//! variant orders chronologically so the trend reads left to right. Ties in
//! the descending variants keep first-appearance order: the group-by and the
//! sort are both stable, so the result is deterministic for any input.

use common::{CategoryCount, CategoryCounts};
use polars::prelude::*;
use tracing::instrument;

use crate::error::{ComputeError, Result};

/// Counts occurrences of each distinct value in `column`, descending by count.
///
/// Null values are excluded, matching the original dashboard's counting
/// semantics. An empty table yields an empty derived table.
#[instrument(skip(df))]
pub fn category_counts(df: &DataFrame, column: &str) -> Result<CategoryCounts> {
    require_column(df, column)?;

    let counted = df
        .clone()
        .lazy()
        .filter(col(column).is_not_null())
        .group_by_stable([col(column)])
        .agg([len().alias("count")])
        .sort(
            ["count"],
            SortMultipleOptions::default()
                .with_order_descending(true)
                .with_maintain_order(true),
        )
        .collect()?;

    Ok(CategoryCounts::new(column, extract_rows(&counted, column)?))
}

/// Counts visits per `YYYY-MM` month of `visit_date`, ascending by month.
///
/// The month label is derived on a private projection; the input table is
/// never mutated, so aggregators stay order independent.
#[instrument(skip(df))]
pub fn monthly_counts(df: &DataFrame) -> Result<CategoryCounts> {
    require_column(df, "visit_date")?;

    let counted = df
        .clone()
        .lazy()
        .filter(col("visit_date").is_not_null())
        .select([col("visit_date").dt().to_string("%Y-%m").alias("month")])
        .group_by_stable([col("month")])
        .agg([len().alias("count")])
        .sort(["month"], SortMultipleOptions::default())
        .collect()?;

    Ok(CategoryCounts::new("month", extract_rows(&counted, "month")?))
}

fn require_column(df: &DataFrame, column: &str) -> Result<()> {
    if df.column(column).is_err() {
        return Err(ComputeError::MissingColumn {
            column: column.to_string(),
        });
    }
    Ok(())
}

fn extract_rows(counted: &DataFrame, column: &str) -> Result<Vec<CategoryCount>> {
    let labels = counted.column(column)?.as_materialized_series().clone();
    let labels = labels.str()?;
    let counts = counted.column("count")?.as_materialized_series().clone();
    let counts = counts.u32()?;

    let mut rows = Vec::with_capacity(counted.height());
    for (label, count) in labels.into_iter().zip(counts) {
        let (Some(label), Some(count)) = (label, count) else {
            continue;
        };
        rows.push(CategoryCount::new(label, count));
    }
    Ok(rows)
}
