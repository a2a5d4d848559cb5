use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// One row of a category-count table: a distinct value and how many visit
/// records carry it.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema, PartialEq)]
pub struct CategoryCount {
    /// Distinct category value (department name, diagnosis, `YYYY-MM` month).
    pub label: String,
    /// Number of rows sharing the value.
    pub count: u32,
}

impl CategoryCount {
    pub fn new(label: impl Into<String>, count: u32) -> Self {
        Self {
            label: label.into(),
            count,
        }
    }
}

/// Derived table produced by the category-count aggregator.
///
/// Row order is part of the contract: descending by count for the department
/// and diagnosis variants, ascending by label for the monthly variant.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema, PartialEq)]
pub struct CategoryCounts {
    /// Source column the counts were taken over.
    pub column: String,
    /// Ordered (value, count) rows.
    pub rows: Vec<CategoryCount>,
}

impl CategoryCounts {
    pub fn new(column: impl Into<String>, rows: Vec<CategoryCount>) -> Self {
        Self {
            column: column.into(),
            rows,
        }
    }

    /// Sum of all counts; equals the row count of the source table.
    pub fn total(&self) -> u64 {
        self.rows.iter().map(|r| u64::from(r.count)).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}
