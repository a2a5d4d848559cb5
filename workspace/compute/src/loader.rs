//! CSV loading for the two source tables.
//!
//! The loader is the only place that touches the filesystem. Both tables are
//! read once at startup and are immutable afterwards; any failure here aborts
//! startup rather than degrading into a partially rendered dashboard.

use std::fs::File;
use std::path::Path;

use polars::prelude::*;
use tracing::{debug, instrument};

use crate::error::{ComputeError, Result};

/// Columns the visit-record aggregators use.
pub const VISIT_COLUMNS: [&str; 6] = [
    "department",
    "symptom_score",
    "outcome",
    "diagnosis",
    "age",
    "visit_date",
];

/// Columns of the forecast table.
pub const FORECAST_COLUMNS: [&str; 4] = ["ds", "yhat", "yhat_lower", "yhat_upper"];

/// Loads the patient visit table.
///
/// Verifies that every column the aggregators use is present and that
/// `visit_date` parsed into a calendar date. No other columns are touched.
#[instrument]
pub fn load_visits(path: &Path) -> Result<DataFrame> {
    let mut df = read_csv(path)?;
    for column in VISIT_COLUMNS {
        require_column(&df, column)?;
    }
    ensure_date_column(&mut df, "visit_date")?;

    debug!(rows = df.height(), "loaded visit records");
    Ok(df)
}

/// Loads the forecast table, sorted ascending by `ds`.
///
/// The band chart relies on chronological order for its fill to connect the
/// right points, so the order is enforced here instead of trusted from the
/// file. The three value columns are cast to `Float64`.
#[instrument]
pub fn load_forecast(path: &Path) -> Result<DataFrame> {
    let mut df = read_csv(path)?;
    for column in FORECAST_COLUMNS {
        require_column(&df, column)?;
    }
    ensure_date_column(&mut df, "ds")?;
    for column in ["yhat", "yhat_lower", "yhat_upper"] {
        let casted = df
            .column(column)?
            .as_materialized_series()
            .cast(&DataType::Float64)?;
        df.with_column(casted)?;
    }
    let df = df.sort(["ds"], SortMultipleOptions::default())?;

    debug!(rows = df.height(), "loaded forecast table");
    Ok(df)
}

fn read_csv(path: &Path) -> Result<DataFrame> {
    let file = File::open(path).map_err(|source| ComputeError::Io {
        path: path.display().to_string(),
        source,
    })?;

    let df = CsvReadOptions::default()
        .with_has_header(true)
        .with_parse_options(CsvParseOptions::default().with_try_parse_dates(true))
        .into_reader_with_file_handle(file)
        .finish()?;
    Ok(df)
}

fn require_column(df: &DataFrame, column: &str) -> Result<()> {
    if df.column(column).is_err() {
        return Err(ComputeError::MissingColumn {
            column: column.to_string(),
        });
    }
    Ok(())
}

/// Checks that `column` parsed into a date type, truncating datetimes.
///
/// A header-only file leaves the column as `String` with nothing to infer
/// from; that is an empty table, not a parse failure, so the column is cast.
fn ensure_date_column(df: &mut DataFrame, column: &str) -> Result<()> {
    match df.column(column)?.dtype() {
        DataType::Date => Ok(()),
        DataType::String if df.height() == 0 => {
            let casted = df
                .column(column)?
                .as_materialized_series()
                .cast(&DataType::Date)?;
            df.with_column(casted)?;
            Ok(())
        }
        DataType::Datetime(_, _) => {
            let casted = df
                .column(column)?
                .as_materialized_series()
                .cast(&DataType::Date)?;
            df.with_column(casted)?;
            Ok(())
        }
        other => Err(ComputeError::Date(format!(
            "column '{column}' did not parse as a calendar date (found {other})"
        ))),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::{write_csv, FORECAST_CSV, VISITS_CSV};

    #[test]
    fn loads_visits_with_parsed_dates() {
        let (_dir, path) = write_csv(VISITS_CSV);
        let df = load_visits(&path).expect("visits should load");

        assert_eq!(df.height(), 8);
        assert_eq!(df.column("visit_date").unwrap().dtype(), &DataType::Date);
    }

    #[test]
    fn loads_forecast_sorted_by_ds() {
        // Rows deliberately out of order; the loader must sort them.
        let (_dir, path) = write_csv(
            "ds,yhat,yhat_lower,yhat_upper\n\
             2024-03-03,12.0,10.0,14.0\n\
             2024-03-01,10.0,8.0,12.0\n\
             2024-03-02,11.0,9.0,13.0\n",
        );
        let df = load_forecast(&path).expect("forecast should load");

        let ds = df.column("ds").unwrap().as_materialized_series().clone();
        let dates: Vec<_> = ds.date().unwrap().as_date_iter().flatten().collect();
        assert_eq!(dates.len(), 3);
        assert!(dates.windows(2).all(|w| w[0] < w[1]));
    }

    #[test]
    fn missing_file_is_an_io_error() {
        let err = load_visits(Path::new("does/not/exist.csv")).unwrap_err();
        assert!(matches!(err, ComputeError::Io { .. }));
    }

    #[test]
    fn missing_column_is_reported_by_name() {
        let (_dir, path) = write_csv("department,age\nER,40\n");
        let err = load_visits(&path).unwrap_err();
        match err {
            ComputeError::MissingColumn { column } => assert_eq!(column, "symptom_score"),
            other => panic!("expected MissingColumn, got {other:?}"),
        }
    }

    #[test]
    fn unparsable_date_column_is_a_date_error() {
        let (_dir, path) = write_csv(
            "department,symptom_score,outcome,diagnosis,age,visit_date\n\
             ER,5.0,Admitted,Flu,40,not-a-date\n",
        );
        let err = load_visits(&path).unwrap_err();
        assert!(matches!(err, ComputeError::Date(_)));
    }

    #[test]
    fn forecast_values_are_cast_to_floats() {
        let (_dir, path) = write_csv(FORECAST_CSV);
        let df = load_forecast(&path).expect("forecast should load");
        for column in ["yhat", "yhat_lower", "yhat_upper"] {
            assert_eq!(df.column(column).unwrap().dtype(), &DataType::Float64);
        }
    }
}
