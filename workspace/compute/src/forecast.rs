//! Typed extraction and CSV serialization of the forecast table.

use common::{ForecastPoint, ForecastSeries};
use polars::prelude::*;
use tracing::instrument;

use crate::error::{ComputeError, Result};

/// Extracts the forecast table into aligned, typed series.
///
/// The loader already sorted the table ascending by `ds`, so the three value
/// series share one chronological x-axis by construction. Null cells are a
/// contract violation of the pre-computed table and are reported, not
/// skipped: dropping one row's bound would silently misalign the band.
#[instrument(skip(df))]
pub fn forecast_series(df: &DataFrame) -> Result<ForecastSeries> {
    let ds = df.column("ds")?.as_materialized_series().clone();
    let ds = ds.date()?;
    let yhat = df.column("yhat")?.as_materialized_series().clone();
    let yhat = yhat.f64()?;
    let lower = df.column("yhat_lower")?.as_materialized_series().clone();
    let lower = lower.f64()?;
    let upper = df.column("yhat_upper")?.as_materialized_series().clone();
    let upper = upper.f64()?;

    let mut points = Vec::with_capacity(df.height());
    for (i, (((ds, yhat), lower), upper)) in ds
        .as_date_iter()
        .zip(yhat)
        .zip(lower)
        .zip(upper)
        .enumerate()
    {
        let (Some(ds), Some(yhat), Some(lower), Some(upper)) = (ds, yhat, lower, upper) else {
            return Err(ComputeError::DataFrame(format!(
                "forecast row {i} has a null cell"
            )));
        };
        points.push(ForecastPoint::new(ds, yhat, lower, upper));
    }

    Ok(ForecastSeries::new(points))
}

/// Serializes the forecast table back to CSV for the download affordance.
///
/// Re-parsing the output through the loader yields a table equal to the
/// original, row for row and column for column.
#[instrument(skip(df))]
pub fn forecast_to_csv(df: &DataFrame) -> Result<String> {
    let mut buf = Vec::new();
    CsvWriter::new(&mut buf)
        .include_header(true)
        .finish(&mut df.clone())
        .map_err(|e| ComputeError::Csv(e.to_string()))?;
    String::from_utf8(buf).map_err(|e| ComputeError::Csv(e.to_string()))
}
