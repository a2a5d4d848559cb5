use std::path::Path;

use anyhow::Result;
use tracing::info;

/// Loads both source tables and reports their row counts.
///
/// Any loader failure (unreadable file, missing column, unparsable date)
/// propagates and exits non-zero.
pub fn check(visits: &Path, forecast: &Path) -> Result<()> {
    let visits_df = compute::loader::load_visits(visits)?;
    info!(
        "visit records: {} rows from {}",
        visits_df.height(),
        visits.display()
    );

    let forecast_df = compute::loader::load_forecast(forecast)?;
    info!(
        "forecast table: {} rows from {}",
        forecast_df.height(),
        forecast.display()
    );

    info!("both tables loaded successfully");
    Ok(())
}
