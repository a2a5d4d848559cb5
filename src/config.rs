use std::path::{Path, PathBuf};

use anyhow::Result;
use tracing::info;

use crate::schemas::AppState;

/// Initialize application configuration and state.
///
/// Both tables are loaded exactly once here; handlers only ever see the
/// in-memory DataFrames.
pub async fn initialize_app_state() -> Result<AppState> {
    // Load configuration
    dotenvy::dotenv().ok();
    initialize_app_state_with_paths(&visits_path(), &forecast_path()).await
}

/// Load both source tables from explicit paths into application state.
pub async fn initialize_app_state_with_paths(
    visits: &Path,
    forecast: &Path,
) -> Result<AppState> {
    info!("Loading visit records from {}", visits.display());
    let visits_df = compute::loader::load_visits(visits)?;

    info!("Loading forecast table from {}", forecast.display());
    let forecast_df = compute::loader::load_forecast(forecast)?;

    Ok(AppState {
        visits: visits_df,
        forecast: forecast_df,
    })
}

/// Get the visit CSV path from the environment or use the default.
pub fn visits_path() -> PathBuf {
    std::env::var("VISITS_CSV")
        .unwrap_or_else(|_| "data/full_data.csv".to_string())
        .into()
}

/// Get the forecast CSV path from the environment or use the default.
pub fn forecast_path() -> PathBuf {
    std::env::var("FORECAST_CSV")
        .unwrap_or_else(|_| "data/forecast.csv".to_string())
        .into()
}

/// Get bind address from environment or use default.
pub fn get_bind_address() -> String {
    std::env::var("BIND_ADDRESS").unwrap_or_else(|_| "0.0.0.0:3000".to_string())
}
