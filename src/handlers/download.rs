use axum::{
    extract::State,
    http::{header, StatusCode},
    response::IntoResponse,
};
use tracing::{error, instrument};

use crate::schemas::AppState;

/// Forecast table as a CSV attachment
///
/// Re-serializes the loaded table; re-parsing the payload yields a table
/// equal to the one the dashboard renders.
#[utoipa::path(
    get,
    path = "/forecast.csv",
    tag = "download",
    responses(
        (status = 200, description = "Forecast table as CSV attachment", content_type = "text/csv", body = String),
        (status = 500, description = "Internal server error", body = crate::schemas::ErrorResponse)
    )
)]
#[instrument(skip(state))]
pub async fn download_forecast(
    State(state): State<AppState>,
) -> Result<impl IntoResponse, StatusCode> {
    let csv = compute::forecast::forecast_to_csv(&state.forecast).map_err(|err| {
        error!(%err, "forecast serialization failed");
        StatusCode::INTERNAL_SERVER_ERROR
    })?;

    Ok((
        [
            (header::CONTENT_TYPE, "text/csv"),
            (
                header::CONTENT_DISPOSITION,
                "attachment; filename=\"forecast.csv\"",
            ),
        ],
        csv,
    ))
}
