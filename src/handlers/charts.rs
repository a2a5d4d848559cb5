//! Chart-data endpoints: one per dashboard tab, each returning the derived
//! table its chart consumes. Every handler recomputes from the in-memory
//! tables; there is no caching between requests.

use axum::{extract::State, http::StatusCode, response::Json};
use common::{AgeHistogram, CategoryCounts, ForecastSeries, OutcomeBoxSummary};
use tracing::{error, instrument};

use crate::schemas::{ApiResponse, AppState};

fn internal_error(err: compute::ComputeError) -> StatusCode {
    error!(%err, "chart aggregation failed");
    StatusCode::INTERNAL_SERVER_ERROR
}

/// Patient count by department, descending
#[utoipa::path(
    get,
    path = "/api/v1/charts/departments",
    tag = "charts",
    responses(
        (status = 200, description = "Department counts retrieved successfully", body = ApiResponse<CategoryCounts>),
        (status = 500, description = "Internal server error", body = crate::schemas::ErrorResponse)
    )
)]
#[instrument(skip(state))]
pub async fn get_department_counts(
    State(state): State<AppState>,
) -> Result<Json<ApiResponse<CategoryCounts>>, StatusCode> {
    let counts =
        compute::counts::category_counts(&state.visits, "department").map_err(internal_error)?;

    Ok(Json(ApiResponse {
        data: counts,
        message: "Department counts retrieved successfully".to_string(),
        success: true,
    }))
}

/// Symptom score distribution per outcome (box-plot summary)
#[utoipa::path(
    get,
    path = "/api/v1/charts/symptom-outcome",
    tag = "charts",
    responses(
        (status = 200, description = "Score distribution retrieved successfully", body = ApiResponse<Vec<OutcomeBoxSummary>>),
        (status = 500, description = "Internal server error", body = crate::schemas::ErrorResponse)
    )
)]
#[instrument(skip(state))]
pub async fn get_symptom_outcome(
    State(state): State<AppState>,
) -> Result<Json<ApiResponse<Vec<OutcomeBoxSummary>>>, StatusCode> {
    let summaries =
        compute::distribution::score_distribution(&state.visits).map_err(internal_error)?;

    Ok(Json(ApiResponse {
        data: summaries,
        message: "Score distribution retrieved successfully".to_string(),
        success: true,
    }))
}

/// Diagnosis frequency, descending
#[utoipa::path(
    get,
    path = "/api/v1/charts/diagnoses",
    tag = "charts",
    responses(
        (status = 200, description = "Diagnosis counts retrieved successfully", body = ApiResponse<CategoryCounts>),
        (status = 500, description = "Internal server error", body = crate::schemas::ErrorResponse)
    )
)]
#[instrument(skip(state))]
pub async fn get_diagnosis_counts(
    State(state): State<AppState>,
) -> Result<Json<ApiResponse<CategoryCounts>>, StatusCode> {
    let counts =
        compute::counts::category_counts(&state.visits, "diagnosis").map_err(internal_error)?;

    Ok(Json(ApiResponse {
        data: counts,
        message: "Diagnosis counts retrieved successfully".to_string(),
        success: true,
    }))
}

/// Stacked age histogram subdivided by outcome
#[utoipa::path(
    get,
    path = "/api/v1/charts/age-outcome",
    tag = "charts",
    responses(
        (status = 200, description = "Age histogram retrieved successfully", body = ApiResponse<AgeHistogram>),
        (status = 500, description = "Internal server error", body = crate::schemas::ErrorResponse)
    )
)]
#[instrument(skip(state))]
pub async fn get_age_outcome(
    State(state): State<AppState>,
) -> Result<Json<ApiResponse<AgeHistogram>>, StatusCode> {
    let histogram = compute::histogram::age_histogram(&state.visits).map_err(internal_error)?;

    Ok(Json(ApiResponse {
        data: histogram,
        message: "Age histogram retrieved successfully".to_string(),
        success: true,
    }))
}

/// Visits per month, chronological
#[utoipa::path(
    get,
    path = "/api/v1/charts/monthly-visits",
    tag = "charts",
    responses(
        (status = 200, description = "Monthly visit counts retrieved successfully", body = ApiResponse<CategoryCounts>),
        (status = 500, description = "Internal server error", body = crate::schemas::ErrorResponse)
    )
)]
#[instrument(skip(state))]
pub async fn get_monthly_visits(
    State(state): State<AppState>,
) -> Result<Json<ApiResponse<CategoryCounts>>, StatusCode> {
    let counts = compute::counts::monthly_counts(&state.visits).map_err(internal_error)?;

    Ok(Json(ApiResponse {
        data: counts,
        message: "Monthly visit counts retrieved successfully".to_string(),
        success: true,
    }))
}

/// Forecast series with prediction-interval bounds
#[utoipa::path(
    get,
    path = "/api/v1/charts/forecast",
    tag = "charts",
    responses(
        (status = 200, description = "Forecast series retrieved successfully", body = ApiResponse<ForecastSeries>),
        (status = 500, description = "Internal server error", body = crate::schemas::ErrorResponse)
    )
)]
#[instrument(skip(state))]
pub async fn get_forecast(
    State(state): State<AppState>,
) -> Result<Json<ApiResponse<ForecastSeries>>, StatusCode> {
    let series = compute::forecast::forecast_series(&state.forecast).map_err(internal_error)?;

    Ok(Json(ApiResponse {
        data: series,
        message: "Forecast series retrieved successfully".to_string(),
        success: true,
    }))
}
