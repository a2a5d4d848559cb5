use common::{
    AgeHistogram, CategoryCount, CategoryCounts, ForecastPoint, ForecastSeries, OutcomeBins,
    OutcomeBoxSummary,
};
use polars::prelude::DataFrame;
use serde::{Deserialize, Serialize};
use utoipa::{OpenApi, ToSchema};

/// Application state shared across handlers.
///
/// Both tables are loaded once at startup and never mutated; every chart
/// recomputes its derived table from these on each request.
#[derive(Clone)]
pub struct AppState {
    /// Patient visit table.
    pub visits: DataFrame,
    /// Forecast table, sorted ascending by `ds`.
    pub forecast: DataFrame,
}

/// API response wrapper
#[derive(Serialize, Deserialize, ToSchema)]
pub struct ApiResponse<T> {
    /// Response data
    pub data: T,
    /// Response message
    pub message: String,
    /// Success status
    pub success: bool,
}

/// Error response
#[derive(Serialize, Deserialize, ToSchema)]
pub struct ErrorResponse {
    /// Error message
    pub error: String,
    /// Error code
    pub code: String,
    /// Success status (always false for errors)
    pub success: bool,
}

/// Health check response
#[derive(Serialize, Deserialize, ToSchema)]
pub struct HealthResponse {
    /// Service status
    pub status: String,
    /// Service version
    pub version: String,
    /// Rows in the loaded visit table
    pub visit_rows: usize,
    /// Rows in the loaded forecast table
    pub forecast_rows: usize,
}

/// OpenAPI documentation
#[derive(OpenApi)]
#[openapi(
    paths(
        crate::handlers::health::health_check,
        crate::handlers::charts::get_department_counts,
        crate::handlers::charts::get_symptom_outcome,
        crate::handlers::charts::get_diagnosis_counts,
        crate::handlers::charts::get_age_outcome,
        crate::handlers::charts::get_monthly_visits,
        crate::handlers::charts::get_forecast,
        crate::handlers::download::download_forecast,
    ),
    components(
        schemas(
            ApiResponse<CategoryCounts>,
            ApiResponse<Vec<OutcomeBoxSummary>>,
            ApiResponse<AgeHistogram>,
            ApiResponse<ForecastSeries>,
            ErrorResponse,
            HealthResponse,
            CategoryCounts,
            CategoryCount,
            OutcomeBoxSummary,
            AgeHistogram,
            OutcomeBins,
            ForecastSeries,
            ForecastPoint,
        )
    ),
    tags(
        (name = "health", description = "Health check endpoints"),
        (name = "charts", description = "Derived chart-data endpoints"),
        (name = "download", description = "Forecast table download"),
    ),
    info(
        title = "Wardboard API",
        description = "Hospital Data Insights dashboard - chart data derived from patient visit records and a pre-computed visit forecast",
        version = "0.1.0",
        license(
            name = "MIT",
            url = "https://opensource.org/licenses/MIT"
        )
    )
)]
pub struct ApiDoc;
