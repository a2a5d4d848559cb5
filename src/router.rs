use crate::handlers::{
    charts::{
        get_age_outcome, get_department_counts, get_diagnosis_counts, get_forecast,
        get_monthly_visits, get_symptom_outcome,
    },
    dashboard::dashboard,
    download::download_forecast,
    health::health_check,
};
use crate::schemas::{ApiDoc, AppState};
use axum::{routing::get, Router};
use std::time::Duration;
use tower::ServiceBuilder;
use tower_http::{
    compression::CompressionLayer, cors::CorsLayer, timeout::TimeoutLayer, trace::TraceLayer,
};
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

/// Create application router with all routes and middleware
pub fn create_router(state: AppState) -> Router {
    Router::new()
        // Dashboard page
        .route("/", get(dashboard))
        // Health check
        .route("/health", get(health_check))
        // Forecast download
        .route("/forecast.csv", get(download_forecast))
        // Chart data routes, one per tab
        .route("/api/v1/charts/departments", get(get_department_counts))
        .route("/api/v1/charts/symptom-outcome", get(get_symptom_outcome))
        .route("/api/v1/charts/diagnoses", get(get_diagnosis_counts))
        .route("/api/v1/charts/age-outcome", get(get_age_outcome))
        .route("/api/v1/charts/monthly-visits", get(get_monthly_visits))
        .route("/api/v1/charts/forecast", get(get_forecast))
        // Swagger UI
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", ApiDoc::openapi()))
        // Add middleware
        .layer(
            ServiceBuilder::new()
                .layer(TraceLayer::new_for_http())
                .layer(CompressionLayer::new())
                .layer(TimeoutLayer::new(Duration::from_secs(30)))
                .layer(CorsLayer::permissive()),
        )
        .with_state(state)
}
