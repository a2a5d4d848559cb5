//! The dashboard page itself: one request renders all six tabs.

use axum::{extract::State, http::StatusCode, response::Html};
use tracing::{error, instrument};

use crate::helpers::page::{self, Tab};
use crate::helpers::plotly;
use crate::schemas::AppState;

/// Server-rendered dashboard: six fixed tabs, one chart each, with the
/// forecast download attached to the last tab. The whole page is rebuilt
/// from the in-memory tables on every view.
#[instrument(skip(state))]
pub async fn dashboard(State(state): State<AppState>) -> Result<Html<String>, StatusCode> {
    let tabs = build_tabs(&state).map_err(|err| {
        error!(%err, "dashboard render failed");
        StatusCode::INTERNAL_SERVER_ERROR
    })?;

    Ok(Html(page::render(&tabs)))
}

/// One tab per aggregator, in the order the tab bar declares them.
fn build_tabs(state: &AppState) -> compute::Result<Vec<Tab>> {
    let departments = compute::counts::category_counts(&state.visits, "department")?;
    let scores = compute::distribution::score_distribution(&state.visits)?;
    let diagnoses = compute::counts::category_counts(&state.visits, "diagnosis")?;
    let ages = compute::histogram::age_histogram(&state.visits)?;
    let monthly = compute::counts::monthly_counts(&state.visits)?;
    let forecast = compute::forecast::forecast_series(&state.forecast)?;

    Ok(vec![
        Tab::new(
            "Department Distribution",
            plotly::bar_figure(&departments, "Department", "Count"),
        ),
        Tab::new("Symptom vs Outcome", plotly::box_figure(&scores)),
        Tab::new(
            "Diagnosis Frequency",
            plotly::bar_figure(&diagnoses, "Diagnosis", "Count"),
        ),
        Tab::new("Age vs Outcome", plotly::histogram_figure(&ages)),
        Tab::new(
            "Monthly Visits",
            plotly::bar_figure(&monthly, "Month", "Visits"),
        ),
        Tab::new("Prophet Forecast", plotly::forecast_figure(&forecast))
            .with_download("/forecast.csv", "Download Forecast CSV"),
    ])
}
