#[cfg(test)]
pub mod test_utils {
    use crate::router::create_router;
    use crate::schemas::AppState;
    use axum::Router;
    use tracing::Level;
    use tracing_subscriber::FmtSubscriber;

    /// Eight visit records across three departments, three outcomes and
    /// three months; the ICU/Cardiology tie pins down count ordering.
    pub const VISITS_CSV: &str = "\
department,symptom_score,outcome,diagnosis,age,visit_date
ER,7.5,Admitted,Flu,34,2024-01-05
ER,3.0,Discharged,Flu,8,2024-01-17
ICU,9.2,Admitted,Pneumonia,71,2024-02-02
ER,5.5,Discharged,Covid-19,45,2024-02-11
Cardiology,6.1,Admitted,Arrhythmia,63,2024-02-20
ER,2.0,Discharged,Migraine,29,2024-03-03
ICU,8.8,Deceased,Pneumonia,80,2024-03-09
Cardiology,4.4,Discharged,Arrhythmia,52,2024-03-21
";

    pub const EMPTY_VISITS_CSV: &str =
        "department,symptom_score,outcome,diagnosis,age,visit_date\n";

    pub const FORECAST_CSV: &str = "\
ds,yhat,yhat_lower,yhat_upper
2024-04-01,120.0,100.0,140.0
2024-04-02,124.5,103.0,146.0
2024-04-03,118.25,99.5,137.75
2024-04-04,130.0,108.0,152.0
";

    pub const SINGLE_FORECAST_CSV: &str = "\
ds,yhat,yhat_lower,yhat_upper
2024-01-01,10.0,8.0,12.0
";

    /// Create AppState from CSV fixture strings, through the real loader.
    pub fn setup_test_app_state_with(visits_csv: &str, forecast_csv: &str) -> AppState {
        let dir = tempfile::tempdir().expect("Failed to create temp dir");
        let visits_path = dir.path().join("full_data.csv");
        let forecast_path = dir.path().join("forecast.csv");
        std::fs::write(&visits_path, visits_csv).expect("Failed to write visits fixture");
        std::fs::write(&forecast_path, forecast_csv).expect("Failed to write forecast fixture");

        let visits =
            compute::loader::load_visits(&visits_path).expect("Failed to load visits fixture");
        let forecast = compute::loader::load_forecast(&forecast_path)
            .expect("Failed to load forecast fixture");

        AppState { visits, forecast }
    }

    /// Create AppState for testing with the default fixtures.
    pub fn setup_test_app_state() -> AppState {
        setup_test_app_state_with(VISITS_CSV, FORECAST_CSV)
    }

    /// Initialize tracing for tests with output to STDERR.
    ///
    /// The log level is determined by the RUST_LOG environment variable,
    /// defaulting to WARN if not set.
    fn init_test_tracing() -> tracing::subscriber::DefaultGuard {
        let log_level = std::env::var("RUST_LOG")
            .ok()
            .and_then(|level| match level.to_uppercase().as_str() {
                "ERROR" => Some(Level::ERROR),
                "WARN" => Some(Level::WARN),
                "INFO" => Some(Level::INFO),
                "DEBUG" => Some(Level::DEBUG),
                "TRACE" => Some(Level::TRACE),
                _ => None,
            })
            .unwrap_or(Level::WARN);

        let subscriber = FmtSubscriber::builder()
            .with_max_level(log_level)
            .with_writer(std::io::stderr)
            .finish();
        tracing::subscriber::set_default(subscriber)
    }

    /// Create axum app for testing with the default fixtures.
    pub fn setup_test_app() -> Router {
        let _ = init_test_tracing();
        create_router(setup_test_app_state())
    }

    /// Create axum app for testing with explicit fixtures.
    pub fn setup_test_app_with(visits_csv: &str, forecast_csv: &str) -> Router {
        let _ = init_test_tracing();
        create_router(setup_test_app_state_with(visits_csv, forecast_csv))
    }
}
