#[cfg(test)]
mod tests {
    use crate::schemas::ApiDoc;
    use utoipa::OpenApi;

    #[test]
    fn test_openapi_schema_generation() {
        // Test that the OpenAPI schema can be generated without errors
        let openapi = ApiDoc::openapi();

        assert!(openapi.components.is_some());
        let components = openapi.components.as_ref().unwrap();

        assert!(components.schemas.contains_key("ErrorResponse"));
        assert!(components.schemas.contains_key("HealthResponse"));
        assert!(components.schemas.contains_key("CategoryCounts"));
        assert!(components.schemas.contains_key("OutcomeBoxSummary"));
        assert!(components.schemas.contains_key("AgeHistogram"));
        assert!(components.schemas.contains_key("ForecastSeries"));

        // Verify that the schema can be serialized to JSON without errors
        let json_result = serde_json::to_string(&openapi);
        assert!(json_result.is_ok());
    }

    #[test]
    fn test_chart_paths_are_documented() {
        let openapi = ApiDoc::openapi();

        for path in [
            "/health",
            "/api/v1/charts/departments",
            "/api/v1/charts/symptom-outcome",
            "/api/v1/charts/diagnoses",
            "/api/v1/charts/age-outcome",
            "/api/v1/charts/monthly-visits",
            "/api/v1/charts/forecast",
            "/forecast.csv",
        ] {
            assert!(
                openapi.paths.paths.contains_key(path),
                "path {path} missing from OpenAPI document"
            );
        }
    }

    #[test]
    fn test_health_response_schema_structure() {
        let openapi = ApiDoc::openapi();
        let components = openapi.components.as_ref().unwrap();
        let health_response_schema = components.schemas.get("HealthResponse").unwrap();

        // Verify HealthResponse has the expected structure
        if let utoipa::openapi::RefOr::T(utoipa::openapi::schema::Schema::Object(obj)) =
            health_response_schema
        {
            let properties = &obj.properties;
            assert!(properties.contains_key("status"));
            assert!(properties.contains_key("version"));
            assert!(properties.contains_key("visit_rows"));
            assert!(properties.contains_key("forecast_rows"));
        } else {
            panic!("HealthResponse should be an object schema");
        }
    }
}
