use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// One forecasted time unit: point forecast plus prediction-interval bounds.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema, PartialEq)]
pub struct ForecastPoint {
    /// Forecast date.
    pub ds: NaiveDate,
    /// Point forecast.
    pub yhat: f64,
    /// Lower bound of the prediction interval.
    pub yhat_lower: f64,
    /// Upper bound of the prediction interval.
    pub yhat_upper: f64,
}

impl ForecastPoint {
    pub fn new(ds: NaiveDate, yhat: f64, yhat_lower: f64, yhat_upper: f64) -> Self {
        Self {
            ds,
            yhat,
            yhat_lower,
            yhat_upper,
        }
    }
}

/// Forecast table as aligned series, ascending by `ds`.
///
/// The band chart draws three traces over the same x-axis; keeping the points
/// in one vector guarantees the traces stay aligned and equally long.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema, PartialEq)]
pub struct ForecastSeries {
    /// Forecast rows in chronological order.
    pub points: Vec<ForecastPoint>,
}

impl ForecastSeries {
    pub fn new(points: Vec<ForecastPoint>) -> Self {
        Self { points }
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Dates of the shared x-axis, ISO formatted for the chart.
    pub fn ds(&self) -> Vec<String> {
        self.points
            .iter()
            .map(|p| p.ds.format("%Y-%m-%d").to_string())
            .collect()
    }

    pub fn yhat(&self) -> Vec<f64> {
        self.points.iter().map(|p| p.yhat).collect()
    }

    pub fn yhat_lower(&self) -> Vec<f64> {
        self.points.iter().map(|p| p.yhat_lower).collect()
    }

    pub fn yhat_upper(&self) -> Vec<f64> {
        self.points.iter().map(|p| p.yhat_upper).collect()
    }
}
