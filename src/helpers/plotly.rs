//! Plotly figure builders.
//!
//! A figure is the `(data, layout)` pair `Plotly.newPlot` takes, built as
//! plain JSON values. The traces carry the already-derived tables from the
//! compute crate; nothing here aggregates.

use common::{AgeHistogram, CategoryCounts, ForecastSeries, OutcomeBoxSummary};
use serde::Serialize;
use serde_json::{json, Value};

/// One renderable chart: trace array plus layout.
#[derive(Debug, Clone, Serialize)]
pub struct Figure {
    pub data: Value,
    pub layout: Value,
}

fn base_layout(x_title: &str, y_title: &str) -> Value {
    json!({
        "margin": {"t": 30, "r": 10, "l": 50, "b": 40},
        "paper_bgcolor": "rgba(0,0,0,0)",
        "plot_bgcolor": "rgba(0,0,0,0)",
        "xaxis": {"title": x_title, "showgrid": false},
        "yaxis": {"title": y_title, "showgrid": true, "gridcolor": "#eee"}
    })
}

/// Vertical bar chart over an ordered category-count table.
pub fn bar_figure(counts: &CategoryCounts, x_title: &str, y_title: &str) -> Figure {
    let labels: Vec<&str> = counts.rows.iter().map(|r| r.label.as_str()).collect();
    let values: Vec<u32> = counts.rows.iter().map(|r| r.count).collect();

    Figure {
        data: json!([{
            "x": labels,
            "y": values,
            "type": "bar"
        }]),
        layout: base_layout(x_title, y_title),
    }
}

/// Grouped box plot from precomputed five-number summaries.
///
/// The quartiles are computed server-side, so the box traces carry explicit
/// stats instead of raw samples; outliers ride along as one marker trace.
pub fn box_figure(summaries: &[OutcomeBoxSummary]) -> Figure {
    let mut traces: Vec<Value> = summaries
        .iter()
        .map(|s| {
            json!({
                "type": "box",
                "name": s.outcome,
                "x": [s.outcome],
                "q1": [s.q1],
                "median": [s.median],
                "q3": [s.q3],
                "lowerfence": [s.lower_whisker],
                "upperfence": [s.upper_whisker]
            })
        })
        .collect();

    let outlier_x: Vec<&str> = summaries
        .iter()
        .flat_map(|s| s.outliers.iter().map(move |_| s.outcome.as_str()))
        .collect();
    let outlier_y: Vec<f64> = summaries
        .iter()
        .flat_map(|s| s.outliers.iter().copied())
        .collect();
    if !outlier_y.is_empty() {
        traces.push(json!({
            "type": "scatter",
            "mode": "markers",
            "name": "Outliers",
            "x": outlier_x,
            "y": outlier_y,
            "marker": {"size": 5}
        }));
    }

    Figure {
        data: Value::Array(traces),
        layout: base_layout("Outcome", "Symptom Score"),
    }
}

/// Stacked histogram over the shared bin edges.
pub fn histogram_figure(hist: &AgeHistogram) -> Figure {
    let centers: Vec<f64> = hist.edges.windows(2).map(|w| (w[0] + w[1]) / 2.0).collect();
    let width = if hist.edges.len() >= 2 {
        hist.edges[1] - hist.edges[0]
    } else {
        1.0
    };

    let traces: Vec<Value> = hist
        .series
        .iter()
        .map(|s| {
            json!({
                "type": "bar",
                "name": s.outcome,
                "x": centers,
                "y": s.counts,
                "width": vec![width; centers.len()]
            })
        })
        .collect();

    let mut layout = base_layout("Age", "Count");
    layout["barmode"] = json!("stack");
    layout["bargap"] = json!(0.05);
    layout["showlegend"] = json!(true);

    Figure {
        data: Value::Array(traces),
        layout,
    }
}

/// Forecast line with a shaded prediction-interval band.
///
/// Trace order matters: the lower bound is drawn immediately after the upper
/// bound with `fill: "tonexty"`, so the filled region lies between the two
/// bounds at each `ds`. All three traces share the same x vector.
pub fn forecast_figure(series: &ForecastSeries) -> Figure {
    let ds = series.ds();

    let mut layout = base_layout("Date", "Visits");
    layout["title"] = json!("Forecasted Patient Visits");
    layout["showlegend"] = json!(true);

    Figure {
        data: json!([
            {
                "x": ds.clone(),
                "y": series.yhat(),
                "type": "scatter",
                "mode": "lines",
                "name": "Forecast"
            },
            {
                "x": ds.clone(),
                "y": series.yhat_upper(),
                "type": "scatter",
                "mode": "lines",
                "name": "Upper Bound"
            },
            {
                "x": ds,
                "y": series.yhat_lower(),
                "type": "scatter",
                "mode": "lines",
                "name": "Lower Bound",
                "fill": "tonexty",
                "fillcolor": "rgba(0,255,0,0.2)"
            }
        ]),
        layout,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use common::{CategoryCount, ForecastPoint};
    use chrono::NaiveDate;

    #[test]
    fn bar_figure_keeps_row_order() {
        let counts = CategoryCounts::new(
            "department",
            vec![CategoryCount::new("ER", 3), CategoryCount::new("ICU", 1)],
        );
        let figure = bar_figure(&counts, "Department", "Count");

        assert_eq!(figure.data[0]["x"], json!(["ER", "ICU"]));
        assert_eq!(figure.data[0]["y"], json!([3, 1]));
    }

    #[test]
    fn empty_counts_render_an_empty_trace() {
        let counts = CategoryCounts::new("department", vec![]);
        let figure = bar_figure(&counts, "Department", "Count");

        assert_eq!(figure.data[0]["x"], json!([]));
        assert_eq!(figure.data[0]["y"], json!([]));
    }

    #[test]
    fn forecast_band_traces_are_aligned_and_consecutive() {
        let series = ForecastSeries::new(vec![ForecastPoint::new(
            NaiveDate::from_ymd_opt(2024, 1, 1).unwrap(),
            10.0,
            8.0,
            12.0,
        )]);
        let figure = forecast_figure(&series);

        let traces = figure.data.as_array().unwrap();
        assert_eq!(traces.len(), 3);
        for trace in traces {
            assert_eq!(trace["x"], json!(["2024-01-01"]));
        }
        // The band fill must sit on the trace drawn right after the upper bound.
        assert_eq!(traces[1]["name"], json!("Upper Bound"));
        assert_eq!(traces[2]["fill"], json!("tonexty"));
        assert_eq!(traces[2]["y"], json!([8.0]));
        assert_eq!(traces[1]["y"], json!([12.0]));
    }

    #[test]
    fn box_figure_emits_one_trace_per_outcome_plus_outliers() {
        let summaries = vec![OutcomeBoxSummary {
            outcome: "Admitted".to_string(),
            count: 5,
            min: 1.0,
            q1: 2.0,
            median: 3.0,
            q3: 4.0,
            max: 99.0,
            lower_whisker: 1.0,
            upper_whisker: 5.0,
            outliers: vec![99.0],
        }];
        let figure = box_figure(&summaries);

        let traces = figure.data.as_array().unwrap();
        assert_eq!(traces.len(), 2);
        assert_eq!(traces[0]["q1"], json!([2.0]));
        assert_eq!(traces[1]["y"], json!([99.0]));
    }
}
