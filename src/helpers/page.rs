//! HTML shell for the dashboard page.
//!
//! The page is a static tab bar plus one `chart-container` div per tab; the
//! figures are embedded as JSON and drawn with `Plotly.newPlot` the first
//! time their tab is shown (a hidden div would render at zero size).

use crate::helpers::plotly::Figure;

pub const PAGE_TITLE: &str = "Hospital Data Insights";

const STYLE: &str = "\
body { font-family: sans-serif; margin: 0 auto; max-width: 1100px; padding: 0 16px; }
h1 { font-size: 1.5rem; }
.tab-bar { display: flex; gap: 4px; border-bottom: 1px solid #ddd; }
.tab-button { border: none; background: none; padding: 8px 14px; cursor: pointer; font-size: 0.95rem; }
.tab-button.active { border-bottom: 2px solid #2563eb; font-weight: 600; }
.tab-panel { display: none; padding-top: 12px; }
.tab-panel.active { display: block; }
.chart-container { width: 100%; }
.download { display: inline-block; margin-top: 8px; font-size: 0.9rem; }
";

const SCRIPT: &str = "\
const drawn = new Set();
function draw(i) {
  if (drawn.has(i)) return;
  drawn.add(i);
  Plotly.newPlot('chart-' + i, FIGURES[i].data, FIGURES[i].layout,
    {responsive: true, displayModeBar: false});
}
function showTab(i) {
  document.querySelectorAll('.tab-panel').forEach((p, j) => p.classList.toggle('active', j === i));
  document.querySelectorAll('.tab-button').forEach((b, j) => b.classList.toggle('active', j === i));
  draw(i);
}
draw(0);
";

/// One dashboard tab: a label, a figure, and optionally a download link
/// shown under the chart.
pub struct Tab {
    pub label: String,
    pub figure: Figure,
    pub download: Option<(String, String)>,
}

impl Tab {
    pub fn new(label: impl Into<String>, figure: Figure) -> Self {
        Self {
            label: label.into(),
            figure,
            download: None,
        }
    }

    pub fn with_download(mut self, href: impl Into<String>, label: impl Into<String>) -> Self {
        self.download = Some((href.into(), label.into()));
        self
    }
}

/// Renders the full page for the given tabs, first tab active.
pub fn render(tabs: &[Tab]) -> String {
    let mut html = String::with_capacity(16 * 1024);

    html.push_str("<!DOCTYPE html>\n<html lang=\"en\">\n<head>\n<meta charset=\"utf-8\">\n");
    html.push_str(&format!("<title>{PAGE_TITLE}</title>\n"));
    html.push_str("<script src=\"https://cdn.plot.ly/plotly-2.32.0.min.js\"></script>\n");
    html.push_str("<style>\n");
    html.push_str(STYLE);
    html.push_str("</style>\n</head>\n<body>\n");
    html.push_str(&format!("<h1>{PAGE_TITLE}</h1>\n"));

    html.push_str("<div class=\"tab-bar\">\n");
    for (i, tab) in tabs.iter().enumerate() {
        let active = if i == 0 { " active" } else { "" };
        html.push_str(&format!(
            "<button class=\"tab-button{active}\" onclick=\"showTab({i})\">{}</button>\n",
            tab.label
        ));
    }
    html.push_str("</div>\n");

    for (i, tab) in tabs.iter().enumerate() {
        let active = if i == 0 { " active" } else { "" };
        html.push_str(&format!(
            "<div class=\"tab-panel{active}\" id=\"tab-{i}\">\n"
        ));
        html.push_str(&format!(
            "<div class=\"chart-container\" id=\"chart-{i}\" style=\"height: 420px;\"></div>\n"
        ));
        if let Some((href, label)) = &tab.download {
            html.push_str(&format!(
                "<a class=\"download\" href=\"{href}\" download>{label}</a>\n"
            ));
        }
        html.push_str("</div>\n");
    }

    html.push_str("<script>\nconst FIGURES = [\n");
    for tab in tabs {
        let figure = serde_json::to_string(&tab.figure)
            .unwrap_or_else(|_| r#"{"data":[],"layout":{}}"#.to_string());
        html.push_str(&figure);
        html.push_str(",\n");
    }
    html.push_str("];\n");
    html.push_str(SCRIPT);
    html.push_str("</script>\n</body>\n</html>\n");

    html
}
