//! Static files embedded at compile time.
//!
//! The chart and table are drawn in the browser by D3.js. The scripts are
//! plain globals (no ES modules): `bar-chart.js` defines `renderBarChart`,
//! `data-table.js` defines `renderDataTable`, and `dashboard.js` wires the
//! dropdown, chart clicks and navigation to the `/_update` endpoint.

pub static INDEX_HTML: &str = include_str!("../assets/html/index.html");
pub static DASHBOARD_CSS: &str = include_str!("../assets/css/dashboard.css");
pub static BAR_CHART_JS: &str = include_str!("../assets/js/bar-chart.js");
pub static DATA_TABLE_JS: &str = include_str!("../assets/js/data-table.js");
pub static DASHBOARD_JS: &str = include_str!("../assets/js/dashboard.js");

/// Look up an embedded asset by file name, returning its content type and body.
pub fn asset(name: &str) -> Option<(&'static str, &'static str)> {
    match name {
        "dashboard.css" => Some(("text/css; charset=utf-8", DASHBOARD_CSS)),
        "bar-chart.js" => Some(("application/javascript; charset=utf-8", BAR_CHART_JS)),
        "data-table.js" => Some(("application/javascript; charset=utf-8", DATA_TABLE_JS)),
        "dashboard.js" => Some(("application/javascript; charset=utf-8", DASHBOARD_JS)),
        _ => None,
    }
}
