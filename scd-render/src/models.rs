//! Render result structs.
//!
//! All structs derive `Serialize` so they can be passed to the D3.js chart
//! and table scripts as JSON.

use scd_core::YearKey;
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// A single bar: the count of records with one (year, status) pair.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct Bar {
    /// Year category on the x axis.
    pub x: YearKey,
    /// Number of records.
    pub y: usize,
    /// Echoed back by the browser on click; holds the status.
    pub custom_data: Vec<String>,
}

/// All bars for one IMS status value.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct Series {
    pub name: String,
    pub bars: Vec<Bar>,
}

/// Declarative grouped bar chart description.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct ChartSpec {
    pub title: String,
    pub x_label: String,
    pub y_label: String,
    pub legend_title: String,
    /// Always `"group"`: one bar per status side by side within a year.
    pub barmode: String,
    /// Year categories in axis order.
    pub categories: Vec<YearKey>,
    pub series: Vec<Series>,
    /// Set when the chart has no bars.
    pub empty_message: Option<String>,
}

impl ChartSpec {
    /// Bar height for a (year, status) pair, zero when no such bar exists.
    pub fn count(&self, year: &YearKey, status: &str) -> usize {
        self.series
            .iter()
            .filter(|s| s.name == status)
            .flat_map(|s| s.bars.iter())
            .filter(|b| &b.x == year)
            .map(|b| b.y)
            .sum()
    }

    /// Total number of bars across all series.
    pub fn bar_count(&self) -> usize {
        self.series.iter().map(|s| s.bars.len()).sum()
    }
}

/// A clicked bar as reported by the browser.
///
/// `year` is the raw x value (number or string); `status` comes from the
/// bar's custom data and may be missing.
#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct ChartClick {
    pub year: Value,
    #[serde(default)]
    pub status: Option<String>,
}

/// Row/column view of the matching records.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct TableView {
    pub columns: Vec<String>,
    pub rows: Vec<Vec<String>>,
    pub striped: bool,
    pub bordered: bool,
    pub hover: bool,
}

/// Content of the detail area under the chart.
#[derive(Debug, Clone, Serialize, PartialEq)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum TableFragment {
    /// Nothing clicked yet.
    Prompt { message: String },
    /// A click that matched no records.
    Empty { message: String },
    Table(TableView),
}
