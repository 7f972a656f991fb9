//! Drill-down table for a clicked bar.

use crate::models::{ChartClick, TableFragment, TableView};
use crate::{NO_MATCH_MESSAGE, SELECT_POINT_MESSAGE};
use scd_core::filter::filter_by_year_status;
use scd_core::{Dataset, YearKey};

/// Render the detail area for a chart click.
///
/// The click is matched against the full dataset, not the chart's filtered
/// subset, so a bar drawn for one scorecard lists every scorecard's records
/// with that year and status.
pub fn render_table(dataset: &Dataset, click: Option<&ChartClick>) -> TableFragment {
    let Some(click) = click else {
        return TableFragment::Prompt {
            message: SELECT_POINT_MESSAGE.to_string(),
        };
    };

    let matches = match YearKey::from_json(&click.year) {
        Some(year) => filter_by_year_status(dataset, &year, click.status.as_deref()),
        None => Vec::new(),
    };
    log::debug!(
        "table: year={} status={:?} matched {} rows",
        click.year,
        click.status,
        matches.len()
    );

    if matches.is_empty() {
        return TableFragment::Empty {
            message: NO_MATCH_MESSAGE.to_string(),
        };
    }

    TableFragment::Table(TableView {
        columns: dataset.headers().to_vec(),
        rows: matches.iter().map(|r| r.cells().to_vec()).collect(),
        striped: true,
        bordered: true,
        hover: true,
    })
}
