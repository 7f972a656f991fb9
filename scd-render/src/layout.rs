//! Path-to-view routing and the HTML for each view.
//!
//! The router has two states and no transitions of its own: the current
//! URL path alone decides which layout is shown. Only `/details` selects
//! [`View::Details`]; every other path, including unknown ones, falls back
//! to [`View::Overview`].

use crate::assets::INDEX_HTML;
use crate::html::escape;
use scd_core::Dataset;
use serde::Serialize;

/// Path that selects the details view.
pub const DETAILS_PATH: &str = "/details";

/// Placeholder shown in the scorecard dropdown.
pub const DROPDOWN_PLACEHOLDER: &str = "Select a Scorecard";

/// Page title placed in the shell.
pub const PAGE_TITLE: &str = "Scorecard Dashboard";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum View {
    Overview,
    Details,
}

impl View {
    /// Resolve a URL path to a view.
    pub fn from_path(path: &str) -> Self {
        if path == DETAILS_PATH {
            View::Details
        } else {
            View::Overview
        }
    }
}

/// HTML fragment for a view, placed inside `#page-content`.
pub fn render_view(view: View, dataset: &Dataset) -> String {
    match view {
        View::Overview => overview_layout(dataset),
        View::Details => details_layout(),
    }
}

/// Heading, scorecard dropdown, chart container and detail area.
pub fn overview_layout(dataset: &Dataset) -> String {
    let options: String = dataset
        .scorecard_names()
        .into_iter()
        .map(|name| {
            let name = escape(name);
            format!(r#"<option value="{name}">{name}</option>"#)
        })
        .collect::<Vec<_>>()
        .join("\n        ");

    format!(
        r#"<div class="overview">
    <h1>Overview</h1>
    <select id="scorecard-dropdown" class="customDropdown form-select">
        <option value="" selected>{placeholder}</option>
        {options}
    </select>
    <div id="bar-chart" class="chart-container"></div>
    <hr>
    <h3>Details</h3>
    <div id="table-container"></div>
</div>"#,
        placeholder = escape(DROPDOWN_PLACEHOLDER),
        options = options,
    )
}

pub fn details_layout() -> String {
    r#"<div class="details">
    <h1>Details Page</h1>
</div>"#
        .to_string()
}

/// Full HTML document for a path: the shell with the routed view inside.
pub fn render_page(path: &str, dataset: &Dataset) -> String {
    let view = View::from_path(path);
    log::debug!("layout: path {} -> {:?}", path, view);
    INDEX_HTML
        .replace("{{title}}", PAGE_TITLE)
        .replace("{{page_content}}", &render_view(view, dataset))
}
