//! Rendering for the scorecard dashboard.
//!
//! This crate provides:
//! - `chart`: grouped bar chart specs of status counts per year
//! - `table`: the drill-down table shown for a clicked bar
//! - `layout`: the path-to-view router and the HTML for each view
//! - `assets`: the page shell, stylesheet and D3.js scripts embedded at compile time
//! - `models`: the serialisable structs handed to the browser

pub mod assets;
pub mod chart;
pub mod html;
pub mod layout;
pub mod models;
pub mod table;

/// Shown whenever a selection matches no records.
pub const NO_MATCH_MESSAGE: &str = "No matching data found.";

/// Shown in the detail area before any bar has been clicked.
pub const SELECT_POINT_MESSAGE: &str = "Please select a point on the chart to see the details.";
