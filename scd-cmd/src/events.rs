//! Named UI events and the handlers registered against them.
//!
//! The browser posts `{ "event": <name>, "payload": <json> }`. The payload is
//! decoded into a [`Selection`], then exactly one handler recomputes one
//! fragment from the shared [`AppContext`] and that selection.
//!
//! | Event                      | Payload                           | Result  |
//! |----------------------------|-----------------------------------|---------|
//! | `url.pathname`             | `{ "pathname": "/..." }`          | `page`  |
//! | `scorecard-dropdown.value` | `{ "scorecard": string \| null }` | `chart` |
//! | `bar-chart.clickData`      | `{ "year", "status" }` or `null`  | `table` |

use crate::context::AppContext;
use scd_core::filter::filter_by_scorecard;
use scd_render::chart::render_chart;
use scd_render::layout::{render_view, View};
use scd_render::models::{ChartClick, ChartSpec, TableFragment};
use scd_render::table::render_table;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::BTreeMap;
use thiserror::Error;

pub const NAVIGATE: &str = "url.pathname";
pub const SCORECARD_SELECTED: &str = "scorecard-dropdown.value";
pub const BAR_CLICKED: &str = "bar-chart.clickData";

/// Client-held selection state, as carried by one event.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Selection {
    pub pathname: Option<String>,
    pub scorecard: Option<String>,
    pub click: Option<ChartClick>,
}

/// The single fragment an event recomputes.
#[derive(Debug, Clone, Serialize, PartialEq)]
#[serde(tag = "type", content = "data", rename_all = "snake_case")]
pub enum RenderResult {
    Page { view: View, html: String },
    Chart(ChartSpec),
    Table(TableFragment),
}

#[derive(Error, Debug)]
pub enum DispatchError {
    #[error("Unknown event: {0}")]
    UnknownEvent(String),

    #[error("Invalid payload for {event}: {source}")]
    Payload {
        event: String,
        #[source]
        source: serde_json::Error,
    },
}

type DecodeFn = fn(Value) -> Result<Selection, serde_json::Error>;
type RenderFn = fn(&AppContext, &Selection) -> RenderResult;

/// A payload decoder paired with the function that renders its fragment.
#[derive(Clone, Copy)]
pub struct EventHandler {
    decode: DecodeFn,
    render: RenderFn,
}

/// Event name to handler table.
#[derive(Clone)]
pub struct EventRegistry {
    handlers: BTreeMap<&'static str, EventHandler>,
}

impl EventRegistry {
    pub fn new() -> Self {
        Self {
            handlers: BTreeMap::new(),
        }
    }

    /// Registry with the dashboard's three events.
    pub fn dashboard() -> Self {
        let mut registry = Self::new();
        registry.register(NAVIGATE, decode_navigate, display_page);
        registry.register(SCORECARD_SELECTED, decode_scorecard, update_bar_chart);
        registry.register(BAR_CLICKED, decode_click, update_table);
        registry
    }

    pub fn register(&mut self, name: &'static str, decode: DecodeFn, render: RenderFn) {
        self.handlers.insert(name, EventHandler { decode, render });
    }

    pub fn event_names(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.handlers.keys().copied()
    }

    /// Decode the payload and run the handler registered for `event`.
    pub fn dispatch(
        &self,
        ctx: &AppContext,
        event: &str,
        payload: Value,
    ) -> Result<RenderResult, DispatchError> {
        let handler = self
            .handlers
            .get(event)
            .ok_or_else(|| DispatchError::UnknownEvent(event.to_string()))?;
        let selection = (handler.decode)(payload).map_err(|source| DispatchError::Payload {
            event: event.to_string(),
            source,
        })?;
        log::debug!("events: {} {:?}", event, selection);
        Ok((handler.render)(ctx, &selection))
    }
}

impl Default for EventRegistry {
    fn default() -> Self {
        Self::dashboard()
    }
}

#[derive(Deserialize)]
struct NavigatePayload {
    #[serde(default)]
    pathname: Option<String>,
}

#[derive(Deserialize)]
struct ScorecardPayload {
    #[serde(default)]
    scorecard: Option<String>,
}

fn decode_navigate(payload: Value) -> Result<Selection, serde_json::Error> {
    let payload: Option<NavigatePayload> = serde_json::from_value(payload)?;
    Ok(Selection {
        pathname: payload.and_then(|p| p.pathname),
        ..Selection::default()
    })
}

fn decode_scorecard(payload: Value) -> Result<Selection, serde_json::Error> {
    let payload: Option<ScorecardPayload> = serde_json::from_value(payload)?;
    Ok(Selection {
        scorecard: payload.and_then(|p| p.scorecard),
        ..Selection::default()
    })
}

fn decode_click(payload: Value) -> Result<Selection, serde_json::Error> {
    Ok(Selection {
        click: serde_json::from_value(payload)?,
        ..Selection::default()
    })
}

/// Layout for the current path; no path means `/`.
pub fn display_page(ctx: &AppContext, selection: &Selection) -> RenderResult {
    let view = View::from_path(selection.pathname.as_deref().unwrap_or("/"));
    RenderResult::Page {
        view,
        html: render_view(view, ctx.dataset()),
    }
}

/// Bar chart for the selected scorecard, or all scorecards.
pub fn update_bar_chart(ctx: &AppContext, selection: &Selection) -> RenderResult {
    let scorecard = selection.scorecard.as_deref();
    let subset = filter_by_scorecard(ctx.dataset(), scorecard);
    RenderResult::Chart(render_chart(&subset, scorecard))
}

/// Detail table for the clicked bar.
pub fn update_table(ctx: &AppContext, selection: &Selection) -> RenderResult {
    RenderResult::Table(render_table(ctx.dataset(), selection.click.as_ref()))
}
