//! HTTP surface of the dashboard.
//!
//! - `GET /` and every unmatched path: overview page
//! - `GET /details`: details page
//! - `POST /_update`: update protocol, `{ "event", "payload" }` in, `RenderResult` out
//! - `GET /assets/{name}`: embedded stylesheet and scripts
//! - `GET /healthz`: liveness probe

use crate::context::AppContext;
use crate::events::{DispatchError, EventRegistry};
use anyhow::Context;
use axum::extract::{Path, Request, State};
use axum::http::{header, StatusCode, Uri};
use axum::middleware::{self, Next};
use axum::response::{Html, IntoResponse, Response};
use axum::routing::{get, post};
use axum::{Json, Router};
use scd_core::Dataset;
use scd_render::assets;
use scd_render::layout::render_page;
use serde::Deserialize;
use serde_json::{json, Value};
use std::path::Path as FsPath;
use std::sync::Arc;

#[derive(Clone)]
pub struct ServerState {
    context: AppContext,
    events: Arc<EventRegistry>,
}

impl ServerState {
    pub fn new(context: AppContext, events: EventRegistry) -> Self {
        Self {
            context,
            events: Arc::new(events),
        }
    }
}

/// Body of a `POST /_update` request.
#[derive(Debug, Deserialize)]
pub struct UpdateRequest {
    pub event: String,
    #[serde(default)]
    pub payload: Value,
}

/// Build the router over a loaded dataset with the dashboard's events.
pub fn router(context: AppContext) -> Router {
    router_with_events(context, EventRegistry::dashboard())
}

pub fn router_with_events(context: AppContext, events: EventRegistry) -> Router {
    Router::new()
        .route("/", get(page))
        .route("/details", get(page))
        .route("/_update", post(update))
        .route("/assets/:name", get(asset))
        .route("/healthz", get(healthz))
        .fallback(page)
        .layer(middleware::from_fn(log_requests))
        .with_state(ServerState::new(context, events))
}

/// Load the dataset and serve until the process is stopped.
///
/// A dataset that fails to load aborts before the port is bound.
pub async fn serve(data: &FsPath, host: &str, port: u16) -> anyhow::Result<()> {
    let dataset = Dataset::load(data)
        .with_context(|| format!("Failed to load scorecard data from {}", data.display()))?;
    let records = dataset.len();
    let app = router(AppContext::new(dataset));

    let listener = tokio::net::TcpListener::bind((host, port))
        .await
        .with_context(|| format!("Failed to bind {}:{}", host, port))?;
    log::info!(
        "serving {} records on http://{}",
        records,
        listener.local_addr()?
    );
    axum::serve(listener, app).await?;
    Ok(())
}

async fn page(State(state): State<ServerState>, uri: Uri) -> Html<String> {
    Html(render_page(uri.path(), state.context.dataset()))
}

async fn update(State(state): State<ServerState>, Json(request): Json<UpdateRequest>) -> Response {
    match state
        .events
        .dispatch(&state.context, &request.event, request.payload)
    {
        Ok(result) => Json(result).into_response(),
        Err(e) => {
            log::warn!("update rejected: {}", e);
            let status = match e {
                DispatchError::UnknownEvent(_) => StatusCode::NOT_FOUND,
                DispatchError::Payload { .. } => StatusCode::BAD_REQUEST,
            };
            (status, Json(json!({ "error": e.to_string() }))).into_response()
        }
    }
}

async fn asset(Path(name): Path<String>) -> Response {
    match assets::asset(&name) {
        Some((content_type, body)) => ([(header::CONTENT_TYPE, content_type)], body).into_response(),
        None => (StatusCode::NOT_FOUND, "not found").into_response(),
    }
}

async fn healthz() -> &'static str {
    "ok"
}

async fn log_requests(request: Request, next: Next) -> Response {
    let method = request.method().clone();
    let path = request.uri().path().to_string();
    let response = next.run(request).await;
    log::info!("{} {} -> {}", method, path, response.status().as_u16());
    response
}
