use crate::infra::AppState;
use axum::http::{header, StatusCode};
use axum::response::IntoResponse;
use axum::Extension;
use axum::Json;
use mentor_match::matchmaking::{matchmaking_router, DirectoryStore, MatchmakingService};
use mentor_match::session::{SessionPreferences, ViewRole};
use serde::Deserialize;
use serde_json::json;
use std::sync::Arc;

#[derive(Debug, Default, Deserialize)]
pub(crate) struct SessionViewRequest {
    #[serde(default)]
    pub(crate) current: ViewRole,
}

pub(crate) fn with_matchmaking_routes<D>(service: Arc<MatchmakingService<D>>) -> axum::Router
where
    D: DirectoryStore + 'static,
{
    matchmaking_router(service)
        .route("/health", axum::routing::get(healthcheck))
        .route("/ready", axum::routing::get(readiness_endpoint))
        .route("/metrics", axum::routing::get(metrics_endpoint))
        .route(
            "/api/v1/session/view",
            axum::routing::post(switch_view_endpoint),
        )
}

pub(crate) async fn healthcheck() -> Json<serde_json::Value> {
    Json(json!({ "status": "ok" }))
}

pub(crate) async fn readiness_endpoint(Extension(state): Extension<AppState>) -> impl IntoResponse {
    let ready = state.readiness.load(std::sync::atomic::Ordering::Relaxed);
    let status = if ready {
        StatusCode::OK
    } else {
        StatusCode::SERVICE_UNAVAILABLE
    };

    let payload = if ready {
        json!({ "status": "ready" })
    } else {
        json!({ "status": "initializing" })
    };

    (status, Json(payload))
}

pub(crate) async fn metrics_endpoint(Extension(state): Extension<AppState>) -> impl IntoResponse {
    (
        StatusCode::OK,
        [(header::CONTENT_TYPE, "text/plain; version=0.0.4")],
        state.metrics.render(),
    )
}

/// Flips the dashboard view for the caller's session. The preference is echoed back for
/// the client to keep; nothing is stored server-side.
pub(crate) async fn switch_view_endpoint(
    Json(request): Json<SessionViewRequest>,
) -> Json<SessionPreferences> {
    Json(SessionPreferences::with_view(request.current).switched())
}
