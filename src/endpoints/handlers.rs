use crate::endpoints::map::INDEX_HTML;
use crate::endpoints::server::{AppState, PlateState};
use axum::{
    Json,
    body::Bytes,
    extract::State,
    http::{StatusCode, header},
    response::{Html, IntoResponse, Response},
};
use std::sync::Arc;

pub async fn webmap_handler() -> impl IntoResponse {
    Html(INDEX_HTML)
}

pub async fn view_handler(State(state): State<Arc<AppState>>) -> impl IntoResponse {
    Json(state.view.clone())
}

pub async fn legend_handler(State(state): State<Arc<AppState>>) -> impl IntoResponse {
    Json(state.view.legend.entries.clone())
}

/// Layer bodies are serialised once when built; requests only bump a refcount.
fn geojson_response(body: Bytes) -> Response {
    ([(header::CONTENT_TYPE, "application/json")], body).into_response()
}

pub async fn earthquakes_handler(State(state): State<Arc<AppState>>) -> Response {
    geojson_response(state.earthquakes.clone())
}

/// Holds the request open until the boundary feed has been loaded (or has
/// failed), so the page can append the layer whenever it shows up.
pub async fn plates_handler(State(state): State<Arc<AppState>>) -> Response {
    let mut plates = state.plates.clone();
    let outcome = plates
        .wait_for(|s| !matches!(s, PlateState::Pending))
        .await
        .map(|s| (*s).clone());

    match outcome {
        Ok(PlateState::Ready(layer)) => geojson_response(layer),
        Ok(PlateState::Failed(reason)) => (StatusCode::BAD_GATEWAY, reason).into_response(),
        Ok(PlateState::Pending) | Err(_) => (
            StatusCode::SERVICE_UNAVAILABLE,
            "plate boundaries are not available",
        )
            .into_response(),
    }
}
