//! Map, ring and dataset endpoints

use axum::{
    extract::{Path, Query, State},
    Json,
};
use serde::Deserialize;
use serde_json::{json, Value};

use super::error::ApiError;
use super::AppState;
use maktkart_graph::{Interaction, LayoutGraph, MapView, RingGraph};
use maktkart_types::{Entity, RevolvingDoorEntry};

#[derive(Debug, Default, Deserialize)]
pub struct MapQuery {
    pub q: Option<String>,
    pub hovered: Option<String>,
    pub selected: Option<String>,
    pub view: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
pub struct InteractionQuery {
    pub hovered: Option<String>,
    pub selected: Option<String>,
}

fn interaction(hovered: Option<String>, selected: Option<String>) -> Interaction {
    Interaction {
        hovered: hovered.filter(|id| !id.is_empty()),
        selected: selected.filter(|id| !id.is_empty()),
    }
}

fn parse_view(raw: Option<&str>) -> Result<MapView, ApiError> {
    match raw {
        None | Some("") | Some("full") => Ok(MapView::Full),
        Some("embedded") => Ok(MapView::Embedded),
        Some(other) => Err(ApiError::bad_request(format!(
            "Invalid view '{}', expected 'full' or 'embedded'",
            other
        ))),
    }
}

pub async fn health() -> Json<Value> {
    Json(json!({ "status": "ok" }))
}

pub async fn map_layout(
    State(state): State<AppState>,
    Query(params): Query<MapQuery>,
) -> Result<Json<LayoutGraph>, ApiError> {
    let view = parse_view(params.view.as_deref())?;
    let query = params.q.unwrap_or_default();
    let interaction = interaction(params.hovered, params.selected);
    Ok(Json(state.dataset.map_layout(view, &query, &interaction)))
}

pub async fn kingmaker_ring(
    State(state): State<AppState>,
    Query(params): Query<InteractionQuery>,
) -> Json<RingGraph> {
    let interaction = interaction(params.hovered, params.selected);
    Json(state.dataset.kingmaker_ring(&interaction))
}

pub async fn get_entity(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<Entity>, ApiError> {
    state
        .dataset
        .entity(&id)
        .cloned()
        .map(Json)
        .ok_or_else(|| ApiError::NotFound("Entity not found".to_string()))
}

pub async fn revolving_door(State(state): State<AppState>) -> Json<Vec<RevolvingDoorEntry>> {
    Json(state.dataset.revolving_door().to_vec())
}
