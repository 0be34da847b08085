//! Registry lookup pass-through
//!
//! `GET /api/brreg?action=enhet|roller|search` forwards one request to Brreg
//! and returns the upstream document unchanged. An upstream "not found" is
//! answered with 200 `{"error":"Not found"}`.

use axum::{
    extract::{Query, State},
    response::{IntoResponse, Response},
    Json,
};
use serde::{Deserialize, Serialize};

use super::error::{ApiError, ErrorBody};
use super::AppState;
use crate::brreg::{extract_board_members, Enhet};

const NOT_FOUND: &str = "Not found";

#[derive(Debug, Default, Deserialize)]
pub struct BrregQuery {
    pub action: Option<String>,
    pub orgnr: Option<String>,
    pub id: Option<String>,
    pub query: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct SearchResponse {
    pub enheter: Vec<Enhet>,
}

/// Organization number for `params`; a known `id` alias wins over `orgnr`.
fn target_orgnr(state: &AppState, params: &BrregQuery) -> Result<String, ApiError> {
    state
        .dataset
        .aliases()
        .resolve(params.orgnr.as_deref(), params.id.as_deref())
        .ok_or_else(|| ApiError::bad_request("Missing orgnr or id"))
}

fn not_found() -> Response {
    Json(ErrorBody::new(NOT_FOUND)).into_response()
}

pub async fn brreg_lookup(
    State(state): State<AppState>,
    Query(params): Query<BrregQuery>,
) -> Result<Response, ApiError> {
    match params.action.as_deref() {
        Some("enhet") => {
            let orgnr = target_orgnr(&state, &params)?;
            tracing::debug!(%orgnr, "enhet lookup");
            Ok(match state.registry.fetch_enhet(&orgnr).await? {
                Some(enhet) => Json(enhet).into_response(),
                None => not_found(),
            })
        }
        Some("roller") => {
            let orgnr = target_orgnr(&state, &params)?;
            tracing::debug!(%orgnr, "roller lookup");
            Ok(match state.registry.fetch_roller(&orgnr).await? {
                Some(roller) => Json(roller).into_response(),
                None => not_found(),
            })
        }
        Some("search") => {
            let query = params
                .query
                .as_deref()
                .filter(|q| !q.is_empty())
                .ok_or_else(|| ApiError::bad_request("Missing query"))?;
            let enheter = state.registry.search_enheter(query).await?;
            tracing::debug!(query, hits = enheter.len(), "enhet search");
            Ok(Json(SearchResponse { enheter }).into_response())
        }
        _ => Err(ApiError::bad_request("Invalid action")),
    }
}

/// `GET /api/brreg/styre` - current board members of a unit.
pub async fn board_members(
    State(state): State<AppState>,
    Query(params): Query<BrregQuery>,
) -> Result<Response, ApiError> {
    let orgnr = target_orgnr(&state, &params)?;
    Ok(match state.registry.fetch_roller(&orgnr).await? {
        Some(roller) => Json(extract_board_members(&roller)).into_response(),
        None => not_found(),
    })
}
