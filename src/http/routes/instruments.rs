//! CRUD handlers for the catalog collection.
//!
//! Ids arrive as raw path segments and are interpreted under the configured
//! id policy; a segment that cannot be an id is simply not found. Bodies are
//! taken as raw bytes so that a missing or non-JSON body is reported with the
//! profile's own message instead of the extractor's.

use axum::{
    body::Bytes,
    extract::{Path, State},
    http::StatusCode,
    routing::get,
    Json, Router,
};
use tracing::warn;

use crate::clients::ActorClient;
use crate::http::error::{ApiError, ApiResult};
use crate::http::route_not_found;
use crate::http::state::AppState;
use crate::instrument_actor::InstrumentError;
use crate::model::{Instrument, InstrumentId};
use crate::validation::{self, ValidationError};

/// Collection routes mounted under `collection_path`.
pub fn routes(collection_path: &str) -> Router<AppState> {
    Router::new()
        .route(
            collection_path,
            get(list_instruments)
                .post(create_instrument)
                .fallback(route_not_found),
        )
        .route(
            &format!("{}/{{id}}", collection_path),
            get(get_instrument)
                .patch(update_instrument)
                .delete(delete_instrument)
                .fallback(route_not_found),
        )
}

/// GET /<collection> - every record in insertion order.
async fn list_instruments(State(state): State<AppState>) -> ApiResult<Json<Vec<Instrument>>> {
    let items = state
        .client()
        .list_instruments()
        .await
        .map_err(store_error)?;
    Ok(Json(items))
}

/// GET /<collection>/{id}
async fn get_instrument(
    State(state): State<AppState>,
    Path(raw_id): Path<String>,
) -> ApiResult<Json<Instrument>> {
    let id = parse_id(&state, &raw_id)?;
    match state.client().get(id).await {
        Ok(Some(item)) => Ok(Json(item)),
        Ok(None) => Err(not_found(&state)),
        Err(e) => Err(store_error(e)),
    }
}

/// POST /<collection> - 201 with the stored record, id included.
async fn create_instrument(
    State(state): State<AppState>,
    body: Bytes,
) -> ApiResult<(StatusCode, Json<Instrument>)> {
    let schema = state.profile().schema;
    let params = validation::parse_body(&body)
        .and_then(|body| validation::validate_create(schema, &body))
        .map_err(|e| rejected(&state, e))?;

    let item = state
        .client()
        .create_instrument(params)
        .await
        .map_err(store_error)?;
    Ok((StatusCode::CREATED, Json(item)))
}

/// PATCH /<collection>/{id}
///
/// Existence is checked before the body is looked at, so an unknown id is a
/// 404 even when the body is also invalid.
async fn update_instrument(
    State(state): State<AppState>,
    Path(raw_id): Path<String>,
    body: Bytes,
) -> ApiResult<Json<Instrument>> {
    let id = parse_id(&state, &raw_id)?;
    if state
        .client()
        .get(id.clone())
        .await
        .map_err(store_error)?
        .is_none()
    {
        return Err(not_found(&state));
    }

    let schema = state.profile().schema;
    let patch = validation::parse_body(&body)
        .and_then(|body| validation::validate_patch(schema, &body))
        .map_err(|e| rejected(&state, e))?;

    // The record can still disappear between the check and the update.
    match state.client().update_instrument(id, patch).await {
        Ok(Some(item)) => Ok(Json(item)),
        Ok(None) => Err(not_found(&state)),
        Err(e) => Err(store_error(e)),
    }
}

/// DELETE /<collection>/{id} - 204 with an empty body.
async fn delete_instrument(
    State(state): State<AppState>,
    Path(raw_id): Path<String>,
) -> ApiResult<StatusCode> {
    let id = parse_id(&state, &raw_id)?;
    match state.client().delete(id).await {
        Ok(true) => Ok(StatusCode::NO_CONTENT),
        Ok(false) => Err(not_found(&state)),
        Err(e) => Err(store_error(e)),
    }
}

fn parse_id(state: &AppState, raw: &str) -> ApiResult<InstrumentId> {
    state
        .profile()
        .id_policy
        .parse(raw)
        .ok_or_else(|| not_found(state))
}

fn not_found(state: &AppState) -> ApiError {
    ApiError::NotFound(state.profile().messages.not_found.to_string())
}

fn rejected(state: &AppState, err: ValidationError) -> ApiError {
    warn!(error = %err, "Request rejected");
    ApiError::BadRequest(state.profile().messages.render(&err))
}

fn store_error(err: InstrumentError) -> ApiError {
    ApiError::Internal(err.to_string())
}
