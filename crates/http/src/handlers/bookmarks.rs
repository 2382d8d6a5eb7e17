use std::sync::Arc;

use axum::extract::rejection::{JsonRejection, QueryRejection};
use axum::extract::{Path, Query, State};
use axum::Json;
use linksaver_core::{Bookmark, ValidationError};
use linksaver_service::ServiceError;

use crate::api_error::ApiError;
use crate::auth::CallerId;
use crate::query_types::{CreateBookmarkRequest, ListQuery, ReorderRequest};
use crate::response_types::{DeleteResponse, SuccessResponse};
use crate::AppState;

pub async fn list_bookmarks(
    State(state): State<Arc<AppState>>,
    CallerId(user_id): CallerId,
    query: Result<Query<ListQuery>, QueryRejection>,
) -> Result<Json<Vec<Bookmark>>, ApiError> {
    let Query(query) = query?;
    let query = query.into_query().map_err(ApiError::BadRequest)?;
    let bookmarks = state.bookmark_service.list(&user_id, &query).await?;
    Ok(Json(bookmarks))
}

pub async fn create_bookmark(
    State(state): State<Arc<AppState>>,
    CallerId(user_id): CallerId,
    payload: Result<Json<CreateBookmarkRequest>, JsonRejection>,
) -> Result<Json<Bookmark>, ApiError> {
    let Json(req) = payload?;
    let bookmark = state.bookmark_service.ingest(&user_id, &req.url, req.tags.as_slice()).await?;
    Ok(Json(bookmark))
}

pub async fn get_bookmark(
    State(state): State<Arc<AppState>>,
    CallerId(user_id): CallerId,
    Path(id): Path<String>,
) -> Result<Json<Bookmark>, ApiError> {
    Ok(Json(state.bookmark_service.get(&user_id, &id).await?))
}

/// Always 200 for an authenticated caller; whether the id existed (or belongs
/// to someone else) is only visible through `deleted`.
pub async fn delete_bookmark(
    State(state): State<Arc<AppState>>,
    CallerId(user_id): CallerId,
    Path(id): Path<String>,
) -> Result<Json<DeleteResponse>, ApiError> {
    let deleted = state.bookmark_service.delete(&user_id, &id).await?;
    Ok(Json(DeleteResponse { success: true, deleted }))
}

pub async fn reorder_bookmarks(
    State(state): State<Arc<AppState>>,
    CallerId(user_id): CallerId,
    payload: Result<Json<ReorderRequest>, JsonRejection>,
) -> Result<Json<SuccessResponse>, ApiError> {
    let Json(req) = payload.map_err(|e| {
        tracing::debug!(error = %e, "reorder body rejected");
        ServiceError::from(ValidationError::InvalidOrder(e.body_text()))
    })?;
    state.bookmark_service.reorder(&user_id, &req.into_ids()).await?;
    Ok(Json(SuccessResponse { success: true }))
}
