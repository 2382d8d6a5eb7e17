use std::sync::Arc;

use axum::extract::State;
use axum::Json;
use linksaver_core::TagCount;

use crate::api_error::ApiError;
use crate::auth::CallerId;
use crate::AppState;

pub async fn list_tags(
    State(state): State<Arc<AppState>>,
    CallerId(user_id): CallerId,
) -> Result<Json<Vec<TagCount>>, ApiError> {
    Ok(Json(state.bookmark_service.tags(&user_id).await?))
}
