//! Comment API endpoints.

use axum::{
    extract::{Path, State},
    Json,
};

use super::{find_item, success, ApiResult};
use crate::models::{Comment, CreateCommentRequest};
use crate::AppState;

/// GET /api/news/:id/comments - Stored list, or the item's seed comments.
pub async fn list_comments(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> ApiResult<Vec<Comment>> {
    let item = find_item(&state.catalog, &id)?;
    let comments = state.comments.load_comments(&item.id, &item.comments).await?;
    success(comments)
}

/// POST /api/news/:id/comments - Append a comment. Blank text changes nothing.
pub async fn post_comment(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Json(request): Json<CreateCommentRequest>,
) -> ApiResult<Vec<Comment>> {
    let item = find_item(&state.catalog, &id)?;
    let comments = state
        .comments
        .add_comment(&item.id, &item.comments, &request.text)
        .await?;
    success(comments)
}
