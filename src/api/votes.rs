//! Vote API endpoints.

use axum::{
    extract::{Path, State},
    Json,
};

use super::{find_item, success, ApiResult};
use crate::models::{VoteRequest, VoteState};
use crate::AppState;

/// POST /api/news/:id/vote - Toggle an up or down vote.
pub async fn cast_vote(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Json(request): Json<VoteRequest>,
) -> ApiResult<VoteState> {
    let item = find_item(&state.catalog, &id)?;
    let vote = state.votes.apply_vote(item, request.direction).await?;
    success(vote)
}
