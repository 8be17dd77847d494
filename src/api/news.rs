//! News feed API endpoints.

use axum::{
    extract::{Path, Query, State},
    Json,
};

use super::{find_item, success, ApiResult};
use crate::feed::{resolve_query, visible_feed};
use crate::models::{
    FeedEntry, FeedParams, NewsItem, PublishNewsRequest, PublishReceipt, ReportReceipt,
    ReportRequest,
};
use crate::submissions;
use crate::AppState;

/// GET /api/news - Filtered and sorted feed.
pub async fn list_news(
    State(state): State<AppState>,
    Query(params): Query<FeedParams>,
) -> ApiResult<Vec<FeedEntry>> {
    let query = resolve_query(&params)?;
    let items = state.catalog.items();
    let votes = state.votes.vote_states(items).await?;

    let net_score = |item: &NewsItem| {
        votes
            .get(&item.id)
            .map(|v| v.net_score())
            .unwrap_or_else(|| item.initial_score())
    };

    let mut entries = Vec::new();
    for item in visible_feed(items, &query, net_score) {
        let Some(vote_state) = votes.get(&item.id).copied() else {
            continue;
        };
        let comments = state.comments.load_comments(&item.id, &item.comments).await?;

        let mut item = item.clone();
        item.comments = comments;
        entries.push(FeedEntry {
            item,
            votes: vote_state,
        });
    }

    success(entries)
}

/// GET /api/news/:id - One item with this device's votes and comments.
pub async fn get_news(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> ApiResult<FeedEntry> {
    let item = find_item(&state.catalog, &id)?;
    let votes = state.votes.vote_state(item).await?;
    let comments = state.comments.load_comments(&item.id, &item.comments).await?;

    let mut item = item.clone();
    item.comments = comments;
    success(FeedEntry { item, votes })
}

/// POST /api/news - Publish (contributors only).
pub async fn publish_news(
    State(state): State<AppState>,
    Json(request): Json<PublishNewsRequest>,
) -> ApiResult<PublishReceipt> {
    let receipt = submissions::publish(&state.session, &request).await?;
    success(receipt)
}

/// POST /api/news/:id/report - Report an item.
pub async fn report_news(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Json(request): Json<ReportRequest>,
) -> ApiResult<ReportReceipt> {
    let receipt = submissions::report(&state.catalog, &id, &request)?;
    success(receipt)
}
