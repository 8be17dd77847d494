//! Feed filtering and ordering.
//!
//! [`visible_feed`] is pure: the caller supplies each item's current net score,
//! so the same catalog, query and scores always yield the same sequence.

mod catalog;

pub use catalog::Catalog;

use std::cmp::Reverse;

use crate::errors::AppError;
use crate::models::{CategoryFilter, CountryFilter, FeedParams, FeedQuery, NewsItem, SortMode};

/// Resolve raw query parameters. Missing parameters select everything.
pub fn resolve_query(params: &FeedParams) -> Result<FeedQuery, AppError> {
    let category = match params.category.as_deref() {
        None | Some("") => CategoryFilter::All,
        Some(s) => CategoryFilter::from_str(s)
            .ok_or_else(|| AppError::BadRequest(format!("Unknown category: {}", s)))?,
    };

    let country = match params.country.as_deref() {
        None | Some("") => CountryFilter::All,
        Some(s) => CountryFilter::from_str(s)
            .ok_or_else(|| AppError::BadRequest(format!("Unknown country: {}", s)))?,
    };

    let sort = match params.sort.as_deref() {
        None | Some("") => SortMode::Popularity,
        Some(s) => SortMode::from_str(s)
            .ok_or_else(|| AppError::BadRequest(format!("Unknown sort option: {}", s)))?,
    };

    Ok(FeedQuery {
        category,
        country,
        search: params.search.clone().unwrap_or_default(),
        sort,
    })
}

/// Case-insensitive substring match on title or description. Empty search matches all.
fn matches_search(item: &NewsItem, needle: &str) -> bool {
    needle.is_empty()
        || item.title.to_lowercase().contains(needle)
        || item.description.to_lowercase().contains(needle)
}

/// Filter the catalog by category, country and search text, then order it.
///
/// `net_score` must return upvotes minus downvotes including this device's vote.
/// The sort is stable, so ties keep catalog order.
///
/// `Newest` and `Oldest` compare the publish-time labels as plain strings, so
/// "1 day ago" sorts before "2 hours ago".
pub fn visible_feed<'a, F>(
    catalog: &'a [NewsItem],
    query: &FeedQuery,
    net_score: F,
) -> Vec<&'a NewsItem>
where
    F: Fn(&NewsItem) -> i64,
{
    let needle = query.search.to_lowercase();

    let mut visible: Vec<&NewsItem> = catalog
        .iter()
        .filter(|item| query.category.matches(item.category))
        .filter(|item| query.country.matches(item.country))
        .filter(|item| matches_search(item, &needle))
        .collect();

    match query.sort {
        SortMode::Popularity => visible.sort_by_key(|item| Reverse(net_score(*item))),
        SortMode::Newest => visible.sort_by(|a, b| a.publish_time.cmp(&b.publish_time)),
        SortMode::Oldest => visible.sort_by(|a, b| b.publish_time.cmp(&a.publish_time)),
    }

    visible
}
