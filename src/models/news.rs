//! News item model matching the frontend NewsItem interface.

use serde::{Deserialize, Serialize};

use super::{Comment, VoteState};

/// Category of a real news item.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub enum Category {
    Politics,
    Sports,
    Entertainment,
    Technology,
}

/// Category selector in the feed; `All` never appears on an item.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CategoryFilter {
    #[default]
    All,
    Only(Category),
}

impl CategoryFilter {
    pub fn from_str(s: &str) -> Option<Self> {
        match s {
            "All" => Some(CategoryFilter::All),
            "Politics" => Some(CategoryFilter::Only(Category::Politics)),
            "Sports" => Some(CategoryFilter::Only(Category::Sports)),
            "Entertainment" => Some(CategoryFilter::Only(Category::Entertainment)),
            "Technology" => Some(CategoryFilter::Only(Category::Technology)),
            _ => None,
        }
    }

    pub fn matches(&self, category: Category) -> bool {
        match self {
            CategoryFilter::All => true,
            CategoryFilter::Only(selected) => *selected == category,
        }
    }
}

/// Country of a real news item.
#[allow(clippy::upper_case_acronyms)]
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub enum Country {
    USA,
    UK,
    Canada,
    Australia,
    India,
    Japan,
}

/// Country selector in the feed; `All` never appears on an item.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CountryFilter {
    #[default]
    All,
    Only(Country),
}

impl CountryFilter {
    pub fn from_str(s: &str) -> Option<Self> {
        match s {
            "All" => Some(CountryFilter::All),
            "USA" => Some(CountryFilter::Only(Country::USA)),
            "UK" => Some(CountryFilter::Only(Country::UK)),
            "Canada" => Some(CountryFilter::Only(Country::Canada)),
            "Australia" => Some(CountryFilter::Only(Country::Australia)),
            "India" => Some(CountryFilter::Only(Country::India)),
            "Japan" => Some(CountryFilter::Only(Country::Japan)),
            _ => None,
        }
    }

    pub fn matches(&self, country: Country) -> bool {
        match self {
            CountryFilter::All => true,
            CountryFilter::Only(selected) => *selected == country,
        }
    }
}

/// Feed ordering.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum SortMode {
    #[default]
    Popularity,
    Newest,
    Oldest,
}

impl SortMode {
    pub fn from_str(s: &str) -> Option<Self> {
        match s {
            "popularity" => Some(SortMode::Popularity),
            "newest" => Some(SortMode::Newest),
            "oldest" => Some(SortMode::Oldest),
            _ => None,
        }
    }
}

/// A catalog entry. Immutable once the catalog is built.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct NewsItem {
    pub id: String,
    pub title: String,
    pub description: String,
    pub source: String,
    pub publisher: String,
    pub category: Category,
    pub country: Country,
    /// Display label such as "2 hours ago"; not a timestamp
    pub publish_time: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
    pub initial_upvotes: i64,
    pub initial_downvotes: i64,
    /// Seed comments shown until the device stores its own list
    #[serde(default)]
    pub comments: Vec<Comment>,
}

impl NewsItem {
    /// Net score before any vote from this device.
    pub fn initial_score(&self) -> i64 {
        self.initial_upvotes - self.initial_downvotes
    }
}

/// Resolved feed query. Every field has an "everything" default.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FeedQuery {
    pub category: CategoryFilter,
    pub country: CountryFilter,
    pub search: String,
    pub sort: SortMode,
}

/// Raw query string parameters for `GET /api/news`.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct FeedParams {
    #[serde(default)]
    pub category: Option<String>,
    #[serde(default)]
    pub country: Option<String>,
    #[serde(default)]
    pub search: Option<String>,
    #[serde(default)]
    pub sort: Option<String>,
}

/// A feed row: the catalog item with this device's vote state.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FeedEntry {
    #[serde(flatten)]
    pub item: NewsItem,
    pub votes: VoteState,
}

/// Request body for publishing a news item.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PublishNewsRequest {
    pub title: String,
    pub description: String,
    pub source: String,
    #[serde(default)]
    pub image: Option<String>,
}

/// Acknowledgement returned after a successful publish.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PublishReceipt {
    pub title: String,
    pub source: String,
    pub message: String,
}

/// Request body for reporting a news item.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReportRequest {
    pub reason: String,
}

/// Acknowledgement returned after a report.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReportReceipt {
    pub news_id: String,
    pub message: String,
}
