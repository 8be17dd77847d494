//! Comment model matching the frontend Comment interface.

use serde::{Deserialize, Serialize};

/// A comment on a news item. Lists are append-only.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Comment {
    pub id: String,
    pub text: String,
    pub author: String,
    /// Display label, e.g. "1 hour ago" or a formatted local time
    pub timestamp: String,
}

/// Request body for posting a comment.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateCommentRequest {
    #[serde(default)]
    pub text: String,
}
