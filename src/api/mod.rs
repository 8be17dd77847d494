//! REST API module.
//!
//! Thin handlers over the feed, vote, comment and session engines.

mod comments;
mod news;
mod session;
mod votes;

pub use comments::*;
pub use news::*;
pub use session::*;
pub use votes::*;

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;

use crate::errors::AppError;
use crate::feed::Catalog;
use crate::models::NewsItem;

/// Success response envelope.
#[derive(Debug, Serialize)]
pub struct ApiResponse<T: Serialize> {
    pub success: bool,
    pub data: T,
}

impl<T: Serialize> ApiResponse<T> {
    pub fn new(data: T) -> Self {
        Self {
            success: true,
            data,
        }
    }
}

impl<T: Serialize> IntoResponse for ApiResponse<T> {
    fn into_response(self) -> Response {
        (StatusCode::OK, Json(self)).into_response()
    }
}

/// Response type that can be either success or error.
pub type ApiResult<T> = Result<ApiResponse<T>, AppError>;

/// Create a successful API response.
pub fn success<T: Serialize>(data: T) -> ApiResult<T> {
    Ok(ApiResponse::new(data))
}

/// Look up a catalog item or fail with NOT_FOUND.
fn find_item<'a>(catalog: &'a Catalog, id: &str) -> Result<&'a NewsItem, AppError> {
    catalog.get(id).ok_or_else(|| AppError::item_not_found(id))
}
