//! Publishing and reporting.
//!
//! Both only validate and acknowledge: the catalog is static and reports are
//! written to the log, not stored.

use crate::errors::AppError;
use crate::feed::Catalog;
use crate::models::{PublishNewsRequest, PublishReceipt, ReportReceipt, ReportRequest};
use crate::session::Session;

pub const MAX_TITLE_CHARS: usize = 100;
pub const MAX_DESCRIPTION_CHARS: usize = 200;

fn validate_publish(request: &PublishNewsRequest) -> Result<(), AppError> {
    if request.title.trim().is_empty() {
        return Err(AppError::Validation("Title is required".to_string()));
    }
    if request.title.chars().count() > MAX_TITLE_CHARS {
        return Err(AppError::Validation(format!(
            "Title must be at most {} characters",
            MAX_TITLE_CHARS
        )));
    }
    if request.description.trim().is_empty() {
        return Err(AppError::Validation("Description is required".to_string()));
    }
    if request.description.chars().count() > MAX_DESCRIPTION_CHARS {
        return Err(AppError::Validation(format!(
            "Description must be at most {} characters",
            MAX_DESCRIPTION_CHARS
        )));
    }
    if request.source.trim().is_empty() {
        return Err(AppError::Validation("Source is required".to_string()));
    }
    Ok(())
}

/// Publish a news item. Contributors only.
pub async fn publish(
    session: &Session,
    request: &PublishNewsRequest,
) -> Result<PublishReceipt, AppError> {
    session.require_contributor().await?;
    validate_publish(request)?;

    tracing::info!(
        title = %request.title,
        source = %request.source,
        has_image = request.image.is_some(),
        "News published"
    );

    Ok(PublishReceipt {
        title: request.title.clone(),
        source: request.source.clone(),
        message: "News published successfully".to_string(),
    })
}

/// Report a news item.
pub fn report(
    catalog: &Catalog,
    news_id: &str,
    request: &ReportRequest,
) -> Result<ReportReceipt, AppError> {
    if catalog.get(news_id).is_none() {
        return Err(AppError::item_not_found(news_id));
    }
    if request.reason.trim().is_empty() {
        return Err(AppError::Validation("Reason is required".to_string()));
    }

    tracing::warn!(news_id, reason = %request.reason, "News item reported");

    Ok(ReportReceipt {
        news_id: news_id.to_string(),
        message: format!("Report submitted for news ID: {}", news_id),
    })
}
