//! Session API endpoints.

use axum::{extract::State, Json};

use super::{success, ApiResult};
use crate::models::{ContributorApplication, CredentialsRequest, SessionFlags};
use crate::AppState;

/// GET /api/session - Current role flags.
pub async fn get_session(State(state): State<AppState>) -> ApiResult<SessionFlags> {
    success(state.session.flags().await)
}

/// POST /api/session/signup
pub async fn sign_up(
    State(state): State<AppState>,
    Json(request): Json<CredentialsRequest>,
) -> ApiResult<SessionFlags> {
    let flags = state
        .session
        .sign_up(&request.email, &request.password)
        .await?;
    success(flags)
}

/// POST /api/session/login
pub async fn log_in(
    State(state): State<AppState>,
    Json(request): Json<CredentialsRequest>,
) -> ApiResult<SessionFlags> {
    let flags = state
        .session
        .log_in(&request.email, &request.password)
        .await?;
    success(flags)
}

/// POST /api/session/logout
pub async fn log_out(State(state): State<AppState>) -> ApiResult<SessionFlags> {
    success(state.session.logout().await?)
}

/// POST /api/session/contributor - Apply for the contributor role.
pub async fn apply_contributor(
    State(state): State<AppState>,
    Json(application): Json<ContributorApplication>,
) -> ApiResult<SessionFlags> {
    let flags = state.session.apply_contributor(&application).await?;
    success(flags)
}
