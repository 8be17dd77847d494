//! Newsfeed Backend
//!
//! Serves a filterable news feed with voting, comments and role flags, all kept
//! in a device-local key/value store.

mod api;
mod comments;
mod config;
mod db;
mod errors;
mod feed;
mod models;
mod session;
mod storage;
mod submissions;
mod votes;

use std::sync::Arc;

use axum::{
    routing::{get, post},
    Router,
};
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use comments::CommentStore;
use config::{Config, StoreKind};
use db::SqliteStore;
use errors::AppError;
use feed::Catalog;
use session::Session;
use storage::{KeyValueStore, MemoryStore};
use votes::VoteStore;

/// Application state shared across all handlers.
#[derive(Clone)]
pub struct AppState {
    pub catalog: Arc<Catalog>,
    pub votes: VoteStore,
    pub comments: CommentStore,
    pub session: Arc<Session>,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Load configuration
    let config = Config::from_env();

    // Initialize logging
    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&config.log_level));

    tracing_subscriber::registry()
        .with(env_filter)
        .with(tracing_subscriber::fmt::layer())
        .init();

    tracing::info!("Starting Newsfeed Backend");
    tracing::info!("Bind address: {}", config.bind_addr);
    if let Some(name) = &config.rejected_store {
        tracing::warn!("Unknown NEWSFEED_STORE value {:?}, using sqlite", name);
    }

    // Open the local store
    let store: Arc<dyn KeyValueStore> = match config.store {
        StoreKind::Sqlite => {
            tracing::info!("Local storage path: {:?}", config.db_path);
            let pool = db::init_database(&config.db_path).await?;
            let sqlite = SqliteStore::new(pool);
            tracing::info!("Local storage holds {} records", sqlite.count().await?);
            Arc::new(sqlite)
        }
        StoreKind::Memory => {
            tracing::warn!("Using in-memory storage. Votes and comments are lost on exit!");
            Arc::new(MemoryStore::new())
        }
    };

    let state = build_state(store, &config.comment_author).await?;
    tracing::info!("Catalog loaded with {} items", state.catalog.items().len());

    // Build router
    let app = create_router(state);

    // Start server
    let listener = tokio::net::TcpListener::bind(&config.bind_addr).await?;
    tracing::info!("Server listening on {}", config.bind_addr);

    axum::serve(listener, app).await?;

    Ok(())
}

/// Wire the engines to a store and load the session flags it holds.
pub async fn build_state(
    store: Arc<dyn KeyValueStore>,
    comment_author: &str,
) -> Result<AppState, AppError> {
    let session = Session::load(store.clone()).await?;
    let flags = session.flags().await;
    tracing::info!(
        is_logged_in = flags.is_logged_in,
        is_contributor = flags.is_contributor,
        "Session restored"
    );

    Ok(AppState {
        catalog: Arc::new(Catalog::sample()),
        votes: VoteStore::new(store.clone()),
        comments: CommentStore::new(store, comment_author),
        session: Arc::new(session),
    })
}

/// Create the application router with all routes.
pub fn create_router(state: AppState) -> Router {
    // CORS configuration
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    let api_routes = Router::new()
        // Feed
        .route("/news", get(api::list_news))
        .route("/news", post(api::publish_news))
        .route("/news/{id}", get(api::get_news))
        .route("/news/{id}/vote", post(api::cast_vote))
        .route("/news/{id}/comments", get(api::list_comments))
        .route("/news/{id}/comments", post(api::post_comment))
        .route("/news/{id}/report", post(api::report_news))
        // Session
        .route("/session", get(api::get_session))
        .route("/session/signup", post(api::sign_up))
        .route("/session/login", post(api::log_in))
        .route("/session/logout", post(api::log_out))
        .route("/session/contributor", post(api::apply_contributor));

    // Health check
    let health_routes = Router::new().route("/health", get(health_check));

    Router::new()
        .nest("/api", api_routes)
        .merge(health_routes)
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// Health check endpoint.
async fn health_check() -> &'static str {
    "OK"
}
