//! Configuration module for the newsfeed backend.
//!
//! All configuration is loaded from environment variables with sensible defaults.

use std::env;
use std::net::SocketAddr;
use std::path::PathBuf;

/// Default author label attached to comments posted from this device.
pub const DEFAULT_COMMENT_AUTHOR: &str = "Anonymous User";

/// Which local store backs votes, comments and session records.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StoreKind {
    /// SQLite file on the local device
    Sqlite,
    /// Process memory; everything is lost on exit
    Memory,
}

impl StoreKind {
    pub fn from_str(s: &str) -> Option<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "sqlite" => Some(StoreKind::Sqlite),
            "memory" => Some(StoreKind::Memory),
            _ => None,
        }
    }

    /// Resolve the configured store name, falling back to SQLite.
    ///
    /// An unrecognised name is handed back so it can be logged once tracing is up.
    pub fn resolve(raw: Option<String>) -> (Self, Option<String>) {
        match raw {
            None => (StoreKind::Sqlite, None),
            Some(name) => match StoreKind::from_str(&name) {
                Some(kind) => (kind, None),
                None => (StoreKind::Sqlite, Some(name)),
            },
        }
    }
}

/// Application configuration loaded from environment variables.
#[derive(Debug, Clone)]
pub struct Config {
    /// Local store implementation
    pub store: StoreKind,
    /// `NEWSFEED_STORE` value that was not recognised, if any
    pub rejected_store: Option<String>,
    /// Path to the SQLite local storage file
    pub db_path: PathBuf,
    /// Address to bind the server to
    pub bind_addr: SocketAddr,
    /// Log level (trace, debug, info, warn, error)
    pub log_level: String,
    /// Author label for new comments
    pub comment_author: String,
}

impl Config {
    /// Load configuration from environment variables.
    pub fn from_env() -> Self {
        dotenvy::dotenv().ok();

        let (store, rejected_store) = StoreKind::resolve(env::var("NEWSFEED_STORE").ok());

        let db_path = env::var("NEWSFEED_DB_PATH")
            .unwrap_or_else(|_| "./data/newsfeed.sqlite".to_string())
            .into();

        let bind_addr = env::var("NEWSFEED_BIND_ADDR")
            .unwrap_or_else(|_| "127.0.0.1:8080".to_string())
            .parse()
            .expect("Invalid NEWSFEED_BIND_ADDR format");

        let log_level = env::var("NEWSFEED_LOG_LEVEL").unwrap_or_else(|_| "info".to_string());

        let comment_author = env::var("NEWSFEED_COMMENT_AUTHOR")
            .ok()
            .filter(|s| !s.trim().is_empty())
            .unwrap_or_else(|| DEFAULT_COMMENT_AUTHOR.to_string());

        Self {
            store,
            rejected_store,
            db_path,
            bind_addr,
            log_level,
            comment_author,
        }
    }
}
