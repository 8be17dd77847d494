//! Session and role flags.
//!
//! Flags are read from the local store once, when the session is loaded, and
//! then kept in step with every session operation. Nothing here verifies
//! credentials: any email/password pair is accepted.

use std::sync::Arc;

use tokio::sync::RwLock;

use crate::errors::AppError;
use crate::models::{ContributorApplication, SessionFlags, UserData};
use crate::storage::{keys, write_json, KeyValueStore};

/// Literal stored under `isContributor` once the application is accepted.
const CONTRIBUTOR_FLAG: &str = "true";

pub struct Session {
    store: Arc<dyn KeyValueStore>,
    flags: RwLock<SessionFlags>,
}

impl Session {
    /// Derive the flags from what the store currently holds.
    pub async fn load(store: Arc<dyn KeyValueStore>) -> Result<Self, AppError> {
        let flags = read_flags(store.as_ref()).await?;
        tracing::debug!(?flags, "Session loaded");
        Ok(Self {
            store,
            flags: RwLock::new(flags),
        })
    }

    pub async fn flags(&self) -> SessionFlags {
        *self.flags.read().await
    }

    /// Store the user record. The contributor flag is not touched.
    pub async fn sign_up(&self, email: &str, password: &str) -> Result<SessionFlags, AppError> {
        let user = UserData {
            email: email.to_string(),
            password: password.to_string(),
            is_contributor: false,
        };
        write_json(self.store.as_ref(), keys::USER_DATA, &user).await?;

        let mut flags = self.flags.write().await;
        flags.is_logged_in = true;
        tracing::info!("User signed up");
        Ok(*flags)
    }

    /// Accepted without checks and without writing anything.
    pub async fn log_in(&self, _email: &str, _password: &str) -> Result<SessionFlags, AppError> {
        tracing::info!("Login acknowledged");
        Ok(self.flags().await)
    }

    /// Validate the application form and set the contributor flag.
    pub async fn apply_contributor(
        &self,
        application: &ContributorApplication,
    ) -> Result<SessionFlags, AppError> {
        validate_application(application)?;

        self.store.set(keys::IS_CONTRIBUTOR, CONTRIBUTOR_FLAG).await?;

        let mut flags = self.flags.write().await;
        flags.is_contributor = true;
        tracing::info!("Contributor application accepted");
        Ok(*flags)
    }

    /// Remove the user record. The contributor flag stays set.
    pub async fn logout(&self) -> Result<SessionFlags, AppError> {
        self.store.remove(keys::USER_DATA).await?;

        let mut flags = self.flags.write().await;
        flags.is_logged_in = false;
        tracing::info!(is_contributor = flags.is_contributor, "User logged out");
        Ok(*flags)
    }

    pub async fn require_contributor(&self) -> Result<(), AppError> {
        if self.flags().await.is_contributor {
            Ok(())
        } else {
            Err(AppError::Forbidden(
                "You must be a contributor to publish news".to_string(),
            ))
        }
    }
}

async fn read_flags(store: &dyn KeyValueStore) -> Result<SessionFlags, AppError> {
    let is_logged_in = store.get(keys::USER_DATA).await?.is_some();
    let is_contributor =
        store.get(keys::IS_CONTRIBUTOR).await?.as_deref() == Some(CONTRIBUTOR_FLAG);
    Ok(SessionFlags {
        is_logged_in,
        is_contributor,
    })
}

fn validate_application(application: &ContributorApplication) -> Result<(), AppError> {
    let required = [
        ("Real name", &application.real_name),
        ("Current profession", &application.current_profession),
        ("Previous journalism experience", &application.previous_experience),
    ];
    for (label, value) in required {
        if value.trim().is_empty() {
            return Err(AppError::Validation(format!("{} is required", label)));
        }
    }

    if !application.terms.all_accepted() {
        return Err(AppError::Validation(
            "All terms and conditions must be accepted".to_string(),
        ));
    }

    Ok(())
}
