//! Session models: the stored user record, role flags and the session forms.

use serde::{Deserialize, Serialize};

/// Record stored under `userData` at signup.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct UserData {
    pub email: String,
    pub password: String,
    #[serde(default)]
    pub is_contributor: bool,
}

/// Role flags derived from what the local store holds.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "camelCase")]
pub struct SessionFlags {
    pub is_logged_in: bool,
    pub is_contributor: bool,
}

/// Request body for signup and login.
#[derive(Debug, Clone, Deserialize)]
pub struct CredentialsRequest {
    pub email: String,
    pub password: String,
}

/// Terms a contributor must accept.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct ContributorTerms {
    #[serde(default)]
    pub no_plagiarism: bool,
    #[serde(default)]
    pub no_ai_without_labeling: bool,
    #[serde(default)]
    pub source_attribution: bool,
    #[serde(default)]
    pub no_fake_news: bool,
}

impl ContributorTerms {
    pub fn all_accepted(&self) -> bool {
        self.no_plagiarism
            && self.no_ai_without_labeling
            && self.source_attribution
            && self.no_fake_news
    }
}

/// Request body for the contributor application.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ContributorApplication {
    pub real_name: String,
    pub current_profession: String,
    pub previous_experience: String,
    #[serde(default)]
    pub terms: ContributorTerms,
}
