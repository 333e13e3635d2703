//! Types for the account API

use serde::{Deserialize, Serialize};
use url::Url;

use crate::error::Error;

/// User data
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct User {
    /// The user ID
    #[serde(rename = "$id", default)]
    pub id: String,

    /// Display name
    #[serde(default)]
    pub name: String,

    /// The user's email address
    #[serde(default)]
    pub email: Option<String>,

    /// Registration time
    #[serde(default)]
    pub registration: Option<String>,

    /// Whether the account is active
    #[serde(default)]
    pub status: Option<bool>,

    /// User preferences
    #[serde(default)]
    pub prefs: serde_json::Value,
}

/// The current user together with the derived initials avatar
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CurrentUser {
    #[serde(flatten)]
    pub user: User,

    /// URL of the initials avatar for `user.name`
    pub avatar: String,
}

/// OAuth providers
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OAuthProvider {
    Google,
    Apple,
    Github,
    Discord,
    Microsoft,
}

impl OAuthProvider {
    /// Path segment used by the token endpoint
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Google => "google",
            Self::Apple => "apple",
            Self::Github => "github",
            Self::Discord => "discord",
            Self::Microsoft => "microsoft",
        }
    }
}

/// Outcome of an interactive browser authorization session
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BrowserResult {
    /// The flow reached the redirect target; carries the full callback URL
    Success { url: String },
    /// The user cancelled
    Cancel,
    /// The browser was closed before reaching the redirect target
    Dismiss,
}

/// Credentials carried by a successful OAuth callback
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OAuthCallback {
    pub user_id: String,
    pub secret: String,
}

impl OAuthCallback {
    /// Extract `userId` and `secret` from a callback URL.
    ///
    /// Both must be present and non-empty.
    pub fn parse(callback_url: &str) -> Result<Self, Error> {
        let url = Url::parse(callback_url)?;

        let mut user_id = None;
        let mut secret = None;
        for (key, value) in url.query_pairs() {
            match key.as_ref() {
                "userId" => user_id = Some(value.into_owned()),
                "secret" => secret = Some(value.into_owned()),
                _ => {}
            }
        }

        match (user_id, secret) {
            (Some(user_id), Some(secret)) if !user_id.is_empty() && !secret.is_empty() => {
                Ok(Self { user_id, secret })
            }
            _ => Err(Error::auth("OAuth callback is missing secret or userId")),
        }
    }
}
