//! Session data returned by the account API

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// An authenticated session on the BaaS
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Session {
    /// The session ID
    #[serde(rename = "$id")]
    pub id: String,

    /// The user ID
    #[serde(rename = "userId")]
    pub user_id: String,

    /// Session secret, sent back as `X-Appwrite-Session`.
    ///
    /// Empty when the server only issued a cookie.
    #[serde(default)]
    pub secret: String,

    /// The provider that created the session
    #[serde(default)]
    pub provider: String,

    /// The creation time
    #[serde(rename = "$createdAt", default)]
    pub created_at: Option<DateTime<Utc>>,

    /// The expiry time
    #[serde(default)]
    pub expire: Option<DateTime<Utc>>,
}

impl Session {
    /// Check if the session has expired
    pub fn is_expired(&self) -> bool {
        self.is_expired_at(Utc::now())
    }

    /// Check if the session has expired at the given instant
    pub fn is_expired_at(&self, now: DateTime<Utc>) -> bool {
        match self.expire {
            Some(expire) => now >= expire,
            None => false,
        }
    }
}
