//! Error handling for the gateway

use std::fmt;
use thiserror::Error;

/// Unified error type for the gateway and its service clients
#[derive(Error, Debug)]
pub enum Error {
    /// Network or HTTP related errors
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// JSON serialization or deserialization errors
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// URL parsing errors
    #[error("URL error: {0}")]
    Url(#[from] url::ParseError),

    /// Error body returned by the BaaS (`{ "message", "code", "type" }`)
    #[error("API error {code} ({kind}): {message}")]
    Api {
        code: u16,
        kind: String,
        message: String,
    },

    /// Non-success response whose body could not be decoded as an API error
    #[error("Request failed with status {status}: {body}")]
    UnexpectedStatus { status: u16, body: String },

    /// Authentication errors
    #[error("Authentication error: {0}")]
    Auth(String),

    /// Database errors raised locally, before or after a request
    #[error("Database error: {0}")]
    Database(String),

    /// Missing or invalid configuration value, named by its variable
    #[error("Configuration error: missing or invalid {0}")]
    Config(String),

    /// General errors
    #[error("{0}")]
    General(String),
}

impl Error {
    /// Create a new authentication error
    pub fn auth<T: fmt::Display>(msg: T) -> Self {
        Error::Auth(msg.to_string())
    }

    /// Create a new database error
    pub fn database<T: fmt::Display>(msg: T) -> Self {
        Error::Database(msg.to_string())
    }

    /// Create a new configuration error
    pub fn config<T: fmt::Display>(name: T) -> Self {
        Error::Config(name.to_string())
    }

    /// Create a new general error
    pub fn general<T: fmt::Display>(msg: T) -> Self {
        Error::General(msg.to_string())
    }

    /// HTTP status code carried by the error, if the server answered
    pub fn status(&self) -> Option<u16> {
        match self {
            Error::Api { code, .. } => Some(*code),
            Error::UnexpectedStatus { status, .. } => Some(*status),
            Error::Http(e) => e.status().map(|s| s.as_u16()),
            _ => None,
        }
    }
}

pub type Result<T> = std::result::Result<T, Error>;
