//! Configuration for the gateway

use std::time::Duration;
use url::Url;

use crate::error::{Error, Result};

/// Default platform identifier registered with the BaaS project
pub const DEFAULT_PLATFORM: &str = "com.jsm.restate";

/// Default deep link the OAuth flow redirects back to
pub const DEFAULT_REDIRECT_URI: &str = "restate://";

/// Base URL of the public CheapShark API
pub const DEFAULT_DEALS_ENDPOINT: &str = "https://www.cheapshark.com/api/1.0";

/// Transport options for the underlying HTTP client
#[derive(Debug, Clone)]
pub struct ClientOptions {
    /// The request timeout
    pub request_timeout: Option<Duration>,

    /// The user agent sent with every request
    pub user_agent: String,
}

impl Default for ClientOptions {
    fn default() -> Self {
        Self {
            request_timeout: Some(Duration::from_secs(30)),
            user_agent: format!("restate-gateway/{}", env!("CARGO_PKG_VERSION")),
        }
    }
}

impl ClientOptions {
    /// Set the request timeout
    pub fn with_request_timeout(mut self, value: Option<Duration>) -> Self {
        self.request_timeout = value;
        self
    }

    /// Set the user agent
    pub fn with_user_agent(mut self, value: &str) -> Self {
        self.user_agent = value.to_string();
        self
    }

    /// Build the `reqwest` client these options describe
    pub fn build_http_client(&self) -> Result<reqwest::Client> {
        let mut builder = reqwest::Client::builder()
            .user_agent(self.user_agent.clone())
            .cookie_store(true);

        if let Some(timeout) = self.request_timeout {
            builder = builder.timeout(timeout);
        }

        Ok(builder.build()?)
    }
}

/// Everything the gateway needs to reach the BaaS project and the deals API.
///
/// Built once at process start. Construction fails with [`Error::Config`]
/// naming the first missing variable, so nothing is left to fail on first use.
#[derive(Debug, Clone)]
pub struct GatewayConfig {
    /// BaaS API endpoint, e.g. `https://cloud.appwrite.io/v1`
    pub endpoint: Url,

    /// BaaS project identifier
    pub project_id: String,

    /// Platform identifier registered with the project
    pub platform: String,

    /// Database holding every collection below
    pub database_id: String,

    pub galleries_collection_id: String,
    pub reviews_collection_id: String,
    pub agents_collection_id: String,
    pub properties_collection_id: String,
    pub favorite_games_collection_id: String,

    /// Where the OAuth provider sends the user back to
    pub redirect_uri: String,

    /// Base URL of the deals API
    pub deals_endpoint: Url,

    /// Transport options
    pub options: ClientOptions,
}

impl GatewayConfig {
    /// Load the configuration from environment variables
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Load the configuration through an arbitrary variable lookup.
    ///
    /// Empty values count as missing.
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |name: &str| lookup(name).filter(|value| !value.trim().is_empty());
        let require = |name: &str| get(name).ok_or_else(|| Error::config(name));

        let config = Self {
            endpoint: Url::parse(&require("APPWRITE_ENDPOINT")?)?,
            project_id: require("APPWRITE_PROJECT_ID")?,
            platform: get("APPWRITE_PLATFORM").unwrap_or_else(|| DEFAULT_PLATFORM.to_string()),
            database_id: require("APPWRITE_DATABASE_ID")?,
            galleries_collection_id: require("APPWRITE_GALLERIES_COLLECTION_ID")?,
            reviews_collection_id: require("APPWRITE_REVIEWS_COLLECTION_ID")?,
            agents_collection_id: require("APPWRITE_AGENTS_COLLECTION_ID")?,
            properties_collection_id: require("APPWRITE_PROPERTIES_COLLECTION_ID")?,
            favorite_games_collection_id: require("APPWRITE_FAV_GAMES_COLLECTION_ID")?,
            redirect_uri: get("APPWRITE_REDIRECT_URI")
                .unwrap_or_else(|| DEFAULT_REDIRECT_URI.to_string()),
            deals_endpoint: Url::parse(
                &get("DEALS_API_ENDPOINT").unwrap_or_else(|| DEFAULT_DEALS_ENDPOINT.to_string()),
            )?,
            options: ClientOptions::default(),
        };

        config.validate()?;
        Ok(config)
    }

    /// Set the transport options
    pub fn with_options(mut self, options: ClientOptions) -> Self {
        self.options = options;
        self
    }

    /// Check that no identifier is blank.
    ///
    /// `from_lookup` already guarantees this; it is repeated here for
    /// configurations assembled by hand.
    pub fn validate(&self) -> Result<()> {
        let fields = [
            ("APPWRITE_PROJECT_ID", &self.project_id),
            ("APPWRITE_PLATFORM", &self.platform),
            ("APPWRITE_DATABASE_ID", &self.database_id),
            ("APPWRITE_GALLERIES_COLLECTION_ID", &self.galleries_collection_id),
            ("APPWRITE_REVIEWS_COLLECTION_ID", &self.reviews_collection_id),
            ("APPWRITE_AGENTS_COLLECTION_ID", &self.agents_collection_id),
            ("APPWRITE_PROPERTIES_COLLECTION_ID", &self.properties_collection_id),
            ("APPWRITE_FAV_GAMES_COLLECTION_ID", &self.favorite_games_collection_id),
            ("APPWRITE_REDIRECT_URI", &self.redirect_uri),
        ];

        for (name, value) in fields {
            if value.trim().is_empty() {
                return Err(Error::config(name));
            }
        }

        if self.endpoint.cannot_be_a_base() {
            return Err(Error::config("APPWRITE_ENDPOINT"));
        }

        Ok(())
    }
}
