//! Connection to the BaaS project shared by the service clients

use std::sync::Arc;

use reqwest::Method;
use tokio::sync::RwLock;
use url::Url;

use crate::account::Session;
use crate::config::GatewayConfig;
use crate::error::Result;
use crate::fetch::FetchBuilder;

/// Endpoint, project and session state of one BaaS project.
///
/// Cloning is cheap; clones share the HTTP connection pool and the session slot.
#[derive(Clone)]
pub struct Client {
    endpoint: Url,
    project_id: String,
    platform: String,
    http_client: reqwest::Client,
    session: Arc<RwLock<Option<Session>>>,
}

impl Client {
    /// Create a new client from a validated configuration
    pub fn new(config: &GatewayConfig, http_client: reqwest::Client) -> Self {
        Self {
            endpoint: config.endpoint.clone(),
            project_id: config.project_id.clone(),
            platform: config.platform.clone(),
            http_client,
            session: Arc::new(RwLock::new(None)),
        }
    }

    /// The project identifier
    pub fn project_id(&self) -> &str {
        &self.project_id
    }

    /// Absolute URL for an API path such as `/account`
    pub fn url(&self, path: &str) -> Result<Url> {
        let base = self.endpoint.as_str().trim_end_matches('/');
        Ok(Url::parse(&format!("{}{}", base, path))?)
    }

    /// Start a request carrying the project, platform and session headers
    pub async fn request(&self, method: Method, path: &str) -> Result<FetchBuilder<'_>> {
        let url = self.url(path)?;
        let origin = format!("appwrite-{}://{}", std::env::consts::OS, self.platform);

        let mut fetch = FetchBuilder::new(&self.http_client, url.as_str(), method)
            .header("X-Appwrite-Project", &self.project_id)
            .header("X-SDK-Name", "restate-gateway")
            .header("X-SDK-Version", env!("CARGO_PKG_VERSION"))
            .header("Origin", &origin);

        if let Some(secret) = self.session_secret().await {
            fetch = fetch.header("X-Appwrite-Session", &secret);
        }

        Ok(fetch)
    }

    /// Get the current session
    pub async fn session(&self) -> Option<Session> {
        self.session.read().await.clone()
    }

    /// Set the session
    pub async fn set_session(&self, session: Session) {
        *self.session.write().await = Some(session);
    }

    /// Forget the current session
    pub async fn clear_session(&self) {
        *self.session.write().await = None;
    }

    async fn session_secret(&self) -> Option<String> {
        self.session
            .read()
            .await
            .as_ref()
            .map(|session| session.secret.clone())
            .filter(|secret| !secret.is_empty())
    }
}
