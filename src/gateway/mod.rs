//! The gateway: every operation the app calls, with its failure contract.
//!
//! Reads, `login` and `logout` log their errors and fall back to an empty or
//! absent value. Mutations of the favorites collection log and propagate.

mod deals;
mod favorites;
mod listings;

use log::{error, warn};

use crate::account::{
    Account, AuthBrowser, BrowserResult, CurrentUser, OAuthCallback, OAuthProvider, Session,
};
use crate::avatars::Avatars;
use crate::client::Client;
use crate::config::GatewayConfig;
use crate::databases::Databases;
use crate::deals::DealsClient;
use crate::error::Error;

pub use deals::*;
pub use favorites::*;
pub use listings::*;

/// Data-access gateway over the BaaS project and the deals API
#[derive(Clone)]
pub struct Gateway {
    config: GatewayConfig,
    client: Client,
    account: Account,
    avatars: Avatars,
    databases: Databases,
    deals: DealsClient,
}

impl Gateway {
    /// Create a gateway from a configuration, validating it first
    pub fn new(config: GatewayConfig) -> Result<Self, Error> {
        config.validate()?;

        let http_client = config.options.build_http_client()?;
        let client = Client::new(&config, http_client.clone());
        let deals = DealsClient::new(&config.deals_endpoint, http_client);

        Ok(Self {
            account: Account::new(client.clone()),
            avatars: Avatars::new(client.clone()),
            databases: Databases::new(client.clone()),
            deals,
            client,
            config,
        })
    }

    /// Create a gateway configured from environment variables
    pub fn from_env() -> Result<Self, Error> {
        Self::new(GatewayConfig::from_env()?)
    }

    /// The configuration in use
    pub fn config(&self) -> &GatewayConfig {
        &self.config
    }

    /// The deals API client
    pub fn deals(&self) -> &DealsClient {
        &self.deals
    }

    /// Get the current session
    pub async fn session(&self) -> Option<Session> {
        self.client.session().await
    }

    /// Re-authenticate with a session obtained elsewhere
    pub async fn set_session(&self, session: Session) {
        self.client.set_session(session).await;
    }

    /// Sign in with Google through an interactive browser session.
    ///
    /// Returns `false` when any step fails; no session is requested unless the
    /// callback carried both `userId` and `secret`.
    pub async fn login(&self, browser: &dyn AuthBrowser) -> bool {
        match self.try_login(browser).await {
            Ok(_) => true,
            Err(e) => {
                error!("Login failed: {}", e);
                false
            }
        }
    }

    async fn try_login(&self, browser: &dyn AuthBrowser) -> Result<Session, Error> {
        let redirect_uri = &self.config.redirect_uri;

        let auth_url = self.account.create_oauth2_token(
            OAuthProvider::Google,
            redirect_uri,
            redirect_uri,
            &[],
        )?;

        let callback_url = match browser.open_auth_session(&auth_url, redirect_uri).await {
            BrowserResult::Success { url } => url,
            other => return Err(Error::auth(format!("Create OAuth2 token failed: {:?}", other))),
        };

        let callback = OAuthCallback::parse(&callback_url)?;
        self.account
            .create_session(&callback.user_id, &callback.secret)
            .await
    }

    /// Delete the current session. Returns `false` on failure.
    pub async fn logout(&self) -> bool {
        match self.account.delete_session("current").await {
            Ok(()) => true,
            Err(e) => {
                error!("Logout failed: {}", e);
                false
            }
        }
    }

    /// ID of the signed-in user, `None` if the account carries no usable ID
    pub async fn get_user_id(&self) -> Result<Option<String>, Error> {
        let user = self.account.get().await?;

        if user.id.is_empty() {
            warn!("Account lookup returned no user id");
            return Ok(None);
        }

        Ok(Some(user.id))
    }

    /// Profile of the signed-in user with an initials avatar, or `None`
    pub async fn get_current_user(&self) -> Option<CurrentUser> {
        match self.try_get_current_user().await {
            Ok(user) => user,
            Err(e) => {
                error!("Failed to get current user: {}", e);
                None
            }
        }
    }

    async fn try_get_current_user(&self) -> Result<Option<CurrentUser>, Error> {
        let user = self.account.get().await?;
        if user.id.is_empty() {
            return Ok(None);
        }

        let avatar = self.avatars.get_initials(&user.name)?.to_string();
        Ok(Some(CurrentUser { user, avatar }))
    }
}
