//! Account and session management

mod session;
mod types;

use async_trait::async_trait;
use reqwest::Method;
use serde_json::json;
use url::Url;

use crate::client::Client;
use crate::error::Error;

pub use session::*;
pub use types::*;

/// Opens an interactive authorization session, typically a system browser.
///
/// Resolves once the user reaches `redirect_uri` or abandons the flow.
#[async_trait]
pub trait AuthBrowser: Send + Sync {
    async fn open_auth_session(&self, auth_url: &Url, redirect_uri: &str) -> BrowserResult;
}

/// Client for the account API
#[derive(Clone)]
pub struct Account {
    client: Client,
}

impl Account {
    /// Create a new Account client
    pub fn new(client: Client) -> Self {
        Self { client }
    }

    /// Build the URL that starts an OAuth2 token flow.
    ///
    /// The provider sends the user to `success` with `userId` and `secret`
    /// appended, or to `failure`.
    pub fn create_oauth2_token(
        &self,
        provider: OAuthProvider,
        success: &str,
        failure: &str,
        scopes: &[&str],
    ) -> Result<Url, Error> {
        let mut url = self
            .client
            .url(&format!("/account/tokens/oauth2/{}", provider.as_str()))?;

        {
            let mut query = url.query_pairs_mut();
            query.append_pair("project", self.client.project_id());
            query.append_pair("success", success);
            query.append_pair("failure", failure);
            for scope in scopes {
                query.append_pair("scopes[]", scope);
            }
        }

        Ok(url)
    }

    /// Exchange a token `userId` and `secret` for a session and store it
    pub async fn create_session(&self, user_id: &str, secret: &str) -> Result<Session, Error> {
        let session = self
            .client
            .request(Method::POST, "/account/sessions/token")
            .await?
            .json(&json!({ "userId": user_id, "secret": secret }))?
            .execute::<Session>()
            .await?;

        // Without a secret the session lives in the cookie store only.
        self.client.set_session(session.clone()).await;
        Ok(session)
    }

    /// Get the user data for the currently authenticated user
    pub async fn get(&self) -> Result<User, Error> {
        self.client
            .request(Method::GET, "/account")
            .await?
            .execute::<User>()
            .await
    }

    /// Delete a session by ID, or `"current"` for the active one
    pub async fn delete_session(&self, session_id: &str) -> Result<(), Error> {
        self.client
            .request(Method::DELETE, &format!("/account/sessions/{}", session_id))
            .await?
            .execute_no_content()
            .await?;

        if session_id == "current" {
            self.client.clear_session().await;
        }

        Ok(())
    }
}
