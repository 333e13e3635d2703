//! Data-access gateway for the restate app
//!
//! Wraps an Appwrite-style backend (account sessions, avatars and a document
//! database holding property listings and favorite games) and the public
//! CheapShark deals API.
//!
//! # Example
//!
//! ```no_run
//! use restate_gateway::prelude::*;
//!
//! # async fn run() -> Result<(), Error> {
//! let gateway = Gateway::from_env()?;
//!
//! let houses = gateway
//!     .get_properties(&PropertyFilter::new("House", "lake").with_limit(10))
//!     .await;
//! println!("{} houses by the lake", houses.len());
//!
//! if let Some(user_id) = gateway.get_user_id().await? {
//!     for favorite in gateway.fetch_favorite_games(&user_id).await {
//!         println!("{}: {}", favorite.id, favorite.data.title);
//!     }
//! }
//! # Ok(())
//! # }
//! ```

pub mod account;
pub mod avatars;
pub mod client;
pub mod config;
pub mod databases;
pub mod deals;
pub mod error;
pub mod fetch;
pub mod gateway;

pub use crate::gateway::Gateway;

/// A convenience module for common imports
pub mod prelude {
    pub use crate::account::{AuthBrowser, BrowserResult, CurrentUser, Session, User};
    pub use crate::config::{ClientOptions, GatewayConfig};
    pub use crate::databases::{Document, Query};
    pub use crate::error::Error;
    pub use crate::gateway::{FavoriteGame, Gateway, Property, PropertyFilter};
}
