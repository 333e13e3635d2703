//! Deals pass-through. No session is involved.

use log::error;
use serde_json::Value;

use super::Gateway;

/// Page size used by [`Gateway::get_featured_deals`] callers without a preference
pub const DEFAULT_FEATURED_DEALS: u32 = 5;

impl Gateway {
    /// Current deals, `limit` at a time. An empty array on failure.
    pub async fn get_featured_deals(&self, limit: u32) -> Value {
        match self.deals.list_deals(limit).await {
            Ok(deals) => deals,
            Err(e) => {
                error!("Error fetching deals: {}", e);
                Value::Array(Vec::new())
            }
        }
    }

    /// Games, optionally filtered by title. An empty array on failure.
    pub async fn get_games(&self, title: Option<&str>) -> Value {
        match self.deals.list_games(title).await {
            Ok(games) => games,
            Err(e) => {
                error!("Error fetching all games: {}", e);
                Value::Array(Vec::new())
            }
        }
    }

    /// Game details. `None` on failure.
    pub async fn get_game_by_id(&self, id: &str) -> Option<Value> {
        match self.deals.game(id).await {
            Ok(game) => Some(game),
            Err(e) => {
                error!("Error fetching game by ID {}: {}", id, e);
                None
            }
        }
    }

    /// A store by id.
    ///
    /// An unknown id yields `Some` of an empty array rather than `None`;
    /// `None` means the store list could not be fetched.
    pub async fn get_store_by_id(&self, store_id: &str) -> Option<Value> {
        match self.deals.find_store(store_id).await {
            Ok(Some(store)) => Some(store),
            Ok(None) => Some(Value::Array(Vec::new())),
            Err(e) => {
                error!("Error fetching store by ID {}: {}", store_id, e);
                None
            }
        }
    }
}
