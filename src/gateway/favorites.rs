//! Favorite games of a user, kept in the `favorite-games` collection

use log::{error, info};
use serde::{Deserialize, Serialize};

use super::Gateway;
use crate::databases::{lenient, Document, Query, UNIQUE_ID};
use crate::error::Error;

/// A game a user marked as favorite
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FavoriteGame {
    /// Owning user
    #[serde(rename = "userId", default, deserialize_with = "lenient::string")]
    pub user_id: String,

    /// CheapShark game id, stored as a string or a number
    #[serde(rename = "gameID", default, deserialize_with = "lenient::string")]
    pub game_id: String,

    #[serde(default, deserialize_with = "lenient::string")]
    pub title: String,

    /// Thumbnail URI
    #[serde(default, deserialize_with = "lenient::string")]
    pub thumb: String,
}

impl Gateway {
    /// Every favorite owned by `user_id`. Empty on failure.
    ///
    /// Only the first page the server returns is read.
    pub async fn fetch_favorite_games(&self, user_id: &str) -> Vec<Document<FavoriteGame>> {
        match self.list_favorites(&[Query::equal("userId", user_id)]).await {
            Ok(documents) => documents,
            Err(e) => {
                error!("Error fetching favorite games: {}", e);
                Vec::new()
            }
        }
    }

    /// Delete a favorite by document ID.
    ///
    /// Failures, including an ID that does not exist, are logged and returned.
    pub async fn delete_game(&self, document_id: &str) -> Result<(), Error> {
        let result = self
            .databases
            .delete_document(
                &self.config.database_id,
                &self.config.favorite_games_collection_id,
                document_id,
            )
            .await;

        match result {
            Ok(()) => {
                info!("Favorite {} deleted", document_id);
                Ok(())
            }
            Err(e) => {
                error!("Error deleting favorite {}: {}", document_id, e);
                Err(e)
            }
        }
    }

    /// Mark a game as favorite for `user_id`.
    ///
    /// A user holds at most one entry per game: if one exists it is returned
    /// unchanged. Failures are logged and returned.
    pub async fn add_favorite_game(
        &self,
        user_id: &str,
        game_id: &str,
        title: &str,
        thumb: &str,
    ) -> Result<Document<FavoriteGame>, Error> {
        let result = self.try_add_favorite_game(user_id, game_id, title, thumb).await;
        if let Err(e) = &result {
            error!("Error adding favorite game {}: {}", game_id, e);
        }
        result
    }

    async fn try_add_favorite_game(
        &self,
        user_id: &str,
        game_id: &str,
        title: &str,
        thumb: &str,
    ) -> Result<Document<FavoriteGame>, Error> {
        let existing = self
            .list_favorites(&[
                Query::equal("userId", user_id),
                Query::equal("gameID", game_id),
                Query::limit(1),
            ])
            .await?;

        if let Some(entry) = existing.into_iter().next() {
            info!("Game {} is already a favorite of {}", game_id, user_id);
            return Ok(entry);
        }

        let favorite = FavoriteGame {
            user_id: user_id.to_string(),
            game_id: game_id.to_string(),
            title: title.to_string(),
            thumb: thumb.to_string(),
        };

        self.databases
            .create_document(
                &self.config.database_id,
                &self.config.favorite_games_collection_id,
                UNIQUE_ID,
                &favorite,
            )
            .await
    }

    async fn list_favorites(&self, queries: &[Query]) -> Result<Vec<Document<FavoriteGame>>, Error> {
        let list = self
            .databases
            .list_documents::<FavoriteGame>(
                &self.config.database_id,
                &self.config.favorite_games_collection_id,
                queries,
            )
            .await?;
        Ok(list.documents)
    }
}
