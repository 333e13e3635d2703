//! Document database operations

mod filter;
mod query;
mod types;

use reqwest::Method;
use serde::{de::DeserializeOwned, Serialize};
use serde_json::json;

use crate::client::Client;
use crate::error::Error;

pub use filter::*;
pub use query::*;
pub use types::*;

/// Client for the document database API
#[derive(Clone)]
pub struct Databases {
    client: Client,
}

impl Databases {
    /// Create a new Databases client
    pub fn new(client: Client) -> Self {
        Self { client }
    }

    fn documents_path(database_id: &str, collection_id: &str) -> String {
        format!(
            "/databases/{}/collections/{}/documents",
            database_id, collection_id
        )
    }

    /// List the documents of a collection matching every query
    pub async fn list_documents<T: DeserializeOwned>(
        &self,
        database_id: &str,
        collection_id: &str,
        queries: &[Query],
    ) -> Result<DocumentList<T>, Error> {
        let mut fetch = self
            .client
            .request(Method::GET, &Self::documents_path(database_id, collection_id))
            .await?;

        for query in queries {
            fetch = fetch.query_param("queries[]", &query.to_query_string()?);
        }

        fetch.execute::<DocumentList<T>>().await
    }

    /// Get a single document by ID
    pub async fn get_document<T: DeserializeOwned>(
        &self,
        database_id: &str,
        collection_id: &str,
        document_id: &str,
    ) -> Result<Document<T>, Error> {
        let path = format!(
            "{}/{}",
            Self::documents_path(database_id, collection_id),
            document_id
        );

        self.client
            .request(Method::GET, &path)
            .await?
            .execute::<Document<T>>()
            .await
    }

    /// Create a document. Pass [`UNIQUE_ID`] to let the server pick the ID.
    pub async fn create_document<T: Serialize + DeserializeOwned>(
        &self,
        database_id: &str,
        collection_id: &str,
        document_id: &str,
        data: &T,
    ) -> Result<Document<T>, Error> {
        self.client
            .request(Method::POST, &Self::documents_path(database_id, collection_id))
            .await?
            .json(&json!({ "documentId": document_id, "data": data }))?
            .execute::<Document<T>>()
            .await
    }

    /// Delete a document by ID. Deleting a missing document is an error.
    pub async fn delete_document(
        &self,
        database_id: &str,
        collection_id: &str,
        document_id: &str,
    ) -> Result<(), Error> {
        if document_id.is_empty() {
            return Err(Error::database("document id must not be empty"));
        }

        let path = format!(
            "{}/{}",
            Self::documents_path(database_id, collection_id),
            document_id
        );

        self.client
            .request(Method::DELETE, &path)
            .await?
            .execute_no_content()
            .await
    }
}
