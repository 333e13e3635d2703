//! Listing queries against the `properties` collection

use log::error;
use serde::{Deserialize, Serialize};

use super::Gateway;
use crate::databases::{lenient, Document, Query};

/// Category value meaning "no category filter"
pub const ALL_CATEGORIES: &str = "All";

const CREATED_AT: &str = "$createdAt";
const LATEST_LIMIT: u32 = 5;

/// A property listing. Missing or mistyped attributes decode to empty values.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Property {
    #[serde(default, deserialize_with = "lenient::string")]
    pub name: String,

    #[serde(default, deserialize_with = "lenient::string")]
    pub address: String,

    #[serde(rename = "type", default, deserialize_with = "lenient::string")]
    pub kind: String,

    /// Thumbnail URI
    #[serde(default, deserialize_with = "lenient::optional_string")]
    pub image: Option<String>,

    #[serde(default, deserialize_with = "lenient::number")]
    pub price: Option<f64>,

    #[serde(default, deserialize_with = "lenient::number")]
    pub rating: Option<f64>,
}

/// Criteria for [`Gateway::get_properties`]
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PropertyFilter {
    /// Category to match exactly; empty or `"All"` matches every category
    pub filter: String,

    /// Text searched in name, address and type; empty disables search
    pub query: String,

    /// Maximum number of listings
    pub limit: Option<u32>,
}

impl PropertyFilter {
    pub fn new(filter: &str, query: &str) -> Self {
        Self {
            filter: filter.to_string(),
            query: query.to_string(),
            limit: None,
        }
    }

    pub fn with_limit(mut self, limit: u32) -> Self {
        self.limit = Some(limit);
        self
    }
}

/// Queries for a property listing, newest first
pub fn property_queries(filter: &PropertyFilter) -> Vec<Query> {
    let mut queries = vec![Query::order_desc(CREATED_AT)];

    if !filter.filter.is_empty() && filter.filter != ALL_CATEGORIES {
        queries.push(Query::equal("type", filter.filter.as_str()));
    }

    if !filter.query.is_empty() {
        queries.push(Query::or(vec![
            Query::search("name", &filter.query),
            Query::search("address", &filter.query),
            Query::search("type", &filter.query),
        ]));
    }

    // Zero means no cap.
    if let Some(limit) = filter.limit.filter(|&n| n > 0) {
        queries.push(Query::limit(limit));
    }

    queries
}

impl Gateway {
    /// The five oldest listings. Empty on failure.
    pub async fn get_latest_properties(&self) -> Vec<Document<Property>> {
        let queries = [Query::order_asc(CREATED_AT), Query::limit(LATEST_LIMIT)];
        self.list_properties(&queries).await
    }

    /// Listings matching the filter, newest first. Empty on failure.
    pub async fn get_properties(&self, filter: &PropertyFilter) -> Vec<Document<Property>> {
        self.list_properties(&property_queries(filter)).await
    }

    /// A listing by ID. `None` when it does not exist or on failure.
    pub async fn get_property_by_id(&self, id: &str) -> Option<Document<Property>> {
        let result = self
            .databases
            .get_document::<Property>(
                &self.config.database_id,
                &self.config.properties_collection_id,
                id,
            )
            .await;

        match result {
            Ok(property) => Some(property),
            Err(e) => {
                error!("Failed to get property {}: {}", id, e);
                None
            }
        }
    }

    async fn list_properties(&self, queries: &[Query]) -> Vec<Document<Property>> {
        let result = self
            .databases
            .list_documents::<Property>(
                &self.config.database_id,
                &self.config.properties_collection_id,
                queries,
            )
            .await;

        match result {
            Ok(list) => list.documents,
            Err(e) => {
                error!("Failed to list properties: {}", e);
                Vec::new()
            }
        }
    }
}
