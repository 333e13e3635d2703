//! Types for the document database

use chrono::{DateTime, Utc};
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

use crate::deals::coerce_to_string;

/// Document id that asks the server to generate a unique one
pub const UNIQUE_ID: &str = "unique()";

/// A stored document with its system attributes
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Document<T> {
    #[serde(rename = "$id")]
    pub id: String,

    #[serde(rename = "$collectionId", default)]
    pub collection_id: String,

    #[serde(rename = "$databaseId", default)]
    pub database_id: String,

    #[serde(rename = "$createdAt", default)]
    pub created_at: Option<DateTime<Utc>>,

    #[serde(rename = "$updatedAt", default)]
    pub updated_at: Option<DateTime<Utc>>,

    #[serde(rename = "$permissions", default)]
    pub permissions: Vec<String>,

    /// The user-defined attributes
    #[serde(flatten)]
    pub data: T,
}

/// A page of documents
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DocumentList<T> {
    /// Total number of matching documents, which may exceed `documents.len()`
    pub total: u64,

    pub documents: Vec<Document<T>>,
}

/// Attribute decoders that never fail on a mistyped or missing value, so one
/// odd document cannot empty a whole page.
pub mod lenient {
    use super::*;

    /// A scalar rendered as a string; anything else becomes `""`
    pub fn string<'de, D: Deserializer<'de>>(deserializer: D) -> Result<String, D::Error> {
        let value = Value::deserialize(deserializer)?;
        Ok(coerce_to_string(&value).unwrap_or_default())
    }

    /// A scalar rendered as a string, `None` for `null` or containers
    pub fn optional_string<'de, D: Deserializer<'de>>(
        deserializer: D,
    ) -> Result<Option<String>, D::Error> {
        let value = Value::deserialize(deserializer)?;
        Ok(coerce_to_string(&value))
    }

    /// A number, or a string holding one; `None` otherwise
    pub fn number<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Option<f64>, D::Error> {
        Ok(match Value::deserialize(deserializer)? {
            Value::Number(n) => n.as_f64(),
            Value::String(s) => s.trim().parse().ok(),
            _ => None,
        })
    }
}
