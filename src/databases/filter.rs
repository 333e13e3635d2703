//! Query methods understood by the document database

use serde::{Deserialize, Serialize};

/// Method of a single query clause
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum QueryMethod {
    /// Equal to any of the values
    Equal,

    /// Full-text search on an indexed attribute
    Search,

    /// Sort ascending
    OrderAsc,

    /// Sort descending
    OrderDesc,

    /// Cap the number of results
    Limit,

    /// Any nested query matches
    Or,
}

impl QueryMethod {
    /// Convert the method to its string representation
    pub fn as_str(&self) -> &'static str {
        match self {
            QueryMethod::Equal => "equal",
            QueryMethod::Search => "search",
            QueryMethod::OrderAsc => "orderAsc",
            QueryMethod::OrderDesc => "orderDesc",
            QueryMethod::Limit => "limit",
            QueryMethod::Or => "or",
        }
    }
}
