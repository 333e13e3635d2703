//! Query builder for document listings

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::databases::filter::QueryMethod;
use crate::error::Error;

/// One query clause, serialized as JSON into a `queries[]` parameter
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Query {
    pub method: QueryMethod,

    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub attribute: Option<String>,

    #[serde(skip_serializing_if = "Vec::is_empty", default)]
    pub values: Vec<QueryValue>,
}

/// Operand of a clause: a nested clause for `or`, a plain value otherwise
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum QueryValue {
    Nested(Query),
    Scalar(Value),
}

impl Query {
    fn new(method: QueryMethod, attribute: Option<&str>, values: Vec<Value>) -> Self {
        Self {
            method,
            attribute: attribute.map(str::to_string),
            values: values.into_iter().map(QueryValue::Scalar).collect(),
        }
    }

    /// Attribute equals the value
    pub fn equal<T: Into<Value>>(attribute: &str, value: T) -> Self {
        Self::new(QueryMethod::Equal, Some(attribute), vec![value.into()])
    }

    /// Attribute equals any of the values
    pub fn equal_any<T: Into<Value> + Clone>(attribute: &str, values: &[T]) -> Self {
        let values = values.iter().cloned().map(Into::into).collect();
        Self::new(QueryMethod::Equal, Some(attribute), values)
    }

    /// Full-text search on an attribute with a fulltext index
    pub fn search(attribute: &str, text: &str) -> Self {
        Self::new(QueryMethod::Search, Some(attribute), vec![Value::from(text)])
    }

    /// Order the results ascending by attribute
    pub fn order_asc(attribute: &str) -> Self {
        Self::new(QueryMethod::OrderAsc, Some(attribute), Vec::new())
    }

    /// Order the results descending by attribute
    pub fn order_desc(attribute: &str) -> Self {
        Self::new(QueryMethod::OrderDesc, Some(attribute), Vec::new())
    }

    /// Limit the number of documents returned
    pub fn limit(count: u32) -> Self {
        Self::new(QueryMethod::Limit, None, vec![Value::from(count)])
    }

    /// Match documents satisfying any of the queries
    pub fn or(queries: Vec<Query>) -> Self {
        Self {
            method: QueryMethod::Or,
            attribute: None,
            values: queries.into_iter().map(QueryValue::Nested).collect(),
        }
    }

    /// Nested queries of an `or` clause
    pub fn nested(&self) -> impl Iterator<Item = &Query> {
        self.values.iter().filter_map(|value| match value {
            QueryValue::Nested(query) => Some(query),
            QueryValue::Scalar(_) => None,
        })
    }

    /// Serialize to the wire form
    pub fn to_query_string(&self) -> Result<String, Error> {
        Ok(serde_json::to_string(self)?)
    }
}
