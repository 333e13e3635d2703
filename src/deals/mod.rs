//! Pass-through client for the CheapShark deals API
//!
//! Records are returned as the API sends them; no local shape is imposed.

use reqwest::Client;
use serde_json::Value;
use url::Url;

use crate::error::Error;
use crate::fetch::Fetch;

/// Client for the public, unauthenticated deals API
#[derive(Clone)]
pub struct DealsClient {
    base_url: String,
    http_client: Client,
}

impl DealsClient {
    /// Create a new DealsClient
    pub fn new(base_url: &Url, http_client: Client) -> Self {
        Self {
            base_url: base_url.as_str().trim_end_matches('/').to_string(),
            http_client,
        }
    }

    fn get_url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    /// Current deals, `page_size` at a time
    pub async fn list_deals(&self, page_size: u32) -> Result<Value, Error> {
        Fetch::get(&self.http_client, &self.get_url("/deals"))
            .query_param("pageSize", &page_size.to_string())
            .execute::<Value>()
            .await
    }

    /// Games, optionally filtered by title
    pub async fn list_games(&self, title: Option<&str>) -> Result<Value, Error> {
        let mut fetch = Fetch::get(&self.http_client, &self.get_url("/games"));
        if let Some(title) = title {
            fetch = fetch.query_param("title", title);
        }
        fetch.execute::<Value>().await
    }

    /// Game details by CheapShark game id
    pub async fn game(&self, id: &str) -> Result<Value, Error> {
        Fetch::get(&self.http_client, &self.get_url("/games"))
            .query_param("id", id)
            .execute::<Value>()
            .await
    }

    /// Every store known to the API
    pub async fn list_stores(&self) -> Result<Value, Error> {
        Fetch::get(&self.http_client, &self.get_url("/stores"))
            .execute::<Value>()
            .await
    }

    /// Find a store by id, comparing `storeID` as a string
    pub async fn find_store(&self, store_id: &str) -> Result<Option<Value>, Error> {
        let stores = self.list_stores().await?;
        let stores = stores
            .as_array()
            .ok_or_else(|| Error::general("store list is not an array"))?;

        Ok(stores
            .iter()
            .find(|store| {
                store
                    .get("storeID")
                    .and_then(coerce_to_string)
                    .map_or(false, |id| id == store_id)
            })
            .cloned())
    }
}

/// String form of a scalar the way JavaScript's `String()` renders it
pub(crate) fn coerce_to_string(value: &Value) -> Option<String> {
    match value {
        Value::String(s) => Some(s.clone()),
        Value::Bool(b) => Some(b.to_string()),
        Value::Number(n) => {
            if let Some(i) = n.as_i64() {
                Some(i.to_string())
            } else if let Some(u) = n.as_u64() {
                Some(u.to_string())
            } else {
                let f = n.as_f64()?;
                if f.fract() == 0.0 && f.abs() < 1e21 {
                    Some(format!("{:.0}", f))
                } else {
                    Some(f.to_string())
                }
            }
        }
        _ => None,
    }
}
