//! Avatar URLs served by the BaaS

use url::Url;

use crate::client::Client;
use crate::error::Error;

/// Client for the avatars API.
///
/// Avatars are images rendered on demand by the server; this client only
/// builds their URLs.
#[derive(Clone)]
pub struct Avatars {
    client: Client,
}

impl Avatars {
    /// Create a new Avatars client
    pub fn new(client: Client) -> Self {
        Self { client }
    }

    /// URL of an image showing the initials of `name`
    pub fn get_initials(&self, name: &str) -> Result<Url, Error> {
        let mut url = self.client.url("/avatars/initials")?;
        url.query_pairs_mut()
            .append_pair("name", name)
            .append_pair("project", self.client.project_id());
        Ok(url)
    }
}
