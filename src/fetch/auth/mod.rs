//! Optional API-key authentication for remote feeds.

mod api_key;
mod url_param;

pub use api_key::ApiKey;
pub use url_param::UrlParam;

use anyhow::Result;

use super::{BasicClient, HttpClient};

/// How a remote feed expects its API key.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum FeedAuth {
    /// No authentication required.
    #[default]
    None,
    /// Key appended as a URL query parameter with the given name.
    UrlParam { param_name: String, key: String },
    /// Key sent in an HTTP header with the given name.
    Header { header_name: String, key: String },
    /// Key sent as `Authorization: Bearer <key>`.
    Bearer { key: String },
}

impl FeedAuth {
    /// Returns `true` if any credentials are attached.
    pub fn requires_auth(&self) -> bool {
        !matches!(self, FeedAuth::None)
    }

    /// Builds a client that applies this authentication to every request.
    pub fn client(&self) -> Result<Box<dyn HttpClient>> {
        let basic = BasicClient::new()?;
        Ok(match self {
            FeedAuth::None => Box::new(basic),
            FeedAuth::UrlParam { param_name, key } => {
                Box::new(UrlParam::new(basic, param_name.as_str(), key.as_str()))
            }
            FeedAuth::Header { header_name, key } => {
                Box::new(ApiKey::new(basic, header_name, key)?)
            }
            FeedAuth::Bearer { key } => Box::new(ApiKey::bearer(basic, key)?),
        })
    }
}
