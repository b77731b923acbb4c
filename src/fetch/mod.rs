//! Loading raw feed bytes from a local file or a URL.

mod basic;
mod client;
pub mod auth;

pub use auth::FeedAuth;
pub use basic::BasicClient;
pub use client::HttpClient;

use anyhow::{Context, Result};
use std::path::PathBuf;
use tracing::debug;

/// Where feed bytes come from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FeedSource {
    Path(PathBuf),
    Url(String),
}

impl FeedSource {
    /// Anything starting with `http://` or `https://` is a URL; everything
    /// else is a file path.
    pub fn parse(source: &str) -> Self {
        if source.starts_with("http://") || source.starts_with("https://") {
            FeedSource::Url(source.to_string())
        } else {
            FeedSource::Path(PathBuf::from(source))
        }
    }

    /// Reads the whole feed into memory. `auth` only applies to URLs.
    #[tracing::instrument(skip(auth))]
    pub async fn load(&self, auth: &FeedAuth) -> Result<Vec<u8>> {
        let bytes = match self {
            FeedSource::Path(path) => tokio::fs::read(path)
                .await
                .with_context(|| format!("failed to read {}", path.display()))?,
            FeedSource::Url(url) => {
                let client = auth.client()?;
                fetch_bytes(client.as_ref(), url).await?
            }
        };
        debug!(bytes = bytes.len(), "Feed bytes loaded");
        Ok(bytes)
    }
}

/// GETs `url` and returns the response body. Non-2xx statuses are errors.
pub async fn fetch_bytes<C: HttpClient + ?Sized>(client: &C, url: &str) -> Result<Vec<u8>> {
    let req = reqwest::Request::new(
        reqwest::Method::GET,
        url.parse().with_context(|| format!("invalid feed URL '{url}'"))?,
    );

    let resp = client.execute(req).await?.error_for_status()?;
    Ok(resp.bytes().await?.to_vec())
}
