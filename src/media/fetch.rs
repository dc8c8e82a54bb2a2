// SPDX-License-Identifier: MPL-2.0
//! Network access for remote images.

use crate::config::Config;
use crate::error::{Error, Result};
use futures_util::future::BoxFuture;
use url::Url;

/// Retrieves the raw bytes behind an image URL.
///
/// One call is one attempt: implementations must not retry. Failures are
/// reported as [`Error::Transport`] carrying the client's message.
pub trait ImageFetcher: Send + Sync {
    fn fetch(&self, url: &Url) -> BoxFuture<'static, Result<Vec<u8>>>;
}

/// [`ImageFetcher`] backed by a shared `reqwest` client.
#[derive(Debug, Clone)]
pub struct HttpFetcher {
    client: reqwest::Client,
}

impl HttpFetcher {
    /// Builds a client with the timeout, redirect policy and user agent from
    /// `config`.
    pub fn new(config: &Config) -> Result<Self> {
        let client = reqwest::Client::builder()
            .redirect(reqwest::redirect::Policy::limited(config.max_redirects))
            .user_agent(config.user_agent.as_str())
            .timeout(config.request_timeout())
            .build()?;

        Ok(Self::with_client(client))
    }

    /// Wraps an already configured client.
    #[must_use]
    pub fn with_client(client: reqwest::Client) -> Self {
        Self { client }
    }
}

impl ImageFetcher for HttpFetcher {
    fn fetch(&self, url: &Url) -> BoxFuture<'static, Result<Vec<u8>>> {
        Box::pin(get_bytes(self.client.get(url.clone())))
    }
}

async fn get_bytes(request: reqwest::RequestBuilder) -> Result<Vec<u8>> {
    let response = request.send().await?;

    if !response.status().is_success() {
        return Err(Error::Transport(format!(
            "HTTP status: {}",
            response.status()
        )));
    }

    Ok(response.bytes().await?.to_vec())
}
