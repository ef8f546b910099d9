// src/core/net.rs
use std::time::Duration;

use reqwest::blocking::Client;

use crate::config::consts::{REQUEST_TIMEOUT_SECS, USER_AGENT};

#[derive(Debug, thiserror::Error)]
pub enum NetError {
    #[error("request to {url} failed: {source}")]
    Transport {
        url: String,
        #[source]
        source: reqwest::Error,
    },

    #[error("HTTP {status} from {url}")]
    Status { url: String, status: u16 },
}

/// Anything that can hand back the HTML of a page.
pub trait PageSource {
    fn fetch(&self, url: &str) -> Result<String, NetError>;
}

/// Shared blocking client with a browser User-Agent. The profile page
/// serves a stripped shell to unknown agents.
pub fn client() -> Result<Client, reqwest::Error> {
    Client::builder()
        .user_agent(USER_AGENT)
        .timeout(Duration::from_secs(REQUEST_TIMEOUT_SECS))
        .build()
}

pub struct HttpSource {
    client: Client,
}

impl HttpSource {
    pub fn new(client: Client) -> Self {
        Self { client }
    }
}

impl PageSource for HttpSource {
    fn fetch(&self, url: &str) -> Result<String, NetError> {
        logf!("Fetching {url}...");
        let transport = |source| NetError::Transport { url: s!(url), source };

        let resp = self.client.get(url).send().map_err(transport)?;
        let status = resp.status();
        if !status.is_success() {
            return Err(NetError::Status { url: s!(url), status: status.as_u16() });
        }
        let body = resp.text().map_err(transport)?;
        logd!("Fetched {} bytes from {url}", body.len());
        Ok(body)
    }
}
