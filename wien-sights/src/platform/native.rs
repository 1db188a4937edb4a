//! Platform service backed by a `reqwest` client.

use async_trait::async_trait;
use bytes::Bytes;
use log::{info, trace};

use crate::error::SightsError;
use crate::platform::PlatformService;

const USER_AGENT: &str = concat!("wien-sights/", env!("CARGO_PKG_VERSION"));

/// Loads data over HTTP with a shared `reqwest` client.
#[derive(Debug, Clone)]
pub struct NativePlatformService {
    http_client: reqwest::Client,
}

#[async_trait]
impl PlatformService for NativePlatformService {
    fn new() -> Self {
        let http_client = match reqwest::Client::builder().user_agent(USER_AGENT).build() {
            Ok(client) => client,
            Err(err) => {
                log::warn!("Failed to configure http client, using defaults: {err}");
                reqwest::Client::new()
            }
        };

        Self { http_client }
    }

    async fn load_bytes_from_url(&self, url: &str) -> Result<Bytes, SightsError> {
        trace!("GET {url}");
        let response = self.http_client.get(url).send().await?;
        let status = response.status();
        if !status.is_success() {
            info!(
                "Failed to load {url}: {}, {:?}",
                status,
                response.text().await
            );
            return Err(SightsError::Status {
                url: url.to_string(),
                status: status.as_u16(),
            });
        }

        Ok(response.bytes().await?)
    }
}
