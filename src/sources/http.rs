use crate::models::Property;
use crate::sources::payload::PropertyPayload;
use crate::sources::traits::PropertySource;
use anyhow::{Context, Result};
use async_trait::async_trait;
use reqwest::Client;
use std::time::Duration;
use tracing::{debug, info, warn};

/// Fetches the property list from the site's REST endpoint.
pub struct HttpSource {
    client: Client,
    url: String,
}

impl HttpSource {
    pub fn new(url: impl Into<String>) -> Result<Self> {
        let client = Client::builder()
            .timeout(Duration::from_secs(30))
            .user_agent(concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION")))
            .build()
            .context("Failed to create HTTP client")?;

        Ok(Self::with_client(url, client))
    }

    /// Use a preconfigured client, e.g. one with custom proxy or TLS settings.
    pub fn with_client(url: impl Into<String>, client: Client) -> Self {
        Self {
            client,
            url: url.into(),
        }
    }
}

#[async_trait]
impl PropertySource for HttpSource {
    async fn fetch(&self) -> Result<Vec<Property>> {
        info!("Fetching properties from {}", self.url);

        let response = self
            .client
            .get(&self.url)
            .send()
            .await
            .context("Failed to fetch property list")?;

        if !response.status().is_success() {
            warn!("Property endpoint returned status: {}", response.status());
            anyhow::bail!("Failed to fetch property list: {}", response.status());
        }

        let body = response
            .text()
            .await
            .context("Failed to read response body")?;

        debug!("Downloaded {} bytes", body.len());

        let payload: PropertyPayload =
            serde_json::from_str(&body).context("Unexpected property list format")?;
        Ok(payload.into_properties())
    }

    fn source_name(&self) -> &'static str {
        "http"
    }
}
