use crate::models::Property;
use crate::sources::payload::PropertyPayload;
use crate::sources::traits::PropertySource;
use anyhow::{Context, Result};
use async_trait::async_trait;
use std::path::PathBuf;
use tracing::{debug, info};

/// Reads a property list from a JSON export on disk.
pub struct FileSource {
    path: PathBuf,
}

impl FileSource {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

#[async_trait]
impl PropertySource for FileSource {
    async fn fetch(&self) -> Result<Vec<Property>> {
        info!("Reading properties from {}", self.path.display());

        let raw = tokio::fs::read_to_string(&self.path)
            .await
            .with_context(|| format!("Failed to read {}", self.path.display()))?;

        debug!("Read {} bytes", raw.len());

        let payload: PropertyPayload = serde_json::from_str(&raw)
            .with_context(|| format!("Failed to parse properties in {}", self.path.display()))?;

        Ok(payload.into_properties())
    }

    fn source_name(&self) -> &'static str {
        "file"
    }
}
