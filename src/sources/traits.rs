use crate::models::Property;
use anyhow::Result;
use async_trait::async_trait;

/// Where a property list comes from.
/// The listing logic only ever sees the returned `Vec<Property>`.
#[async_trait]
pub trait PropertySource: Send + Sync {
    /// Fetch the full property list
    async fn fetch(&self) -> Result<Vec<Property>>;

    /// Short name used in logs
    fn source_name(&self) -> &'static str;
}
