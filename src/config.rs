use crate::listings::{LabelStyle, StepSchedule, DEFAULT_PAGE_SIZE, DEFAULT_WINDOW_SIZE};
use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Listing page settings
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct ListingConfig {
    /// Properties per page
    pub page_size: usize,
    /// Page numbers shown in the pager
    pub window_size: usize,
    /// Spread-to-step mapping for budget ranges
    pub step_schedule: StepSchedule,
    /// Budget label formatting
    pub label_style: LabelStyle,
}

impl Default for ListingConfig {
    fn default() -> Self {
        Self {
            page_size: DEFAULT_PAGE_SIZE,
            window_size: DEFAULT_WINDOW_SIZE,
            step_schedule: StepSchedule::default(),
            label_style: LabelStyle::default(),
        }
    }
}

impl ListingConfig {
    /// Load settings from a JSON file. Missing keys fall back to defaults.
    pub async fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let raw = tokio::fs::read_to_string(path)
            .await
            .with_context(|| format!("Failed to read config {}", path.display()))?;
        let config: Self = serde_json::from_str(&raw)
            .with_context(|| format!("Invalid config {}", path.display()))?;

        if config.page_size == 0 {
            anyhow::bail!("page_size must be at least 1");
        }
        config
            .step_schedule
            .validate()
            .with_context(|| format!("Invalid step_schedule in {}", path.display()))?;
        Ok(config)
    }
}
