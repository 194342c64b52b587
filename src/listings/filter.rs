use crate::listings::budget::{find_range, BudgetRange};
use crate::models::Property;
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

/// Status value that also matches properties flagged as under development.
pub const UNDER_CONSTRUCTION: &str = "Under Construction";

/// Filters picked by the visitor. Every provided field must match.
///
/// Callers own this state. Whenever it changes, the current page must go
/// back to 1; see [`crate::listings::BrowseState`].
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct FilterSelection {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,
    #[serde(rename = "type", default, skip_serializing_if = "Option::is_none")]
    pub property_type: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub location: Option<String>,
    /// A [`BudgetRange::value`] key.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub budget: Option<String>,
}

impl FilterSelection {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn status(mut self, status: impl Into<String>) -> Self {
        self.status = Some(status.into());
        self
    }

    pub fn property_type(mut self, property_type: impl Into<String>) -> Self {
        self.property_type = Some(property_type.into());
        self
    }

    pub fn location(mut self, location: impl Into<String>) -> Self {
        self.location = Some(location.into());
        self
    }

    pub fn budget(mut self, budget: impl Into<String>) -> Self {
        self.budget = Some(budget.into());
        self
    }

    pub fn is_empty(&self) -> bool {
        [&self.status, &self.property_type, &self.location, &self.budget]
            .into_iter()
            .all(|f| provided(f).is_none())
    }

    /// Whether `property` satisfies every provided filter.
    pub fn matches(&self, property: &Property, ranges: &[BudgetRange]) -> bool {
        if let Some(status) = provided(&self.status) {
            if !status_matches(property, status) {
                return false;
            }
        }

        if let Some(wanted) = provided(&self.property_type) {
            if !contains_ci(property.property_type.as_deref(), wanted) {
                return false;
            }
        }

        if let Some(wanted) = provided(&self.location) {
            if !contains_ci(property.location.as_deref(), wanted)
                && !contains_ci(property.full_address.as_deref(), wanted)
            {
                return false;
            }
        }

        if let Some(key) = provided(&self.budget) {
            let Some(range) = find_range(ranges, key) else {
                return false;
            };
            match property.amount() {
                Some(price) if range.contains(price) => {}
                _ => return false,
            }
        }

        true
    }
}

/// Blank values count as "not selected".
fn provided(value: &Option<String>) -> Option<&str> {
    value.as_deref().filter(|v| !v.trim().is_empty())
}

fn status_matches(property: &Property, wanted: &str) -> bool {
    let exact = property
        .status
        .as_deref()
        .is_some_and(|s| s.to_lowercase() == wanted.to_lowercase());

    exact
        || (wanted.to_lowercase() == UNDER_CONSTRUCTION.to_lowercase()
            && contains_ci(property.under_development.as_deref(), "yes"))
}

fn contains_ci(haystack: Option<&str>, needle: &str) -> bool {
    haystack.is_some_and(|h| h.to_lowercase().contains(&needle.to_lowercase()))
}

/// Keeps the properties matching `selection`, preserving input order.
pub fn filter_properties<'a>(
    properties: &'a [Property],
    selection: &FilterSelection,
    ranges: &[BudgetRange],
) -> Vec<&'a Property> {
    properties
        .iter()
        .filter(|p| selection.matches(p, ranges))
        .collect()
}

/// Field a dropdown can be populated from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Facet {
    Status,
    Type,
    Location,
}

/// Distinct trimmed values of `facet`, sorted.
pub fn facet_options(properties: &[Property], facet: Facet) -> Vec<String> {
    properties
        .iter()
        .filter_map(|p| match facet {
            Facet::Status => p.status.as_deref(),
            Facet::Type => p.property_type.as_deref(),
            Facet::Location => p.location.as_deref(),
        })
        .map(str::trim)
        .filter(|v| !v.is_empty())
        .map(str::to_string)
        .collect::<BTreeSet<_>>()
        .into_iter()
        .collect()
}
