use crate::config::ListingConfig;
use crate::listings::budget::{compute_budget_ranges, BudgetRange};
use crate::listings::filter::{facet_options, filter_properties, Facet, FilterSelection};
use crate::listings::pagination::{page_window, paginate, total_pages};
use crate::models::Property;
use chrono::{DateTime, Utc};
use serde::Serialize;
use tracing::{debug, info};

/// One rendered page of filtered listings.
#[derive(Debug, Clone, Serialize)]
pub struct ListingPage<'a> {
    pub items: Vec<&'a Property>,
    pub page: usize,
    pub page_size: usize,
    pub total_items: usize,
    pub total_pages: usize,
    /// Page numbers for the pager.
    pub window: Vec<usize>,
}

impl ListingPage<'_> {
    /// Number of matches before this page.
    pub fn offset(&self) -> usize {
        self.page.saturating_sub(1).saturating_mul(self.page_size)
    }
}

/// Loaded property list together with the budget ranges derived from it.
#[derive(Debug, Clone)]
pub struct Catalog {
    properties: Vec<Property>,
    ranges: Vec<BudgetRange>,
    config: ListingConfig,
    loaded_at: DateTime<Utc>,
}

impl Catalog {
    pub fn new(properties: Vec<Property>, config: ListingConfig) -> Self {
        let ranges = compute_budget_ranges(&properties, &config.step_schedule, &config.label_style);
        info!(
            "Loaded {} properties, {} budget ranges",
            properties.len(),
            ranges.len()
        );
        Self {
            properties,
            ranges,
            config,
            loaded_at: Utc::now(),
        }
    }

    /// Swaps in a fresh data load. Budget ranges are recomputed.
    pub fn reload(&mut self, properties: Vec<Property>) {
        *self = Self::new(properties, self.config.clone());
    }

    pub fn properties(&self) -> &[Property] {
        &self.properties
    }

    pub fn ranges(&self) -> &[BudgetRange] {
        &self.ranges
    }

    pub fn config(&self) -> &ListingConfig {
        &self.config
    }

    pub fn loaded_at(&self) -> DateTime<Utc> {
        self.loaded_at
    }

    pub fn options(&self, facet: Facet) -> Vec<String> {
        facet_options(&self.properties, facet)
    }

    pub fn filter(&self, selection: &FilterSelection) -> Vec<&Property> {
        filter_properties(&self.properties, selection, &self.ranges)
    }

    /// Filters then cuts out the 1-based `page`.
    pub fn browse(&self, selection: &FilterSelection, page: usize) -> ListingPage<'_> {
        let filtered = self.filter(selection);
        let page_size = self.config.page_size;
        let total_pages = total_pages(filtered.len(), page_size);

        debug!(
            matched = filtered.len(),
            page,
            total_pages,
            "browsing catalog"
        );

        ListingPage {
            items: paginate(&filtered, page, page_size).to_vec(),
            page,
            page_size,
            total_items: filtered.len(),
            total_pages,
            window: page_window(page, total_pages, self.config.window_size),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::PriceValue;

    fn catalog(count: usize) -> Catalog {
        let properties = (0..count)
            .map(|i| Property {
                title: Some(format!("Listing {}", i)),
                status: Some(if i % 2 == 0 { "Available" } else { "Sold" }.to_string()),
                price: Some(PriceValue::Number(10_000.0 + i as f64 * 1_000.0)),
                ..Property::default()
            })
            .collect();
        Catalog::new(properties, ListingConfig::default())
    }

    #[test]
    fn browse_pages_through_filtered_items() {
        let catalog = catalog(40);
        let selection = FilterSelection::new().status("Available");

        let first = catalog.browse(&selection, 1);
        assert_eq!(first.total_items, 20);
        assert_eq!(first.total_pages, 3);
        assert_eq!(first.items.len(), 9);
        assert_eq!(first.window, vec![1, 2, 3]);

        let last = catalog.browse(&selection, 3);
        assert_eq!(last.items.len(), 2);
        assert_eq!(last.items[0].title.as_deref(), Some("Listing 36"));

        assert!(catalog.browse(&selection, 4).items.is_empty());
    }

    #[test]
    fn far_page_is_empty_without_overflow() {
        let catalog = catalog(10);
        let page = catalog.browse(&FilterSelection::new(), usize::MAX);
        assert!(page.items.is_empty());
        assert_eq!(page.offset(), usize::MAX);
        assert_eq!(page.window, vec![1, 2]);

        assert_eq!(catalog.browse(&FilterSelection::new(), 2).offset(), 9);
    }

    #[test]
    fn reload_recomputes_ranges() {
        let mut catalog = catalog(3);
        assert_eq!(catalog.ranges()[0].value, "10000_20000");

        catalog.reload(vec![Property {
            price: Some(PriceValue::from("₮320,000")),
            ..Property::default()
        }]);
        assert_eq!(catalog.properties().len(), 1);
        assert_eq!(catalog.ranges()[0].value, "320000_330000");

        catalog.reload(Vec::new());
        assert!(catalog.ranges().is_empty());
    }
}
