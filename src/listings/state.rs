use crate::listings::filter::FilterSelection;
use serde::{Deserialize, Serialize};

/// Page and filters owned by the host UI, e.g. round-tripped through the query string.
///
/// Every change to the selection sends the visitor back to page 1.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct BrowseState {
    #[serde(default)]
    pub selection: FilterSelection,
    #[serde(default = "first_page")]
    pub page: usize,
}

fn first_page() -> usize {
    1
}

impl Default for BrowseState {
    fn default() -> Self {
        Self {
            selection: FilterSelection::default(),
            page: first_page(),
        }
    }
}

impl BrowseState {
    pub fn new(selection: FilterSelection) -> Self {
        Self {
            selection,
            page: first_page(),
        }
    }

    pub fn set_selection(&mut self, selection: FilterSelection) {
        self.selection = selection;
        self.page = first_page();
    }

    pub fn set_status(&mut self, status: Option<String>) {
        self.selection.status = status;
        self.page = first_page();
    }

    pub fn set_type(&mut self, property_type: Option<String>) {
        self.selection.property_type = property_type;
        self.page = first_page();
    }

    pub fn set_location(&mut self, location: Option<String>) {
        self.selection.location = location;
        self.page = first_page();
    }

    pub fn set_budget(&mut self, budget: Option<String>) {
        self.selection.budget = budget;
        self.page = first_page();
    }

    pub fn clear(&mut self) {
        self.set_selection(FilterSelection::default());
    }

    /// Moves to `page` without touching the filters. Page 0 is clamped to 1.
    pub fn go_to(&mut self, page: usize) {
        self.page = page.max(first_page());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn filter_changes_reset_page() {
        let mut state = BrowseState::default();
        state.go_to(4);
        assert_eq!(state.page, 4);

        state.set_type(Some("villa".to_string()));
        assert_eq!(state.page, 1);

        state.go_to(3);
        state.set_budget(Some("0_50000".to_string()));
        assert_eq!(state.page, 1);
        assert_eq!(state.selection.budget.as_deref(), Some("0_50000"));

        state.go_to(2);
        state.clear();
        assert_eq!(state, BrowseState::default());
    }

    #[test]
    fn page_defaults_when_missing_from_query() {
        let state: BrowseState =
            serde_json::from_str(r#"{ "selection": { "status": "Available" } }"#).unwrap();
        assert_eq!(state.page, 1);
        assert_eq!(state.selection.status.as_deref(), Some("Available"));

        let mut zero = state;
        zero.go_to(0);
        assert_eq!(zero.page, 1);
    }
}
