use super::filter::GuideFilter;
use super::guide::Guide;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Fixed page size across all environments.
pub const PAGE_SIZE: usize = 12;

/// Partial initialization data; absent fields keep their current value.
#[derive(Debug, Clone, Default)]
pub struct CatalogInit {
    pub guides: Option<Vec<Guide>>,
    pub page_size: Option<usize>,
    pub current_page: Option<usize>,
    pub filters: Option<GuideFilter>,
}

/// Catalog paging state.
///
/// Invariant: `1 <= current_page <= total_pages()`. Derived values are
/// computed on read, never cached.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CatalogState {
    pub guides: Vec<Guide>,
    pub page_size: usize,
    pub current_page: usize,
    pub filters: GuideFilter,
    pub location_names: HashMap<String, String>,
}

impl CatalogState {
    pub fn new() -> Self {
        Self {
            guides: Vec::new(),
            page_size: PAGE_SIZE,
            current_page: 1,
            filters: GuideFilter::default(),
            location_names: HashMap::new(),
        }
    }

    /// Merge the given fields into the state. Never fails; out-of-range pages
    /// are clamped on read.
    pub fn initialize(&mut self, init: CatalogInit) -> &mut Self {
        if let Some(guides) = init.guides {
            self.guides = guides;
        }
        if let Some(page_size) = init.page_size {
            self.page_size = page_size.max(1);
        }
        if let Some(current_page) = init.current_page {
            self.current_page = current_page.max(1);
        }
        if let Some(filters) = init.filters {
            self.filters = filters;
        }
        self
    }

    /// Load the location name table.
    pub fn setup_location_names(&mut self) -> &mut Self {
        self.location_names = super::locations::LOCATION_NAMES
            .iter()
            .map(|(code, name)| (code.to_string(), name.to_string()))
            .collect();
        self
    }

    /// Replace the guide list and reset paging.
    pub fn set_guides(&mut self, guides: Vec<Guide>) -> &mut Self {
        self.guides = guides;
        self.current_page = 1;
        self
    }

    /// Replace the guide list from an untyped JSON value (persisted data may
    /// be malformed); anything that is not a guide array is coerced to empty.
    pub fn set_guides_from_value(&mut self, value: &serde_json::Value) -> &mut Self {
        let guides: Vec<Guide> =
            serde_json::from_value(value.clone()).unwrap_or_default();
        self.set_guides(guides)
    }

    pub fn total_pages(&self) -> usize {
        (self.guides.len().div_ceil(self.page_size)).max(1)
    }

    /// Clamp `current_page` into `1..=total_pages()`.
    pub fn clamp_current_page(&mut self) -> usize {
        self.current_page = self.current_page.clamp(1, self.total_pages());
        self.current_page
    }

    /// Records for one page: `[(page-1)*page_size, page*page_size)`. The
    /// caller is responsible for passing a valid page; an out-of-range page
    /// yields an empty slice.
    pub fn page_slice(&self, page: usize) -> &[Guide] {
        let start = (page.saturating_sub(1)) * self.page_size;
        let end = (start + self.page_size).min(self.guides.len());
        if start >= self.guides.len() {
            &[]
        } else {
            &self.guides[start..end]
        }
    }

    /// 1-based display range for "start-end" captions.
    pub fn display_range(&self, page: usize) -> (usize, usize) {
        let start = (page.saturating_sub(1)) * self.page_size + 1;
        let end = (page * self.page_size).min(self.guides.len());
        (start, end)
    }

    pub fn is_first_page(&self, page: usize) -> bool {
        page == 1
    }

    pub fn is_last_page(&self, page: usize) -> bool {
        page == self.total_pages()
    }
}

impl Default for CatalogState {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::guide::default_guides;

    fn guides(n: usize) -> Vec<Guide> {
        (0..n)
            .map(|i| Guide {
                id: i as u32 + 1,
                name: format!("guide-{}", i + 1),
                location: "tokyo".into(),
                rating: Some(4.5),
                price: 8000,
                image: None,
                description: None,
                languages: vec!["ja".into()],
                specialties: vec![],
            })
            .collect()
    }

    #[test]
    fn total_pages_rounds_up_with_floor_of_one() {
        let mut state = CatalogState::new();
        state.set_guides(guides(12));
        assert_eq!(state.total_pages(), 1);
        state.set_guides(guides(13));
        assert_eq!(state.total_pages(), 2);
        state.set_guides(guides(0));
        assert_eq!(state.total_pages(), 1);
    }

    #[test]
    fn page_slice_is_full_except_last() {
        let mut state = CatalogState::new();
        state.set_guides(guides(30));
        assert_eq!(state.total_pages(), 3);
        assert_eq!(state.page_slice(1).len(), 12);
        assert_eq!(state.page_slice(2).len(), 12);
        assert_eq!(state.page_slice(3).len(), 6);
    }

    #[test]
    fn empty_list_renders_an_empty_first_page() {
        let mut state = CatalogState::new();
        state.set_guides(Vec::new());
        assert_eq!(state.total_pages(), 1);
        assert!(state.page_slice(1).is_empty());
        assert!(state.is_first_page(1));
        assert!(state.is_last_page(1));
    }

    #[test]
    fn set_guides_resets_current_page() {
        let mut state = CatalogState::new();
        state.set_guides(guides(30));
        state.current_page = 3;
        state.set_guides(guides(5));
        assert_eq!(state.current_page, 1);
    }

    #[test]
    fn non_array_json_coerces_to_empty() {
        let mut state = CatalogState::new();
        state.set_guides(default_guides());
        state.set_guides_from_value(&serde_json::json!({"oops": true}));
        assert!(state.guides.is_empty());
        assert_eq!(state.total_pages(), 1);
    }

    #[test]
    fn initialize_merges_partial_data() {
        let mut state = CatalogState::new();
        state.initialize(CatalogInit {
            guides: Some(default_guides()),
            ..Default::default()
        });
        assert_eq!(state.guides.len(), 12);
        assert_eq!(state.page_size, PAGE_SIZE);
        assert_eq!(state.current_page, 1);
    }

    #[test]
    fn clamp_pulls_page_back_into_range() {
        let mut state = CatalogState::new();
        state.set_guides(guides(13));
        state.current_page = 9;
        assert_eq!(state.clamp_current_page(), 2);
    }

    #[test]
    fn prev_next_disabled_states() {
        let mut state = CatalogState::new();
        state.set_guides(guides(25)); // 3 pages
        assert!(state.is_first_page(1));
        assert!(!state.is_last_page(1));
        assert!(!state.is_first_page(2));
        assert!(!state.is_last_page(2));
        assert!(state.is_last_page(3));
    }
}
