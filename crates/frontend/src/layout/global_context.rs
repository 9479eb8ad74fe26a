use contracts::catalog::{default_guides, CatalogInit, CatalogState, Guide, GuideFilter};
use leptos::prelude::*;

/// Catalog context constructed once by the composition root and passed via
/// Leptos context — the explicit replacement for window-scoped state.
#[derive(Clone, Copy)]
pub struct CatalogContext {
    pub state: RwSignal<CatalogState>,
    /// Ephemeral filtered view; `None` renders the paged unfiltered list.
    pub filtered: RwSignal<Option<Vec<Guide>>>,
    /// When true, filtering round-trips through `set_guides` instead of
    /// staying ephemeral (see the filter-persistence decision in DESIGN.md).
    pub persist_filtered: bool,
}

impl CatalogContext {
    pub fn new() -> Self {
        let mut state = CatalogState::new();
        state.initialize(CatalogInit {
            guides: Some(default_guides()),
            ..Default::default()
        });
        state.setup_location_names();

        log::info!(
            "Catalog initialized: {} guides, {} pages",
            state.guides.len(),
            state.total_pages()
        );

        Self {
            state: RwSignal::new(state),
            filtered: RwSignal::new(None),
            persist_filtered: false,
        }
    }

    /// Records to render right now: the whole filtered list when a filter
    /// view is active, otherwise the current page of the master list.
    pub fn visible_guides(&self) -> Vec<Guide> {
        if let Some(filtered) = self.filtered.get() {
            return filtered;
        }
        self.state
            .with(|s| s.page_slice(s.current_page).to_vec())
    }

    /// (shown, total) for the counter captions.
    pub fn counters(&self) -> (usize, usize) {
        let total = self.state.with(|s| s.guides.len());
        match self.filtered.get() {
            Some(filtered) => (filtered.len(), total),
            None => (self.visible_guides().len(), total),
        }
    }

    /// Apply the filter selects to the full unfiltered list.
    pub fn apply_filters(&self, location: &str, language: &str, price: &str) {
        let filter = GuideFilter::new(location, language, price);
        let result = self.state.with(|s| filter.apply(&s.guides));
        log::info!(
            "Filtered: {}/{} guides",
            result.len(),
            self.state.with(|s| s.guides.len())
        );

        if self.persist_filtered {
            self.state.update(|s| {
                s.filters = filter;
                s.set_guides(result);
            });
            self.filtered.set(None);
        } else {
            // the filtered view is not written back; any paging operation
            // reverts to the unfiltered list
            self.state.update(|s| s.filters = filter);
            self.filtered.set(Some(result));
        }
    }

    pub fn reset_filters(&self) {
        self.state.update(|s| s.filters = GuideFilter::default());
        self.filtered.set(None);
    }

    pub fn current_page(&self) -> usize {
        self.state.with(|s| s.current_page)
    }

    pub fn total_pages(&self) -> usize {
        self.state.with(|s| s.total_pages())
    }

    pub fn goto_page(&self, page: usize) {
        self.filtered.set(None);
        self.state.update(|s| {
            s.current_page = page;
            s.clamp_current_page();
        });
    }

    pub fn next_page(&self) {
        let page = self.current_page();
        if page < self.total_pages() {
            self.goto_page(page + 1);
        }
    }

    pub fn prev_page(&self) {
        let page = self.current_page();
        if page > 1 {
            self.goto_page(page - 1);
        }
    }

    pub fn guide_by_id(&self, id: u32) -> Option<Guide> {
        self.state
            .with(|s| s.guides.iter().find(|g| g.id == id).cloned())
    }

    pub fn location_label(&self, code: &str) -> String {
        self.state.with(|s| {
            s.location_names
                .get(code)
                .cloned()
                .unwrap_or_else(|| code.to_string())
        })
    }
}
