use leptos::prelude::*;

use crate::layout::CatalogContext;

/// Prev/next controls: prev disabled on page 1, next on the last page.
#[component]
pub fn Pagination() -> impl IntoView {
    let catalog = use_context::<CatalogContext>().expect("CatalogContext not provided");

    let page_caption = move || format!("ページ {}", catalog.current_page());
    let range_caption = move || {
        let state = catalog.state.get();
        let (start, end) = state.display_range(state.current_page);
        format!("{}-{}", start, end)
    };

    view! {
        <div class="pagination">
            <button
                id="prevPageBtn"
                class="btn btn-outline"
                data-action="prev-page"
                prop:disabled=move || catalog.state.with(|s| s.is_first_page(s.current_page))
            >
                "前へ"
            </button>
            <span id="pageInfo" class="pagination-info">{page_caption}</span>
            <span id="displayRange" class="pagination-range">{range_caption}</span>
            <button
                id="nextPageBtn"
                class="btn btn-outline"
                data-action="next-page"
                prop:disabled=move || catalog.state.with(|s| s.is_last_page(s.current_page))
            >
                "次へ"
            </button>
        </div>
    }
}
