use leptos::prelude::*;

use super::filter_bar::FilterBar;
use super::guide_card::GuideCard;
use super::pagination::Pagination;
use crate::layout::CatalogContext;

/// The public catalog: counters, filter bar, card grid and pagination.
#[component]
pub fn CatalogPage() -> impl IntoView {
    let catalog = use_context::<CatalogContext>().expect("CatalogContext not provided");

    let counter_caption = move || {
        let (shown, total) = catalog.counters();
        format!("{}人のガイドが見つかりました（全{}人中）", shown, total)
    };
    let total_caption = move || {
        let (_, total) = catalog.counters();
        format!("総数: {}人", total)
    };

    view! {
        <section class="catalog">
            <div class="catalog-counters">
                <span id="guideCounter">{counter_caption}</span>
                <span id="totalGuideCounter">{total_caption}</span>
            </div>

            <FilterBar />

            <div id="guideCardsContainer" class="guide-cards-grid">
                {move || {
                    catalog
                        .visible_guides()
                        .into_iter()
                        .map(|guide| view! { <GuideCard guide=guide /> })
                        .collect_view()
                }}
            </div>

            <Pagination />
        </section>
    }
}
