use contracts::catalog::locations::LOCATION_NAMES;
use contracts::enums::PriceBand;
use leptos::prelude::*;

const LANGUAGES: &[(&str, &str)] = &[
    ("ja", "日本語"),
    ("en", "English"),
    ("zh", "中文"),
    ("ko", "한국어"),
    ("es", "Español"),
];

/// Location / language / price selects. The selects carry `data-action`
/// attributes; the delegated dispatcher reads their values on change.
#[component]
pub fn FilterBar() -> impl IntoView {
    view! {
        <div class="filter-bar">
            <select id="locationFilter" class="filter-select" data-action="filter-change">
                <option value="">"エリアを選択"</option>
                {LOCATION_NAMES
                    .iter()
                    .map(|(code, name)| view! { <option value=*code>{*name}</option> })
                    .collect_view()}
            </select>

            <select id="languageFilter" class="filter-select" data-action="filter-change">
                <option value="">"言語を選択"</option>
                {LANGUAGES
                    .iter()
                    .map(|(code, name)| view! { <option value=*code>{*name}</option> })
                    .collect_view()}
            </select>

            <select id="priceFilter" class="filter-select" data-action="filter-change">
                <option value="">"料金帯を選択"</option>
                {PriceBand::all()
                    .into_iter()
                    .map(|band| view! { <option value=band.code()>{band.display_name()}</option> })
                    .collect_view()}
            </select>

            <button class="btn btn-primary" data-action="search">"検索"</button>
            <button class="btn btn-outline" data-action="reset">"リセット"</button>
        </div>
    }
}
