use contracts::catalog::Guide;
use leptos::prelude::*;

use crate::layout::CatalogContext;
use crate::shared::format::{format_price, format_rating};

const DEFAULT_GUIDE_IMAGE: &str = "/assets/img/guides/default-1.svg";
const DEFAULT_DESCRIPTION: &str = "地域の魅力をご案内します";

/// One catalog card. Missing photo, rating and description fall back to the
/// defaults.
#[component]
pub fn GuideCard(guide: Guide) -> impl IntoView {
    let catalog = use_context::<CatalogContext>().expect("CatalogContext not provided");

    let image = guide
        .image
        .clone()
        .unwrap_or_else(|| DEFAULT_GUIDE_IMAGE.to_string());
    let description = guide
        .description
        .clone()
        .unwrap_or_else(|| DEFAULT_DESCRIPTION.to_string());
    let location_label = catalog.location_label(&guide.location);
    let languages = guide.languages.join(", ");
    let specialties = guide.specialties.join(", ");

    view! {
        <div class="guide-card" data-guide-id=guide.id.to_string()>
            <img class="guide-card-image" src=image alt=guide.name.clone() />
            <div class="guide-card-body">
                <h5 class="guide-card-title">{guide.name.clone()}</h5>
                <p class="guide-card-location">{location_label}</p>
                <p class="guide-card-description">{description}</p>
                <div class="guide-card-badges">
                    <span class="badge badge-price">{format_price(Some(guide.price))}</span>
                    <span class="badge badge-rating">{format_rating(guide.rating)}</span>
                </div>
                <div class="guide-card-meta">
                    <span class="guide-card-languages">"対応言語: " {languages}</span>
                    {(!specialties.is_empty())
                        .then(|| view! { <span class="guide-card-specialties">"特徴: " {specialties.clone()}</span> })}
                </div>
                <button
                    class="btn btn-primary guide-card-details"
                    data-action="view-details"
                    data-guide-id=guide.id.to_string()
                >
                    "詳しく見る"
                </button>
            </div>
        </div>
    }
}
