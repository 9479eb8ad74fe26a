use leptos::prelude::*;

use crate::catalog::page::CatalogPage;
use crate::layout::footer::Footer;
use crate::layout::header::Header;

#[component]
pub fn HomePage() -> impl IntoView {
    view! {
        <Header />
        <main>
            <CatalogPage />
        </main>
        <Footer />
    }
}
