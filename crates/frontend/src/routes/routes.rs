use leptos::prelude::*;
use leptos_router::components::{Route, Router, Routes};
use leptos_router::path;

use crate::pages::home::HomePage;
use crate::pages::sponsor_dashboard::SponsorDashboardPage;
use crate::pages::store_dashboard::StoreDashboardPage;

#[component]
pub fn AppRoutes() -> impl IntoView {
    view! {
        <Router>
            <Routes fallback=|| view! { <HomePage /> }>
                <Route path=path!("/") view=HomePage />
                <Route path=path!("/store-dashboard") view=StoreDashboardPage />
                <Route path=path!("/sponsor-dashboard") view=SponsorDashboardPage />
            </Routes>
        </Router>
    }
}
