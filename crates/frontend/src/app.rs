use leptos::prelude::*;

use crate::actions::{install_action_dispatcher, Dispatcher};
use crate::layout::modal_host::ModalHost;
use crate::layout::{CatalogContext, ModalService};
use crate::routes::routes::AppRoutes;
use crate::shared::toast::{ToastHost, ToastService};
use crate::system::auth::context::AuthProvider;
use crate::system::auth::use_auth;

/// Composition root: every context is constructed exactly once here and the
/// delegated action dispatcher is installed once, replacing the legacy
/// window globals and one-time-setup flags.
#[component]
pub fn App() -> impl IntoView {
    provide_context(CatalogContext::new());
    provide_context(ModalService::new());
    provide_context(ToastService::new());

    view! {
        <AuthProvider>
            <AppShell />
        </AuthProvider>
    }
}

#[component]
fn AppShell() -> impl IntoView {
    let catalog = use_context::<CatalogContext>().expect("CatalogContext not provided");
    let modals = use_context::<ModalService>().expect("ModalService not provided");
    let toast = use_context::<ToastService>().expect("ToastService not provided");
    let auth = use_auth();

    install_action_dispatcher(Dispatcher {
        catalog,
        modals,
        auth,
        toast,
    });

    view! {
        <AppRoutes />
        <ModalHost />
        <ToastHost />
    }
}
