use leptos::prelude::*;

use crate::shared::toast::ToastService;
use crate::system::auth::context::navigate;
use crate::system::auth::use_auth;

/// Top navigation: brand, language switch, sponsor entry points and the
/// dashboard button whose affordance follows the login state.
#[component]
pub fn Header() -> impl IntoView {
    let auth = use_auth();
    let toast = use_context::<ToastService>().expect("ToastService not provided");

    let dashboard_style = move || {
        if auth.get().is_sponsor() {
            "opacity: 1; cursor: pointer;"
        } else {
            "opacity: 0.6; cursor: not-allowed;"
        }
    };
    let dashboard_title = move || {
        if auth.get().is_sponsor() {
            "ダッシュボード"
        } else {
            "ダッシュボード (協賛店ログインが必要です)"
        }
    };

    view! {
        <header class="site-header">
            <a class="brand" href="/">"TomoTrip"</a>

            <nav class="header-nav">
                <div class="language-switch">
                    <button id="jpBtn" class="btn btn-link" on:click=move |_| navigate("/")>
                        "日本語"
                    </button>
                    <button
                        id="enBtn"
                        class="btn btn-link"
                        on:click=move |_| toast.info("English version is in preparation")
                    >
                        "English"
                    </button>
                </div>

                <button
                    id="sponsorRegBtn"
                    class="btn btn-success"
                    data-action="open-sponsor-registration"
                >
                    "協賛店登録"
                </button>
                <button
                    id="sponsorLoginBtn"
                    class="btn btn-outline"
                    data-action="open-sponsor-login"
                >
                    "協賛店ログイン"
                </button>
                <button
                    id="dashboardBtn"
                    class="btn btn-primary"
                    data-action="redirect-sponsor-dashboard"
                    style=dashboard_style
                    title=dashboard_title
                >
                    "ダッシュボード"
                </button>
            </nav>
        </header>
    }
}
