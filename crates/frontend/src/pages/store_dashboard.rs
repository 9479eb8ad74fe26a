use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::layout::header::Header;
use crate::system::auth::context::{do_logout, navigate};
use crate::system::auth::{storage, use_auth};

/// Dashboard for an individual store owner (the browser carries a
/// `storeLogin` record). Without a sponsor session this redirects home.
#[component]
pub fn StoreDashboardPage() -> impl IntoView {
    let auth = use_auth();

    if !auth.get_untracked().is_sponsor() {
        navigate("/");
    }

    let store_login = storage::store_login();
    let store_name = store_login
        .as_ref()
        .map(|s| s.store_name.clone())
        .unwrap_or_else(|| "協賛店".to_string());
    let email = store_login
        .as_ref()
        .map(|s| s.email.clone())
        .unwrap_or_default();

    let on_logout = move |_| {
        spawn_local(async move {
            do_logout(auth).await;
            navigate("/");
        });
    };

    view! {
        <Header />
        <main class="dashboard">
            <h3>{store_name.clone()} " ダッシュボード"</h3>
            <p class="dashboard-subtitle">{email}</p>

            <div class="dashboard-cards">
                <div class="dashboard-card">
                    <h6>"ガイド"</h6>
                    <p>"所属ガイドの登録・管理"</p>
                </div>
                <div class="dashboard-card">
                    <h6>"体験プログラム"</h6>
                    <p>"プログラムの登録・管理"</p>
                </div>
                <div class="dashboard-card">
                    <h6>"予約"</h6>
                    <p>"予約状況の確認とステータス更新"</p>
                </div>
            </div>

            <button class="btn btn-outline" on:click=on_logout>"ログアウト"</button>
        </main>
    }
}
