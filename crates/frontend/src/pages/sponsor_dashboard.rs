use contracts::domain::a001_sponsor_store::aggregate::SponsorStore;
use leptos::prelude::*;
use leptos::task::spawn_local;
use wasm_bindgen::JsCast;

use crate::layout::header::Header;
use crate::shared::api_utils::api_url;
use crate::system::auth::context::navigate;
use crate::system::auth::use_auth;

async fn fetch_active_stores() -> Result<Vec<SponsorStore>, String> {
    use web_sys::{Request, RequestInit, RequestMode, Response};

    let opts = RequestInit::new();
    opts.set_method("GET");
    opts.set_mode(RequestMode::Cors);

    let url = api_url("/api/sponsor-stores");
    let request = Request::new_with_str_and_init(&url, &opts).map_err(|e| format!("{e:?}"))?;
    request
        .headers()
        .set("Accept", "application/json")
        .map_err(|e| format!("{e:?}"))?;

    let window = web_sys::window().ok_or_else(|| "no window".to_string())?;
    let resp_value = wasm_bindgen_futures::JsFuture::from(window.fetch_with_request(&request))
        .await
        .map_err(|e| format!("{e:?}"))?;
    let resp: Response = resp_value.dyn_into().map_err(|e| format!("{e:?}"))?;

    if !resp.ok() {
        return Err(format!("HTTP {}", resp.status()));
    }

    let text = wasm_bindgen_futures::JsFuture::from(resp.text().map_err(|e| format!("{e:?}"))?)
        .await
        .map_err(|e| format!("{e:?}"))?;
    let text: String = text.as_string().ok_or_else(|| "bad text".to_string())?;
    let data: Vec<SponsorStore> = serde_json::from_str(&text).map_err(|e| format!("{e}"))?;
    Ok(data)
}

/// Operations dashboard: the list of active sponsor stores, newest first.
#[component]
pub fn SponsorDashboardPage() -> impl IntoView {
    let auth = use_auth();

    if !auth.get_untracked().is_sponsor() {
        navigate("/");
    }

    let stores = RwSignal::new(Vec::<SponsorStore>::new());
    let error = RwSignal::new(None::<String>);

    spawn_local(async move {
        match fetch_active_stores().await {
            Ok(data) => stores.set(data),
            Err(message) => {
                log::error!("Failed to fetch stores: {}", message);
                error.set(Some("店舗一覧の取得に失敗しました".to_string()));
            }
        }
    });

    view! {
        <Header />
        <main class="dashboard">
            <h3>"運営ダッシュボード"</h3>

            {move || error.get().map(|e| view! { <div class="form-error">{e}</div> })}

            <table class="store-table">
                <thead>
                    <tr>
                        <th>"店舗名"</th>
                        <th>"メール"</th>
                        <th>"ステータス"</th>
                        <th>"予約数"</th>
                        <th>"評価"</th>
                    </tr>
                </thead>
                <tbody>
                    {move || {
                        stores
                            .get()
                            .into_iter()
                            .map(|store| {
                                view! {
                                    <tr>
                                        <td>{store.store_name.clone()}</td>
                                        <td>{store.email.clone()}</td>
                                        <td>{store.status.display_name()}</td>
                                        <td>{store.total_bookings}</td>
                                        <td>{format!("{:.2}", store.average_rating)}</td>
                                    </tr>
                                }
                            })
                            .collect_view()
                    }}
                </tbody>
            </table>
        </main>
    }
}
