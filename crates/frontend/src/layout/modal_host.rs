use contracts::system::auth::{LoginRequest, RegisterRequest};
use leptos::prelude::*;
use leptos::task::spawn_local;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;

use super::modal_service::{InfoKind, ModalKind, ModalService};
use super::CatalogContext;
use crate::shared::format::{format_price, format_rating};
use crate::shared::toast::ToastService;
use crate::system::auth::context::{do_login, do_register, navigate};
use crate::system::auth::use_auth;

/// Renders whichever dialog is open. Mounted once by the composition root;
/// also owns the document-level Escape handler.
#[component]
pub fn ModalHost() -> impl IntoView {
    let modals = use_context::<ModalService>().expect("ModalService not provided");

    install_escape_handler(modals);

    move || {
        modals.active().map(|kind| {
            view! { <ModalFrame kind=kind /> }
        })
    }
}

fn install_escape_handler(modals: ModalService) {
    let Some(document) = web_sys::window().and_then(|w| w.document()) else {
        return;
    };
    let on_keydown = Closure::<dyn FnMut(web_sys::Event)>::wrap(Box::new(
        move |event: web_sys::Event| {
            let Ok(event) = event.dyn_into::<web_sys::KeyboardEvent>() else {
                return;
            };
            if event.key() != "Escape" {
                return;
            }
            if let Some(kind) = modals.active() {
                if kind.options().keyboard {
                    modals.close(kind);
                }
            }
        },
    ));
    let _ = document.add_event_listener_with_callback("keydown", on_keydown.as_ref().unchecked_ref());
    on_keydown.forget();
}

#[component]
fn ModalFrame(kind: ModalKind) -> impl IntoView {
    let modals = use_context::<ModalService>().expect("ModalService not provided");
    let options = kind.options();

    let on_backdrop_click = move |_| {
        if !options.static_backdrop {
            modals.close(kind);
        }
    };

    view! {
        <div class="modal-overlay" on:click=on_backdrop_click>
            <div class="modal-content" on:click=|e| e.stop_propagation()>
                <button class="modal-close" on:click=move |_| modals.close(kind)>"×"</button>
                {match kind {
                    ModalKind::SponsorLogin => view! { <SponsorLoginModal /> }.into_any(),
                    ModalKind::SponsorRegistration => {
                        view! { <SponsorRegistrationModal /> }.into_any()
                    }
                    ModalKind::LoginPrompt => view! { <LoginPromptModal /> }.into_any(),
                    ModalKind::GuideDetail(id) => view! { <GuideDetailModal id=id /> }.into_any(),
                    ModalKind::Info(info) => view! { <InfoModal info=info /> }.into_any(),
                }}
            </div>
        </div>
    }
}

// ============================================================================
// Sponsor login
// ============================================================================

#[derive(Clone)]
struct LoginViewModel {
    form: RwSignal<LoginRequest>,
    error: RwSignal<Option<String>>,
    pending: RwSignal<bool>,
}

impl LoginViewModel {
    fn new() -> Self {
        Self {
            form: RwSignal::new(LoginRequest {
                email: String::new(),
                password: String::new(),
                remember_me: false,
            }),
            error: RwSignal::new(None),
            pending: RwSignal::new(false),
        }
    }

    fn submit(&self, auth: RwSignal<crate::system::auth::AuthState>, modals: ModalService, toast: ToastService) {
        let this = self.clone();
        this.pending.set(true);
        this.error.set(None);
        spawn_local(async move {
            let request = this.form.get_untracked();
            match do_login(auth, request).await {
                Ok(()) => {
                    modals.close(ModalKind::SponsorLogin);
                    toast.success("ログインしました");
                    gloo_timers::future::TimeoutFuture::new(1000).await;
                    navigate("/sponsor-dashboard");
                }
                Err(message) => {
                    log::error!("Login error: {}", message);
                    this.error.set(Some("ログインに失敗しました".to_string()));
                }
            }
            this.pending.set(false);
        });
    }
}

#[component]
fn SponsorLoginModal() -> impl IntoView {
    let modals = use_context::<ModalService>().expect("ModalService not provided");
    let toast = use_context::<ToastService>().expect("ToastService not provided");
    let auth = use_auth();
    let vm = LoginViewModel::new();

    let vm_submit = vm.clone();
    let vm_view = vm.clone();

    view! {
        <div class="modal-auth">
            <h5 class="modal-title">"協賛店ログイン"</h5>

            {move || vm_view.error.get().map(|e| view! { <div class="form-error">{e}</div> })}

            <form on:submit=move |ev| {
                ev.prevent_default();
                vm_submit.submit(auth, modals, toast);
            }>
                <div class="form-group">
                    <label for="sponsorEmail">"メールアドレス"</label>
                    <input
                        type="email"
                        id="sponsorEmail"
                        required=true
                        prop:value={
                            let vm = vm.clone();
                            move || vm.form.get().email
                        }
                        on:input={
                            let vm = vm.clone();
                            move |ev| vm.form.update(|f| f.email = event_target_value(&ev))
                        }
                    />
                </div>
                <div class="form-group">
                    <label for="sponsorPassword">"パスワード"</label>
                    <input
                        type="password"
                        id="sponsorPassword"
                        required=true
                        prop:value={
                            let vm = vm.clone();
                            move || vm.form.get().password
                        }
                        on:input={
                            let vm = vm.clone();
                            move |ev| vm.form.update(|f| f.password = event_target_value(&ev))
                        }
                    />
                </div>
                <div class="form-group form-check">
                    <input
                        type="checkbox"
                        id="rememberMe"
                        prop:checked={
                            let vm = vm.clone();
                            move || vm.form.get().remember_me
                        }
                        on:change={
                            let vm = vm.clone();
                            move |ev| vm.form.update(|f| f.remember_me = event_target_checked(&ev))
                        }
                    />
                    <label for="rememberMe">"ログイン状態を保持"</label>
                </div>
                <button
                    type="submit"
                    class="btn btn-primary btn-block"
                    prop:disabled={
                        let vm = vm.clone();
                        move || vm.pending.get()
                    }
                >
                    {
                        let vm = vm.clone();
                        move || if vm.pending.get() { "ログイン中..." } else { "ログイン" }
                    }
                </button>
            </form>

            <hr />
            <p class="modal-hint">"まだアカウントをお持ちでない方"</p>
            <button
                class="btn btn-outline btn-block"
                on:click=move |_| {
                    modals.close(ModalKind::SponsorLogin);
                    modals.open(ModalKind::SponsorRegistration);
                }
            >
                "協賛店登録"
            </button>
        </div>
    }
}

// ============================================================================
// Sponsor registration
// ============================================================================

#[derive(Clone)]
struct RegistrationViewModel {
    form: RwSignal<RegisterRequest>,
    error: RwSignal<Option<String>>,
    pending: RwSignal<bool>,
}

impl RegistrationViewModel {
    fn new() -> Self {
        Self {
            form: RwSignal::new(RegisterRequest {
                store_name: String::new(),
                email: String::new(),
                phone: None,
                password: String::new(),
                password_confirm: String::new(),
                agree_terms: false,
            }),
            error: RwSignal::new(None),
            pending: RwSignal::new(false),
        }
    }

    fn submit(&self, auth: RwSignal<crate::system::auth::AuthState>, modals: ModalService, toast: ToastService) {
        let request = self.form.get_untracked();

        // no network call on password mismatch or missing terms acceptance,
        // just the inline error
        if let Err(message) = request.validate() {
            self.error.set(Some(message.to_string()));
            return;
        }

        let this = self.clone();
        this.pending.set(true);
        this.error.set(None);
        spawn_local(async move {
            match do_register(auth, request).await {
                Ok(()) => {
                    modals.close(ModalKind::SponsorRegistration);
                    toast.success("登録が完了しました");
                    gloo_timers::future::TimeoutFuture::new(1000).await;
                    navigate("/store-dashboard");
                }
                Err(message) => {
                    log::error!("Registration error: {}", message);
                    this.error.set(Some(message));
                }
            }
            this.pending.set(false);
        });
    }
}

#[component]
fn SponsorRegistrationModal() -> impl IntoView {
    let modals = use_context::<ModalService>().expect("ModalService not provided");
    let toast = use_context::<ToastService>().expect("ToastService not provided");
    let auth = use_auth();
    let vm = RegistrationViewModel::new();

    let vm_submit = vm.clone();
    let vm_view = vm.clone();

    view! {
        <div class="modal-auth">
            <h5 class="modal-title">"協賛店登録"</h5>

            {move || vm_view.error.get().map(|e| view! { <div class="form-error">{e}</div> })}

            <form on:submit=move |ev| {
                ev.prevent_default();
                vm_submit.submit(auth, modals, toast);
            }>
                <div class="form-group">
                    <label for="storeName">"店舗名 *"</label>
                    <input
                        type="text"
                        id="storeName"
                        required=true
                        prop:value={
                            let vm = vm.clone();
                            move || vm.form.get().store_name
                        }
                        on:input={
                            let vm = vm.clone();
                            move |ev| vm.form.update(|f| f.store_name = event_target_value(&ev))
                        }
                    />
                </div>
                <div class="form-group">
                    <label for="storeEmail">"メールアドレス *"</label>
                    <input
                        type="email"
                        id="storeEmail"
                        required=true
                        prop:value={
                            let vm = vm.clone();
                            move || vm.form.get().email
                        }
                        on:input={
                            let vm = vm.clone();
                            move |ev| vm.form.update(|f| f.email = event_target_value(&ev))
                        }
                    />
                </div>
                <div class="form-group">
                    <label for="storePhone">"電話番号 *"</label>
                    <input
                        type="tel"
                        id="storePhone"
                        required=true
                        prop:value={
                            let vm = vm.clone();
                            move || vm.form.get().phone.clone().unwrap_or_default()
                        }
                        on:input={
                            let vm = vm.clone();
                            move |ev| {
                                let value = event_target_value(&ev);
                                vm.form.update(|f| {
                                    f.phone = if value.trim().is_empty() { None } else { Some(value) }
                                });
                            }
                        }
                    />
                </div>
                <div class="form-group">
                    <label for="storePassword">"パスワード *"</label>
                    <input
                        type="password"
                        id="storePassword"
                        required=true
                        prop:value={
                            let vm = vm.clone();
                            move || vm.form.get().password
                        }
                        on:input={
                            let vm = vm.clone();
                            move |ev| vm.form.update(|f| f.password = event_target_value(&ev))
                        }
                    />
                </div>
                <div class="form-group">
                    <label for="storePasswordConfirm">"パスワード確認 *"</label>
                    <input
                        type="password"
                        id="storePasswordConfirm"
                        required=true
                        prop:value={
                            let vm = vm.clone();
                            move || vm.form.get().password_confirm
                        }
                        on:input={
                            let vm = vm.clone();
                            move |ev| {
                                vm.form.update(|f| f.password_confirm = event_target_value(&ev))
                            }
                        }
                    />
                </div>
                <div class="form-group form-check">
                    <input
                        type="checkbox"
                        id="agreeTerms"
                        prop:checked={
                            let vm = vm.clone();
                            move || vm.form.get().agree_terms
                        }
                        on:change={
                            let vm = vm.clone();
                            move |ev| vm.form.update(|f| f.agree_terms = event_target_checked(&ev))
                        }
                    />
                    <label for="agreeTerms">"利用規約に同意します"</label>
                </div>
                <button
                    type="submit"
                    class="btn btn-success btn-block"
                    prop:disabled={
                        let vm = vm.clone();
                        move || vm.pending.get()
                    }
                >
                    {
                        let vm = vm.clone();
                        move || if vm.pending.get() { "登録中..." } else { "登録" }
                    }
                </button>
            </form>

            <hr />
            <p class="modal-hint">"すでにアカウントをお持ちの方"</p>
            <button
                class="btn btn-outline btn-block"
                on:click=move |_| {
                    modals.close(ModalKind::SponsorRegistration);
                    modals.open(ModalKind::SponsorLogin);
                }
            >
                "ログイン"
            </button>
        </div>
    }
}

// ============================================================================
// Login prompt (dashboard access without a session)
// ============================================================================

#[component]
fn LoginPromptModal() -> impl IntoView {
    let modals = use_context::<ModalService>().expect("ModalService not provided");

    view! {
        <div class="modal-auth">
            <h5 class="modal-title">"ダッシュボードアクセス"</h5>
            <p>"ダッシュボードにアクセスするには協賛店としてログインする必要があります。"</p>
            <p class="modal-hint">"まだアカウントをお持ちでない場合は、まず協賛店登録を行ってください。"</p>
            <button
                class="btn btn-primary btn-block"
                on:click=move |_| {
                    modals.close(ModalKind::LoginPrompt);
                    modals.open(ModalKind::SponsorLogin);
                }
            >
                "協賛店ログイン"
            </button>
            <button
                class="btn btn-success btn-block"
                on:click=move |_| {
                    modals.close(ModalKind::LoginPrompt);
                    modals.open(ModalKind::SponsorRegistration);
                }
            >
                "協賛店登録"
            </button>
        </div>
    }
}

// ============================================================================
// Guide detail
// ============================================================================

#[component]
fn GuideDetailModal(id: u32) -> impl IntoView {
    let catalog = use_context::<CatalogContext>().expect("CatalogContext not provided");

    match catalog.guide_by_id(id) {
        Some(guide) => {
            let location = catalog.location_label(&guide.location);
            let languages = guide.languages.join(", ");
            view! {
                <div class="modal-guide-detail">
                    <h5 class="modal-title">{guide.name.clone()}</h5>
                    <p>{location}</p>
                    <p>{format_price(Some(guide.price))} " / " {format_rating(guide.rating)}</p>
                    <p>"対応言語: " {languages}</p>
                    <button class="btn btn-primary btn-block" data-action="book-guide" data-guide-id=guide.id.to_string()>
                        "このガイドを予約"
                    </button>
                </div>
            }
            .into_any()
        }
        None => view! {
            <div class="modal-guide-detail">
                <p>"ガイドが見つかりませんでした"</p>
            </div>
        }
        .into_any(),
    }
}

// ============================================================================
// Informational dialogs
// ============================================================================

#[component]
fn InfoModal(info: InfoKind) -> impl IntoView {
    view! {
        <div class="modal-info">
            <h5 class="modal-title">{info.title()}</h5>
            <p>{info.body()}</p>
        </div>
    }
}
