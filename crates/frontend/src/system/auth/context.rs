use contracts::system::auth::{AuthResponse, LoginRequest, RegisterRequest, StoredSession};
use leptos::prelude::*;

use super::{api, storage};
use crate::layout::{ModalKind, ModalService};

#[derive(Clone, Debug, Default, PartialEq)]
pub struct AuthState {
    pub is_logged_in: bool,
    pub user_type: Option<String>,
}

impl AuthState {
    pub fn is_sponsor(&self) -> bool {
        self.is_logged_in && self.user_type.as_deref() == Some("sponsor")
    }
}

/// Auth context provider component. Restores the persisted session on mount;
/// an expired expiry clears every auth key and reports logged-out.
#[component]
pub fn AuthProvider(children: ChildrenFn) -> impl IntoView {
    let auth_state = RwSignal::new(AuthState::default());

    if let Some(session) = storage::check_login_status() {
        auth_state.set(AuthState {
            is_logged_in: true,
            user_type: Some(session.user_type),
        });
    }

    provide_context(auth_state);

    children()
}

/// Hook to access auth state
pub fn use_auth() -> RwSignal<AuthState> {
    use_context::<RwSignal<AuthState>>().expect("AuthProvider not found in component tree")
}

fn apply_session(auth: RwSignal<AuthState>, response: &AuthResponse) {
    let session = StoredSession {
        user_type: response.user.user_type.clone(),
        expiry: response.expires_at,
    };
    storage::save_session(&session, &response.access_token);
    auth.set(AuthState {
        is_logged_in: true,
        user_type: Some(response.user.user_type.clone()),
    });
}

/// Perform login against the API and persist the session.
pub async fn do_login(auth: RwSignal<AuthState>, request: LoginRequest) -> Result<(), String> {
    // brief pause so the disabled submit state is visible, as the legacy
    // flow simulated
    gloo_timers::future::TimeoutFuture::new(300).await;

    let response = api::login(&request).await?;
    apply_session(auth, &response);
    Ok(())
}

/// Register a sponsor store; the server auto-logs the owner in. Writes the
/// `storeLogin` record marking this browser as a store owner.
pub async fn do_register(
    auth: RwSignal<AuthState>,
    request: RegisterRequest,
) -> Result<(), String> {
    request.validate().map_err(|e| e.to_string())?;

    gloo_timers::future::TimeoutFuture::new(300).await;

    let response = api::register(&request).await?;
    apply_session(auth, &response);

    storage::save_store_login(&storage::StoreLogin {
        store_name: request.store_name.clone(),
        email: request.email.clone(),
        login_time: chrono::Utc::now().to_rfc3339(),
        user_type: "store_owner".to_string(),
    });
    Ok(())
}

pub async fn do_logout(auth: RwSignal<AuthState>) {
    let _ = api::logout().await;
    storage::clear_session();
    storage::clear_store_login();
    auth.set(AuthState::default());
}

/// Dashboard routing: store owners (with a `storeLogin` record) go to the
/// store dashboard, operations sponsors to the operations dashboard, and
/// everyone else gets the login prompt.
pub fn handle_dashboard_access(auth: RwSignal<AuthState>, modal: ModalService) {
    let state = auth.get_untracked();
    if state.is_sponsor() {
        let target = if storage::store_login().is_some() {
            "/store-dashboard"
        } else {
            "/sponsor-dashboard"
        };
        navigate(target);
    } else {
        modal.open(ModalKind::LoginPrompt);
    }
}

pub fn navigate(path: &str) {
    if let Some(window) = web_sys::window() {
        let _ = window.location().set_href(path);
    }
}
