use contracts::system::auth::StoredSession;
use serde::{Deserialize, Serialize};
use web_sys::window;

const AUTH_STATUS_KEY: &str = "tomotrip_auth_status";
const AUTH_EXPIRY_KEY: &str = "tomotrip_auth_expiry";
const USER_TYPE_KEY: &str = "tomotrip_user_type";
const ACCESS_TOKEN_KEY: &str = "tomotrip_access_token";
const STORE_LOGIN_KEY: &str = "storeLogin";

/// Store-owner record written after registration; its presence routes the
/// dashboard button to the individual store dashboard.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StoreLogin {
    pub store_name: String,
    pub email: String,
    pub login_time: String,
    pub user_type: String,
}

fn get_local_storage() -> Option<web_sys::Storage> {
    window()?.local_storage().ok()?
}

fn get_item(key: &str) -> Option<String> {
    get_local_storage()?.get_item(key).ok()?
}

fn set_item(key: &str, value: &str) {
    if let Some(storage) = get_local_storage() {
        let _ = storage.set_item(key, value);
    }
}

fn remove_item(key: &str) {
    if let Some(storage) = get_local_storage() {
        let _ = storage.remove_item(key);
    }
}

/// Persist a session: auth flag, user type and expiry, plus the token.
pub fn save_session(session: &StoredSession, access_token: &str) {
    set_item(AUTH_STATUS_KEY, "true");
    set_item(USER_TYPE_KEY, &session.user_type);
    set_item(AUTH_EXPIRY_KEY, &session.expiry.to_string());
    set_item(ACCESS_TOKEN_KEY, access_token);
}

/// Read the stored session; expired sessions are cleared and reported as
/// absent.
pub fn check_login_status() -> Option<StoredSession> {
    let status = get_item(AUTH_STATUS_KEY)?;
    let expiry: i64 = get_item(AUTH_EXPIRY_KEY)?.parse().ok()?;
    if status != "true" {
        return None;
    }

    let session = StoredSession {
        user_type: get_item(USER_TYPE_KEY).unwrap_or_default(),
        expiry,
    };

    let now = js_sys::Date::now() as i64;
    if session.is_active(now) {
        Some(session)
    } else {
        clear_session();
        None
    }
}

pub fn access_token() -> Option<String> {
    get_item(ACCESS_TOKEN_KEY)
}

/// Clear every auth key.
pub fn clear_session() {
    remove_item(AUTH_STATUS_KEY);
    remove_item(USER_TYPE_KEY);
    remove_item(AUTH_EXPIRY_KEY);
    remove_item(ACCESS_TOKEN_KEY);
}

pub fn save_store_login(store_login: &StoreLogin) {
    if let Ok(json) = serde_json::to_string(store_login) {
        set_item(STORE_LOGIN_KEY, &json);
    }
}

/// The `storeLogin` record distinguishes an individual store owner from an
/// operations sponsor.
pub fn store_login() -> Option<StoreLogin> {
    let json = get_item(STORE_LOGIN_KEY)?;
    serde_json::from_str(&json).ok()
}

pub fn clear_store_login() {
    remove_item(STORE_LOGIN_KEY);
}
