use contracts::system::auth::{AuthResponse, LoginRequest, RegisterRequest};
use wasm_bindgen::JsCast;

use crate::shared::api_utils::api_url;

async fn post_json<T: serde::de::DeserializeOwned>(
    path: &str,
    body: &impl serde::Serialize,
) -> Result<T, String> {
    use web_sys::{Request, RequestInit, RequestMode, Response};

    let opts = RequestInit::new();
    opts.set_method("POST");
    opts.set_mode(RequestMode::Cors);

    let body = serde_json::to_string(body).map_err(|e| format!("{e}"))?;
    opts.set_body(&wasm_bindgen::JsValue::from_str(&body));

    let url = api_url(path);
    let request = Request::new_with_str_and_init(&url, &opts).map_err(|e| format!("{e:?}"))?;
    request
        .headers()
        .set("Content-Type", "application/json")
        .map_err(|e| format!("{e:?}"))?;

    let window = web_sys::window().ok_or_else(|| "no window".to_string())?;
    let resp_value = wasm_bindgen_futures::JsFuture::from(window.fetch_with_request(&request))
        .await
        .map_err(|e| format!("{e:?}"))?;
    let resp: Response = resp_value.dyn_into().map_err(|e| format!("{e:?}"))?;

    let text = wasm_bindgen_futures::JsFuture::from(resp.text().map_err(|e| format!("{e:?}"))?)
        .await
        .map_err(|e| format!("{e:?}"))?;
    let text: String = text.as_string().ok_or_else(|| "bad text".to_string())?;

    if !resp.ok() {
        // surface the server's error body when it has one
        let message = serde_json::from_str::<serde_json::Value>(&text)
            .ok()
            .and_then(|v| v.get("error").and_then(|e| e.as_str()).map(String::from))
            .unwrap_or_else(|| format!("HTTP {}", resp.status()));
        return Err(message);
    }

    serde_json::from_str(&text).map_err(|e| format!("{e}"))
}

pub async fn login(request: &LoginRequest) -> Result<AuthResponse, String> {
    post_json("/api/system/auth/login", request).await
}

pub async fn register(request: &RegisterRequest) -> Result<AuthResponse, String> {
    post_json("/api/system/auth/register", request).await
}

pub async fn logout() -> Result<(), String> {
    let _: serde_json::Value = post_json("/api/system/auth/logout", &serde_json::json!({}))
        .await
        .unwrap_or_default();
    Ok(())
}
