use axum::{http::StatusCode, Json};
use contracts::domain::a001_sponsor_store::aggregate::SponsorStoreDto;
use contracts::system::auth::{AuthResponse, LoginRequest, RegisterRequest, UserInfo};
use contracts::system::users::User;

use crate::api::error::ApiError;
use crate::domain::a001_sponsor_store::service as store_service;
use crate::system::auth::{extractor::CurrentUser, jwt};
use crate::system::users::service as user_service;

fn user_info(user: &User) -> UserInfo {
    UserInfo {
        id: user.id.clone(),
        email: user.email.clone(),
        user_type: user.user_type.clone(),
        store_id: user.store_id.clone(),
        is_admin: user.is_admin,
    }
}

/// POST /api/system/auth/login
pub async fn login(Json(request): Json<LoginRequest>) -> Result<Json<AuthResponse>, ApiError> {
    let user = user_service::verify_credentials(&request.email, &request.password)
        .await
        .map_err(|e| {
            tracing::error!("login failed: {:#}", e);
            ApiError::new(StatusCode::INTERNAL_SERVER_ERROR, "Internal server error")
        })?
        .ok_or_else(ApiError::unauthorized)?;

    let (access_token, expires_at) = jwt::generate_access_token(&user, request.remember_me)
        .await
        .map_err(|_| ApiError::new(StatusCode::INTERNAL_SERVER_ERROR, "Internal server error"))?;

    Ok(Json(AuthResponse {
        access_token,
        expires_at,
        user: user_info(&user),
        store: None,
    }))
}

/// POST /api/system/auth/register
///
/// Creates the sponsor store and its owner account in one step, then logs
/// the owner in ("remember me" semantics, like the original flow).
pub async fn register(
    Json(request): Json<RegisterRequest>,
) -> Result<(StatusCode, Json<AuthResponse>), ApiError> {
    request
        .validate()
        .map_err(|message| ApiError::new(StatusCode::UNPROCESSABLE_ENTITY, message))?;

    // 409 on duplicate active email, store left untouched
    let store = store_service::create(SponsorStoreDto {
        store_name: Some(request.store_name.clone()),
        email: Some(request.email.clone()),
        phone: request.phone.clone(),
        ..Default::default()
    })
    .await?;

    let user = user_service::create(
        &request.email,
        &request.password,
        Some(store.to_string_id()),
        false,
    )
    .await
    .map_err(|e| ApiError::new(StatusCode::CONFLICT, e.to_string()))?;

    let (access_token, expires_at) = jwt::generate_access_token(&user, true)
        .await
        .map_err(|_| ApiError::new(StatusCode::INTERNAL_SERVER_ERROR, "Internal server error"))?;

    Ok((
        StatusCode::CREATED,
        Json(AuthResponse {
            access_token,
            expires_at,
            user: user_info(&user),
            store: Some(store),
        }),
    ))
}

/// POST /api/system/auth/logout
///
/// Access tokens are stateless; the client clears its stored session. The
/// endpoint exists so the client flow has something to round-trip to.
pub async fn logout() -> StatusCode {
    StatusCode::OK
}

/// GET /api/system/auth/me (protected by middleware)
pub async fn current_user(CurrentUser(claims): CurrentUser) -> Result<Json<UserInfo>, ApiError> {
    let user = user_service::get_by_id(&claims.sub)
        .await
        .map_err(|_| ApiError::new(StatusCode::INTERNAL_SERVER_ERROR, "Internal server error"))?
        .ok_or_else(|| ApiError::new(StatusCode::NOT_FOUND, "Account not found"))?;

    Ok(Json(user_info(&user)))
}
