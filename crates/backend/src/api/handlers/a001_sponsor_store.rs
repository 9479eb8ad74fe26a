use axum::{extract::Path, http::StatusCode, Json};
use contracts::domain::a001_sponsor_store::aggregate::{SponsorStore, SponsorStoreDto};

use crate::api::error::ApiError;
use crate::domain::a001_sponsor_store::service;

/// POST /api/sponsor-stores
pub async fn create(
    Json(dto): Json<SponsorStoreDto>,
) -> Result<(StatusCode, Json<SponsorStore>), ApiError> {
    tracing::info!("Creating sponsor store: {:?}", dto.email);
    let store = service::create(dto).await?;
    tracing::info!("Store created with ID: {}", store.to_string_id());
    Ok((StatusCode::CREATED, Json(store)))
}

/// GET /api/sponsor-stores/:id
pub async fn get_by_id(Path(id): Path<String>) -> Result<Json<SponsorStore>, ApiError> {
    let uuid = uuid::Uuid::parse_str(&id).map_err(|_| ApiError::bad_request("Invalid store id"))?;
    match service::get_by_id(uuid).await? {
        Some(store) => Ok(Json(store)),
        None => Err(ApiError::new(StatusCode::NOT_FOUND, "Store not found")),
    }
}

/// PUT /api/sponsor-stores/:id
pub async fn update(
    Path(id): Path<String>,
    Json(dto): Json<SponsorStoreDto>,
) -> Result<Json<SponsorStore>, ApiError> {
    let uuid = uuid::Uuid::parse_str(&id).map_err(|_| ApiError::bad_request("Invalid store id"))?;
    let store = service::update(uuid, dto).await?;
    Ok(Json(store))
}

/// GET /api/sponsor-stores
pub async fn list_all() -> Result<Json<Vec<SponsorStore>>, ApiError> {
    let stores = service::list_active().await?;
    Ok(Json(stores))
}
