use axum::{extract::Path, http::StatusCode, Json};
use contracts::domain::a002_tourism_guide::aggregate::{TourismGuide, TourismGuideDto};

use crate::api::error::ApiError;
use crate::domain::a002_tourism_guide::service;

/// POST /api/tourism-guides
pub async fn create(
    Json(dto): Json<TourismGuideDto>,
) -> Result<(StatusCode, Json<TourismGuide>), ApiError> {
    tracing::info!("Creating tourism guide: {:?}", dto.guide_name);
    let guide = service::create(dto).await?;
    tracing::info!("Guide created with ID: {}", guide.to_string_id());
    Ok((StatusCode::CREATED, Json(guide)))
}

/// GET /api/tourism-guides/:id
pub async fn get_by_id(Path(id): Path<String>) -> Result<Json<TourismGuide>, ApiError> {
    let uuid = uuid::Uuid::parse_str(&id).map_err(|_| ApiError::bad_request("Invalid guide id"))?;
    match service::get_by_id(uuid).await? {
        Some(guide) => Ok(Json(guide)),
        None => Err(ApiError::new(StatusCode::NOT_FOUND, "Guide not found")),
    }
}

/// GET /api/tourism-guides/store/:store_id
pub async fn list_by_store(
    Path(store_id): Path<String>,
) -> Result<Json<Vec<TourismGuide>>, ApiError> {
    let uuid =
        uuid::Uuid::parse_str(&store_id).map_err(|_| ApiError::bad_request("Invalid store id"))?;
    let guides = service::list_by_store(uuid).await?;
    Ok(Json(guides))
}
