use axum::{extract::Path, http::StatusCode, Json};
use contracts::domain::a005_review::aggregate::{Review, ReviewDto};

use crate::api::error::ApiError;
use crate::domain::a005_review::service;

/// POST /api/reviews
pub async fn create(Json(dto): Json<ReviewDto>) -> Result<(StatusCode, Json<Review>), ApiError> {
    let review = service::create(dto).await?;
    Ok((StatusCode::CREATED, Json(review)))
}

/// GET /api/reviews/store/:store_id
pub async fn list_by_store(Path(store_id): Path<String>) -> Result<Json<Vec<Review>>, ApiError> {
    let uuid =
        uuid::Uuid::parse_str(&store_id).map_err(|_| ApiError::bad_request("Invalid store id"))?;
    let reviews = service::list_public_by_store(uuid).await?;
    Ok(Json(reviews))
}
