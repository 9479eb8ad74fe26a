use axum::{extract::Path, http::StatusCode, Json};
use contracts::domain::a004_reservation::aggregate::{Reservation, ReservationDto};
use serde::Deserialize;

use crate::api::error::ApiError;
use crate::domain::a004_reservation::service;

/// POST /api/reservations
pub async fn create(
    Json(dto): Json<ReservationDto>,
) -> Result<(StatusCode, Json<Reservation>), ApiError> {
    tracing::info!("Creating reservation for store {:?}", dto.store_id);
    let reservation = service::create(dto).await?;
    tracing::info!("Reservation created with ID: {}", reservation.to_string_id());
    Ok((StatusCode::CREATED, Json(reservation)))
}

/// GET /api/reservations/store/:store_id
pub async fn list_by_store(
    Path(store_id): Path<String>,
) -> Result<Json<Vec<Reservation>>, ApiError> {
    let uuid =
        uuid::Uuid::parse_str(&store_id).map_err(|_| ApiError::bad_request("Invalid store id"))?;
    let reservations = service::list_by_store(uuid).await?;
    Ok(Json(reservations))
}

#[derive(Debug, Deserialize)]
pub struct StatusUpdate {
    pub status: String,
}

/// PUT /api/reservations/:id/status
pub async fn update_status(
    Path(id): Path<String>,
    Json(body): Json<StatusUpdate>,
) -> Result<Json<Reservation>, ApiError> {
    let uuid =
        uuid::Uuid::parse_str(&id).map_err(|_| ApiError::bad_request("Invalid reservation id"))?;
    let reservation = service::update_status(uuid, &body.status).await?;
    Ok(Json(reservation))
}
