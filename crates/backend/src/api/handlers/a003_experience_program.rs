use axum::{extract::Path, http::StatusCode, Json};
use contracts::domain::a003_experience_program::aggregate::{
    ExperienceProgram, ExperienceProgramDto,
};

use crate::api::error::ApiError;
use crate::domain::a003_experience_program::service;

/// POST /api/experience-programs
pub async fn create(
    Json(dto): Json<ExperienceProgramDto>,
) -> Result<(StatusCode, Json<ExperienceProgram>), ApiError> {
    let program = service::create(dto).await?;
    Ok((StatusCode::CREATED, Json(program)))
}

/// GET /api/experience-programs/store/:store_id
pub async fn list_by_store(
    Path(store_id): Path<String>,
) -> Result<Json<Vec<ExperienceProgram>>, ApiError> {
    let uuid =
        uuid::Uuid::parse_str(&store_id).map_err(|_| ApiError::bad_request("Invalid store id"))?;
    let programs = service::list_by_store(uuid).await?;
    Ok(Json(programs))
}
