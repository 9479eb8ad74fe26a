use contracts::domain::a001_sponsor_store::aggregate::StoreId;
use contracts::domain::a003_experience_program::aggregate::{
    ExperienceProgram, ExperienceProgramDto,
};
use contracts::domain::common::AggregateId;
use uuid::Uuid;

use crate::shared::data::storage::{storage, StorageError};

pub async fn create(dto: ExperienceProgramDto) -> Result<ExperienceProgram, StorageError> {
    let store_id = dto
        .store_id
        .as_deref()
        .and_then(|s| StoreId::from_string(s).ok())
        .ok_or_else(|| StorageError::Invalid("storeIdが不正です".into()))?;

    let program = ExperienceProgram::new_for_insert(store_id, &dto);
    program.validate().map_err(StorageError::Invalid)?;

    storage().insert_experience_program(program).await
}

/// Active programs of one store, newest first.
pub async fn list_by_store(store_id: Uuid) -> Result<Vec<ExperienceProgram>, StorageError> {
    storage().list_programs_by_store(store_id).await
}
