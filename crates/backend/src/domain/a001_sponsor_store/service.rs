use contracts::domain::a001_sponsor_store::aggregate::{SponsorStore, SponsorStoreDto};
use uuid::Uuid;

use crate::shared::data::storage::{storage, StorageError};

/// Register a new sponsor store. Fails with `DuplicateEmail` when an active
/// store already uses the address; the existing record is left untouched.
pub async fn create(dto: SponsorStoreDto) -> Result<SponsorStore, StorageError> {
    let email = dto.email.clone().unwrap_or_default();
    if let Some(existing) = storage().sponsor_store_by_email(&email).await? {
        if existing.is_active {
            return Err(StorageError::DuplicateEmail);
        }
    }

    let store = SponsorStore::new_for_insert(&dto, storage().default_store_status());
    store.validate().map_err(StorageError::Invalid)?;

    storage().insert_sponsor_store(store).await
}

pub async fn get_by_id(id: Uuid) -> Result<Option<SponsorStore>, StorageError> {
    storage().sponsor_store_by_id(id).await
}

/// Shallow-merge update; `NotFound` for unknown ids in both backends.
pub async fn update(id: Uuid, dto: SponsorStoreDto) -> Result<SponsorStore, StorageError> {
    storage().update_sponsor_store(id, &dto).await
}

pub async fn list_active() -> Result<Vec<SponsorStore>, StorageError> {
    storage().list_active_sponsor_stores().await
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::data::memory::MemoryStorage;
    use crate::shared::data::storage::init_storage;
    use std::sync::Arc;

    fn dto(email: &str) -> SponsorStoreDto {
        SponsorStoreDto {
            store_name: Some("網走流氷ツアーズ".into()),
            email: Some(email.into()),
            ..Default::default()
        }
    }

    #[tokio::test]
    async fn duplicate_email_is_rejected_and_original_untouched() {
        init_storage(Arc::new(MemoryStorage::new()));

        let first = create(dto("tours@abashiri.example")).await.unwrap();
        let err = create(dto("tours@abashiri.example")).await.unwrap_err();
        assert!(matches!(err, StorageError::DuplicateEmail));

        let kept = get_by_id(first.id.value()).await.unwrap().unwrap();
        assert_eq!(kept.store_name, first.store_name);
        assert_eq!(kept.metadata.updated_at, first.metadata.updated_at);
    }

    #[tokio::test]
    async fn update_unknown_id_reports_not_found() {
        init_storage(Arc::new(MemoryStorage::new()));

        let err = update(Uuid::new_v4(), dto("ghost@example.com"))
            .await
            .unwrap_err();
        assert!(matches!(err, StorageError::NotFound));
    }

    #[tokio::test]
    async fn demo_backend_defaults_to_active_status() {
        init_storage(Arc::new(MemoryStorage::new()));

        let store = create(dto("demo@example.com")).await.unwrap();
        assert_eq!(store.status, contracts::enums::StoreStatus::Active);
        assert!(list_active().await.unwrap().iter().any(|s| s.id == store.id));
    }
}
