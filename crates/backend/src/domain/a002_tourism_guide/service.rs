use contracts::domain::a001_sponsor_store::aggregate::StoreId;
use contracts::domain::a002_tourism_guide::aggregate::{TourismGuide, TourismGuideDto};
use contracts::domain::common::AggregateId;
use uuid::Uuid;

use crate::shared::data::storage::{storage, StorageError};

pub async fn create(dto: TourismGuideDto) -> Result<TourismGuide, StorageError> {
    let store_id = dto
        .store_id
        .as_deref()
        .and_then(|s| StoreId::from_string(s).ok())
        .ok_or_else(|| StorageError::Invalid("storeIdが不正です".into()))?;

    let guide = TourismGuide::new_for_insert(store_id, &dto);
    guide.validate().map_err(StorageError::Invalid)?;

    storage().insert_tourism_guide(guide).await
}

pub async fn get_by_id(id: Uuid) -> Result<Option<TourismGuide>, StorageError> {
    storage().tourism_guide_by_id(id).await
}

pub async fn update(id: Uuid, dto: TourismGuideDto) -> Result<TourismGuide, StorageError> {
    storage().update_tourism_guide(id, &dto).await
}

/// Available guides of one store, newest first.
pub async fn list_by_store(store_id: Uuid) -> Result<Vec<TourismGuide>, StorageError> {
    storage().list_guides_by_store(store_id).await
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::data::memory::MemoryStorage;
    use crate::shared::data::storage::init_storage;
    use std::sync::Arc;

    #[tokio::test]
    async fn guides_list_by_store_excludes_unavailable() {
        init_storage(Arc::new(MemoryStorage::new()));
        let store_id = Uuid::new_v4();

        let dto = |name: &str| TourismGuideDto {
            store_id: Some(store_id.to_string()),
            guide_name: Some(name.into()),
            email: Some(format!("{}@guides.example", name)),
            languages: Some(vec!["ja".into(), "en".into()]),
            ..Default::default()
        };

        let visible = create(dto("aya")).await.unwrap();
        let hidden = create(dto("ken")).await.unwrap();
        update(
            hidden.id.value(),
            TourismGuideDto {
                is_available: Some(false),
                ..Default::default()
            },
        )
        .await
        .unwrap();

        let listed = list_by_store(store_id).await.unwrap();
        assert!(listed.iter().any(|g| g.id == visible.id));
        assert!(!listed.iter().any(|g| g.id == hidden.id));
    }

    #[tokio::test]
    async fn create_without_store_id_is_invalid() {
        init_storage(Arc::new(MemoryStorage::new()));
        let err = create(TourismGuideDto {
            guide_name: Some("nameless".into()),
            email: Some("x@example.com".into()),
            ..Default::default()
        })
        .await
        .unwrap_err();
        assert!(matches!(err, StorageError::Invalid(_)));
    }
}
