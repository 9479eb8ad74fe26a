use contracts::domain::a001_sponsor_store::aggregate::StoreId;
use contracts::domain::a005_review::aggregate::{Review, ReviewDto};
use contracts::domain::common::AggregateId;
use uuid::Uuid;

use crate::shared::data::storage::{storage, StorageError};

pub async fn create(dto: ReviewDto) -> Result<Review, StorageError> {
    let store_id = dto
        .store_id
        .as_deref()
        .and_then(|s| StoreId::from_string(s).ok())
        .ok_or_else(|| StorageError::Invalid("storeIdが不正です".into()))?;

    let review = Review::new_for_insert(store_id, &dto);
    review.validate().map_err(StorageError::Invalid)?;

    storage().insert_review(review).await
}

/// Public reviews of one store, newest first.
pub async fn list_public_by_store(store_id: Uuid) -> Result<Vec<Review>, StorageError> {
    storage().list_public_reviews_by_store(store_id).await
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::data::memory::MemoryStorage;
    use crate::shared::data::storage::init_storage;
    use std::sync::Arc;

    #[tokio::test]
    async fn out_of_range_rating_is_rejected() {
        init_storage(Arc::new(MemoryStorage::new()));
        let err = create(ReviewDto {
            store_id: Some(Uuid::new_v4().to_string()),
            customer_name: Some("Mia".into()),
            rating: Some(7),
            ..Default::default()
        })
        .await
        .unwrap_err();
        assert!(matches!(err, StorageError::Invalid(_)));
    }

    #[tokio::test]
    async fn private_reviews_are_not_listed() {
        init_storage(Arc::new(MemoryStorage::new()));
        let store_id = Uuid::new_v4();

        create(ReviewDto {
            store_id: Some(store_id.to_string()),
            customer_name: Some("público".into()),
            rating: Some(5),
            ..Default::default()
        })
        .await
        .unwrap();
        create(ReviewDto {
            store_id: Some(store_id.to_string()),
            customer_name: Some("privado".into()),
            rating: Some(2),
            is_public: Some(false),
            ..Default::default()
        })
        .await
        .unwrap();

        let listed = list_public_by_store(store_id).await.unwrap();
        assert_eq!(listed.len(), 1);
        assert_eq!(listed[0].customer_name, "público");
    }
}
