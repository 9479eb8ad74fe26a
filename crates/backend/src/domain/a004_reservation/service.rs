use contracts::domain::a001_sponsor_store::aggregate::StoreId;
use contracts::domain::a004_reservation::aggregate::{Reservation, ReservationDto};
use contracts::domain::common::AggregateId;
use contracts::enums::ReservationStatus;
use uuid::Uuid;

use crate::shared::data::storage::{storage, StorageError};

/// Create a reservation. Status fields in the body are overridden: new
/// reservations are always `confirmed` with payment `pending`. Referenced
/// guide/program existence is not checked.
pub async fn create(dto: ReservationDto) -> Result<Reservation, StorageError> {
    let store_id = dto
        .store_id
        .as_deref()
        .and_then(|s| StoreId::from_string(s).ok())
        .ok_or_else(|| StorageError::Invalid("storeIdが不正です".into()))?;

    let reservation = Reservation::new_for_insert(store_id, &dto);
    reservation.validate().map_err(StorageError::Invalid)?;

    storage().insert_reservation(reservation).await
}

/// All reservations of one store, newest first.
pub async fn list_by_store(store_id: Uuid) -> Result<Vec<Reservation>, StorageError> {
    storage().list_reservations_by_store(store_id).await
}

pub async fn update_status(id: Uuid, status_code: &str) -> Result<Reservation, StorageError> {
    let status = ReservationStatus::from_code(status_code)
        .ok_or_else(|| StorageError::Invalid(format!("不明なステータス: {}", status_code)))?;
    storage().update_reservation_status(id, status).await
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::data::memory::MemoryStorage;
    use crate::shared::data::storage::init_storage;
    use contracts::enums::PaymentStatus;
    use std::sync::Arc;

    fn booking(store_id: Uuid) -> ReservationDto {
        ReservationDto {
            store_id: Some(store_id.to_string()),
            customer_name: Some("Vinh Tran".into()),
            customer_email: Some("vinh@example.com".into()),
            participant_count: Some(2),
            total_price: Some(16000.0),
            // the server must ignore both of these
            status: Some("completed".into()),
            payment_status: Some("paid".into()),
            ..Default::default()
        }
    }

    #[tokio::test]
    async fn server_overrides_status_fields_on_create() {
        init_storage(Arc::new(MemoryStorage::new()));
        let created = create(booking(Uuid::new_v4())).await.unwrap();
        assert_eq!(created.status, ReservationStatus::Confirmed);
        assert_eq!(created.payment_status, PaymentStatus::Pending);
    }

    #[tokio::test]
    async fn status_update_round_trip() {
        init_storage(Arc::new(MemoryStorage::new()));
        let store_id = Uuid::new_v4();
        let created = create(booking(store_id)).await.unwrap();

        let updated = update_status(created.id.value(), "cancelled").await.unwrap();
        assert_eq!(updated.status, ReservationStatus::Cancelled);
        assert!(updated.metadata.updated_at >= created.metadata.updated_at);

        let err = update_status(created.id.value(), "teleported")
            .await
            .unwrap_err();
        assert!(matches!(err, StorageError::Invalid(_)));

        let err = update_status(Uuid::new_v4(), "confirmed").await.unwrap_err();
        assert!(matches!(err, StorageError::NotFound));
    }
}
