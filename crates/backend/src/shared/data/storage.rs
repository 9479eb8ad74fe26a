use async_trait::async_trait;
use once_cell::sync::OnceCell;
use std::sync::Arc;
use thiserror::Error;
use uuid::Uuid;

use contracts::domain::a001_sponsor_store::aggregate::{SponsorStore, SponsorStoreDto};
use contracts::domain::a002_tourism_guide::aggregate::{TourismGuide, TourismGuideDto};
use contracts::domain::a003_experience_program::aggregate::ExperienceProgram;
use contracts::domain::a004_reservation::aggregate::Reservation;
use contracts::domain::a005_review::aggregate::Review;
use contracts::enums::{ReservationStatus, StoreStatus};
use contracts::system::users::User;

#[derive(Error, Debug)]
pub enum StorageError {
    #[error("Store with this email already exists")]
    DuplicateEmail,

    #[error("Not found")]
    NotFound,

    #[error("{0}")]
    Invalid(String),

    #[error(transparent)]
    Backend(#[from] anyhow::Error),
}

/// Storage operations shared by the in-memory demo backend and the
/// schema-backed sqlite backend.
///
/// Intentionally no cross-resource checks: creating a reservation does not
/// verify that the referenced guide or program exists. Updates against
/// unknown ids return `NotFound` in both backends.
#[async_trait]
pub trait Storage: Send + Sync {
    /// Status assigned to newly created stores (demo: active, schema:
    /// pending).
    fn default_store_status(&self) -> StoreStatus;

    // ------------------------------------------------------------------
    // Sponsor stores
    // ------------------------------------------------------------------
    async fn insert_sponsor_store(&self, store: SponsorStore) -> Result<SponsorStore, StorageError>;
    async fn sponsor_store_by_id(&self, id: Uuid) -> Result<Option<SponsorStore>, StorageError>;
    async fn sponsor_store_by_email(
        &self,
        email: &str,
    ) -> Result<Option<SponsorStore>, StorageError>;
    /// Shallow-merge update; refreshes `updated_at`.
    async fn update_sponsor_store(
        &self,
        id: Uuid,
        dto: &SponsorStoreDto,
    ) -> Result<SponsorStore, StorageError>;
    /// Active stores only, newest first.
    async fn list_active_sponsor_stores(&self) -> Result<Vec<SponsorStore>, StorageError>;

    // ------------------------------------------------------------------
    // Tourism guides
    // ------------------------------------------------------------------
    async fn insert_tourism_guide(&self, guide: TourismGuide) -> Result<TourismGuide, StorageError>;
    async fn tourism_guide_by_id(&self, id: Uuid) -> Result<Option<TourismGuide>, StorageError>;
    /// Available guides of one store, newest first.
    async fn list_guides_by_store(&self, store_id: Uuid)
        -> Result<Vec<TourismGuide>, StorageError>;
    async fn update_tourism_guide(
        &self,
        id: Uuid,
        dto: &TourismGuideDto,
    ) -> Result<TourismGuide, StorageError>;

    // ------------------------------------------------------------------
    // Experience programs
    // ------------------------------------------------------------------
    async fn insert_experience_program(
        &self,
        program: ExperienceProgram,
    ) -> Result<ExperienceProgram, StorageError>;
    /// Active programs of one store, newest first.
    async fn list_programs_by_store(
        &self,
        store_id: Uuid,
    ) -> Result<Vec<ExperienceProgram>, StorageError>;

    // ------------------------------------------------------------------
    // Reservations
    // ------------------------------------------------------------------
    async fn insert_reservation(&self, reservation: Reservation)
        -> Result<Reservation, StorageError>;
    async fn list_reservations_by_store(
        &self,
        store_id: Uuid,
    ) -> Result<Vec<Reservation>, StorageError>;
    async fn update_reservation_status(
        &self,
        id: Uuid,
        status: ReservationStatus,
    ) -> Result<Reservation, StorageError>;

    // ------------------------------------------------------------------
    // Reviews
    // ------------------------------------------------------------------
    async fn insert_review(&self, review: Review) -> Result<Review, StorageError>;
    /// Public reviews of one store, newest first.
    async fn list_public_reviews_by_store(
        &self,
        store_id: Uuid,
    ) -> Result<Vec<Review>, StorageError>;

    // ------------------------------------------------------------------
    // System users & settings
    // ------------------------------------------------------------------
    async fn insert_user(&self, user: User, password_hash: &str) -> Result<(), StorageError>;
    async fn user_by_id(&self, id: &str) -> Result<Option<User>, StorageError>;
    async fn user_by_email(&self, email: &str) -> Result<Option<User>, StorageError>;
    async fn password_hash(&self, user_id: &str) -> Result<Option<String>, StorageError>;
    async fn touch_last_login(&self, user_id: &str) -> Result<(), StorageError>;
    async fn count_users(&self) -> Result<u64, StorageError>;
    async fn get_setting(&self, key: &str) -> Result<Option<String>, StorageError>;
    async fn put_setting(&self, key: &str, value: &str) -> Result<(), StorageError>;
}

static STORAGE: OnceCell<Arc<dyn Storage>> = OnceCell::new();

pub fn init_storage(storage: Arc<dyn Storage>) {
    if STORAGE.set(storage).is_err() {
        tracing::warn!("Storage already initialized");
    }
}

/// The process-wide storage backend. Panics if called before `init_storage`;
/// the composition root initializes it before serving requests.
pub fn storage() -> &'static Arc<dyn Storage> {
    STORAGE.get().expect("Storage not initialized")
}
