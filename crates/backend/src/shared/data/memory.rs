//! In-memory storage backend for demo mode and tests.
//!
//! Tables are process-wide vectors behind async locks; requests are handled
//! one statement at a time, matching the demo-server semantics.

use async_trait::async_trait;
use tokio::sync::RwLock;
use uuid::Uuid;

use contracts::domain::a001_sponsor_store::aggregate::{SponsorStore, SponsorStoreDto};
use contracts::domain::a002_tourism_guide::aggregate::{TourismGuide, TourismGuideDto};
use contracts::domain::a003_experience_program::aggregate::ExperienceProgram;
use contracts::domain::a004_reservation::aggregate::Reservation;
use contracts::domain::a005_review::aggregate::Review;
use contracts::enums::{ReservationStatus, StoreStatus};
use contracts::system::users::User;

use super::storage::{Storage, StorageError};

#[derive(Default)]
pub struct MemoryStorage {
    stores: RwLock<Vec<SponsorStore>>,
    guides: RwLock<Vec<TourismGuide>>,
    programs: RwLock<Vec<ExperienceProgram>>,
    reservations: RwLock<Vec<Reservation>>,
    reviews: RwLock<Vec<Review>>,
    users: RwLock<Vec<(User, String)>>,
    settings: RwLock<Vec<(String, String)>>,
}

impl MemoryStorage {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl Storage for MemoryStorage {
    fn default_store_status(&self) -> StoreStatus {
        StoreStatus::Active
    }

    async fn insert_sponsor_store(&self, store: SponsorStore) -> Result<SponsorStore, StorageError> {
        self.stores.write().await.push(store.clone());
        Ok(store)
    }

    async fn sponsor_store_by_id(&self, id: Uuid) -> Result<Option<SponsorStore>, StorageError> {
        Ok(self
            .stores
            .read()
            .await
            .iter()
            .find(|s| s.id.value() == id)
            .cloned())
    }

    async fn sponsor_store_by_email(
        &self,
        email: &str,
    ) -> Result<Option<SponsorStore>, StorageError> {
        Ok(self
            .stores
            .read()
            .await
            .iter()
            .find(|s| s.email == email)
            .cloned())
    }

    async fn update_sponsor_store(
        &self,
        id: Uuid,
        dto: &SponsorStoreDto,
    ) -> Result<SponsorStore, StorageError> {
        let mut stores = self.stores.write().await;
        let store = stores
            .iter_mut()
            .find(|s| s.id.value() == id)
            .ok_or(StorageError::NotFound)?;
        store.apply_update(dto);
        store.before_write();
        Ok(store.clone())
    }

    async fn list_active_sponsor_stores(&self) -> Result<Vec<SponsorStore>, StorageError> {
        let mut stores: Vec<SponsorStore> = self
            .stores
            .read()
            .await
            .iter()
            .filter(|s| s.is_active)
            .cloned()
            .collect();
        stores.sort_by(|a, b| b.metadata.created_at.cmp(&a.metadata.created_at));
        Ok(stores)
    }

    async fn insert_tourism_guide(&self, guide: TourismGuide) -> Result<TourismGuide, StorageError> {
        self.guides.write().await.push(guide.clone());
        Ok(guide)
    }

    async fn tourism_guide_by_id(&self, id: Uuid) -> Result<Option<TourismGuide>, StorageError> {
        Ok(self
            .guides
            .read()
            .await
            .iter()
            .find(|g| g.id.value() == id)
            .cloned())
    }

    async fn list_guides_by_store(
        &self,
        store_id: Uuid,
    ) -> Result<Vec<TourismGuide>, StorageError> {
        let mut guides: Vec<TourismGuide> = self
            .guides
            .read()
            .await
            .iter()
            .filter(|g| g.store_id.value() == store_id && g.is_available)
            .cloned()
            .collect();
        guides.sort_by(|a, b| b.metadata.created_at.cmp(&a.metadata.created_at));
        Ok(guides)
    }

    async fn update_tourism_guide(
        &self,
        id: Uuid,
        dto: &TourismGuideDto,
    ) -> Result<TourismGuide, StorageError> {
        let mut guides = self.guides.write().await;
        let guide = guides
            .iter_mut()
            .find(|g| g.id.value() == id)
            .ok_or(StorageError::NotFound)?;
        guide.apply_update(dto);
        guide.before_write();
        Ok(guide.clone())
    }

    async fn insert_experience_program(
        &self,
        program: ExperienceProgram,
    ) -> Result<ExperienceProgram, StorageError> {
        self.programs.write().await.push(program.clone());
        Ok(program)
    }

    async fn list_programs_by_store(
        &self,
        store_id: Uuid,
    ) -> Result<Vec<ExperienceProgram>, StorageError> {
        let mut programs: Vec<ExperienceProgram> = self
            .programs
            .read()
            .await
            .iter()
            .filter(|p| p.store_id.value() == store_id && p.is_active)
            .cloned()
            .collect();
        programs.sort_by(|a, b| b.metadata.created_at.cmp(&a.metadata.created_at));
        Ok(programs)
    }

    async fn insert_reservation(
        &self,
        reservation: Reservation,
    ) -> Result<Reservation, StorageError> {
        self.reservations.write().await.push(reservation.clone());
        Ok(reservation)
    }

    async fn list_reservations_by_store(
        &self,
        store_id: Uuid,
    ) -> Result<Vec<Reservation>, StorageError> {
        let mut reservations: Vec<Reservation> = self
            .reservations
            .read()
            .await
            .iter()
            .filter(|r| r.store_id.value() == store_id)
            .cloned()
            .collect();
        reservations.sort_by(|a, b| b.metadata.created_at.cmp(&a.metadata.created_at));
        Ok(reservations)
    }

    async fn update_reservation_status(
        &self,
        id: Uuid,
        status: ReservationStatus,
    ) -> Result<Reservation, StorageError> {
        let mut reservations = self.reservations.write().await;
        let reservation = reservations
            .iter_mut()
            .find(|r| r.id.value() == id)
            .ok_or(StorageError::NotFound)?;
        reservation.status = status;
        reservation.before_write();
        Ok(reservation.clone())
    }

    async fn insert_review(&self, review: Review) -> Result<Review, StorageError> {
        self.reviews.write().await.push(review.clone());
        Ok(review)
    }

    async fn list_public_reviews_by_store(
        &self,
        store_id: Uuid,
    ) -> Result<Vec<Review>, StorageError> {
        let mut reviews: Vec<Review> = self
            .reviews
            .read()
            .await
            .iter()
            .filter(|r| r.store_id.value() == store_id && r.is_public)
            .cloned()
            .collect();
        reviews.sort_by(|a, b| b.metadata.created_at.cmp(&a.metadata.created_at));
        Ok(reviews)
    }

    async fn insert_user(&self, user: User, password_hash: &str) -> Result<(), StorageError> {
        self.users
            .write()
            .await
            .push((user, password_hash.to_string()));
        Ok(())
    }

    async fn user_by_id(&self, id: &str) -> Result<Option<User>, StorageError> {
        Ok(self
            .users
            .read()
            .await
            .iter()
            .find(|(u, _)| u.id == id)
            .map(|(u, _)| u.clone()))
    }

    async fn user_by_email(&self, email: &str) -> Result<Option<User>, StorageError> {
        Ok(self
            .users
            .read()
            .await
            .iter()
            .find(|(u, _)| u.email == email)
            .map(|(u, _)| u.clone()))
    }

    async fn password_hash(&self, user_id: &str) -> Result<Option<String>, StorageError> {
        Ok(self
            .users
            .read()
            .await
            .iter()
            .find(|(u, _)| u.id == user_id)
            .map(|(_, hash)| hash.clone()))
    }

    async fn touch_last_login(&self, user_id: &str) -> Result<(), StorageError> {
        let mut users = self.users.write().await;
        if let Some((user, _)) = users.iter_mut().find(|(u, _)| u.id == user_id) {
            user.last_login_at = Some(chrono::Utc::now().to_rfc3339());
        }
        Ok(())
    }

    async fn count_users(&self) -> Result<u64, StorageError> {
        Ok(self.users.read().await.len() as u64)
    }

    async fn get_setting(&self, key: &str) -> Result<Option<String>, StorageError> {
        Ok(self
            .settings
            .read()
            .await
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.clone()))
    }

    async fn put_setting(&self, key: &str, value: &str) -> Result<(), StorageError> {
        let mut settings = self.settings.write().await;
        if let Some((_, v)) = settings.iter_mut().find(|(k, _)| k == key) {
            *v = value.to_string();
        } else {
            settings.push((key.to_string(), value.to_string()));
        }
        Ok(())
    }
}
