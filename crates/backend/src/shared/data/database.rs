//! Schema-backed storage over sqlite, delegating to the per-aggregate
//! sea-orm repositories.

use async_trait::async_trait;
use sea_orm::{ConnectionTrait, DatabaseBackend, Statement};
use uuid::Uuid;

use contracts::domain::a001_sponsor_store::aggregate::{SponsorStore, SponsorStoreDto};
use contracts::domain::a002_tourism_guide::aggregate::{TourismGuide, TourismGuideDto};
use contracts::domain::a003_experience_program::aggregate::ExperienceProgram;
use contracts::domain::a004_reservation::aggregate::Reservation;
use contracts::domain::a005_review::aggregate::Review;
use contracts::enums::{ReservationStatus, StoreStatus};
use contracts::system::users::User;

use super::db::get_connection;
use super::storage::{Storage, StorageError};
use crate::domain::{
    a001_sponsor_store, a002_tourism_guide, a003_experience_program, a004_reservation, a005_review,
};

pub struct DatabaseStorage;

#[async_trait]
impl Storage for DatabaseStorage {
    fn default_store_status(&self) -> StoreStatus {
        StoreStatus::Pending
    }

    async fn insert_sponsor_store(&self, store: SponsorStore) -> Result<SponsorStore, StorageError> {
        a001_sponsor_store::repository::insert(&store).await?;
        Ok(store)
    }

    async fn sponsor_store_by_id(&self, id: Uuid) -> Result<Option<SponsorStore>, StorageError> {
        Ok(a001_sponsor_store::repository::get_by_id(id).await?)
    }

    async fn sponsor_store_by_email(
        &self,
        email: &str,
    ) -> Result<Option<SponsorStore>, StorageError> {
        Ok(a001_sponsor_store::repository::get_by_email(email).await?)
    }

    async fn update_sponsor_store(
        &self,
        id: Uuid,
        dto: &SponsorStoreDto,
    ) -> Result<SponsorStore, StorageError> {
        let mut store = a001_sponsor_store::repository::get_by_id(id)
            .await?
            .ok_or(StorageError::NotFound)?;
        store.apply_update(dto);
        store.before_write();
        a001_sponsor_store::repository::update(&store).await?;
        Ok(store)
    }

    async fn list_active_sponsor_stores(&self) -> Result<Vec<SponsorStore>, StorageError> {
        Ok(a001_sponsor_store::repository::list_active().await?)
    }

    async fn insert_tourism_guide(&self, guide: TourismGuide) -> Result<TourismGuide, StorageError> {
        a002_tourism_guide::repository::insert(&guide).await?;
        Ok(guide)
    }

    async fn tourism_guide_by_id(&self, id: Uuid) -> Result<Option<TourismGuide>, StorageError> {
        Ok(a002_tourism_guide::repository::get_by_id(id).await?)
    }

    async fn list_guides_by_store(
        &self,
        store_id: Uuid,
    ) -> Result<Vec<TourismGuide>, StorageError> {
        Ok(a002_tourism_guide::repository::list_by_store(store_id).await?)
    }

    async fn update_tourism_guide(
        &self,
        id: Uuid,
        dto: &TourismGuideDto,
    ) -> Result<TourismGuide, StorageError> {
        let mut guide = a002_tourism_guide::repository::get_by_id(id)
            .await?
            .ok_or(StorageError::NotFound)?;
        guide.apply_update(dto);
        guide.before_write();
        a002_tourism_guide::repository::update(&guide).await?;
        Ok(guide)
    }

    async fn insert_experience_program(
        &self,
        program: ExperienceProgram,
    ) -> Result<ExperienceProgram, StorageError> {
        a003_experience_program::repository::insert(&program).await?;
        Ok(program)
    }

    async fn list_programs_by_store(
        &self,
        store_id: Uuid,
    ) -> Result<Vec<ExperienceProgram>, StorageError> {
        Ok(a003_experience_program::repository::list_by_store(store_id).await?)
    }

    async fn insert_reservation(
        &self,
        reservation: Reservation,
    ) -> Result<Reservation, StorageError> {
        a004_reservation::repository::insert(&reservation).await?;
        Ok(reservation)
    }

    async fn list_reservations_by_store(
        &self,
        store_id: Uuid,
    ) -> Result<Vec<Reservation>, StorageError> {
        Ok(a004_reservation::repository::list_by_store(store_id).await?)
    }

    async fn update_reservation_status(
        &self,
        id: Uuid,
        status: ReservationStatus,
    ) -> Result<Reservation, StorageError> {
        let mut reservation = a004_reservation::repository::get_by_id(id)
            .await?
            .ok_or(StorageError::NotFound)?;
        reservation.status = status;
        reservation.before_write();
        a004_reservation::repository::update(&reservation).await?;
        Ok(reservation)
    }

    async fn insert_review(&self, review: Review) -> Result<Review, StorageError> {
        a005_review::repository::insert(&review).await?;
        Ok(review)
    }

    async fn list_public_reviews_by_store(
        &self,
        store_id: Uuid,
    ) -> Result<Vec<Review>, StorageError> {
        Ok(a005_review::repository::list_public_by_store(store_id).await?)
    }

    async fn insert_user(&self, user: User, password_hash: &str) -> Result<(), StorageError> {
        let conn = get_connection();
        conn.execute(Statement::from_sql_and_values(
            DatabaseBackend::Sqlite,
            "INSERT INTO sys_users (id, email, password_hash, user_type, store_id, is_active, is_admin, created_at, updated_at, last_login_at)
             VALUES (?, ?, ?, ?, ?, ?, ?, ?, ?, ?)",
            [
                user.id.into(),
                user.email.into(),
                password_hash.to_string().into(),
                user.user_type.into(),
                user.store_id.into(),
                (if user.is_active { 1 } else { 0 }).into(),
                (if user.is_admin { 1 } else { 0 }).into(),
                user.created_at.into(),
                user.updated_at.into(),
                user.last_login_at.into(),
            ],
        ))
        .await
        .map_err(|e| StorageError::Backend(e.into()))?;
        Ok(())
    }

    async fn user_by_id(&self, id: &str) -> Result<Option<User>, StorageError> {
        let conn = get_connection();
        let result = conn
            .query_one(Statement::from_sql_and_values(
                DatabaseBackend::Sqlite,
                "SELECT id, email, user_type, store_id, is_active, is_admin, created_at, updated_at, last_login_at
                 FROM sys_users WHERE id = ?",
                [id.into()],
            ))
            .await
            .map_err(|e| StorageError::Backend(e.into()))?;
        result.map(row_to_user).transpose()
    }

    async fn user_by_email(&self, email: &str) -> Result<Option<User>, StorageError> {
        let conn = get_connection();
        let result = conn
            .query_one(Statement::from_sql_and_values(
                DatabaseBackend::Sqlite,
                "SELECT id, email, user_type, store_id, is_active, is_admin, created_at, updated_at, last_login_at
                 FROM sys_users WHERE email = ?",
                [email.into()],
            ))
            .await
            .map_err(|e| StorageError::Backend(e.into()))?;
        result.map(row_to_user).transpose()
    }

    async fn password_hash(&self, user_id: &str) -> Result<Option<String>, StorageError> {
        let conn = get_connection();
        let result = conn
            .query_one(Statement::from_sql_and_values(
                DatabaseBackend::Sqlite,
                "SELECT password_hash FROM sys_users WHERE id = ?",
                [user_id.into()],
            ))
            .await
            .map_err(|e| StorageError::Backend(e.into()))?;
        match result {
            Some(row) => Ok(Some(
                row.try_get("", "password_hash")
                    .map_err(|e| StorageError::Backend(e.into()))?,
            )),
            None => Ok(None),
        }
    }

    async fn touch_last_login(&self, user_id: &str) -> Result<(), StorageError> {
        let conn = get_connection();
        let now = chrono::Utc::now().to_rfc3339();
        conn.execute(Statement::from_sql_and_values(
            DatabaseBackend::Sqlite,
            "UPDATE sys_users SET last_login_at = ? WHERE id = ?",
            [now.into(), user_id.into()],
        ))
        .await
        .map_err(|e| StorageError::Backend(e.into()))?;
        Ok(())
    }

    async fn count_users(&self) -> Result<u64, StorageError> {
        let conn = get_connection();
        let result = conn
            .query_one(Statement::from_string(
                DatabaseBackend::Sqlite,
                "SELECT COUNT(*) AS cnt FROM sys_users".to_string(),
            ))
            .await
            .map_err(|e| StorageError::Backend(e.into()))?;
        match result {
            Some(row) => {
                let count: i64 = row
                    .try_get("", "cnt")
                    .map_err(|e| StorageError::Backend(e.into()))?;
                Ok(count as u64)
            }
            None => Ok(0),
        }
    }

    async fn get_setting(&self, key: &str) -> Result<Option<String>, StorageError> {
        let conn = get_connection();
        let result = conn
            .query_one(Statement::from_sql_and_values(
                DatabaseBackend::Sqlite,
                "SELECT value FROM sys_settings WHERE key = ?",
                [key.into()],
            ))
            .await
            .map_err(|e| StorageError::Backend(e.into()))?;
        match result {
            Some(row) => Ok(Some(
                row.try_get("", "value")
                    .map_err(|e| StorageError::Backend(e.into()))?,
            )),
            None => Ok(None),
        }
    }

    async fn put_setting(&self, key: &str, value: &str) -> Result<(), StorageError> {
        let conn = get_connection();
        conn.execute(Statement::from_sql_and_values(
            DatabaseBackend::Sqlite,
            "INSERT INTO sys_settings (key, value) VALUES (?, ?)
             ON CONFLICT(key) DO UPDATE SET value = excluded.value",
            [key.into(), value.into()],
        ))
        .await
        .map_err(|e| StorageError::Backend(e.into()))?;
        Ok(())
    }
}

fn row_to_user(row: sea_orm::QueryResult) -> Result<User, StorageError> {
    let user = User {
        id: row
            .try_get("", "id")
            .map_err(|e| StorageError::Backend(e.into()))?,
        email: row
            .try_get("", "email")
            .map_err(|e| StorageError::Backend(e.into()))?,
        user_type: row
            .try_get("", "user_type")
            .map_err(|e| StorageError::Backend(e.into()))?,
        store_id: row
            .try_get("", "store_id")
            .map_err(|e| StorageError::Backend(e.into()))?,
        is_active: row
            .try_get::<i32>("", "is_active")
            .map_err(|e| StorageError::Backend(e.into()))?
            != 0,
        is_admin: row
            .try_get::<i32>("", "is_admin")
            .map_err(|e| StorageError::Backend(e.into()))?
            != 0,
        created_at: row
            .try_get("", "created_at")
            .map_err(|e| StorageError::Backend(e.into()))?,
        updated_at: row
            .try_get("", "updated_at")
            .map_err(|e| StorageError::Backend(e.into()))?,
        last_login_at: row
            .try_get("", "last_login_at")
            .map_err(|e| StorageError::Backend(e.into()))?,
    };
    Ok(user)
}
