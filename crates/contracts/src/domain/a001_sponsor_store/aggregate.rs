use crate::domain::common::{AggregateId, AggregateRoot, EntityMetadata};
use crate::enums::StoreStatus;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

// ============================================================================
// ID Type
// ============================================================================
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct StoreId(pub Uuid);

impl StoreId {
    pub fn new(value: Uuid) -> Self {
        Self(value)
    }

    pub fn new_v4() -> Self {
        Self(Uuid::new_v4())
    }

    pub fn value(&self) -> Uuid {
        self.0
    }
}

impl AggregateId for StoreId {
    fn as_string(&self) -> String {
        self.0.to_string()
    }

    fn from_string(s: &str) -> Result<Self, String> {
        Uuid::parse_str(s)
            .map(StoreId::new)
            .map_err(|e| format!("Invalid UUID: {}", e))
    }
}

// ============================================================================
// Aggregate Root
// ============================================================================
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SponsorStore {
    pub id: StoreId,
    pub store_name: String,
    pub email: String,
    pub phone: Option<String>,
    pub address: Option<String>,
    pub description: Option<String>,
    pub category: Option<String>,
    pub business_hours: Option<String>,
    pub website: Option<String>,
    pub status: StoreStatus,
    pub logo_url: Option<String>,
    pub cover_image_url: Option<String>,
    pub registration_date: chrono::DateTime<chrono::Utc>,
    pub last_login_date: Option<chrono::DateTime<chrono::Utc>>,
    /// Aggregate counters, recomputed externally; zeroed on create
    pub total_views: i32,
    pub total_bookings: i32,
    pub average_rating: f64,
    pub is_active: bool,
    #[serde(flatten)]
    pub metadata: EntityMetadata,
}

impl SponsorStore {
    /// Build a new store from a registration DTO. Counters start at zero and
    /// the status comes from the storage backend (demo: active, schema:
    /// pending).
    pub fn new_for_insert(dto: &SponsorStoreDto, status: StoreStatus) -> Self {
        let now = chrono::Utc::now();
        Self {
            id: StoreId::new_v4(),
            store_name: dto.store_name.clone().unwrap_or_default(),
            email: dto.email.clone().unwrap_or_default(),
            phone: dto.phone.clone(),
            address: dto.address.clone(),
            description: dto.description.clone(),
            category: dto.category.clone(),
            business_hours: dto.business_hours.clone(),
            website: dto.website.clone(),
            status,
            logo_url: dto.logo_url.clone(),
            cover_image_url: dto.cover_image_url.clone(),
            registration_date: now,
            last_login_date: None,
            total_views: 0,
            total_bookings: 0,
            average_rating: 0.0,
            is_active: true,
            metadata: EntityMetadata::new(),
        }
    }

    /// Shallow-merge DTO fields into the record; absent fields stay untouched.
    pub fn apply_update(&mut self, dto: &SponsorStoreDto) {
        if let Some(v) = &dto.store_name {
            self.store_name = v.clone();
        }
        if let Some(v) = &dto.email {
            self.email = v.clone();
        }
        if let Some(v) = &dto.phone {
            self.phone = Some(v.clone());
        }
        if let Some(v) = &dto.address {
            self.address = Some(v.clone());
        }
        if let Some(v) = &dto.description {
            self.description = Some(v.clone());
        }
        if let Some(v) = &dto.category {
            self.category = Some(v.clone());
        }
        if let Some(v) = &dto.business_hours {
            self.business_hours = Some(v.clone());
        }
        if let Some(v) = &dto.website {
            self.website = Some(v.clone());
        }
        if let Some(v) = dto.status.as_deref().and_then(StoreStatus::from_code) {
            self.status = v;
        }
        if let Some(v) = &dto.logo_url {
            self.logo_url = Some(v.clone());
        }
        if let Some(v) = &dto.cover_image_url {
            self.cover_image_url = Some(v.clone());
        }
        if let Some(v) = dto.is_active {
            self.is_active = v;
        }
    }

    pub fn to_string_id(&self) -> String {
        self.id.as_string()
    }

    pub fn validate(&self) -> Result<(), String> {
        if self.store_name.trim().is_empty() {
            return Err("店舗名は必須です".into());
        }
        if self.email.trim().is_empty() || !self.email.contains('@') {
            return Err("メールアドレスが不正です".into());
        }
        Ok(())
    }

    pub fn before_write(&mut self) {
        self.metadata.touch();
    }
}

impl AggregateRoot for SponsorStore {
    type Id = StoreId;

    fn id(&self) -> Self::Id {
        self.id
    }

    fn metadata(&self) -> &EntityMetadata {
        &self.metadata
    }

    fn metadata_mut(&mut self) -> &mut EntityMetadata {
        &mut self.metadata
    }

    fn aggregate_index() -> &'static str {
        "a001"
    }

    fn collection_name() -> &'static str {
        "sponsor_store"
    }

    fn element_name() -> &'static str {
        "協賛店舗"
    }

    fn list_name() -> &'static str {
        "協賛店舗一覧"
    }
}

// ============================================================================
// DTO
// ============================================================================
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct SponsorStoreDto {
    pub id: Option<String>,
    pub store_name: Option<String>,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub address: Option<String>,
    pub description: Option<String>,
    pub category: Option<String>,
    pub business_hours: Option<String>,
    pub website: Option<String>,
    pub status: Option<String>,
    pub logo_url: Option<String>,
    pub cover_image_url: Option<String>,
    pub is_active: Option<bool>,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn registration_dto() -> SponsorStoreDto {
        SponsorStoreDto {
            store_name: Some("札幌シティガイド".into()),
            email: Some("info@sapporo-guide.jp".into()),
            phone: Some("011-000-0000".into()),
            ..Default::default()
        }
    }

    #[test]
    fn new_store_has_zeroed_counters() {
        let store = SponsorStore::new_for_insert(&registration_dto(), StoreStatus::Active);
        assert_eq!(store.total_views, 0);
        assert_eq!(store.total_bookings, 0);
        assert_eq!(store.average_rating, 0.0);
        assert!(store.is_active);
        assert!(store.validate().is_ok());
    }

    #[test]
    fn update_is_a_shallow_merge() {
        let mut store = SponsorStore::new_for_insert(&registration_dto(), StoreStatus::Active);
        store.apply_update(&SponsorStoreDto {
            phone: Some("011-111-1111".into()),
            ..Default::default()
        });
        assert_eq!(store.phone.as_deref(), Some("011-111-1111"));
        // untouched fields survive the merge
        assert_eq!(store.store_name, "札幌シティガイド");
        assert_eq!(store.email, "info@sapporo-guide.jp");
    }

    #[test]
    fn missing_email_fails_validation() {
        let mut dto = registration_dto();
        dto.email = Some("not-an-address".into());
        let store = SponsorStore::new_for_insert(&dto, StoreStatus::Pending);
        assert!(store.validate().is_err());
    }
}
