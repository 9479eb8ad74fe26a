use crate::domain::a001_sponsor_store::aggregate::StoreId;
use crate::domain::common::{AggregateId, AggregateRoot, EntityMetadata};
use crate::enums::GuideStatus;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct GuideId(pub Uuid);

impl GuideId {
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

impl AggregateId for GuideId {
    fn as_string(&self) -> String {
        self.0.to_string()
    }

    fn from_string(s: &str) -> Result<Self, String> {
        Uuid::parse_str(s)
            .map(GuideId::new)
            .map_err(|e| format!("Invalid UUID: {}", e))
    }
}

/// A tour guide affiliated with exactly one sponsor store.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TourismGuide {
    pub id: GuideId,
    pub store_id: StoreId,
    pub guide_name: String,
    pub email: String,
    pub phone: Option<String>,
    pub gender: Option<String>,
    pub age: Option<i32>,
    /// Language codes, e.g. ["ja", "en"]
    pub languages: Vec<String>,
    pub experience: Option<String>,
    pub introduction: Option<String>,
    pub specialties: Option<String>,
    pub hourly_rate: Option<f64>,
    pub availability: Option<String>,
    pub status: GuideStatus,
    pub profile_image_url: Option<String>,
    pub total_bookings: i32,
    pub average_rating: f64,
    pub is_available: bool,
    #[serde(flatten)]
    pub metadata: EntityMetadata,
}

impl TourismGuide {
    pub fn new_for_insert(store_id: StoreId, dto: &TourismGuideDto) -> Self {
        Self {
            id: GuideId::new_v4(),
            store_id,
            guide_name: dto.guide_name.clone().unwrap_or_default(),
            email: dto.email.clone().unwrap_or_default(),
            phone: dto.phone.clone(),
            gender: dto.gender.clone(),
            age: dto.age,
            languages: dto.languages.clone().unwrap_or_default(),
            experience: dto.experience.clone(),
            introduction: dto.introduction.clone(),
            specialties: dto.specialties.clone(),
            hourly_rate: dto.hourly_rate,
            availability: dto.availability.clone(),
            status: GuideStatus::Pending,
            profile_image_url: dto.profile_image_url.clone(),
            total_bookings: 0,
            average_rating: 0.0,
            is_available: true,
            metadata: EntityMetadata::new(),
        }
    }

    pub fn apply_update(&mut self, dto: &TourismGuideDto) {
        if let Some(v) = &dto.guide_name {
            self.guide_name = v.clone();
        }
        if let Some(v) = &dto.email {
            self.email = v.clone();
        }
        if let Some(v) = &dto.phone {
            self.phone = Some(v.clone());
        }
        if let Some(v) = &dto.gender {
            self.gender = Some(v.clone());
        }
        if let Some(v) = dto.age {
            self.age = Some(v);
        }
        if let Some(v) = &dto.languages {
            self.languages = v.clone();
        }
        if let Some(v) = &dto.experience {
            self.experience = Some(v.clone());
        }
        if let Some(v) = &dto.introduction {
            self.introduction = Some(v.clone());
        }
        if let Some(v) = &dto.specialties {
            self.specialties = Some(v.clone());
        }
        if let Some(v) = dto.hourly_rate {
            self.hourly_rate = Some(v);
        }
        if let Some(v) = &dto.availability {
            self.availability = Some(v.clone());
        }
        if let Some(v) = dto.status.as_deref().and_then(GuideStatus::from_code) {
            self.status = v;
        }
        if let Some(v) = &dto.profile_image_url {
            self.profile_image_url = Some(v.clone());
        }
        if let Some(v) = dto.is_available {
            self.is_available = v;
        }
    }

    pub fn to_string_id(&self) -> String {
        self.id.as_string()
    }

    pub fn validate(&self) -> Result<(), String> {
        if self.guide_name.trim().is_empty() {
            return Err("ガイド名は必須です".into());
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

impl AggregateRoot for TourismGuide {
    type Id = GuideId;

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
        "a002"
    }

    fn collection_name() -> &'static str {
        "tourism_guide"
    }

    fn element_name() -> &'static str {
        "ガイド"
    }

    fn list_name() -> &'static str {
        "ガイド一覧"
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct TourismGuideDto {
    pub id: Option<String>,
    pub store_id: Option<String>,
    pub guide_name: Option<String>,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub gender: Option<String>,
    pub age: Option<i32>,
    pub languages: Option<Vec<String>>,
    pub experience: Option<String>,
    pub introduction: Option<String>,
    pub specialties: Option<String>,
    pub hourly_rate: Option<f64>,
    pub availability: Option<String>,
    pub status: Option<String>,
    pub profile_image_url: Option<String>,
    pub is_available: Option<bool>,
}
