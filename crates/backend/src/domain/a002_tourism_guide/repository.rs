use contracts::domain::a001_sponsor_store::aggregate::StoreId;
use contracts::domain::a002_tourism_guide::aggregate::{GuideId, TourismGuide};
use contracts::domain::common::EntityMetadata;
use contracts::enums::GuideStatus;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use sea_orm::entity::prelude::*;
use sea_orm::{ColumnTrait, EntityTrait, QueryFilter, QueryOrder, Set};

use crate::shared::data::db::get_connection;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "tourism_guides")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: String,
    pub store_id: String,
    pub guide_name: String,
    pub email: String,
    pub phone: Option<String>,
    pub gender: Option<String>,
    pub age: Option<i32>,
    /// JSON array of language codes
    pub languages: String,
    pub experience: Option<String>,
    pub introduction: Option<String>,
    pub specialties: Option<String>,
    pub hourly_rate: Option<f64>,
    pub availability: Option<String>,
    pub status: String,
    pub profile_image_url: Option<String>,
    pub total_bookings: i32,
    pub average_rating: f64,
    pub is_available: bool,
    pub created_at: chrono::DateTime<chrono::Utc>,
    pub updated_at: chrono::DateTime<chrono::Utc>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

impl From<Model> for TourismGuide {
    fn from(m: Model) -> Self {
        let uuid = Uuid::parse_str(&m.id).unwrap_or_else(|_| Uuid::new_v4());
        let store_uuid = Uuid::parse_str(&m.store_id).unwrap_or_else(|_| Uuid::new_v4());
        TourismGuide {
            id: GuideId(uuid),
            store_id: StoreId(store_uuid),
            guide_name: m.guide_name,
            email: m.email,
            phone: m.phone,
            gender: m.gender,
            age: m.age,
            languages: serde_json::from_str(&m.languages).unwrap_or_default(),
            experience: m.experience,
            introduction: m.introduction,
            specialties: m.specialties,
            hourly_rate: m.hourly_rate,
            availability: m.availability,
            status: GuideStatus::from_code(&m.status).unwrap_or(GuideStatus::Pending),
            profile_image_url: m.profile_image_url,
            total_bookings: m.total_bookings,
            average_rating: m.average_rating,
            is_available: m.is_available,
            metadata: EntityMetadata {
                created_at: m.created_at,
                updated_at: m.updated_at,
            },
        }
    }
}

fn to_active_model(aggregate: &TourismGuide) -> ActiveModel {
    ActiveModel {
        id: Set(aggregate.id.value().to_string()),
        store_id: Set(aggregate.store_id.value().to_string()),
        guide_name: Set(aggregate.guide_name.clone()),
        email: Set(aggregate.email.clone()),
        phone: Set(aggregate.phone.clone()),
        gender: Set(aggregate.gender.clone()),
        age: Set(aggregate.age),
        languages: Set(serde_json::to_string(&aggregate.languages).unwrap_or_else(|_| "[]".into())),
        experience: Set(aggregate.experience.clone()),
        introduction: Set(aggregate.introduction.clone()),
        specialties: Set(aggregate.specialties.clone()),
        hourly_rate: Set(aggregate.hourly_rate),
        availability: Set(aggregate.availability.clone()),
        status: Set(aggregate.status.code().to_string()),
        profile_image_url: Set(aggregate.profile_image_url.clone()),
        total_bookings: Set(aggregate.total_bookings),
        average_rating: Set(aggregate.average_rating),
        is_available: Set(aggregate.is_available),
        created_at: Set(aggregate.metadata.created_at),
        updated_at: Set(aggregate.metadata.updated_at),
    }
}

fn conn() -> &'static DatabaseConnection {
    get_connection()
}

pub async fn insert(aggregate: &TourismGuide) -> anyhow::Result<()> {
    to_active_model(aggregate).insert(conn()).await?;
    Ok(())
}

pub async fn get_by_id(id: Uuid) -> anyhow::Result<Option<TourismGuide>> {
    let result = Entity::find_by_id(id.to_string()).one(conn()).await?;
    Ok(result.map(Into::into))
}

pub async fn update(aggregate: &TourismGuide) -> anyhow::Result<()> {
    let mut active = to_active_model(aggregate);
    active.created_at = sea_orm::ActiveValue::NotSet;
    active.update(conn()).await?;
    Ok(())
}

/// Available guides of one store, newest first.
pub async fn list_by_store(store_id: Uuid) -> anyhow::Result<Vec<TourismGuide>> {
    let items = Entity::find()
        .filter(Column::StoreId.eq(store_id.to_string()))
        .filter(Column::IsAvailable.eq(true))
        .order_by_desc(Column::CreatedAt)
        .all(conn())
        .await?;
    Ok(items.into_iter().map(Into::into).collect())
}
