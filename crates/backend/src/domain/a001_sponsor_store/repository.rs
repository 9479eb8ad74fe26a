use contracts::domain::a001_sponsor_store::aggregate::{SponsorStore, StoreId};
use contracts::domain::common::EntityMetadata;
use contracts::enums::StoreStatus;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use sea_orm::entity::prelude::*;
use sea_orm::{ColumnTrait, EntityTrait, QueryFilter, QueryOrder, Set};

use crate::shared::data::db::get_connection;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "sponsor_stores")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: String,
    pub store_name: String,
    pub email: String,
    pub phone: Option<String>,
    pub address: Option<String>,
    pub description: Option<String>,
    pub category: Option<String>,
    pub business_hours: Option<String>,
    pub website: Option<String>,
    pub status: String,
    pub logo_url: Option<String>,
    pub cover_image_url: Option<String>,
    pub registration_date: chrono::DateTime<chrono::Utc>,
    pub last_login_date: Option<chrono::DateTime<chrono::Utc>>,
    pub total_views: i32,
    pub total_bookings: i32,
    pub average_rating: f64,
    pub is_active: bool,
    pub created_at: chrono::DateTime<chrono::Utc>,
    pub updated_at: chrono::DateTime<chrono::Utc>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

impl From<Model> for SponsorStore {
    fn from(m: Model) -> Self {
        let uuid = Uuid::parse_str(&m.id).unwrap_or_else(|_| Uuid::new_v4());
        SponsorStore {
            id: StoreId(uuid),
            store_name: m.store_name,
            email: m.email,
            phone: m.phone,
            address: m.address,
            description: m.description,
            category: m.category,
            business_hours: m.business_hours,
            website: m.website,
            status: StoreStatus::from_code(&m.status).unwrap_or(StoreStatus::Pending),
            logo_url: m.logo_url,
            cover_image_url: m.cover_image_url,
            registration_date: m.registration_date,
            last_login_date: m.last_login_date,
            total_views: m.total_views,
            total_bookings: m.total_bookings,
            average_rating: m.average_rating,
            is_active: m.is_active,
            metadata: EntityMetadata {
                created_at: m.created_at,
                updated_at: m.updated_at,
            },
        }
    }
}

fn to_active_model(aggregate: &SponsorStore) -> ActiveModel {
    ActiveModel {
        id: Set(aggregate.id.value().to_string()),
        store_name: Set(aggregate.store_name.clone()),
        email: Set(aggregate.email.clone()),
        phone: Set(aggregate.phone.clone()),
        address: Set(aggregate.address.clone()),
        description: Set(aggregate.description.clone()),
        category: Set(aggregate.category.clone()),
        business_hours: Set(aggregate.business_hours.clone()),
        website: Set(aggregate.website.clone()),
        status: Set(aggregate.status.code().to_string()),
        logo_url: Set(aggregate.logo_url.clone()),
        cover_image_url: Set(aggregate.cover_image_url.clone()),
        registration_date: Set(aggregate.registration_date),
        last_login_date: Set(aggregate.last_login_date),
        total_views: Set(aggregate.total_views),
        total_bookings: Set(aggregate.total_bookings),
        average_rating: Set(aggregate.average_rating),
        is_active: Set(aggregate.is_active),
        created_at: Set(aggregate.metadata.created_at),
        updated_at: Set(aggregate.metadata.updated_at),
    }
}

fn conn() -> &'static DatabaseConnection {
    get_connection()
}

pub async fn insert(aggregate: &SponsorStore) -> anyhow::Result<()> {
    to_active_model(aggregate).insert(conn()).await?;
    Ok(())
}

pub async fn get_by_id(id: Uuid) -> anyhow::Result<Option<SponsorStore>> {
    let result = Entity::find_by_id(id.to_string()).one(conn()).await?;
    Ok(result.map(Into::into))
}

pub async fn get_by_email(email: &str) -> anyhow::Result<Option<SponsorStore>> {
    let result = Entity::find()
        .filter(Column::Email.eq(email))
        .one(conn())
        .await?;
    Ok(result.map(Into::into))
}

pub async fn update(aggregate: &SponsorStore) -> anyhow::Result<()> {
    let mut active = to_active_model(aggregate);
    active.created_at = sea_orm::ActiveValue::NotSet;
    active.update(conn()).await?;
    Ok(())
}

/// Active stores only, newest first.
pub async fn list_active() -> anyhow::Result<Vec<SponsorStore>> {
    let items = Entity::find()
        .filter(Column::IsActive.eq(true))
        .order_by_desc(Column::CreatedAt)
        .all(conn())
        .await?;
    Ok(items.into_iter().map(Into::into).collect())
}
