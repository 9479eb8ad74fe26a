use contracts::domain::a001_sponsor_store::aggregate::StoreId;
use contracts::domain::a002_tourism_guide::aggregate::GuideId;
use contracts::domain::a004_reservation::aggregate::ReservationId;
use contracts::domain::a005_review::aggregate::{Review, ReviewId};
use contracts::domain::common::EntityMetadata;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use sea_orm::entity::prelude::*;
use sea_orm::{ColumnTrait, EntityTrait, QueryFilter, QueryOrder, Set};

use crate::shared::data::db::get_connection;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "reviews")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: String,
    pub store_id: String,
    pub guide_id: Option<String>,
    pub reservation_id: Option<String>,
    pub customer_name: String,
    pub rating: i32,
    pub comment: Option<String>,
    pub is_public: bool,
    pub created_at: chrono::DateTime<chrono::Utc>,
    pub updated_at: chrono::DateTime<chrono::Utc>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

impl From<Model> for Review {
    fn from(m: Model) -> Self {
        let uuid = Uuid::parse_str(&m.id).unwrap_or_else(|_| Uuid::new_v4());
        let store_uuid = Uuid::parse_str(&m.store_id).unwrap_or_else(|_| Uuid::new_v4());
        Review {
            id: ReviewId(uuid),
            store_id: StoreId(store_uuid),
            guide_id: m
                .guide_id
                .as_deref()
                .and_then(|s| Uuid::parse_str(s).ok())
                .map(GuideId),
            reservation_id: m
                .reservation_id
                .as_deref()
                .and_then(|s| Uuid::parse_str(s).ok())
                .map(ReservationId),
            customer_name: m.customer_name,
            rating: m.rating,
            comment: m.comment,
            is_public: m.is_public,
            metadata: EntityMetadata {
                created_at: m.created_at,
                updated_at: m.updated_at,
            },
        }
    }
}

fn conn() -> &'static DatabaseConnection {
    get_connection()
}

pub async fn insert(aggregate: &Review) -> anyhow::Result<()> {
    let active = ActiveModel {
        id: Set(aggregate.id.value().to_string()),
        store_id: Set(aggregate.store_id.value().to_string()),
        guide_id: Set(aggregate.guide_id.map(|id| id.value().to_string())),
        reservation_id: Set(aggregate.reservation_id.map(|id| id.value().to_string())),
        customer_name: Set(aggregate.customer_name.clone()),
        rating: Set(aggregate.rating),
        comment: Set(aggregate.comment.clone()),
        is_public: Set(aggregate.is_public),
        created_at: Set(aggregate.metadata.created_at),
        updated_at: Set(aggregate.metadata.updated_at),
    };
    active.insert(conn()).await?;
    Ok(())
}

/// Public reviews of one store, newest first.
pub async fn list_public_by_store(store_id: Uuid) -> anyhow::Result<Vec<Review>> {
    let items = Entity::find()
        .filter(Column::StoreId.eq(store_id.to_string()))
        .filter(Column::IsPublic.eq(true))
        .order_by_desc(Column::CreatedAt)
        .all(conn())
        .await?;
    Ok(items.into_iter().map(Into::into).collect())
}
