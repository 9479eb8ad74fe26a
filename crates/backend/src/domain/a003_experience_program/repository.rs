use contracts::domain::a001_sponsor_store::aggregate::StoreId;
use contracts::domain::a003_experience_program::aggregate::{ExperienceProgram, ProgramId};
use contracts::domain::common::EntityMetadata;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use sea_orm::entity::prelude::*;
use sea_orm::{ColumnTrait, EntityTrait, QueryFilter, QueryOrder, Set};

use crate::shared::data::db::get_connection;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "experience_programs")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: String,
    pub store_id: String,
    pub program_name: String,
    pub description: Option<String>,
    pub duration: Option<i32>,
    pub price: f64,
    pub max_participants: i32,
    /// JSON array of language codes
    pub languages: String,
    pub category: Option<String>,
    pub image_url: Option<String>,
    pub is_active: bool,
    pub created_at: chrono::DateTime<chrono::Utc>,
    pub updated_at: chrono::DateTime<chrono::Utc>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

impl From<Model> for ExperienceProgram {
    fn from(m: Model) -> Self {
        let uuid = Uuid::parse_str(&m.id).unwrap_or_else(|_| Uuid::new_v4());
        let store_uuid = Uuid::parse_str(&m.store_id).unwrap_or_else(|_| Uuid::new_v4());
        ExperienceProgram {
            id: ProgramId(uuid),
            store_id: StoreId(store_uuid),
            program_name: m.program_name,
            description: m.description,
            duration: m.duration,
            price: m.price,
            max_participants: m.max_participants,
            languages: serde_json::from_str(&m.languages).unwrap_or_default(),
            category: m.category,
            image_url: m.image_url,
            is_active: m.is_active,
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

pub async fn insert(aggregate: &ExperienceProgram) -> anyhow::Result<()> {
    let active = ActiveModel {
        id: Set(aggregate.id.value().to_string()),
        store_id: Set(aggregate.store_id.value().to_string()),
        program_name: Set(aggregate.program_name.clone()),
        description: Set(aggregate.description.clone()),
        duration: Set(aggregate.duration),
        price: Set(aggregate.price),
        max_participants: Set(aggregate.max_participants),
        languages: Set(serde_json::to_string(&aggregate.languages).unwrap_or_else(|_| "[]".into())),
        category: Set(aggregate.category.clone()),
        image_url: Set(aggregate.image_url.clone()),
        is_active: Set(aggregate.is_active),
        created_at: Set(aggregate.metadata.created_at),
        updated_at: Set(aggregate.metadata.updated_at),
    };
    active.insert(conn()).await?;
    Ok(())
}

/// Active programs of one store, newest first.
pub async fn list_by_store(store_id: Uuid) -> anyhow::Result<Vec<ExperienceProgram>> {
    let items = Entity::find()
        .filter(Column::StoreId.eq(store_id.to_string()))
        .filter(Column::IsActive.eq(true))
        .order_by_desc(Column::CreatedAt)
        .all(conn())
        .await?;
    Ok(items.into_iter().map(Into::into).collect())
}
