use contracts::domain::a001_sponsor_store::aggregate::StoreId;
use contracts::domain::a002_tourism_guide::aggregate::GuideId;
use contracts::domain::a003_experience_program::aggregate::ProgramId;
use contracts::domain::a004_reservation::aggregate::{Reservation, ReservationId};
use contracts::domain::common::EntityMetadata;
use contracts::enums::{PaymentStatus, ReservationStatus};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use sea_orm::entity::prelude::*;
use sea_orm::{ColumnTrait, EntityTrait, QueryFilter, QueryOrder, Set};

use crate::shared::data::db::get_connection;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "reservations")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: String,
    pub store_id: String,
    pub guide_id: Option<String>,
    pub program_id: Option<String>,
    pub customer_name: String,
    pub customer_email: String,
    pub customer_phone: Option<String>,
    pub participant_count: i32,
    pub reservation_date: chrono::DateTime<chrono::Utc>,
    pub total_price: f64,
    pub status: String,
    pub special_requests: Option<String>,
    pub payment_status: String,
    pub created_at: chrono::DateTime<chrono::Utc>,
    pub updated_at: chrono::DateTime<chrono::Utc>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

impl From<Model> for Reservation {
    fn from(m: Model) -> Self {
        let uuid = Uuid::parse_str(&m.id).unwrap_or_else(|_| Uuid::new_v4());
        let store_uuid = Uuid::parse_str(&m.store_id).unwrap_or_else(|_| Uuid::new_v4());
        Reservation {
            id: ReservationId(uuid),
            store_id: StoreId(store_uuid),
            guide_id: m
                .guide_id
                .as_deref()
                .and_then(|s| Uuid::parse_str(s).ok())
                .map(GuideId),
            program_id: m
                .program_id
                .as_deref()
                .and_then(|s| Uuid::parse_str(s).ok())
                .map(ProgramId),
            customer_name: m.customer_name,
            customer_email: m.customer_email,
            customer_phone: m.customer_phone,
            participant_count: m.participant_count,
            reservation_date: m.reservation_date,
            total_price: m.total_price,
            status: ReservationStatus::from_code(&m.status).unwrap_or(ReservationStatus::Pending),
            special_requests: m.special_requests,
            payment_status: PaymentStatus::from_code(&m.payment_status)
                .unwrap_or(PaymentStatus::Pending),
            metadata: EntityMetadata {
                created_at: m.created_at,
                updated_at: m.updated_at,
            },
        }
    }
}

fn to_active_model(aggregate: &Reservation) -> ActiveModel {
    ActiveModel {
        id: Set(aggregate.id.value().to_string()),
        store_id: Set(aggregate.store_id.value().to_string()),
        guide_id: Set(aggregate.guide_id.map(|id| id.value().to_string())),
        program_id: Set(aggregate.program_id.map(|id| id.value().to_string())),
        customer_name: Set(aggregate.customer_name.clone()),
        customer_email: Set(aggregate.customer_email.clone()),
        customer_phone: Set(aggregate.customer_phone.clone()),
        participant_count: Set(aggregate.participant_count),
        reservation_date: Set(aggregate.reservation_date),
        total_price: Set(aggregate.total_price),
        status: Set(aggregate.status.code().to_string()),
        special_requests: Set(aggregate.special_requests.clone()),
        payment_status: Set(aggregate.payment_status.code().to_string()),
        created_at: Set(aggregate.metadata.created_at),
        updated_at: Set(aggregate.metadata.updated_at),
    }
}

fn conn() -> &'static DatabaseConnection {
    get_connection()
}

pub async fn insert(aggregate: &Reservation) -> anyhow::Result<()> {
    to_active_model(aggregate).insert(conn()).await?;
    Ok(())
}

pub async fn get_by_id(id: Uuid) -> anyhow::Result<Option<Reservation>> {
    let result = Entity::find_by_id(id.to_string()).one(conn()).await?;
    Ok(result.map(Into::into))
}

pub async fn update(aggregate: &Reservation) -> anyhow::Result<()> {
    let mut active = to_active_model(aggregate);
    active.created_at = sea_orm::ActiveValue::NotSet;
    active.update(conn()).await?;
    Ok(())
}

/// All reservations of one store, newest first.
pub async fn list_by_store(store_id: Uuid) -> anyhow::Result<Vec<Reservation>> {
    let items = Entity::find()
        .filter(Column::StoreId.eq(store_id.to_string()))
        .order_by_desc(Column::CreatedAt)
        .all(conn())
        .await?;
    Ok(items.into_iter().map(Into::into).collect())
}
