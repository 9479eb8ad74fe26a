use crate::domain::a001_sponsor_store::aggregate::StoreId;
use crate::domain::a002_tourism_guide::aggregate::GuideId;
use crate::domain::a003_experience_program::aggregate::ProgramId;
use crate::domain::common::{AggregateId, AggregateRoot, EntityMetadata};
use crate::enums::{PaymentStatus, ReservationStatus};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ReservationId(pub Uuid);

impl ReservationId {
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

impl AggregateId for ReservationId {
    fn as_string(&self) -> String {
        self.0.to_string()
    }

    fn from_string(s: &str) -> Result<Self, String> {
        Uuid::parse_str(s)
            .map(ReservationId::new)
            .map_err(|e| format!("Invalid UUID: {}", e))
    }
}

/// A customer booking against a store, optionally tied to a guide and a
/// program. Referenced guide/program existence is not verified on create.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Reservation {
    pub id: ReservationId,
    pub store_id: StoreId,
    pub guide_id: Option<GuideId>,
    pub program_id: Option<ProgramId>,
    pub customer_name: String,
    pub customer_email: String,
    pub customer_phone: Option<String>,
    pub participant_count: i32,
    pub reservation_date: chrono::DateTime<chrono::Utc>,
    pub total_price: f64,
    pub status: ReservationStatus,
    pub special_requests: Option<String>,
    pub payment_status: PaymentStatus,
    #[serde(flatten)]
    pub metadata: EntityMetadata,
}

impl Reservation {
    /// New reservations always start as confirmed with payment pending;
    /// caller-supplied status fields are ignored.
    pub fn new_for_insert(store_id: StoreId, dto: &ReservationDto) -> Self {
        Self {
            id: ReservationId::new_v4(),
            store_id,
            guide_id: dto
                .guide_id
                .as_deref()
                .and_then(|s| GuideId::from_string(s).ok()),
            program_id: dto
                .program_id
                .as_deref()
                .and_then(|s| ProgramId::from_string(s).ok()),
            customer_name: dto.customer_name.clone().unwrap_or_default(),
            customer_email: dto.customer_email.clone().unwrap_or_default(),
            customer_phone: dto.customer_phone.clone(),
            participant_count: dto.participant_count.unwrap_or(1),
            reservation_date: dto.reservation_date.unwrap_or_else(chrono::Utc::now),
            total_price: dto.total_price.unwrap_or(0.0),
            status: ReservationStatus::Confirmed,
            special_requests: dto.special_requests.clone(),
            payment_status: PaymentStatus::Pending,
            metadata: EntityMetadata::new(),
        }
    }

    pub fn to_string_id(&self) -> String {
        self.id.as_string()
    }

    pub fn validate(&self) -> Result<(), String> {
        if self.customer_name.trim().is_empty() {
            return Err("お客様のお名前は必須です".into());
        }
        if self.customer_email.trim().is_empty() || !self.customer_email.contains('@') {
            return Err("メールアドレスが不正です".into());
        }
        if self.participant_count < 1 {
            return Err("参加人数が不正です".into());
        }
        Ok(())
    }

    pub fn before_write(&mut self) {
        self.metadata.touch();
    }
}

impl AggregateRoot for Reservation {
    type Id = ReservationId;

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
        "a004"
    }

    fn collection_name() -> &'static str {
        "reservation"
    }

    fn element_name() -> &'static str {
        "予約"
    }

    fn list_name() -> &'static str {
        "予約一覧"
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct ReservationDto {
    pub id: Option<String>,
    pub store_id: Option<String>,
    pub guide_id: Option<String>,
    pub program_id: Option<String>,
    pub customer_name: Option<String>,
    pub customer_email: Option<String>,
    pub customer_phone: Option<String>,
    pub participant_count: Option<i32>,
    pub reservation_date: Option<chrono::DateTime<chrono::Utc>>,
    pub total_price: Option<f64>,
    /// Accepted but overridden on create; see `new_for_insert`
    pub status: Option<String>,
    pub special_requests: Option<String>,
    pub payment_status: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn create_forces_confirmed_and_payment_pending() {
        let dto = ReservationDto {
            customer_name: Some("山田太郎".into()),
            customer_email: Some("taro@example.com".into()),
            status: Some("completed".into()),
            payment_status: Some("paid".into()),
            ..Default::default()
        };
        let reservation = Reservation::new_for_insert(StoreId::new_v4(), &dto);
        assert_eq!(reservation.status, ReservationStatus::Confirmed);
        assert_eq!(reservation.payment_status, PaymentStatus::Pending);
        assert_eq!(reservation.participant_count, 1);
    }
}
