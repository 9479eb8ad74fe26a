use crate::domain::a001_sponsor_store::aggregate::StoreId;
use crate::domain::a002_tourism_guide::aggregate::GuideId;
use crate::domain::a004_reservation::aggregate::ReservationId;
use crate::domain::common::{AggregateId, AggregateRoot, EntityMetadata};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ReviewId(pub Uuid);

impl ReviewId {
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

impl AggregateId for ReviewId {
    fn as_string(&self) -> String {
        self.0.to_string()
    }

    fn from_string(s: &str) -> Result<Self, String> {
        Uuid::parse_str(s)
            .map(ReviewId::new)
            .map_err(|e| format!("Invalid UUID: {}", e))
    }
}

/// Customer review of a store, optionally tied to a guide and a reservation.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Review {
    pub id: ReviewId,
    pub store_id: StoreId,
    pub guide_id: Option<GuideId>,
    pub reservation_id: Option<ReservationId>,
    pub customer_name: String,
    /// 1-5 stars
    pub rating: i32,
    pub comment: Option<String>,
    pub is_public: bool,
    #[serde(flatten)]
    pub metadata: EntityMetadata,
}

impl Review {
    pub fn new_for_insert(store_id: StoreId, dto: &ReviewDto) -> Self {
        Self {
            id: ReviewId::new_v4(),
            store_id,
            guide_id: dto
                .guide_id
                .as_deref()
                .and_then(|s| GuideId::from_string(s).ok()),
            reservation_id: dto
                .reservation_id
                .as_deref()
                .and_then(|s| ReservationId::from_string(s).ok()),
            customer_name: dto.customer_name.clone().unwrap_or_default(),
            rating: dto.rating.unwrap_or(0),
            comment: dto.comment.clone(),
            is_public: dto.is_public.unwrap_or(true),
            metadata: EntityMetadata::new(),
        }
    }

    pub fn to_string_id(&self) -> String {
        self.id.as_string()
    }

    pub fn validate(&self) -> Result<(), String> {
        if !(1..=5).contains(&self.rating) {
            return Err("評価は1〜5で入力してください".into());
        }
        if self.customer_name.trim().is_empty() {
            return Err("お客様のお名前は必須です".into());
        }
        Ok(())
    }

    pub fn before_write(&mut self) {
        self.metadata.touch();
    }
}

impl AggregateRoot for Review {
    type Id = ReviewId;

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
        "a005"
    }

    fn collection_name() -> &'static str {
        "review"
    }

    fn element_name() -> &'static str {
        "レビュー"
    }

    fn list_name() -> &'static str {
        "レビュー一覧"
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct ReviewDto {
    pub id: Option<String>,
    pub store_id: Option<String>,
    pub guide_id: Option<String>,
    pub reservation_id: Option<String>,
    pub customer_name: Option<String>,
    pub rating: Option<i32>,
    pub comment: Option<String>,
    pub is_public: Option<bool>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rating_outside_one_to_five_is_rejected() {
        let mut dto = ReviewDto {
            customer_name: Some("Sarah".into()),
            rating: Some(6),
            ..Default::default()
        };
        let review = Review::new_for_insert(StoreId::new_v4(), &dto);
        assert!(review.validate().is_err());

        dto.rating = Some(0);
        let review = Review::new_for_insert(StoreId::new_v4(), &dto);
        assert!(review.validate().is_err());

        dto.rating = Some(5);
        let review = Review::new_for_insert(StoreId::new_v4(), &dto);
        assert!(review.validate().is_ok());
    }
}
