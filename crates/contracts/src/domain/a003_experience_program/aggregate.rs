use crate::domain::a001_sponsor_store::aggregate::StoreId;
use crate::domain::common::{AggregateId, AggregateRoot, EntityMetadata};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ProgramId(pub Uuid);

impl ProgramId {
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

impl AggregateId for ProgramId {
    fn as_string(&self) -> String {
        self.0.to_string()
    }

    fn from_string(s: &str) -> Result<Self, String> {
        Uuid::parse_str(s)
            .map(ProgramId::new)
            .map_err(|e| format!("Invalid UUID: {}", e))
    }
}

/// A bookable activity offered by a sponsor store.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExperienceProgram {
    pub id: ProgramId,
    pub store_id: StoreId,
    pub program_name: String,
    pub description: Option<String>,
    /// Minutes
    pub duration: Option<i32>,
    pub price: f64,
    pub max_participants: i32,
    pub languages: Vec<String>,
    pub category: Option<String>,
    pub image_url: Option<String>,
    pub is_active: bool,
    #[serde(flatten)]
    pub metadata: EntityMetadata,
}

impl ExperienceProgram {
    pub fn new_for_insert(store_id: StoreId, dto: &ExperienceProgramDto) -> Self {
        Self {
            id: ProgramId::new_v4(),
            store_id,
            program_name: dto.program_name.clone().unwrap_or_default(),
            description: dto.description.clone(),
            duration: dto.duration,
            price: dto.price.unwrap_or(0.0),
            max_participants: dto.max_participants.unwrap_or(10),
            languages: dto.languages.clone().unwrap_or_default(),
            category: dto.category.clone(),
            image_url: dto.image_url.clone(),
            is_active: true,
            metadata: EntityMetadata::new(),
        }
    }

    pub fn to_string_id(&self) -> String {
        self.id.as_string()
    }

    pub fn validate(&self) -> Result<(), String> {
        if self.program_name.trim().is_empty() {
            return Err("プログラム名は必須です".into());
        }
        if self.price < 0.0 {
            return Err("料金が不正です".into());
        }
        Ok(())
    }

    pub fn before_write(&mut self) {
        self.metadata.touch();
    }
}

impl AggregateRoot for ExperienceProgram {
    type Id = ProgramId;

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
        "a003"
    }

    fn collection_name() -> &'static str {
        "experience_program"
    }

    fn element_name() -> &'static str {
        "体験プログラム"
    }

    fn list_name() -> &'static str {
        "体験プログラム一覧"
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct ExperienceProgramDto {
    pub id: Option<String>,
    pub store_id: Option<String>,
    pub program_name: Option<String>,
    pub description: Option<String>,
    pub duration: Option<i32>,
    pub price: Option<f64>,
    pub max_participants: Option<i32>,
    pub languages: Option<Vec<String>>,
    pub category: Option<String>,
    pub image_url: Option<String>,
    pub is_active: Option<bool>,
}
