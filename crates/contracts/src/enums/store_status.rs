use serde::{Deserialize, Serialize};

/// Lifecycle status of a sponsor store
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StoreStatus {
    Pending,
    Active,
    Suspended,
}

impl StoreStatus {
    pub fn code(&self) -> &'static str {
        match self {
            StoreStatus::Pending => "pending",
            StoreStatus::Active => "active",
            StoreStatus::Suspended => "suspended",
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            StoreStatus::Pending => "審査中",
            StoreStatus::Active => "公開中",
            StoreStatus::Suspended => "停止中",
        }
    }

    pub fn all() -> Vec<StoreStatus> {
        vec![
            StoreStatus::Pending,
            StoreStatus::Active,
            StoreStatus::Suspended,
        ]
    }

    pub fn from_code(code: &str) -> Option<Self> {
        match code {
            "pending" => Some(StoreStatus::Pending),
            "active" => Some(StoreStatus::Active),
            "suspended" => Some(StoreStatus::Suspended),
            _ => None,
        }
    }
}

impl std::fmt::Display for StoreStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.code())
    }
}
