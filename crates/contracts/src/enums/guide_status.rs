use serde::{Deserialize, Serialize};

/// Lifecycle status of a tourism guide
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum GuideStatus {
    Pending,
    Active,
    Inactive,
}

impl GuideStatus {
    pub fn code(&self) -> &'static str {
        match self {
            GuideStatus::Pending => "pending",
            GuideStatus::Active => "active",
            GuideStatus::Inactive => "inactive",
        }
    }

    pub fn from_code(code: &str) -> Option<Self> {
        match code {
            "pending" => Some(GuideStatus::Pending),
            "active" => Some(GuideStatus::Active),
            "inactive" => Some(GuideStatus::Inactive),
            _ => None,
        }
    }
}

impl std::fmt::Display for GuideStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.code())
    }
}
