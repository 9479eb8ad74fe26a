use serde::{Deserialize, Serialize};

/// Status of a reservation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ReservationStatus {
    Confirmed,
    Pending,
    Cancelled,
    Completed,
}

impl ReservationStatus {
    pub fn code(&self) -> &'static str {
        match self {
            ReservationStatus::Confirmed => "confirmed",
            ReservationStatus::Pending => "pending",
            ReservationStatus::Cancelled => "cancelled",
            ReservationStatus::Completed => "completed",
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            ReservationStatus::Confirmed => "確定",
            ReservationStatus::Pending => "保留",
            ReservationStatus::Cancelled => "キャンセル",
            ReservationStatus::Completed => "完了",
        }
    }

    pub fn all() -> Vec<ReservationStatus> {
        vec![
            ReservationStatus::Confirmed,
            ReservationStatus::Pending,
            ReservationStatus::Cancelled,
            ReservationStatus::Completed,
        ]
    }

    pub fn from_code(code: &str) -> Option<Self> {
        match code {
            "confirmed" => Some(ReservationStatus::Confirmed),
            "pending" => Some(ReservationStatus::Pending),
            "cancelled" => Some(ReservationStatus::Cancelled),
            "completed" => Some(ReservationStatus::Completed),
            _ => None,
        }
    }
}

impl std::fmt::Display for ReservationStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.code())
    }
}
