use serde::{Deserialize, Serialize};

/// System account backing a sponsor login. Timestamps are RFC3339 strings as
/// stored in `sys_users`.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    pub id: String,
    pub email: String,
    /// "sponsor" for store accounts; operations accounts are also sponsors
    /// but carry no store id
    pub user_type: String,
    pub store_id: Option<String>,
    pub is_active: bool,
    pub is_admin: bool,
    pub created_at: String,
    pub updated_at: String,
    pub last_login_at: Option<String>,
}
