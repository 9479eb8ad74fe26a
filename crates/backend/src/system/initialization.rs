use anyhow::Result;

use crate::shared::data::storage::storage;
use crate::system::users::service as user_service;

const DEFAULT_ADMIN_EMAIL: &str = "admin@tomotrip.local";
const DEFAULT_ADMIN_PASSWORD: &str = "change-me";

/// Create the default operations account when no users exist yet. Operations
/// accounts carry no store id; the dashboard router sends them to the
/// operations dashboard rather than a store dashboard.
pub async fn ensure_admin_user_exists() -> Result<()> {
    let count = storage().count_users().await?;
    if count == 0 {
        tracing::info!("No users found. Creating default operations account...");
        let user = user_service::create(DEFAULT_ADMIN_EMAIL, DEFAULT_ADMIN_PASSWORD, None, true)
            .await?;
        tracing::info!("Operations account created: {} ({})", user.email, user.id);
        tracing::warn!("Default password is in effect. Change it before going public.");
    }
    Ok(())
}
