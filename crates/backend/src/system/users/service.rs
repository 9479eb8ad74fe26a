use anyhow::Result;
use chrono::Utc;
use contracts::system::users::User;

use crate::shared::data::storage::storage;
use crate::system::auth::password;

/// Create a sponsor account. `store_id` is present for store owners and
/// absent for operations accounts.
pub async fn create(
    email: &str,
    plain_password: &str,
    store_id: Option<String>,
    is_admin: bool,
) -> Result<User> {
    if email.trim().is_empty() || !email.contains('@') {
        return Err(anyhow::anyhow!("Invalid email format"));
    }
    if let Some(message) = password::validate_password_strength(plain_password).err() {
        return Err(anyhow::anyhow!(message));
    }
    if storage().user_by_email(email).await?.is_some() {
        return Err(anyhow::anyhow!("Account already exists"));
    }

    let password_hash = password::hash_password(plain_password)?;
    let now = Utc::now().to_rfc3339();
    let user = User {
        id: uuid::Uuid::new_v4().to_string(),
        email: email.to_string(),
        user_type: "sponsor".to_string(),
        store_id,
        is_active: true,
        is_admin,
        created_at: now.clone(),
        updated_at: now,
        last_login_at: None,
    };

    storage().insert_user(user.clone(), &password_hash).await?;
    Ok(user)
}

/// Verify credentials; `None` for unknown accounts, wrong passwords and
/// deactivated accounts alike.
pub async fn verify_credentials(email: &str, plain_password: &str) -> Result<Option<User>> {
    let Some(user) = storage().user_by_email(email).await? else {
        return Ok(None);
    };
    if !user.is_active {
        return Ok(None);
    }
    let Some(hash) = storage().password_hash(&user.id).await? else {
        return Ok(None);
    };
    if password::verify_password(plain_password, &hash)? {
        storage().touch_last_login(&user.id).await?;
        Ok(Some(user))
    } else {
        Ok(None)
    }
}

pub async fn get_by_id(id: &str) -> Result<Option<User>> {
    Ok(storage().user_by_id(id).await?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::data::memory::MemoryStorage;
    use crate::shared::data::storage::init_storage;
    use std::sync::Arc;

    #[tokio::test]
    async fn credentials_round_trip() {
        init_storage(Arc::new(MemoryStorage::new()));

        create("owner@yufuin.example", "onsen-tabi", None, false)
            .await
            .unwrap();

        let ok = verify_credentials("owner@yufuin.example", "onsen-tabi")
            .await
            .unwrap();
        assert!(ok.is_some());
        assert!(ok.unwrap().last_login_at.is_some());

        let bad = verify_credentials("owner@yufuin.example", "wrong")
            .await
            .unwrap();
        assert!(bad.is_none());

        let unknown = verify_credentials("nobody@example.com", "whatever")
            .await
            .unwrap();
        assert!(unknown.is_none());
    }
}
