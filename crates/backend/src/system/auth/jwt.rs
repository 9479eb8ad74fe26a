use anyhow::{Context, Result};
use chrono::Utc;
use contracts::system::auth::{TokenClaims, REMEMBER_ME_LIFETIME_DAYS, SESSION_LIFETIME_HOURS};
use contracts::system::users::User;
use jsonwebtoken::{decode, encode, DecodingKey, EncodingKey, Header, Validation};
use rand::Rng;

/// Generate a JWT access token; lifetime is one day, or thirty days with
/// "remember me". Returns the token and its expiry in epoch milliseconds
/// (what the client persists).
pub async fn generate_access_token(user: &User, remember_me: bool) -> Result<(String, i64)> {
    let now = Utc::now();
    let lifetime = if remember_me {
        chrono::Duration::days(REMEMBER_ME_LIFETIME_DAYS)
    } else {
        chrono::Duration::hours(SESSION_LIFETIME_HOURS)
    };
    let expires = now + lifetime;

    let claims = TokenClaims {
        sub: user.id.clone(),
        email: user.email.clone(),
        user_type: user.user_type.clone(),
        exp: expires.timestamp() as usize,
        iat: now.timestamp() as usize,
    };

    let secret = get_jwt_secret().await?;
    let token = encode(
        &Header::default(),
        &claims,
        &EncodingKey::from_secret(secret.as_bytes()),
    )
    .context("Failed to encode JWT token")?;

    Ok((token, expires.timestamp_millis()))
}

/// Validate a JWT token and extract its claims.
pub async fn validate_token(token: &str) -> Result<TokenClaims> {
    let secret = get_jwt_secret().await?;

    let token_data = decode::<TokenClaims>(
        token,
        &DecodingKey::from_secret(secret.as_bytes()),
        &Validation::default(),
    )
    .context("Failed to decode JWT token")?;

    Ok(token_data.claims)
}

/// Get the JWT secret from settings, generating and persisting one on first
/// use.
pub async fn get_jwt_secret() -> Result<String> {
    use crate::shared::data::storage::storage;

    match storage().get_setting("jwt_secret").await {
        Ok(Some(secret)) => Ok(secret),
        Ok(None) | Err(_) => {
            let secret = generate_jwt_secret();
            let _ = storage().put_setting("jwt_secret", &secret).await;
            Ok(secret)
        }
    }
}

/// Generate a cryptographically secure JWT secret (256 bits).
fn generate_jwt_secret() -> String {
    use base64::{engine::general_purpose, Engine as _};
    let mut rng = rand::thread_rng();
    let random_bytes: Vec<u8> = (0..32).map(|_| rng.gen::<u8>()).collect();
    general_purpose::STANDARD.encode(&random_bytes)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::data::memory::MemoryStorage;
    use crate::shared::data::storage::init_storage;
    use std::sync::Arc;

    fn user() -> User {
        let now = Utc::now().to_rfc3339();
        User {
            id: "u-1".into(),
            email: "shop@example.com".into(),
            user_type: "sponsor".into(),
            store_id: None,
            is_active: true,
            is_admin: false,
            created_at: now.clone(),
            updated_at: now,
            last_login_at: None,
        }
    }

    #[tokio::test]
    async fn token_round_trip_preserves_claims() {
        init_storage(Arc::new(MemoryStorage::new()));
        let (token, expires_at) = generate_access_token(&user(), false).await.unwrap();
        let claims = validate_token(&token).await.unwrap();
        assert_eq!(claims.sub, "u-1");
        assert_eq!(claims.user_type, "sponsor");
        assert!(expires_at > Utc::now().timestamp_millis());
    }

    #[tokio::test]
    async fn remember_me_extends_the_lifetime() {
        init_storage(Arc::new(MemoryStorage::new()));
        let (_, short) = generate_access_token(&user(), false).await.unwrap();
        let (_, long) = generate_access_token(&user(), true).await.unwrap();
        // 30 days vs 1 day, allow slack for test execution time
        assert!(long - short > 28 * 24 * 60 * 60 * 1000);
    }

    #[tokio::test]
    async fn garbage_token_is_rejected() {
        init_storage(Arc::new(MemoryStorage::new()));
        assert!(validate_token("not.a.token").await.is_err());
    }
}
