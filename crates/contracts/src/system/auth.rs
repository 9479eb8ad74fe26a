use crate::domain::a001_sponsor_store::aggregate::SponsorStore;
use serde::{Deserialize, Serialize};

/// Session lifetime without "remember me".
pub const SESSION_LIFETIME_HOURS: i64 = 24;
/// Session lifetime with "remember me".
pub const REMEMBER_ME_LIFETIME_DAYS: i64 = 30;

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
    #[serde(default)]
    pub remember_me: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RegisterRequest {
    pub store_name: String,
    pub email: String,
    pub phone: Option<String>,
    pub password: String,
    pub password_confirm: String,
    #[serde(default)]
    pub agree_terms: bool,
}

impl RegisterRequest {
    /// Client- and server-side validation: password confirmation must match
    /// and the terms checkbox must be accepted. Returns a localized message.
    pub fn validate(&self) -> Result<(), &'static str> {
        if self.store_name.trim().is_empty() {
            return Err("店舗名を入力してください");
        }
        if self.email.trim().is_empty() || !self.email.contains('@') {
            return Err("メールアドレスが不正です");
        }
        if self.password.is_empty() {
            return Err("パスワードを入力してください");
        }
        if self.password != self.password_confirm {
            return Err("パスワードが一致しません");
        }
        if !self.agree_terms {
            return Err("利用規約に同意してください");
        }
        Ok(())
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AuthResponse {
    pub access_token: String,
    /// Unix epoch milliseconds after which the session is stale
    pub expires_at: i64,
    pub user: UserInfo,
    /// Present after registration (auto-login)
    pub store: Option<SponsorStore>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserInfo {
    pub id: String,
    pub email: String,
    pub user_type: String,
    pub store_id: Option<String>,
    pub is_admin: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TokenClaims {
    pub sub: String, // user_id
    pub email: String,
    pub user_type: String,
    pub exp: usize, // expiration timestamp (seconds)
    pub iat: usize, // issued at (seconds)
}

/// Session data persisted by the client. All timestamps are Unix epoch
/// milliseconds to match what `Date.now()`-era clients wrote.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StoredSession {
    pub user_type: String,
    pub expiry: i64,
}

impl StoredSession {
    pub fn new(user_type: &str, now_millis: i64, remember_me: bool) -> Self {
        Self {
            user_type: user_type.to_string(),
            expiry: expiry_from(now_millis, remember_me),
        }
    }

    /// A session is active strictly before its expiry instant.
    pub fn is_active(&self, now_millis: i64) -> bool {
        now_millis < self.expiry
    }
}

/// Expiry timestamp for a session created at `now_millis`: one day, or
/// thirty days with "remember me".
pub fn expiry_from(now_millis: i64, remember_me: bool) -> i64 {
    let lifetime_millis = if remember_me {
        REMEMBER_ME_LIFETIME_DAYS * 24 * 60 * 60 * 1000
    } else {
        SESSION_LIFETIME_HOURS * 60 * 60 * 1000
    };
    now_millis + lifetime_millis
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn session_lifetime_is_one_day_or_thirty_days() {
        assert_eq!(expiry_from(0, false), 24 * 60 * 60 * 1000);
        assert_eq!(expiry_from(0, true), 30 * 24 * 60 * 60 * 1000);
    }

    #[test]
    fn expired_session_reports_inactive() {
        let session = StoredSession::new("sponsor", 1_000, false);
        assert!(session.is_active(1_001));
        assert!(!session.is_active(session.expiry));
        assert!(!session.is_active(session.expiry + 1));
    }

    #[test]
    fn registration_validation_rules() {
        let mut req = RegisterRequest {
            store_name: "小樽堺町ガイド".into(),
            email: "shop@otaru.example".into(),
            phone: None,
            password: "secret123".into(),
            password_confirm: "secret123".into(),
            agree_terms: true,
        };
        assert!(req.validate().is_ok());

        req.password_confirm = "different".into();
        assert_eq!(req.validate(), Err("パスワードが一致しません"));

        req.password_confirm = req.password.clone();
        req.agree_terms = false;
        assert_eq!(req.validate(), Err("利用規約に同意してください"));
    }
}
