use chrono::{DateTime, Duration, Utc};
use jsonwebtoken::errors::ErrorKind;
use jsonwebtoken::{Algorithm, DecodingKey, EncodingKey, Header, Validation};
use serde::{Deserialize, Serialize};
use thiserror::Error;
use uuid::Uuid;

/// Payload of the admin token.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Claims {
    pub sub: Uuid,
    pub email: String,
    pub iat: i64,
    pub exp: i64,
}

#[derive(Error, Debug)]
pub enum TokenError {
    #[error("Token expired")]
    Expired,

    #[error("Invalid token: {0}")]
    Invalid(#[from] jsonwebtoken::errors::Error),
}

/// Issues and checks HS256-signed admin tokens.
pub struct TokenManager {
    encoding: EncodingKey,
    decoding: DecodingKey,
    validation: Validation,
    ttl: Duration,
}

impl TokenManager {
    pub fn new(secret: &[u8], ttl: Duration) -> Self {
        let mut validation = Validation::new(Algorithm::HS256);
        validation.leeway = 0;

        Self {
            encoding: EncodingKey::from_secret(secret),
            decoding: DecodingKey::from_secret(secret),
            validation,
            ttl,
        }
    }

    pub fn ttl(&self) -> Duration {
        self.ttl
    }

    pub fn issue(&self, admin_id: Uuid, email: &str) -> Result<String, TokenError> {
        self.issue_at(admin_id, email, Utc::now())
    }

    pub fn issue_at(&self, admin_id: Uuid, email: &str, now: DateTime<Utc>) -> Result<String, TokenError> {
        let claims = Claims {
            sub: admin_id,
            email: email.to_string(),
            iat: now.timestamp(),
            exp: (now + self.ttl).timestamp(),
        };

        Ok(jsonwebtoken::encode(&Header::new(Algorithm::HS256), &claims, &self.encoding)?)
    }

    pub fn decode(&self, token: &str) -> Result<Claims, TokenError> {
        jsonwebtoken::decode::<Claims>(token, &self.decoding, &self.validation)
            .map(|data| data.claims)
            .map_err(|e| match e.kind() {
                ErrorKind::ExpiredSignature => TokenError::Expired,
                _ => TokenError::Invalid(e),
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SECRET: &[u8] = b"test-secret-test-secret-test-secret!";

    fn manager() -> TokenManager {
        TokenManager::new(SECRET, Duration::hours(1))
    }

    #[test]
    fn issued_token_decodes() {
        let tokens = manager();
        let id = Uuid::new_v4();

        let token = tokens.issue(id, "admin@example.com").unwrap();
        let claims = tokens.decode(&token).unwrap();

        assert_eq!(claims.sub, id);
        assert_eq!(claims.email, "admin@example.com");
        assert_eq!(claims.exp - claims.iat, 3600);
    }

    #[test]
    fn expired_token_is_rejected() {
        let tokens = manager();
        let issued = Utc::now() - Duration::hours(2);

        let token = tokens.issue_at(Uuid::new_v4(), "admin@example.com", issued).unwrap();

        assert!(matches!(tokens.decode(&token), Err(TokenError::Expired)));
    }

    #[test]
    fn foreign_signature_is_rejected() {
        let other = TokenManager::new(b"another-secret-another-secret-1234", Duration::hours(1));
        let token = other.issue(Uuid::new_v4(), "admin@example.com").unwrap();

        assert!(matches!(manager().decode(&token), Err(TokenError::Invalid(_))));
    }

    #[test]
    fn tampered_payload_is_rejected() {
        let tokens = manager();
        let token = tokens.issue(Uuid::new_v4(), "admin@example.com").unwrap();

        let mut parts: Vec<&str> = token.split('.').collect();
        let forged = tokens.issue(Uuid::new_v4(), "intruder@example.com").unwrap();
        let forged_payload = forged.split('.').nth(1).unwrap().to_string();
        parts[1] = forged_payload.as_str();

        assert!(tokens.decode(&parts.join(".")).is_err());
    }

    #[test]
    fn garbage_is_rejected() {
        assert!(manager().decode("not.a.token").is_err());
        assert!(manager().decode("").is_err());
    }
}
