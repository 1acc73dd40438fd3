//! HS256 JWT session validator.
//!
//! Owner tokens are signed by the account service with a shared secret and
//! carry the owner's id, email and (optionally) restaurant name.

use async_trait::async_trait;
use jsonwebtoken::{decode, errors::ErrorKind, Algorithm, DecodingKey, Validation};
use secrecy::{ExposeSecret, SecretString};
use serde::{Deserialize, Serialize};

use crate::domain::foundation::{AuthError, AuthenticatedUser, UserId};
use crate::ports::SessionValidator;

/// Claims carried by an owner token.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OwnerClaims {
    pub user_id: String,
    pub email: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub restaurant_name: Option<String>,
    /// Expiry (Unix epoch seconds).
    pub exp: u64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub iat: Option<u64>,
}

/// Validates owner tokens signed with a shared HS256 secret.
pub struct JwtSessionValidator {
    decoding_key: DecodingKey,
    validation: Validation,
}

impl JwtSessionValidator {
    /// Creates a validator for `secret`, tolerating `leeway_seconds` of clock skew.
    pub fn new(secret: &SecretString, leeway_seconds: u64) -> Self {
        let mut validation = Validation::new(Algorithm::HS256);
        validation.leeway = leeway_seconds;
        validation.validate_exp = true;
        validation.set_required_spec_claims(&["exp"]);

        Self {
            decoding_key: DecodingKey::from_secret(secret.expose_secret().as_bytes()),
            validation,
        }
    }
}

#[async_trait]
impl SessionValidator for JwtSessionValidator {
    async fn validate(&self, token: &str) -> Result<AuthenticatedUser, AuthError> {
        let data = decode::<OwnerClaims>(token, &self.decoding_key, &self.validation).map_err(
            |e| match e.kind() {
                ErrorKind::ExpiredSignature => {
                    tracing::debug!("Token expired");
                    AuthError::TokenExpired
                }
                _ => {
                    tracing::warn!("Token validation failed: {}", e);
                    AuthError::InvalidToken
                }
            },
        )?;
        let claims = data.claims;

        let user_id = UserId::new(&claims.user_id).map_err(|_| {
            tracing::warn!("Token carries an empty user id");
            AuthError::InvalidToken
        })?;

        Ok(AuthenticatedUser::new(
            user_id,
            claims.email,
            claims.restaurant_name,
        ))
    }
}

impl std::fmt::Debug for JwtSessionValidator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("JwtSessionValidator")
            .field("leeway", &self.validation.leeway)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use jsonwebtoken::{encode, EncodingKey, Header};

    const SECRET: &str = "test-signing-secret";

    fn now() -> u64 {
        chrono::Utc::now().timestamp() as u64
    }

    fn token(secret: &str, claims: &OwnerClaims) -> String {
        encode(
            &Header::new(Algorithm::HS256),
            claims,
            &EncodingKey::from_secret(secret.as_bytes()),
        )
        .unwrap()
    }

    fn claims(exp: u64) -> OwnerClaims {
        OwnerClaims {
            user_id: "owner-1".to_string(),
            email: "owner@example.com".to_string(),
            restaurant_name: Some("La Esquina".to_string()),
            exp,
            iat: Some(now()),
        }
    }

    fn validator() -> JwtSessionValidator {
        JwtSessionValidator::new(&SecretString::new(SECRET.to_string()), 0)
    }

    #[tokio::test]
    async fn valid_token_yields_owner() {
        let user = validator()
            .validate(&token(SECRET, &claims(now() + 3600)))
            .await
            .unwrap();

        assert_eq!(user.id.as_str(), "owner-1");
        assert_eq!(user.email, "owner@example.com");
        assert_eq!(user.restaurant_name.as_deref(), Some("La Esquina"));
    }

    #[tokio::test]
    async fn wrong_secret_is_invalid() {
        let result = validator()
            .validate(&token("another-secret", &claims(now() + 3600)))
            .await;

        assert_eq!(result.unwrap_err(), AuthError::InvalidToken);
    }

    #[tokio::test]
    async fn expired_token_is_reported_as_expired() {
        let result = validator()
            .validate(&token(SECRET, &claims(now() - 3600)))
            .await;

        assert_eq!(result.unwrap_err(), AuthError::TokenExpired);
    }

    #[tokio::test]
    async fn leeway_accepts_recently_expired_token() {
        let lenient = JwtSessionValidator::new(&SecretString::new(SECRET.to_string()), 120);

        let result = lenient.validate(&token(SECRET, &claims(now() - 30))).await;

        assert!(result.is_ok());
    }

    #[tokio::test]
    async fn garbage_is_invalid() {
        let result = validator().validate("not-a-jwt").await;
        assert_eq!(result.unwrap_err(), AuthError::InvalidToken);
    }

    #[tokio::test]
    async fn empty_user_id_is_invalid() {
        let mut claims = claims(now() + 3600);
        claims.user_id = String::new();

        let result = validator().validate(&token(SECRET, &claims)).await;

        assert_eq!(result.unwrap_err(), AuthError::InvalidToken);
    }

    #[test]
    fn debug_does_not_print_the_key() {
        let rendered = format!("{:?}", validator());
        assert!(!rendered.contains(SECRET));
    }
}
