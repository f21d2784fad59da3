use jiff::{SignedDuration, Timestamp};
use jsonwebtoken::{DecodingKey, EncodingKey, Header, Validation, decode, encode};
use serde::{Deserialize, Serialize};

use crate::config::JwtConfig;
use crate::error::{AppError, AppResult};

/// Token type enumeration
#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum TokenType {
    /// Short-lived token sent with every API call
    Access,
    /// Long-lived token exchanged for a new pair
    Refresh,
}

/// JWT claims identifying the signed-in user
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct Claims {
    /// Subject (user ID)
    pub sub: String,
    pub email: String,
    /// Display name
    pub name: String,
    pub token_type: TokenType,
    /// Issued at, unix seconds
    pub iat: i64,
    /// Expiration, unix seconds
    pub exp: i64,
}

impl Claims {
    pub fn new(
        user_id: i32,
        email: String,
        name: String,
        token_type: TokenType,
        expiration_hours: i64,
    ) -> Self {
        let now = Timestamp::now();
        let exp = now.as_second() + SignedDuration::from_hours(expiration_hours).as_secs();

        Self {
            sub: user_id.to_string(),
            email,
            name,
            token_type,
            iat: now.as_second(),
            exp,
        }
    }

    /// The numeric user id carried in `sub`.
    pub fn user_id(&self) -> AppResult<i32> {
        self.sub
            .parse()
            .map_err(|_| AppError::unauthorized("Invalid user ID in token"))
    }
}

/// Access and refresh tokens issued together.
#[derive(Debug, Clone)]
pub struct TokenPair {
    pub access_token: String,
    pub refresh_token: String,
}

/// Signs a single token.
pub fn generate_token(
    user_id: i32,
    email: String,
    name: String,
    token_type: TokenType,
    secret: &str,
    expiration_hours: i64,
) -> AppResult<String> {
    let claims = Claims::new(user_id, email, name, token_type, expiration_hours);

    encode(
        &Header::default(),
        &claims,
        &EncodingKey::from_secret(secret.as_bytes()),
    )
    .map_err(|e| AppError::Internal {
        source: anyhow::anyhow!("Failed to generate JWT token: {}", e),
    })
}

/// Issues an access/refresh pair with lifetimes from `config`.
pub fn generate_token_pair(
    user_id: i32,
    email: &str,
    name: &str,
    config: &JwtConfig,
) -> AppResult<TokenPair> {
    let access_token = generate_token(
        user_id,
        email.to_string(),
        name.to_string(),
        TokenType::Access,
        &config.secret,
        config.access_token_expiration,
    )?;

    let refresh_token = generate_token(
        user_id,
        email.to_string(),
        name.to_string(),
        TokenType::Refresh,
        &config.secret,
        config.refresh_token_expiration,
    )?;

    Ok(TokenPair {
        access_token,
        refresh_token,
    })
}

/// Validates and decodes a JWT token, optionally pinning its type.
pub fn validate_token(
    token: &str,
    secret: &str,
    expected_type: Option<TokenType>,
) -> AppResult<Claims> {
    let claims = decode::<Claims>(
        token,
        &DecodingKey::from_secret(secret.as_bytes()),
        &Validation::default(),
    )
    .map(|data| data.claims)
    .map_err(|e| match e.kind() {
        jsonwebtoken::errors::ErrorKind::ExpiredSignature => {
            AppError::unauthorized("Token has expired")
        }
        jsonwebtoken::errors::ErrorKind::InvalidToken => AppError::unauthorized("Invalid token"),
        jsonwebtoken::errors::ErrorKind::InvalidSignature => {
            AppError::unauthorized("Invalid token signature")
        }
        _ => AppError::unauthorized(format!("Token validation failed: {}", e)),
    })?;

    if let Some(expected) = expected_type
        && claims.token_type != expected
    {
        return Err(AppError::unauthorized(format!(
            "Invalid token type: expected {:?}, got {:?}",
            expected, claims.token_type
        )));
    }

    Ok(claims)
}

pub fn validate_access_token(token: &str, secret: &str) -> AppResult<Claims> {
    validate_token(token, secret, Some(TokenType::Access))
}

pub fn validate_refresh_token(token: &str, secret: &str) -> AppResult<Claims> {
    validate_token(token, secret, Some(TokenType::Refresh))
}

#[cfg(test)]
mod tests {
    use super::*;

    const TEST_SECRET: &str = "test_secret_key_for_jwt_testing_0123456789";

    fn config() -> JwtConfig {
        JwtConfig {
            secret: TEST_SECRET.to_string(),
            access_token_expiration: 1,
            refresh_token_expiration: 168,
        }
    }

    #[test]
    fn test_generate_token_pair() {
        let pair = generate_token_pair(1, "amina@example.com", "Amina", &config()).unwrap();
        assert!(!pair.access_token.is_empty());
        assert_ne!(pair.access_token, pair.refresh_token);

        let access = validate_access_token(&pair.access_token, TEST_SECRET).unwrap();
        assert_eq!(access.sub, "1");
        assert_eq!(access.name, "Amina");
        assert_eq!(access.user_id().unwrap(), 1);

        let refresh = validate_refresh_token(&pair.refresh_token, TEST_SECRET).unwrap();
        assert_eq!(refresh.token_type, TokenType::Refresh);
        assert!(refresh.exp > access.exp);
    }

    #[test]
    fn test_validate_wrong_token_type() {
        let pair = generate_token_pair(1, "amina@example.com", "Amina", &config()).unwrap();

        match validate_refresh_token(&pair.access_token, TEST_SECRET) {
            Err(AppError::Unauthorized { message }) => {
                assert!(message.contains("Invalid token type"))
            }
            other => panic!("Expected Unauthorized error, got {:?}", other),
        }
    }

    #[test]
    fn test_validate_token_invalid_secret() {
        let token = generate_token(
            1,
            "amina@example.com".to_string(),
            "Amina".to_string(),
            TokenType::Access,
            TEST_SECRET,
            24,
        )
        .unwrap();

        match validate_token(&token, "another_secret_that_is_long_enough_0000", None) {
            Err(AppError::Unauthorized { message }) => assert!(message.contains("signature")),
            other => panic!("Expected Unauthorized error, got {:?}", other),
        }
    }

    #[test]
    fn test_validate_token_garbage() {
        assert!(matches!(
            validate_token("invalid.token.format", TEST_SECRET, None),
            Err(AppError::Unauthorized { .. })
        ));
    }

    #[test]
    fn test_expired_token() {
        let token = generate_token(
            1,
            "amina@example.com".to_string(),
            "Amina".to_string(),
            TokenType::Access,
            TEST_SECRET,
            -1,
        )
        .unwrap();

        match validate_token(&token, TEST_SECRET, None) {
            Err(AppError::Unauthorized { message }) => assert!(message.contains("expired")),
            other => panic!("Expected Unauthorized error, got {:?}", other),
        }
    }

    #[test]
    fn test_claims_user_id_rejects_non_numeric_subject() {
        let mut claims = Claims::new(
            42,
            "amina@example.com".to_string(),
            "Amina".to_string(),
            TokenType::Access,
            1,
        );
        assert_eq!(claims.user_id().unwrap(), 42);

        claims.sub = "not-a-number".to_string();
        assert!(claims.user_id().is_err());
    }

    #[test]
    fn test_token_type_serialization() {
        let claims = Claims::new(
            1,
            "amina@example.com".to_string(),
            "Amina".to_string(),
            TokenType::Refresh,
            168,
        );
        let json = serde_json::to_string(&claims).unwrap();
        assert!(json.contains("\"token_type\":\"refresh\""));
    }
}
