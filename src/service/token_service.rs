use crate::config::jwt::JwtConfig;
use crate::error::token_error::TokenError;
use chrono::{Duration, Utc};
use jsonwebtoken::{decode, encode, Algorithm, DecodingKey, EncodingKey, Header, Validation};
use serde::{Deserialize, Serialize};

/// Claims carried by both token channels: the user id plus the standard
/// issued-at and expiry timestamps.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct TokenClaims {
    pub id: i64,
    pub iat: i64,
    pub exp: i64,
}

/// Stateless issuer/verifier for both token channels. Secrets are injected
/// at construction; nothing here reads ambient configuration.
#[derive(Clone)]
pub struct TokenService {
    config: JwtConfig,
}

impl TokenService {
    pub fn new(config: JwtConfig) -> Self {
        Self { config }
    }

    /// Short-lived bearer credential signed with the access secret.
    pub fn issue_access(&self, user_id: i64) -> Result<String, TokenError> {
        let now = Utc::now();
        let claims = TokenClaims {
            id: user_id,
            iat: now.timestamp(),
            exp: (now + Duration::minutes(self.config.access_ttl_minutes)).timestamp(),
        };
        sign(&claims, &self.config.access_secret)
    }

    /// Longer-lived credential signed with the distinct refresh secret.
    pub fn issue_refresh(&self, user_id: i64) -> Result<String, TokenError> {
        let now = Utc::now();
        let claims = TokenClaims {
            id: user_id,
            iat: now.timestamp(),
            exp: (now + Duration::days(self.config.refresh_ttl_days)).timestamp(),
        };
        sign(&claims, &self.config.refresh_secret)
    }

    pub fn verify_access(&self, token: &str) -> Result<TokenClaims, TokenError> {
        verify(token, &self.config.access_secret)
    }

    pub fn verify_refresh(&self, token: &str) -> Result<TokenClaims, TokenError> {
        verify(token, &self.config.refresh_secret)
    }

    /// Read a token's payload without checking its signature or expiry.
    ///
    /// Used where the claims are only a hint (the refresh protocol's old
    /// access token) or where we just minted the token ourselves and only
    /// need its expiry claim back.
    pub fn decode_unverified(&self, token: &str) -> Result<TokenClaims, TokenError> {
        let mut validation = Validation::new(Algorithm::HS256);
        validation.insecure_disable_signature_validation();
        validation.validate_exp = false;

        decode::<TokenClaims>(token, &DecodingKey::from_secret(&[]), &validation)
            .map(|data| data.claims)
            .map_err(|err| match err.kind() {
                jsonwebtoken::errors::ErrorKind::Json(_)
                | jsonwebtoken::errors::ErrorKind::MissingRequiredClaim(_) => {
                    TokenError::MissingExpiry
                }
                _ => TokenError::Invalid,
            })
    }
}

fn sign(claims: &TokenClaims, secret: &str) -> Result<String, TokenError> {
    encode(
        &Header::default(),
        claims,
        &EncodingKey::from_secret(secret.as_ref()),
    )
    .map_err(|e| TokenError::CreationFailed(e.to_string()))
}

fn verify(token: &str, secret: &str) -> Result<TokenClaims, TokenError> {
    let mut validation = Validation::new(Algorithm::HS256);
    validation.validate_exp = true;
    validation.leeway = 30;

    decode::<TokenClaims>(token, &DecodingKey::from_secret(secret.as_ref()), &validation)
        .map(|data| data.claims)
        .map_err(|err| match err.kind() {
            jsonwebtoken::errors::ErrorKind::ExpiredSignature => TokenError::Expired,
            _ => TokenError::Invalid,
        })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn test_config() -> JwtConfig {
        JwtConfig {
            access_secret: "access-secret-for-tests".to_string(),
            refresh_secret: "refresh-secret-for-tests".to_string(),
            access_ttl_minutes: 10,
            refresh_ttl_days: 7,
        }
    }

    #[test]
    fn refresh_round_trip_recovers_id_and_expiry() {
        let service = TokenService::new(test_config());
        let issued_at = Utc::now().timestamp();
        let token = service.issue_refresh(42).unwrap();

        let claims = service.decode_unverified(&token).unwrap();
        assert_eq!(claims.id, 42);

        // Expiry lands 7 days ahead of issuance, within a second
        let expected = issued_at + 7 * 24 * 3600;
        assert!((claims.exp - expected).abs() <= 1);
    }

    #[test]
    fn access_token_expires_in_ten_minutes() {
        let service = TokenService::new(test_config());
        let token = service.issue_access(7).unwrap();
        let claims = service.decode_unverified(&token).unwrap();
        assert_eq!(claims.exp - claims.iat, 10 * 60);
    }

    #[test]
    fn channels_use_distinct_secrets() {
        let service = TokenService::new(test_config());
        let access = service.issue_access(1).unwrap();
        let refresh = service.issue_refresh(1).unwrap();

        assert!(service.verify_access(&access).is_ok());
        assert!(service.verify_refresh(&refresh).is_ok());
        assert_eq!(service.verify_refresh(&access), Err(TokenError::Invalid));
        assert_eq!(service.verify_access(&refresh), Err(TokenError::Invalid));
    }

    #[test]
    fn expired_refresh_token_is_rejected() {
        let config = test_config();
        let service = TokenService::new(config.clone());
        let now = Utc::now().timestamp();
        let claims = TokenClaims {
            id: 1,
            iat: now - 7200,
            exp: now - 3600,
        };
        let token = sign(&claims, &config.refresh_secret).unwrap();
        assert_eq!(service.verify_refresh(&token), Err(TokenError::Expired));
    }

    #[test]
    fn unverified_decode_ignores_signature_and_expiry() {
        let service = TokenService::new(test_config());
        let now = Utc::now().timestamp();
        let claims = TokenClaims {
            id: 9,
            iat: now - 7200,
            exp: now - 3600,
        };
        // Signed under a foreign secret and already expired; the payload is
        // still readable.
        let token = sign(&claims, "someone-elses-secret").unwrap();
        let decoded = service.decode_unverified(&token).unwrap();
        assert_eq!(decoded.id, 9);
        assert_eq!(decoded.exp, now - 3600);
    }

    #[test]
    fn token_without_expiry_claim_is_malformed() {
        #[derive(Serialize)]
        struct BareClaims {
            id: i64,
        }
        let token = encode(
            &Header::default(),
            &BareClaims { id: 1 },
            &EncodingKey::from_secret(b"whatever"),
        )
        .unwrap();

        let service = TokenService::new(test_config());
        assert_eq!(service.decode_unverified(&token), Err(TokenError::MissingExpiry));
    }

    #[test]
    fn garbage_token_is_invalid() {
        let service = TokenService::new(test_config());
        assert_eq!(service.decode_unverified("not-a-jwt"), Err(TokenError::Invalid));
        assert_eq!(service.verify_access("not-a-jwt"), Err(TokenError::Invalid));
    }
}
