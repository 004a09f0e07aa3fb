use crate::config::database::Database;
use crate::dto::auth_dto::TokenPairDto;
use crate::entity::refresh_token::RefreshToken;
use crate::entity::user::User;
use crate::error::auth_error::AuthError;
use crate::error::ApiError;
use crate::repository::refresh_token_repository::{
    RefreshTokenRepository, RefreshTokenRepositoryTrait,
};
use crate::repository::user_repository::{UserRepository, UserRepositoryTrait};
use crate::service::token_service::{TokenClaims, TokenService};
use std::sync::Arc;
use tracing::{info, warn};

#[derive(Clone)]
pub struct AuthService {
    user_repo: UserRepository,
    refresh_token_repo: RefreshTokenRepository,
    token_service: TokenService,
}

impl AuthService {
    pub fn new(db_conn: &Arc<Database>, token_service: TokenService) -> Self {
        Self {
            user_repo: UserRepository::new(db_conn),
            refresh_token_repo: RefreshTokenRepository::new(db_conn),
            token_service,
        }
    }

    /// Check an email/password pair against the stored hash.
    ///
    /// Fails closed: an unknown email, a user without a password and a
    /// verifier error all come back as `None`, indistinguishable from a
    /// wrong password.
    pub async fn validate_credentials(&self, email: &str, password: &str) -> Option<User> {
        let user = self.user_repo.find_by_email(email).await?;
        if user.password.is_empty() {
            return None;
        }
        match bcrypt::verify(password, &user.password) {
            Ok(true) => Some(user),
            Ok(false) => {
                warn!("Invalid password attempt for user ID: {}", user.id);
                None
            }
            Err(e) => {
                warn!("Password verification error: {}", e);
                None
            }
        }
    }

    /// Mint an access/refresh pair for the user and persist the refresh
    /// token. Earlier refresh tokens stay valid; several live rows per user
    /// is the expected steady state.
    pub async fn issue_token_pair(&self, user: &User) -> Result<TokenPairDto, ApiError> {
        let access_token = self.token_service.issue_access(user.id)?;
        let refresh_token = self.token_service.issue_refresh(user.id)?;
        self.persist_refresh(user.id, &refresh_token).await?;
        info!("Issued token pair for user ID: {}", user.id);
        Ok(TokenPairDto {
            access_token,
            refresh_token,
        })
    }

    /// Store a refresh-token row with the expiry lifted from the token's
    /// own claims. The signature is not re-verified; we just minted it.
    pub async fn persist_refresh(
        &self,
        user_id: i64,
        token: &str,
    ) -> Result<RefreshToken, ApiError> {
        let claims = self.token_service.decode_unverified(token)?;
        Ok(self
            .refresh_token_repo
            .create(user_id, token, claims.exp)
            .await?)
    }

    /// The token-refresh protocol. Each gate rejects with a typed error;
    /// everything else propagates to the normalizer untouched.
    pub async fn refresh(
        &self,
        authorization: Option<&str>,
        refresh_token: Option<&str>,
    ) -> Result<TokenPairDto, ApiError> {
        // START: both inputs must be present
        let submitted = submitted_refresh_token(refresh_token)?;
        let old_access = bearer_token(authorization)?;

        // HEADER_CHECKED -> REFRESH_VERIFIED: the submitted token must hold
        // up under the refresh secret, signature and expiry included
        self.token_service
            .verify_refresh(submitted)
            .map_err(|_| AuthError::InvalidOrExpiredRefreshToken)?;

        // REFRESH_VERIFIED -> OWNER_MATCHED: the old access token is decoded
        // without verification; only its claimed user id matters. The real
        // check is that this user owns a stored row with this exact token.
        let claims = claimed_owner(&self.token_service, old_access)?;
        let user = self
            .user_repo
            .find_by_id_and_refresh_token(claims.id, submitted)
            .await
            .ok_or(AuthError::TokenOwnerMismatch)?;

        // OWNER_MATCHED -> REISSUED: new pair, new row. The presented row is
        // intentionally left in place; there is no rotation.
        self.issue_token_pair(&user).await
    }
}

fn submitted_refresh_token(refresh_token: Option<&str>) -> Result<&str, AuthError> {
    match refresh_token {
        Some(token) if !token.is_empty() => Ok(token),
        _ => Err(AuthError::MissingRefreshToken),
    }
}

/// Claims hinted by the old access token. The token is caller-supplied, so
/// every decode failure is an unauthorized request, not an internal fault;
/// `MissingExpiry` stays internal-only for tokens we minted ourselves.
fn claimed_owner(
    token_service: &TokenService,
    old_access: &str,
) -> Result<TokenClaims, AuthError> {
    token_service
        .decode_unverified(old_access)
        .map_err(|_| AuthError::Unauthorized)
}

fn bearer_token(authorization: Option<&str>) -> Result<&str, AuthError> {
    let header = authorization.ok_or(AuthError::MissingAuthHeader)?;
    header
        .strip_prefix("Bearer ")
        .filter(|token| !token.is_empty())
        .ok_or(AuthError::MissingAuthHeader)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::jwt::JwtConfig;
    use axum::http::StatusCode;

    fn test_token_service() -> TokenService {
        TokenService::new(JwtConfig {
            access_secret: "access-secret-for-tests".to_string(),
            refresh_secret: "refresh-secret-for-tests".to_string(),
            access_ttl_minutes: 10,
            refresh_ttl_days: 7,
        })
    }

    #[test]
    fn undecodable_old_access_token_is_unauthorized() {
        let service = test_token_service();

        // Structurally valid JWT whose payload carries none of our claims
        #[derive(serde::Serialize)]
        struct ForeignClaims {
            sub: String,
        }
        let foreign = jsonwebtoken::encode(
            &jsonwebtoken::Header::default(),
            &ForeignClaims {
                sub: "x".to_string(),
            },
            &jsonwebtoken::EncodingKey::from_secret(b"whatever"),
        )
        .unwrap();

        let err = claimed_owner(&service, &foreign).unwrap_err();
        assert_eq!(err, AuthError::Unauthorized);
        let normalized = ApiError::Auth(err).normalize();
        assert_eq!(normalized.status, StatusCode::UNAUTHORIZED);
        assert_eq!(normalized.code, 1008);

        assert_eq!(
            claimed_owner(&service, "not-a-jwt"),
            Err(AuthError::Unauthorized)
        );
    }

    #[test]
    fn missing_refresh_token_fails_the_first_gate() {
        assert_eq!(
            submitted_refresh_token(None),
            Err(AuthError::MissingRefreshToken)
        );
        assert_eq!(
            submitted_refresh_token(Some("")),
            Err(AuthError::MissingRefreshToken)
        );
        assert_eq!(submitted_refresh_token(Some("tok")), Ok("tok"));
    }

    #[test]
    fn bearer_scheme_is_required() {
        assert_eq!(bearer_token(None), Err(AuthError::MissingAuthHeader));
        assert_eq!(bearer_token(Some("Basic abc")), Err(AuthError::MissingAuthHeader));
        assert_eq!(bearer_token(Some("Bearer ")), Err(AuthError::MissingAuthHeader));
        assert_eq!(bearer_token(Some("Bearer abc.def.ghi")), Ok("abc.def.ghi"));
    }
}
