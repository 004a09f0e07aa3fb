use crate::config::database::Database;
use crate::dto::user_dto::{RegistrationDto, UpdateUserDto, UserReadDto};
use crate::entity::user::User;
use crate::error::ApiError;
use crate::repository::user_repository::{UserRepository, UserRepositoryTrait};
use axum::http::StatusCode;
use std::sync::Arc;
use tracing::info;
use uuid::Uuid;

#[derive(Clone)]
pub struct UserService {
    user_repo: UserRepository,
    bcrypt_cost: u32,
}

impl UserService {
    pub fn new(db_conn: &Arc<Database>, bcrypt_cost: u32) -> Self {
        Self {
            user_repo: UserRepository::new(db_conn),
            bcrypt_cost,
        }
    }

    pub async fn register(&self, payload: RegistrationDto) -> Result<UserReadDto, ApiError> {
        let password_hash = bcrypt::hash(&payload.password, self.bcrypt_cost)
            .map_err(|e| ApiError::Unknown(format!("Password hashing failed: {}", e)))?;
        let activation_link = Uuid::new_v4().to_string();

        let user = self
            .user_repo
            .create(
                &payload.email,
                &password_hash,
                &payload.fullname,
                &payload.birth,
                &activation_link,
            )
            .await?;
        info!("Registered user ID: {}", user.id);
        Ok(user.into())
    }

    pub async fn all(&self) -> Result<Vec<UserReadDto>, ApiError> {
        let users = self.user_repo.all().await?;
        Ok(users.into_iter().map(UserReadDto::from).collect())
    }

    pub async fn find_by_id(&self, id: i64) -> Result<UserReadDto, ApiError> {
        match self.user_repo.find(id).await {
            Ok(user) => Ok(user.into()),
            Err(sqlx::Error::RowNotFound) => Err(ApiError::NotFound { resource: "User" }),
            Err(e) => Err(e.into()),
        }
    }

    pub async fn update(&self, id: i64, payload: UpdateUserDto) -> Result<UserReadDto, ApiError> {
        let password_hash = match &payload.password {
            Some(password) => Some(
                bcrypt::hash(password, self.bcrypt_cost)
                    .map_err(|e| ApiError::Unknown(format!("Password hashing failed: {}", e)))?,
            ),
            None => None,
        };

        let user = self
            .user_repo
            .update(
                id,
                payload.fullname.as_deref(),
                payload.birth.as_deref(),
                password_hash.as_deref(),
            )
            .await?;
        Ok(user.into())
    }

    /// Flip the verified flag once the user presents their activation link.
    pub async fn verify(&self, user: &User, activation_link: &str) -> Result<UserReadDto, ApiError> {
        if user.verified {
            return Err(ApiError::Http {
                status: StatusCode::CONFLICT,
                message: "User already verified".to_string(),
            });
        }
        if activation_link != user.activation_link {
            return Err(ApiError::Http {
                status: StatusCode::CONFLICT,
                message: "Activation link incorrect".to_string(),
            });
        }
        let updated = self.user_repo.mark_verified(user.id).await?;
        info!("Verified user ID: {}", updated.id);
        Ok(updated.into())
    }
}
