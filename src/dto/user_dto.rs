use crate::entity::user::User;
use serde::{Deserialize, Serialize};
use validator::Validate;

#[derive(Clone, Serialize, Deserialize, Validate)]
pub struct RegistrationDto {
    #[validate(email(message = "email must be an email"))]
    pub email: String,
    #[validate(length(min = 1, message = "fullname must be a string"))]
    pub fullname: String,
    #[validate(length(min = 1, message = "birth must be a string"))]
    pub birth: String,
    #[validate(length(min = 8, message = "password must be longer than or equal to 8 characters"))]
    pub password: String,
}

#[derive(Clone, Serialize, Deserialize, Validate)]
pub struct UpdateUserDto {
    pub fullname: Option<String>,
    pub birth: Option<String>,
    #[validate(length(min = 8, message = "password must be longer than or equal to 8 characters"))]
    pub password: Option<String>,
}

/// Public view of a user: the password hash and activation link never leave
/// the service layer.
#[derive(Clone, Debug, Deserialize, Serialize)]
pub struct UserReadDto {
    pub id: i64,
    pub email: String,
    pub fullname: String,
    pub birth: String,
    pub verified: bool,
}

impl From<User> for UserReadDto {
    fn from(model: User) -> UserReadDto {
        Self {
            id: model.id,
            email: model.email,
            fullname: model.fullname,
            birth: model.birth,
            verified: model.verified,
        }
    }
}

impl std::fmt::Debug for RegistrationDto {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RegistrationDto")
            .field("email", &self.email)
            .field("fullname", &self.fullname)
            .finish()
    }
}
