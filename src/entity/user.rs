use serde::{Deserialize, Serialize};

#[derive(Clone, Deserialize, Serialize, sqlx::FromRow)]
pub struct User {
    pub id: i64,
    pub email: String,
    pub password: String,
    pub fullname: String,
    pub birth: String,
    pub verified: bool,
    pub activation_link: String,
}

impl std::fmt::Debug for User {
    // Never expose the password hash or activation link in logs
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("User")
            .field("id", &self.id)
            .field("email", &self.email)
            .field("fullname", &self.fullname)
            .field("verified", &self.verified)
            .finish()
    }
}
