pub(crate) mod auth_state;
pub(crate) mod catalog_state;
pub(crate) mod token_state;
pub(crate) mod user_state;
