pub(crate) mod auth_handler;
pub(crate) mod category_handler;
pub(crate) mod favourite_handler;
pub(crate) mod home_handler;
pub(crate) mod product_handler;
pub(crate) mod user_handler;
