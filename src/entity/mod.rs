pub(crate) mod category;
pub(crate) mod favourite;
pub(crate) mod product;
pub(crate) mod refresh_token;
pub(crate) mod user;
