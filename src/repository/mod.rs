pub(crate) mod category_repository;
pub(crate) mod favourite_repository;
pub(crate) mod product_repository;
pub(crate) mod refresh_token_repository;
pub(crate) mod user_repository;
