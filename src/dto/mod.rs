pub(crate) mod auth_dto;
pub(crate) mod category_dto;
pub(crate) mod favourite_dto;
pub(crate) mod product_dto;
pub(crate) mod user_dto;
