pub(crate) mod database;
pub(crate) mod jwt;
pub(crate) mod parameter;
