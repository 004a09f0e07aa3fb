pub(crate) mod auth;
pub(crate) mod request_logger;
