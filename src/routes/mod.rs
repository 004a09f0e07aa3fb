pub(crate) mod auth;
pub(crate) mod categories;
pub(crate) mod favourites;
pub(crate) mod products;
pub(crate) mod root;
pub(crate) mod users;
