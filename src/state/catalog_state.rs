use crate::config::database::Database;
use crate::repository::category_repository::{CategoryRepository, CategoryRepositoryTrait};
use crate::repository::favourite_repository::{FavouriteRepository, FavouriteRepositoryTrait};
use crate::repository::product_repository::{ProductRepository, ProductRepositoryTrait};
use std::sync::Arc;

#[derive(Clone)]
pub struct CatalogState {
    pub(crate) product_repo: ProductRepository,
    pub(crate) category_repo: CategoryRepository,
    pub(crate) favourite_repo: FavouriteRepository,
}

impl CatalogState {
    pub fn new(db_conn: &Arc<Database>) -> Self {
        Self {
            product_repo: ProductRepository::new(db_conn),
            category_repo: CategoryRepository::new(db_conn),
            favourite_repo: FavouriteRepository::new(db_conn),
        }
    }
}
