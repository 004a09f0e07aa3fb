use crate::dto::favourite_dto::FavouriteReadDto;
use crate::entity::user::User;
use crate::error::ApiError;
use crate::repository::favourite_repository::FavouriteRepositoryTrait;
use crate::repository::product_repository::ProductRepositoryTrait;
use crate::response::envelope::SuccessResponse;
use crate::state::catalog_state::CatalogState;
use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Extension;

pub async fn add(
    State(state): State<CatalogState>,
    Extension(user): Extension<User>,
    Path(product_id): Path<i64>,
) -> Result<SuccessResponse<FavouriteReadDto>, ApiError> {
    let product = state
        .product_repo
        .find(product_id)
        .await?
        .ok_or(ApiError::NotFound {
            resource: "Product",
        })?;

    let favourite = state.favourite_repo.add(user.id, product_id).await?;

    Ok(SuccessResponse::send(FavouriteReadDto {
        id: favourite.id,
        product_id: product.id,
        name: product.name,
        price: product.price,
        category_id: product.category_id,
        category_title: product.category_title,
    })
    .with_status(StatusCode::CREATED))
}

pub async fn find_all(
    State(state): State<CatalogState>,
    Extension(user): Extension<User>,
) -> Result<SuccessResponse<Vec<FavouriteReadDto>>, ApiError> {
    let favourites = state.favourite_repo.find_all_by_user(user.id).await?;
    Ok(SuccessResponse::send(favourites))
}

pub async fn delete(
    State(state): State<CatalogState>,
    Extension(user): Extension<User>,
    Path(product_id): Path<i64>,
) -> Result<SuccessResponse<serde_json::Value>, ApiError> {
    let deleted = state.favourite_repo.delete(user.id, product_id).await?;
    if deleted == 0 {
        return Err(ApiError::NotFound {
            resource: "Favourite",
        });
    }
    Ok(SuccessResponse::send(
        serde_json::json!({ "deleted": product_id }),
    ))
}
