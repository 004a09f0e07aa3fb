use crate::dto::product_dto::{CreateProductDto, ProductReadDto, UpdateProductDto};
use crate::entity::product::Product;
use crate::error::request_error::ValidatedRequest;
use crate::error::ApiError;
use crate::repository::product_repository::ProductRepositoryTrait;
use crate::response::envelope::SuccessResponse;
use crate::state::catalog_state::CatalogState;
use axum::extract::{Path, State};
use axum::http::StatusCode;

pub async fn create(
    State(state): State<CatalogState>,
    ValidatedRequest(payload): ValidatedRequest<CreateProductDto>,
) -> Result<SuccessResponse<Product>, ApiError> {
    let product = state.product_repo.create(&payload).await?;
    Ok(SuccessResponse::send(product).with_status(StatusCode::CREATED))
}

pub async fn find_all(
    State(state): State<CatalogState>,
) -> Result<SuccessResponse<Vec<ProductReadDto>>, ApiError> {
    let products = state.product_repo.find_all().await?;
    Ok(SuccessResponse::send(products))
}

pub async fn find_one(
    State(state): State<CatalogState>,
    Path(id): Path<i64>,
) -> Result<SuccessResponse<ProductReadDto>, ApiError> {
    let product = state
        .product_repo
        .find(id)
        .await?
        .ok_or(ApiError::NotFound {
            resource: "Product",
        })?;
    Ok(SuccessResponse::send(product))
}

pub async fn update(
    State(state): State<CatalogState>,
    Path(id): Path<i64>,
    ValidatedRequest(payload): ValidatedRequest<UpdateProductDto>,
) -> Result<SuccessResponse<ProductReadDto>, ApiError> {
    if state.product_repo.find(id).await?.is_none() {
        return Err(ApiError::NotFound {
            resource: "Product",
        });
    }

    let product = state.product_repo.update(id, &payload).await?;
    Ok(SuccessResponse::send(product))
}

pub async fn delete(
    State(state): State<CatalogState>,
    Path(id): Path<i64>,
) -> Result<SuccessResponse<serde_json::Value>, ApiError> {
    let deleted = state.product_repo.delete(id).await?;
    if deleted == 0 {
        return Err(ApiError::NotFound {
            resource: "Product",
        });
    }
    Ok(SuccessResponse::send(serde_json::json!({ "deleted": id })))
}
