use crate::dto::category_dto::{CategoryReadDto, CreateCategoryDto};
use crate::entity::category::Category;
use crate::error::request_error::ValidatedRequest;
use crate::error::ApiError;
use crate::repository::category_repository::CategoryRepositoryTrait;
use crate::repository::product_repository::ProductRepositoryTrait;
use crate::response::envelope::SuccessResponse;
use crate::state::catalog_state::CatalogState;
use axum::extract::{Path, State};
use axum::http::StatusCode;

pub async fn create(
    State(state): State<CatalogState>,
    ValidatedRequest(payload): ValidatedRequest<CreateCategoryDto>,
) -> Result<SuccessResponse<Category>, ApiError> {
    let category = state.category_repo.create(&payload.title).await?;
    Ok(SuccessResponse::send(category).with_status(StatusCode::CREATED))
}

/// Categories with their products nested, one query per category.
pub async fn find_all(
    State(state): State<CatalogState>,
) -> Result<SuccessResponse<Vec<CategoryReadDto>>, ApiError> {
    let categories = state.category_repo.find_all().await?;

    let mut result = Vec::with_capacity(categories.len());
    for category in categories {
        let products = state.product_repo.find_by_category(category.id).await?;
        result.push(CategoryReadDto {
            id: category.id,
            title: category.title,
            products,
        });
    }

    Ok(SuccessResponse::send(result))
}

pub async fn delete(
    State(state): State<CatalogState>,
    Path(id): Path<i64>,
) -> Result<SuccessResponse<serde_json::Value>, ApiError> {
    let deleted = state.category_repo.delete(id).await?;
    if deleted == 0 {
        return Err(ApiError::NotFound {
            resource: "Category",
        });
    }
    Ok(SuccessResponse::send(serde_json::json!({ "deleted": id })))
}
