use crate::dto::user_dto::{RegistrationDto, UpdateUserDto, UserReadDto};
use crate::entity::user::User;
use crate::error::request_error::ValidatedRequest;
use crate::error::ApiError;
use crate::response::envelope::SuccessResponse;
use crate::state::user_state::UserState;
use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Extension;

pub async fn registration(
    State(state): State<UserState>,
    ValidatedRequest(payload): ValidatedRequest<RegistrationDto>,
) -> Result<SuccessResponse<UserReadDto>, ApiError> {
    let user = state.user_service.register(payload).await?;
    Ok(SuccessResponse::send(user).with_status(StatusCode::CREATED))
}

pub async fn all(
    State(state): State<UserState>,
) -> Result<SuccessResponse<Vec<UserReadDto>>, ApiError> {
    let users = state.user_service.all().await?;
    Ok(SuccessResponse::send(users))
}

pub async fn me(Extension(user): Extension<User>) -> SuccessResponse<UserReadDto> {
    SuccessResponse::send(user.into())
}

pub async fn verify(
    State(state): State<UserState>,
    Extension(user): Extension<User>,
    Path(activation_link): Path<String>,
) -> Result<SuccessResponse<UserReadDto>, ApiError> {
    let updated = state.user_service.verify(&user, &activation_link).await?;
    Ok(SuccessResponse::send(updated))
}

pub async fn update_me(
    State(state): State<UserState>,
    Extension(user): Extension<User>,
    ValidatedRequest(payload): ValidatedRequest<UpdateUserDto>,
) -> Result<SuccessResponse<UserReadDto>, ApiError> {
    let updated = state.user_service.update(user.id, payload).await?;
    Ok(SuccessResponse::send(updated))
}

pub async fn find_one(
    State(state): State<UserState>,
    Path(id): Path<i64>,
) -> Result<SuccessResponse<UserReadDto>, ApiError> {
    let user = state.user_service.find_by_id(id).await?;
    Ok(SuccessResponse::send(user))
}
