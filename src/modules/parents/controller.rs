use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
};
use tracing::instrument;

use crate::middleware::auth::AuthUser;
use crate::modules::parents::model::{CreateParentDto, Parent, UpdateParentDto};
use crate::modules::parents::service::ParentService;
use crate::state::AppState;
use crate::utils::errors::AppError;
use crate::utils::update::UpdateMode;
use crate::validator::ValidatedJson;

#[utoipa::path(
    post,
    path = "/api/parents",
    request_body = CreateParentDto,
    responses(
        (status = 201, description = "Parent created", body = Parent),
        (status = 400, description = "Duplicate phone number"),
        (status = 401, description = "Unauthorized"),
        (status = 422, description = "Validation error")
    ),
    tag = "Parents",
    security(("bearer_auth" = []))
)]
#[instrument(skip(state))]
pub async fn create_parent(
    State(state): State<AppState>,
    _auth: AuthUser,
    ValidatedJson(dto): ValidatedJson<CreateParentDto>,
) -> Result<(StatusCode, Json<Parent>), AppError> {
    let parent = ParentService::create_parent(&state.db, dto).await?;

    Ok((StatusCode::CREATED, Json(parent)))
}

#[utoipa::path(
    get,
    path = "/api/parents",
    responses(
        (status = 200, description = "List of active parents", body = Vec<Parent>),
        (status = 401, description = "Unauthorized")
    ),
    tag = "Parents",
    security(("bearer_auth" = []))
)]
#[instrument(skip(state))]
pub async fn get_parents(
    State(state): State<AppState>,
    _auth: AuthUser,
) -> Result<Json<Vec<Parent>>, AppError> {
    let parents = ParentService::get_parents(&state.db).await?;

    Ok(Json(parents))
}

#[utoipa::path(
    get,
    path = "/api/parents/{id}",
    params(("id" = i64, Path, description = "Parent ID")),
    responses(
        (status = 200, description = "Parent details", body = Parent),
        (status = 401, description = "Unauthorized"),
        (status = 404, description = "Parent not found or deleted")
    ),
    tag = "Parents",
    security(("bearer_auth" = []))
)]
#[instrument(skip(state))]
pub async fn get_parent_by_id(
    State(state): State<AppState>,
    _auth: AuthUser,
    Path(id): Path<i64>,
) -> Result<Json<Parent>, AppError> {
    let parent = ParentService::get_parent_by_id(&state.db, id).await?;

    Ok(Json(parent))
}

#[utoipa::path(
    put,
    path = "/api/parents/{id}",
    params(("id" = i64, Path, description = "Parent ID")),
    request_body = UpdateParentDto,
    responses(
        (status = 200, description = "Parent updated", body = Parent),
        (status = 400, description = "Missing required field or duplicate phone number"),
        (status = 401, description = "Unauthorized"),
        (status = 404, description = "Parent not found or deleted")
    ),
    tag = "Parents",
    security(("bearer_auth" = []))
)]
#[instrument(skip(state))]
pub async fn update_parent_full(
    State(state): State<AppState>,
    _auth: AuthUser,
    Path(id): Path<i64>,
    ValidatedJson(dto): ValidatedJson<UpdateParentDto>,
) -> Result<Json<Parent>, AppError> {
    let parent = ParentService::update_parent(&state.db, id, dto, UpdateMode::Full).await?;

    Ok(Json(parent))
}

#[utoipa::path(
    patch,
    path = "/api/parents/{id}",
    params(("id" = i64, Path, description = "Parent ID")),
    request_body = UpdateParentDto,
    responses(
        (status = 200, description = "Parent updated", body = Parent),
        (status = 400, description = "Duplicate phone number"),
        (status = 401, description = "Unauthorized"),
        (status = 404, description = "Parent not found or deleted")
    ),
    tag = "Parents",
    security(("bearer_auth" = []))
)]
#[instrument(skip(state))]
pub async fn update_parent_partial(
    State(state): State<AppState>,
    _auth: AuthUser,
    Path(id): Path<i64>,
    ValidatedJson(dto): ValidatedJson<UpdateParentDto>,
) -> Result<Json<Parent>, AppError> {
    let parent = ParentService::update_parent(&state.db, id, dto, UpdateMode::Partial).await?;

    Ok(Json(parent))
}

#[utoipa::path(
    delete,
    path = "/api/parents/{id}",
    params(("id" = i64, Path, description = "Parent ID")),
    responses(
        (status = 204, description = "Parent soft-deleted along with its active students"),
        (status = 401, description = "Unauthorized"),
        (status = 404, description = "Parent not found or already deleted")
    ),
    tag = "Parents",
    security(("bearer_auth" = []))
)]
#[instrument(skip(state))]
pub async fn delete_parent(
    State(state): State<AppState>,
    _auth: AuthUser,
    Path(id): Path<i64>,
) -> Result<StatusCode, AppError> {
    ParentService::delete_parent(&state.db, id).await?;

    Ok(StatusCode::NO_CONTENT)
}

#[utoipa::path(
    post,
    path = "/api/parents/{id}/restore",
    params(("id" = i64, Path, description = "Parent ID")),
    responses(
        (status = 200, description = "Parent restored along with its eligible students", body = Parent),
        (status = 401, description = "Unauthorized"),
        (status = 404, description = "Parent never existed")
    ),
    tag = "Parents",
    security(("bearer_auth" = []))
)]
#[instrument(skip(state))]
pub async fn restore_parent(
    State(state): State<AppState>,
    _auth: AuthUser,
    Path(id): Path<i64>,
) -> Result<Json<Parent>, AppError> {
    let parent = ParentService::restore_parent(&state.db, id).await?;

    Ok(Json(parent))
}
