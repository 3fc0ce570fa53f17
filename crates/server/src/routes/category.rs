use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    Json,
};
use serde::Deserialize;
use uuid::Uuid;

use crate::{dto::CategoryDto, errors::ApiError, state::AppState};

#[derive(Debug, Deserialize, utoipa::IntoParams)]
#[into_params(parameter_in = Query)]
pub struct CategoryParams {
    /// Category name, must not be blank
    pub name: String,
}

#[utoipa::path(
    get, path = "/category/categories", tag = "category",
    responses((status = 200, description = "All categories", body = [CategoryDto]))
)]
pub async fn find_all(State(state): State<AppState>) -> Result<Json<Vec<CategoryDto>>, ApiError> {
    let categories = state.categories.find_all().await?;
    Ok(Json(categories.into_iter().map(CategoryDto::from).collect()))
}

#[utoipa::path(
    get, path = "/category/{id}", tag = "category",
    params(("id" = Uuid, Path, description = "Category ID")),
    responses(
        (status = 200, description = "OK", body = CategoryDto),
        (status = 400, description = "Category not found")
    )
)]
pub async fn find(State(state): State<AppState>, Path(id): Path<Uuid>) -> Result<Json<CategoryDto>, ApiError> {
    Ok(Json(state.categories.find(id).await?.into()))
}

#[utoipa::path(
    post, path = "/category", tag = "category",
    params(CategoryParams),
    responses(
        (status = 200, description = "Created", body = CategoryDto),
        (status = 400, description = "Validation Error")
    )
)]
pub async fn create(State(state): State<AppState>, Query(params): Query<CategoryParams>) -> Result<Json<CategoryDto>, ApiError> {
    Ok(Json(state.categories.add(&params.name).await?.into()))
}

#[utoipa::path(
    put, path = "/category/{id}", tag = "category",
    params(("id" = Uuid, Path, description = "Category ID"), CategoryParams),
    responses(
        (status = 200, description = "Updated", body = CategoryDto),
        (status = 400, description = "Not Found or Validation Error")
    )
)]
pub async fn edit(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Query(params): Query<CategoryParams>,
) -> Result<Json<CategoryDto>, ApiError> {
    Ok(Json(state.categories.edit(id, &params.name).await?.into()))
}

#[utoipa::path(
    delete, path = "/category/{id}", tag = "category",
    params(("id" = Uuid, Path, description = "Category ID")),
    responses(
        (status = 200, description = "Deleted together with its products"),
        (status = 400, description = "Category not found")
    )
)]
pub async fn delete(State(state): State<AppState>, Path(id): Path<Uuid>) -> Result<StatusCode, ApiError> {
    state.categories.delete(id).await?;
    Ok(StatusCode::OK)
}

#[utoipa::path(
    delete, path = "/category", tag = "category",
    responses((status = 200, description = "All categories and products deleted"))
)]
pub async fn delete_all(State(state): State<AppState>) -> Result<StatusCode, ApiError> {
    state.categories.delete_all().await?;
    Ok(StatusCode::OK)
}
