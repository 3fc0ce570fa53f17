use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    Json,
};
use serde::Deserialize;
use service::product::ProductInput;
use uuid::Uuid;

use crate::{dto::ProductDto, errors::ApiError, state::AppState};

#[derive(Debug, Deserialize, utoipa::IntoParams)]
#[serde(rename_all = "camelCase")]
#[into_params(parameter_in = Query)]
pub struct ProductParams {
    pub name: String,
    pub description: String,
    /// Existing category the product belongs to
    pub category_id: Uuid,
    pub price: f64,
    /// Units in stock
    pub amount: i32,
}

impl From<ProductParams> for ProductInput {
    fn from(p: ProductParams) -> Self {
        ProductInput {
            name: p.name,
            description: p.description,
            category_id: p.category_id,
            price: p.price,
            amount: p.amount,
        }
    }
}

#[utoipa::path(
    get, path = "/product/products", tag = "product",
    responses((status = 200, description = "All products", body = [ProductDto]))
)]
pub async fn find_all(State(state): State<AppState>) -> Result<Json<Vec<ProductDto>>, ApiError> {
    let products = state.products.find_all().await?;
    Ok(Json(products.into_iter().map(ProductDto::from).collect()))
}

#[utoipa::path(
    get, path = "/product/{id}", tag = "product",
    params(("id" = Uuid, Path, description = "Product ID")),
    responses(
        (status = 200, description = "OK", body = ProductDto),
        (status = 400, description = "Product not found")
    )
)]
pub async fn find(State(state): State<AppState>, Path(id): Path<Uuid>) -> Result<Json<ProductDto>, ApiError> {
    Ok(Json(state.products.find(id).await?.into()))
}

#[utoipa::path(
    post, path = "/product", tag = "product",
    params(ProductParams),
    responses(
        (status = 200, description = "Created", body = ProductDto),
        (status = 400, description = "Validation Error or category not found")
    )
)]
pub async fn create(State(state): State<AppState>, Query(params): Query<ProductParams>) -> Result<Json<ProductDto>, ApiError> {
    Ok(Json(state.products.add(params.into()).await?.into()))
}

#[utoipa::path(
    put, path = "/product/{id}", tag = "product",
    params(("id" = Uuid, Path, description = "Product ID"), ProductParams),
    responses(
        (status = 200, description = "Updated", body = ProductDto),
        (status = 400, description = "Not Found or Validation Error")
    )
)]
pub async fn edit(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Query(params): Query<ProductParams>,
) -> Result<Json<ProductDto>, ApiError> {
    Ok(Json(state.products.edit(id, params.into()).await?.into()))
}

#[utoipa::path(
    delete, path = "/product/{id}", tag = "product",
    params(("id" = Uuid, Path, description = "Product ID")),
    responses(
        (status = 200, description = "Deleted"),
        (status = 400, description = "Product not found")
    )
)]
pub async fn delete(State(state): State<AppState>, Path(id): Path<Uuid>) -> Result<StatusCode, ApiError> {
    state.products.delete(id).await?;
    Ok(StatusCode::OK)
}

#[utoipa::path(
    delete, path = "/product", tag = "product",
    responses((status = 200, description = "All products deleted"))
)]
pub async fn delete_all(State(state): State<AppState>) -> Result<StatusCode, ApiError> {
    state.products.delete_all().await?;
    Ok(StatusCode::OK)
}
