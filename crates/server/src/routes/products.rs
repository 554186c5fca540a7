use axum::{extract::{Path, State}, http::Uri, Json};
use serde::{Deserialize, Serialize};
use tracing::info;

use service::product::{Product, ProductDraft};
use crate::{errors::JsonApiError, routes::AppState};

/// Body of `POST /api/products`. A client-sent `id` is accepted and ignored.
#[derive(Debug, Deserialize, Serialize, utoipa::ToSchema)]
pub struct CreateProductInput {
    #[serde(default)]
    pub id: Option<i64>,
    pub name: String,
    pub price: f64,
}

/// Body of `PUT /api/products/{id}`. Product-shaped; only `price` is read.
#[derive(Debug, Deserialize, Serialize, utoipa::ToSchema)]
pub struct UpdatePriceInput {
    #[serde(default)]
    pub id: Option<i64>,
    #[serde(default)]
    pub name: Option<String>,
    pub price: f64,
}

#[utoipa::path(
    post, path = "/api/products", tag = "products",
    request_body = CreateProductInput,
    responses(
        (status = 200, description = "Created", body = crate::openapi::ProductDoc),
        (status = 500, description = "Create Failed")
    )
)]
pub async fn create(State(state): State<AppState>, uri: Uri, Json(input): Json<CreateProductInput>) -> Result<Json<Product>, JsonApiError> {
    let draft = ProductDraft { id: input.id, name: input.name, price: input.price };
    let created = state.products.create_product(draft).await.map_err(|e| JsonApiError::from_service(e, &uri))?;
    Ok(Json(created))
}

#[utoipa::path(
    get, path = "/api/products", tag = "products",
    responses(
        (status = 200, description = "List OK", body = [crate::openapi::ProductDoc]),
        (status = 500, description = "List Failed")
    )
)]
pub async fn list(State(state): State<AppState>, uri: Uri) -> Result<Json<Vec<Product>>, JsonApiError> {
    let all = state.products.get_all_products().await.map_err(|e| JsonApiError::from_service(e, &uri))?;
    info!(count = all.len(), "list products");
    Ok(Json(all))
}

#[utoipa::path(
    get, path = "/api/products/{id}", tag = "products",
    params(("id" = i64, Path, description = "Product ID")),
    responses(
        (status = 200, description = "OK", body = crate::openapi::ProductDoc),
        (status = 500, description = "Product not found")
    )
)]
pub async fn get(State(state): State<AppState>, Path(id): Path<i64>, uri: Uri) -> Result<Json<Product>, JsonApiError> {
    let product = state.products.get_product_by_id(id).await.map_err(|e| JsonApiError::from_service(e, &uri))?;
    Ok(Json(product))
}

#[utoipa::path(
    put, path = "/api/products/{id}", tag = "products",
    params(("id" = i64, Path, description = "Product ID")),
    request_body = UpdatePriceInput,
    responses(
        (status = 200, description = "Updated", body = crate::openapi::ProductDoc),
        (status = 500, description = "Product not found")
    )
)]
pub async fn update(State(state): State<AppState>, Path(id): Path<i64>, uri: Uri, Json(input): Json<UpdatePriceInput>) -> Result<Json<Product>, JsonApiError> {
    let updated = state.products.update_price(id, input.price).await.map_err(|e| JsonApiError::from_service(e, &uri))?;
    Ok(Json(updated))
}
