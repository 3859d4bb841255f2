use crate::domain::product::{Product, ProductPayload};
use crate::transport::http::error::{parse_product_id, ApiError, ApiResult};
use crate::transport::http::types::{AppState, ErrorResponse, ListProductsQuery, ResultResponse};
use axum::body::Bytes;
use axum::extract::{Path, State};
use axum::http::{StatusCode, Uri};
use axum::Json;

/// Decodes the body as JSON whatever the request's content type says.
fn decode_payload(body: &[u8]) -> ApiResult<ProductPayload> {
    serde_json::from_slice(body).map_err(|e| {
        tracing::debug!(error = %e, "could not decode product payload");
        ApiError::InvalidPayload
    })
}

#[utoipa::path(
    get,
    path = "/products",
    params(ListProductsQuery),
    responses(
        (status = 200, description = "Page of products", body = Vec<Product>),
        (status = 500, description = "Storage error", body = ErrorResponse)
    )
)]
pub async fn list_products_handler(
    State(state): State<AppState>,
    uri: Uri,
) -> ApiResult<Json<Vec<Product>>> {
    let page = ListProductsQuery::from_uri(&uri).page();
    let products = state.product_service.list_products(page).await?;
    tracing::debug!(start = page.start, count = page.count, returned = products.len(), "listed products");
    Ok(Json(products))
}

#[utoipa::path(
    post,
    path = "/product",
    request_body = ProductPayload,
    responses(
        (status = 201, description = "Product created", body = Product),
        (status = 400, description = "Invalid request payload", body = ErrorResponse),
        (status = 500, description = "Storage error", body = ErrorResponse)
    )
)]
pub async fn create_product_handler(
    State(state): State<AppState>,
    body: Bytes,
) -> ApiResult<(StatusCode, Json<Product>)> {
    let payload = decode_payload(&body)?;
    let product = state.product_service.create_product(&payload).await?;
    tracing::info!(id = product.id, "created product");
    Ok((StatusCode::CREATED, Json(product)))
}

#[utoipa::path(
    get,
    path = "/product/{id}",
    params(
        ("id" = i32, Path, description = "Product id (digits only)")
    ),
    responses(
        (status = 200, description = "The product", body = Product),
        (status = 400, description = "Invalid product ID", body = ErrorResponse),
        (status = 404, description = "Product not found", body = ErrorResponse),
        (status = 500, description = "Storage error", body = ErrorResponse)
    )
)]
pub async fn get_product_handler(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> ApiResult<Json<Product>> {
    let id = parse_product_id(&id)?;
    let product = state
        .product_service
        .get_product(id)
        .await
        .map_err(ApiError::from_lookup)?;
    Ok(Json(product))
}

#[utoipa::path(
    put,
    path = "/product/{id}",
    params(
        ("id" = i32, Path, description = "Product id (digits only)")
    ),
    request_body = ProductPayload,
    responses(
        (status = 200, description = "Product updated", body = Product),
        (status = 400, description = "Invalid product ID or payload", body = ErrorResponse),
        (status = 500, description = "Storage error", body = ErrorResponse)
    )
)]
pub async fn update_product_handler(
    State(state): State<AppState>,
    Path(id): Path<String>,
    body: Bytes,
) -> ApiResult<Json<Product>> {
    let id = parse_product_id(&id)?;
    let payload = decode_payload(&body)?;
    let product = state.product_service.update_product(id, payload).await?;
    tracing::info!(id, "updated product");
    Ok(Json(product))
}

#[utoipa::path(
    delete,
    path = "/product/{id}",
    params(
        ("id" = i32, Path, description = "Product id (digits only)")
    ),
    responses(
        (status = 200, description = "Product deleted", body = ResultResponse),
        (status = 400, description = "Invalid product ID", body = ErrorResponse),
        (status = 500, description = "Storage error", body = ErrorResponse)
    )
)]
pub async fn delete_product_handler(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> ApiResult<Json<ResultResponse>> {
    let id = parse_product_id(&id)?;
    state.product_service.delete_product(id).await?;
    tracing::info!(id, "deleted product");
    Ok(Json(ResultResponse::new("success")))
}

/// Wipes the table and restarts id assignment at 1.
#[utoipa::path(
    delete,
    path = "/products",
    responses(
        (status = 200, description = "All products deleted", body = ResultResponse),
        (status = 500, description = "Storage error", body = ErrorResponse)
    )
)]
pub async fn delete_all_products_handler(
    State(state): State<AppState>,
) -> ApiResult<Json<ResultResponse>> {
    state.product_service.delete_all_products().await?;
    tracing::info!("deleted all products and reset id sequence");
    Ok(Json(ResultResponse::new("all products deleted")))
}
