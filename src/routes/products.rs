use axum::{
    Json, Router,
    extract::State,
    routing::get,
};
use uuid::Uuid;

use crate::{
    dto::products::{CreateProductRequest, ProductList, UpdateProductRequest},
    error::{AppResult, ErrorData},
    extract::{AppJson, AppPath},
    models::Product,
    response::{ApiResponse, NoData},
    services::product_service,
    state::AppState,
};

// POST takes a supplier id in the same segment the other methods use for the
// product id; the router needs a single parameter name per path.
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(list_products))
        .route(
            "/{id}",
            get(get_product)
                .post(create_product)
                .put(update_product)
                .delete(delete_product),
        )
}

#[utoipa::path(
    get,
    path = "/product",
    responses(
        (status = 200, description = "List products", body = ApiResponse<ProductList>)
    ),
    tag = "Products"
)]
pub async fn list_products(
    State(state): State<AppState>,
) -> AppResult<Json<ApiResponse<ProductList>>> {
    let resp = product_service::list_products(&state.orm).await?;
    Ok(Json(resp))
}

#[utoipa::path(
    post,
    path = "/product/{supplier_id}",
    params(
        ("supplier_id" = Uuid, Path, description = "Supplier the product belongs to")
    ),
    request_body = CreateProductRequest,
    responses(
        (status = 200, description = "Created product, initial sale counted into revenue", body = ApiResponse<Product>),
        (status = 404, description = "Supplier not found", body = ApiResponse<ErrorData>),
        (status = 422, description = "Invalid body", body = ApiResponse<ErrorData>)
    ),
    tag = "Products"
)]
pub async fn create_product(
    State(state): State<AppState>,
    AppPath(supplier_id): AppPath<Uuid>,
    AppJson(payload): AppJson<CreateProductRequest>,
) -> AppResult<Json<ApiResponse<Product>>> {
    let resp = product_service::create_product(&state.orm, supplier_id, payload).await?;
    Ok(Json(resp))
}

#[utoipa::path(
    get,
    path = "/product/{id}",
    params(
        ("id" = Uuid, Path, description = "Product ID")
    ),
    responses(
        (status = 200, description = "Get product", body = ApiResponse<Product>),
        (status = 404, description = "Product not found", body = ApiResponse<ErrorData>)
    ),
    tag = "Products"
)]
pub async fn get_product(
    State(state): State<AppState>,
    AppPath(id): AppPath<Uuid>,
) -> AppResult<Json<ApiResponse<Product>>> {
    let resp = product_service::get_product(&state.orm, id).await?;
    Ok(Json(resp))
}

#[utoipa::path(
    put,
    path = "/product/{id}",
    params(
        ("id" = Uuid, Path, description = "Product ID")
    ),
    request_body = UpdateProductRequest,
    responses(
        (status = 200, description = "Sale recorded", body = ApiResponse<Product>),
        (status = 404, description = "Product not found", body = ApiResponse<ErrorData>),
        (status = 422, description = "Missing field or negative sale", body = ApiResponse<ErrorData>)
    ),
    tag = "Products"
)]
pub async fn update_product(
    State(state): State<AppState>,
    AppPath(id): AppPath<Uuid>,
    AppJson(payload): AppJson<UpdateProductRequest>,
) -> AppResult<Json<ApiResponse<Product>>> {
    let resp = product_service::update_product(&state.orm, id, payload).await?;
    Ok(Json(resp))
}

#[utoipa::path(
    delete,
    path = "/product/{id}",
    params(
        ("id" = Uuid, Path, description = "Product ID")
    ),
    responses(
        (status = 200, description = "Deleted product (no-op when absent)", body = ApiResponse<NoData>)
    ),
    tag = "Products"
)]
pub async fn delete_product(
    State(state): State<AppState>,
    AppPath(id): AppPath<Uuid>,
) -> AppResult<Json<ApiResponse<NoData>>> {
    let resp = product_service::delete_product(&state.orm, id).await?;
    Ok(Json(resp))
}
