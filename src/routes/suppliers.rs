use axum::{
    Json, Router,
    extract::State,
    routing::get,
};
use uuid::Uuid;

use crate::{
    dto::{
        products::ProductList,
        suppliers::{SupplierList, SupplierRequest},
    },
    error::{AppResult, ErrorData},
    extract::{AppJson, AppPath},
    models::Supplier,
    response::{ApiResponse, NoData},
    services::supplier_service,
    state::AppState,
};

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(list_suppliers).post(create_supplier))
        .route(
            "/{id}",
            get(get_supplier).put(update_supplier).delete(delete_supplier),
        )
        .route("/{id}/products", get(list_supplier_products))
}

#[utoipa::path(
    get,
    path = "/supplier",
    responses(
        (status = 200, description = "List suppliers", body = ApiResponse<SupplierList>)
    ),
    tag = "Suppliers"
)]
pub async fn list_suppliers(
    State(state): State<AppState>,
) -> AppResult<Json<ApiResponse<SupplierList>>> {
    let resp = supplier_service::list_suppliers(&state.orm).await?;
    Ok(Json(resp))
}

#[utoipa::path(
    post,
    path = "/supplier",
    request_body = SupplierRequest,
    responses(
        (status = 200, description = "Created supplier", body = ApiResponse<Supplier>),
        (status = 422, description = "Invalid body", body = ApiResponse<ErrorData>)
    ),
    tag = "Suppliers"
)]
pub async fn create_supplier(
    State(state): State<AppState>,
    AppJson(payload): AppJson<SupplierRequest>,
) -> AppResult<Json<ApiResponse<Supplier>>> {
    let resp = supplier_service::create_supplier(&state.orm, payload).await?;
    Ok(Json(resp))
}

#[utoipa::path(
    get,
    path = "/supplier/{id}",
    params(
        ("id" = Uuid, Path, description = "Supplier ID")
    ),
    responses(
        (status = 200, description = "Get supplier", body = ApiResponse<Supplier>),
        (status = 404, description = "Supplier not found", body = ApiResponse<ErrorData>)
    ),
    tag = "Suppliers"
)]
pub async fn get_supplier(
    State(state): State<AppState>,
    AppPath(id): AppPath<Uuid>,
) -> AppResult<Json<ApiResponse<Supplier>>> {
    let resp = supplier_service::get_supplier(&state.orm, id).await?;
    Ok(Json(resp))
}

#[utoipa::path(
    put,
    path = "/supplier/{id}",
    params(
        ("id" = Uuid, Path, description = "Supplier ID")
    ),
    request_body = SupplierRequest,
    responses(
        (status = 200, description = "Updated supplier", body = ApiResponse<Supplier>),
        (status = 404, description = "Supplier not found", body = ApiResponse<ErrorData>),
        (status = 422, description = "Missing or mistyped field", body = ApiResponse<ErrorData>)
    ),
    tag = "Suppliers"
)]
pub async fn update_supplier(
    State(state): State<AppState>,
    AppPath(id): AppPath<Uuid>,
    AppJson(payload): AppJson<SupplierRequest>,
) -> AppResult<Json<ApiResponse<Supplier>>> {
    let resp = supplier_service::update_supplier(&state.orm, id, payload).await?;
    Ok(Json(resp))
}

#[utoipa::path(
    delete,
    path = "/supplier/{id}",
    params(
        ("id" = Uuid, Path, description = "Supplier ID")
    ),
    responses(
        (status = 200, description = "Deleted supplier and its products", body = ApiResponse<NoData>),
        (status = 404, description = "Supplier not found", body = ApiResponse<ErrorData>)
    ),
    tag = "Suppliers"
)]
pub async fn delete_supplier(
    State(state): State<AppState>,
    AppPath(id): AppPath<Uuid>,
) -> AppResult<Json<ApiResponse<NoData>>> {
    let resp = supplier_service::delete_supplier(&state.orm, id).await?;
    Ok(Json(resp))
}

#[utoipa::path(
    get,
    path = "/supplier/{id}/products",
    params(
        ("id" = Uuid, Path, description = "Supplier ID")
    ),
    responses(
        (status = 200, description = "Products of the supplier", body = ApiResponse<ProductList>),
        (status = 404, description = "Supplier not found", body = ApiResponse<ErrorData>)
    ),
    tag = "Suppliers"
)]
pub async fn list_supplier_products(
    State(state): State<AppState>,
    AppPath(id): AppPath<Uuid>,
) -> AppResult<Json<ApiResponse<ProductList>>> {
    let resp = supplier_service::list_supplier_products(&state.orm, id).await?;
    Ok(Json(resp))
}
