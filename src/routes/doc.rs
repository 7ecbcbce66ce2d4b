use utoipa::{OpenApi, openapi::OpenApi as OpenApiSpec};
use utoipa_scalar::{Scalar, Servable};

use crate::{
    dto::{
        email::EmailContent,
        products::{CreateProductRequest, ProductList, UpdateProductRequest},
        suppliers::{SupplierList, SupplierRequest},
    },
    error::ErrorData,
    models::{Product, Supplier},
    response::{ApiResponse, NoData, ResponseStatus},
    routes::{email, health, products, suppliers},
};

#[derive(OpenApi)]
#[openapi(
    paths(
        health::index,
        health::health_check,
        suppliers::list_suppliers,
        suppliers::create_supplier,
        suppliers::get_supplier,
        suppliers::update_supplier,
        suppliers::delete_supplier,
        suppliers::list_supplier_products,
        products::list_products,
        products::create_product,
        products::get_product,
        products::update_product,
        products::delete_product,
        email::send_email
    ),
    components(
        schemas(
            Supplier,
            Product,
            SupplierRequest,
            SupplierList,
            CreateProductRequest,
            UpdateProductRequest,
            ProductList,
            EmailContent,
            ErrorData,
            NoData,
            ResponseStatus,
            health::HealthData,
            health::IndexData,
            ApiResponse<Supplier>,
            ApiResponse<SupplierList>,
            ApiResponse<Product>,
            ApiResponse<ProductList>,
            ApiResponse<NoData>,
            ApiResponse<ErrorData>
        )
    ),
    tags(
        (name = "Health", description = "Service info and health check"),
        (name = "Suppliers", description = "Supplier endpoints"),
        (name = "Products", description = "Product endpoints"),
        (name = "Email", description = "Supplier notification endpoint"),
    )
)]
pub struct ApiDoc;

pub fn scalar_docs() -> Scalar<OpenApiSpec> {
    Scalar::with_url("/docs", ApiDoc::openapi())
}
