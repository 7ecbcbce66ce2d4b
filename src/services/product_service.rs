use uuid::Uuid;

use crate::{
    dto::products::{CreateProductRequest, ProductList, UpdateProductRequest},
    entity::products::{ActiveModel, Column, Entity as Products, Model as ProductModel},
    error::{AppError, AppResult},
    models::Product,
    money::to_minor_units,
    response::{ApiResponse, NoData},
    services::supplier_service::load_supplier,
};
use sea_orm::{
    ActiveModelTrait, ColumnTrait, ConnectionTrait, DatabaseConnection, EntityTrait, QueryFilter,
    Set,
};

/// Fetch a product row or fail with `NotFound`.
pub async fn load_product<C: ConnectionTrait>(conn: &C, id: Uuid) -> AppResult<ProductModel> {
    Products::find_by_id(id)
        .one(conn)
        .await?
        .ok_or(AppError::NotFound("Product"))
}

pub async fn list_products(db: &DatabaseConnection) -> AppResult<ApiResponse<ProductList>> {
    let items = Products::find()
        .all(db)
        .await?
        .into_iter()
        .map(Product::from)
        .collect();
    Ok(ApiResponse::success(ProductList { items }))
}

pub async fn create_product(
    db: &DatabaseConnection,
    supplier_id: Uuid,
    payload: CreateProductRequest,
) -> AppResult<ApiResponse<Product>> {
    let supplier = load_supplier(db, supplier_id).await?;
    let unit_price = to_minor_units(payload.unit_price, "unit_price")?;
    let seed_revenue = to_minor_units(payload.revenue, "revenue")?;
    let revenue = add_sale(seed_revenue, payload.quantity_sold, unit_price)?;

    let active = ActiveModel {
        id: Set(Uuid::new_v4()),
        name: Set(payload.name),
        quantity_in_stock: Set(payload.quantity_in_stock),
        quantity_sold: Set(payload.quantity_sold),
        unit_price: Set(unit_price),
        revenue: Set(revenue),
        supplied_by: Set(supplier.id),
    };
    let product = active.insert(db).await?;
    tracing::info!(
        product_id = %product.id,
        supplier_id = %supplier.id,
        revenue_cents = product.revenue,
        "product created"
    );

    Ok(ApiResponse::success(product.into()))
}

pub async fn get_product(db: &DatabaseConnection, id: Uuid) -> AppResult<ApiResponse<Product>> {
    let product = load_product(db, id).await?;
    Ok(ApiResponse::success(product.into()))
}

/// Record an additional sale against a product.
///
/// `name`, `quantity_in_stock` and `unit_price` are replaced; `quantity_sold`
/// and `revenue` accumulate. The read and the write are separate statements,
/// so two concurrent updates on the same id may lose one of the sales.
pub async fn update_product(
    db: &DatabaseConnection,
    id: Uuid,
    payload: UpdateProductRequest,
) -> AppResult<ApiResponse<Product>> {
    let existing = load_product(db, id).await?;

    let unit_price = to_minor_units(payload.unit_price, "unit_price")?;
    let revenue = add_sale(existing.revenue, payload.quantity_sold, unit_price)?;
    let quantity_sold = existing
        .quantity_sold
        .checked_add(payload.quantity_sold)
        .ok_or_else(|| AppError::Validation("quantity_sold overflows".into()))?;

    let mut active: ActiveModel = existing.into();
    active.name = Set(payload.name);
    active.quantity_in_stock = Set(payload.quantity_in_stock);
    active.unit_price = Set(unit_price);
    active.quantity_sold = Set(quantity_sold);
    active.revenue = Set(revenue);

    let product = active.update(db).await?;
    tracing::info!(
        product_id = %product.id,
        quantity_sold = product.quantity_sold,
        revenue_cents = product.revenue,
        "product sale recorded"
    );

    Ok(ApiResponse::success(product.into()))
}

/// Delete a product; deleting an id that does not exist is not an error.
pub async fn delete_product(db: &DatabaseConnection, id: Uuid) -> AppResult<ApiResponse<NoData>> {
    let result = Products::delete_many()
        .filter(Column::Id.eq(id))
        .exec(db)
        .await?;

    if result.rows_affected == 0 {
        tracing::debug!(product_id = %id, "delete matched no product");
    } else {
        tracing::info!(product_id = %id, "product deleted");
    }

    Ok(ApiResponse::ok())
}

/// `revenue + quantity_sold * unit_price` in minor units, rejecting negative sales and overflow.
fn add_sale(revenue: i64, quantity_sold: i32, unit_price: i64) -> AppResult<i64> {
    if quantity_sold < 0 {
        return Err(AppError::Validation(
            "quantity_sold must not be negative".into(),
        ));
    }
    i64::from(quantity_sold)
        .checked_mul(unit_price)
        .and_then(|sale| revenue.checked_add(sale))
        .ok_or_else(|| AppError::Validation("revenue overflows".into()))
}
