use sea_orm::{
    ActiveModelTrait, ColumnTrait, ConnectionTrait, DatabaseConnection, EntityTrait, ModelTrait,
    QueryFilter, Set, TransactionTrait,
};
use uuid::Uuid;

use crate::{
    dto::{products::ProductList, suppliers::{SupplierList, SupplierRequest}},
    entity::{
        products::{self, Entity as Products},
        suppliers::{ActiveModel, Entity as Suppliers, Model as SupplierModel},
    },
    error::{AppError, AppResult},
    models::Supplier,
    response::{ApiResponse, NoData},
};

/// Fetch a supplier row or fail with `NotFound`.
pub async fn load_supplier<C: ConnectionTrait>(conn: &C, id: Uuid) -> AppResult<SupplierModel> {
    Suppliers::find_by_id(id)
        .one(conn)
        .await?
        .ok_or(AppError::NotFound("Supplier"))
}

pub async fn list_suppliers(db: &DatabaseConnection) -> AppResult<ApiResponse<SupplierList>> {
    let items = Suppliers::find()
        .all(db)
        .await?
        .into_iter()
        .map(Supplier::from)
        .collect();
    Ok(ApiResponse::success(SupplierList { items }))
}

pub async fn create_supplier(
    db: &DatabaseConnection,
    payload: SupplierRequest,
) -> AppResult<ApiResponse<Supplier>> {
    let active = ActiveModel {
        id: Set(Uuid::new_v4()),
        name: Set(payload.name),
        company: Set(payload.company),
        phone: Set(payload.phone),
        email: Set(payload.email),
    };
    let supplier = active.insert(db).await?;
    tracing::info!(supplier_id = %supplier.id, "supplier created");

    Ok(ApiResponse::success(supplier.into()))
}

pub async fn get_supplier(db: &DatabaseConnection, id: Uuid) -> AppResult<ApiResponse<Supplier>> {
    let supplier = load_supplier(db, id).await?;
    Ok(ApiResponse::success(supplier.into()))
}

pub async fn update_supplier(
    db: &DatabaseConnection,
    id: Uuid,
    payload: SupplierRequest,
) -> AppResult<ApiResponse<Supplier>> {
    let existing = load_supplier(db, id).await?;

    let mut active: ActiveModel = existing.into();
    active.name = Set(payload.name);
    active.company = Set(payload.company);
    active.phone = Set(payload.phone);
    active.email = Set(payload.email);

    let supplier = active.update(db).await?;
    tracing::info!(supplier_id = %supplier.id, "supplier updated");

    Ok(ApiResponse::success(supplier.into()))
}

/// Delete a supplier together with every product it supplies.
pub async fn delete_supplier(db: &DatabaseConnection, id: Uuid) -> AppResult<ApiResponse<NoData>> {
    let txn = db.begin().await?;

    let products = Products::delete_many()
        .filter(products::Column::SuppliedBy.eq(id))
        .exec(&txn)
        .await?;
    let result = Suppliers::delete_by_id(id).exec(&txn).await?;
    if result.rows_affected == 0 {
        return Err(AppError::NotFound("Supplier"));
    }

    txn.commit().await?;
    tracing::info!(
        supplier_id = %id,
        products_removed = products.rows_affected,
        "supplier deleted"
    );

    Ok(ApiResponse::ok())
}

pub async fn list_supplier_products(
    db: &DatabaseConnection,
    id: Uuid,
) -> AppResult<ApiResponse<ProductList>> {
    let supplier = load_supplier(db, id).await?;
    let items = supplier
        .find_related(Products)
        .all(db)
        .await?
        .into_iter()
        .map(Into::into)
        .collect();
    Ok(ApiResponse::success(ProductList { items }))
}
