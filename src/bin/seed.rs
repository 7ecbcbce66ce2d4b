use inventory_api::{
    db::{create_orm_conn, run_migrations},
    dto::{products::CreateProductRequest, suppliers::SupplierRequest},
    services::{product_service, supplier_service},
};
use rust_decimal::Decimal;
use sea_orm::DatabaseConnection;
use uuid::Uuid;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    let database_url = std::env::var("DATABASE_URL")
        .unwrap_or_else(|_| "sqlite://database.sqlite3?mode=rwc".to_string());

    let orm = create_orm_conn(&database_url).await?;
    // Ensure migrations are applied.
    run_migrations(&orm).await?;

    let ferris = seed_supplier(
        &orm,
        "Ferris Crab",
        "Rustacean Goods",
        "+1-555-0100",
        "ferris@rustacean.test",
    )
    .await?;
    let async_supplies = seed_supplier(
        &orm,
        "Tokio Team",
        "Async Supplies",
        "+1-555-0199",
        "orders@async-supplies.test",
    )
    .await?;

    let products = [
        (ferris, "Ferris Mug", 100, 12, Decimal::new(1200, 2)),
        (ferris, "Rust Sticker Pack", 200, 40, Decimal::new(500, 2)),
        (async_supplies, "Runtime Hoodie", 50, 3, Decimal::new(5500, 2)),
    ];
    for (supplier_id, name, stock, sold, price) in products {
        let resp = product_service::create_product(
            &orm,
            supplier_id,
            CreateProductRequest {
                name: name.to_string(),
                quantity_in_stock: stock,
                quantity_sold: sold,
                unit_price: price,
                revenue: Decimal::ZERO,
            },
        )
        .await?;
        if let Some(product) = resp.data {
            println!("Seeded product {} (revenue {})", product.name, product.revenue);
        }
    }

    println!("Seed completed");
    Ok(())
}

async fn seed_supplier(
    orm: &DatabaseConnection,
    name: &str,
    company: &str,
    phone: &str,
    email: &str,
) -> anyhow::Result<Uuid> {
    let resp = supplier_service::create_supplier(
        orm,
        SupplierRequest {
            name: name.to_string(),
            company: company.to_string(),
            phone: phone.to_string(),
            email: email.to_string(),
        },
    )
    .await?;

    let supplier = resp
        .data
        .ok_or_else(|| anyhow::anyhow!("supplier creation returned no data"))?;
    println!("Seeded supplier {} ({})", supplier.name, supplier.id);
    Ok(supplier.id)
}
