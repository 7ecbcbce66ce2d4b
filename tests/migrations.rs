mod common;

use inventory_api::{
    db::run_migrations,
    entity::{Products, Suppliers},
    migration::Migrator,
};
use sea_orm::EntityTrait;
use sea_orm_migration::MigratorTrait;

use common::memory_db;

#[tokio::test]
async fn fresh_sqlite_database_migrates_cleanly() -> anyhow::Result<()> {
    let db = memory_db().await?;
    run_migrations(&db).await?;

    assert!(Migrator::get_pending_migrations(&db).await?.is_empty());
    assert!(Suppliers::find().all(&db).await?.is_empty());
    assert!(Products::find().all(&db).await?.is_empty());
    Ok(())
}

#[tokio::test]
async fn rerunning_migrations_is_a_no_op() -> anyhow::Result<()> {
    let db = memory_db().await?;
    run_migrations(&db).await?;
    run_migrations(&db).await?;

    assert_eq!(Migrator::get_applied_migrations(&db).await?.len(), 2);
    Ok(())
}
