pub mod products;
pub mod suppliers;

pub use products::Entity as Products;
pub use suppliers::Entity as Suppliers;
