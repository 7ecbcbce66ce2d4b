pub mod email;
pub mod products;
pub mod suppliers;
