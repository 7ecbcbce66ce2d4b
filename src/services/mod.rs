pub mod notification_service;
pub mod product_service;
pub mod supplier_service;
