use axum::{Router, http::Uri, routing::get};

use crate::{error::AppError, state::AppState};

pub mod doc;
pub mod email;
pub mod health;
pub mod products;
pub mod suppliers;

/// Build the full application router without binding state; it will be provided at the top level.
pub fn create_router() -> Router<AppState> {
    Router::new()
        .route("/", get(health::index))
        .route("/health", get(health::health_check))
        .nest("/supplier", suppliers::router())
        .nest("/product", products::router())
        .nest("/email", email::router())
        .merge(doc::scalar_docs())
        .fallback(not_found)
}

async fn not_found(uri: Uri) -> AppError {
    tracing::debug!(path = %uri.path(), "no route matched");
    AppError::NotFound("Route")
}
