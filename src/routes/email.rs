use axum::{Json, Router, extract::State, routing::post};
use uuid::Uuid;

use crate::{
    dto::email::EmailContent,
    error::{AppResult, ErrorData},
    extract::{AppJson, AppPath},
    response::{ApiResponse, NoData},
    services::notification_service,
    state::AppState,
};

pub fn router() -> Router<AppState> {
    Router::new().route("/{product_id}", post(send_email))
}

#[utoipa::path(
    post,
    path = "/email/{product_id}",
    params(
        ("product_id" = Uuid, Path, description = "Product whose supplier is emailed")
    ),
    request_body = EmailContent,
    responses(
        (status = 200, description = "Email handed to the relay", body = ApiResponse<NoData>),
        (status = 404, description = "Product not found", body = ApiResponse<ErrorData>),
        (status = 422, description = "Invalid body or supplier address", body = ApiResponse<ErrorData>),
        (status = 503, description = "Mail relay failed or timed out", body = ApiResponse<ErrorData>)
    ),
    tag = "Email"
)]
pub async fn send_email(
    State(state): State<AppState>,
    AppPath(product_id): AppPath<Uuid>,
    AppJson(content): AppJson<EmailContent>,
) -> AppResult<Json<ApiResponse<NoData>>> {
    let resp = notification_service::notify_supplier(&state, product_id, content).await?;
    Ok(Json(resp))
}
