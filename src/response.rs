use serde::Serialize;
use utoipa::ToSchema;

#[derive(Debug, Serialize, ToSchema, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum ResponseStatus {
    Ok,
    Error,
}

/// Envelope for every response body: `{status, data?}`.
#[derive(Debug, Serialize, ToSchema)]
pub struct ApiResponse<T> {
    pub status: ResponseStatus,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<T>,
}

/// Payload type for responses that carry only a status.
#[derive(Debug, Serialize, ToSchema)]
pub struct NoData {}

impl<T: Serialize> ApiResponse<T> {
    pub fn success(data: T) -> Self {
        Self {
            status: ResponseStatus::Ok,
            data: Some(data),
        }
    }

    pub fn error(data: T) -> Self {
        Self {
            status: ResponseStatus::Error,
            data: Some(data),
        }
    }
}

impl ApiResponse<NoData> {
    pub fn ok() -> Self {
        Self {
            status: ResponseStatus::Ok,
            data: None,
        }
    }
}
