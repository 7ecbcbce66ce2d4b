use axum::http::{HeaderName, Request};

pub const REQUEST_ID_HEADER: HeaderName = HeaderName::from_static("x-request-id");

/// The id `SetRequestIdLayer` stamped on the request, or `-` when absent.
pub fn request_id<B>(request: &Request<B>) -> &str {
    request
        .headers()
        .get(&REQUEST_ID_HEADER)
        .and_then(|value| value.to_str().ok())
        .unwrap_or("-")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reads_the_stamped_id() {
        let request = Request::builder()
            .header("x-request-id", "3f1c9a")
            .body(())
            .unwrap();
        assert_eq!(request_id(&request), "3f1c9a");
    }

    #[test]
    fn missing_id_is_a_dash() {
        let request = Request::builder().body(()).unwrap();
        assert_eq!(request_id(&request), "-");
    }
}
