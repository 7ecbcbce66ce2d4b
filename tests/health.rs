use inventory_api::{
    response::ResponseStatus,
    routes::health::{health_check, index},
};

#[tokio::test]
async fn health_check_returns_ok() {
    let response = health_check().await;
    assert_eq!(response.0.status, ResponseStatus::Ok);

    let data = response.0.data.expect("health data");
    assert_eq!(data.status, "ok");
}

#[tokio::test]
async fn index_points_at_docs() {
    let response = index().await;
    let data = response.0.data.expect("index data");
    assert!(data.message.contains("/docs"));
}
