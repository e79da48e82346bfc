mod common;

use axum_test::TestServer;
use common::InMemoryRepository;
use std::sync::Arc;

#[tokio::test]
async fn test_home_get() {
    let server = TestServer::new(common::test_app(Arc::new(InMemoryRepository::new()))).unwrap();

    let response = server.get("/home").await;

    response.assert_status_ok();
    assert_eq!(response.text(), "API running successfully");
}

#[tokio::test]
async fn test_home_post() {
    let server = TestServer::new(common::test_app(Arc::new(InMemoryRepository::new()))).unwrap();

    let response = server.post("/home").await;

    response.assert_status_ok();
    assert_eq!(response.text(), "API running successfully");
}

#[tokio::test]
async fn test_home_sets_cors_origin() {
    let server = TestServer::new(common::test_app(Arc::new(InMemoryRepository::new()))).unwrap();

    let response = server.get("/home").await;

    assert_eq!(response.header("access-control-allow-origin"), "*");
}
