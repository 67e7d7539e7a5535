mod common;

use axum::http::StatusCode;
use axum_test::TestServer;
use chrono::Utc;
use linkshort::api::dto::link::LinkResponse;
use linkshort::routes::router;
use serde_json::json;
use sqlx::SqlitePool;

fn make_server(pool: SqlitePool) -> TestServer {
    let state = common::create_test_state(pool);
    TestServer::new(router(state)).unwrap()
}

#[tokio::test]
async fn test_redirect_success() {
    let pool = common::test_pool().await;
    common::create_test_link(&pool, "redirect1", "https://example.com/target").await;
    let server = make_server(pool);

    let response = server.get("/redirect1").await;

    response.assert_status(StatusCode::FOUND);
    assert_eq!(response.header("location"), "https://example.com/target");
}

#[tokio::test]
async fn test_redirect_records_click() {
    let pool = common::test_pool().await;
    let server = make_server(pool);

    server
        .post("/links")
        .json(&json!({ "target_url": "https://redirect-test.com", "code": "redir01" }))
        .await
        .assert_status(StatusCode::CREATED);

    let before = Utc::now();
    server
        .get("/redir01")
        .await
        .assert_status(StatusCode::FOUND);

    let link = server.get("/links/redir01").await.json::<LinkResponse>();
    assert_eq!(link.clicks, 1);
    assert!(link.last_clicked.unwrap() >= before);
}

#[tokio::test]
async fn test_redirect_repeated_counts_every_click() {
    let pool = common::test_pool().await;
    common::create_test_link(&pool, "many123", "https://example.com").await;
    let server = make_server(pool.clone());

    for _ in 0..5 {
        server.get("/many123").await.assert_status(StatusCode::FOUND);
    }

    assert_eq!(common::fetch_clicks(&pool, "many123").await, Some(5));
}

#[tokio::test]
async fn test_redirect_not_found() {
    let pool = common::test_pool().await;
    let server = make_server(pool.clone());

    let response = server.get("/nonexist").await;

    response.assert_status_not_found();
    assert_eq!(common::count_links(&pool).await, 0);
}

#[tokio::test]
async fn test_redirect_deleted_code() {
    let pool = common::test_pool().await;
    common::create_test_link(&pool, "deleted1", "https://deleted.com").await;
    let server = make_server(pool);

    server
        .delete("/links/deleted1")
        .await
        .assert_status(StatusCode::NO_CONTENT);

    server.get("/deleted1").await.assert_status_not_found();
}
