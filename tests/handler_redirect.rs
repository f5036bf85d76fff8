mod common;

use axum::{Router, routing::get};
use axum_test::TestServer;
use pilot_site::web::handlers::{SCHEDULE_TARGET, schedule_handler};

#[tokio::test]
async fn test_schedule_redirects_to_book() {
    let app = Router::new().route("/schedule", get(schedule_handler));

    let server = TestServer::new(app).unwrap();

    let response = server.get("/schedule").await;

    assert_eq!(response.status_code(), 307);

    let location = response.header("location");
    assert_eq!(location, "/book");
    assert_eq!(SCHEDULE_TARGET, "/book");
}

#[tokio::test]
async fn test_schedule_ignores_query_string() {
    let app = Router::new().route("/schedule", get(schedule_handler));

    let server = TestServer::new(app).unwrap();

    let response = server.get("/schedule?utm_source=newsletter").await;

    assert_eq!(response.status_code(), 307);
    assert_eq!(response.header("location"), "/book");
}

#[tokio::test]
async fn test_schedule_redirect_through_site_router() {
    let state = common::create_test_state();
    let server = TestServer::new(common::create_test_router(state)).unwrap();

    let response = server.get("/schedule").await;

    assert_eq!(response.status_code(), 307);
    assert_eq!(response.header("location"), "/book");
}
