mod common;

use axum_test::TestServer;

fn server() -> TestServer {
    let state = common::create_test_state();
    TestServer::new(common::create_test_router(state)).unwrap()
}

#[tokio::test]
async fn test_robots_txt() {
    let response = server().get("/robots.txt").await;

    response.assert_status_ok();
    assert!(
        response
            .header("content-type")
            .to_str()
            .unwrap()
            .starts_with("text/plain")
    );

    let body = response.text();
    assert!(body.contains("User-agent: *"));
    assert!(body.contains("Sitemap: https://pilots.example.com/sitemap.xml"));
}

#[tokio::test]
async fn test_sitemap_xml() {
    let response = server().get("/sitemap.xml").await;

    response.assert_status_ok();
    assert!(
        response
            .header("content-type")
            .to_str()
            .unwrap()
            .starts_with("application/xml")
    );

    let body = response.text();
    assert!(body.contains("<loc>https://pilots.example.com/</loc>"));
    assert!(body.contains("<loc>https://pilots.example.com/book</loc>"));
    assert!(body.contains("<lastmod>2026-10-14</lastmod>"));
    assert!(!body.contains("/schedule"));
}
