mod common;

use axum_test::TestServer;
use serde_json::Value;

fn server() -> TestServer {
    let state = common::create_test_state();
    TestServer::new(common::create_test_router(state)).unwrap()
}

#[tokio::test]
async fn test_roi_link_with_pilot() {
    let response = server()
        .get("/api/roi-link?h=10&r=150&w=4&p=5000&pilot=abc")
        .await;

    response.assert_status_ok();

    let json = response.json::<Value>();
    assert_eq!(json["href"], "/?h=10&r=150&w=4&p=5000&pilot=abc#roi");
    assert_eq!(
        json["url"],
        "https://pilots.example.com/?h=10&r=150&w=4&p=5000&pilot=abc#roi"
    );
}

#[tokio::test]
async fn test_roi_link_without_options() {
    let response = server().get("/api/roi-link?h=2.5&r=100&w=1&p=0").await;

    response.assert_status_ok();
    assert_eq!(response.json::<Value>()["href"], "/?h=2.5&r=100&w=1&p=0#roi");
}

#[tokio::test]
async fn test_roi_link_empty_pilot_is_omitted() {
    let response = server()
        .get("/api/roi-link?h=10&r=150&w=4&p=5000&pilot=")
        .await;

    response.assert_status_ok();
    assert_eq!(
        response.json::<Value>()["href"],
        "/?h=10&r=150&w=4&p=5000#roi"
    );
}

#[tokio::test]
async fn test_roi_link_custom_pathname() {
    let response = server()
        .get("/api/roi-link?h=10&r=150&w=4&p=5000&pathname=/calculator")
        .await;

    response.assert_status_ok();

    let json = response.json::<Value>();
    assert_eq!(json["href"], "/calculator?h=10&r=150&w=4&p=5000#roi");
    assert_eq!(
        json["url"],
        "https://pilots.example.com/calculator?h=10&r=150&w=4&p=5000#roi"
    );
}

#[tokio::test]
async fn test_roi_link_keeps_parameter_order_regardless_of_input_order() {
    let response = server()
        .get("/api/roi-link?pilot=abc&p=5000&w=4&r=150&h=10")
        .await;

    response.assert_status_ok();
    assert_eq!(
        response.json::<Value>()["href"],
        "/?h=10&r=150&w=4&p=5000&pilot=abc#roi"
    );
}

#[tokio::test]
async fn test_roi_link_negative_values_are_accepted() {
    let response = server().get("/api/roi-link?h=-1&r=100&w=0&p=-5").await;

    response.assert_status_ok();
    assert_eq!(response.json::<Value>()["href"], "/?h=-1&r=100&w=0&p=-5#roi");
}

#[tokio::test]
async fn test_roi_link_missing_number() {
    let response = server().get("/api/roi-link?h=10&r=150&w=4").await;

    response.assert_status_bad_request();

    let json = response.json::<Value>();
    assert_eq!(json["error"]["code"], "validation_error");
}

#[tokio::test]
async fn test_roi_link_non_numeric_value() {
    let response = server().get("/api/roi-link?h=ten&r=150&w=4&p=5000").await;

    response.assert_status_bad_request();
    assert_eq!(response.json::<Value>()["error"]["code"], "validation_error");
}

#[tokio::test]
async fn test_roi_link_rejects_nan() {
    let response = server().get("/api/roi-link?h=NaN&r=150&w=4&p=5000").await;

    response.assert_status_bad_request();

    let json = response.json::<Value>();
    assert_eq!(json["error"]["details"]["field"], "h");
}

#[tokio::test]
async fn test_roi_link_rejects_invalid_pilot() {
    let response = server()
        .get("/api/roi-link?h=10&r=150&w=4&p=5000&pilot=a%20b")
        .await;

    response.assert_status_bad_request();

    let json = response.json::<Value>();
    assert_eq!(json["error"]["details"]["fields"][0], "pilot");
}

#[tokio::test]
async fn test_roi_link_rejects_relative_pathname() {
    let response = server()
        .get("/api/roi-link?h=10&r=150&w=4&p=5000&pathname=calculator")
        .await;

    response.assert_status_bad_request();
    assert_eq!(
        response.json::<Value>()["error"]["details"]["fields"][0],
        "pathname"
    );
}

#[tokio::test]
async fn test_roi_estimate() {
    let response = server().get("/api/roi-estimate?h=10&r=150&w=4&p=5000").await;

    response.assert_status_ok();

    let json = response.json::<Value>();
    assert_eq!(json["preset"]["hours"], 10.0);
    assert_eq!(json["estimate"]["weekly_value"], 1500.0);
    assert_eq!(json["estimate"]["pilot_value"], 6000.0);
    assert_eq!(json["estimate"]["net_return"], 1000.0);
    assert_eq!(json["estimate"]["roi_multiple"], 1.2);
    assert_eq!(json["profitable"], true);
}

#[tokio::test]
async fn test_roi_estimate_free_pilot_has_null_multiple() {
    let response = server().get("/api/roi-estimate?h=2.5&r=100&w=1&p=0").await;

    response.assert_status_ok();

    let json = response.json::<Value>();
    assert!(json["estimate"]["roi_multiple"].is_null());
    assert_eq!(json["estimate"]["pilot_value"], 250.0);
}

#[tokio::test]
async fn test_roi_estimate_names_missing_field() {
    let response = server().get("/api/roi-estimate?h=10&r=150&p=5000").await;

    response.assert_status_bad_request();

    let json = response.json::<Value>();
    assert_eq!(json["error"]["message"], "Missing value for 'w'");
    assert_eq!(json["error"]["details"]["field"], "w");
}
