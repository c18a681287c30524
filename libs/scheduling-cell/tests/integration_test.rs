use std::sync::Arc;

use axum::{
    body::Body,
    http::{Request, StatusCode},
    Router,
};
use serde_json::json;
use tower::ServiceExt;
use wiremock::matchers::{method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

use scheduling_cell::router::scheduling_routes;
use shared_utils::test_utils::{MockStoreRecords, TestConfig};

const DOCTOR: &str = "HLP-0001";
const LOCATION: &str = "LOC-0001";

fn create_test_app(mock_server: &MockServer) -> Router {
    let config = TestConfig::for_store(&mock_server.uri());
    scheduling_routes(Arc::new(config))
}

async fn setup_schedule_mocks(mock_server: &MockServer) {
    Mock::given(method("GET"))
        .and(path("/rest/v1/practitioners"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([{ "id": DOCTOR }])))
        .mount(mock_server)
        .await;

    Mock::given(method("GET"))
        .and(path("/rest/v1/locations"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([{ "id": LOCATION }])))
        .mount(mock_server)
        .await;

    Mock::given(method("GET"))
        .and(path("/rest/v1/template_links"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([
            MockStoreRecords::template_link(DOCTOR, LOCATION, "TPL-0001")
        ])))
        .mount(mock_server)
        .await;

    let template = MockStoreRecords::schedule_template(
        "TPL-0001",
        vec![MockStoreRecords::time_slot("Monday", "09:00", "09:30")],
    );
    Mock::given(method("GET"))
        .and(path("/rest/v1/schedule_templates"))
        .and(query_param("id", "eq.TPL-0001"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([template])))
        .mount(mock_server)
        .await;
}

#[tokio::test]
async fn test_get_schedules() {
    let mock_server = MockServer::start().await;
    setup_schedule_mocks(&mock_server).await;

    Mock::given(method("GET"))
        .and(path("/rest/v1/appointments"))
        .respond_with(
            ResponseTemplate::new(206)
                .insert_header("content-range", "0-0/0")
                .set_body_json(json!([])),
        )
        .mount(&mock_server)
        .await;

    let app = create_test_app(&mock_server);

    let request = Request::builder()
        .method("GET")
        .uri(format!(
            "/schedules?doctor={DOCTOR}&month=2024-02&location={LOCATION}"
        ))
        .body(Body::empty())
        .unwrap();

    let response = app.oneshot(request).await.unwrap();

    assert_eq!(response.status(), StatusCode::OK);

    let body = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    let json_response: serde_json::Value = serde_json::from_slice(&body).unwrap();

    let days = json_response.as_array().unwrap();
    assert_eq!(days.len(), 29);
    assert_eq!(days[0]["date"], "2024-02-01");
    assert_eq!(days[4]["date"], "2024-02-05");
    assert_eq!(days[4]["status"], "available");
    assert_eq!(days[5]["status"], "not_available");
}

#[tokio::test]
async fn test_get_schedules_invalid_month() {
    let mock_server = MockServer::start().await;

    let app = create_test_app(&mock_server);

    let request = Request::builder()
        .method("GET")
        .uri(format!(
            "/schedules?doctor={DOCTOR}&month=2024-13&location={LOCATION}"
        ))
        .body(Body::empty())
        .unwrap();

    let response = app.oneshot(request).await.unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let body = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    let json_response: serde_json::Value = serde_json::from_slice(&body).unwrap();

    assert!(json_response["error"]
        .as_str()
        .unwrap()
        .contains("Invalid month format"));
}

#[tokio::test]
async fn test_get_schedules_unknown_doctor() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/rest/v1/practitioners"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([])))
        .mount(&mock_server)
        .await;

    let app = create_test_app(&mock_server);

    let request = Request::builder()
        .method("GET")
        .uri(format!(
            "/schedules?doctor=HLP-9999&month=2024-02&location={LOCATION}"
        ))
        .body(Body::empty())
        .unwrap();

    let response = app.oneshot(request).await.unwrap();

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_get_schedule_detail() {
    let mock_server = MockServer::start().await;
    setup_schedule_mocks(&mock_server).await;

    Mock::given(method("GET"))
        .and(path("/rest/v1/appointments"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([
            MockStoreRecords::booking(json!("09:00:00"), 30)
        ])))
        .mount(&mock_server)
        .await;

    let app = create_test_app(&mock_server);

    let request = Request::builder()
        .method("GET")
        .uri(format!(
            "/schedule-detail?doctor={DOCTOR}&date=2024-02-05&location={LOCATION}"
        ))
        .body(Body::empty())
        .unwrap();

    let response = app.oneshot(request).await.unwrap();

    assert_eq!(response.status(), StatusCode::OK);

    let body = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    let json_response: serde_json::Value = serde_json::from_slice(&body).unwrap();

    assert_eq!(
        json_response,
        json!([{
            "start_time": "09:00",
            "end_time": "09:30",
            "status": "not_available"
        }])
    );
}

#[tokio::test]
async fn test_get_schedule_detail_no_templates() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/rest/v1/practitioners"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([{ "id": DOCTOR }])))
        .mount(&mock_server)
        .await;

    Mock::given(method("GET"))
        .and(path("/rest/v1/locations"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([{ "id": LOCATION }])))
        .mount(&mock_server)
        .await;

    Mock::given(method("GET"))
        .and(path("/rest/v1/template_links"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([])))
        .mount(&mock_server)
        .await;

    let app = create_test_app(&mock_server);

    let request = Request::builder()
        .method("GET")
        .uri(format!(
            "/schedule-detail?doctor={DOCTOR}&date=2024-02-05&location={LOCATION}"
        ))
        .body(Body::empty())
        .unwrap();

    let response = app.oneshot(request).await.unwrap();

    assert_eq!(response.status(), StatusCode::OK);

    let body = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    let json_response: serde_json::Value = serde_json::from_slice(&body).unwrap();

    assert_eq!(json_response, json!([]));
}
