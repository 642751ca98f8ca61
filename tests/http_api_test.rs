// ==========================================
// HTTP 接口集成测试
// ==========================================
// 测试方式: tower::ServiceExt::oneshot 直接驱动 axum 路由
// ==========================================

#![cfg(feature = "http-server")]


use axum::body::{to_bytes, Body};
use axum::http::{header, Method, Request, StatusCode};
use axum::Router;
use nurse_shift_feasibility::app::create_router;
use serde_json::{json, Value};
use test_helpers::{scenario_rows, test_state, to_csv};
use tower::ServiceExt;

fn app(pairs: &[(&str, &str)]) -> Router {
    create_router(test_state(pairs))
}

/// 发送请求，返回 (状态码, 响应体)
async fn send(app: &Router, request: Request<Body>) -> (StatusCode, Vec<u8>) {
    let response = app.clone().oneshot(request).await.unwrap();
    let status = response.status();
    let body = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    (status, body.to_vec())
}

async fn get_json(app: &Router, uri: &str) -> (StatusCode, Value) {
    let request = Request::builder().uri(uri).body(Body::empty()).unwrap();
    let (status, body) = send(app, request).await;
    (status, serde_json::from_slice(&body).unwrap_or(Value::Null))
}

async fn post_raw(app: &Router, uri: &str, content_type: &str, body: Vec<u8>) -> (StatusCode, Value) {
    let request = Request::builder()
        .method(Method::POST)
        .uri(uri)
        .header(header::CONTENT_TYPE, content_type)
        .header(header::CONTENT_LENGTH, body.len())
        .body(Body::from(body))
        .unwrap();
    let (status, body) = send(app, request).await;
    (status, serde_json::from_slice(&body).unwrap_or(Value::Null))
}

async fn post_json(app: &Router, uri: &str, payload: Value) -> (StatusCode, Value) {
    post_raw(app, uri, "application/json", payload.to_string().into_bytes()).await
}

#[tokio::test]
async fn test_health() {
    let (status, body) = get_json(&app(&[]), "/health").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], "ok");
}

#[tokio::test]
async fn test_model_endpoints() {
    let app = app(&[]);

    let (status, params) = get_json(&app, "/v1/model").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(params["max_shifts_within_limit"], 5);

    let (status, growth) = get_json(&app, "/v1/model/variables?sizes=10x21,20x7").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(growth["rows"][0]["decision_variables"], 210);
    assert_eq!(growth["rows"][1]["decision_variables"], 140);

    let (status, body) = get_json(&app, "/v1/model/variables?sizes=abc").await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["code"], "INVALID_INPUT");
}

#[tokio::test]
async fn test_upload_csv_evaluation() {
    let csv = to_csv(&scenario_rows());
    let (status, report) = post_raw(
        &app(&[]),
        "/v1/evaluations?format=csv&locale=en&filename=Xij.csv",
        "text/csv",
        csv.into_bytes(),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(report["feasibility"]["hours"], json!([32, 48, 40]));
    assert_eq!(report["feasibility"]["is_feasible"], false);
    assert_eq!(report["verdict"]["violation_count"], 1);
    assert_eq!(report["source_name"], "Xij.csv");
    assert_eq!(report["locale"], "en");
}

#[tokio::test]
async fn test_upload_errors() {
    let app = app(&[]);

    let (status, error) =
        post_raw(&app, "/v1/evaluations?format=csv", "text/csv", b"1,0\n0,2\n".to_vec()).await;
    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
    assert_eq!(error["code"], "MATRIX_VALIDATION_ERROR");
    assert_eq!(error["details"]["row"], 2);
    assert_eq!(error["details"]["column"], 2);

    let (status, error) =
        post_raw(&app, "/v1/evaluations?format=pdf", "application/pdf", b"%PDF".to_vec()).await;
    assert_eq!(status, StatusCode::UNSUPPORTED_MEDIA_TYPE);
    assert_eq!(error["code"], "UNSUPPORTED_FORMAT");

    let (status, error) = post_raw(&app, "/v1/evaluations", "text/csv", b"1,0\n".to_vec()).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(error["code"], "INVALID_INPUT");

    // 查询参数类型错误同样返回结构化错误
    let (status, error) = post_raw(
        &app,
        "/v1/evaluations?format=csv&group_size=abc",
        "text/csv",
        b"1,0\n".to_vec(),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(error["code"], "INVALID_INPUT");
}

#[tokio::test]
async fn test_upload_body_limit() {
    let csv = to_csv(&scenario_rows());
    assert!(csv.len() > 64);

    let (status, _) = post_raw(
        &app(&[("max_upload_bytes", "64")]),
        "/v1/evaluations?format=csv",
        "text/csv",
        csv.into_bytes(),
    )
    .await;
    assert_eq!(status, StatusCode::PAYLOAD_TOO_LARGE);
}

#[tokio::test]
async fn test_matrix_json_evaluation() {
    let (status, report) = post_json(
        &app(&[]),
        "/v1/evaluations/matrix",
        json!({
            "rows": [[1, 1, 0], [0, 1, 1]],
            "group_size": 2,
            "min_per_slot": 1,
            "locale": "es"
        }),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(report["feasibility"]["is_feasible"], true);
    assert_eq!(report["slot_load"]["per_slot"], json!([1, 2, 1]));
    assert_eq!(report["slot_load"]["per_group"][1]["is_partial"], true);
    assert_eq!(report["coverage"]["is_covered"], true);
    assert_eq!(report["locale"], "es");
}

#[tokio::test]
async fn test_matrix_json_non_binary_cells_report_position() {
    let app = app(&[]);

    for cell in [json!(2), json!(300), json!(0.5), json!("x"), json!(-1)] {
        let (status, error) = post_json(
            &app,
            "/v1/evaluations/matrix",
            json!({ "rows": [[1, 0], [0, cell]] }),
        )
        .await;

        assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY, "cell {}", cell);
        assert_eq!(error["code"], "MATRIX_VALIDATION_ERROR", "cell {}", cell);
        assert_eq!(error["details"], json!({ "row": 2, "column": 2 }), "cell {}", cell);
    }
}

#[tokio::test]
async fn test_malformed_json_bodies_use_error_contract() {
    let app = app(&[]);

    let (status, error) = post_json(&app, "/v1/evaluations/matrix", json!({ "rows": 5 })).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(error["code"], "INVALID_INPUT");

    let (status, error) = post_raw(
        &app,
        "/v1/calculator",
        "application/json",
        b"{\"shifts_worked\": ".to_vec(),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(error["code"], "INVALID_INPUT");

    let (status, error) = post_json(&app, "/v1/calculator", json!({ "shifts_worked": "six" })).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(error["code"], "INVALID_INPUT");

    let (status, error) = post_json(
        &app,
        "/v1/calculator/redistribution",
        json!({ "secondary": { "shifts_worked": 1 } }),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(error["code"], "INVALID_INPUT");
}

#[tokio::test]
async fn test_calculator_endpoints() {
    let app = app(&[]);

    let (status, body) = post_json(
        &app,
        "/v1/calculator",
        json!({ "shifts_worked": 6, "locale": "en" }),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["worker_name"], "Worker 1");
    assert_eq!(body["hours"], 48);
    assert_eq!(body["excess_hours"], 8);
    assert_eq!(body["feasible"], false);

    let (status, body) = post_json(&app, "/v1/calculator", json!({ "shifts_worked": 22 })).await;
    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
    assert_eq!(body["code"], "OUT_OF_RANGE");

    let (status, body) = post_json(
        &app,
        "/v1/calculator/redistribution",
        json!({
            "primary": { "worker_name": "Ana", "shifts_worked": 7 },
            "secondary": { "shifts_worked": 2 },
            "locale": "en"
        }),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["primary"]["excess_hours"], 16);
    assert_eq!(body["secondary"]["worker_name"], "Worker 2");
    assert_eq!(body["secondary"]["hours"], 16);
}
