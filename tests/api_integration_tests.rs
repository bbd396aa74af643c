//! Integration Tests for API Endpoints
//!
//! Tests full request/response cycle through the router for each endpoint.

use axum::{
    body::Body,
    http::{header::CONTENT_TYPE, Request, StatusCode},
    response::Response,
    Router,
};
use seedkv::{api::create_router, AppState, HandlerMode, Store};
use serde_json::{json, Value};
use tower::ServiceExt;

// == Helper Functions ==

fn create_test_app(mode: HandlerMode) -> Router {
    create_router(AppState::new(Store::new(), mode))
}

fn post_json(uri: &str, body: &'static str) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri(uri)
        .header("content-type", "application/json")
        .body(Body::from(body))
        .unwrap()
}

async fn body_bytes(response: Response) -> Vec<u8> {
    axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap()
        .to_vec()
}

async fn body_to_json(response: Response) -> Value {
    serde_json::from_slice(&body_bytes(response).await).unwrap()
}

fn assert_json_content_type(response: &Response) {
    assert_eq!(
        response.headers().get(CONTENT_TYPE).unwrap(),
        "application/json"
    );
}

// == Placeholder Tests ==

#[tokio::test]
async fn test_get_anything_returns_placeholder() {
    let app = create_test_app(HandlerMode::Stub);

    let response = app
        .oneshot(
            Request::builder()
                .method("GET")
                .uri("/anything")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    assert_json_content_type(&response);
    assert_eq!(
        body_bytes(response).await,
        br#"[{"key":"1001","value":"test"}]"#
    );
}

#[tokio::test]
async fn test_put_returns_placeholder_and_ignores_body() {
    let state = AppState::new(Store::new(), HandlerMode::Live);
    let app = create_router(state.clone());

    let response = app
        .oneshot(
            Request::builder()
                .method("PUT")
                .uri("/set")
                .header("content-type", "application/json")
                .body(Body::from(r#"{"key":"a","value":1}"#))
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(
        body_to_json(response).await,
        json!([{"key": "1001", "value": "test"}])
    );
    assert!(state.store.read().await.is_empty());
}

// == Stub Mode Tests ==

#[tokio::test]
async fn test_stub_operations_return_bad_request() {
    for uri in ["/set", "/fetch", "/query"] {
        let app = create_test_app(HandlerMode::Stub);

        let response = app
            .oneshot(post_json(uri, r#"{"key":"a","value":42}"#))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::BAD_REQUEST, "{}", uri);
        assert_json_content_type(&response);
        assert_eq!(
            body_to_json(response).await,
            json!({"code": 400, "message": "Bad request"})
        );
    }
}

// == Live Mode Tests ==

#[tokio::test]
async fn test_set_then_fetch() {
    let app = create_test_app(HandlerMode::Live);

    let set_response = app
        .clone()
        .oneshot(post_json("/set", r#"{"key":"a","value":42}"#))
        .await
        .unwrap();
    assert_eq!(set_response.status(), StatusCode::OK);
    assert_json_content_type(&set_response);
    assert_eq!(body_to_json(set_response).await, json!({"code": 200}));

    let fetch_response = app
        .oneshot(post_json("/fetch", r#"{"key":"a"}"#))
        .await
        .unwrap();
    assert_eq!(fetch_response.status(), StatusCode::OK);
    assert_eq!(
        body_to_json(fetch_response).await,
        json!({"code": 200, "value": 42})
    );
}

#[tokio::test]
async fn test_fetch_missing_key() {
    let app = create_test_app(HandlerMode::Live);

    let response = app
        .oneshot(post_json("/fetch", r#"{"key":"missing"}"#))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    assert_json_content_type(&response);
    assert_eq!(
        body_to_json(response).await,
        json!({"code": 404, "message": "Not found"})
    );
}

#[tokio::test]
async fn test_overwrite_and_query() {
    let app = create_test_app(HandlerMode::Live);

    let response = app
        .clone()
        .oneshot(post_json("/query", r#"{"key":"k"}"#))
        .await
        .unwrap();
    assert_eq!(
        body_to_json(response).await,
        json!({"code": 200, "exists": false})
    );

    for body in [
        r#"{"key":"k","value":"first"}"#,
        r#"{"key":"k","value":{"second":[1,2]}}"#,
    ] {
        let response = app.clone().oneshot(post_json("/set", body)).await.unwrap();
        assert_eq!(response.status(), StatusCode::OK);
    }

    let response = app
        .clone()
        .oneshot(post_json("/query", r#"{"key":"k"}"#))
        .await
        .unwrap();
    assert_eq!(
        body_to_json(response).await,
        json!({"code": 200, "exists": true})
    );

    let response = app
        .oneshot(post_json("/fetch", r#"{"key":"k"}"#))
        .await
        .unwrap();
    assert_eq!(
        body_to_json(response).await,
        json!({"code": 200, "value": {"second": [1, 2]}})
    );
}

#[tokio::test]
async fn test_missing_fields_are_bad_requests() {
    let app = create_test_app(HandlerMode::Live);

    for (uri, body) in [
        ("/set", r#"{"key":"a"}"#),
        ("/set", r#"{"value":1}"#),
        ("/set", r#"{"key":"","value":1}"#),
        ("/fetch", r#"{}"#),
        ("/query", r#"{"key":3}"#),
        ("/query", r#"["a"]"#),
    ] {
        let response = app.clone().oneshot(post_json(uri, body)).await.unwrap();

        assert_eq!(response.status(), StatusCode::BAD_REQUEST, "{} {}", uri, body);
        assert_eq!(
            body_to_json(response).await,
            json!({"code": 400, "message": "Bad request"})
        );
    }
}

// == Error Path Tests ==

#[tokio::test]
async fn test_wrong_content_type_is_rejected_with_empty_body() {
    let state = AppState::new(Store::new(), HandlerMode::Live);
    let app = create_router(state.clone());

    let response = app
        .oneshot(
            Request::builder()
                .method("POST")
                .uri("/set")
                .header("content-type", "text/plain")
                .body(Body::from(r#"{"key":"a","value":1}"#))
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert!(body_bytes(response).await.is_empty());
    assert!(state.store.read().await.is_empty());
}

#[tokio::test]
async fn test_invalid_json_request() {
    let app = create_test_app(HandlerMode::Live);

    let response = app
        .oneshot(post_json("/set", r#"{"key": "a", "value": "#))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert_eq!(
        body_to_json(response).await,
        json!({"code": 400, "message": "Bad request"})
    );
}

#[tokio::test]
async fn test_unknown_post_path_is_not_found() {
    let app = create_test_app(HandlerMode::Live);

    let response = app
        .oneshot(post_json("/delete", r#"{"key":"a"}"#))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    assert_json_content_type(&response);
    assert_eq!(
        body_to_json(response).await,
        json!({"code": 404, "message": "Not found"})
    );
}

#[tokio::test]
async fn test_unknown_post_path_still_checks_content_type() {
    let app = create_test_app(HandlerMode::Live);

    let response = app
        .oneshot(
            Request::builder()
                .method("POST")
                .uri("/delete")
                .header("content-type", "text/plain")
                .body(Body::from("a"))
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert!(body_bytes(response).await.is_empty());
}

#[tokio::test]
async fn test_unsupported_method() {
    let app = create_test_app(HandlerMode::Live);

    let response = app
        .oneshot(
            Request::builder()
                .method("PATCH")
                .uri("/anything")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::NOT_IMPLEMENTED);
    assert_eq!(
        body_to_json(response).await,
        json!({"code": 501, "message": "Unsupported method"})
    );
}
