mod common;

use axum::body::Body;
use axum::http::{header, Request, StatusCode};
use common::{body_json, body_text, build_router, services};
use serde_json::json;
use tower::ServiceExt;
use web_service::schema::API_DESCRIPTION;

#[tokio::test]
async fn test_post_graphql() {
    let (keywords, projects) = services();
    let app = build_router(keywords, projects);

    let body = json!({ "query": "query { apiDescription }" }).to_string();
    let response = app
        .oneshot(
            Request::builder()
                .method("POST")
                .uri("/graphql")
                .header(header::CONTENT_TYPE, "application/json")
                .body(Body::from(body))
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let content = body_json(response).await;
    assert_eq!(content["data"]["apiDescription"], API_DESCRIPTION);
}

#[tokio::test]
async fn test_post_graphql_mutation_with_variables() {
    let (keywords, projects) = services();
    let app = build_router(keywords, projects);

    let body = json!({
        "query": "mutation ($word: String!) { createKeyword(word: $word) { keyword { id word } } }",
        "variables": { "word": "Rust" },
    })
    .to_string();
    let response = app
        .oneshot(
            Request::builder()
                .method("POST")
                .uri("/graphql")
                .header(header::CONTENT_TYPE, "application/json")
                .body(Body::from(body))
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let content = body_json(response).await;
    assert_eq!(content["data"]["createKeyword"]["keyword"], json!({ "id": "1", "word": "Rust" }));
}

#[tokio::test]
async fn test_get_graphql_with_query_string() {
    let (keywords, projects) = services();
    let app = build_router(keywords, projects);

    let response = app
        .oneshot(
            Request::builder()
                .uri("/graphql?query=%7BapiDescription%7D")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let content = body_json(response).await;
    assert_eq!(content["data"]["apiDescription"], API_DESCRIPTION);
}

#[tokio::test]
async fn test_get_graphql_without_query_returns_errors() {
    let (keywords, projects) = services();
    let app = build_router(keywords, projects);

    let response = app
        .oneshot(Request::builder().uri("/graphql").body(Body::empty()).unwrap())
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let content = body_json(response).await;
    assert!(!content["errors"].as_array().unwrap().is_empty());
    assert!(content["data"].is_null());
}

#[tokio::test]
async fn test_graphiql_page() {
    let (keywords, projects) = services();
    let app = build_router(keywords, projects);

    let response = app
        .oneshot(Request::builder().uri("/graphiql").body(Body::empty()).unwrap())
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let page = body_text(response).await;
    assert!(page.contains("/graphql"));
}

#[tokio::test]
async fn test_health_check() {
    let (keywords, projects) = services();
    let app = build_router(keywords, projects);

    let response = app
        .oneshot(Request::builder().uri("/health").body(Body::empty()).unwrap())
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let content = body_json(response).await;
    assert_eq!(content["status"], "healthy");
    assert_eq!(content["service"], "web-service");
}
