use axum::{
    body::Body,
    http::{header, Request, StatusCode},
    Router,
};
use http_body_util::BodyExt;
use phonebook::api::middleware::AppState;
use phonebook::database::MemoryStore;
use phonebook::router::build_router;
use phonebook::services::{DuplicateNamePolicy, PersonService};
use std::sync::Arc;
use tower::ServiceExt;

fn app(policy: DuplicateNamePolicy) -> Router {
    let state = AppState {
        person_service: PersonService::new(Arc::new(MemoryStore::new()), policy),
    };
    build_router(state, "dist")
}

async fn json_body(response: axum::response::Response) -> serde_json::Value {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap()
}

fn post_person(name: &str, number: &str) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri("/api/persons")
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(
            serde_json::json!({ "name": name, "number": number }).to_string(),
        ))
        .unwrap()
}

#[tokio::test]
async fn test_unmatched_api_path_is_unknown_endpoint() {
    let app = app(DuplicateNamePolicy::Reject);

    let response = app
        .oneshot(
            Request::builder()
                .uri("/api/nothing/here")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    assert_eq!(json_body(response).await["error"], "unknown endpoint");
}

#[tokio::test]
async fn test_delete_returns_204_with_empty_body() {
    let app = app(DuplicateNamePolicy::Reject);

    let created = app.clone().oneshot(post_person("Arto Hellas", "040-123456")).await.unwrap();
    assert_eq!(created.status(), StatusCode::OK);
    let id = json_body(created).await["id"].as_str().unwrap().to_string();

    let response = app
        .clone()
        .oneshot(
            Request::builder()
                .method("DELETE")
                .uri(format!("/api/persons/{}", id))
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::NO_CONTENT);
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    assert!(bytes.is_empty());

    // Deleting the same id again is still 204
    let response = app
        .oneshot(
            Request::builder()
                .method("DELETE")
                .uri(format!("/api/persons/{}", id))
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::NO_CONTENT);
}

#[tokio::test]
async fn test_malformed_id_is_400_malformatted_id() {
    let app = app(DuplicateNamePolicy::Reject);

    let response = app
        .oneshot(
            Request::builder()
                .uri("/api/persons/not-an-id")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert_eq!(json_body(response).await["error"], "malformatted id");
}

#[tokio::test]
async fn test_duplicate_name_is_400_not_409() {
    let app = app(DuplicateNamePolicy::Reject);

    let first = app.clone().oneshot(post_person("Arto Hellas", "040-123456")).await.unwrap();
    assert_eq!(first.status(), StatusCode::OK);

    let second = app.oneshot(post_person("Arto Hellas", "09-7654321")).await.unwrap();
    assert_eq!(second.status(), StatusCode::BAD_REQUEST);
    assert_eq!(json_body(second).await["error"], "name must be unique");
}

#[tokio::test]
async fn test_absent_person_is_404_with_error_body() {
    let app = app(DuplicateNamePolicy::Reject);

    let response = app
        .oneshot(
            Request::builder()
                .uri("/api/persons/00000000-0000-0000-0000-000000000000")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    assert_eq!(json_body(response).await["error"], "person not found");
}

#[tokio::test]
async fn test_create_validation_error_body() {
    let app = app(DuplicateNamePolicy::Reject);

    let response = app
        .oneshot(
            Request::builder()
                .method("POST")
                .uri("/api/persons")
                .header(header::CONTENT_TYPE, "application/json")
                .body(Body::from("{}"))
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert_eq!(json_body(response).await["error"], "name or number missing");
}

#[tokio::test]
async fn test_list_and_get_round_trip() {
    let app = app(DuplicateNamePolicy::Reject);

    let created = app.clone().oneshot(post_person("Ada Lovelace", "39-4453235")).await.unwrap();
    let id = json_body(created).await["id"].as_str().unwrap().to_string();

    let response = app
        .clone()
        .oneshot(Request::builder().uri("/api/persons").body(Body::empty()).unwrap())
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    let list = json_body(response).await;
    assert_eq!(list.as_array().unwrap().len(), 1);

    let response = app
        .oneshot(
            Request::builder()
                .uri(format!("/api/persons/{}", id))
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    let person = json_body(response).await;
    assert_eq!(person["name"], "Ada Lovelace");
    assert_eq!(person["number"], "39-4453235");
    assert_eq!(person["id"], id.as_str());
}

#[tokio::test]
async fn test_info_reports_count() {
    let app = app(DuplicateNamePolicy::Reject);

    app.clone().oneshot(post_person("Arto Hellas", "040-123456")).await.unwrap();

    let response = app
        .oneshot(Request::builder().uri("/info").body(Body::empty()).unwrap())
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    let html = String::from_utf8(bytes.to_vec()).unwrap();
    assert!(html.contains("Phonebook has info for 1 people"));
}
