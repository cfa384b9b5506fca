use std::sync::Arc;

use axum::{
    body::{to_bytes, Body},
    http::{header, Request, StatusCode},
    Router,
};
use serde_json::{json, Value};
use tower::ServiceExt;
use tower_http::cors::CorsLayer;

use server::{build_router, ServerState};
use service::content::domain::DetailsRow;
use service::content::repository::mock::MockContentRepository;
use service::leads::repository::mock::MockLeadRepository;

struct TestApp {
    router: Router,
    content: Arc<MockContentRepository>,
    leads: Arc<MockLeadRepository>,
}

fn seeded_content() -> Arc<MockContentRepository> {
    let repo = MockContentRepository::default();
    repo.add_category(1, "Consulting", "consulting");
    repo.add_category(2, "Development", "development");
    repo.add_service(1, "Cloud Strategy", "cloud-strategy", Some(1));
    repo.add_service(2, "Agile Coaching", "agile-coaching", Some(1));
    repo.add_service(3, "Digital Transformation", "digital-transformation", Some(1));
    repo.add_service(4, "Web Development", "web-development", Some(2));
    repo.add_service(5, "Legacy Migration", "legacy-migration", Some(99));
    repo.add_details(DetailsRow {
        service_id: 4,
        benefits: json!([{"title": "Speed", "description": "Ship sooner", "icon": "Zap"}]),
        process: json!([
            {"title": "Build", "description": "Iterate", "order": 2},
            {"title": "Discover", "description": "Workshops", "order": 1}
        ]),
        related_services: json!([1]),
    });
    Arc::new(repo)
}

fn app() -> TestApp {
    let content = seeded_content();
    let leads = Arc::new(MockLeadRepository::default());
    let state = ServerState::new(content.clone(), leads.clone());
    let router = build_router(state, CorsLayer::very_permissive(), "/nonexistent-frontend-for-tests");
    TestApp { router, content, leads }
}

async fn get(router: &Router, uri: &str) -> (StatusCode, Value) {
    let res = router
        .clone()
        .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
        .await
        .unwrap();
    let status = res.status();
    let bytes = to_bytes(res.into_body(), usize::MAX).await.unwrap();
    let body = serde_json::from_slice(&bytes).unwrap_or(Value::Null);
    (status, body)
}

async fn post_json(router: &Router, uri: &str, body: String) -> (StatusCode, Value) {
    let res = router
        .clone()
        .oneshot(
            Request::builder()
                .method("POST")
                .uri(uri)
                .header(header::CONTENT_TYPE, "application/json")
                .body(Body::from(body))
                .unwrap(),
        )
        .await
        .unwrap();
    let status = res.status();
    let bytes = to_bytes(res.into_body(), usize::MAX).await.unwrap();
    (status, serde_json::from_slice(&bytes).unwrap())
}

#[tokio::test]
async fn health_ok() {
    let app = app();
    let (status, body) = get(&app.router, "/health").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!({"status": "ok"}));
}

#[tokio::test]
async fn services_are_ordered_by_title() {
    let app = app();
    let (status, body) = get(&app.router, "/api/services").await;
    assert_eq!(status, StatusCode::OK);
    let titles: Vec<&str> = body.as_array().unwrap().iter().map(|s| s["title"].as_str().unwrap()).collect();
    assert_eq!(
        titles,
        vec!["Agile Coaching", "Cloud Strategy", "Digital Transformation", "Legacy Migration", "Web Development"]
    );
}

#[tokio::test]
async fn unknown_category_gives_empty_list() {
    let app = app();
    let (status, body) = get(&app.router, "/api/services?category=quantum").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!([]));
}

#[tokio::test]
async fn category_filter_applies() {
    let app = app();
    let (_, body) = get(&app.router, "/api/services?category=development").await;
    let slugs: Vec<&str> = body.as_array().unwrap().iter().map(|s| s["slug"].as_str().unwrap()).collect();
    assert_eq!(slugs, vec!["web-development"]);
}

#[tokio::test]
async fn unknown_service_is_404_json() {
    let app = app();
    let (status, body) = get(&app.router, "/api/services/does-not-exist").await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["error"], "Not Found");
}

#[tokio::test]
async fn service_detail_includes_details_and_related() {
    let app = app();
    let (status, body) = get(&app.router, "/api/services/web-development").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["category_label"], "Development");
    assert_eq!(body["details"]["process"][0]["title"], "Discover");
    let related: Vec<&str> = body["related_services"].as_array().unwrap().iter().map(|s| s["slug"].as_str().unwrap()).collect();
    assert_eq!(related, vec!["cloud-strategy"]);
}

#[tokio::test]
async fn missing_category_uses_fallback_label() {
    let app = app();
    let (status, body) = get(&app.router, "/api/services/legacy-migration").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["category_label"], "Service");
    assert!(body["category"].is_null());
}

#[tokio::test]
async fn siblings_fill_related_when_no_details() {
    let app = app();
    let (_, body) = get(&app.router, "/api/services/cloud-strategy").await;
    assert!(body["details"].is_null());
    let related: Vec<&str> = body["related_services"].as_array().unwrap().iter().map(|s| s["slug"].as_str().unwrap()).collect();
    assert_eq!(related, vec!["agile-coaching", "digital-transformation"]);
}

#[tokio::test]
async fn categories_and_category_by_slug() {
    let app = app();
    let (_, body) = get(&app.router, "/api/service-categories").await;
    assert_eq!(body.as_array().unwrap().len(), 2);
    assert_eq!(body[0]["slug"], "consulting");

    let (status, body) = get(&app.router, "/api/service-categories/development").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["name"], "Development");

    let (status, _) = get(&app.router, "/api/service-categories/nope").await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn navigation_groups_respect_limit() {
    let app = app();
    let (status, body) = get(&app.router, "/api/navigation?limit=2").await;
    assert_eq!(status, StatusCode::OK);
    let groups = body.as_array().unwrap();
    assert_eq!(groups.len(), 2);
    assert_eq!(groups[0]["category"]["slug"], "consulting");
    assert_eq!(groups[0]["services"].as_array().unwrap().len(), 2);
    assert_eq!(groups[1]["services"].as_array().unwrap().len(), 1);
}

#[tokio::test]
async fn navigation_limit_out_of_range_is_clamped() {
    let app = app();
    let (status, body) = get(&app.router, "/api/navigation?limit=9223372036854775808").await;
    assert_eq!(status, StatusCode::OK);
    let counts: Vec<usize> = body.as_array().unwrap().iter().map(|g| g["services"].as_array().unwrap().len()).collect();
    assert_eq!(counts, vec![3, 1]);

    let (_, body) = get(&app.router, "/api/navigation?limit=0").await;
    let counts: Vec<usize> = body.as_array().unwrap().iter().map(|g| g["services"].as_array().unwrap().len()).collect();
    assert_eq!(counts, vec![1, 1]);
}

#[tokio::test]
async fn store_failure_is_generic_500() {
    let app = app();
    app.content.fail_all();
    let (status, body) = get(&app.router, "/api/services").await;
    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(body["error"], "Internal Server Error");
    assert!(!body.to_string().contains("mock"));

    let (status, body) = get(&app.router, "/api/navigation").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!([]));
}

#[tokio::test]
async fn lead_with_required_fields_is_stored() {
    let app = app();
    let (status, body) = post_json(
        &app.router,
        "/api/leads",
        json!({"name": "Grace Hopper", "email": "grace@example.com"}).to_string(),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["success"], true);
    assert_eq!(body["message"], "Thank you for your interest! We will contact you soon.");
    assert_eq!(app.leads.rows().len(), 1);
}

#[tokio::test]
async fn lead_with_invalid_email_is_rejected() {
    let app = app();
    let (status, body) = post_json(
        &app.router,
        "/api/leads",
        json!({"name": "Grace Hopper", "email": "grace@"}).to_string(),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["success"], false);
    assert_eq!(body["message"], "Please enter a valid email address.");
    assert!(app.leads.rows().is_empty());
}

#[tokio::test]
async fn malformed_lead_body_still_answers_with_outcome() {
    let app = app();
    let (status, body) = post_json(&app.router, "/api/leads", "{not json".into()).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["success"], false);
    assert!(body["message"].is_string());
}

#[tokio::test]
async fn lead_insert_failure_is_500_outcome() {
    let app = app();
    app.leads.fail_inserts();
    let (status, body) = post_json(
        &app.router,
        "/api/leads",
        json!({"name": "Grace Hopper", "email": "grace@example.com"}).to_string(),
    )
    .await;
    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(body, json!({"success": false, "message": "Failed to submit your information. Please try again."}));
}

#[tokio::test]
async fn openapi_document_lists_routes() {
    let app = app();
    let (status, body) = get(&app.router, "/api-docs/openapi.json").await;
    assert_eq!(status, StatusCode::OK);
    assert!(body["paths"]["/api/leads"].is_object());
    assert!(body["paths"]["/api/services/{slug}"].is_object());
}
