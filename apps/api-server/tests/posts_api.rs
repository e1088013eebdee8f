//! HTTP-level tests for the posts API.

use std::sync::Arc;

use actix_web::{App, http::StatusCode, test, web};

use api_server::handlers;
use api_server::middleware::error::json_config;
use api_server::middleware::rate_limit::RateLimits;
use api_server::state::AppState;
use masterblog_infra::{InMemoryPostStore, KeyedRateLimiter, RateLimitConfig};
use masterblog_shared::dto::PostResponse;

fn test_state() -> AppState {
    AppState::with_store(Arc::new(InMemoryPostStore::new()))
}

fn limits(read_per_minute: u32, write_per_minute: u32) -> RateLimits {
    RateLimits::new(
        Arc::new(KeyedRateLimiter::new(RateLimitConfig::per_minute(
            read_per_minute,
        ))),
        Arc::new(KeyedRateLimiter::new(RateLimitConfig::per_minute(
            write_per_minute,
        ))),
    )
}

/// Quotas high enough that ordinary tests never trip the limiter.
fn generous_limits() -> RateLimits {
    limits(10_000, 10_000)
}

fn sample_post(title: &str, author: &str, date: &str) -> serde_json::Value {
    serde_json::json!({
        "title": title,
        "content": format!("{title} body"),
        "author": author,
        "date": date,
    })
}

macro_rules! spawn_app {
    () => {
        spawn_app!(generous_limits())
    };
    ($limits:expr) => {{
        let limits = $limits;
        test::init_service(
            App::new()
                .app_data(web::Data::new(test_state()))
                .app_data(json_config())
                .configure(move |cfg| handlers::configure_routes(cfg, limits)),
        )
        .await
    }};
}

macro_rules! create_post {
    ($app:expr, $body:expr) => {{
        let req = test::TestRequest::post()
            .uri("/api/posts")
            .set_json($body)
            .to_request();
        let res = test::call_service($app, req).await;
        assert_eq!(res.status(), StatusCode::CREATED);
        let post: PostResponse = test::read_body_json(res).await;
        post
    }};
}

#[actix_web::test]
async fn create_returns_201_with_assigned_id() {
    let app = spawn_app!();

    let first = create_post!(&app, sample_post("First", "alice", "2024-03-17"));
    let second = create_post!(&app, sample_post("Second", "bob", "2024-03-18"));

    assert_eq!(first.id, 1);
    assert_eq!(second.id, 2);
    assert_eq!(first.title, "First");
    assert_eq!(first.date, "2024-03-17");
}

#[actix_web::test]
async fn create_names_every_missing_field() {
    let app = spawn_app!();

    let req = test::TestRequest::post()
        .uri("/api/posts")
        .set_json(serde_json::json!({"title": "only a title"}))
        .to_request();
    let res = test::call_service(&app, req).await;
    assert_eq!(res.status(), StatusCode::BAD_REQUEST);

    let body: serde_json::Value = test::read_body_json(res).await;
    let error = body["error"].as_str().unwrap();
    assert!(error.contains("content"));
    assert!(error.contains("author"));
    assert!(error.contains("date"));
    assert!(!error.contains("title"));
}

#[actix_web::test]
async fn create_rejects_bad_date_format() {
    let app = spawn_app!();

    let req = test::TestRequest::post()
        .uri("/api/posts")
        .set_json(sample_post("Post", "alice", "17-03-2024"))
        .to_request();
    let res = test::call_service(&app, req).await;
    assert_eq!(res.status(), StatusCode::BAD_REQUEST);

    let body: serde_json::Value = test::read_body_json(res).await;
    assert!(body["error"].as_str().unwrap().contains("YYYY-MM-DD"));
}

#[actix_web::test]
async fn malformed_json_body_is_a_400_with_error_envelope() {
    let app = spawn_app!();

    let req = test::TestRequest::post()
        .uri("/api/posts")
        .insert_header(("content-type", "application/json"))
        .set_payload("{not json")
        .to_request();
    let res = test::call_service(&app, req).await;
    assert_eq!(res.status(), StatusCode::BAD_REQUEST);

    let body: serde_json::Value = test::read_body_json(res).await;
    assert!(body["error"].is_string());
}

#[actix_web::test]
async fn update_changes_only_supplied_fields() {
    let app = spawn_app!();
    let created = create_post!(&app, sample_post("Original", "alice", "2024-03-17"));

    let req = test::TestRequest::put()
        .uri(&format!("/api/posts/{}", created.id))
        .set_json(serde_json::json!({"title": "Edited"}))
        .to_request();
    let res = test::call_service(&app, req).await;
    assert_eq!(res.status(), StatusCode::OK);

    let updated: PostResponse = test::read_body_json(res).await;
    assert_eq!(updated.id, created.id);
    assert_eq!(updated.title, "Edited");
    assert_eq!(updated.author, "alice");
    assert_eq!(updated.date, "2024-03-17");
}

#[actix_web::test]
async fn update_unknown_id_is_404() {
    let app = spawn_app!();

    let req = test::TestRequest::put()
        .uri("/api/posts/999")
        .set_json(serde_json::json!({"title": "nobody home"}))
        .to_request();
    let res = test::call_service(&app, req).await;
    assert_eq!(res.status(), StatusCode::NOT_FOUND);
}

#[actix_web::test]
async fn update_rejects_bad_date_for_existing_post() {
    let app = spawn_app!();
    let created = create_post!(&app, sample_post("Post", "alice", "2024-03-17"));

    let req = test::TestRequest::put()
        .uri(&format!("/api/posts/{}", created.id))
        .set_json(serde_json::json!({"date": "not-a-date"}))
        .to_request();
    let res = test::call_service(&app, req).await;
    assert_eq!(res.status(), StatusCode::BAD_REQUEST);
}

#[actix_web::test]
async fn delete_removes_post_from_listing() {
    let app = spawn_app!();
    let created = create_post!(&app, sample_post("Doomed", "alice", "2024-03-17"));

    let req = test::TestRequest::delete()
        .uri(&format!("/api/posts/{}", created.id))
        .to_request();
    let res = test::call_service(&app, req).await;
    assert_eq!(res.status(), StatusCode::OK);

    let body: serde_json::Value = test::read_body_json(res).await;
    assert_eq!(
        body["message"],
        format!(
            "Post with id {} has been deleted successfully.",
            created.id
        )
    );

    let req = test::TestRequest::get().uri("/api/posts").to_request();
    let posts: Vec<PostResponse> = test::call_and_read_body_json(&app, req).await;
    assert!(posts.is_empty());
}

#[actix_web::test]
async fn delete_unknown_id_is_404() {
    let app = spawn_app!();

    let req = test::TestRequest::delete()
        .uri("/api/posts/42")
        .to_request();
    let res = test::call_service(&app, req).await;
    assert_eq!(res.status(), StatusCode::NOT_FOUND);

    let body: serde_json::Value = test::read_body_json(res).await;
    assert!(body["error"].is_string());
}

#[actix_web::test]
async fn listing_sorts_by_allowed_fields_in_both_directions() {
    let app = spawn_app!();
    create_post!(&app, sample_post("Banana", "carol", "2024-02-01"));
    create_post!(&app, sample_post("Apple", "alice", "2024-03-01"));
    create_post!(&app, sample_post("Cherry", "bob", "2024-01-01"));

    let req = test::TestRequest::get()
        .uri("/api/posts?sort=title&direction=asc")
        .to_request();
    let posts: Vec<PostResponse> = test::call_and_read_body_json(&app, req).await;
    let titles: Vec<&str> = posts.iter().map(|p| p.title.as_str()).collect();
    assert_eq!(titles, vec!["Apple", "Banana", "Cherry"]);

    let req = test::TestRequest::get()
        .uri("/api/posts?sort=date&direction=desc")
        .to_request();
    let posts: Vec<PostResponse> = test::call_and_read_body_json(&app, req).await;
    let dates: Vec<&str> = posts.iter().map(|p| p.date.as_str()).collect();
    assert_eq!(dates, vec!["2024-03-01", "2024-02-01", "2024-01-01"]);
}

#[actix_web::test]
async fn listing_without_sort_keeps_insertion_order() {
    let app = spawn_app!();
    create_post!(&app, sample_post("Zed", "zoe", "2024-02-01"));
    create_post!(&app, sample_post("Ann", "amy", "2024-03-01"));

    let req = test::TestRequest::get().uri("/api/posts").to_request();
    let posts: Vec<PostResponse> = test::call_and_read_body_json(&app, req).await;
    let titles: Vec<&str> = posts.iter().map(|p| p.title.as_str()).collect();
    assert_eq!(titles, vec!["Zed", "Ann"]);
}

#[actix_web::test]
async fn invalid_sort_field_and_direction_are_400() {
    let app = spawn_app!();

    let req = test::TestRequest::get()
        .uri("/api/posts?sort=id")
        .to_request();
    let res = test::call_service(&app, req).await;
    assert_eq!(res.status(), StatusCode::BAD_REQUEST);

    let req = test::TestRequest::get()
        .uri("/api/posts?sort=title&direction=sideways")
        .to_request();
    let res = test::call_service(&app, req).await;
    assert_eq!(res.status(), StatusCode::BAD_REQUEST);
}

#[actix_web::test]
async fn free_text_search_matches_any_field() {
    let app = spawn_app!();
    create_post!(&app, sample_post("Rust tips", "alice", "2024-03-17"));
    create_post!(&app, sample_post("Gardening", "bob", "2024-03-18"));

    let req = test::TestRequest::get()
        .uri("/api/posts?search=RUST")
        .to_request();
    let posts: Vec<PostResponse> = test::call_and_read_body_json(&app, req).await;
    assert_eq!(posts.len(), 1);
    assert_eq!(posts[0].title, "Rust tips");

    // Date substrings match too
    let req = test::TestRequest::get()
        .uri("/api/posts?search=2024-03-18")
        .to_request();
    let posts: Vec<PostResponse> = test::call_and_read_body_json(&app, req).await;
    assert_eq!(posts.len(), 1);
    assert_eq!(posts[0].author, "bob");
}

#[actix_web::test]
async fn field_search_combines_filters_with_and() {
    let app = spawn_app!();
    create_post!(&app, sample_post("Rust tips", "alice", "2024-03-17"));
    create_post!(&app, sample_post("Rust news", "bob", "2024-03-18"));
    create_post!(&app, sample_post("Gardening", "alice", "2024-03-19"));

    let req = test::TestRequest::get()
        .uri("/api/posts/search?title=rust&author=alice")
        .to_request();
    let posts: Vec<PostResponse> = test::call_and_read_body_json(&app, req).await;
    assert_eq!(posts.len(), 1);
    assert_eq!(posts[0].title, "Rust tips");

    // No filters returns everything
    let req = test::TestRequest::get()
        .uri("/api/posts/search")
        .to_request();
    let posts: Vec<PostResponse> = test::call_and_read_body_json(&app, req).await;
    assert_eq!(posts.len(), 3);
}

#[actix_web::test]
async fn writes_over_quota_get_429_with_retry_after() {
    let app = spawn_app!(limits(10_000, 2));

    create_post!(&app, sample_post("one", "alice", "2024-03-17"));
    create_post!(&app, sample_post("two", "alice", "2024-03-17"));

    let req = test::TestRequest::post()
        .uri("/api/posts")
        .set_json(sample_post("three", "alice", "2024-03-17"))
        .to_request();
    let res = test::call_service(&app, req).await;
    assert_eq!(res.status(), StatusCode::TOO_MANY_REQUESTS);
    assert!(res.headers().contains_key("Retry-After"));

    // Reads have their own quota and still work
    let req = test::TestRequest::get().uri("/api/posts").to_request();
    let res = test::call_service(&app, req).await;
    assert_eq!(res.status(), StatusCode::OK);
}

#[actix_web::test]
async fn health_check_reports_ok() {
    let app = spawn_app!();

    let req = test::TestRequest::get().uri("/api/health").to_request();
    let res = test::call_service(&app, req).await;
    assert_eq!(res.status(), StatusCode::OK);

    let body: serde_json::Value = test::read_body_json(res).await;
    assert_eq!(body["status"], "ok");
}
