//! Request validation through the full router.
//!
//! The pool points at an unreachable address and connects lazily: every
//! request here must be answered before the store is touched.

use axum::body::{to_bytes, Body};
use axum::http::{Request, StatusCode};
use axum::Router;
use podium_server::db::create_lazy_pool;
use podium_server::{build_router, AppState, DatabaseConfig, SchemaName, ServerConfig};
use tower::ServiceExt;

fn app() -> Router {
    let config = DatabaseConfig::from_url("postgres://podium@127.0.0.1:1/podium", SchemaName::default())
        .expect("static url parses");
    let pool = create_lazy_pool(&config);
    build_router(AppState::new(pool), &ServerConfig::default())
}

async fn send(method: &str, uri: &str, body: Option<&str>) -> (StatusCode, String) {
    let mut request = Request::builder().method(method).uri(uri);
    let body = match body {
        Some(json) => {
            request = request.header("content-type", "application/json");
            Body::from(json.to_owned())
        }
        None => Body::empty(),
    };

    let response = app().oneshot(request.body(body).unwrap()).await.unwrap();
    let status = response.status();
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    (status, String::from_utf8(bytes.to_vec()).unwrap())
}

// === Create ===

#[tokio::test]
async fn sport_create_without_title() {
    let (status, text) = send("POST", "/sports/create", Some("{}")).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(text, "Field title is required");
}

#[tokio::test]
async fn blank_title_counts_as_missing() {
    for uri in ["/competitions/create", "/sports/create", "/stages/create"] {
        let (status, text) = send("POST", uri, Some(r#"{"title": "   "}"#)).await;
        assert_eq!(status, StatusCode::BAD_REQUEST, "{uri}");
        assert_eq!(text, "Field title is required", "{uri}");
    }
}

#[tokio::test]
async fn null_title_counts_as_missing() {
    let (status, text) = send("POST", "/stages/create", Some(r#"{"title": null, "place": "Pool"}"#)).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(text, "Field title is required");
}

#[tokio::test]
async fn competition_create_with_inverted_range() {
    let body = r#"{"title": "Summer Cup", "date_of_start": "2024-06-01", "date_of_end": "2024-05-01"}"#;
    let (status, text) = send("POST", "/competitions/create", Some(body)).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(text.starts_with("Start date of competition can't be later than end date"));
}

#[tokio::test]
async fn title_too_long() {
    let body = format!(r#"{{"title": "{}"}}"#, "x".repeat(257));
    let (status, text) = send("POST", "/sports/create", Some(&body)).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(text.contains("256"));
}

#[tokio::test]
async fn stage_create_with_bad_pairing_reference() {
    let (status, text) = send(
        "POST",
        "/stages/create",
        Some(r#"{"title": "Final", "competition_sport_id": 0}"#),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(text.contains("competition_sport_id"));
}

#[tokio::test]
async fn pairing_create_needs_both_ids() {
    let (status, text) = send("POST", "/competition_sport/create", Some(r#"{"competition_id": 1}"#)).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(text, "Field sport_id is required");

    let (status, text) = send("POST", "/competition_sport/create", Some(r#"{"sport_id": 1}"#)).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(text, "Field competition_id is required");
}

// === Update ===

#[tokio::test]
async fn update_requires_id_then_title() {
    for uri in ["/competitions/update", "/sports/update", "/stages/update"] {
        let (status, text) = send("POST", uri, Some(r#"{"title": "Renamed"}"#)).await;
        assert_eq!(status, StatusCode::BAD_REQUEST, "{uri}");
        assert_eq!(text, "Field id is required", "{uri}");

        let (status, text) = send("POST", uri, Some(r#"{"id": 3}"#)).await;
        assert_eq!(status, StatusCode::BAD_REQUEST, "{uri}");
        assert_eq!(text, "Field title is required", "{uri}");
    }
}

#[tokio::test]
async fn competition_update_checks_range() {
    let body = r#"{"id": 1, "title": "Cup", "date_of_start": "2024-06-01", "date_of_end": "2024-05-31"}"#;
    let (status, _) = send("POST", "/competitions/update", Some(body)).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
}

// === Delete ===

#[tokio::test]
async fn delete_requires_id() {
    for uri in [
        "/competitions/delete",
        "/sports/delete",
        "/stages/delete",
        "/competition_sport/delete",
    ] {
        let (status, text) = send("DELETE", uri, Some("{}")).await;
        assert_eq!(status, StatusCode::BAD_REQUEST, "{uri}");
        assert_eq!(text, "Field id is required", "{uri}");
    }
}

#[tokio::test]
async fn zero_id_counts_as_missing() {
    let (status, text) = send("DELETE", "/competitions/delete", Some(r#"{"id": 0}"#)).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(text, "Field id is required");
}

// === Malformed bodies ===

#[tokio::test]
async fn invalid_json_is_400() {
    let (status, _) = send("POST", "/sports/create", Some(r#"{"title": "#)).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn wrongly_typed_field_is_400() {
    let (status, _) = send(
        "POST",
        "/competitions/create",
        Some(r#"{"title": "Cup", "date_of_start": "June first"}"#),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);

    let (status, _) = send("DELETE", "/stages/delete", Some(r#"{"id": "seven"}"#)).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn missing_body_is_400() {
    let (status, _) = send("DELETE", "/sports/delete", None).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
}

// === Routing ===

#[tokio::test]
async fn health_and_root() {
    let (status, text) = send("GET", "/health", None).await;
    assert_eq!(status, StatusCode::OK);
    assert!(text.contains(r#""status":"ok""#));

    let (status, _) = send("GET", "/", None).await;
    assert_eq!(status, StatusCode::OK);
}

#[tokio::test]
async fn wrong_method_is_rejected() {
    let (status, _) = send("GET", "/competitions/create", None).await;
    assert_eq!(status, StatusCode::METHOD_NOT_ALLOWED);

    let (status, _) = send("POST", "/stages/delete", Some(r#"{"id": 1}"#)).await;
    assert_eq!(status, StatusCode::METHOD_NOT_ALLOWED);
}
