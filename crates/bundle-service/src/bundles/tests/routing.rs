use super::common::*;
use axum::extract::State;
use axum::http::StatusCode;
use serde_json::{json, Value};
use std::sync::Arc;
use tower::ServiceExt;

use crate::bundles::router::{suggest_handler, SuggestRequest};
use crate::bundles::service::BundleService;

fn suggest_payload(name: &str, age: u32, student: &str, income: u32) -> Value {
    json!({
        "customer_name": name,
        "age": age,
        "student": student,
        "income": income,
    })
}

#[tokio::test]
async fn suggest_route_creates_a_bundle() {
    let (service, _) = build_service();
    let router = router_with_service(service);

    let response = router
        .oneshot(
            axum::http::Request::post("/api/v1/bundles/suggest")
                .header(axum::http::header::CONTENT_TYPE, "application/json")
                .body(axum::body::Body::from(
                    suggest_payload("Robin", 30, "NO", 45_000).to_string(),
                ))
                .unwrap(),
        )
        .await
        .expect("route executes");

    assert_eq!(response.status(), StatusCode::CREATED);
    let payload = read_json_body(response).await;
    assert_eq!(payload.get("bundle"), Some(&json!("GOLD")));
    assert_eq!(payload.get("name"), Some(&json!("Gold")));
    assert_eq!(
        payload.get("products"),
        Some(&json!([
            "CURRENT_ACCOUNT_PLUS",
            "DEBIT_CARD",
            "GOLD_CREDIT_CARD"
        ]))
    );
}

#[tokio::test]
async fn suggest_route_maps_no_income_to_legal_rejection() {
    let (service, _) = build_service();
    let router = router_with_service(service);

    let response = router
        .oneshot(
            axum::http::Request::post("/api/v1/bundles/suggest")
                .header(axum::http::header::CONTENT_TYPE, "application/json")
                .body(axum::body::Body::from(
                    suggest_payload("Jason", 30, "NO", 0).to_string(),
                ))
                .unwrap(),
        )
        .await
        .expect("route executes");

    assert_eq!(response.status(), StatusCode::UNAVAILABLE_FOR_LEGAL_REASONS);
    let payload = read_json_body(response).await;
    assert_eq!(payload.get("products"), Some(&json!([])));
}

#[tokio::test]
async fn suggest_handler_rejects_blank_names() {
    let (service, _) = build_service();
    let service = Arc::new(service);

    let request = SuggestRequest {
        customer_name: "   ".to_string(),
        age: 30,
        student: crate::bundles::domain::StudentStatus::No,
        income: 45_000,
    };
    let response = suggest_handler::<MemoryStore>(State(service), axum::Json(request)).await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn suggest_handler_returns_internal_error_on_store_failure() {
    let service = Arc::new(BundleService::new(Arc::new(UnavailableStore)));

    let request = SuggestRequest {
        customer_name: "Robin".to_string(),
        age: 30,
        student: crate::bundles::domain::StudentStatus::No,
        income: 45_000,
    };
    let response = suggest_handler::<UnavailableStore>(State(service), axum::Json(request)).await;

    assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
}

#[tokio::test]
async fn customize_route_accepts_a_valid_swap() {
    let (service, _) = build_service();
    let router = router_with_service(service);

    let suggest = axum::http::Request::post("/api/v1/bundles/suggest")
        .header(axum::http::header::CONTENT_TYPE, "application/json")
        .body(axum::body::Body::from(
            suggest_payload("Robin", 30, "NO", 50_000).to_string(),
        ))
        .unwrap();
    let response = router.clone().oneshot(suggest).await.expect("suggest runs");
    assert_eq!(response.status(), StatusCode::CREATED);

    let customize = axum::http::Request::put("/api/v1/bundles/customize")
        .header(axum::http::header::CONTENT_TYPE, "application/json")
        .body(axum::body::Body::from(
            json!({
                "customer_name": "Robin",
                "age": 30,
                "student": "NO",
                "income": 50_000,
                "bundle": "GOLD",
                "add_products": ["CREDIT_CARD"],
                "remove_products": ["GOLD_CREDIT_CARD"],
            })
            .to_string(),
        ))
        .unwrap();
    let response = router.oneshot(customize).await.expect("customize runs");

    assert_eq!(response.status(), StatusCode::ACCEPTED);
    let payload = read_json_body(response).await;
    assert_eq!(
        payload.get("products"),
        Some(&json!(["CURRENT_ACCOUNT_PLUS", "DEBIT_CARD", "CREDIT_CARD"]))
    );
}

#[tokio::test]
async fn customize_route_renders_violations_on_rejection() {
    let (service, _) = build_service();
    let router = router_with_service(service);

    let suggest = axum::http::Request::post("/api/v1/bundles/suggest")
        .header(axum::http::header::CONTENT_TYPE, "application/json")
        .body(axum::body::Body::from(
            suggest_payload("Robin", 30, "NO", 50_000).to_string(),
        ))
        .unwrap();
    router.clone().oneshot(suggest).await.expect("suggest runs");

    let customize = axum::http::Request::put("/api/v1/bundles/customize")
        .header(axum::http::header::CONTENT_TYPE, "application/json")
        .body(axum::body::Body::from(
            json!({
                "customer_name": "Robin",
                "age": 30,
                "student": "NO",
                "income": 50_000,
                "bundle": "GOLD",
                "add_products": ["CURRENT_ACCOUNT", "CREDIT_CARD"],
                "remove_products": ["GOLD_CREDIT_CARD"],
            })
            .to_string(),
        ))
        .unwrap();
    let response = router.oneshot(customize).await.expect("customize runs");

    assert_eq!(response.status(), StatusCode::UNAVAILABLE_FOR_LEGAL_REASONS);
    let payload = read_json_body(response).await;
    let violations = payload
        .get("violations")
        .and_then(Value::as_array)
        .expect("violations listed");
    assert!(violations
        .iter()
        .any(|v| v.get("rule") == Some(&json!("ACCOUNT_COUNT_INVALID"))));
    let forbidden = payload
        .get("forbidden_products")
        .and_then(Value::as_array)
        .expect("forbidden listed");
    assert!(forbidden.contains(&json!("CURRENT_ACCOUNT")));
    assert!(forbidden.contains(&json!("CURRENT_ACCOUNT_PLUS")));
}

#[tokio::test]
async fn customize_route_returns_not_found_without_a_suggestion() {
    let (service, _) = build_service();
    let router = router_with_service(service);

    let customize = axum::http::Request::put("/api/v1/bundles/customize")
        .header(axum::http::header::CONTENT_TYPE, "application/json")
        .body(axum::body::Body::from(
            json!({
                "customer_name": "Amir",
                "age": 30,
                "student": "NO",
                "income": 50_000,
                "bundle": "GOLD",
                "remove_products": ["GOLD_CREDIT_CARD"],
            })
            .to_string(),
        ))
        .unwrap();
    let response = router.oneshot(customize).await.expect("customize runs");

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn current_route_returns_stored_state() {
    let (service, _) = build_service();
    let router = router_with_service(service);

    let suggest = axum::http::Request::post("/api/v1/bundles/suggest")
        .header(axum::http::header::CONTENT_TYPE, "application/json")
        .body(axum::body::Body::from(
            suggest_payload("Robin", 30, "NO", 8_000).to_string(),
        ))
        .unwrap();
    router.clone().oneshot(suggest).await.expect("suggest runs");

    let response = router
        .oneshot(
            axum::http::Request::get("/api/v1/bundles/Robin")
                .body(axum::body::Body::empty())
                .unwrap(),
        )
        .await
        .expect("lookup runs");

    assert_eq!(response.status(), StatusCode::OK);
    let payload = read_json_body(response).await;
    assert_eq!(payload.get("bundle"), Some(&json!("CLASSIC")));
    assert_eq!(
        payload.get("products"),
        Some(&json!(["CURRENT_ACCOUNT", "DEBIT_CARD"]))
    );
}

#[tokio::test]
async fn current_route_returns_not_found_for_unknown_customers() {
    let (service, _) = build_service();
    let router = router_with_service(service);

    let response = router
        .oneshot(
            axum::http::Request::get("/api/v1/bundles/nobody")
                .body(axum::body::Body::empty())
                .unwrap(),
        )
        .await
        .expect("lookup runs");

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}
