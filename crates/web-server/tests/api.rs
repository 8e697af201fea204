//! End-to-end tests for the HTTP adapter, driving the router in-process.

use axum::body::Body;
use axum::http::{header, Request, StatusCode};
use axum::Router;
use catalog::FundCatalog;
use configuration::FundSeed;
use core_types::FundCategory;
use http_body_util::BodyExt;
use ledger::{Ledger, SharedLedger};
use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde_json::{json, Value};
use std::sync::Arc;
use tower::ServiceExt;
use web_server::{build_router, AppState};

fn seed(id: u32, name: &str, minimum: Decimal, category: FundCategory) -> FundSeed {
    FundSeed {
        id,
        name: name.to_string(),
        minimum_investment: minimum,
        category,
        risk_level: None,
    }
}

/// A router over the original session: five funds, 500k opening balance.
fn app() -> Router {
    let catalog = Arc::new(
        FundCatalog::from_seed(&[
            seed(1, "FPV_EL_CLIENTE_RECAUDADORA", dec!(75_000), FundCategory::Fpv),
            seed(2, "FPV_EL_CLIENTE_ECOPETROL", dec!(125_000), FundCategory::Fpv),
            seed(3, "DEUDAPRIVADA", dec!(50_000), FundCategory::Fic),
            seed(4, "FDO-ACCIONES", dec!(250_000), FundCategory::Fic),
            seed(5, "FPV_EL_CLIENTE_DINAMICA", dec!(100_000), FundCategory::Fpv),
        ])
        .unwrap(),
    );
    let ledger = SharedLedger::new(Ledger::new(catalog, dec!(500_000)).unwrap());
    build_router(AppState { ledger })
}

fn get(path: &str) -> Request<Body> {
    Request::builder().uri(path).body(Body::empty()).unwrap()
}

fn post(path: &str, body: Value) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri(path)
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(body.to_string()))
        .unwrap()
}

async fn body_json(response: axum::response::Response) -> Value {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap()
}

#[tokio::test]
async fn health_endpoint_responds() {
    let response = app().oneshot(get("/api/health")).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);
}

#[tokio::test]
async fn lists_the_seeded_catalog() {
    let response = app().oneshot(get("/api/funds")).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let funds = body_json(response).await;
    let funds = funds.as_array().unwrap();
    assert_eq!(funds.len(), 5);
    assert_eq!(funds[0]["name"], "FPV_EL_CLIENTE_RECAUDADORA");
    assert_eq!(funds[2]["category"], "FIC");
}

#[tokio::test]
async fn fetches_one_fund_or_404() {
    let app = app();

    let response = app.clone().oneshot(get("/api/funds/4")).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(body_json(response).await["name"], "FDO-ACCIONES");

    let response = app.oneshot(get("/api/funds/99")).await.unwrap();
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn subscribe_then_wallet_reflects_the_debit() {
    let app = app();

    let response = app
        .clone()
        .oneshot(post("/api/funds/subscribe", json!({ "fund_id": 1 })))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    let outcome = body_json(response).await;
    assert_eq!(outcome["new_balance"], "425000");

    let response = app.oneshot(get("/api/wallet")).await.unwrap();
    let wallet = body_json(response).await;
    assert_eq!(wallet["balance"], "425000");
    assert_eq!(wallet["active_subscriptions"].as_array().unwrap().len(), 1);
}

#[tokio::test]
async fn duplicate_subscription_conflicts() {
    let app = app();

    app.clone()
        .oneshot(post("/api/funds/subscribe", json!({ "fund_id": 1 })))
        .await
        .unwrap();
    let response = app
        .oneshot(post("/api/funds/subscribe", json!({ "fund_id": 1 })))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::CONFLICT);
}

#[tokio::test]
async fn unknown_fund_subscription_is_404() {
    let response = app()
        .oneshot(post("/api/funds/subscribe", json!({ "fund_id": 42 })))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn unaffordable_fund_is_a_bad_request() {
    let app = app();

    // Drain the wallet below FDO-ACCIONES's 250k minimum.
    for fund_id in [1, 2, 3, 5] {
        let response = app
            .clone()
            .oneshot(post("/api/funds/subscribe", json!({ "fund_id": fund_id })))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
    }

    let response = app
        .oneshot(post("/api/funds/subscribe", json!({ "fund_id": 4 })))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let body = body_json(response).await;
    let message = body["error"].as_str().unwrap();
    assert!(message.contains("250000"));
    assert!(message.contains("150000"));
}

#[tokio::test]
async fn cancelling_without_membership_conflicts() {
    let response = app()
        .oneshot(post("/api/funds/unsubscribe", json!({ "fund_id": 1 })))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::CONFLICT);
}

#[tokio::test]
async fn history_orders_per_query_param() {
    let app = app();

    app.clone()
        .oneshot(post("/api/funds/subscribe", json!({ "fund_id": 1 })))
        .await
        .unwrap();
    app.clone()
        .oneshot(post("/api/funds/unsubscribe", json!({ "fund_id": 1 })))
        .await
        .unwrap();

    let response = app
        .clone()
        .oneshot(get("/api/transactions?order=oldest"))
        .await
        .unwrap();
    let oldest = body_json(response).await;
    assert_eq!(oldest[0]["kind"], "SUBSCRIPTION");
    assert_eq!(oldest[1]["kind"], "CANCELLATION");

    // Newest-first is the default.
    let response = app.oneshot(get("/api/transactions")).await.unwrap();
    let newest = body_json(response).await;
    assert_eq!(newest[0]["kind"], "CANCELLATION");
    assert_eq!(newest[1]["kind"], "SUBSCRIPTION");
}
