//! Admin query integration tests.

mod common;

use axum::http::StatusCode;
use chrono::{DateTime, Utc};
use common::{TestHarness, ADMIN_KEY};
use serde_json::json;

async fn submit_order(harness: &TestHarness, company: &str) {
    harness
        .server
        .post("/api/company-order")
        .json(&json!({
            "company_name": company,
            "email": "ops@example.com",
            "service_required": "Influencer campaign",
            "budget_range": "5000+"
        }))
        .await
        .assert_status_ok();
}

async fn submit_creator(harness: &TestHarness, name: &str) {
    harness
        .server
        .post("/api/creator-register")
        .json(&json!({
            "name": name,
            "email": "c@example.com",
            "niche": "gaming",
            "audience_size": "1k-10k"
        }))
        .await
        .assert_status_ok();
}

// ============================================================================
// Listings
// ============================================================================

#[tokio::test]
async fn empty_database_lists_nothing() {
    let harness = TestHarness::new().await;

    let body: serde_json::Value = harness.server.get("/api/admin/companies").await.json();
    assert_eq!(body["success"], true);
    assert_eq!(body["data"], json!([]));

    let body: serde_json::Value = harness.server.get("/api/admin/creators").await.json();
    assert_eq!(body["data"], json!([]));
}

#[tokio::test]
async fn companies_are_listed_newest_first() {
    let harness = TestHarness::new().await;
    for company in ["Acme", "Globex", "Initech"] {
        submit_order(&harness, company).await;
    }

    let response = harness.server.get("/api/admin/companies").await;
    response.assert_status_ok();
    let body: serde_json::Value = response.json();
    let data = body["data"].as_array().unwrap();

    assert_eq!(data.len(), 3);
    assert_eq!(data[0]["company_name"], "Initech");
    assert_eq!(data[0]["id"], 3);
    assert_eq!(data[2]["company_name"], "Acme");

    let timestamps: Vec<DateTime<Utc>> = data
        .iter()
        .map(|row| row["created_at"].as_str().unwrap().parse().unwrap())
        .collect();
    assert!(timestamps.windows(2).all(|w| w[0] >= w[1]));
}

#[tokio::test]
async fn creators_are_listed_newest_first() {
    let harness = TestHarness::new().await;
    for name in ["Jo", "Sam", "Ana", "Lee"] {
        submit_creator(&harness, name).await;
    }

    let response = harness.server.get("/api/admin/creators").await;
    response.assert_status_ok();
    let body: serde_json::Value = response.json();
    let data = body["data"].as_array().unwrap();

    let names: Vec<&str> = data.iter().map(|row| row["name"].as_str().unwrap()).collect();
    assert_eq!(names, ["Lee", "Ana", "Sam", "Jo"]);

    let ids: Vec<i64> = data.iter().map(|row| row["id"].as_i64().unwrap()).collect();
    assert_eq!(ids, [4, 3, 2, 1]);

    let timestamps: Vec<DateTime<Utc>> = data
        .iter()
        .map(|row| row["created_at"].as_str().unwrap().parse().unwrap())
        .collect();
    assert!(timestamps.windows(2).all(|w| w[0] >= w[1]));
}

#[tokio::test]
async fn creator_rows_include_every_column() {
    let harness = TestHarness::new().await;
    submit_creator(&harness, "Jo").await;

    let body: serde_json::Value = harness.server.get("/api/admin/creators").await.json();
    let row = body["data"][0].as_object().unwrap();

    for key in [
        "id",
        "name",
        "email",
        "instagram",
        "youtube",
        "tiktok",
        "twitter",
        "niche",
        "audience_size",
        "created_at",
    ] {
        assert!(row.contains_key(key), "missing column {key}");
    }
}

// ============================================================================
// Stats
// ============================================================================

#[tokio::test]
async fn stats_match_row_counts() {
    let harness = TestHarness::new().await;
    submit_order(&harness, "Acme").await;
    submit_order(&harness, "Globex").await;
    submit_creator(&harness, "Jo").await;

    let response = harness.server.get("/api/admin/stats").await;
    response.assert_status_ok();
    let body: serde_json::Value = response.json();

    assert_eq!(body["success"], true);
    assert_eq!(body["data"]["totalCompanies"], 2);
    assert_eq!(body["data"]["totalCreators"], 1);
}

#[tokio::test]
async fn queries_are_idempotent() {
    let harness = TestHarness::new().await;
    submit_order(&harness, "Acme").await;
    submit_creator(&harness, "Jo").await;

    for path in ["/api/admin/companies", "/api/admin/creators", "/api/admin/stats"] {
        let first: serde_json::Value = harness.server.get(path).await.json();
        let second: serde_json::Value = harness.server.get(path).await.json();
        assert_eq!(first, second, "{path} changed between calls");
    }
}

#[tokio::test]
async fn storage_failure_returns_generic_error() {
    let harness = TestHarness::new().await;
    harness.store.close().await;

    for path in ["/api/admin/companies", "/api/admin/creators", "/api/admin/stats"] {
        let response = harness.server.get(path).await;
        response.assert_status(StatusCode::INTERNAL_SERVER_ERROR);
        let body: serde_json::Value = response.json();
        assert_eq!(body["success"], false);
        assert_eq!(body["message"], "Database error occurred");
    }
}

// ============================================================================
// Admin key
// ============================================================================

#[tokio::test]
async fn admin_key_is_required_when_configured() {
    let harness = TestHarness::with_admin_key().await;

    let response = harness.server.get("/api/admin/stats").await;
    response.assert_status_unauthorized();
    let body: serde_json::Value = response.json();
    assert_eq!(body["success"], false);

    harness
        .server
        .get("/api/admin/stats")
        .add_header("x-admin-key", "wrong-key")
        .await
        .assert_status_unauthorized();

    harness
        .server
        .get("/api/admin/stats")
        .add_header("x-admin-key", ADMIN_KEY)
        .await
        .assert_status_ok();
}

#[tokio::test]
async fn only_the_admin_key_is_checked() {
    let harness = TestHarness::with_admin_key().await;

    harness
        .server
        .get("/api/admin/companies")
        .add_header("x-admin-id", "ops")
        .await
        .assert_status_unauthorized();

    let open = TestHarness::new().await;
    open.server
        .get("/api/admin/companies")
        .await
        .assert_status_ok();
}

#[tokio::test]
async fn intake_stays_open_when_admin_key_is_configured() {
    let harness = TestHarness::with_admin_key().await;

    submit_order(&harness, "Acme").await;
}
