//! Creator registration intake integration tests.

mod common;

use axum::http::StatusCode;
use common::TestHarness;
use linkzo_store::Store;
use serde_json::json;

#[tokio::test]
async fn registration_without_socials_stores_empty_strings() {
    let harness = TestHarness::new().await;

    let response = harness
        .server
        .post("/api/creator-register")
        .json(&json!({
            "name": "Jo",
            "email": "jo@x.com",
            "niche": "fitness",
            "audience_size": "10k"
        }))
        .await;

    response.assert_status_ok();
    let body: serde_json::Value = response.json();
    assert_eq!(body["success"], true);
    assert_eq!(body["message"], "Registration successful!");
    assert_eq!(body["creatorId"], 1);

    let creators = harness.store.list_creator_registrations().await.unwrap();
    assert_eq!(creators.len(), 1);
    assert_eq!(creators[0].instagram, "");
    assert_eq!(creators[0].youtube, "");
    assert_eq!(creators[0].tiktok, "");
    assert_eq!(creators[0].twitter, "");
}

#[tokio::test]
async fn socials_are_persisted() {
    let harness = TestHarness::new().await;

    harness
        .server
        .post("/api/creator-register")
        .json(&json!({
            "name": "Sam",
            "email": "sam@x.com",
            "instagram": "https://instagram.com/sam",
            "tiktok": "@sam",
            "niche": "travel",
            "audience_size": "100k+"
        }))
        .await
        .assert_status_ok();

    let body: serde_json::Value = harness.server.get("/api/admin/creators").await.json();
    let creator = &body["data"][0];
    assert_eq!(creator["instagram"], "https://instagram.com/sam");
    assert_eq!(creator["tiktok"], "@sam");
    assert_eq!(creator["youtube"], "");
    assert_eq!(creator["niche"], "travel");
}

#[tokio::test]
async fn null_socials_are_stored_as_empty_strings() {
    let harness = TestHarness::new().await;

    harness
        .server
        .post("/api/creator-register")
        .json(&json!({
            "name": "Jo",
            "email": "jo@x.com",
            "twitter": null,
            "niche": "fitness",
            "audience_size": "10k"
        }))
        .await
        .assert_status_ok();

    let creators = harness.store.list_creator_registrations().await.unwrap();
    assert_eq!(creators[0].twitter, "");
}

#[tokio::test]
async fn form_encoded_registration_is_accepted() {
    let harness = TestHarness::new().await;

    let response = harness
        .server
        .post("/api/creator-register")
        .form(&[
            ("name", "Jo"),
            ("email", "jo@x.com"),
            ("instagram", ""),
            ("niche", "fitness"),
            ("audience_size", "10k"),
        ])
        .await;

    response.assert_status_ok();
    let body: serde_json::Value = response.json();
    assert_eq!(body["creatorId"], 1);
}

#[tokio::test]
async fn missing_required_field_is_rejected() {
    let harness = TestHarness::new().await;

    for field in ["name", "email", "niche", "audience_size"] {
        let mut registration = json!({
            "name": "Jo",
            "email": "jo@x.com",
            "instagram": "@jo",
            "niche": "fitness",
            "audience_size": "10k"
        });
        registration[field] = json!("");

        let response = harness
            .server
            .post("/api/creator-register")
            .json(&registration)
            .await;

        response.assert_status_bad_request();
        let body: serde_json::Value = response.json();
        assert_eq!(body["success"], false);
        assert_eq!(
            body["message"],
            "Name, email, niche, and audience size are required"
        );
    }

    assert_eq!(harness.store.stats().await.unwrap().total_creators, 0);
}

#[tokio::test]
async fn bodyless_registration_reports_missing_fields() {
    let harness = TestHarness::new().await;

    let empty = harness.server.post("/api/creator-register").await;
    let plain = harness
        .server
        .post("/api/creator-register")
        .bytes("name=Jo".into())
        .content_type("text/plain")
        .await;

    for response in [empty, plain] {
        response.assert_status_bad_request();
        let body: serde_json::Value = response.json();
        assert_eq!(body["success"], false);
        assert_eq!(
            body["message"],
            "Name, email, niche, and audience size are required"
        );
    }

    assert_eq!(harness.store.stats().await.unwrap().total_creators, 0);
}

#[tokio::test]
async fn storage_failure_returns_generic_error() {
    let harness = TestHarness::new().await;
    harness.store.close().await;

    let response = harness
        .server
        .post("/api/creator-register")
        .json(&json!({
            "name": "Jo",
            "email": "jo@x.com",
            "niche": "fitness",
            "audience_size": "10k"
        }))
        .await;

    response.assert_status(StatusCode::INTERNAL_SERVER_ERROR);
    let body: serde_json::Value = response.json();
    assert_eq!(body["message"], "Database error occurred");
}
