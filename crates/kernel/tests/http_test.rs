#![allow(clippy::unwrap_used, clippy::expect_used)]
//! HTTP surface tests against the real router.

use axum::http::StatusCode;
use serde_json::json;

use vetrina_kernel::Config;
use vetrina_kernel::content::MemoryContentSource;
use vetrina_test_utils::{hero, home_page, test_page};

mod common;
use common::{TestApp, sample_site};

// =============================================================================
// Health
// =============================================================================

#[tokio::test]
async fn health_check_returns_healthy() {
    let app = TestApp::new();
    let (status, body) = app.get("/health").await;
    assert_eq!(status, StatusCode::OK);

    let json: serde_json::Value = serde_json::from_str(&body).unwrap();
    assert_eq!(json["status"], "healthy");
    assert_eq!(json["blocks"], 5);
    assert_eq!(json["environment"], "local");
}

// =============================================================================
// Pages
// =============================================================================

#[tokio::test]
async fn home_page_renders_full_document() {
    let app = TestApp::new();
    let (status, html) = app.get("/").await;
    assert_eq!(status, StatusCode::OK);

    assert!(html.starts_with("<!DOCTYPE html>"));
    assert!(html.contains("<title>Welcome home | Vetrina</title>"));
    assert!(html.contains("data-block=\"hero\""));
    assert!(html.contains("cta__grid--split"));
    assert!(html.contains("Pricing"));
    assert!(html.contains("https://instagram.com/vetrina"));
    assert!(html.contains("rel=\"canonical\" href=\"http://localhost:3000/\""));
}

#[tokio::test]
async fn page_by_slug_renders_blocks_in_order() {
    let app = TestApp::new();
    let (status, html) = app.get("/about").await;
    assert_eq!(status, StatusCode::OK);

    let faq = html.find("data-block=\"faqAccordion\"").unwrap();
    let cards = html.find("data-block=\"imageLinkCards\"").unwrap();
    let catalog = html.find("data-block=\"productCatalog\"").unwrap();
    assert!(faq < cards && cards < catalog);
    assert!(html.contains("href=\"/docs\""));
    assert!(!html.contains("javascript:"));
}

#[tokio::test]
async fn unknown_slug_is_not_found() {
    let app = TestApp::new();
    let (status, _) = app.get("/does-not-exist").await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn missing_chrome_renders_skeletons() {
    let source = MemoryContentSource::new().with_home(
        home_page("Bare")
            .with_block(hero("Only hero"))
            .into_json(),
    );
    let app = TestApp::with_source(source, Config::default());
    let (status, html) = app.get("/").await;
    assert_eq!(status, StatusCode::OK);
    assert!(html.contains("navbar--skeleton"));
    assert!(html.contains("footer--skeleton"));
    assert!(html.contains("Only hero"));
}

#[tokio::test]
async fn broken_navbar_degrades_to_skeleton() {
    let source = sample_site().with_navbar(json!({ "columns": "not a list" }));
    let app = TestApp::with_source(source, Config::default());
    let (status, html) = app.get("/").await;
    assert_eq!(status, StatusCode::OK);
    assert!(html.contains("navbar--skeleton"));
    assert!(!html.contains("footer--skeleton"));
}

#[tokio::test]
async fn rendered_pages_are_cached() {
    let app = TestApp::new();
    app.get("/about").await;
    app.get("/about").await;

    let stats = app.state.cache().stats().await;
    assert_eq!(stats.entries, 1);
    assert_eq!(stats.hits, 1);
}

// =============================================================================
// Schema API
// =============================================================================

#[tokio::test]
async fn schema_listing_follows_menu_order() {
    let app = TestApp::new();
    let (status, body) = app.get("/api/schema").await;
    assert_eq!(status, StatusCode::OK);

    let json: serde_json::Value = serde_json::from_str(&body).unwrap();
    let names: Vec<&str> = json["blocks"]
        .as_array()
        .unwrap()
        .iter()
        .map(|b| b["name"].as_str().unwrap())
        .collect();
    assert_eq!(
        names,
        ["hero", "cta", "faqAccordion", "imageLinkCards", "productCatalog"]
    );
    assert!(json["documents"].as_array().unwrap().len() >= 4);
}

#[tokio::test]
async fn validate_reports_missing_title() {
    let app = TestApp::new();
    let (status, json) = app
        .post_json(
            "/api/schema/page/validate",
            &json!({ "_type": "page", "slug": { "current": "/x" } }),
            None,
        )
        .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["valid"], false);
    assert!(
        json["issues"]
            .as_array()
            .unwrap()
            .iter()
            .any(|i| i["path"] == "title" && i["severity"] == "error")
    );
}

#[tokio::test]
async fn validate_unknown_schema_is_not_found() {
    let app = TestApp::new();
    let (status, _) = app
        .post_json("/api/schema/nope/validate", &json!({}), None)
        .await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn preview_label_for_cta() {
    let app = TestApp::new();
    let (status, json) = app
        .post_json(
            "/api/schema/cta/preview",
            &json!({ "title": "Join", "style": "gradient", "subtitle": "Today" }),
            None,
        )
        .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["title"], "Join");
    assert_eq!(json["subtitle"], "Gradient Style - Today");
}

// =============================================================================
// Revalidation
// =============================================================================

#[tokio::test]
async fn revalidate_evicts_tagged_pages() {
    let app = TestApp::new();
    app.get("/about").await;
    app.get("/").await;

    let (status, json) = app
        .post_json(
            "/api/revalidate",
            &json!({
                "source": "mutation",
                "document": { "_id": "drafts.page-about", "_type": "page", "slug": { "current": "about" } }
            }),
            None,
        )
        .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["revalidated"], true);
    assert_eq!(json["invalidated"], 1);

    let stats = app.state.cache().stats().await;
    assert_eq!(stats.entries, 1);
}

#[tokio::test]
async fn navbar_change_evicts_every_page() {
    let app = TestApp::new();
    app.get("/about").await;
    app.get("/").await;

    let (_, json) = app
        .post_json(
            "/api/revalidate",
            &json!({ "document": { "_id": "navbar", "_type": "navbar" } }),
            None,
        )
        .await;
    assert_eq!(json["invalidated"], 2);
    assert_eq!(app.state.cache().stats().await.entries, 0);
}

#[tokio::test]
async fn revalidate_requires_token_when_configured() {
    let config = Config {
        revalidate_token: Some("s3cret".to_string()),
        ..Config::default()
    };
    let app = TestApp::with_source(sample_site(), config);
    let payload = json!({ "document": { "_id": "navbar" } });

    let (status, _) = app.post_json("/api/revalidate", &payload, None).await;
    assert_eq!(status, StatusCode::UNAUTHORIZED);

    let (status, _) = app
        .post_json("/api/revalidate", &payload, Some("wrong"))
        .await;
    assert_eq!(status, StatusCode::UNAUTHORIZED);

    let (status, json) = app
        .post_json("/api/revalidate", &payload, Some("s3cret"))
        .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["revalidated"], true);
}

#[tokio::test]
async fn non_mutation_events_are_ignored() {
    let app = TestApp::new();
    let (status, json) = app
        .post_json(
            "/api/revalidate",
            &json!({ "source": "publish-preview", "document": { "_id": "navbar" } }),
            None,
        )
        .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["revalidated"], false);
}

#[tokio::test]
async fn revalidate_all_flushes_cache() {
    let app = TestApp::new();
    app.get("/").await;
    app.get("/about").await;

    let (status, json) = app
        .post_json("/api/revalidate", &json!({ "all": true }), None)
        .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["invalidated"], 2);
    assert_eq!(app.state.cache().stats().await.entries, 0);
}

#[tokio::test]
async fn draft_page_with_untyped_block_renders_and_revalidates() {
    let page = test_page("Launch", "/launch")
        .with_id("drafts.launch-page")
        .with_raw_block(json!({ "title": "no type tag" }))
        .with_block(hero("Launching soon"));
    let app = TestApp::with_source(
        MemoryContentSource::new().with_page(page.into_json()),
        Config::default(),
    );

    let (status, html) = app.get("/launch").await;
    assert_eq!(status, StatusCode::OK);
    assert!(html.contains("Launching soon"));
    assert!(!html.contains("no type tag"));

    let (_, json) = app
        .post_json(
            "/api/revalidate",
            &json!({ "document": { "_id": "launch-page", "_type": "page" } }),
            None,
        )
        .await;
    assert_eq!(json["invalidated"], 1);
}

#[tokio::test]
async fn stray_navbar_entry_keeps_the_rest_of_the_navbar() {
    let source = sample_site().with_navbar(json!({
        "columns": [
            { "_type": "navbarLink", "name": "Pricing", "href": "/pricing" },
            { "name": "Stray", "href": "/stray" }
        ],
        "buttons": [{ "text": "Sign up", "href": "/signup" }]
    }));
    let app = TestApp::with_source(source, Config::default());
    let (status, html) = app.get("/").await;
    assert_eq!(status, StatusCode::OK);
    assert!(!html.contains("navbar--skeleton"));
    assert!(html.contains("Pricing"));
    assert!(html.contains("Sign up"));
    assert!(!html.contains("Stray"));
}
