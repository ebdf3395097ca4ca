#![allow(clippy::unwrap_used, clippy::expect_used)]
//! Common test utilities for integration tests.
//!
//! Tests run against the real router built by `build_router`, backed by an
//! in-memory content snapshot instead of a content directory.

#![allow(dead_code)]

use std::sync::Arc;

use axum::Router;
use axum::body::Body;
use axum::http::{Request, StatusCode, header};
use axum::response::Response;
use http_body_util::BodyExt;
use serde_json::Value;
use tower::ServiceExt;

use vetrina_kernel::content::MemoryContentSource;
use vetrina_kernel::routes::build_router;
use vetrina_kernel::{AppState, Config};
use vetrina_test_utils::{
    button, cta, faq_accordion, footer, hero, home_page, image_link_cards, navbar,
    product_catalog, test_page,
};

/// Test application wrapping the real router.
pub struct TestApp {
    pub router: Router,
    pub state: AppState,
}

impl TestApp {
    /// Create an app over the sample site with default configuration.
    pub fn new() -> Self {
        Self::with_source(sample_site(), Config::default())
    }

    pub fn with_source(source: MemoryContentSource, config: Config) -> Self {
        let state = AppState::with_source(&config, Arc::new(source))
            .expect("Failed to create app state");
        let router = build_router(state.clone());
        Self { router, state }
    }

    /// Send a request through the router.
    pub async fn request(&self, request: Request<Body>) -> Response {
        self.router
            .clone()
            .oneshot(request)
            .await
            .expect("Failed to send request")
    }

    /// GET a path and return the status and body text.
    pub async fn get(&self, path: &str) -> (StatusCode, String) {
        let response = self
            .request(Request::get(path).body(Body::empty()).unwrap())
            .await;
        let status = response.status();
        (status, body_text(response).await)
    }

    /// POST a JSON body, optionally with a bearer token.
    pub async fn post_json(
        &self,
        path: &str,
        body: &Value,
        token: Option<&str>,
    ) -> (StatusCode, Value) {
        let mut builder = Request::post(path).header(header::CONTENT_TYPE, "application/json");
        if let Some(token) = token {
            builder = builder.header(header::AUTHORIZATION, format!("Bearer {token}"));
        }
        let response = self
            .request(builder.body(Body::from(body.to_string())).unwrap())
            .await;
        let status = response.status();
        let text = body_text(response).await;
        let json = serde_json::from_str(&text).unwrap_or(Value::String(text));
        (status, json)
    }
}

pub async fn body_text(response: Response) -> String {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    String::from_utf8(bytes.to_vec()).unwrap()
}

/// A small site: home page, an about page, navbar and footer.
pub fn sample_site() -> MemoryContentSource {
    let home = home_page("Welcome home")
        .with_block(hero("Welcome").with_key("hero1"))
        .with_block(
            cta("split", "Ready?")
                .with_key("cta1")
                .with_image("https://cdn.example.com/cta.jpg", "CTA")
                .with_buttons(vec![button("Shop", "/shop")]),
        );

    let about = test_page("About us", "/about")
        .with_block(faq_accordion("Questions", &[("How?", "Like this.")]).with_key("faq1"))
        .with_block(image_link_cards("Explore", &[("Docs", "/docs"), ("Bad", "javascript:alert(1)")]))
        .with_block(product_catalog("Catalog"));

    let nav = navbar()
        .with_link("Pricing", "/pricing")
        .with_column("Company", &[("About", "/about"), ("Careers", "/careers")])
        .with_button(button("Sign up", "/signup"));

    let foot = footer()
        .with_subtitle("Built for the web")
        .with_column("Legal", &[("Terms", "/terms")])
        .with_social("instagram", "https://instagram.com/vetrina");

    MemoryContentSource::new()
        .with_home(home.into_json())
        .with_page(about.into_json())
        .with_navbar(nav.into_json())
        .with_footer(foot.into_json())
}
