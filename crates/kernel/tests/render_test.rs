#![allow(clippy::unwrap_used, clippy::expect_used)]
//! Block rendering behaviour exercised through the public library API.

use std::sync::Arc;

use serde_json::json;

use vetrina_kernel::content::model::NavbarDocument;
use vetrina_kernel::content::{RenderError, render_blocks};
use vetrina_kernel::layout::render_navbar;
use vetrina_kernel::schema::{FieldDefinition, FieldKind, SchemaType};
use vetrina_kernel::{Block, BlockRegistry, BlockRenderer};
use vetrina_test_utils::{button, cta, hero};

const CTA_LAYOUTS: [&str; 4] = [
    "cta__panel--simple",
    "cta__grid--split",
    "cta__panel--gradient",
    "cta__card\"",
];

fn registry() -> BlockRegistry {
    BlockRegistry::standard().unwrap()
}

fn render(value: serde_json::Value) -> String {
    let block = Block::from_value(value).unwrap();
    render_blocks(&registry(), &[block])
}

#[test]
fn every_block_renders_with_only_a_type_tag() {
    let registry = registry();
    for tag in registry.tags() {
        let block = Block::from_value(json!({ "_type": tag })).unwrap();
        let renderer = registry.component_for(tag).unwrap();
        let html = renderer.render(&block).unwrap();
        assert!(html.starts_with("<section"), "{tag}: {html}");
        assert!(html.contains(&format!("data-block=\"{tag}\"")));
    }
}

#[test]
fn cta_selects_exactly_one_layout() {
    for style in ["simple", "split", "gradient", "card", "neon", ""] {
        let html = render(cta(style, "Title").into_json());
        let matched = CTA_LAYOUTS.iter().filter(|m| html.contains(*m)).count();
        assert_eq!(matched, 1, "style {style:?}: {html}");
    }

    let html = render(json!({ "_type": "cta" }));
    assert!(html.contains("data-style=\"simple\""));
}

#[test]
fn buttons_without_targets_are_dropped_in_order() {
    let html = render(
        hero("Buttons")
            .with_buttons(vec![
                button("First", "/one"),
                button("Missing", "/x").without_href(),
                button("Second", "/two").nested(),
                button("Blank", "  "),
            ])
            .into_json(),
    );
    assert!(!html.contains("Missing"));
    assert!(!html.contains("Blank"));
    let first = html.find("First").unwrap();
    let second = html.find("Second").unwrap();
    assert!(first < second);
    assert_eq!(html.matches("<a ").count(), 2);
}

#[test]
fn registered_renderer_round_trips() {
    let mut registry = BlockRegistry::new();
    let renderer: Arc<dyn BlockRenderer> =
        Arc::new(|block: &Block| -> Result<String, RenderError> {
            Ok(format!("<section data-block=\"{}\"></section>", block.type_tag()))
        });
    let schema = SchemaType::object("banner", "Banner")
        .field(FieldDefinition::new("text", FieldKind::String));

    registry
        .register_arc("banner", Arc::clone(&renderer), schema)
        .unwrap();

    let found = registry.component_for("banner").unwrap();
    assert!(Arc::ptr_eq(&found, &renderer));
    assert_eq!(registry.schema_for("banner").unwrap().name, "banner");

    let html = render_blocks(
        &registry,
        &[Block::from_value(json!({ "_type": "banner" })).unwrap()],
    );
    assert_eq!(html, "<section data-block=\"banner\"></section>");
}

#[test]
fn hero_welcome_scenario() {
    let html = render(json!({ "_type": "hero", "title": "Welcome", "buttons": [] }));
    assert!(html.contains("<h1"));
    assert!(html.contains("Welcome"));
    assert!(!html.contains("badge"));
    assert!(!html.contains("<a "));
}

#[test]
fn cta_split_scenario() {
    let html = render(
        cta("split", "Ready?")
            .with_image("https://cdn.example.com/cta.jpg", "Shop front")
            .with_buttons(vec![button("Shop", "/shop").with_variant("default")])
            .into_json(),
    );
    assert!(html.contains("cta__grid--split"));
    assert!(html.contains("cta__media"));
    assert_eq!(html.matches("<a ").count(), 1);
    assert!(html.contains("href=\"/shop\""));
    assert!(html.contains(">Shop</a>"));
}

#[test]
fn navbar_without_columns() {
    let navbar: NavbarDocument = serde_json::from_value(json!({
        "label": "Navigation",
        "buttons": [button("Sign up", "/signup").into_json()]
    }))
    .unwrap();
    let html = render_navbar(Some(&navbar));
    assert!(html.contains("<a class=\"logo\" href=\"/\"><img"));
    assert!(html.contains("Sign up"));
    assert!(!html.contains("navbar__links"));
}

#[test]
fn unknown_and_malformed_blocks_do_not_break_the_page() {
    let page: vetrina_kernel::PageDocument = serde_json::from_value(json!({
        "_type": "page",
        "pageBuilder": [
            { "_type": "hero", "title": "Kept" },
            { "title": "no type tag" },
            { "_type": "hero", "title": 42 },
            { "_type": "carousel", "slides": [] },
            { "_type": "productCatalog", "title": "Also kept" }
        ]
    }))
    .unwrap();
    assert_eq!(page.blocks.len(), 3);

    let html = render_blocks(&registry(), &page.blocks);
    assert!(html.contains("Kept"));
    assert!(html.contains("Also kept"));
    assert!(!html.contains("carousel"));
}
