//! Field sets and object types shared across schemas.

use serde_json::json;

use super::preview::{self, PreviewConfig};
use super::{FieldDefinition, FieldKind, Rule, SchemaType};

/// Editor tab names.
pub mod group {
    pub const MAIN_CONTENT: &str = "main-content";
    pub const SEO: &str = "seo";
    pub const OG: &str = "og";
}

/// Add the standard editor tabs to a document schema.
pub fn with_groups(schema: SchemaType) -> SchemaType {
    schema
        .group(group::MAIN_CONTENT, "Content", true)
        .group(group::SEO, "SEO", false)
        .group(group::OG, "Open Graph", false)
}

pub fn rich_text_field() -> FieldDefinition {
    FieldDefinition::new("richText", FieldKind::RichText)
        .title("Rich Text")
        .description("Formatted body text")
}

pub fn buttons_field() -> FieldDefinition {
    FieldDefinition::new("buttons", FieldKind::Array)
        .title("Buttons")
        .description("Add buttons here, the website will handle the styling")
        .of(vec![FieldDefinition::member("button")])
}

/// Page builder array accepting the given block types, in menu order.
pub fn page_builder_field<S: AsRef<str>>(block_names: &[S]) -> FieldDefinition {
    FieldDefinition::new("pageBuilder", FieldKind::Array)
        .title("Page Builder")
        .description("Build the page from content blocks")
        .group(group::MAIN_CONTENT)
        .of(block_names
            .iter()
            .map(|name| FieldDefinition::member(name.as_ref()))
            .collect())
}

/// Search-engine overrides.
pub fn seo_fields() -> Vec<FieldDefinition> {
    vec![
        FieldDefinition::new("seoTitle", FieldKind::String)
            .title("SEO meta title override")
            .description("Replaces the page title in search results")
            .group(group::SEO),
        FieldDefinition::new("seoDescription", FieldKind::Text)
            .title("SEO meta description override")
            .description("Replaces the page description in search results")
            .group(group::SEO),
        FieldDefinition::new("seoImage", FieldKind::Image)
            .title("SEO image override")
            .group(group::SEO)
            .hotspot(),
        FieldDefinition::new("seoNoIndex", FieldKind::Boolean)
            .title("Hide from search engines")
            .initial_value(json!(false))
            .group(group::SEO),
        FieldDefinition::new("seoHideFromLists", FieldKind::Boolean)
            .title("Hide from lists")
            .initial_value(json!(false))
            .group(group::SEO),
    ]
}

/// Social-preview overrides.
pub fn og_fields() -> Vec<FieldDefinition> {
    vec![
        FieldDefinition::new("ogTitle", FieldKind::String)
            .title("Open Graph title")
            .description("Title shown when the page is shared")
            .group(group::OG),
        FieldDefinition::new("ogDescription", FieldKind::Text)
            .title("Open Graph description")
            .description("Description shown when the page is shared")
            .group(group::OG),
    ]
}

/// Meta description with search-result length guidance.
pub fn meta_description_field() -> FieldDefinition {
    FieldDefinition::new("description", FieldKind::Text)
        .title("Description")
        .description("A short summary of the page, also used in search results")
        .rows(3)
        .group(group::MAIN_CONTENT)
        .rule(Rule::min_length(140).warning(
            "The meta description should be at least 140 characters for optimal SEO visibility in search results",
        ))
        .rule(Rule::max_length(160).warning(
            "The meta description should not exceed 160 characters as it will be truncated in search results",
        ))
}

pub fn slug_field() -> FieldDefinition {
    FieldDefinition::new("slug", FieldKind::Slug)
        .title("Slug")
        .description("The web address of the page")
        .source("title")
        .group(group::MAIN_CONTENT)
        .required()
}

/// A link target: internal reference or external URL.
pub fn custom_url() -> SchemaType {
    SchemaType::object("customUrl", "Custom URL").fields([
        FieldDefinition::new("type", FieldKind::String)
            .title("Type")
            .list(&[("Internal", "internal"), ("External", "external")])
            .initial_value(json!("external")),
        FieldDefinition::new("openInNewTab", FieldKind::Boolean)
            .title("Open in new tab")
            .initial_value(json!(false)),
        FieldDefinition::new("external", FieldKind::Url).title("URL"),
        FieldDefinition::new("href", FieldKind::String).title("Href"),
        FieldDefinition::new("internal", FieldKind::Reference).title("Internal page"),
    ])
}

pub fn button() -> SchemaType {
    SchemaType::object("button", "Button")
        .icon("command")
        .fields([
            FieldDefinition::new("variant", FieldKind::String)
                .title("Variant")
                .list(&[
                    ("Default", "default"),
                    ("Secondary", "secondary"),
                    ("Outline", "outline"),
                    ("Link", "link"),
                ])
                .initial_value(json!("default")),
            FieldDefinition::new("label", FieldKind::String)
                .title("Button text")
                .required(),
            FieldDefinition::new("link", FieldKind::Named("customUrl".to_string()))
                .title("Url"),
        ])
        .preview(PreviewConfig::new(&[("title", "label"), ("subtitle", "variant")]))
}

pub fn navbar_link() -> SchemaType {
    SchemaType::object("navbarLink", "Navigation Link")
        .icon("link")
        .fields([
            FieldDefinition::new("name", FieldKind::String)
                .title("Name")
                .description("Name for the link"),
            FieldDefinition::new("description", FieldKind::String)
                .title("Description")
                .description("Optional description for mega menu items"),
            FieldDefinition::new("url", FieldKind::Named("customUrl".to_string())),
        ])
        .preview(
            PreviewConfig::new(&[
                ("title", "name"),
                ("externalUrl", "url.external"),
                ("urlType", "url.type"),
                ("internalUrl", "url.internal.slug.current"),
                ("href", "url.href"),
                ("openInNewTab", "url.openInNewTab"),
            ])
            .prepare(preview::navbar_link),
        )
}

pub fn navbar_column() -> SchemaType {
    SchemaType::object("navbarColumn", "Navigation Column")
        .icon("layout-panel-top")
        .fields([
            FieldDefinition::new("title", FieldKind::String)
                .title("Title")
                .description("Title for the dropdown/mega menu"),
            FieldDefinition::new("links", FieldKind::Array)
                .title("Links")
                .description("Links for the dropdown/mega menu")
                .of(vec![FieldDefinition::member("navbarLink")]),
        ])
        .preview(PreviewConfig::new(&[("title", "title"), ("links", "links")]).prepare(preview::navbar_column))
}

pub fn footer_column() -> SchemaType {
    SchemaType::object("footerColumn", "Footer Column").fields([
        FieldDefinition::new("title", FieldKind::String).title("Title"),
        FieldDefinition::new("links", FieldKind::Array)
            .title("Links")
            .of(vec![FieldDefinition::member("navbarLink")]),
    ])
    .preview(PreviewConfig::new(&[("title", "title"), ("links", "links")]).prepare(preview::navbar_column))
}

/// Object types referenced by name from other schemas.
pub fn object_types() -> Vec<SchemaType> {
    vec![
        button(),
        custom_url(),
        navbar_link(),
        navbar_column(),
        footer_column(),
    ]
}
