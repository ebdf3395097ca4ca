//! Document schemas: home page, pages, navigation and footer.

use serde_json::{Value, json};

use super::blocks::cta_initial_value;
use super::common::{
    group, meta_description_field, og_fields, page_builder_field, seo_fields, slug_field,
    with_groups,
};
use super::preview::{self, PreviewConfig};
use super::{FieldDefinition, FieldKind, SchemaType};

pub fn home_page<S: AsRef<str>>(block_names: &[S]) -> SchemaType {
    let seo = seo_fields()
        .into_iter()
        .filter(|f| f.name != "seoNoIndex" && f.name != "seoHideFromLists");

    with_groups(SchemaType::document("homePage", "Home Page"))
        .icon("home")
        .description(
            "The main page visitors see when they first come to the website: a welcoming title, \
             a short description, and sections built from page-builder blocks.",
        )
        .field(
            FieldDefinition::new("title", FieldKind::String)
                .title("Title")
                .description("The main heading that will appear at the top of your home page")
                .group(group::MAIN_CONTENT),
        )
        .field(meta_description_field())
        .field(
            slug_field()
                .description("The web address for your home page. Usually this is just '/'."),
        )
        .field(page_builder_field(block_names).initial_value(Value::Array(vec![cta_initial_value()])))
        .fields(seo)
        .fields(og_fields())
        .preview(
            PreviewConfig::new(&[
                ("title", "title"),
                ("description", "description"),
                ("slug", "slug.current"),
            ])
            .prepare(preview::home_page),
        )
}

pub fn page<S: AsRef<str>>(block_names: &[S]) -> SchemaType {
    with_groups(SchemaType::document("page", "Page"))
        .icon("file")
        .description("A page built from page-builder blocks")
        .field(
            FieldDefinition::new("title", FieldKind::String)
                .title("Title")
                .group(group::MAIN_CONTENT)
                .required(),
        )
        .field(meta_description_field())
        .field(slug_field())
        .field(page_builder_field(block_names))
        .fields(seo_fields())
        .fields(og_fields())
        .preview(
            PreviewConfig::new(&[("title", "title"), ("slug", "slug.current")])
                .prepare(preview::page),
        )
}

pub fn navbar() -> SchemaType {
    SchemaType::document("navbar", "Navigation")
        .icon("panel-top")
        .fields([
            FieldDefinition::new("label", FieldKind::String)
                .title("Label")
                .description("Label used to identify navigation in the CMS")
                .initial_value(json!("Navigation"))
                .required(),
            FieldDefinition::new("columns", FieldKind::Array)
                .title("Menu Items")
                .description("Add main navigation items (can be simple links or dropdown menus)")
                .of(vec![
                    FieldDefinition::member("navbarColumn"),
                    FieldDefinition::member("navbarLink"),
                ]),
            FieldDefinition::new("buttons", FieldKind::Array)
                .title("CTA Buttons")
                .description("Add call-to-action buttons to the navbar")
                .of(vec![FieldDefinition::member("button")]),
        ])
        .preview(PreviewConfig::new(&[("title", "label")]).prepare(preview::navbar))
}

pub fn footer() -> SchemaType {
    let social = ["instagram", "facebook", "twitter", "linkedin", "youtube"]
        .into_iter()
        .map(|name| FieldDefinition::new(name, FieldKind::Url).title(name))
        .collect();

    SchemaType::document("footer", "Footer")
        .icon("panel-bottom")
        .fields([
            FieldDefinition::new("label", FieldKind::String)
                .title("Label")
                .description("Label used to identify the footer in the CMS")
                .initial_value(json!("Footer"))
                .required(),
            FieldDefinition::new("subtitle", FieldKind::Text)
                .title("Subtitle")
                .description("Short text shown under the logo")
                .rows(2),
            FieldDefinition::new("columns", FieldKind::Array)
                .title("Columns")
                .of(vec![FieldDefinition::member("footerColumn")]),
            FieldDefinition::new("socialLinks", FieldKind::Object)
                .title("Social links")
                .fields(social),
        ])
        .preview(PreviewConfig::new(&[("title", "label")]).prepare(preview::footer))
}

/// Every document schema, with page builders accepting `block_names`.
pub fn all<S: AsRef<str>>(block_names: &[S]) -> Vec<SchemaType> {
    vec![home_page(block_names), page(block_names), navbar(), footer()]
}
