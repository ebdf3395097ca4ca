//! Schemas for the built-in page-builder blocks.

use serde_json::json;

use super::common::{buttons_field, rich_text_field};
use super::preview::{self, PreviewConfig};
use super::{FieldDefinition, FieldKind, SchemaType};
use crate::content::model::tag;

/// Example body used as the CTA's initial rich text.
fn cta_initial_rich_text() -> serde_json::Value {
    json!([{
        "_type": "block",
        "style": "normal",
        "children": [{
            "_type": "span",
            "text": "Join thousands of dental professionals who trust us for their equipment and supply needs. Enjoy premium quality, competitive prices, and exceptional service."
        }]
    }])
}

fn cta_initial_stats() -> serde_json::Value {
    json!([
        { "value": "5000+", "label": "Products" },
        { "value": "24/7", "label": "Support" },
        { "value": "98%", "label": "Satisfaction" },
        { "value": "Next Day", "label": "Delivery" }
    ])
}

fn cta_initial_buttons() -> serde_json::Value {
    json!([
        {
            "_type": "button",
            "label": "Browse Products",
            "variant": "default",
            "link": { "href": "/products", "type": "internal" }
        },
        {
            "_type": "button",
            "label": "Contact Sales",
            "variant": "outline",
            "link": { "href": "/contact", "type": "internal" }
        }
    ])
}

/// Initial value of a freshly inserted CTA block (also seeds new home pages).
pub fn cta_initial_value() -> serde_json::Value {
    json!({
        "_type": tag::CTA,
        "style": "gradient",
        "eyebrow": "Special Offer",
        "title": "Transform Your Practice with Premium Dental Equipment",
        "subtitle": "Get exclusive deals on our most popular dental supplies",
        "richText": cta_initial_rich_text(),
        "stats": cta_initial_stats(),
        "buttons": cta_initial_buttons()
    })
}

pub fn hero() -> SchemaType {
    SchemaType::object(tag::HERO, "Hero")
        .icon("star")
        .fields([
            FieldDefinition::new("badge", FieldKind::String)
                .title("Badge")
                .description("Optional badge displayed above the title"),
            FieldDefinition::new("title", FieldKind::String)
                .title("Title")
                .description("The main heading of the hero"),
            rich_text_field(),
            FieldDefinition::new("image", FieldKind::Image)
                .title("Image")
                .hotspot(),
            buttons_field(),
        ])
        .preview(
            PreviewConfig::new(&[("title", "title"), ("badge", "badge")]).prepare(preview::hero),
        )
}

pub fn cta() -> SchemaType {
    SchemaType::object(tag::CTA, "CTA")
        .icon("megaphone")
        .fields([
            FieldDefinition::new("style", FieldKind::String)
                .title("Style")
                .description("Choose the visual style of the CTA block")
                .list(&[
                    ("Simple Center", "simple"),
                    ("Split with Image", "split"),
                    ("Gradient Background", "gradient"),
                    ("Card Style", "card"),
                ])
                .initial_value(json!("gradient")),
            FieldDefinition::new("eyebrow", FieldKind::String)
                .title("Eyebrow")
                .description("Optional small text above the title (e.g., 'Limited Time Offer')")
                .initial_value(json!("Special Offer")),
            FieldDefinition::new("title", FieldKind::String)
                .title("Title")
                .description("The main heading of your CTA")
                .required()
                .initial_value(json!("Transform Your Practice with Premium Dental Equipment")),
            FieldDefinition::new("subtitle", FieldKind::String)
                .title("Subtitle")
                .description("Optional secondary heading below the title")
                .initial_value(json!("Get exclusive deals on our most popular dental supplies")),
            rich_text_field().initial_value(cta_initial_rich_text()),
            FieldDefinition::new("image", FieldKind::Image)
                .title("Image")
                .description("Optional image for split or card layouts")
                .hotspot(),
            FieldDefinition::new("backgroundImage", FieldKind::Image)
                .title("Background Image")
                .description("Optional background image (works best with gradient style)")
                .hotspot(),
            FieldDefinition::new("stats", FieldKind::Array)
                .title("Statistics")
                .description("Optional statistics to display (e.g., '1000+ Products', '24/7 Support')")
                .of(vec![FieldDefinition::new("stat", FieldKind::Object).fields(vec![
                    FieldDefinition::new("value", FieldKind::String)
                        .title("Value")
                        .description("The numerical or text value (e.g., '1000+')"),
                    FieldDefinition::new("label", FieldKind::String)
                        .title("Label")
                        .description("Description of the value (e.g., 'Products')"),
                ])])
                .initial_value(cta_initial_stats()),
            buttons_field().initial_value(cta_initial_buttons()),
        ])
        .preview(
            PreviewConfig::new(&[("title", "title"), ("subtitle", "subtitle"), ("style", "style")])
                .prepare(preview::cta),
        )
}

pub fn faq_accordion() -> SchemaType {
    SchemaType::object(tag::FAQ_ACCORDION, "FAQ Accordion")
        .icon("message-circle-question")
        .fields([
            FieldDefinition::new("eyebrow", FieldKind::String).title("Eyebrow"),
            FieldDefinition::new("title", FieldKind::String).title("Title"),
            FieldDefinition::new("subtitle", FieldKind::String).title("Subtitle"),
            FieldDefinition::new("faqs", FieldKind::Array)
                .title("FAQs")
                .of(vec![FieldDefinition::new("faq", FieldKind::Object).fields(vec![
                    FieldDefinition::new("title", FieldKind::String)
                        .title("Question")
                        .required(),
                    rich_text_field().title("Answer"),
                ])]),
            FieldDefinition::new("link", FieldKind::Object)
                .title("More questions link")
                .fields(vec![
                    FieldDefinition::new("title", FieldKind::String).title("Title"),
                    FieldDefinition::new("description", FieldKind::String).title("Description"),
                    FieldDefinition::new("url", FieldKind::Named("customUrl".to_string())),
                ]),
        ])
        .preview(
            PreviewConfig::new(&[("title", "title"), ("faqs", "faqs")])
                .prepare(preview::faq_accordion),
        )
}

pub fn image_link_cards() -> SchemaType {
    SchemaType::object(tag::IMAGE_LINK_CARDS, "Image Link Cards")
        .icon("images")
        .fields([
            FieldDefinition::new("eyebrow", FieldKind::String).title("Eyebrow"),
            FieldDefinition::new("title", FieldKind::String).title("Title"),
            rich_text_field(),
            buttons_field(),
            FieldDefinition::new("cards", FieldKind::Array)
                .title("Cards")
                .of(vec![FieldDefinition::new("card", FieldKind::Object).fields(vec![
                    FieldDefinition::new("title", FieldKind::String).title("Title").required(),
                    FieldDefinition::new("description", FieldKind::Text).title("Description"),
                    FieldDefinition::new("image", FieldKind::Image).title("Image").hotspot(),
                    FieldDefinition::new("url", FieldKind::Named("customUrl".to_string())),
                ])]),
        ])
        .preview(
            PreviewConfig::new(&[("title", "title"), ("cards", "cards")])
                .prepare(preview::image_link_cards),
        )
}

pub fn product_catalog() -> SchemaType {
    SchemaType::object(tag::PRODUCT_CATALOG, "Product Catalog")
        .icon("stethoscope")
        .fields([
            FieldDefinition::new("title", FieldKind::String)
                .title("Title")
                .description("Main heading for this section"),
            FieldDefinition::new("subtitle", FieldKind::String)
                .title("Subtitle")
                .description("A supporting headline"),
            FieldDefinition::new("description", FieldKind::Text)
                .title("Description")
                .description("Detailed content for this section")
                .rows(3),
        ])
        .preview(
            PreviewConfig::new(&[("title", "title"), ("subtitle", "subtitle")])
                .prepare(preview::product_catalog),
        )
}
