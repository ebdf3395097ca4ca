//! Vetrina test utilities.
//!
//! JSON fixture builders shaped like CMS documents, for feeding a
//! `MemoryContentSource` or the schema endpoints in integration tests.

use serde_json::{Map, Value as JsonValue, json};

/// A single Portable Text paragraph.
pub fn rich_text(text: &str) -> JsonValue {
    json!([{
        "_type": "block",
        "_key": "p0",
        "style": "normal",
        "markDefs": [],
        "children": [{ "_type": "span", "text": text, "marks": [] }]
    }])
}

/// A page-builder block under construction.
#[derive(Debug, Clone)]
pub struct TestBlock {
    fields: Map<String, JsonValue>,
}

impl TestBlock {
    /// Start a block with the given `_type` tag.
    pub fn new(type_tag: &str) -> Self {
        let mut fields = Map::new();
        fields.insert("_type".to_string(), json!(type_tag));
        Self { fields }
    }

    pub fn with_key(self, key: &str) -> Self {
        self.with("_key", json!(key))
    }

    /// Set an arbitrary payload field.
    pub fn with(mut self, name: &str, value: JsonValue) -> Self {
        self.fields.insert(name.to_string(), value);
        self
    }

    pub fn with_rich_text(self, text: &str) -> Self {
        self.with("richText", rich_text(text))
    }

    pub fn with_image(self, url: &str, alt: &str) -> Self {
        self.with("image", json!({ "url": url, "alt": alt }))
    }

    pub fn with_buttons(self, buttons: Vec<TestButton>) -> Self {
        let buttons: Vec<JsonValue> = buttons.into_iter().map(TestButton::into_json).collect();
        self.with("buttons", JsonValue::Array(buttons))
    }

    pub fn into_json(self) -> JsonValue {
        JsonValue::Object(self.fields)
    }
}

pub fn hero(title: &str) -> TestBlock {
    TestBlock::new("hero").with("title", json!(title))
}

pub fn cta(style: &str, title: &str) -> TestBlock {
    TestBlock::new("cta")
        .with("style", json!(style))
        .with("title", json!(title))
}

/// An FAQ block with one entry per `(question, answer)` pair.
pub fn faq_accordion(title: &str, faqs: &[(&str, &str)]) -> TestBlock {
    let faqs: Vec<JsonValue> = faqs
        .iter()
        .enumerate()
        .map(|(i, (question, answer))| {
            json!({ "_key": format!("faq{i}"), "title": question, "richText": rich_text(answer) })
        })
        .collect();
    TestBlock::new("faqAccordion")
        .with("title", json!(title))
        .with("faqs", JsonValue::Array(faqs))
}

/// A cards block with one card per `(title, href)` pair.
pub fn image_link_cards(title: &str, cards: &[(&str, &str)]) -> TestBlock {
    let cards: Vec<JsonValue> = cards
        .iter()
        .enumerate()
        .map(|(i, (card_title, href))| {
            json!({ "_key": format!("card{i}"), "title": card_title, "href": href })
        })
        .collect();
    TestBlock::new("imageLinkCards")
        .with("title", json!(title))
        .with("cards", JsonValue::Array(cards))
}

pub fn product_catalog(title: &str) -> TestBlock {
    TestBlock::new("productCatalog").with("title", json!(title))
}

/// Create a test button in the flat wire shape.
pub fn button(label: &str, href: &str) -> TestButton {
    TestButton {
        label: label.to_string(),
        href: Some(href.to_string()),
        variant: None,
        open_in_new_tab: false,
        nested: false,
    }
}

/// A button fixture, serialized flat or nested.
#[derive(Debug, Clone)]
pub struct TestButton {
    pub label: String,
    pub href: Option<String>,
    pub variant: Option<String>,
    pub open_in_new_tab: bool,
    pub nested: bool,
}

impl TestButton {
    pub fn with_variant(mut self, variant: &str) -> Self {
        self.variant = Some(variant.to_string());
        self
    }

    pub fn new_tab(mut self) -> Self {
        self.open_in_new_tab = true;
        self
    }

    pub fn without_href(mut self) -> Self {
        self.href = None;
        self
    }

    /// Serialize in the `{ label, link: { href, openInNewTab } }` shape.
    pub fn nested(mut self) -> Self {
        self.nested = true;
        self
    }

    pub fn into_json(self) -> JsonValue {
        let mut value = if self.nested {
            json!({
                "label": self.label,
                "link": { "href": self.href, "openInNewTab": self.open_in_new_tab }
            })
        } else {
            json!({
                "text": self.label,
                "href": self.href,
                "openInNewTab": self.open_in_new_tab
            })
        };
        if let (Some(variant), Some(object)) = (self.variant, value.as_object_mut()) {
            object.insert("variant".to_string(), json!(variant));
        }
        value
    }
}

/// Create a test page document.
pub fn test_page(title: &str, slug: &str) -> TestPage {
    TestPage {
        id: format!("page-{}", slug.trim_matches('/').replace('/', "-")),
        doc_type: "page".to_string(),
        title: title.to_string(),
        slug: Some(slug.to_string()),
        blocks: Vec::new(),
        seo: Map::new(),
    }
}

/// Create a test home page document.
pub fn home_page(title: &str) -> TestPage {
    TestPage {
        id: "homePage".to_string(),
        doc_type: "homePage".to_string(),
        title: title.to_string(),
        slug: None,
        blocks: Vec::new(),
        seo: Map::new(),
    }
}

/// A page document builder.
#[derive(Debug, Clone)]
pub struct TestPage {
    pub id: String,
    pub doc_type: String,
    pub title: String,
    pub slug: Option<String>,
    pub blocks: Vec<JsonValue>,
    seo: Map<String, JsonValue>,
}

impl TestPage {
    /// Set a custom ID.
    pub fn with_id(mut self, id: &str) -> Self {
        self.id = id.to_string();
        self
    }

    pub fn with_block(mut self, block: TestBlock) -> Self {
        self.blocks.push(block.into_json());
        self
    }

    /// Append a raw block value, e.g. one without a `_type` tag.
    pub fn with_raw_block(mut self, block: JsonValue) -> Self {
        self.blocks.push(block);
        self
    }

    pub fn with_seo(mut self, name: &str, value: JsonValue) -> Self {
        self.seo.insert(name.to_string(), value);
        self
    }

    pub fn no_index(self) -> Self {
        self.with_seo("seoNoIndex", json!(true))
    }

    pub fn into_json(self) -> JsonValue {
        let mut value = json!({
            "_id": self.id,
            "_type": self.doc_type,
            "title": self.title,
            "pageBuilder": self.blocks,
        });
        if let Some(object) = value.as_object_mut() {
            if let Some(slug) = self.slug {
                object.insert("slug".to_string(), json!({ "current": slug }));
            }
            object.extend(self.seo);
        }
        value
    }
}

/// Create an empty navbar document.
pub fn navbar() -> TestNavbar {
    TestNavbar {
        columns: Vec::new(),
        buttons: Vec::new(),
    }
}

/// A navbar document builder.
#[derive(Debug, Clone)]
pub struct TestNavbar {
    columns: Vec<JsonValue>,
    buttons: Vec<JsonValue>,
}

impl TestNavbar {
    pub fn with_link(mut self, name: &str, href: &str) -> Self {
        self.columns.push(nav_link(name, href));
        self
    }

    pub fn with_column(mut self, title: &str, links: &[(&str, &str)]) -> Self {
        let links: Vec<JsonValue> = links.iter().map(|(n, h)| nav_link(n, h)).collect();
        self.columns.push(json!({
            "_type": "navbarColumn",
            "_key": format!("col{}", self.columns.len()),
            "title": title,
            "links": links,
        }));
        self
    }

    pub fn with_button(mut self, button: TestButton) -> Self {
        self.buttons.push(button.into_json());
        self
    }

    pub fn into_json(self) -> JsonValue {
        json!({
            "_id": "navbar",
            "_type": "navbar",
            "label": "Navigation",
            "columns": self.columns,
            "buttons": self.buttons,
        })
    }
}

fn nav_link(name: &str, href: &str) -> JsonValue {
    json!({
        "_type": "navbarLink",
        "name": name,
        "url": { "type": "internal", "href": href },
    })
}

/// Create an empty footer document.
pub fn footer() -> TestFooter {
    TestFooter {
        subtitle: None,
        columns: Vec::new(),
        social: Map::new(),
    }
}

/// A footer document builder.
#[derive(Debug, Clone)]
pub struct TestFooter {
    subtitle: Option<String>,
    columns: Vec<JsonValue>,
    social: Map<String, JsonValue>,
}

impl TestFooter {
    pub fn with_subtitle(mut self, subtitle: &str) -> Self {
        self.subtitle = Some(subtitle.to_string());
        self
    }

    pub fn with_column(mut self, title: &str, links: &[(&str, &str)]) -> Self {
        let links: Vec<JsonValue> = links
            .iter()
            .map(|(name, href)| json!({ "name": name, "href": href }))
            .collect();
        self.columns.push(json!({ "title": title, "links": links }));
        self
    }

    /// Set a social network URL (`instagram`, `facebook`, ...).
    pub fn with_social(mut self, network: &str, url: &str) -> Self {
        self.social.insert(network.to_string(), json!(url));
        self
    }

    pub fn into_json(self) -> JsonValue {
        json!({
            "_id": "footer",
            "_type": "footer",
            "label": "Footer",
            "subtitle": self.subtitle,
            "columns": self.columns,
            "socialLinks": self.social,
        })
    }
}
