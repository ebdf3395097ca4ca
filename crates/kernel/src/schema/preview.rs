//! List-view preview labels for the authoring tool.
//!
//! A preview selects values by dotted path from a document and formats them
//! into a title and optional subtitle.

use std::collections::HashMap;

use serde::Serialize;
use serde_json::Value;

/// Title and subtitle shown for a document or block in list views.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PreviewLabel {
    pub title: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub subtitle: Option<String>,
}

impl PreviewLabel {
    pub fn new(title: impl Into<String>, subtitle: Option<String>) -> Self {
        Self {
            title: title.into(),
            subtitle,
        }
    }
}

/// Values picked out of a document, keyed by alias.
#[derive(Debug, Clone, Default)]
pub struct Selection(HashMap<String, Value>);

impl Selection {
    /// Select `(alias, dotted path)` pairs from a document.
    pub fn from_value(select: &[(String, String)], value: &Value) -> Self {
        let picked = select
            .iter()
            .filter_map(|(alias, path)| lookup(value, path).map(|v| (alias.clone(), v.clone())))
            .collect();
        Self(picked)
    }

    /// Non-blank string value.
    pub fn str(&self, alias: &str) -> Option<&str> {
        self.0
            .get(alias)
            .and_then(|v| v.as_str())
            .filter(|s| !s.trim().is_empty())
    }

    pub fn bool(&self, alias: &str) -> bool {
        self.0.get(alias).and_then(|v| v.as_bool()).unwrap_or(false)
    }

    /// Length of an array value; zero when absent.
    pub fn count(&self, alias: &str) -> usize {
        self.0
            .get(alias)
            .and_then(|v| v.as_array())
            .map_or(0, Vec::len)
    }
}

/// Resolve a dotted path such as `url.internal.slug.current`.
fn lookup<'a>(value: &'a Value, path: &str) -> Option<&'a Value> {
    path.split('.')
        .try_fold(value, |current, segment| current.get(segment))
        .filter(|v| !v.is_null())
}

/// Formatter turning a selection into a label.
pub type Prepare = fn(&Selection) -> PreviewLabel;

#[derive(Debug, Clone, Serialize)]
pub struct PreviewConfig {
    pub select: Vec<(String, String)>,
    #[serde(skip)]
    pub prepare: Option<Prepare>,
}

impl PreviewConfig {
    pub fn new(select: &[(&str, &str)]) -> Self {
        Self {
            select: select
                .iter()
                .map(|(alias, path)| (alias.to_string(), path.to_string()))
                .collect(),
            prepare: None,
        }
    }

    pub fn prepare(mut self, prepare: Prepare) -> Self {
        self.prepare = Some(prepare);
        self
    }

    /// Build the label for a document.
    ///
    /// Without a formatter the `title` alias (or "Untitled") and the
    /// `subtitle` alias are used as is.
    pub fn label(&self, value: &Value) -> PreviewLabel {
        let selection = Selection::from_value(&self.select, value);
        match self.prepare {
            Some(prepare) => prepare(&selection),
            None => PreviewLabel::new(
                selection.str("title").unwrap_or("Untitled"),
                selection.str("subtitle").map(str::to_string),
            ),
        }
    }
}

fn plural(count: usize, noun: &str) -> String {
    if count == 1 {
        format!("{count} {noun}")
    } else {
        format!("{count} {noun}s")
    }
}

fn capitalize(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

// ---------------------------------------------------------------------------
// Formatters
// ---------------------------------------------------------------------------

pub fn hero(s: &Selection) -> PreviewLabel {
    PreviewLabel::new(
        s.str("title").unwrap_or("Untitled"),
        Some(s.str("badge").unwrap_or("Hero Block").to_string()),
    )
}

pub fn cta(s: &Selection) -> PreviewLabel {
    let subtitle = match s.str("style") {
        Some(style) => match s.str("subtitle") {
            Some(sub) => format!("{} Style - {sub}", capitalize(style)),
            None => format!("{} Style", capitalize(style)),
        },
        None => "Simple Style".to_string(),
    };
    PreviewLabel::new(s.str("title").unwrap_or("CTA Block"), Some(subtitle))
}

pub fn faq_accordion(s: &Selection) -> PreviewLabel {
    PreviewLabel::new(
        s.str("title").unwrap_or("Untitled"),
        Some(plural(s.count("faqs"), "question")),
    )
}

pub fn image_link_cards(s: &Selection) -> PreviewLabel {
    PreviewLabel::new(
        s.str("title").unwrap_or("Untitled"),
        Some(plural(s.count("cards"), "card")),
    )
}

pub fn product_catalog(s: &Selection) -> PreviewLabel {
    PreviewLabel::new(
        s.str("title").unwrap_or("Untitled"),
        Some(s.str("subtitle").unwrap_or("ProductCatalog Block").to_string()),
    )
}

pub fn home_page(s: &Selection) -> PreviewLabel {
    PreviewLabel::new(
        s.str("title").unwrap_or("Untitled Home Page"),
        Some(s.str("slug").unwrap_or("Home Page").to_string()),
    )
}

pub fn page(s: &Selection) -> PreviewLabel {
    PreviewLabel::new(
        s.str("title").unwrap_or("Untitled Page"),
        Some(s.str("slug").unwrap_or("No slug").to_string()),
    )
}

const URL_PREVIEW_LIMIT: usize = 30;

pub fn navbar_link(s: &Selection) -> PreviewLabel {
    let external = s.str("urlType") == Some("external");
    let url = if external {
        s.str("externalUrl")
    } else {
        s.str("internalUrl").or_else(|| s.str("href"))
    }
    .unwrap_or_default();
    let truncated = if url.chars().count() > URL_PREVIEW_LIMIT {
        format!("{}...", url.chars().take(URL_PREVIEW_LIMIT).collect::<String>())
    } else {
        url.to_string()
    };
    let new_tab = if s.bool("openInNewTab") { " ↗" } else { "" };
    let kind = if external { "External" } else { "Internal" };
    PreviewLabel::new(
        s.str("title").unwrap_or("Untitled Link"),
        Some(format!("{kind} • {truncated}{new_tab}")),
    )
}

pub fn navbar_column(s: &Selection) -> PreviewLabel {
    PreviewLabel::new(
        s.str("title").unwrap_or("Untitled Menu"),
        Some(plural(s.count("links"), "link")),
    )
}

pub fn navbar(s: &Selection) -> PreviewLabel {
    PreviewLabel::new(s.str("title").unwrap_or("Navigation"), None)
}

pub fn footer(s: &Selection) -> PreviewLabel {
    PreviewLabel::new(s.str("title").unwrap_or("Footer"), None)
}
