//! Portable Text rendering.
//!
//! Rich text arrives as an ordered list of block nodes, each holding spans
//! with decorator marks and annotation references into `markDefs`. Only
//! `block` nodes are rendered; embedded objects are skipped.

use serde::Deserialize;

use super::model::nullable_vec;
use crate::routes::helpers::{html_escape, is_safe_url, link_target_attrs};

/// A Portable Text document.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(transparent)]
pub struct RichText(pub Vec<PortableTextNode>);

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PortableTextNode {
    #[serde(rename = "_type")]
    pub node_type: Option<String>,
    #[serde(rename = "_key")]
    pub key: Option<String>,
    pub style: Option<String>,
    pub list_item: Option<String>,
    pub level: Option<u32>,
    #[serde(default, deserialize_with = "nullable_vec")]
    pub children: Vec<Span>,
    #[serde(default, deserialize_with = "nullable_vec")]
    pub mark_defs: Vec<MarkDef>,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct Span {
    #[serde(rename = "_type")]
    pub span_type: Option<String>,
    pub text: Option<String>,
    #[serde(default, deserialize_with = "nullable_vec")]
    pub marks: Vec<String>,
}

/// An annotation referenced from span marks (currently only links).
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MarkDef {
    #[serde(rename = "_key")]
    pub key: Option<String>,
    #[serde(rename = "_type")]
    pub def_type: Option<String>,
    pub href: Option<String>,
    pub open_in_new_tab: Option<bool>,
}

#[derive(Clone, Copy, PartialEq, Eq)]
enum ListKind {
    Bullet,
    Number,
}

impl ListKind {
    fn tag(self) -> &'static str {
        match self {
            ListKind::Bullet => "ul",
            ListKind::Number => "ol",
        }
    }
}

impl PortableTextNode {
    fn is_block(&self) -> bool {
        self.node_type.as_deref().is_none_or(|t| t == "block")
    }

    fn list_kind(&self) -> Option<ListKind> {
        match self.list_item.as_deref()? {
            "number" => Some(ListKind::Number),
            _ => Some(ListKind::Bullet),
        }
    }

    fn render_children(&self) -> String {
        let mut html = String::new();
        for span in &self.children {
            if span.span_type.as_deref().is_some_and(|t| t != "span") {
                continue;
            }
            html.push_str(&self.render_span(span));
        }
        html
    }

    fn render_span(&self, span: &Span) -> String {
        let text = html_escape(span.text.as_deref().unwrap_or_default()).replace('\n', "<br>");
        let mut open = String::new();
        let mut close: Vec<&'static str> = Vec::new();
        for mark in &span.marks {
            let tags = match mark.as_str() {
                "strong" => Some(("<strong>".to_string(), "</strong>")),
                "em" => Some(("<em>".to_string(), "</em>")),
                "code" => Some(("<code>".to_string(), "</code>")),
                "underline" => Some(("<u>".to_string(), "</u>")),
                "strike-through" => Some(("<s>".to_string(), "</s>")),
                key => self.annotation(key),
            };
            if let Some((start, end)) = tags {
                open.push_str(&start);
                close.push(end);
            }
        }
        close.reverse();
        format!("{open}{text}{}", close.concat())
    }

    /// Opening and closing tags for an annotation mark, if it resolves.
    fn annotation(&self, key: &str) -> Option<(String, &'static str)> {
        let def = self
            .mark_defs
            .iter()
            .find(|d| d.key.as_deref() == Some(key))?;
        if def.def_type.as_deref().is_some_and(|t| t != "link") {
            return None;
        }
        let href = def.href.as_deref().map(str::trim).filter(|h| is_safe_url(h))?;
        Some((
            format!(
                "<a href=\"{}\"{}>",
                html_escape(href),
                link_target_attrs(def.open_in_new_tab.unwrap_or(false))
            ),
            "</a>",
        ))
    }
}

fn style_tag(style: Option<&str>) -> &'static str {
    match style.unwrap_or("normal") {
        "h1" => "h1",
        "h2" => "h2",
        "h3" => "h3",
        "h4" => "h4",
        "h5" => "h5",
        "h6" => "h6",
        "blockquote" => "blockquote",
        _ => "p",
    }
}

impl RichText {
    /// Whether there is any block node with text to show.
    pub fn is_empty(&self) -> bool {
        !self.0.iter().any(|node| {
            node.is_block()
                && node
                    .children
                    .iter()
                    .any(|s| s.text.as_deref().is_some_and(|t| !t.trim().is_empty()))
        })
    }

    /// Render to HTML. Consecutive list items share one list element.
    pub fn to_html(&self) -> String {
        let mut html = String::new();
        let mut open_list: Option<ListKind> = None;

        for node in self.0.iter().filter(|n| n.is_block()) {
            let kind = node.list_kind();
            if open_list != kind {
                if let Some(list) = open_list.take() {
                    html.push_str(&format!("</{}>", list.tag()));
                }
                if let Some(list) = kind {
                    html.push_str(&format!("<{}>", list.tag()));
                    open_list = Some(list);
                }
            }

            let inner = node.render_children();
            if kind.is_some() {
                html.push_str(&format!("<li>{inner}</li>"));
            } else {
                let tag = style_tag(node.style.as_deref());
                html.push_str(&format!("<{tag}>{inner}</{tag}>"));
            }
        }

        if let Some(list) = open_list {
            html.push_str(&format!("</{}>", list.tag()));
        }
        html
    }

    /// Plain text of every block, joined by blank lines.
    pub fn plain_text(&self) -> String {
        self.0
            .iter()
            .filter(|n| n.is_block())
            .map(|n| {
                n.children
                    .iter()
                    .filter_map(|s| s.text.as_deref())
                    .collect::<String>()
            })
            .collect::<Vec<_>>()
            .join("\n\n")
    }
}
