//! Page assembly and markup helpers shared by the block renderers.
//!
//! `render_blocks` walks a document's blocks in order and dispatches each to
//! the renderer registered for its tag. Failures stay scoped to one block.

use super::model::{Block, Button, ButtonVariant, ImageRef};
use super::registry::BlockRegistry;
use super::rich_text::RichText;
use crate::routes::helpers::{html_escape, link_target_attrs, non_blank, safe_href};

/// Render a document's blocks in order.
///
/// Unregistered types and renderer failures are skipped with a diagnostic;
/// the remaining blocks still render.
pub fn render_blocks(registry: &BlockRegistry, blocks: &[Block]) -> String {
    let mut html = String::new();
    for block in blocks {
        let block_type = block.type_tag();
        let block_key = block.key().unwrap_or_default();
        let Some(renderer) = registry.component_for(block_type) else {
            tracing::warn!(block_type, block_key, "no renderer registered, skipping block");
            continue;
        };
        match renderer.render(block) {
            Ok(rendered) => html.push_str(&rendered),
            Err(e) => {
                tracing::warn!(block_type, block_key, error = %e, "block failed to render, skipping");
            }
        }
    }
    html
}

// ---------------------------------------------------------------------------
// Shared fragments
// ---------------------------------------------------------------------------

/// Button size used by a block's button row.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ButtonSize {
    Default,
    Large,
}

fn variant_class(variant: ButtonVariant) -> &'static str {
    match variant {
        ButtonVariant::Default => "btn--default",
        ButtonVariant::Outline => "btn--outline",
        ButtonVariant::Secondary => "btn--secondary",
        ButtonVariant::Link => "btn--link",
    }
}

/// Render a button row.
///
/// Entries without a safe href are dropped; order is preserved. Returns an
/// empty string when no entry survives.
pub fn render_buttons(buttons: &[Button], size: ButtonSize) -> String {
    let size_class = match size {
        ButtonSize::Default => "",
        ButtonSize::Large => " btn--lg",
    };
    let links: Vec<String> = buttons
        .iter()
        .filter_map(|button| {
            let href = safe_href(button.href.as_deref())?;
            let label = non_blank(button.label.as_deref()).unwrap_or("Learn more");
            Some(format!(
                "<a class=\"btn {}{size_class}\" href=\"{}\"{}>{}</a>",
                variant_class(button.variant),
                html_escape(href),
                link_target_attrs(button.open_in_new_tab),
                html_escape(label)
            ))
        })
        .collect();

    if links.is_empty() {
        return String::new();
    }
    format!("<div class=\"buttons\">{}</div>", links.concat())
}

/// `<img>` for a resolved image, or nothing when it has no usable URL.
pub fn render_image(image: Option<&ImageRef>, class: &str) -> String {
    let Some(image) = image else {
        return String::new();
    };
    let Some(url) = safe_href(image.url.as_deref()) else {
        return String::new();
    };
    let mut dims = String::new();
    if let Some(w) = image.width {
        dims.push_str(&format!(" width=\"{w}\""));
    }
    if let Some(h) = image.height {
        dims.push_str(&format!(" height=\"{h}\""));
    }
    format!(
        "<img class=\"{class}\" src=\"{}\" alt=\"{}\"{dims} loading=\"lazy\">",
        html_escape(url),
        html_escape(image.alt.as_deref().unwrap_or_default())
    )
}

/// A text element, or nothing when the text is absent or blank.
pub fn render_text(tag: &str, class: &str, text: Option<&str>) -> String {
    match non_blank(text) {
        Some(text) => format!("<{tag} class=\"{class}\">{}</{tag}>", html_escape(text)),
        None => String::new(),
    }
}

/// Rich text wrapped in a container, or nothing when empty.
pub fn render_rich_text(text: Option<&RichText>, class: &str) -> String {
    match text {
        Some(text) if !text.is_empty() => {
            format!("<div class=\"{class}\">{}</div>", text.to_html())
        }
        _ => String::new(),
    }
}

/// Outer `<section>` every renderer emits, even for an empty payload.
pub fn section(block_type: &str, key: Option<&str>, class: &str, extra_attrs: &str, inner: &str) -> String {
    let key_attr = key
        .map(|k| format!(" data-key=\"{}\"", html_escape(k)))
        .unwrap_or_default();
    format!(
        "<section class=\"block {class}\" data-block=\"{block_type}\"{key_attr}{extra_attrs}>{inner}</section>"
    )
}
