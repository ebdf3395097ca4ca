//! FAQ accordion built on `<details>` elements.

use crate::content::block_render::{render_text, section};
use crate::content::model::{Block, FaqAccordionBlock, FaqEntry, FaqLink, tag};
use crate::content::registry::RenderError;
use crate::routes::helpers::{html_escape, link_target_attrs, non_blank, safe_href};

pub fn render(block: &Block) -> Result<String, RenderError> {
    match block {
        Block::FaqAccordion(faq) => Ok(render_faq_accordion(faq)),
        other => Err(RenderError::mismatch(tag::FAQ_ACCORDION, other)),
    }
}

pub fn render_faq_accordion(faq: &FaqAccordionBlock) -> String {
    let mut inner = String::from("<div class=\"faq__header\">");
    inner.push_str(&render_text("span", "badge faq__eyebrow", faq.eyebrow.as_deref()));
    inner.push_str(&render_text("h2", "faq__title", faq.title.as_deref()));
    inner.push_str(&render_text("p", "faq__subtitle", faq.subtitle.as_deref()));
    inner.push_str("</div>");

    let entries: String = faq.faqs.iter().filter_map(render_entry).collect();
    if !entries.is_empty() {
        inner.push_str(&format!("<div class=\"faq__list\">{entries}</div>"));
    }
    if let Some(link) = faq.link.as_ref() {
        inner.push_str(&render_link_box(link));
    }

    section(tag::FAQ_ACCORDION, faq.key.as_deref(), "faq", "", &inner)
}

/// One question; entries with neither title nor body are skipped.
fn render_entry(entry: &FaqEntry) -> Option<String> {
    let title = non_blank(entry.title.as_deref());
    let body = entry.rich_text.as_ref().filter(|t| !t.is_empty());
    if title.is_none() && body.is_none() {
        return None;
    }
    let id_attr = entry
        .key
        .as_deref()
        .map(|k| format!(" id=\"faq-{}\"", html_escape(k)))
        .unwrap_or_default();
    Some(format!(
        "<details class=\"faq__item\"{id_attr}><summary>{}</summary><div class=\"prose faq__answer\">{}</div></details>",
        html_escape(title.unwrap_or_default()),
        body.map(|b| b.to_html()).unwrap_or_default()
    ))
}

/// "More questions" box, rendered only with a safe target.
fn render_link_box(link: &FaqLink) -> String {
    let Some(href) = safe_href(link.href.as_deref()) else {
        return String::new();
    };
    let mut html = format!(
        "<div class=\"faq__more\"><a class=\"faq__more-link\" href=\"{}\"{}>",
        html_escape(href),
        link_target_attrs(link.open_in_new_tab)
    );
    html.push_str(&render_text("span", "faq__more-title", link.title.as_deref()));
    html.push_str(&render_text(
        "span",
        "faq__more-description",
        link.description.as_deref(),
    ));
    html.push_str("</a></div>");
    html
}
