//! Call-to-action section with four layouts selected by `style`.

use crate::content::block_render::{
    ButtonSize, render_buttons, render_image, render_rich_text, render_text, section,
};
use crate::content::model::{Block, CtaBlock, CtaStyle, Stat, tag};
use crate::content::registry::RenderError;
use crate::routes::helpers::{html_escape, non_blank};

pub fn render(block: &Block) -> Result<String, RenderError> {
    match block {
        Block::Cta(cta) => Ok(render_cta(cta)),
        other => Err(RenderError::mismatch(tag::CTA, other)),
    }
}

/// Render a CTA block in the layout named by its style.
pub fn render_cta(cta: &CtaBlock) -> String {
    let content = render_content(cta);
    let image = render_image(cta.image.as_ref(), "cta__image");

    let inner = match cta.style {
        CtaStyle::Simple => format!(
            "<div class=\"cta__panel cta__panel--simple\"><div class=\"cta__content cta__content--center\">{content}</div></div>"
        ),
        CtaStyle::Split => {
            let media = if image.is_empty() {
                String::new()
            } else {
                format!("<div class=\"cta__media\">{image}</div>")
            };
            format!(
                "<div class=\"cta__grid cta__grid--split\"><div class=\"cta__content\">{content}</div>{media}</div>"
            )
        }
        CtaStyle::Gradient => {
            let background = render_image(cta.background_image.as_ref(), "cta__background");
            format!(
                "<div class=\"cta__panel cta__panel--gradient\">{background}<div class=\"cta__content cta__content--center\">{content}</div></div>"
            )
        }
        CtaStyle::Card => {
            let media = if image.is_empty() {
                String::new()
            } else {
                format!("<div class=\"cta__card-media\">{image}</div>")
            };
            format!(
                "<div class=\"cta__card\">{media}<div class=\"cta__content\">{content}</div></div>"
            )
        }
    };

    section(
        tag::CTA,
        cta.key.as_deref(),
        "cta",
        &format!(" data-style=\"{}\"", cta.style.as_str()),
        &inner,
    )
}

/// Content column shared by every layout.
fn render_content(cta: &CtaBlock) -> String {
    let mut html = String::new();
    html.push_str(&render_text("span", "badge cta__eyebrow", cta.eyebrow.as_deref()));
    html.push_str(&render_text("h2", "cta__title", cta.title.as_deref()));
    html.push_str(&render_text("p", "cta__subtitle", cta.subtitle.as_deref()));
    html.push_str(&render_rich_text(cta.rich_text.as_ref(), "prose cta__body"));
    html.push_str(&render_stats(&cta.stats));
    html.push_str(&render_buttons(&cta.buttons, ButtonSize::Large));
    html
}

/// Statistics list; entries with neither value nor label are dropped.
fn render_stats(stats: &[Stat]) -> String {
    let items: Vec<String> = stats
        .iter()
        .filter_map(|stat| {
            let value = non_blank(stat.value.as_deref());
            let label = non_blank(stat.label.as_deref());
            if value.is_none() && label.is_none() {
                return None;
            }
            let mut item = String::from("<li class=\"cta__stat\">");
            if let Some(value) = value {
                item.push_str(&format!(
                    "<span class=\"cta__stat-value\">{}</span>",
                    html_escape(value)
                ));
            }
            if let Some(label) = label {
                item.push_str(&format!(
                    "<span class=\"cta__stat-label\">{}</span>",
                    html_escape(label)
                ));
            }
            item.push_str("</li>");
            Some(item)
        })
        .collect();

    if items.is_empty() {
        return String::new();
    }
    format!("<ul class=\"cta__stats\">{}</ul>", items.concat())
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used)]
mod tests {
    use super::*;
    use crate::content::model::{Button, ImageRef};

    fn image() -> Option<ImageRef> {
        Some(ImageRef {
            url: Some("https://cdn.example.com/cta.png".into()),
            alt: Some("Chair".into()),
            ..Default::default()
        })
    }

    #[test]
    fn split_with_image_and_one_button() {
        let html = render_cta(&CtaBlock {
            style: CtaStyle::Split,
            image: image(),
            buttons: vec![Button {
                label: Some("Shop".into()),
                href: Some("/shop".into()),
                ..Default::default()
            }],
            ..Default::default()
        });
        assert!(html.contains("cta__grid--split"));
        assert!(html.contains("cta__media"));
        assert_eq!(html.matches("<a ").count(), 1);
        assert!(html.contains("href=\"/shop\""));
        assert!(html.contains(">Shop</a>"));
    }

    #[test]
    fn every_style_selects_exactly_one_layout() {
        let markers = [
            "cta__panel--simple",
            "cta__grid--split",
            "cta__panel--gradient",
            "cta__card\"",
        ];
        for style in CtaStyle::ALL {
            let html = render_cta(&CtaBlock {
                style,
                ..Default::default()
            });
            let hits = markers.iter().filter(|m| html.contains(*m)).count();
            assert_eq!(hits, 1, "style {style:?}");
            assert!(html.contains(&format!("data-style=\"{}\"", style.as_str())));
        }
    }

    #[test]
    fn unknown_style_renders_simple() {
        let block: CtaBlock =
            serde_json::from_value(serde_json::json!({ "style": "neon", "title": "Hi" })).unwrap();
        let html = render_cta(&block);
        assert!(html.contains("data-style=\"simple\""));
        assert!(html.contains("cta__panel--simple"));
    }

    #[test]
    fn stats_without_content_are_dropped() {
        let html = render_cta(&CtaBlock {
            style: CtaStyle::Gradient,
            stats: vec![
                Stat {
                    value: Some("24/7".into()),
                    label: Some("Support".into()),
                    ..Default::default()
                },
                Stat::default(),
            ],
            ..Default::default()
        });
        assert_eq!(html.matches("<li class=\"cta__stat\">").count(), 1);
        assert!(html.contains("24/7"));
    }

    #[test]
    fn empty_payload_renders_container() {
        let html = render_cta(&CtaBlock::default());
        assert!(html.contains("data-block=\"cta\""));
        assert!(!html.contains("<h2"));
        assert!(!html.contains("cta__stats"));
    }
}
