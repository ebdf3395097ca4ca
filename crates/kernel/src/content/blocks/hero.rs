//! Hero section: badge, headline, rich text, buttons and an optional image.

use crate::content::block_render::{
    ButtonSize, render_buttons, render_image, render_rich_text, render_text, section,
};
use crate::content::model::{Block, HeroBlock, tag};
use crate::content::registry::RenderError;

pub fn render(block: &Block) -> Result<String, RenderError> {
    match block {
        Block::Hero(hero) => Ok(render_hero(hero)),
        other => Err(RenderError::mismatch(tag::HERO, other)),
    }
}

/// Split layout when an image is present, centered otherwise.
pub fn render_hero(hero: &HeroBlock) -> String {
    let image = render_image(hero.image.as_ref(), "hero__image");
    let layout = if image.is_empty() { "centered" } else { "split" };

    let mut content = String::new();
    content.push_str(&render_text("span", "badge", hero.badge.as_deref()));
    content.push_str(&render_text("h1", "hero__title", hero.title.as_deref()));
    content.push_str(&render_rich_text(hero.rich_text.as_ref(), "prose hero__body"));
    content.push_str(&render_buttons(&hero.buttons, ButtonSize::Large));

    let mut inner = format!("<div class=\"hero__grid hero__grid--{layout}\">");
    inner.push_str(&format!("<div class=\"hero__content\">{content}</div>"));
    if !image.is_empty() {
        inner.push_str(&format!("<div class=\"hero__media\">{image}</div>"));
    }
    inner.push_str("</div>");

    section(
        tag::HERO,
        hero.key.as_deref(),
        "hero",
        &format!(" data-layout=\"{layout}\""),
        &inner,
    )
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used)]
mod tests {
    use super::*;
    use crate::content::model::ImageRef;

    #[test]
    fn welcome_without_badge_or_buttons() {
        let html = render_hero(&HeroBlock {
            title: Some("Welcome".into()),
            ..Default::default()
        });
        assert!(html.contains("<h1 class=\"hero__title\">Welcome</h1>"));
        assert!(!html.contains("class=\"badge\""));
        assert!(!html.contains("<a "));
        assert!(html.contains("data-layout=\"centered\""));
    }

    #[test]
    fn image_selects_split_layout() {
        let html = render_hero(&HeroBlock {
            image: Some(ImageRef {
                url: Some("https://cdn.example.com/hero.jpg".into()),
                ..Default::default()
            }),
            badge: Some("New".into()),
            ..Default::default()
        });
        assert!(html.contains("data-layout=\"split\""));
        assert!(html.contains("<span class=\"badge\">New</span>"));
        assert!(html.contains("hero__media"));
    }

    #[test]
    fn empty_payload_still_renders_container() {
        let html = render_hero(&HeroBlock::default());
        assert!(html.starts_with("<section"));
        assert!(html.contains("data-block=\"hero\""));
        assert!(!html.contains("<h1"));
    }
}
