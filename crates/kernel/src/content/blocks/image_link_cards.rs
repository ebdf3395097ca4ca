//! Grid of image cards linking to other pages.

use crate::content::block_render::{
    ButtonSize, render_buttons, render_image, render_rich_text, render_text, section,
};
use crate::content::model::{Block, ImageLinkCardsBlock, LinkCard, tag};
use crate::content::registry::RenderError;
use crate::routes::helpers::{html_escape, link_target_attrs, safe_href};

pub fn render(block: &Block) -> Result<String, RenderError> {
    match block {
        Block::ImageLinkCards(cards) => Ok(render_image_link_cards(cards)),
        other => Err(RenderError::mismatch(tag::IMAGE_LINK_CARDS, other)),
    }
}

pub fn render_image_link_cards(block: &ImageLinkCardsBlock) -> String {
    let mut inner = String::from("<div class=\"cards__header\">");
    inner.push_str(&render_text("span", "badge cards__eyebrow", block.eyebrow.as_deref()));
    inner.push_str(&render_text("h2", "cards__title", block.title.as_deref()));
    inner.push_str(&render_rich_text(block.rich_text.as_ref(), "prose cards__body"));
    inner.push_str(&render_buttons(&block.buttons, ButtonSize::Default));
    inner.push_str("</div>");

    let cards: String = block.cards.iter().filter_map(render_card).collect();
    if !cards.is_empty() {
        inner.push_str(&format!("<div class=\"cards__grid\">{cards}</div>"));
    }

    section(tag::IMAGE_LINK_CARDS, block.key.as_deref(), "cards", "", &inner)
}

/// A card is a link; without a safe target it is dropped.
fn render_card(card: &LinkCard) -> Option<String> {
    let href = safe_href(card.href.as_deref())?;
    let mut html = format!(
        "<a class=\"card\" href=\"{}\"{}>",
        html_escape(href),
        link_target_attrs(card.open_in_new_tab)
    );
    html.push_str(&render_image(card.image.as_ref(), "card__image"));
    html.push_str(&render_text("h3", "card__title", card.title.as_deref()));
    html.push_str(&render_text("p", "card__description", card.description.as_deref()));
    html.push_str("</a>");
    Some(html)
}
