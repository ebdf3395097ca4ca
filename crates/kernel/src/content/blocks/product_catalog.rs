//! Product catalog placeholder section.

use crate::content::block_render::{render_text, section};
use crate::content::model::{Block, ProductCatalogBlock, tag};
use crate::content::registry::RenderError;

pub fn render(block: &Block) -> Result<String, RenderError> {
    match block {
        Block::ProductCatalog(catalog) => Ok(render_product_catalog(catalog)),
        other => Err(RenderError::mismatch(tag::PRODUCT_CATALOG, other)),
    }
}

pub fn render_product_catalog(catalog: &ProductCatalogBlock) -> String {
    let mut inner = String::from("<div class=\"container\">");
    inner.push_str(&render_text("h2", "catalog__title", catalog.title.as_deref()));
    inner.push_str(&render_text("h3", "catalog__subtitle", catalog.subtitle.as_deref()));
    inner.push_str(&render_text(
        "p",
        "catalog__description",
        catalog.description.as_deref(),
    ));
    inner.push_str("</div>");
    section(tag::PRODUCT_CATALOG, catalog.key.as_deref(), "catalog", "", &inner)
}
