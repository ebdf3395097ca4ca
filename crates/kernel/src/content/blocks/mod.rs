//! Built-in block renderers, one module per block type.
//!
//! Each module exposes a pure `render_*` function over its typed payload and
//! a `render` adapter with the [`BlockRenderer`](super::BlockRenderer)
//! signature used for registration.

pub mod cta;
pub mod faq_accordion;
pub mod hero;
pub mod image_link_cards;
pub mod product_catalog;
