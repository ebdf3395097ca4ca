//! Page-builder content.
//!
//! This module provides:
//! - The typed content model decoded from CMS documents
//! - `BlockRegistry`: type tag to renderer and schema
//! - `render_blocks`: in-order page assembly
//! - Built-in block renderers and Portable Text rendering
//! - `ContentSource`: document snapshots (files or memory)

pub mod block_render;
pub mod blocks;
pub mod model;
pub mod registry;
pub mod rich_text;
pub mod source;

pub use block_render::render_blocks;
pub use model::{Block, Button, ButtonVariant, CtaStyle, FooterDocument, NavbarDocument, PageDocument};
pub use registry::{BlockRegistry, BlockRenderer, RegistryError, RenderError};
pub use rich_text::RichText;
pub use source::{ContentSource, FileContentSource, MemoryContentSource, SourceDocument, SourceError};
