//! Block registry: type tag to renderer and authoring schema.
//!
//! Built once at startup and immutable afterwards. Application state shares
//! it behind an `Arc`; there is no process-wide instance.

use std::collections::HashMap;
use std::fmt;
use std::sync::Arc;

use thiserror::Error;

use super::blocks;
use super::model::{Block, tag};
use crate::schema::{self, SchemaType};

/// Failure while rendering a single block.
#[derive(Debug, Error)]
pub enum RenderError {
    #[error("renderer for '{expected}' received a '{found}' block")]
    Mismatch { expected: String, found: String },

    #[error("invalid '{type_tag}' payload: {message}")]
    Payload { type_tag: String, message: String },
}

impl RenderError {
    pub fn mismatch(expected: &str, block: &Block) -> Self {
        Self::Mismatch {
            expected: expected.to_string(),
            found: block.type_tag().to_string(),
        }
    }
}

/// Startup-time registration failures.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum RegistryError {
    #[error("block type tag must not be empty")]
    EmptyTag,

    #[error("block type '{0}' is already registered")]
    DuplicateTag(String),

    #[error("schema '{schema}' does not match block type '{tag}'")]
    SchemaNameMismatch { tag: String, schema: String },

    #[error("schema for block type '{0}' has no fields")]
    EmptySchema(String),
}

/// Renders one block to markup. Pure; no I/O.
pub trait BlockRenderer: Send + Sync {
    fn render(&self, block: &Block) -> Result<String, RenderError>;
}

impl<F> BlockRenderer for F
where
    F: Fn(&Block) -> Result<String, RenderError> + Send + Sync,
{
    fn render(&self, block: &Block) -> Result<String, RenderError> {
        self(block)
    }
}

struct Registration {
    renderer: Arc<dyn BlockRenderer>,
    schema: SchemaType,
}

/// Registry of block types, keyed by type tag.
///
/// Iteration order (`tags`, `schema_list`) is registration order, which is
/// also the authoring tool's insertion-menu order.
#[derive(Default)]
pub struct BlockRegistry {
    entries: HashMap<String, Registration>,
    order: Vec<String>,
}

impl fmt::Debug for BlockRegistry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("BlockRegistry")
            .field("tags", &self.order)
            .finish()
    }
}

impl BlockRegistry {
    /// Create a new empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Registry with the built-in block types, in menu order.
    pub fn standard() -> Result<Self, RegistryError> {
        let mut registry = Self::new();
        registry.register(tag::HERO, blocks::hero::render, schema::blocks::hero())?;
        registry.register(tag::CTA, blocks::cta::render, schema::blocks::cta())?;
        registry.register(
            tag::FAQ_ACCORDION,
            blocks::faq_accordion::render,
            schema::blocks::faq_accordion(),
        )?;
        registry.register(
            tag::IMAGE_LINK_CARDS,
            blocks::image_link_cards::render,
            schema::blocks::image_link_cards(),
        )?;
        registry.register(
            tag::PRODUCT_CATALOG,
            blocks::product_catalog::render,
            schema::blocks::product_catalog(),
        )?;
        Ok(registry)
    }

    /// Register a block type.
    pub fn register<R>(
        &mut self,
        tag: &str,
        renderer: R,
        schema: SchemaType,
    ) -> Result<(), RegistryError>
    where
        R: BlockRenderer + 'static,
    {
        self.register_arc(tag, Arc::new(renderer), schema)
    }

    /// Register a block type with an already shared renderer.
    pub fn register_arc(
        &mut self,
        tag: &str,
        renderer: Arc<dyn BlockRenderer>,
        schema: SchemaType,
    ) -> Result<(), RegistryError> {
        if tag.trim().is_empty() {
            return Err(RegistryError::EmptyTag);
        }
        if self.entries.contains_key(tag) {
            return Err(RegistryError::DuplicateTag(tag.to_string()));
        }
        if schema.name != tag {
            return Err(RegistryError::SchemaNameMismatch {
                tag: tag.to_string(),
                schema: schema.name.clone(),
            });
        }
        if schema.fields.is_empty() {
            return Err(RegistryError::EmptySchema(tag.to_string()));
        }

        tracing::debug!(block_type = tag, "registered block type");
        self.order.push(tag.to_string());
        self.entries
            .insert(tag.to_string(), Registration { renderer, schema });
        Ok(())
    }

    /// The renderer registered for a tag.
    pub fn component_for(&self, tag: &str) -> Option<Arc<dyn BlockRenderer>> {
        self.entries.get(tag).map(|r| Arc::clone(&r.renderer))
    }

    /// The schema registered for a tag.
    pub fn schema_for(&self, tag: &str) -> Option<&SchemaType> {
        self.entries.get(tag).map(|r| &r.schema)
    }

    /// All schemas in registration order.
    pub fn schema_list(&self) -> Vec<&SchemaType> {
        self.order
            .iter()
            .filter_map(|t| self.entries.get(t))
            .map(|r| &r.schema)
            .collect()
    }

    /// Registered tags in registration order.
    pub fn tags(&self) -> &[String] {
        &self.order
    }

    pub fn contains(&self, tag: &str) -> bool {
        self.entries.contains_key(tag)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used)]
mod tests {
    use super::*;
    use crate::content::model::RawBlock;
    use crate::schema::{FieldDefinition, FieldKind};

    fn schema(name: &str) -> SchemaType {
        SchemaType::object(name, "Test").field(FieldDefinition::new("title", FieldKind::String))
    }

    fn testimonial(block: &Block) -> Result<String, RenderError> {
        match block {
            Block::Other(raw) => Ok(format!("<section data-block=\"{}\"></section>", raw.type_tag)),
            other => Err(RenderError::mismatch("testimonial", other)),
        }
    }

    #[test]
    fn standard_registry_menu_order() {
        let registry = BlockRegistry::standard().unwrap();
        assert_eq!(
            registry.tags(),
            ["hero", "cta", "faqAccordion", "imageLinkCards", "productCatalog"]
        );
        let names: Vec<_> = registry.schema_list().iter().map(|s| s.name.as_str()).collect();
        assert_eq!(
            names,
            ["hero", "cta", "faqAccordion", "imageLinkCards", "productCatalog"]
        );
        assert_eq!(registry.len(), 5);
    }

    #[test]
    fn register_then_lookup_returns_same_renderer() {
        let mut registry = BlockRegistry::new();
        let renderer: Arc<dyn BlockRenderer> = Arc::new(testimonial);
        registry
            .register_arc("testimonial", Arc::clone(&renderer), schema("testimonial"))
            .unwrap();

        let found = registry.component_for("testimonial").unwrap();
        assert!(Arc::ptr_eq(&found, &renderer));

        let block = Block::Other(RawBlock {
            type_tag: "testimonial".into(),
            key: None,
            data: serde_json::json!({}),
        });
        assert_eq!(
            found.render(&block).unwrap(),
            "<section data-block=\"testimonial\"></section>"
        );
        assert_eq!(registry.schema_for("testimonial").unwrap().name, "testimonial");
    }

    #[test]
    fn duplicate_tag_rejected() {
        let mut registry = BlockRegistry::new();
        registry
            .register("testimonial", testimonial, schema("testimonial"))
            .unwrap();
        let err = registry
            .register("testimonial", testimonial, schema("testimonial"))
            .unwrap_err();
        assert_eq!(err, RegistryError::DuplicateTag("testimonial".into()));
        assert_eq!(registry.len(), 1);
    }

    #[test]
    fn invalid_registrations_rejected() {
        let mut registry = BlockRegistry::new();
        assert_eq!(
            registry.register("", testimonial, schema("")).unwrap_err(),
            RegistryError::EmptyTag
        );
        assert!(matches!(
            registry
                .register("testimonial", testimonial, schema("quote"))
                .unwrap_err(),
            RegistryError::SchemaNameMismatch { .. }
        ));
        assert_eq!(
            registry
                .register("testimonial", testimonial, SchemaType::object("testimonial", "T"))
                .unwrap_err(),
            RegistryError::EmptySchema("testimonial".into())
        );
        assert!(registry.is_empty());
    }

    #[test]
    fn unknown_tag_lookup_is_absent() {
        let registry = BlockRegistry::standard().unwrap();
        assert!(registry.component_for("carousel").is_none());
        assert!(registry.schema_for("carousel").is_none());
    }
}
