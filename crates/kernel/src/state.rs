//! Application state shared across all handlers.

use std::sync::Arc;

use anyhow::{Context, Result};
use tracing::info;

use crate::cache::PageCache;
use crate::config::Config;
use crate::content::{BlockRegistry, ContentSource, FileContentSource};
use crate::schema::SchemaCatalog;
use crate::seo::SiteIdentity;
use crate::theme::ThemeEngine;

/// Shared application state.
///
/// Wrapped in Arc internally so Clone is cheap.
#[derive(Clone)]
pub struct AppState {
    inner: Arc<AppStateInner>,
}

struct AppStateInner {
    config: Config,

    /// Block type registry, immutable after startup.
    registry: Arc<BlockRegistry>,

    /// Block, object and document schemas.
    schemas: Arc<SchemaCatalog>,

    /// Where CMS documents come from.
    source: Arc<dyn ContentSource>,

    /// Page shell templates.
    theme: Arc<ThemeEngine>,

    /// Rendered pages.
    cache: PageCache,

    /// Site-wide metadata values.
    site: SiteIdentity,
}

impl AppState {
    /// Build state reading content from `config.content_dir`.
    pub fn new(config: &Config) -> Result<Self> {
        let source = Arc::new(FileContentSource::new(&config.content_dir));
        info!(dir = %config.content_dir.display(), "using file content source");
        Self::with_source(config, source)
    }

    /// Build state around an arbitrary content source.
    pub fn with_source(config: &Config, source: Arc<dyn ContentSource>) -> Result<Self> {
        let registry = BlockRegistry::standard().context("failed to register block types")?;
        info!(block_types = registry.len(), "block registry initialized");

        let theme = match &config.theme_dir {
            Some(dir) => ThemeEngine::from_dir(dir)
                .with_context(|| format!("failed to load theme from {}", dir.display()))?,
            None => ThemeEngine::builtin()?,
        };

        let schemas = SchemaCatalog::new(&registry);

        let mut site = SiteIdentity::new(
            config.site_name.clone(),
            config.site_environment.base_url(),
        );
        site.creator = config.site_creator.clone();
        site.twitter_creator = config.twitter_creator.clone();

        info!(
            environment = config.site_environment.name(),
            base_url = %site.base_url,
            "site identity configured"
        );

        Ok(Self {
            inner: Arc::new(AppStateInner {
                config: config.clone(),
                registry: Arc::new(registry),
                schemas: Arc::new(schemas),
                source,
                theme: Arc::new(theme),
                cache: PageCache::new(config.page_cache_ttl_secs, config.page_cache_capacity),
                site,
            }),
        })
    }

    pub fn config(&self) -> &Config {
        &self.inner.config
    }

    pub fn registry(&self) -> &Arc<BlockRegistry> {
        &self.inner.registry
    }

    pub fn schemas(&self) -> &Arc<SchemaCatalog> {
        &self.inner.schemas
    }

    pub fn source(&self) -> &Arc<dyn ContentSource> {
        &self.inner.source
    }

    pub fn theme(&self) -> &Arc<ThemeEngine> {
        &self.inner.theme
    }

    pub fn cache(&self) -> &PageCache {
        &self.inner.cache
    }

    pub fn site(&self) -> &SiteIdentity {
        &self.inner.site
    }
}
