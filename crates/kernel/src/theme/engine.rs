//! Theme engine with Tera templates.

use std::path::Path;

use anyhow::{Context, Result};
use serde::Serialize;
use tera::Tera;
use tracing::debug;

/// Name of the page shell template.
pub const PAGE_TEMPLATE: &str = "page.html";

const BUILTIN_PAGE: &str = include_str!("../../templates/page.html");

/// Pre-rendered fragments placed into the page shell.
#[derive(Debug, Clone, Default, Serialize)]
pub struct PageView {
    pub lang: String,
    pub path: String,
    pub head: String,
    pub navbar: String,
    pub main: String,
    pub footer: String,
}

/// Theme engine for rendering templates.
pub struct ThemeEngine {
    /// Tera template engine instance.
    tera: Tera,
}

impl ThemeEngine {
    /// Create a theme engine with the built-in page shell.
    pub fn builtin() -> Result<Self> {
        let mut tera = Tera::default();
        tera.add_raw_template(PAGE_TEMPLATE, BUILTIN_PAGE)
            .context("failed to parse built-in page template")?;
        Ok(Self { tera })
    }

    /// Load templates from a directory, keeping the built-in shell for any
    /// template the directory does not override.
    pub fn from_dir(template_dir: &Path) -> Result<Self> {
        let pattern = template_dir.join("**/*.html");
        let pattern_str = pattern
            .to_str()
            .context("invalid template directory path")?;

        let mut tera = Tera::new(pattern_str).context("failed to initialize Tera templates")?;
        if !tera.get_template_names().any(|name| name == PAGE_TEMPLATE) {
            tera.add_raw_template(PAGE_TEMPLATE, BUILTIN_PAGE)
                .context("failed to parse built-in page template")?;
        }

        let template_names: Vec<_> = tera.get_template_names().collect();
        debug!(count = template_names.len(), dir = %template_dir.display(), "loaded templates");

        Ok(Self { tera })
    }

    /// Get the underlying Tera instance for custom operations.
    pub fn tera(&self) -> &Tera {
        &self.tera
    }

    /// Wrap rendered fragments in the page shell.
    pub fn render_page(&self, view: &PageView) -> Result<String, tera::Error> {
        let context = tera::Context::from_serialize(view)?;
        self.tera.render(PAGE_TEMPLATE, &context)
    }
}
