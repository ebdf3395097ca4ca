//! Public page routes: home page and pages by slug.

use axum::extract::{Path, State};
use axum::response::Html;
use axum::routing::get;
use axum::Router;
use chrono::Datelike;
use tracing::{debug, warn};

use crate::content::model::normalize_path;
use crate::content::render_blocks;
use crate::error::{AppError, AppResult};
use crate::layout::{render_footer, render_navbar};
use crate::seo::{MetadataInput, assemble_metadata};
use crate::state::AppState;
use crate::theme::PageView;

/// Cache tags shared by every page (site chrome documents).
pub const CHROME_TAGS: [&str; 2] = ["navbar", "footer"];

/// A fully rendered page and the cache tags it depends on.
#[derive(Debug, Clone)]
pub struct RenderedPage {
    pub html: String,
    pub tags: Vec<String>,
}

/// Create the page router.
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(home_page))
        .route("/{*slug}", get(page_by_slug))
}

async fn home_page(State(state): State<AppState>) -> AppResult<Html<String>> {
    serve(&state, "/").await
}

async fn page_by_slug(
    State(state): State<AppState>,
    Path(slug): Path<String>,
) -> AppResult<Html<String>> {
    serve(&state, &slug).await
}

/// Serve from the page cache, rendering and caching on a miss.
async fn serve(state: &AppState, slug: &str) -> AppResult<Html<String>> {
    let key = normalize_path(slug);
    if let Some(html) = state.cache().get(&key).await {
        return Ok(Html(html.as_str().to_owned()));
    }

    let generation = state.cache().generation();
    let Some(page) = render_path(state, &key).await? else {
        debug!(path = %key, "no document for path");
        return Err(AppError::NotFound);
    };
    state
        .cache()
        .insert_if_unchanged(&key, page.html.clone(), &page.tags, generation)
        .await;
    Ok(Html(page.html))
}

/// Render the page at `path` without consulting the cache.
///
/// Returns `None` when no document exists for the path. Navbar and footer
/// failures only degrade those regions to their skeletons.
pub async fn render_path(state: &AppState, path: &str) -> AppResult<Option<RenderedPage>> {
    let path = normalize_path(path);
    let source = state.source();

    let page = if path == "/" {
        source.home_page().await?
    } else {
        source.page(&path).await?
    };
    let Some(page) = page else {
        return Ok(None);
    };

    let (navbar, footer) = tokio::join!(source.navbar(), source.footer());
    let navbar = navbar.unwrap_or_else(|e| {
        warn!(error = %e, "failed to load navbar, rendering placeholder");
        None
    });
    let footer = footer.unwrap_or_else(|e| {
        warn!(error = %e, "failed to load footer, rendering placeholder");
        None
    });

    let metadata = assemble_metadata(&MetadataInput::from_page(&page), state.site());
    let view = PageView {
        lang: "en".to_string(),
        path: path.clone(),
        head: metadata.to_head_html(),
        navbar: render_navbar(navbar.as_ref()),
        main: render_blocks(state.registry(), &page.blocks),
        footer: render_footer(footer.as_ref(), chrono::Utc::now().year()),
    };
    let html = state.theme().render_page(&view)?;

    let mut tags: Vec<String> = CHROME_TAGS.iter().map(|t| t.to_string()).collect();
    tags.push(path);
    if let Some(id) = page.id.as_deref() {
        tags.push(id.strip_prefix("drafts.").unwrap_or(id).to_string());
    }
    if let Some(doc_type) = page.doc_type.as_deref() {
        tags.push(doc_type.to_string());
    }

    Ok(Some(RenderedPage { html, tags }))
}
