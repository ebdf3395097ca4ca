//! Rendered-page cache with tag-based invalidation.
//!
//! Pages live in an in-process Moka cache. A tag index (DashMap) maps each
//! tag (document id, slug, type) to the cache keys rendered from it, so a
//! CMS mutation can evict exactly the affected pages.

use std::collections::HashSet;
use std::sync::Arc;
use std::sync::atomic::{AtomicU64, Ordering};
use std::time::Duration;

use dashmap::DashMap;
use moka::future::Cache;
use serde::Serialize;
use tracing::debug;

/// Default TTL for rendered pages (60 seconds).
pub const DEFAULT_TTL_SECS: u64 = 60;

/// Default maximum number of cached pages.
pub const DEFAULT_MAX_CAPACITY: u64 = 1_000;

/// Cache counters reported by the health endpoint.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct CacheStats {
    pub entries: u64,
    pub tags: usize,
    pub hits: u64,
    pub misses: u64,
}

/// Cache of rendered HTML pages keyed by request path.
#[derive(Clone)]
pub struct PageCache {
    inner: Arc<PageCacheInner>,
}

struct PageCacheInner {
    pages: Cache<String, Arc<String>>,
    tags: DashMap<String, HashSet<String>>,
    hits: AtomicU64,
    misses: AtomicU64,
    /// Bumped by every invalidation.
    generation: AtomicU64,
}

impl Default for PageCache {
    fn default() -> Self {
        Self::new(DEFAULT_TTL_SECS, DEFAULT_MAX_CAPACITY)
    }
}

impl PageCache {
    /// Create a cache; a zero TTL falls back to the default.
    pub fn new(ttl_secs: u64, max_capacity: u64) -> Self {
        let ttl = if ttl_secs > 0 { ttl_secs } else { DEFAULT_TTL_SECS };
        let pages = Cache::builder()
            .max_capacity(max_capacity)
            .time_to_live(Duration::from_secs(ttl))
            .build();

        Self {
            inner: Arc::new(PageCacheInner {
                pages,
                tags: DashMap::new(),
                hits: AtomicU64::new(0),
                misses: AtomicU64::new(0),
                generation: AtomicU64::new(0),
            }),
        }
    }

    pub async fn get(&self, key: &str) -> Option<Arc<String>> {
        match self.inner.pages.get(key).await {
            Some(html) => {
                self.inner.hits.fetch_add(1, Ordering::Relaxed);
                debug!(key = %key, "page cache hit");
                Some(html)
            }
            None => {
                self.inner.misses.fetch_add(1, Ordering::Relaxed);
                None
            }
        }
    }

    /// Store a rendered page and register it under each non-empty tag.
    pub async fn insert(&self, key: &str, html: String, tags: &[String]) {
        self.inner
            .pages
            .insert(key.to_string(), Arc::new(html))
            .await;

        for tag in tags.iter().filter(|t| !t.is_empty()) {
            self.inner
                .tags
                .entry(tag.clone())
                .or_default()
                .insert(key.to_string());
        }
        debug!(key = %key, tags = ?tags, "page cached");
    }

    /// Current invalidation generation. Capture it before rendering a page
    /// and pass it to [`PageCache::insert_if_unchanged`].
    pub fn generation(&self) -> u64 {
        self.inner.generation.load(Ordering::Acquire)
    }

    fn bump_generation(&self) {
        self.inner.generation.fetch_add(1, Ordering::AcqRel);
    }

    /// Store a page rendered while the cache was at `generation`.
    ///
    /// Skipped when any invalidation happened after `generation` was read.
    /// Returns whether the page was kept.
    pub async fn insert_if_unchanged(
        &self,
        key: &str,
        html: String,
        tags: &[String],
        generation: u64,
    ) -> bool {
        if self.generation() != generation {
            debug!(key = %key, "cache invalidated during render, not caching");
            return false;
        }
        self.insert(key, html, tags).await;
        if self.generation() != generation {
            self.inner.pages.invalidate(key).await;
            debug!(key = %key, "cache invalidated during insert, evicted");
            return false;
        }
        true
    }

    /// Evict every page registered under `tag`. Returns the number of keys.
    pub async fn invalidate_tag(&self, tag: &str) -> usize {
        self.bump_generation();
        let Some((_, keys)) = self.inner.tags.remove(tag) else {
            debug!(tag = %tag, "no cached pages for tag");
            return 0;
        };
        for key in &keys {
            self.inner.pages.invalidate(key).await;
        }
        debug!(tag = %tag, keys_invalidated = keys.len(), "tag invalidated");
        keys.len()
    }

    /// Evict every page registered under any of `tags`. Returns the number
    /// of distinct keys.
    pub async fn invalidate_tags(&self, tags: &[String]) -> usize {
        self.bump_generation();
        let mut keys = HashSet::new();
        for tag in tags {
            if let Some((_, tagged)) = self.inner.tags.remove(tag) {
                keys.extend(tagged);
            }
        }
        for key in &keys {
            self.inner.pages.invalidate(key).await;
        }
        debug!(tags = ?tags, keys_invalidated = keys.len(), "tags invalidated");
        keys.len()
    }

    /// Evict everything.
    pub fn invalidate_all(&self) {
        self.bump_generation();
        self.inner.pages.invalidate_all();
        self.inner.tags.clear();
        debug!("page cache cleared");
    }

    pub async fn stats(&self) -> CacheStats {
        self.inner.pages.run_pending_tasks().await;
        CacheStats {
            entries: self.inner.pages.entry_count(),
            tags: self.inner.tags.len(),
            hits: self.inner.hits.load(Ordering::Relaxed),
            misses: self.inner.misses.load(Ordering::Relaxed),
        }
    }
}
