//! Configuration loaded from environment variables.

use std::env;
use std::path::PathBuf;

use anyhow::{Context, Result};
use tracing::warn;

use crate::seo::SiteEnvironment;

/// Application configuration.
#[derive(Debug, Clone)]
pub struct Config {
    /// HTTP server port (default: 3000).
    pub port: u16,

    /// Directory holding the CMS content snapshot (default: ./content).
    pub content_dir: PathBuf,

    /// Optional directory of Tera templates overriding the built-in theme.
    pub theme_dir: Option<PathBuf>,

    /// Deployment environment, used to derive the public base URL.
    pub site_environment: SiteEnvironment,

    /// Site name appended to page titles (default: "Vetrina").
    pub site_name: String,

    /// Author/creator advertised in page metadata.
    pub site_creator: String,

    /// Twitter handle for the `twitter:creator` tag.
    pub twitter_creator: Option<String>,

    /// Time-to-live for rendered pages in seconds (default: 60).
    pub page_cache_ttl_secs: u64,

    /// Maximum number of rendered pages kept in memory (default: 1000).
    pub page_cache_capacity: u64,

    /// Bearer token required by the revalidation webhook, when set.
    pub revalidate_token: Option<String>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            port: 3000,
            content_dir: PathBuf::from("./content"),
            theme_dir: None,
            site_environment: SiteEnvironment::Local { port: 3000 },
            site_name: "Vetrina".to_string(),
            site_creator: "Vetrina".to_string(),
            twitter_creator: None,
            page_cache_ttl_secs: 60,
            page_cache_capacity: 1_000,
            revalidate_token: None,
        }
    }
}

impl Config {
    /// Load configuration from environment variables.
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Load configuration through an arbitrary key lookup.
    ///
    /// `from_env` is a thin wrapper around this; tests pass a map instead of
    /// mutating the process environment.
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let port: u16 = lookup("PORT")
            .unwrap_or_else(|| "3000".to_string())
            .parse()
            .context("PORT must be a valid u16")?;

        let content_dir = lookup("CONTENT_DIR")
            .map(PathBuf::from)
            .unwrap_or_else(|| PathBuf::from("./content"));

        let theme_dir = lookup("THEME_DIR")
            .filter(|v| !v.trim().is_empty())
            .map(PathBuf::from);

        let env_name = lookup("SITE_ENV").or_else(|| lookup("VERCEL_ENV"));
        let production_host =
            lookup("SITE_PRODUCTION_HOST").or_else(|| lookup("VERCEL_PROJECT_PRODUCTION_URL"));
        let preview_host = lookup("SITE_PREVIEW_HOST").or_else(|| lookup("VERCEL_URL"));

        let site_environment = SiteEnvironment::from_parts(
            env_name.as_deref(),
            production_host.as_deref(),
            preview_host.as_deref(),
            port,
        );
        if matches!(site_environment, SiteEnvironment::Local { .. })
            && matches!(env_name.as_deref(), Some("production" | "preview"))
        {
            warn!(
                environment = env_name.as_deref().unwrap_or_default(),
                "no public host configured, falling back to localhost base URL"
            );
        }

        let site_name = lookup("SITE_NAME").unwrap_or_else(|| "Vetrina".to_string());
        let site_creator = lookup("SITE_CREATOR").unwrap_or_else(|| site_name.clone());
        let twitter_creator = lookup("TWITTER_CREATOR").filter(|v| !v.trim().is_empty());

        let page_cache_ttl_secs = lookup("PAGE_CACHE_TTL_SECS")
            .unwrap_or_else(|| "60".to_string())
            .parse()
            .context("PAGE_CACHE_TTL_SECS must be a valid u64")?;

        let page_cache_capacity = lookup("PAGE_CACHE_CAPACITY")
            .unwrap_or_else(|| "1000".to_string())
            .parse()
            .context("PAGE_CACHE_CAPACITY must be a valid u64")?;

        let revalidate_token = lookup("REVALIDATE_TOKEN").filter(|v| !v.trim().is_empty());

        Ok(Self {
            port,
            content_dir,
            theme_dir,
            site_environment,
            site_name,
            site_creator,
            twitter_creator,
            page_cache_ttl_secs,
            page_cache_capacity,
            revalidate_token,
        })
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used)]
mod tests {
    use std::collections::HashMap;

    use super::*;

    fn lookup(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn defaults_when_nothing_is_set() {
        let config = Config::from_lookup(lookup(&[])).unwrap();
        assert_eq!(config.port, 3000);
        assert_eq!(config.content_dir, PathBuf::from("./content"));
        assert_eq!(config.site_name, "Vetrina");
        assert_eq!(
            config.site_environment,
            SiteEnvironment::Local { port: 3000 }
        );
        assert!(config.revalidate_token.is_none());
    }

    #[test]
    fn production_environment_uses_host() {
        let config = Config::from_lookup(lookup(&[
            ("SITE_ENV", "production"),
            ("SITE_PRODUCTION_HOST", "www.example.com"),
        ]))
        .unwrap();
        assert_eq!(
            config.site_environment,
            SiteEnvironment::Production {
                host: "www.example.com".to_string()
            }
        );
    }

    #[test]
    fn vercel_variables_are_honoured() {
        let config = Config::from_lookup(lookup(&[
            ("VERCEL_ENV", "preview"),
            ("VERCEL_URL", "branch-abc.vercel.app"),
        ]))
        .unwrap();
        assert_eq!(
            config.site_environment,
            SiteEnvironment::Preview {
                host: "branch-abc.vercel.app".to_string()
            }
        );
    }

    #[test]
    fn invalid_port_is_an_error() {
        let err = Config::from_lookup(lookup(&[("PORT", "not-a-port")])).unwrap_err();
        assert!(err.to_string().contains("PORT"));
    }

    #[test]
    fn blank_token_is_ignored() {
        let config = Config::from_lookup(lookup(&[("REVALIDATE_TOKEN", "  ")])).unwrap();
        assert!(config.revalidate_token.is_none());
    }
}
