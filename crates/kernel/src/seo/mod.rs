//! Page metadata: title, description, canonical URL and social-preview tags.
//!
//! Everything here is a pure function of the document's SEO fields and the
//! site identity. The public base URL comes from [`SiteEnvironment`].

use serde::Serialize;
use url::form_urlencoded;

use crate::content::model::{PageDocument, normalize_path};
use crate::routes::helpers::html_escape;

/// Open Graph preview image dimensions.
pub const OG_IMAGE_WIDTH: u32 = 1200;
pub const OG_IMAGE_HEIGHT: u32 = 630;

/// Where the site is deployed. Decides the public base URL.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SiteEnvironment {
    Production { host: String },
    Preview { host: String },
    Local { port: u16 },
}

impl SiteEnvironment {
    /// Build from an environment name and the candidate hosts.
    ///
    /// Production and preview need their host; without one they fall back to
    /// `Local`.
    pub fn from_parts(
        env_name: Option<&str>,
        production_host: Option<&str>,
        preview_host: Option<&str>,
        port: u16,
    ) -> Self {
        let clean = |host: Option<&str>| {
            host.map(|h| {
                let h = h.trim();
                let h = h
                    .strip_prefix("https://")
                    .or_else(|| h.strip_prefix("http://"))
                    .unwrap_or(h);
                h.trim_end_matches('/')
            })
            .filter(|h| !h.is_empty())
            .map(str::to_string)
        };
        match env_name.map(str::trim) {
            Some("production") => match clean(production_host) {
                Some(host) => Self::Production { host },
                None => Self::Local { port },
            },
            Some("preview") => match clean(preview_host) {
                Some(host) => Self::Preview { host },
                None => Self::Local { port },
            },
            _ => Self::Local { port },
        }
    }

    /// Public base URL without a trailing slash.
    pub fn base_url(&self) -> String {
        match self {
            Self::Production { host } | Self::Preview { host } => format!("https://{host}"),
            Self::Local { port } => format!("http://localhost:{port}"),
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            Self::Production { .. } => "production",
            Self::Preview { .. } => "preview",
            Self::Local { .. } => "local",
        }
    }
}

/// Site-wide values shared by every page's metadata.
#[derive(Debug, Clone)]
pub struct SiteIdentity {
    pub site_name: String,
    pub creator: String,
    pub twitter_creator: Option<String>,
    pub base_url: String,
    pub country_name: String,
    pub keywords: Vec<String>,
}

impl SiteIdentity {
    pub fn new(site_name: impl Into<String>, base_url: impl Into<String>) -> Self {
        let site_name = site_name.into();
        Self {
            creator: site_name.clone(),
            site_name,
            twitter_creator: None,
            base_url: base_url.into(),
            country_name: "UK".to_string(),
            keywords: Vec::new(),
        }
    }
}

/// Document fields the assembler reads.
#[derive(Debug, Clone, Default)]
pub struct MetadataInput {
    pub doc_type: Option<String>,
    pub id: Option<String>,
    pub slug: Option<String>,
    pub title: Option<String>,
    pub description: Option<String>,
    pub seo_title: Option<String>,
    pub seo_description: Option<String>,
    pub og_title: Option<String>,
    pub og_description: Option<String>,
    pub no_index: bool,
}

impl MetadataInput {
    pub fn from_page(page: &PageDocument) -> Self {
        Self {
            doc_type: page.doc_type.clone(),
            id: page.id.clone(),
            slug: page.slug.as_ref().and_then(|s| s.as_str()).map(str::to_string),
            title: page.title.clone(),
            description: page.description.clone(),
            seo_title: page.seo.seo_title.clone(),
            seo_description: page.seo.seo_description.clone(),
            og_title: page.seo.og_title.clone(),
            og_description: page.seo.og_description.clone(),
            no_index: page.seo.seo_no_index.unwrap_or(false),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct OgImage {
    pub url: String,
    pub width: u32,
    pub height: u32,
    pub alt: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct OpenGraph {
    pub og_type: String,
    pub url: String,
    pub title: String,
    pub description: String,
    pub site_name: String,
    pub country_name: String,
    pub image: OgImage,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TwitterCard {
    pub card: String,
    pub title: String,
    pub description: String,
    pub creator: Option<String>,
    pub image: String,
}

/// Assembled `<head>` metadata for one page.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PageMetadata {
    /// Full document title (`"{title} | {site}"`).
    pub title: String,
    pub description: String,
    pub canonical: String,
    pub creator: String,
    pub keywords: Vec<String>,
    pub icon: String,
    pub robots: Option<String>,
    pub open_graph: OpenGraph,
    pub twitter: TwitterCard,
}

/// Generated preview-image URL for a document.
pub fn og_image_url(base_url: &str, doc_type: Option<&str>, id: Option<&str>) -> String {
    let mut params = form_urlencoded::Serializer::new(String::new());
    if let Some(id) = present(id) {
        params.append_pair("id", id);
    }
    if let Some(doc_type) = present(doc_type) {
        params.append_pair("type", doc_type);
    }
    format!("{base_url}/api/og?{}", params.finish())
}

fn present(value: Option<&str>) -> Option<&str> {
    value.filter(|v| !v.trim().is_empty())
}

/// First non-empty candidate, or an empty string.
fn first_present(candidates: &[Option<&str>]) -> String {
    candidates
        .iter()
        .find_map(|c| present(*c))
        .unwrap_or_default()
        .to_string()
}

/// Build a page's metadata from its SEO fields and the site identity.
pub fn assemble_metadata(input: &MetadataInput, site: &SiteIdentity) -> PageMetadata {
    let title = first_present(&[input.seo_title.as_deref(), input.title.as_deref()]);
    let description = first_present(&[
        input.seo_description.as_deref(),
        input.description.as_deref(),
    ]);
    let social_title = first_present(&[input.og_title.as_deref(), Some(&title)]);
    let social_description =
        first_present(&[input.og_description.as_deref(), Some(&description)]);

    let base = site.base_url.trim_end_matches('/');
    let canonical = format!(
        "{base}{}",
        normalize_path(input.slug.as_deref().unwrap_or("/"))
    );
    let image = og_image_url(base, input.doc_type.as_deref(), input.id.as_deref());

    let document_title = if title.is_empty() {
        site.site_name.clone()
    } else {
        format!("{title} | {}", site.site_name)
    };

    PageMetadata {
        title: document_title,
        description: description.clone(),
        canonical: canonical.clone(),
        creator: site.creator.clone(),
        keywords: site.keywords.clone(),
        icon: format!("{base}/favicon.ico"),
        robots: input.no_index.then(|| "noindex, nofollow".to_string()),
        open_graph: OpenGraph {
            og_type: "website".to_string(),
            url: canonical,
            title: social_title.clone(),
            description: social_description.clone(),
            site_name: site.site_name.clone(),
            country_name: site.country_name.clone(),
            image: OgImage {
                url: image.clone(),
                width: OG_IMAGE_WIDTH,
                height: OG_IMAGE_HEIGHT,
                alt: social_title.clone(),
            },
        },
        twitter: TwitterCard {
            card: "summary_large_image".to_string(),
            title: social_title,
            description: social_description,
            creator: site.twitter_creator.clone(),
            image,
        },
    }
}

impl PageMetadata {
    /// Render the metadata as `<head>` tags.
    pub fn to_head_html(&self) -> String {
        let mut html = String::new();
        html.push_str(&format!("<title>{}</title>\n", html_escape(&self.title)));
        push_meta(&mut html, "name", "description", &self.description);
        push_meta(&mut html, "name", "creator", &self.creator);
        if !self.keywords.is_empty() {
            push_meta(&mut html, "name", "keywords", &self.keywords.join(","));
        }
        if let Some(robots) = &self.robots {
            push_meta(&mut html, "name", "robots", robots);
        }
        html.push_str(&format!(
            "<link rel=\"canonical\" href=\"{}\">\n<link rel=\"icon\" href=\"{}\">\n",
            html_escape(&self.canonical),
            html_escape(&self.icon)
        ));

        let og = &self.open_graph;
        push_meta(&mut html, "property", "og:type", &og.og_type);
        push_meta(&mut html, "property", "og:url", &og.url);
        push_meta(&mut html, "property", "og:title", &og.title);
        push_meta(&mut html, "property", "og:description", &og.description);
        push_meta(&mut html, "property", "og:site_name", &og.site_name);
        push_meta(&mut html, "property", "og:country-name", &og.country_name);
        push_meta(&mut html, "property", "og:image", &og.image.url);
        push_meta(&mut html, "property", "og:image:secure_url", &og.image.url);
        push_meta(&mut html, "property", "og:image:width", &og.image.width.to_string());
        push_meta(&mut html, "property", "og:image:height", &og.image.height.to_string());
        push_meta(&mut html, "property", "og:image:alt", &og.image.alt);

        let tw = &self.twitter;
        push_meta(&mut html, "name", "twitter:card", &tw.card);
        push_meta(&mut html, "name", "twitter:title", &tw.title);
        push_meta(&mut html, "name", "twitter:description", &tw.description);
        push_meta(&mut html, "name", "twitter:image", &tw.image);
        if let Some(creator) = &tw.creator {
            push_meta(&mut html, "name", "twitter:creator", creator);
        }
        html
    }
}

fn push_meta(html: &mut String, attr: &str, key: &str, content: &str) {
    html.push_str(&format!(
        "<meta {attr}=\"{key}\" content=\"{}\">\n",
        html_escape(content)
    ));
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used)]
mod tests {
    use super::*;

    fn site() -> SiteIdentity {
        let mut site = SiteIdentity::new("Acme Dental", "https://www.example.com");
        site.twitter_creator = Some("@acme".to_string());
        site
    }

    #[test]
    fn base_url_per_environment() {
        assert_eq!(
            SiteEnvironment::from_parts(Some("production"), Some("www.example.com"), None, 3000)
                .base_url(),
            "https://www.example.com"
        );
        assert_eq!(
            SiteEnvironment::from_parts(Some("preview"), None, Some("abc.vercel.app"), 3000)
                .base_url(),
            "https://abc.vercel.app"
        );
        assert_eq!(
            SiteEnvironment::from_parts(None, Some("www.example.com"), None, 8080).base_url(),
            "http://localhost:8080"
        );
        assert_eq!(
            SiteEnvironment::from_parts(Some("production"), Some("  "), None, 3000),
            SiteEnvironment::Local { port: 3000 }
        );
    }

    #[test]
    fn configured_scheme_is_stripped() {
        assert_eq!(
            SiteEnvironment::from_parts(Some("production"), Some("http://www.example.com/"), None, 3000),
            SiteEnvironment::Production {
                host: "www.example.com".to_string()
            }
        );
        assert_eq!(
            SiteEnvironment::from_parts(Some("preview"), None, Some("https://abc.vercel.app"), 3000)
                .base_url(),
            "https://abc.vercel.app"
        );
        assert_eq!(
            SiteEnvironment::from_parts(Some("production"), Some("https://"), None, 3000),
            SiteEnvironment::Local { port: 3000 }
        );
    }

    #[test]
    fn og_image_url_params() {
        assert_eq!(
            og_image_url("https://x.com", Some("page"), Some("abc 1")),
            "https://x.com/api/og?id=abc+1&type=page"
        );
        assert_eq!(og_image_url("https://x.com", None, None), "https://x.com/api/og?");
        assert_eq!(
            og_image_url("https://x.com", Some("homePage"), Some("")),
            "https://x.com/api/og?type=homePage"
        );
    }

    #[test]
    fn seo_fields_override_generic_ones() {
        let input = MetadataInput {
            doc_type: Some("page".into()),
            id: Some("p1".into()),
            slug: Some("/about".into()),
            title: Some("About".into()),
            description: Some("Generic".into()),
            seo_title: Some("About Acme".into()),
            seo_description: Some("Specific".into()),
            ..Default::default()
        };
        let meta = assemble_metadata(&input, &site());
        assert_eq!(meta.title, "About Acme | Acme Dental");
        assert_eq!(meta.description, "Specific");
        assert_eq!(meta.canonical, "https://www.example.com/about");
        assert_eq!(meta.open_graph.image.width, 1200);
        assert_eq!(meta.open_graph.image.height, 630);
        assert_eq!(meta.open_graph.image.alt, "About Acme");
        assert_eq!(
            meta.twitter.image,
            "https://www.example.com/api/og?id=p1&type=page"
        );
        assert!(meta.robots.is_none());
    }

    #[test]
    fn empty_strings_fall_back() {
        let input = MetadataInput {
            title: Some("Pricing".into()),
            seo_title: Some(String::new()),
            slug: Some("pricing".into()),
            ..Default::default()
        };
        let meta = assemble_metadata(&input, &site());
        assert_eq!(meta.title, "Pricing | Acme Dental");
        assert_eq!(meta.canonical, "https://www.example.com/pricing");
        assert_eq!(meta.description, "");
    }

    #[test]
    fn untitled_page_uses_site_name() {
        let meta = assemble_metadata(&MetadataInput::default(), &site());
        assert_eq!(meta.title, "Acme Dental");
        assert_eq!(meta.canonical, "https://www.example.com/");
    }

    #[test]
    fn head_html_is_escaped_and_complete() {
        let input = MetadataInput {
            title: Some("Tom & \"Jerry\"".into()),
            no_index: true,
            ..Default::default()
        };
        let html = assemble_metadata(&input, &site()).to_head_html();
        assert!(html.contains("<title>Tom &amp; &quot;Jerry&quot; | Acme Dental</title>"));
        assert!(html.contains("<meta name=\"robots\" content=\"noindex, nofollow\">"));
        assert!(html.contains("<meta name=\"twitter:card\" content=\"summary_large_image\">"));
        assert!(html.contains("<meta name=\"twitter:creator\" content=\"@acme\">"));
        assert!(html.contains("<meta property=\"og:type\" content=\"website\">"));
    }
}
