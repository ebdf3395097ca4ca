//! Typed content model for CMS documents and page-builder blocks.
//!
//! Every payload field is optional. Decoding happens once, at the content
//! boundary; renderers receive these types and never re-validate them.
//!
//! Buttons, link cards and navigation links accept both link shapes found in
//! authored content (a flat `href` and a nested `link.href` object) and
//! normalize them into a single representation.

use serde::de::DeserializeOwned;
use serde::{Deserialize, Deserializer};
use serde_json::Value;
use thiserror::Error;
use tracing::{debug, warn};

use super::rich_text::RichText;

/// Block type tags understood by the built-in renderers.
pub mod tag {
    pub const HERO: &str = "hero";
    pub const CTA: &str = "cta";
    pub const FAQ_ACCORDION: &str = "faqAccordion";
    pub const IMAGE_LINK_CARDS: &str = "imageLinkCards";
    pub const PRODUCT_CATALOG: &str = "productCatalog";
}

/// Deserialize a possibly-`null` array as an empty `Vec`.
pub(crate) fn nullable_vec<'de, D, T>(deserializer: D) -> Result<Vec<T>, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de>,
{
    Ok(Option::<Vec<T>>::deserialize(deserializer)?.unwrap_or_default())
}

/// Deserialize a list of entries one by one, dropping (and logging) entries
/// that fail to decode. A non-array value is still an error.
pub(crate) fn lenient_vec<'de, D, T>(deserializer: D) -> Result<Vec<T>, D::Error>
where
    D: Deserializer<'de>,
    T: DeserializeOwned,
{
    let raw: Vec<Value> = nullable_vec(deserializer)?;
    Ok(raw
        .into_iter()
        .enumerate()
        .filter_map(|(position, value)| match serde_json::from_value(value) {
            Ok(entry) => Some(entry),
            Err(e) => {
                warn!(
                    position,
                    entry_type = std::any::type_name::<T>(),
                    error = %e,
                    "dropping undecodable entry"
                );
                None
            }
        })
        .collect())
}

/// An image already resolved to a CDN URL by the fetch layer.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct ImageRef {
    pub url: Option<String>,
    pub alt: Option<String>,
    pub width: Option<u32>,
    pub height: Option<u32>,
}

// ---------------------------------------------------------------------------
// Links and buttons
// ---------------------------------------------------------------------------

/// Visual variant of a button. Unknown values fall back to `Default`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ButtonVariant {
    #[default]
    Default,
    Outline,
    Secondary,
    Link,
}

impl ButtonVariant {
    /// Map an authored variant name to a variant.
    pub fn from_tag(tag: &str) -> Self {
        match tag {
            "outline" => Self::Outline,
            "secondary" => Self::Secondary,
            "link" => Self::Link,
            _ => Self::Default,
        }
    }

    /// Authored name of the variant.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Default => "default",
            Self::Outline => "outline",
            Self::Secondary => "secondary",
            Self::Link => "link",
        }
    }
}

impl<'de> Deserialize<'de> for ButtonVariant {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let tag = Option::<String>::deserialize(deserializer)?;
        Ok(tag.as_deref().map(Self::from_tag).unwrap_or_default())
    }
}

/// Nested link object (`link: { href, openInNewTab, type }`).
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
struct WireLink {
    href: Option<String>,
    external: Option<String>,
    open_in_new_tab: Option<bool>,
}

/// Link target fields as they appear on the wire, flat or nested.
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
struct WireTarget {
    href: Option<String>,
    open_in_new_tab: Option<bool>,
    link: Option<WireLink>,
    url: Option<WireLink>,
}

impl WireTarget {
    /// Resolve to `(href, open_in_new_tab)`. Flat fields win over nested ones.
    fn resolve(self) -> (Option<String>, bool) {
        let nested = self.link.or(self.url).unwrap_or_default();
        let present = |h: &String| !h.trim().is_empty();
        let href = self
            .href
            .filter(present)
            .or_else(|| nested.href.filter(present))
            .or_else(|| nested.external.filter(present));
        let new_tab = self
            .open_in_new_tab
            .or(nested.open_in_new_tab)
            .unwrap_or(false);
        (href, new_tab)
    }
}

/// A call-to-action button in its normalized shape.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(from = "WireButton")]
pub struct Button {
    pub key: Option<String>,
    pub label: Option<String>,
    pub href: Option<String>,
    pub open_in_new_tab: bool,
    pub variant: ButtonVariant,
}

#[derive(Deserialize)]
struct WireButton {
    #[serde(rename = "_key")]
    key: Option<String>,
    label: Option<String>,
    text: Option<String>,
    #[serde(default)]
    variant: ButtonVariant,
    #[serde(flatten)]
    target: WireTarget,
}

impl From<WireButton> for Button {
    fn from(wire: WireButton) -> Self {
        let (href, open_in_new_tab) = wire.target.resolve();
        Self {
            key: wire.key,
            label: wire.label.or(wire.text),
            href,
            open_in_new_tab,
            variant: wire.variant,
        }
    }
}

/// A plain navigation link (navbar entries, footer columns).
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(from = "WireNavLink")]
pub struct NavLink {
    pub key: Option<String>,
    pub name: Option<String>,
    pub description: Option<String>,
    pub href: Option<String>,
    pub open_in_new_tab: bool,
}

#[derive(Deserialize)]
struct WireNavLink {
    #[serde(rename = "_key")]
    key: Option<String>,
    name: Option<String>,
    description: Option<String>,
    #[serde(flatten)]
    target: WireTarget,
}

impl From<WireNavLink> for NavLink {
    fn from(wire: WireNavLink) -> Self {
        let (href, open_in_new_tab) = wire.target.resolve();
        Self {
            key: wire.key,
            name: wire.name,
            description: wire.description,
            href,
            open_in_new_tab,
        }
    }
}

// ---------------------------------------------------------------------------
// Block payloads
// ---------------------------------------------------------------------------

/// A single statistic shown by the CTA block (e.g. "24/7" / "Support").
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct Stat {
    #[serde(rename = "_key")]
    pub key: Option<String>,
    pub value: Option<String>,
    pub label: Option<String>,
}

/// One question/answer pair in an FAQ accordion.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FaqEntry {
    #[serde(rename = "_key")]
    pub key: Option<String>,
    pub title: Option<String>,
    pub rich_text: Option<RichText>,
}

/// "Still have questions?" link shown below an FAQ accordion.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(from = "WireFaqLink")]
pub struct FaqLink {
    pub title: Option<String>,
    pub description: Option<String>,
    pub href: Option<String>,
    pub open_in_new_tab: bool,
}

#[derive(Deserialize)]
struct WireFaqLink {
    title: Option<String>,
    description: Option<String>,
    #[serde(flatten)]
    target: WireTarget,
}

impl From<WireFaqLink> for FaqLink {
    fn from(wire: WireFaqLink) -> Self {
        let (href, open_in_new_tab) = wire.target.resolve();
        Self {
            title: wire.title,
            description: wire.description,
            href,
            open_in_new_tab,
        }
    }
}

/// A card linking to another page, with an optional image.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(from = "WireLinkCard")]
pub struct LinkCard {
    pub key: Option<String>,
    pub title: Option<String>,
    pub description: Option<String>,
    pub image: Option<ImageRef>,
    pub href: Option<String>,
    pub open_in_new_tab: bool,
}

#[derive(Deserialize)]
struct WireLinkCard {
    #[serde(rename = "_key")]
    key: Option<String>,
    title: Option<String>,
    description: Option<String>,
    image: Option<ImageRef>,
    #[serde(flatten)]
    target: WireTarget,
}

impl From<WireLinkCard> for LinkCard {
    fn from(wire: WireLinkCard) -> Self {
        let (href, open_in_new_tab) = wire.target.resolve();
        Self {
            key: wire.key,
            title: wire.title,
            description: wire.description,
            image: wire.image,
            href,
            open_in_new_tab,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HeroBlock {
    #[serde(rename = "_key")]
    pub key: Option<String>,
    pub badge: Option<String>,
    pub title: Option<String>,
    pub rich_text: Option<RichText>,
    pub image: Option<ImageRef>,
    #[serde(default, deserialize_with = "lenient_vec")]
    pub buttons: Vec<Button>,
}

/// Layout of a call-to-action block.
///
/// Absent or unrecognized values select [`CtaStyle::Simple`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum CtaStyle {
    #[default]
    Simple,
    Split,
    Gradient,
    Card,
}

impl CtaStyle {
    pub const ALL: [CtaStyle; 4] = [Self::Simple, Self::Split, Self::Gradient, Self::Card];

    /// Map an authored style name to a layout.
    pub fn from_tag(tag: &str) -> Self {
        match tag {
            "simple" => Self::Simple,
            "split" => Self::Split,
            "gradient" => Self::Gradient,
            "card" => Self::Card,
            other => {
                debug!(style = other, "unrecognized cta style, using default");
                Self::default()
            }
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Simple => "simple",
            Self::Split => "split",
            Self::Gradient => "gradient",
            Self::Card => "card",
        }
    }
}

impl<'de> Deserialize<'de> for CtaStyle {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let tag = Option::<String>::deserialize(deserializer)?;
        Ok(tag.as_deref().map(Self::from_tag).unwrap_or_default())
    }
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CtaBlock {
    #[serde(rename = "_key")]
    pub key: Option<String>,
    #[serde(default)]
    pub style: CtaStyle,
    pub eyebrow: Option<String>,
    pub title: Option<String>,
    pub subtitle: Option<String>,
    pub rich_text: Option<RichText>,
    pub image: Option<ImageRef>,
    pub background_image: Option<ImageRef>,
    #[serde(default, deserialize_with = "lenient_vec")]
    pub stats: Vec<Stat>,
    #[serde(default, deserialize_with = "lenient_vec")]
    pub buttons: Vec<Button>,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FaqAccordionBlock {
    #[serde(rename = "_key")]
    pub key: Option<String>,
    pub eyebrow: Option<String>,
    pub title: Option<String>,
    pub subtitle: Option<String>,
    #[serde(default, deserialize_with = "lenient_vec")]
    pub faqs: Vec<FaqEntry>,
    pub link: Option<FaqLink>,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ImageLinkCardsBlock {
    #[serde(rename = "_key")]
    pub key: Option<String>,
    pub eyebrow: Option<String>,
    pub title: Option<String>,
    pub rich_text: Option<RichText>,
    #[serde(default, deserialize_with = "lenient_vec")]
    pub buttons: Vec<Button>,
    #[serde(default, deserialize_with = "lenient_vec")]
    pub cards: Vec<LinkCard>,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct ProductCatalogBlock {
    #[serde(rename = "_key")]
    pub key: Option<String>,
    pub title: Option<String>,
    pub subtitle: Option<String>,
    pub description: Option<String>,
}

/// A block whose tag has no built-in payload type.
///
/// Kept undecoded so that a renderer registered for the tag can interpret it.
#[derive(Debug, Clone, PartialEq)]
pub struct RawBlock {
    pub type_tag: String,
    pub key: Option<String>,
    pub data: Value,
}

/// One page-builder block.
#[derive(Debug, Clone, PartialEq)]
pub enum Block {
    Hero(HeroBlock),
    Cta(CtaBlock),
    FaqAccordion(FaqAccordionBlock),
    ImageLinkCards(ImageLinkCardsBlock),
    ProductCatalog(ProductCatalogBlock),
    Other(RawBlock),
}

/// Failure to decode a single block at the content boundary.
#[derive(Debug, Error)]
pub enum BlockDecodeError {
    #[error("block has no '_type' tag")]
    MissingType,

    #[error("invalid '{type_tag}' payload: {source}")]
    Payload {
        type_tag: String,
        #[source]
        source: serde_json::Error,
    },
}

impl Block {
    /// Decode one block from its wire JSON.
    pub fn from_value(value: Value) -> Result<Self, BlockDecodeError> {
        let type_tag = value
            .get("_type")
            .and_then(|t| t.as_str())
            .filter(|t| !t.is_empty())
            .ok_or(BlockDecodeError::MissingType)?
            .to_string();

        fn decode<T: serde::de::DeserializeOwned>(
            type_tag: &str,
            value: Value,
        ) -> Result<T, BlockDecodeError> {
            serde_json::from_value(value).map_err(|source| BlockDecodeError::Payload {
                type_tag: type_tag.to_string(),
                source,
            })
        }

        let block = match type_tag.as_str() {
            tag::HERO => Block::Hero(decode(&type_tag, value)?),
            tag::CTA => Block::Cta(decode(&type_tag, value)?),
            tag::FAQ_ACCORDION => Block::FaqAccordion(decode(&type_tag, value)?),
            tag::IMAGE_LINK_CARDS => Block::ImageLinkCards(decode(&type_tag, value)?),
            tag::PRODUCT_CATALOG => Block::ProductCatalog(decode(&type_tag, value)?),
            _ => {
                let key = value
                    .get("_key")
                    .and_then(|k| k.as_str())
                    .map(str::to_string);
                Block::Other(RawBlock {
                    type_tag,
                    key,
                    data: value,
                })
            }
        };
        Ok(block)
    }

    /// The block's type discriminator.
    pub fn type_tag(&self) -> &str {
        match self {
            Block::Hero(_) => tag::HERO,
            Block::Cta(_) => tag::CTA,
            Block::FaqAccordion(_) => tag::FAQ_ACCORDION,
            Block::ImageLinkCards(_) => tag::IMAGE_LINK_CARDS,
            Block::ProductCatalog(_) => tag::PRODUCT_CATALOG,
            Block::Other(raw) => &raw.type_tag,
        }
    }

    /// The block's authoring key, if any.
    pub fn key(&self) -> Option<&str> {
        match self {
            Block::Hero(b) => b.key.as_deref(),
            Block::Cta(b) => b.key.as_deref(),
            Block::FaqAccordion(b) => b.key.as_deref(),
            Block::ImageLinkCards(b) => b.key.as_deref(),
            Block::ProductCatalog(b) => b.key.as_deref(),
            Block::Other(raw) => raw.key.as_deref(),
        }
    }
}

impl<'de> Deserialize<'de> for Block {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let value = Value::deserialize(deserializer)?;
        Block::from_value(value).map_err(serde::de::Error::custom)
    }
}

/// Decode a page-builder array, dropping (and logging) entries that fail.
fn decode_blocks<'de, D>(deserializer: D) -> Result<Vec<Block>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw: Vec<Value> = nullable_vec(deserializer)?;
    Ok(raw
        .into_iter()
        .enumerate()
        .filter_map(|(position, value)| match Block::from_value(value) {
            Ok(block) => Some(block),
            Err(e) => {
                warn!(position, error = %e, "dropping undecodable page-builder block");
                None
            }
        })
        .collect())
}

// ---------------------------------------------------------------------------
// Documents
// ---------------------------------------------------------------------------

/// A document slug, authored either as a plain string or as `{ current }`.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum Slug {
    Plain(String),
    Object { current: Option<String> },
}

impl Slug {
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Slug::Plain(s) => Some(s.as_str()),
            Slug::Object { current } => current.as_deref(),
        }
    }
}

/// Normalize a slug into a URL path starting with `/`.
pub fn normalize_path(slug: &str) -> String {
    let trimmed = slug.trim().trim_matches('/');
    if trimmed.is_empty() {
        "/".to_string()
    } else {
        format!("/{trimmed}")
    }
}

/// SEO and social-preview overrides shared by page documents.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SeoFields {
    pub seo_title: Option<String>,
    pub seo_description: Option<String>,
    pub seo_image: Option<ImageRef>,
    pub seo_no_index: Option<bool>,
    pub seo_hide_from_lists: Option<bool>,
    pub og_title: Option<String>,
    pub og_description: Option<String>,
}

/// A page-builder document (home page or regular page).
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct PageDocument {
    #[serde(rename = "_id")]
    pub id: Option<String>,
    #[serde(rename = "_type")]
    pub doc_type: Option<String>,
    pub title: Option<String>,
    pub description: Option<String>,
    pub slug: Option<Slug>,
    #[serde(default, rename = "pageBuilder", deserialize_with = "decode_blocks")]
    pub blocks: Vec<Block>,
    #[serde(flatten)]
    pub seo: SeoFields,
}

impl PageDocument {
    /// URL path of the document (`/` when no slug is authored).
    pub fn path(&self) -> String {
        normalize_path(self.slug.as_ref().and_then(Slug::as_str).unwrap_or("/"))
    }
}

/// A top-level navbar entry.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(tag = "_type")]
pub enum NavItem {
    #[serde(rename = "navbarLink")]
    Link(NavLink),
    #[serde(rename = "navbarColumn")]
    Column(NavColumn),
    #[serde(other)]
    Unsupported,
}

/// A dropdown column of links.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct NavColumn {
    #[serde(rename = "_key")]
    pub key: Option<String>,
    pub title: Option<String>,
    #[serde(default, deserialize_with = "lenient_vec")]
    pub links: Vec<NavLink>,
}

/// Site navigation document.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NavbarDocument {
    pub label: Option<String>,
    #[serde(default, deserialize_with = "lenient_vec")]
    pub columns: Vec<NavItem>,
    #[serde(default, deserialize_with = "lenient_vec")]
    pub buttons: Vec<Button>,
    pub logo: Option<ImageRef>,
    pub site_title: Option<String>,
}

/// Social profile URLs shown in the footer.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct SocialLinks {
    pub facebook: Option<String>,
    pub twitter: Option<String>,
    pub instagram: Option<String>,
    pub youtube: Option<String>,
    pub linkedin: Option<String>,
}

/// A titled column of footer links.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct FooterColumn {
    #[serde(rename = "_key")]
    pub key: Option<String>,
    pub title: Option<String>,
    #[serde(default, deserialize_with = "lenient_vec")]
    pub links: Vec<NavLink>,
}

/// Site footer document.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FooterDocument {
    pub label: Option<String>,
    pub subtitle: Option<String>,
    #[serde(default, deserialize_with = "lenient_vec")]
    pub columns: Vec<FooterColumn>,
    pub social_links: Option<SocialLinks>,
    pub logo: Option<ImageRef>,
    pub site_title: Option<String>,
}
