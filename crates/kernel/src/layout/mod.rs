//! Site chrome rendered around every page: navigation bar and footer.
//!
//! Both degrade to a placeholder skeleton when their document is absent.

mod footer;
mod navbar;

pub use footer::{FooterSkeleton, render_footer};
pub use navbar::{NavbarSkeleton, render_navbar};

use crate::content::model::ImageRef;
use crate::routes::helpers::{html_escape, safe_href};

/// Logo shown when a document carries none.
pub const DEFAULT_LOGO_URL: &str = "https://cdn.sanity.io/images/s6kuy1ts/production/68c438f68264717e93c7ba1e85f1d0c4b58b33c2-1200x621.svg";

/// Home link wrapping the site logo.
fn render_logo(logo: Option<&ImageRef>, alt: Option<&str>) -> String {
    let src = logo
        .and_then(|l| safe_href(l.url.as_deref()))
        .unwrap_or(DEFAULT_LOGO_URL);
    let alt = alt
        .or_else(|| logo.and_then(|l| l.alt.as_deref()))
        .filter(|a| !a.trim().is_empty())
        .unwrap_or("logo");
    format!(
        "<a class=\"logo\" href=\"/\"><img src=\"{}\" alt=\"{}\" width=\"120\" height=\"40\"></a>",
        html_escape(src),
        html_escape(alt)
    )
}
