use crate::content::model::{FooterColumn, FooterDocument, SocialLinks};
use crate::routes::helpers::{html_escape, link_target_attrs, non_blank, safe_href};

use super::render_logo;

/// Placeholder rendered while footer data is unavailable.
pub struct FooterSkeleton;

impl FooterSkeleton {
    pub fn html() -> &'static str {
        "<footer class=\"footer footer--skeleton\" aria-busy=\"true\">\
         <div class=\"skeleton skeleton--logo\"></div>\
         <div class=\"skeleton skeleton--text\"></div>\
         <div class=\"skeleton skeleton--columns\"></div></footer>"
    }
}

/// Render the footer, or its skeleton when there is no document.
pub fn render_footer(footer: Option<&FooterDocument>, year: i32) -> String {
    let Some(footer) = footer else {
        return FooterSkeleton::html().to_string();
    };

    let mut html = String::from("<footer class=\"footer\"><div class=\"footer__top\"><div class=\"footer__brand\">");
    html.push_str(&render_logo(footer.logo.as_ref(), footer.site_title.as_deref()));
    if let Some(subtitle) = non_blank(footer.subtitle.as_deref()) {
        html.push_str(&format!(
            "<p class=\"footer__subtitle\">{}</p>",
            html_escape(subtitle)
        ));
    }
    if let Some(social) = footer.social_links.as_ref() {
        html.push_str(&render_social(social));
    }
    html.push_str("</div>");

    let columns: String = footer.columns.iter().filter_map(render_column).collect();
    if !columns.is_empty() {
        html.push_str(&format!("<div class=\"footer__columns\">{columns}</div>"));
    }
    html.push_str("</div>");

    let site_title = non_blank(footer.site_title.as_deref()).unwrap_or_default();
    html.push_str(&format!(
        "<div class=\"footer__bottom\"><p>© {year} {}. All rights reserved.</p>\
         <ul class=\"footer__legal\"><li><a href=\"/terms\">Terms and Conditions</a></li>\
         <li><a href=\"/privacy\">Privacy Policy</a></li></ul></div></footer>",
        html_escape(site_title)
    ));
    html
}

/// Social profiles in a fixed order; absent or unsafe ones are omitted.
fn render_social(social: &SocialLinks) -> String {
    let profiles = [
        (&social.instagram, "instagram", "Follow us on Instagram"),
        (&social.facebook, "facebook", "Follow us on Facebook"),
        (&social.twitter, "twitter", "Follow us on Twitter"),
        (&social.linkedin, "linkedin", "Follow us on LinkedIn"),
        (&social.youtube, "youtube", "Subscribe to our YouTube channel"),
    ];
    let items: String = profiles
        .into_iter()
        .filter_map(|(url, network, label)| {
            let href = safe_href(url.as_deref())?;
            Some(format!(
                "<li><a class=\"social social--{network}\" href=\"{}\"{} aria-label=\"{label}\">{network}</a></li>",
                html_escape(href),
                link_target_attrs(true)
            ))
        })
        .collect();
    if items.is_empty() {
        return String::new();
    }
    format!("<ul class=\"footer__social\">{items}</ul>")
}

fn render_column(column: &FooterColumn) -> Option<String> {
    let links: String = column
        .links
        .iter()
        .filter_map(|link| {
            let href = safe_href(link.href.as_deref())?;
            Some(format!(
                "<li><a href=\"{}\"{}>{}</a></li>",
                html_escape(href),
                link_target_attrs(link.open_in_new_tab),
                html_escape(non_blank(link.name.as_deref()).unwrap_or(href))
            ))
        })
        .collect();
    if links.is_empty() {
        return None;
    }
    let title = non_blank(column.title.as_deref())
        .map(|t| format!("<h3 class=\"footer__column-title\">{}</h3>", html_escape(t)))
        .unwrap_or_default();
    Some(format!(
        "<div class=\"footer__column\">{title}<ul>{links}</ul></div>"
    ))
}
