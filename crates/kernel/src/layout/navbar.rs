use crate::content::block_render::{ButtonSize, render_buttons};
use crate::content::model::{NavItem, NavLink, NavbarDocument};
use crate::routes::helpers::{html_escape, link_target_attrs, non_blank, safe_href};

use super::render_logo;

/// Placeholder rendered while navigation data is unavailable.
pub struct NavbarSkeleton;

impl NavbarSkeleton {
    pub fn html() -> &'static str {
        "<header class=\"navbar navbar--skeleton\" aria-busy=\"true\"><nav class=\"navbar__inner\">\
         <div class=\"skeleton skeleton--logo\"></div>\
         <div class=\"skeleton skeleton--links\"></div>\
         <div class=\"skeleton skeleton--button\"></div></nav></header>"
    }
}

/// Render the navigation bar, or its skeleton when there is no document.
pub fn render_navbar(navbar: Option<&NavbarDocument>) -> String {
    let Some(navbar) = navbar else {
        return NavbarSkeleton::html().to_string();
    };

    let mut html = String::from("<header class=\"navbar\"><nav class=\"navbar__inner\">");
    html.push_str(&render_logo(navbar.logo.as_ref(), navbar.site_title.as_deref()));

    let items: String = navbar.columns.iter().filter_map(render_item).collect();
    if !items.is_empty() {
        html.push_str(&format!("<div class=\"navbar__links\">{items}</div>"));
    }

    html.push_str(&render_buttons(&navbar.buttons, ButtonSize::Default));
    html.push_str("</nav></header>");
    html
}

fn render_item(item: &NavItem) -> Option<String> {
    match item {
        NavItem::Link(link) => render_link(link, "navbar__link"),
        NavItem::Column(column) => {
            let links: String = column
                .links
                .iter()
                .filter_map(|l| render_link(l, "navbar__dropdown-link"))
                .collect();
            if links.is_empty() {
                return None;
            }
            Some(format!(
                "<div class=\"navbar__column\"><button class=\"navbar__column-title\" type=\"button\">{}</button>\
                 <div class=\"navbar__dropdown\">{links}</div></div>",
                html_escape(non_blank(column.title.as_deref()).unwrap_or_default())
            ))
        }
        NavItem::Unsupported => None,
    }
}

/// A link entry; dropped when its target is missing or unsafe.
fn render_link(link: &NavLink, class: &str) -> Option<String> {
    let href = safe_href(link.href.as_deref())?;
    let description = non_blank(link.description.as_deref())
        .map(|d| format!("<span class=\"navbar__link-description\">{}</span>", html_escape(d)))
        .unwrap_or_default();
    Some(format!(
        "<a class=\"{class}\" href=\"{}\"{}>{}{description}</a>",
        html_escape(href),
        link_target_attrs(link.open_in_new_tab),
        html_escape(non_blank(link.name.as_deref()).unwrap_or(href))
    ))
}
