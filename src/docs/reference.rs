//! API reference page: navbar, embedded viewer configuration, footers.

use crate::docs::footer::{escape_attr, Document, Element, FooterVisibility, API_FOOTER_ID};
use crate::docs::nav::{NavEntry, NAVIGATION};
use crate::docs::theme::ThemeConfig;
use serde::Serialize;

/// Path the viewer loads the OpenAPI document from.
pub const OPENAPI_PATH: &str = "/openapi.json";

/// Standalone API reference viewer. It mounts on `#api-reference`, fetches `data-url`
/// and applies `data-configuration`.
pub const VIEWER_SCRIPT: &str = "https://cdn.jsdelivr.net/npm/@scalar/api-reference";

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct SpecSource {
    pub url: String,
}

/// Configuration handed to the embedded API reference viewer.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ApiReferenceConfig {
    pub spec: SpecSource,
    pub hide_dark_mode_toggle: bool,
    pub dark_mode: bool,
}

impl ApiReferenceConfig {
    pub fn new(dark_mode: bool) -> Self {
        ApiReferenceConfig {
            spec: SpecSource {
                url: OPENAPI_PATH.to_string(),
            },
            hide_dark_mode_toggle: true,
            dark_mode,
        }
    }
}

fn nav_link(entry: &NavEntry) -> String {
    let target = if entry.opens_new_window() {
        r#" target="_blank" rel="noopener noreferrer""#
    } else {
        ""
    };
    format!(r#"<a href="{}"{}>{}</a>"#, entry.href(), target, entry.title)
}

fn navbar(theme: &ThemeConfig) -> String {
    let links: String = NAVIGATION
        .iter()
        .filter(|e| e.is_page())
        .map(nav_link)
        .collect();
    format!(
        r#"<a class="logo" href="/"><img src="{icon}" height="28" width="28"><span>{logo}</span></a>{links}<a href="{project}">GitHub</a>"#,
        icon = theme.icon,
        logo = theme.logo_text,
        links = links,
        project = theme.project_link,
    )
}

/// Body of the reference page. The site footer is hidden while the page shows its own.
pub fn reference_document(theme: &ThemeConfig, config: &ApiReferenceConfig) -> Document {
    let config_json = serde_json::to_string(config).unwrap_or_else(|_| "{}".into());

    let mut doc = Document::new();
    doc.push(Element::new("nav", navbar(theme)));
    doc.push(
        Element::new(
            "div",
            format!(
                r#"<script id="api-reference" data-url="{url}" data-configuration="{config}"></script><script src="{viewer}"></script>"#,
                url = escape_attr(&config.spec.url),
                config = escape_attr(&config_json),
                viewer = VIEWER_SCRIPT,
            ),
        )
        .with_class("api-reference"),
    );
    doc.push(Element::new("footer", theme.footer_content).with_class("site-footer"));
    doc.push(Element::new("footer", theme.footer_content).with_id(API_FOOTER_ID));
    FooterVisibility::mount(&mut doc);
    doc
}

pub fn render_reference_page(theme: &ThemeConfig, config: &ApiReferenceConfig) -> String {
    let body = reference_document(theme, config).to_html();
    format!(
        r#"<!DOCTYPE html><html lang="en"{class}><head><meta charset="utf-8"><link rel="icon" href="{icon}"><title>API Reference</title></head><body>{body}</body></html>"#,
        class = if config.dark_mode { r#" class="dark""# } else { "" },
        icon = theme.icon,
        body = body,
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::docs::footer::Display;

    #[test]
    fn config_json_shape() {
        let json = serde_json::to_value(ApiReferenceConfig::new(true)).unwrap();
        assert_eq!(
            json,
            serde_json::json!({
                "spec": {"url": "/openapi.json"},
                "hideDarkModeToggle": true,
                "darkMode": true
            })
        );
    }

    #[test]
    fn site_footer_hidden_api_footer_shown() {
        let doc = reference_document(&ThemeConfig::default(), &ApiReferenceConfig::new(false));
        let footers: Vec<_> = doc.elements.iter().filter(|e| e.tag == "footer").collect();
        assert_eq!(footers.len(), 2);
        assert_eq!(footers[0].display, Display::None);
        assert_eq!(footers[1].id.as_deref(), Some("api"));
        assert_eq!(footers[1].display, Display::Unset);
    }

    #[test]
    fn page_contains_navbar_pages_only() {
        let html = render_reference_page(&ThemeConfig::default(), &ApiReferenceConfig::new(true));
        assert!(html.contains(r#"<html lang="en" class="dark">"#));
        assert!(html.contains(r#"<a href="/reference">API Reference</a>"#));
        assert!(html.contains(r#"target="_blank""#));
        assert!(!html.contains("Quick Start"));
        assert!(html.contains("&quot;darkMode&quot;:true"));
        assert!(html.contains(r#"<a href="https://github.com/ricopinazo/prezel">GitHub</a>"#));
    }

    #[test]
    fn page_loads_viewer_with_openapi_url() {
        let html = render_reference_page(&ThemeConfig::default(), &ApiReferenceConfig::new(false));
        assert!(html.contains(&format!(r#"<script src="{}"></script>"#, VIEWER_SCRIPT)));
        assert!(html.contains(r#"data-url="/openapi.json""#));
        assert!(html.contains("data-configuration=\"{&quot;spec&quot;:{&quot;url&quot;:&quot;/openapi.json&quot;}"));
    }
}
