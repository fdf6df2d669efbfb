//! Documentation site navigation, in display order.
//! Serialises to the `_meta` shape: plain entries map to their title, page entries to an object.

use serde::ser::{SerializeMap, Serializer};
use serde::Serialize;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum PageLayout {
    Default,
    Raw,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum NavKind {
    /// Sidebar document.
    Doc,
    /// Top-level navbar page, optionally linking elsewhere.
    Page {
        href: Option<&'static str>,
        new_window: bool,
        layout: PageLayout,
    },
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct NavEntry {
    pub key: &'static str,
    pub title: &'static str,
    pub kind: NavKind,
}

impl NavEntry {
    const fn doc(key: &'static str, title: &'static str) -> Self {
        NavEntry { key, title, kind: NavKind::Doc }
    }

    const fn page(
        key: &'static str,
        title: &'static str,
        href: Option<&'static str>,
        new_window: bool,
        layout: PageLayout,
    ) -> Self {
        NavEntry {
            key,
            title,
            kind: NavKind::Page { href, new_window, layout },
        }
    }

    /// Link target for the navbar. Entries without an explicit href live at `/<key>`,
    /// except the index.
    pub fn href(&self) -> String {
        match &self.kind {
            NavKind::Page { href: Some(h), .. } => (*h).to_string(),
            _ if self.key == "index" => "/".to_string(),
            _ => format!("/{}", self.key),
        }
    }

    pub fn is_page(&self) -> bool {
        matches!(self.kind, NavKind::Page { .. })
    }

    pub fn opens_new_window(&self) -> bool {
        matches!(self.kind, NavKind::Page { new_window: true, .. })
    }
}

pub const NAVIGATION: &[NavEntry] = &[
    NavEntry::doc("index", "Home"),
    NavEntry::doc("quick-start", "Quick Start"),
    NavEntry::doc("frameworks", "Frameworks"),
    NavEntry::doc("apps", "Apps"),
    NavEntry::doc("deployments", "Deployments"),
    NavEntry::doc("databases", "Databases"),
    NavEntry::doc("builds", "Builds"),
    NavEntry::doc("storage", "Storage"),
    NavEntry::page("docs", "Docs", Some("/"), false, PageLayout::Default),
    NavEntry::page("reference", "API Reference", None, false, PageLayout::Raw),
    NavEntry::page("console", "Console ↗", Some("https://prezel.app"), true, PageLayout::Default),
];

/// Wrapper that serialises a slice of entries as an ordered `_meta` object.
pub struct Meta<'a>(pub &'a [NavEntry]);

impl Serialize for Meta<'_> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.0.len()))?;
        for entry in self.0 {
            match &entry.kind {
                NavKind::Doc => map.serialize_entry(entry.key, entry.title)?,
                NavKind::Page { href, new_window, layout } => {
                    let mut page = serde_json::Map::new();
                    page.insert("title".into(), entry.title.into());
                    page.insert("type".into(), "page".into());
                    if let Some(h) = href {
                        page.insert("href".into(), (*h).into());
                    }
                    if *new_window {
                        page.insert("newWindow".into(), true.into());
                    }
                    if *layout != PageLayout::Default {
                        page.insert("theme".into(), serde_json::json!({ "layout": layout }));
                    }
                    map.serialize_entry(entry.key, &page)?;
                }
            }
        }
        map.end()
    }
}
