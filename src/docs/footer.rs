//! Footer visibility on pages that render their own footer.
//!
//! While mounted, every `<footer>` except the one with id `api` is hidden. Unmounting
//! re-queries the document and shows those footers again.

use std::fmt::Write as _;

pub const API_FOOTER_ID: &str = "api";

/// Escape a value for use inside a double-quoted HTML attribute.
pub fn escape_attr(value: &str) -> String {
    let mut out = String::with_capacity(value.len());
    for c in value.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            _ => out.push(c),
        }
    }
    out
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Display {
    /// No inline style; the stylesheet decides.
    Unset,
    Block,
    None,
}

impl Display {
    fn css(self) -> Option<&'static str> {
        match self {
            Display::Unset => None,
            Display::Block => Some("block"),
            Display::None => Some("none"),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Element {
    pub tag: &'static str,
    pub id: Option<String>,
    pub class: Option<String>,
    pub display: Display,
    /// Pre-rendered inner HTML.
    pub inner_html: String,
}

impl Element {
    pub fn new(tag: &'static str, inner_html: impl Into<String>) -> Self {
        Element {
            tag,
            id: None,
            class: None,
            display: Display::Unset,
            inner_html: inner_html.into(),
        }
    }

    pub fn with_id(mut self, id: impl Into<String>) -> Self {
        self.id = Some(id.into());
        self
    }

    pub fn with_class(mut self, class: impl Into<String>) -> Self {
        self.class = Some(class.into());
        self
    }

    fn write_html(&self, out: &mut String) {
        let _ = write!(out, "<{}", self.tag);
        if let Some(id) = &self.id {
            let _ = write!(out, " id=\"{}\"", escape_attr(id));
        }
        if let Some(class) = &self.class {
            let _ = write!(out, " class=\"{}\"", escape_attr(class));
        }
        if let Some(display) = self.display.css() {
            let _ = write!(out, " style=\"display: {}\"", display);
        }
        let _ = write!(out, ">{}</{}>", self.inner_html, self.tag);
    }
}

/// Flat page body, rendered in order.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Document {
    pub elements: Vec<Element>,
}

impl Document {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, element: Element) {
        self.elements.push(element);
    }

    pub fn to_html(&self) -> String {
        let mut out = String::new();
        for el in &self.elements {
            el.write_html(&mut out);
        }
        out
    }
}

/// Anything that can enumerate its footers for mutation.
pub trait FooterHost {
    fn for_each_footer(&mut self, f: &mut dyn FnMut(&mut Element));
}

impl FooterHost for Document {
    fn for_each_footer(&mut self, f: &mut dyn FnMut(&mut Element)) {
        for el in self.elements.iter_mut().filter(|el| el.tag == "footer") {
            f(el);
        }
    }
}

fn is_api_footer(el: &Element) -> bool {
    el.id.as_deref() == Some(API_FOOTER_ID)
}

pub struct FooterVisibility;

impl FooterVisibility {
    /// Hide every footer that is not the api footer.
    pub fn mount(host: &mut impl FooterHost) {
        host.for_each_footer(&mut |el| {
            if !is_api_footer(el) {
                el.display = Display::None;
            }
        });
    }

    /// Show every footer that is not the api footer.
    pub fn unmount(host: &mut impl FooterHost) {
        host.for_each_footer(&mut |el| {
            if !is_api_footer(el) {
                el.display = Display::Block;
            }
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn page() -> Document {
        let mut doc = Document::new();
        doc.push(Element::new("main", "content"));
        doc.push(Element::new("footer", "site").with_id(""));
        doc.push(Element::new("footer", "api").with_id(API_FOOTER_ID));
        doc
    }

    fn footer_displays(doc: &Document) -> Vec<Display> {
        doc.elements
            .iter()
            .filter(|e| e.tag == "footer")
            .map(|e| e.display)
            .collect()
    }

    #[test]
    fn mount_hides_only_non_api_footer() {
        let mut doc = page();
        FooterVisibility::mount(&mut doc);
        assert_eq!(footer_displays(&doc), [Display::None, Display::Unset]);
        assert_eq!(doc.elements[0].display, Display::Unset);
    }

    #[test]
    fn unmount_restores_visibility() {
        let mut doc = page();
        FooterVisibility::mount(&mut doc);
        FooterVisibility::unmount(&mut doc);
        assert!(footer_displays(&doc)
            .iter()
            .all(|d| *d != Display::None));
    }

    #[test]
    fn footer_without_id_is_hidden() {
        let mut doc = Document::new();
        doc.push(Element::new("footer", ""));
        FooterVisibility::mount(&mut doc);
        assert_eq!(doc.elements[0].display, Display::None);
    }

    #[test]
    fn no_footers_is_a_no_op() {
        let mut doc = Document::new();
        doc.push(Element::new("div", "x"));
        let before = doc.clone();
        FooterVisibility::mount(&mut doc);
        assert_eq!(doc, before);
    }

    #[test]
    fn attributes_are_escaped() {
        let mut doc = Document::new();
        doc.push(Element::new("footer", "x").with_id(r#"a" onclick="x"#).with_class("b&c"));
        let html = doc.to_html();
        assert!(html.starts_with(r#"<footer id="a&quot; onclick=&quot;x" class="b&amp;c">"#));
    }

    #[test]
    fn renders_inline_display() {
        let mut doc = page();
        FooterVisibility::mount(&mut doc);
        let html = doc.to_html();
        assert!(html.contains(r#"<footer id="" style="display: none">site</footer>"#));
        assert!(html.contains(r#"<footer id="api">api</footer>"#));
    }
}
