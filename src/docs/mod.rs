//! Server-side pieces of the documentation site.

pub mod color_scheme;
pub mod footer;
pub mod nav;
pub mod reference;
pub mod theme;

pub use color_scheme::{ColorSchemeListener, MediaQueryEvent, PreferenceSignal, Subscription};
pub use footer::{Document, Element, FooterHost, FooterVisibility};
pub use nav::{Meta, NavEntry, NAVIGATION};
pub use reference::{render_reference_page, ApiReferenceConfig, OPENAPI_PATH};
pub use theme::ThemeConfig;
