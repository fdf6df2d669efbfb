//! HTTP handlers for the counter page and the documentation pages.

pub mod page;
pub mod reference;
pub use page::*;
pub use reference::*;
