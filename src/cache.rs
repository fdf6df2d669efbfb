//! Rendered-page cache keyed by route path. Writers invalidate a path after changing
//! the data it shows so the next request renders fresh.
//!
//! Every invalidation bumps a generation counter. A render that started before an
//! invalidation carries the older generation and is refused by `put_if_current`.

use std::collections::HashMap;
use std::sync::{Arc, RwLock};

#[derive(Default)]
struct Pages {
    generation: u64,
    html: HashMap<String, String>,
}

#[derive(Clone, Default)]
pub struct PageCache {
    pages: Arc<RwLock<Pages>>,
}

impl PageCache {
    pub fn new() -> Self {
        Self::default()
    }

    /// Cached HTML for `path`. A poisoned lock reads as a miss.
    pub fn get(&self, path: &str) -> Option<String> {
        self.pages.read().ok()?.html.get(path).cloned()
    }

    /// Generation to snapshot before reading the data a page is rendered from.
    pub fn generation(&self) -> u64 {
        match self.pages.read() {
            Ok(pages) => pages.generation,
            Err(poisoned) => poisoned.into_inner().generation,
        }
    }

    /// Store `html` only if no invalidation happened since `generation` was taken.
    /// Returns whether the page was stored.
    pub fn put_if_current(&self, path: &str, generation: u64, html: String) -> bool {
        let Ok(mut pages) = self.pages.write() else {
            return false;
        };
        if pages.generation != generation {
            tracing::debug!(path, "discarding render older than last invalidation");
            return false;
        }
        pages.html.insert(path.to_string(), html);
        true
    }

    pub fn invalidate(&self, path: &str) {
        let mut pages = match self.pages.write() {
            Ok(pages) => pages,
            Err(poisoned) => {
                // drop everything rather than serve stale pages
                let mut pages = poisoned.into_inner();
                pages.html.clear();
                pages
            }
        };
        pages.generation += 1;
        pages.html.remove(path);
        tracing::debug!(path, generation = pages.generation, "page cache invalidated");
    }
}
