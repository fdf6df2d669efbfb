//! Shared application state for the starter routes.

use crate::cache::PageCache;
use crate::service::ClapCounter;
use sqlx::AnyPool;

#[derive(Clone)]
pub struct AppState {
    pub pool: AnyPool,
    pub counter: ClapCounter,
    /// Rendered pages; `/` is invalidated after every clap.
    pub cache: PageCache,
}

impl AppState {
    pub fn new(pool: AnyPool) -> Self {
        let counter = ClapCounter::from_pool(pool.clone());
        Self::with_counter(pool, counter)
    }

    /// State whose counter uses a custom `ClapStore`; `pool` still backs readiness checks.
    pub fn with_counter(pool: AnyPool, counter: ClapCounter) -> Self {
        AppState {
            pool,
            counter,
            cache: PageCache::new(),
        }
    }
}
