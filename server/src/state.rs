use std::sync::Arc;

use super::{config::Config, store::Store};

pub struct AppState {
    pub config: Config,
    pub store: Store,
}

impl AppState {
    pub fn new() -> Arc<Self> {
        Arc::new(Self {
            config: Config::load(),
            store: Store::seeded(),
        })
    }

    /// State around an explicit store, for tests that want isolated or
    /// hand-built data.
    pub fn with_store(store: Store) -> Arc<Self> {
        Arc::new(Self {
            config: Config::load(),
            store,
        })
    }
}
