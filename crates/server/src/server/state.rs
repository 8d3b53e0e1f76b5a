use tracing::info;

use crate::config::AppConfig;
use crate::store::Store;

pub struct AppState {
    pub config: AppConfig,
    pub store: Store,
}

impl AppState {
    pub fn init(config: &AppConfig) -> Self {
        let store = Store::new(&config.seed, config.ids.strategy);
        info!(
            "seeded store with {} resources, ids assigned by {}",
            config.seed.resources.len(),
            store.id_strategy()
        );
        Self {
            config: config.clone(),
            store,
        }
    }
}
