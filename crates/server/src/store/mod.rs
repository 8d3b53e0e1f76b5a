use tokio::sync::Mutex;

use crate::config::{IdStrategy, SeedConfig};
use crate::models::reputation::Reputation;
use crate::models::resource::{Resource, ResourceId};

pub mod progress;
pub mod reputation;
pub mod resources;
pub mod seed;

/// Process-wide in-memory state. Every operation takes the single lock once
/// and finishes its read-modify-write before releasing it.
pub struct Store {
    state: Mutex<StoreState>,
    id_strategy: IdStrategy,
}

struct StoreState {
    resources: Vec<Resource>,
    reputation: Reputation,
    progress: i64,
    last_id: ResourceId,
}

impl Store {
    pub fn new(seed: &SeedConfig, id_strategy: IdStrategy) -> Self {
        let last_id = seed.resources.iter().map(|r| r.id).max().unwrap_or(0);
        Self {
            state: Mutex::new(StoreState {
                resources: seed.resources.clone(),
                reputation: seed.reputation,
                progress: seed.progress,
                last_id,
            }),
            id_strategy,
        }
    }

    pub fn id_strategy(&self) -> IdStrategy {
        self.id_strategy
    }
}

impl StoreState {
    fn next_id(&mut self, strategy: IdStrategy) -> ResourceId {
        let id = match strategy {
            IdStrategy::Counter => self.last_id + 1,
            IdStrategy::Timestamp => chrono::Utc::now().timestamp(),
        };
        self.last_id = self.last_id.max(id);
        id
    }
}
