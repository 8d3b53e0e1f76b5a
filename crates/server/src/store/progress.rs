use tracing::{debug, instrument};

use crate::models::progress::apply_increment;
use crate::store::Store;

impl Store {
    pub async fn progress(&self) -> i64 {
        self.state.lock().await.progress
    }

    #[instrument(skip(self))]
    pub async fn update_progress(&self, increment: i64) -> i64 {
        let mut state = self.state.lock().await;
        state.progress = apply_increment(state.progress, increment);
        debug!("progress is now {}", state.progress);
        state.progress
    }
}
