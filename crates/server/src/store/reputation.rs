use tracing::{debug, instrument};

use crate::models::reputation::Reputation;
use crate::store::Store;

impl Store {
    pub async fn reputation(&self) -> Reputation {
        self.state.lock().await.reputation
    }

    #[instrument(skip(self))]
    pub async fn submit_rating(&self, score: i64) -> Reputation {
        let mut state = self.state.lock().await;
        state.reputation = state.reputation.with_score(score);
        debug!(
            "reputation is now {} over {} ratings",
            state.reputation.avg, state.reputation.count
        );
        state.reputation
    }
}
