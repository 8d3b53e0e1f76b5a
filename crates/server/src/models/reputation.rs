use serde::{Deserialize, Serialize};

#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Reputation {
    pub avg: f64,
    pub count: u64,
}

#[derive(Clone, Debug, Deserialize)]
pub struct RateRequest {
    pub score: i64,
}

impl Reputation {
    /// Folds one score into the running mean. The previous, already rounded
    /// average is the input, so rounding compounds across submissions.
    pub fn with_score(self, score: i64) -> Self {
        let count = self.count + 1;
        let total = self.avg * self.count as f64 + score as f64;
        Self {
            avg: round_to_cents(total / count as f64),
            count,
        }
    }
}

pub fn round_to_cents(value: f64) -> f64 {
    (value * 100.0).round_ties_even() / 100.0
}
