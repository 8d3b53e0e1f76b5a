use serde::{Deserialize, Serialize};

pub const MAX_PROGRESS: i64 = 100;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProgressResponse {
    pub progress: i64,
}

#[derive(Clone, Debug, Deserialize)]
pub struct UpdateProgressRequest {
    pub increment: i64,
}

/// Only the upper bound is enforced; a negative increment may take
/// progress below zero.
pub fn apply_increment(current: i64, increment: i64) -> i64 {
    current.saturating_add(increment).min(MAX_PROGRESS)
}
