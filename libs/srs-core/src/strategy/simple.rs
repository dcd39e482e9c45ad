//! Trivial always-due strategy, useful for tests and bootstrapping.

use super::ReviewStrategy;
use crate::types::{DifficultyRating, ReviewItem, ReviewOutcome, Timestamp, DIFFICULTY_EASIEST};

/// A strategy with no memory model: every card is due right now and every
/// answer resets the difficulty to easiest.
#[derive(Debug, Clone, Copy, Default)]
pub struct SimpleStrategy;

impl ReviewStrategy for SimpleStrategy {
    fn name(&self) -> &'static str {
        "simple"
    }

    fn next_review(&self, _item: &ReviewItem, now: Timestamp) -> Timestamp {
        now
    }

    fn adjust_difficulty(&self, _item: &ReviewItem, _outcome: ReviewOutcome) -> DifficultyRating {
        DIFFICULTY_EASIEST
    }
}
