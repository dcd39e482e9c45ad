//! SuperMemo-2 scheduling.
//!
//! Intervals grow multiplicatively with each correct streak via the SM-2
//! easiness factor, and shrink for harder cards. The 0-100 difficulty
//! rating is a linear proxy for the easiness factor:
//! `EF = -0.012 * rating + 2.5`, so rating 0 maps to EF 2.5 and rating 100
//! to EF 1.3.

use super::ReviewStrategy;
use crate::types::{
    DifficultyRating, ReviewItem, ReviewOutcome, Timestamp, DIFFICULTY_EASIEST,
    DIFFICULTY_HARDEST, SECONDS_PER_DAY,
};

/// Slope of the difficulty-to-easiness line.
const EASE_SLOPE: f64 = -0.012;

/// Intercept of the difficulty-to-easiness line.
const EASE_INTERCEPT: f64 = 2.5;

/// Days until the next review after the first correct answer, anchored to
/// the review date of that answer.
const FIRST_CORRECT_INTERVAL_DAYS: u64 = 6;

/// The SuperMemo-2 review strategy.
#[derive(Debug, Clone, Copy, Default)]
pub struct SuperMemo2;

impl SuperMemo2 {
    /// Easiness factor for a difficulty rating.
    pub fn difficulty_to_ease(rating: DifficultyRating) -> f64 {
        EASE_SLOPE * f64::from(rating) + EASE_INTERCEPT
    }

    /// Difficulty rating for an easiness factor. Unclamped; callers clamp
    /// to the 0-100 domain.
    pub fn ease_to_difficulty(ease: f64) -> f64 {
        (ease - EASE_INTERCEPT) / EASE_SLOPE
    }
}

impl ReviewStrategy for SuperMemo2 {
    fn name(&self) -> &'static str {
        "sm2"
    }

    fn next_review(&self, item: &ReviewItem, now: Timestamp) -> Timestamp {
        match *item {
            // Cards without a correct streak are always due.
            ReviewItem::NeverReviewed { .. } | ReviewItem::PreviouslyIncorrect { .. } => now,
            ReviewItem::PreviouslyFirstCorrect { review_date, .. } => {
                review_date + FIRST_CORRECT_INTERVAL_DAYS * SECONDS_PER_DAY
            }
            ReviewItem::PreviouslyCorrect {
                difficulty,
                review_date,
                previous_correct_review,
            } => {
                let ease = Self::difficulty_to_ease(difficulty);
                let days_since_previous =
                    review_date.saturating_sub(previous_correct_review) / SECONDS_PER_DAY;
                // Truncates toward zero; a same-day streak gives a negative
                // interval, which just leaves the card already due.
                let interval_days = ((days_since_previous as f64 - 1.0) * ease) as i64;
                review_date.saturating_add_signed(interval_days * SECONDS_PER_DAY as i64)
            }
        }
    }

    fn adjust_difficulty(&self, item: &ReviewItem, outcome: ReviewOutcome) -> DifficultyRating {
        let quality = f64::from(outcome.quality());
        let ease = Self::difficulty_to_ease(item.difficulty());
        let adjusted = ease + (0.1 - (3.0 - quality) * (0.08 + (3.0 - quality) * 0.02));
        let rating = Self::ease_to_difficulty(adjusted);
        rating.clamp(
            f64::from(DIFFICULTY_EASIEST),
            f64::from(DIFFICULTY_HARDEST),
        ) as DifficultyRating
    }
}
