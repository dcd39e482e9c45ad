//! Core types for the review scheduler.

use serde::{Deserialize, Serialize};

/// Seconds since an arbitrary epoch shared by the caller and the scheduler.
pub type Timestamp = u64;

/// Integer difficulty on a 0-100 scale; 0 is easiest, 100 is hardest.
pub type DifficultyRating = u8;

/// The easiest possible difficulty rating.
pub const DIFFICULTY_EASIEST: DifficultyRating = 0;

/// The hardest possible difficulty rating.
pub const DIFFICULTY_HARDEST: DifficultyRating = 100;

/// Seconds in one scheduling day.
pub const SECONDS_PER_DAY: u64 = 24 * 60 * 60;

/// Outcome of showing a card to the learner.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ReviewOutcome {
    Incorrect,
    Hesitant,
    Perfect,
}

impl ReviewOutcome {
    /// SM-2 response quality on the 0-3 grade scale.
    ///
    /// Grade 0 ("never reviewed") is not an outcome a learner can report,
    /// so the lowest reachable grade is 1.
    pub fn quality(self) -> u8 {
        match self {
            Self::Incorrect => 1,
            Self::Hesitant => 2,
            Self::Perfect => 3,
        }
    }

    /// Create from a 0-3 grade value.
    pub fn from_quality(value: u8) -> Option<Self> {
        match value {
            1 => Some(Self::Incorrect),
            2 => Some(Self::Hesitant),
            3 => Some(Self::Perfect),
            _ => None,
        }
    }

    /// Whether the outcome counts as a correct answer.
    pub fn is_correct(self) -> bool {
        !matches!(self, Self::Incorrect)
    }
}

/// A card's review history at a point in time.
///
/// Values are replaced, never mutated: answering a card produces a new
/// `ReviewItem` via [`ReviewItem::after_review`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "history", rename_all = "snake_case")]
pub enum ReviewItem {
    /// Never shown to the learner.
    NeverReviewed { difficulty: DifficultyRating },
    /// The most recent review was answered incorrectly.
    PreviouslyIncorrect {
        difficulty: DifficultyRating,
        review_date: Timestamp,
    },
    /// Exactly one correct review since the last miss (or ever).
    PreviouslyFirstCorrect {
        difficulty: DifficultyRating,
        review_date: Timestamp,
    },
    /// Two or more correct reviews in a row. `previous_correct_review`
    /// is the review before `review_date`, so it is never later than it.
    PreviouslyCorrect {
        difficulty: DifficultyRating,
        review_date: Timestamp,
        previous_correct_review: Timestamp,
    },
}

impl ReviewItem {
    /// The difficulty rating, regardless of variant.
    pub fn difficulty(&self) -> DifficultyRating {
        match *self {
            Self::NeverReviewed { difficulty }
            | Self::PreviouslyIncorrect { difficulty, .. }
            | Self::PreviouslyFirstCorrect { difficulty, .. }
            | Self::PreviouslyCorrect { difficulty, .. } => difficulty,
        }
    }

    /// Whether the card has never been answered.
    pub fn is_new(&self) -> bool {
        matches!(self, Self::NeverReviewed { .. })
    }

    /// The history state after the learner answers at `now`.
    ///
    /// `difficulty` must already be adjusted for the outcome (the strategy
    /// computes it from the pre-transition item). An incorrect answer
    /// discards the correct streak; a correct answer after a miss restarts
    /// the streak at [`ReviewItem::PreviouslyFirstCorrect`] rather than
    /// jumping straight to full spacing.
    pub fn after_review(
        &self,
        outcome: ReviewOutcome,
        difficulty: DifficultyRating,
        now: Timestamp,
    ) -> ReviewItem {
        if !outcome.is_correct() {
            return Self::PreviouslyIncorrect {
                difficulty,
                review_date: now,
            };
        }
        match *self {
            Self::NeverReviewed { .. } | Self::PreviouslyIncorrect { .. } => {
                Self::PreviouslyFirstCorrect {
                    difficulty,
                    review_date: now,
                }
            }
            Self::PreviouslyFirstCorrect { review_date, .. }
            | Self::PreviouslyCorrect { review_date, .. } => Self::PreviouslyCorrect {
                difficulty,
                review_date: now,
                previous_correct_review: review_date,
            },
        }
    }
}

/// Whether a card has been shown this session, and whether it currently
/// sits in the wrong-answer queue.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum VisitationState {
    Unvisited,
    Visited,
    Wrong,
}

/// Attention limits for one study session.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SessionConfig {
    /// Most new cards the session will hand out.
    pub new_card_max: u32,
    /// Most previously-seen cards the session will hand out.
    pub existing_card_max: u32,
    /// Hard cap on deck size.
    pub card_limit: usize,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            new_card_max: 15,
            existing_card_max: 15,
            card_limit: 10_000,
        }
    }
}
