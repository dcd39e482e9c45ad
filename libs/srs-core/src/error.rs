//! Error types for srs-core.

use thiserror::Error;

use crate::types::Timestamp;

/// Result type alias using SessionError.
pub type Result<T> = std::result::Result<T, SessionError>;

/// Errors reported by session operations.
///
/// No operation mutates the deck before failing, so an error always leaves
/// the session exactly as it was.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum SessionError {
    #[error("difficulty rating {rating} is outside 0-100")]
    DifficultyOutOfRange { rating: u8 },

    #[error("previous correct review {previous} is later than review date {review_date}")]
    ReviewDatesReversed {
        review_date: Timestamp,
        previous: Timestamp,
    },

    #[error("card index {index} is out of range for a deck of {deck_size} cards")]
    IndexOutOfRange { index: usize, deck_size: usize },

    #[error("deck is full ({limit} cards)")]
    DeckFull { limit: usize },
}
