//! Core library for an in-memory spaced-repetition review scheduler.
//!
//! Provides:
//! - Review history state machine (`ReviewItem` and its transitions)
//! - Scheduling strategies (SuperMemo-2 and a trivial always-due strategy)
//! - Study session scheduler with round-robin fairness, a wrong-answer
//!   queue, and per-session attention caps
//!
//! The library holds no global state and performs no I/O: a
//! [`StudySession`] is constructed and owned by the caller, and every
//! operation is a synchronous computation over the in-memory deck.

pub mod error;
pub mod session;
pub mod strategy;
pub mod types;

pub use error::{Result, SessionError};
pub use session::StudySession;
pub use strategy::{get_strategy, ReviewStrategy, SimpleStrategy, SuperMemo2};
pub use types::{
    DifficultyRating, ReviewItem, ReviewOutcome, SessionConfig, Timestamp, VisitationState,
    DIFFICULTY_EASIEST, DIFFICULTY_HARDEST, SECONDS_PER_DAY,
};
