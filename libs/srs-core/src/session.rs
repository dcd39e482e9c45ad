//! Study session scheduling.
//!
//! A session owns an append-only deck of cards and decides which card the
//! learner sees next. Wrong answers put a card in the wrong-answer queue,
//! which dominates everything else until the card is answered correctly;
//! otherwise cards rotate round-robin, gated by due dates and per-session
//! caps on how many new and existing cards a single sitting hands out.

use crate::error::{Result, SessionError};
use crate::strategy::ReviewStrategy;
use crate::types::{
    DifficultyRating, ReviewItem, ReviewOutcome, SessionConfig, Timestamp, VisitationState,
    DIFFICULTY_HARDEST,
};

/// A deck slot: the card's history plus its per-session visitation flag.
#[derive(Debug, Clone, Copy)]
struct CardSlot {
    item: ReviewItem,
    visit: VisitationState,
}

/// One learner's study session over an in-memory deck.
///
/// Indices returned by the `add_*` operations are dense, 0-based, and
/// stable until [`StudySession::reset`]. All operations are synchronous;
/// a session is meant to be driven serially by a single caller.
pub struct StudySession {
    strategy: Box<dyn ReviewStrategy>,
    config: SessionConfig,
    cards: Vec<CardSlot>,
    cursor: usize,
    new_cards_returned: u32,
    existing_cards_returned: u32,
}

impl StudySession {
    pub fn new(strategy: Box<dyn ReviewStrategy>, config: SessionConfig) -> Self {
        Self {
            strategy,
            config,
            cards: Vec::new(),
            cursor: 0,
            new_cards_returned: 0,
            existing_cards_returned: 0,
        }
    }

    /// Number of cards in the deck.
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// How many more new cards this session will still hand out.
    pub fn remaining_new(&self) -> u32 {
        self.config.new_card_max.saturating_sub(self.new_cards_returned)
    }

    /// How many more previously-seen cards this session will still hand out.
    pub fn remaining_existing(&self) -> u32 {
        self.config
            .existing_card_max
            .saturating_sub(self.existing_cards_returned)
    }

    /// Append a card that has never been reviewed.
    ///
    /// New cards start at the hardest rating so fresh material gets
    /// reviewed aggressively until its real difficulty emerges.
    pub fn add_never_reviewed(&mut self) -> Result<usize> {
        self.add_item(ReviewItem::NeverReviewed {
            difficulty: DIFFICULTY_HARDEST,
        })
    }

    /// Append a card whose last review was answered incorrectly.
    pub fn add_previously_incorrect(
        &mut self,
        difficulty: DifficultyRating,
        review_date: Timestamp,
    ) -> Result<usize> {
        check_difficulty(difficulty)?;
        self.add_item(ReviewItem::PreviouslyIncorrect {
            difficulty,
            review_date,
        })
    }

    /// Append a card with exactly one correct review behind it.
    pub fn add_previously_first_correct(
        &mut self,
        difficulty: DifficultyRating,
        review_date: Timestamp,
    ) -> Result<usize> {
        check_difficulty(difficulty)?;
        self.add_item(ReviewItem::PreviouslyFirstCorrect {
            difficulty,
            review_date,
        })
    }

    /// Append a card with a correct streak of two or more reviews.
    pub fn add_previously_correct(
        &mut self,
        difficulty: DifficultyRating,
        review_date: Timestamp,
        previous_correct_review: Timestamp,
    ) -> Result<usize> {
        check_difficulty(difficulty)?;
        if previous_correct_review > review_date {
            return Err(SessionError::ReviewDatesReversed {
                review_date,
                previous: previous_correct_review,
            });
        }
        self.add_item(ReviewItem::PreviouslyCorrect {
            difficulty,
            review_date,
            previous_correct_review,
        })
    }

    /// Index of the next card to show, or `None` when the session has
    /// nothing left to offer.
    ///
    /// Scans the deck in circular order from the stored cursor, visiting
    /// each index once. Wrong-queue cards are returned unconditionally;
    /// unvisited due cards are returned while their category's cap lasts.
    /// The cursor only advances past an index that is actually returned.
    pub fn next_review(&mut self, now: Timestamp) -> Option<usize> {
        let deck_size = self.cards.len();
        for offset in 0..deck_size {
            let index = (self.cursor + offset) % deck_size;
            let slot = self.cards[index];
            match slot.visit {
                VisitationState::Wrong => {
                    // Wrong cards stay in rotation until answered
                    // correctly, regardless of due dates or caps.
                    self.cursor = (index + 1) % deck_size;
                    return Some(index);
                }
                VisitationState::Unvisited => {
                    if !self.is_due(&slot.item, now) {
                        continue;
                    }
                    if slot.item.is_new() {
                        if self.new_cards_returned < self.config.new_card_max {
                            self.new_cards_returned += 1;
                            self.cursor = (index + 1) % deck_size;
                            return Some(index);
                        }
                    } else if self.existing_cards_returned < self.config.existing_card_max {
                        self.existing_cards_returned += 1;
                        self.cursor = (index + 1) % deck_size;
                        return Some(index);
                    }
                }
                VisitationState::Visited => {}
            }
        }
        None
    }

    /// Record the learner's outcome for a card and return the timestamp at
    /// which it is due again.
    pub fn update_card(
        &mut self,
        index: usize,
        outcome: ReviewOutcome,
        now: Timestamp,
    ) -> Result<Timestamp> {
        let slot = self.slot(index)?;
        let difficulty = self.strategy.adjust_difficulty(&slot.item, outcome);
        let item = slot.item.after_review(outcome, difficulty, now);
        let visit = if outcome.is_correct() {
            VisitationState::Visited
        } else {
            VisitationState::Wrong
        };
        self.cards[index] = CardSlot { item, visit };
        Ok(self.strategy.next_review(&item, now))
    }

    /// Timestamp at which a card is due, without changing any state.
    pub fn next_review_time(&self, index: usize, now: Timestamp) -> Result<Timestamp> {
        let slot = self.slot(index)?;
        Ok(self.strategy.next_review(&slot.item, now))
    }

    /// Snapshot of a card's review history.
    pub fn at(&self, index: usize) -> Result<ReviewItem> {
        Ok(self.slot(index)?.item)
    }

    /// Clear the deck, the counters, and the rotation cursor.
    pub fn reset(&mut self) {
        self.cards.clear();
        self.cursor = 0;
        self.new_cards_returned = 0;
        self.existing_cards_returned = 0;
    }

    fn add_item(&mut self, item: ReviewItem) -> Result<usize> {
        if self.cards.len() >= self.config.card_limit {
            return Err(SessionError::DeckFull {
                limit: self.config.card_limit,
            });
        }
        self.cards.push(CardSlot {
            item,
            visit: VisitationState::Unvisited,
        });
        Ok(self.cards.len() - 1)
    }

    fn slot(&self, index: usize) -> Result<&CardSlot> {
        self.cards
            .get(index)
            .ok_or_else(|| SessionError::IndexOutOfRange {
                index,
                deck_size: self.cards.len(),
            })
    }

    fn is_due(&self, item: &ReviewItem, now: Timestamp) -> bool {
        self.strategy.next_review(item, now) <= now
    }
}

fn check_difficulty(rating: DifficultyRating) -> Result<()> {
    if rating > DIFFICULTY_HARDEST {
        return Err(SessionError::DifficultyOutOfRange { rating });
    }
    Ok(())
}
