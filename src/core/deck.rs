//! Deck construction and draw order.
//!
//! `DeckLayout` describes the finite card domain of a game variant;
//! `Deck` is the shuffled remainder after dealing, consumed strictly from
//! one end and never reordered again.

use serde::{Deserialize, Serialize};

use super::card::Card;
use super::rng::GameRng;

/// The finite card domain of a game variant.
///
/// A layout enumerates `families × values_per_family` distinct cards,
/// each appearing exactly once. Families and values are both 1-based.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct DeckLayout {
    /// Number of families (suits/months).
    pub families: u8,
    /// Number of values within each family.
    pub values_per_family: u8,
}

impl DeckLayout {
    /// Hanafuda deck: 12 months of 4 cards each, 48 cards total.
    pub const HANAFUDA: Self = Self {
        families: 12,
        values_per_family: 4,
    };

    /// French deck: 4 suits of 13 ranks each, 52 cards total.
    ///
    /// Ranks 11/12/13 are the face cards; they participate numerically
    /// in rank-based matching.
    pub const FRENCH: Self = Self {
        families: 4,
        values_per_family: 13,
    };

    /// Total number of cards in the domain.
    #[must_use]
    pub const fn deck_size(self) -> usize {
        self.families as usize * self.values_per_family as usize
    }

    /// Build the full domain, every family×value combination exactly
    /// once, unshuffled and face down.
    #[must_use]
    pub fn full_deck(self) -> Vec<Card> {
        let mut cards = Vec::with_capacity(self.deck_size());
        for family in 1..=self.families {
            for value in 1..=self.values_per_family {
                cards.push(Card::new(family, value));
            }
        }
        cards
    }
}

/// The stock of undealt cards (top = end of vec).
///
/// Strictly decreasing in length: the only mutation after the initial
/// shuffle is `draw`.
#[derive(Clone, Debug, Default)]
pub struct Deck {
    cards: Vec<Card>,
}

impl Deck {
    /// Build and uniformly shuffle the full domain of a layout.
    #[must_use]
    pub fn shuffled(layout: DeckLayout, rng: &mut GameRng) -> Self {
        let mut cards = layout.full_deck();
        rng.shuffle(&mut cards);
        Self { cards }
    }

    /// Draw the top card, or `None` if the deck is exhausted.
    pub fn draw(&mut self) -> Option<Card> {
        self.cards.pop()
    }

    /// Number of cards remaining.
    #[must_use]
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    /// Whether the deck is exhausted.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// Deck with explicit contents, top = end of vec. Test rigging only.
    #[cfg(test)]
    pub(crate) fn from_cards(cards: Vec<Card>) -> Self {
        Self { cards }
    }
}
