//! Card values: immutable identity plus a display-only facing flag.
//!
//! A card is identified by two small integers:
//!
//! - `family`: the suit/month grouping (months 1-12 in the hanafuda
//!   layout, suits 1-4 in the french layout)
//! - `value`: the rank within the family
//!
//! The `face_up` flag exists purely for presentation. No rule ever reads
//! it: cards in the deck are face down, and dealing or drawing flips them
//! up.

use serde::{Deserialize, Serialize};

/// A single playing card.
///
/// Cards are plain values: identity is field equality, and the engine
/// tracks presence on the grid by slot, never by card identity.
///
/// ## Example
///
/// ```
/// use monte_solitaire::core::Card;
///
/// let card = Card::new(3, 2);
/// assert_eq!(card.family(), 3);
/// assert_eq!(card.value(), 2);
/// assert!(!card.is_face_up());
/// assert!(card.face_up().is_face_up());
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Card {
    family: u8,
    value: u8,
    face_up: bool,
}

impl Card {
    /// Create a face-down card.
    #[must_use]
    pub const fn new(family: u8, value: u8) -> Self {
        Self {
            family,
            value,
            face_up: false,
        }
    }

    /// The suit/month grouping.
    #[must_use]
    pub const fn family(self) -> u8 {
        self.family
    }

    /// The rank within the family.
    #[must_use]
    pub const fn value(self) -> u8 {
        self.value
    }

    /// Whether the card is face up. Display state only.
    #[must_use]
    pub const fn is_face_up(self) -> bool {
        self.face_up
    }

    /// Copy of this card turned face up.
    #[must_use]
    pub const fn face_up(self) -> Self {
        Self {
            family: self.family,
            value: self.value,
            face_up: true,
        }
    }
}

impl std::fmt::Display for Card {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}-{}", self.family, self.value)
    }
}
