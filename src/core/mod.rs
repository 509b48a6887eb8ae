//! Core game types: cards, deck, grid, RNG, selection tracking.
//!
//! This module contains the building blocks that are rule-agnostic. Which
//! pairs may be removed is decided by an injected `rules::MatchRule`, never
//! in here.

pub mod card;
pub mod deck;
pub mod grid;
pub mod rng;
pub mod selection;

pub use card::Card;
pub use deck::{Deck, DeckLayout};
pub use grid::{Grid, GridPos, GRID_CELLS, GRID_COLS, GRID_ROWS};
pub use rng::GameRng;
pub use selection::SelectionTracker;
