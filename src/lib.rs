//! # monte-solitaire
//!
//! A single-player tile-matching solitaire engine: a 5×5 grid dealt from
//! a shuffled deck, adjacent pairs removed under a pluggable match rule.
//!
//! ## Design Principles
//!
//! 1. **Core only**: deck construction, dealing, pair validation,
//!    removal, compaction, and win/stalemate detection. Rendering and
//!    input belong to the driving loop, which issues intents and renders
//!    from read-only snapshots.
//!
//! 2. **Rules are injected**: the two shipped variants (Monte Carlo on a
//!    48-card hanafuda deck, Elevens on a 52-card french deck) differ
//!    only in their `MatchRule`; the state machine is shared.
//!
//! 3. **Deterministic**: shuffles come from a seeded ChaCha8 RNG. The
//!    same seed replays the same game.
//!
//! ## Usage
//!
//! ```
//! use monte_solitaire::core::GridPos;
//! use monte_solitaire::game::GameBuilder;
//!
//! let mut engine = GameBuilder::monte_carlo().build(42);
//!
//! // pick two cells; an adjacent matching pair leaves the grid
//! engine.select(GridPos::new(0, 0));
//! engine.select(GridPos::new(0, 1));
//!
//! // gather the survivors and top the grid back up from the deck
//! engine.compact();
//!
//! let snapshot = engine.snapshot();
//! assert_eq!(snapshot.occupied_count(), 25);
//! ```
//!
//! ## Modules
//!
//! - `core`: cards, deck, grid, RNG, selection tracking
//! - `rules`: the `MatchRule` trait and shipped variants
//! - `game`: the orchestrating engine, builder, and snapshots

pub mod core;
pub mod game;
pub mod rules;

// Re-export commonly used types
pub use crate::core::{
    Card, Deck, DeckLayout, GameRng, Grid, GridPos, SelectionTracker, GRID_CELLS, GRID_COLS,
    GRID_ROWS,
};

pub use crate::game::{GameBuilder, GameEngine, GameSnapshot, Outcome, PAIR_SCORE};

pub use crate::rules::{FamilyMatch, MatchRule, RankMatch, PAIR_SUM};
