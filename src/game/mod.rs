//! Game orchestration: the engine, its builder, outcomes, and snapshots.
//!
//! One `GameEngine` instance exists per running game. The driving loop
//! issues intents (`select`, `compact`, `init`) and renders from
//! `GameSnapshot` values; nothing outside this module mutates game state.

pub mod engine;
pub mod snapshot;

pub use engine::{GameBuilder, GameEngine, Outcome, PAIR_SCORE};
pub use snapshot::GameSnapshot;
