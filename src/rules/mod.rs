//! Match-rule trait and the shipped game variants.
//!
//! Rules are injected into the engine as strategies; the selection and
//! removal machinery never interprets card fields directly.

pub mod matcher;

pub use matcher::{FamilyMatch, MatchRule, RankMatch, PAIR_SUM};
