//! Read-only state snapshots for the presentation layer.
//!
//! The engine owns its state exclusively; the driving loop observes it
//! through `GameSnapshot` values. A snapshot reflects the state strictly
//! after the most recent mutating call, and holds no references back into
//! the engine.

use serde::{Deserialize, Serialize};

use crate::core::{Card, GridPos, GRID_COLS, GRID_ROWS};

/// Everything the presentation layer needs to render a game.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct GameSnapshot {
    /// The 5×5 play surface, row-major.
    pub grid: [[Option<Card>; GRID_COLS]; GRID_ROWS],
    /// Cards remaining in the deck.
    pub deck_count: usize,
    /// Current score.
    pub score: u32,
    /// Picked positions in pick order (0-2 entries).
    pub selection: Vec<GridPos>,
    /// Whether the game has ended.
    pub game_over: bool,
    /// Whether the ended game was won. Implies `game_over`.
    pub win: bool,
}

impl GameSnapshot {
    /// Card at `pos`, or `None` if the cell is empty or out of range.
    #[must_use]
    pub fn card_at(&self, pos: GridPos) -> Option<Card> {
        if pos.in_bounds() {
            self.grid[pos.row as usize][pos.col as usize]
        } else {
            None
        }
    }

    /// Number of occupied grid cells.
    #[must_use]
    pub fn occupied_count(&self) -> usize {
        self.grid
            .iter()
            .flatten()
            .filter(|cell| cell.is_some())
            .count()
    }
}
