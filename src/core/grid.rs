//! The 5×5 play surface.
//!
//! Cells are `Option<Card>` in a flat row-major array. Coordinates are
//! `GridPos { row, col }`; out-of-range positions are representable and
//! every accessor treats them as empty, so callers can pass raw input
//! through without pre-validating.

use serde::{Deserialize, Serialize};

use super::card::Card;

/// Grid height in cells.
pub const GRID_ROWS: usize = 5;
/// Grid width in cells.
pub const GRID_COLS: usize = 5;
/// Total number of cells on the grid.
pub const GRID_CELLS: usize = GRID_ROWS * GRID_COLS;

/// A grid coordinate (row, col), both 0-based.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct GridPos {
    pub row: u8,
    pub col: u8,
}

impl GridPos {
    /// Create a new position.
    #[must_use]
    pub const fn new(row: u8, col: u8) -> Self {
        Self { row, col }
    }

    /// Whether the position lies on the 5×5 grid.
    #[must_use]
    pub const fn in_bounds(self) -> bool {
        (self.row as usize) < GRID_ROWS && (self.col as usize) < GRID_COLS
    }

    /// Moore-neighborhood adjacency: row and column each differ by at
    /// most one, and the positions are distinct. Symmetric and
    /// irreflexive; edge and corner cells simply have fewer neighbors.
    #[must_use]
    pub fn is_adjacent(self, other: Self) -> bool {
        let dr = (i16::from(self.row) - i16::from(other.row)).abs();
        let dc = (i16::from(self.col) - i16::from(other.col)).abs();
        dr <= 1 && dc <= 1 && dr + dc > 0
    }
}

impl std::fmt::Display for GridPos {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({},{})", self.row, self.col)
    }
}

/// The 5×5 play surface - flat row-major storage.
#[derive(Clone, Debug, PartialEq)]
pub struct Grid {
    cells: [Option<Card>; GRID_CELLS],
}

impl Grid {
    /// Create an empty grid.
    #[must_use]
    pub fn new() -> Self {
        Self {
            cells: [None; GRID_CELLS],
        }
    }

    fn index(pos: GridPos) -> Option<usize> {
        if pos.in_bounds() {
            Some(pos.row as usize * GRID_COLS + pos.col as usize)
        } else {
            None
        }
    }

    /// Card at `pos`, or `None` if the cell is empty or out of range.
    #[must_use]
    pub fn get(&self, pos: GridPos) -> Option<Card> {
        Self::index(pos).and_then(|idx| self.cells[idx])
    }

    /// Whether `pos` holds a card.
    #[must_use]
    pub fn is_occupied(&self, pos: GridPos) -> bool {
        self.get(pos).is_some()
    }

    /// Place a card at `pos`. Returns false if out of range.
    pub fn set(&mut self, pos: GridPos, card: Card) -> bool {
        match Self::index(pos) {
            Some(idx) => {
                self.cells[idx] = Some(card);
                true
            }
            None => false,
        }
    }

    /// Remove and return the card at `pos`, if any.
    pub fn take(&mut self, pos: GridPos) -> Option<Card> {
        Self::index(pos).and_then(|idx| self.cells[idx].take())
    }

    /// Empty every cell.
    pub fn clear(&mut self) {
        self.cells = [None; GRID_CELLS];
    }

    /// Number of occupied cells.
    #[must_use]
    pub fn occupied_count(&self) -> usize {
        self.cells.iter().filter(|cell| cell.is_some()).count()
    }

    /// Positions of all occupied cells in row-major order.
    #[must_use]
    pub fn occupied_positions(&self) -> Vec<GridPos> {
        self.cells
            .iter()
            .enumerate()
            .filter_map(|(idx, cell)| {
                cell.map(|_| GridPos::new((idx / GRID_COLS) as u8, (idx % GRID_COLS) as u8))
            })
            .collect()
    }

    /// Collect every card in row-major order and empty the grid.
    pub fn drain_cards(&mut self) -> Vec<Card> {
        let cards = self.cells.iter().filter_map(|cell| *cell).collect();
        self.clear();
        cards
    }

    /// Re-populate the grid in row-major order from at most
    /// `GRID_CELLS` cards. The grid must be empty.
    pub fn refill(&mut self, cards: impl IntoIterator<Item = Card>) {
        debug_assert_eq!(self.occupied_count(), 0, "refill over a non-empty grid");
        for (idx, card) in cards.into_iter().enumerate() {
            debug_assert!(idx < GRID_CELLS, "refill overflows the grid");
            self.cells[idx] = Some(card);
        }
    }

    /// The cells as nested rows, for snapshots.
    #[must_use]
    pub fn rows(&self) -> [[Option<Card>; GRID_COLS]; GRID_ROWS] {
        let mut rows = [[None; GRID_COLS]; GRID_ROWS];
        for (idx, cell) in self.cells.iter().enumerate() {
            rows[idx / GRID_COLS][idx % GRID_COLS] = *cell;
        }
        rows
    }
}

impl Default for Grid {
    fn default() -> Self {
        Self::new()
    }
}
