//! Selection tracking: the two-slot-with-eviction pick discipline.
//!
//! A player builds a candidate pair one cell at a time. Re-picking a
//! tracked cell toggles it off; picking a third cell evicts the oldest
//! pick. The tracker never holds duplicates and never more than two
//! positions.

use smallvec::SmallVec;

use super::grid::GridPos;

/// Tracks 0-2 picked grid positions in pick order.
#[derive(Clone, Debug, Default)]
pub struct SelectionTracker {
    picks: SmallVec<[GridPos; 2]>,
}

impl SelectionTracker {
    /// Create an empty tracker.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Whether `pos` is currently picked.
    #[must_use]
    pub fn contains(&self, pos: GridPos) -> bool {
        self.picks.contains(&pos)
    }

    /// Number of tracked picks (0-2).
    #[must_use]
    pub fn len(&self) -> usize {
        self.picks.len()
    }

    /// Whether nothing is picked.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.picks.is_empty()
    }

    /// The tracked picks in pick order.
    #[must_use]
    pub fn as_slice(&self) -> &[GridPos] {
        &self.picks
    }

    /// Apply a pick to the tracker.
    ///
    /// Toggles off an already-tracked position; otherwise appends,
    /// evicting the oldest pick if that would exceed two. Returns the
    /// completed pair when exactly two positions are tracked after the
    /// pick - the caller decides whether the pair resolves.
    pub fn toggle(&mut self, pos: GridPos) -> Option<(GridPos, GridPos)> {
        if let Some(idx) = self.picks.iter().position(|&p| p == pos) {
            self.picks.remove(idx);
            return None;
        }

        self.picks.push(pos);
        if self.picks.len() > 2 {
            self.picks.remove(0);
        }

        if self.picks.len() == 2 {
            Some((self.picks[0], self.picks[1]))
        } else {
            None
        }
    }

    /// Drop every pick.
    pub fn clear(&mut self) {
        self.picks.clear();
    }
}
