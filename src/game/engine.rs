//! The game engine: intents in, snapshots out.
//!
//! `GameEngine` owns the deck, the grid, the selection tracker, and the
//! injected match rule, and orchestrates them through three intents:
//!
//! - `select(pos)`: the selection protocol - toggle, evict, and on a
//!   completed pair test adjacency plus the match rule, removing the pair
//!   on success
//! - `compact()`: gather remaining cards top-left-first, top the grid
//!   back up from the deck, then run terminal-state detection
//! - `init()`: wholesale restart with a fresh shuffle
//!
//! Misuse is never an error: out-of-range or empty-cell selects and
//! intents after game over are silent no-ops. The one failure class the
//! engine knows is invariant violation (card conservation), guarded by
//! debug assertions.

use serde::{Deserialize, Serialize};

use super::snapshot::GameSnapshot;
use crate::core::{Deck, DeckLayout, GameRng, Grid, GridPos, SelectionTracker, GRID_CELLS};
use crate::rules::{FamilyMatch, MatchRule, RankMatch};

/// Points awarded for each removed pair.
pub const PAIR_SCORE: u32 = 10;

/// How a game stands.
///
/// Terminal states are only ever entered during compaction: a match that
/// empties the grid stays `InProgress` until the player compacts.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Outcome {
    /// The game continues.
    InProgress,
    /// Every card left the grid and the deck is exhausted.
    Won,
    /// No adjacent matchable pair remains among the occupied cells.
    Stalemate,
}

impl Outcome {
    /// Whether the game has ended.
    #[must_use]
    pub const fn is_over(self) -> bool {
        !matches!(self, Outcome::InProgress)
    }

    /// Whether the ended game was won.
    #[must_use]
    pub const fn is_win(self) -> bool {
        matches!(self, Outcome::Won)
    }
}

/// Builder for a [`GameEngine`].
///
/// Variants differ only in deck layout and match rule; both are injected
/// here and the engine never branches on them again.
///
/// ## Example
///
/// ```
/// use monte_solitaire::game::GameBuilder;
///
/// let engine = GameBuilder::monte_carlo().build(42);
/// assert_eq!(engine.snapshot().occupied_count(), 25);
/// ```
pub struct GameBuilder {
    layout: DeckLayout,
    rule: Box<dyn MatchRule>,
}

impl GameBuilder {
    /// Monte Carlo: hanafuda deck, same-family matching.
    #[must_use]
    pub fn monte_carlo() -> Self {
        Self {
            layout: DeckLayout::HANAFUDA,
            rule: Box::new(FamilyMatch),
        }
    }

    /// Elevens: french deck, equal ranks or ranks summing to eleven.
    #[must_use]
    pub fn elevens() -> Self {
        Self {
            layout: DeckLayout::FRENCH,
            rule: Box::new(RankMatch),
        }
    }

    /// Start from the Monte Carlo preset.
    #[must_use]
    pub fn new() -> Self {
        Self::monte_carlo()
    }

    /// Override the deck layout.
    #[must_use]
    pub fn layout(mut self, layout: DeckLayout) -> Self {
        self.layout = layout;
        self
    }

    /// Override the match rule.
    #[must_use]
    pub fn rule(mut self, rule: impl MatchRule + 'static) -> Self {
        self.rule = Box::new(rule);
        self
    }

    /// Build the engine and deal the opening grid.
    #[must_use]
    pub fn build(self, seed: u64) -> GameEngine {
        let mut engine = GameEngine {
            layout: self.layout,
            rule: self.rule,
            rng: GameRng::new(seed),
            deck: Deck::default(),
            grid: Grid::new(),
            selection: SelectionTracker::new(),
            score: 0,
            removed: 0,
            outcome: Outcome::InProgress,
        };
        engine.init();
        engine
    }
}

impl Default for GameBuilder {
    fn default() -> Self {
        Self::monte_carlo()
    }
}

/// The solitaire state machine.
///
/// One owned instance per running game; the driving loop holds exclusive
/// mutable access and reads state back through [`GameEngine::snapshot`].
pub struct GameEngine {
    layout: DeckLayout,
    rule: Box<dyn MatchRule>,
    rng: GameRng,
    deck: Deck,
    grid: Grid,
    selection: SelectionTracker,
    score: u32,
    /// Cards removed by matching since the last init.
    removed: usize,
    outcome: Outcome,
}

impl GameEngine {
    /// Start a fresh game: rebuild and shuffle the deck, deal the opening
    /// grid face up in row-major order, and reset score, selection, and
    /// outcome wholesale.
    pub fn init(&mut self) {
        self.deck = Deck::shuffled(self.layout, &mut self.rng);

        let mut dealt = Vec::with_capacity(GRID_CELLS);
        while dealt.len() < GRID_CELLS {
            match self.deck.draw() {
                Some(card) => dealt.push(card.face_up()),
                None => break,
            }
        }
        self.grid.clear();
        self.grid.refill(dealt);

        self.selection.clear();
        self.score = 0;
        self.removed = 0;
        self.outcome = Outcome::InProgress;
        self.check_conservation();
    }

    /// Apply a cell pick.
    ///
    /// Out-of-range or empty-cell picks are ignored, as is everything
    /// after game over. A pick on a tracked position toggles it off; a
    /// pick completing a pair resolves it: adjacent and matching pairs
    /// leave the grid and score [`PAIR_SCORE`], failed pairs stay picked
    /// until the player toggles them off.
    pub fn select(&mut self, pos: GridPos) {
        if self.outcome.is_over() || !self.grid.is_occupied(pos) {
            return;
        }

        let (first, second) = match self.selection.toggle(pos) {
            Some(pair) => pair,
            None => return,
        };

        let (a, b) = match (self.grid.get(first), self.grid.get(second)) {
            (Some(a), Some(b)) => (a, b),
            _ => {
                // picks only ever reference occupied cells; removal and
                // compaction both clear the tracker
                debug_assert!(false, "tracked pick references an empty cell");
                return;
            }
        };

        if first.is_adjacent(second) && self.rule.is_match(a, b) {
            self.grid.take(first);
            self.grid.take(second);
            self.removed += 2;
            self.score += PAIR_SCORE;
            self.selection.clear();
        }
        self.check_conservation();
    }

    /// Compact the grid: gather occupied cells row-major, top the
    /// sequence up from the deck to 25 cards (or deck exhaustion),
    /// re-populate row-major, drop any stale selection, then detect
    /// win/stalemate. Ignored after game over.
    pub fn compact(&mut self) {
        if self.outcome.is_over() {
            return;
        }

        let mut cards = self.grid.drain_cards();
        while cards.len() < GRID_CELLS {
            match self.deck.draw() {
                Some(card) => cards.push(card.face_up()),
                None => break,
            }
        }
        self.grid.refill(cards);
        self.selection.clear();

        self.refresh_outcome();
        self.check_conservation();
    }

    /// Read-only view of the current state.
    #[must_use]
    pub fn snapshot(&self) -> GameSnapshot {
        GameSnapshot {
            grid: self.grid.rows(),
            deck_count: self.deck.len(),
            score: self.score,
            selection: self.selection.as_slice().to_vec(),
            game_over: self.outcome.is_over(),
            win: self.outcome.is_win(),
        }
    }

    /// Current score.
    #[must_use]
    pub fn score(&self) -> u32 {
        self.score
    }

    /// How the game stands.
    #[must_use]
    pub fn outcome(&self) -> Outcome {
        self.outcome
    }

    /// Cards remaining in the deck.
    #[must_use]
    pub fn deck_count(&self) -> usize {
        self.deck.len()
    }

    /// Every adjacent matchable pair among the occupied cells, in
    /// row-major scan order. Empty exactly when the game is stalled (or
    /// the grid is empty). Exposed for hints; terminal detection runs the
    /// same scan.
    #[must_use]
    pub fn matchable_pairs(&self) -> Vec<(GridPos, GridPos)> {
        let occupied = self.grid.occupied_positions();
        let mut pairs = Vec::new();
        for (i, &a) in occupied.iter().enumerate() {
            for &b in &occupied[i + 1..] {
                if !a.is_adjacent(b) {
                    continue;
                }
                if let (Some(ca), Some(cb)) = (self.grid.get(a), self.grid.get(b)) {
                    if self.rule.is_match(ca, cb) {
                        pairs.push((a, b));
                    }
                }
            }
        }
        pairs
    }

    /// Terminal-state detection, run after every compaction.
    fn refresh_outcome(&mut self) {
        if self.grid.occupied_count() == 0 {
            if self.deck.is_empty() {
                self.outcome = Outcome::Won;
            }
            // an empty grid over a non-empty deck refills on the next
            // compaction; not terminal
            return;
        }
        if self.matchable_pairs().is_empty() {
            self.outcome = Outcome::Stalemate;
        }
    }

    /// Deck + grid + removed cards must always account for the whole
    /// domain.
    fn check_conservation(&self) {
        debug_assert_eq!(
            self.deck.len() + self.grid.occupied_count() + self.removed,
            self.layout.deck_size(),
            "card conservation violated"
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Card;

    /// Engine with a hand-built grid, an explicit deck, and the given
    /// rule, for exact-scenario tests.
    fn rigged(
        rule: impl MatchRule + 'static,
        grid_cards: &[(GridPos, Card)],
        deck_cards: Vec<Card>,
    ) -> GameEngine {
        let mut engine = GameBuilder::new().rule(rule).build(0);
        engine.grid.clear();
        for &(pos, card) in grid_cards {
            engine.grid.set(pos, card.face_up());
        }
        engine.deck = Deck::from_cards(deck_cards);
        engine.selection.clear();
        engine.score = 0;
        engine.outcome = Outcome::InProgress;
        engine.removed =
            engine.layout.deck_size() - engine.deck.len() - engine.grid.occupied_count();
        engine
    }

    #[test]
    fn test_opening_deal() {
        let engine = GameBuilder::monte_carlo().build(42);

        assert_eq!(engine.snapshot().occupied_count(), 25);
        assert_eq!(engine.deck_count(), 48 - 25);
        assert_eq!(engine.score(), 0);
        assert_eq!(engine.outcome(), Outcome::InProgress);
        assert!(engine.snapshot().selection.is_empty());
    }

    #[test]
    fn test_adjacent_family_pair_is_removed() {
        let mut engine = rigged(
            FamilyMatch,
            &[
                (GridPos::new(0, 0), Card::new(3, 1)),
                (GridPos::new(0, 1), Card::new(3, 2)),
            ],
            Vec::new(),
        );

        engine.select(GridPos::new(0, 0));
        engine.select(GridPos::new(0, 1));

        let snapshot = engine.snapshot();
        assert_eq!(snapshot.occupied_count(), 0);
        assert_eq!(snapshot.score, PAIR_SCORE);
        assert!(snapshot.selection.is_empty());
        // terminal detection only runs on compaction
        assert!(!snapshot.game_over);
    }

    #[test]
    fn test_rank_pair_summing_to_eleven_is_removed() {
        let mut engine = rigged(
            RankMatch,
            &[
                (GridPos::new(2, 2), Card::new(1, 4)),
                (GridPos::new(3, 3), Card::new(2, 7)),
            ],
            Vec::new(),
        );

        engine.select(GridPos::new(2, 2));
        engine.select(GridPos::new(3, 3));

        assert_eq!(engine.snapshot().occupied_count(), 0);
        assert_eq!(engine.score(), PAIR_SCORE);
    }

    #[test]
    fn test_non_adjacent_pair_stays_selected() {
        let mut engine = rigged(
            FamilyMatch,
            &[
                (GridPos::new(0, 0), Card::new(3, 1)),
                (GridPos::new(0, 2), Card::new(3, 2)),
            ],
            Vec::new(),
        );

        engine.select(GridPos::new(0, 0));
        engine.select(GridPos::new(0, 2));

        let snapshot = engine.snapshot();
        assert_eq!(snapshot.occupied_count(), 2);
        assert_eq!(snapshot.score, 0);
        assert_eq!(
            snapshot.selection,
            vec![GridPos::new(0, 0), GridPos::new(0, 2)]
        );
    }

    #[test]
    fn test_adjacent_non_matching_pair_stays_selected() {
        let mut engine = rigged(
            FamilyMatch,
            &[
                (GridPos::new(0, 0), Card::new(3, 1)),
                (GridPos::new(0, 1), Card::new(4, 1)),
            ],
            Vec::new(),
        );

        engine.select(GridPos::new(0, 0));
        engine.select(GridPos::new(0, 1));

        assert_eq!(engine.snapshot().occupied_count(), 2);
        assert_eq!(engine.score(), 0);
        assert_eq!(engine.snapshot().selection.len(), 2);
    }

    #[test]
    fn test_third_pick_evicts_then_resolves() {
        let mut engine = rigged(
            FamilyMatch,
            &[
                (GridPos::new(0, 0), Card::new(3, 1)),
                (GridPos::new(0, 2), Card::new(3, 2)),
                (GridPos::new(0, 1), Card::new(3, 3)),
            ],
            Vec::new(),
        );

        // non-adjacent pair fails and stays selected
        engine.select(GridPos::new(0, 0));
        engine.select(GridPos::new(0, 2));
        assert_eq!(engine.score(), 0);

        // third pick evicts (0,0); the new pair (0,2)+(0,1) resolves
        engine.select(GridPos::new(0, 1));

        let snapshot = engine.snapshot();
        assert_eq!(snapshot.score, PAIR_SCORE);
        assert_eq!(snapshot.occupied_count(), 1);
        assert!(snapshot.card_at(GridPos::new(0, 0)).is_some());
        assert!(snapshot.selection.is_empty());
    }

    #[test]
    fn test_empty_and_out_of_range_picks_are_ignored() {
        let mut engine = rigged(
            FamilyMatch,
            &[(GridPos::new(0, 0), Card::new(3, 1))],
            Vec::new(),
        );

        engine.select(GridPos::new(4, 4));
        engine.select(GridPos::new(9, 9));

        assert!(engine.snapshot().selection.is_empty());
    }

    #[test]
    fn test_failed_pair_toggles_off_manually() {
        let mut engine = rigged(
            FamilyMatch,
            &[
                (GridPos::new(0, 0), Card::new(3, 1)),
                (GridPos::new(0, 2), Card::new(3, 2)),
            ],
            Vec::new(),
        );

        engine.select(GridPos::new(0, 0));
        engine.select(GridPos::new(0, 2));
        engine.select(GridPos::new(0, 0));

        assert_eq!(engine.snapshot().selection, vec![GridPos::new(0, 2)]);
    }

    #[test]
    fn test_compact_refills_row_major_from_deck() {
        let mut engine = rigged(
            FamilyMatch,
            &[
                (GridPos::new(2, 2), Card::new(1, 1)),
                (GridPos::new(4, 4), Card::new(2, 2)),
            ],
            // top of the deck is the end of the vec
            vec![Card::new(5, 1), Card::new(5, 2), Card::new(5, 3)],
        );

        engine.compact();

        let snapshot = engine.snapshot();
        assert_eq!(snapshot.occupied_count(), 5);
        assert_eq!(snapshot.deck_count, 0);
        // survivors first in scan order, then draws in draw order
        assert_eq!(
            snapshot.card_at(GridPos::new(0, 0)),
            Some(Card::new(1, 1).face_up())
        );
        assert_eq!(
            snapshot.card_at(GridPos::new(0, 1)),
            Some(Card::new(2, 2).face_up())
        );
        assert_eq!(
            snapshot.card_at(GridPos::new(0, 2)),
            Some(Card::new(5, 3).face_up())
        );
        assert_eq!(
            snapshot.card_at(GridPos::new(0, 3)),
            Some(Card::new(5, 2).face_up())
        );
        assert_eq!(
            snapshot.card_at(GridPos::new(0, 4)),
            Some(Card::new(5, 1).face_up())
        );
    }

    #[test]
    fn test_compact_clears_stale_selection() {
        let mut engine = rigged(
            FamilyMatch,
            &[
                (GridPos::new(0, 0), Card::new(3, 1)),
                (GridPos::new(4, 4), Card::new(4, 1)),
            ],
            Vec::new(),
        );

        engine.select(GridPos::new(4, 4));
        engine.compact();

        assert!(engine.snapshot().selection.is_empty());
    }

    #[test]
    fn test_lone_card_stalemates_on_compact() {
        let mut engine = rigged(
            FamilyMatch,
            &[(GridPos::new(0, 0), Card::new(3, 1))],
            Vec::new(),
        );

        engine.compact();

        let snapshot = engine.snapshot();
        assert!(snapshot.game_over);
        assert!(!snapshot.win);
        assert_eq!(engine.outcome(), Outcome::Stalemate);
    }

    #[test]
    fn test_win_requires_compact_after_last_match() {
        let mut engine = rigged(
            FamilyMatch,
            &[
                (GridPos::new(0, 0), Card::new(3, 1)),
                (GridPos::new(1, 1), Card::new(3, 2)),
            ],
            Vec::new(),
        );

        engine.select(GridPos::new(0, 0));
        engine.select(GridPos::new(1, 1));
        assert!(!engine.outcome().is_over());

        engine.compact();
        assert_eq!(engine.outcome(), Outcome::Won);
        assert!(engine.snapshot().win);
        assert!(engine.snapshot().game_over);
    }

    #[test]
    fn test_compact_with_deck_left_is_not_terminal() {
        let mut engine = rigged(
            FamilyMatch,
            &[],
            vec![Card::new(3, 1), Card::new(3, 2)],
        );

        engine.compact();

        let snapshot = engine.snapshot();
        assert!(!snapshot.game_over);
        assert_eq!(snapshot.occupied_count(), 2);
        assert_eq!(snapshot.deck_count, 0);
    }

    #[test]
    fn test_intents_ignored_after_game_over() {
        let mut engine = rigged(
            FamilyMatch,
            &[(GridPos::new(0, 0), Card::new(3, 1))],
            Vec::new(),
        );
        engine.compact();
        assert!(engine.outcome().is_over());

        let before = engine.snapshot();
        engine.select(GridPos::new(0, 0));
        engine.compact();

        assert_eq!(engine.snapshot(), before);
    }

    #[test]
    fn test_init_resets_wholesale() {
        let mut engine = rigged(
            FamilyMatch,
            &[(GridPos::new(0, 0), Card::new(3, 1))],
            Vec::new(),
        );
        engine.compact();
        assert!(engine.outcome().is_over());

        engine.init();

        let snapshot = engine.snapshot();
        assert_eq!(snapshot.occupied_count(), 25);
        assert_eq!(snapshot.deck_count, 48 - 25);
        assert_eq!(snapshot.score, 0);
        assert!(!snapshot.game_over);
        assert!(snapshot.selection.is_empty());
    }

    #[test]
    fn test_matchable_pairs_reports_hint() {
        let engine = rigged(
            FamilyMatch,
            &[
                (GridPos::new(0, 0), Card::new(3, 1)),
                (GridPos::new(0, 1), Card::new(3, 2)),
                (GridPos::new(4, 4), Card::new(7, 1)),
            ],
            Vec::new(),
        );

        assert_eq!(
            engine.matchable_pairs(),
            vec![(GridPos::new(0, 0), GridPos::new(0, 1))]
        );
    }

    #[test]
    fn test_dealt_cards_are_face_up() {
        let engine = GameBuilder::elevens().build(7);

        for row in engine.snapshot().grid {
            for cell in row.iter().flatten() {
                assert!(cell.is_face_up());
            }
        }
    }
}
