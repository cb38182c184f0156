//! Recursive action-graph explorer.
//!
//! Expands every legal (card, cell) pair depth-first, in ascending card
//! then cell order. Plies alternate between the searching side and the
//! opponent:
//! - even depth (our move): keep the best child, first found wins ties
//! - odd depth (their move): sum every child, i.e. the opponent is modeled
//!   as the same random field the rollouts use, not as a minimizing player
//!
//! The leaf evaluator decides where expansion stops; see `leaf`.

use std::time::Instant;

use log::{debug, trace, warn};

use crate::core::{nth_set_bit, Move, SearchRng, SimulationState};
use crate::rules::RulesEngine;

use super::agent::{Agent, Decision, ProgressHandle};
use super::leaf::{Exhaustive, LeafEvaluator};
use super::outcome::Outcome;
use super::stats::SearchStats;

/// Graph-exploring agent parameterized by its leaf evaluator.
#[derive(Debug)]
pub struct GraphExplorer<L> {
    leaf: L,
    session_seed: u64,
    initialized: bool,
    progress: ProgressHandle,
    failsafe_rng: Option<SearchRng>,
    stats: SearchStats,
}

impl GraphExplorer<Exhaustive> {
    /// Pure exhaustive search to the end of the game.
    #[must_use]
    pub fn exhaustive() -> Self {
        Self::new(Exhaustive)
    }
}

impl<L> GraphExplorer<L> {
    /// Explorer cutting branches with `leaf`.
    #[must_use]
    pub fn new(leaf: L) -> Self {
        Self {
            leaf,
            session_seed: 0,
            initialized: false,
            progress: ProgressHandle::new(),
            failsafe_rng: None,
            stats: SearchStats::default(),
        }
    }

    #[must_use]
    pub fn leaf(&self) -> &L {
        &self.leaf
    }

    /// Statistics of the most recent search.
    #[must_use]
    pub fn stats(&self) -> &SearchStats {
        &self.stats
    }

    /// Handle for polling progress from another thread.
    #[must_use]
    pub fn progress_handle(&self) -> ProgressHandle {
        self.progress.clone()
    }
}

impl<L> GraphExplorer<L> {
    fn search<E>(&mut self, engine: &E, state: &SimulationState, depth: usize) -> (Option<Move>, Outcome)
    where
        E: RulesEngine,
        L: LeafEvaluator<E>,
    {
        if self.leaf.should_estimate(state, depth) {
            self.stats.estimates += 1;
            return (None, self.leaf.estimate(engine, state));
        }

        let is_root = depth == 0;
        if is_root {
            self.progress.set(0.0);
        }

        let mut best_move = None;
        let mut best = Outcome::ZERO;
        let mut total = Outcome::ZERO;

        let actions = engine.available_actions(state);
        if !actions.is_empty() {
            let mut current_card = None;
            let mut cards_processed = 0;
            for mv in actions.moves() {
                if is_root && current_card != Some(mv.card) {
                    self.progress.set(cards_processed as f32 / actions.num_cards as f32);
                    cards_processed += 1;
                    current_card = Some(mv.card);
                }

                let mut child = state.clone();
                if !engine.place_card(&mut child, mv.card, mv.cell) {
                    continue;
                }
                self.stats.nodes_expanded += 1;

                let branch = match Outcome::from_status(child.status) {
                    Some(terminal) => terminal,
                    None => self.search(engine, &child, depth + 1).1,
                };
                if is_root {
                    trace!("{mv}: {branch}");
                }

                if best_move.is_none() || branch.is_better_than(&best) {
                    best = branch;
                    best_move = Some(mv);
                }
                total += branch;
            }

            if best_move.is_none() {
                best_move = self.failsafe_pick(actions.cards, actions.num_cards, actions.cells, actions.num_cells);
            }
        }

        if depth % 2 == 0 {
            (best_move, best)
        } else {
            (best_move, total)
        }
    }

    /// Uniform pick used when the engine lists legal actions but rejects
    /// every placement.
    fn failsafe_pick(&mut self, cards: u8, num_cards: u32, cells: u16, num_cells: u32) -> Option<Move> {
        let seed = self.session_seed;
        let rng = self.failsafe_rng.get_or_insert_with(|| SearchRng::new(seed));
        let card = nth_set_bit(u32::from(cards), rng.gen_index(num_cards as usize) as u32)?;
        let cell = nth_set_bit(u32::from(cells), rng.gen_index(num_cells as usize) as u32)?;

        self.stats.failsafe_picks += 1;
        warn!("no placement accepted, falling back to random {card} -> {cell}");
        Some(Move::new(card, cell))
    }
}

impl<E, L> Agent<E> for GraphExplorer<L>
where
    E: RulesEngine,
    L: LeafEvaluator<E>,
{
    fn name(&self) -> &'static str {
        self.leaf.name()
    }

    fn initialize(&mut self, engine: &E, session_seed: u64) {
        self.session_seed = session_seed;
        self.failsafe_rng = None;
        self.leaf.initialize(engine, session_seed);
        self.initialized = true;
        debug!("{} initialized with seed {}", self.leaf.name(), session_seed);
    }

    fn is_initialized(&self) -> bool {
        self.initialized && self.leaf.is_initialized()
    }

    fn progress(&self) -> f32 {
        self.progress.get()
    }

    fn find_next_move(&mut self, engine: &E, state: &SimulationState) -> Decision {
        if let Some(outcome) = Outcome::from_status(state.status) {
            return Decision { action: None, outcome };
        }
        if !Agent::<E>::is_initialized(self) {
            return Decision::none();
        }

        let start = Instant::now();
        self.stats.reset();

        let (action, outcome) = self.search(engine, state, 0);

        self.stats.playouts = self.leaf.take_playouts();
        self.stats.time_us = start.elapsed().as_micros() as u64;
        match action {
            Some(mv) => debug!("{}: {mv} ({outcome}), {}", self.leaf.name(), self.stats),
            None => debug!("{}: no move, {}", self.leaf.name(), self.stats),
        }

        Decision { action, outcome }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cards::Card;
    use crate::core::{DeckInstance, GameStatus, Owner, PlacedCard, BOARD_SIZE, MAX_AVAILABLE_CARDS};
    use crate::games::triad::TriadGame;
    use crate::rules::RuleModifier;

    fn deck(value: u8) -> DeckInstance {
        DeckInstance::new((0..5).map(|_| Card::new([value; 4], 0.5)))
    }

    fn filler(owner: Owner) -> Option<PlacedCard> {
        Some(PlacedCard::new(Card::new([5; 4], 0.5), owner))
    }

    /// Board with `empty` cells left open and Blue to move.
    fn endgame(empty: &[usize]) -> SimulationState {
        let mut state = SimulationState::new(deck(5), deck(5));
        let mut placed = 0;
        for cell in 0..BOARD_SIZE {
            if !empty.contains(&cell) {
                state.board[cell] = filler(if cell % 2 == 0 { Owner::Blue } else { Owner::Red });
                placed += 1;
            }
        }
        state.cards_placed = placed;
        state
    }

    #[test]
    fn test_terminal_state_returns_fixed_outcome() {
        let game = TriadGame::new();
        let mut explorer = GraphExplorer::exhaustive();
        explorer.initialize(&game, 1);

        let cases = [
            (GameStatus::BlueWins, Outcome::WIN),
            (GameStatus::BlueDraw, Outcome::DRAW),
            (GameStatus::BlueLost, Outcome::LOSS),
        ];
        for (status, expected) in cases {
            let mut state = endgame(&[]);
            state.status = status;
            let decision = explorer.find_next_move(&game, &state);
            assert_eq!(decision.action, None);
            assert_eq!(decision.outcome, expected);
            assert_eq!(explorer.stats().nodes_expanded, 0);
        }
    }

    #[test]
    fn test_uninitialized_returns_no_move() {
        let game = TriadGame::new();
        let mut explorer = GraphExplorer::exhaustive();
        let state = endgame(&[8]);
        assert!(explorer.find_next_move(&game, &state).action.is_none());
    }

    #[test]
    fn test_single_action_is_deterministic() {
        let game = TriadGame::new();
        let mut state = endgame(&[6]);
        state.deck_blue.available_mask = 0b00100;

        for seed in 0..10 {
            let mut explorer = GraphExplorer::exhaustive();
            explorer.initialize(&game, seed);
            let decision = explorer.find_next_move(&game, &state);
            assert_eq!(decision.action, Some(Move::new(2, 6)));
            assert_eq!(explorer.stats().nodes_expanded, 1);
        }
    }

    #[test]
    fn test_picks_winning_capture() {
        // Last move: a 9 on cell 4 captures all four red 5s around it.
        let game = TriadGame::new();
        let mut state = endgame(&[4]);
        state.deck_blue = DeckInstance::new([Card::new([1; 4], 0.5), Card::new([9; 4], 0.5)]);

        let mut explorer = GraphExplorer::exhaustive();
        explorer.initialize(&game, 0);
        let decision = explorer.find_next_move(&game, &state);

        assert_eq!(decision.action, Some(Move::new(1, 4)));
        assert_eq!(decision.outcome, Outcome::WIN);
        assert_eq!(Agent::<TriadGame>::progress(&explorer), 0.5);
    }

    #[test]
    fn test_progress_steps_once_per_card() {
        // Two open cells per card: progress must advance per card, not per move.
        let game = TriadGame::new();
        let state = endgame(&[0, 8]);
        let mut explorer = GraphExplorer::exhaustive();
        explorer.initialize(&game, 0);

        explorer.find_next_move(&game, &state);
        assert!((Agent::<TriadGame>::progress(&explorer) - 0.8).abs() < 1e-6);
    }

    #[test]
    fn test_ties_keep_first_move() {
        let game = TriadGame::new();
        let state = endgame(&[0, 2]);
        let mut explorer = GraphExplorer::exhaustive();
        explorer.initialize(&game, 0);

        let decision = explorer.find_next_move(&game, &state);
        assert_eq!(decision.action, Some(Move::new(0, 0)));
    }

    #[test]
    fn test_opponent_ply_is_summed() {
        // Two empty corners; after Blue moves, Red has five cards x one cell.
        let game = TriadGame::new();
        let state = endgame(&[0, 8]);
        let mut explorer = GraphExplorer::exhaustive();
        explorer.initialize(&game, 0);

        let decision = explorer.find_next_move(&game, &state);
        assert_eq!(decision.outcome.games, 5.0);
        assert_eq!(explorer.stats().nodes_expanded, 5 * 2 * (1 + 5));
    }

    #[test]
    fn test_empty_hand_returns_no_move() {
        let game = TriadGame::new();
        let mut state = endgame(&[3, 4]);
        state.deck_blue.available_mask = 0;

        let mut explorer = GraphExplorer::exhaustive();
        explorer.initialize(&game, 0);
        let decision = explorer.find_next_move(&game, &state);
        assert!(decision.action.is_none());
        assert_eq!(explorer.stats().failsafe_picks, 0);
    }

    /// Engine that lists moves but refuses every placement.
    #[derive(Debug, Default)]
    struct Stubborn;

    impl RulesEngine for Stubborn {
        fn modifiers(&self) -> &[Box<dyn RuleModifier>] {
            &[]
        }

        fn place_card(&self, _state: &mut SimulationState, _card: usize, _cell: usize) -> bool {
            false
        }
    }

    #[test]
    fn test_failsafe_when_every_placement_fails() {
        let state = endgame(&[1, 5, 7]);
        let mut explorer = GraphExplorer::exhaustive();
        explorer.initialize(&Stubborn, 21);

        let decision = explorer.find_next_move(&Stubborn, &state);
        let mv = decision.action.expect("failsafe move");
        assert!(mv.card < MAX_AVAILABLE_CARDS);
        assert!([1, 5, 7].contains(&mv.cell));
        assert_eq!(explorer.stats().failsafe_picks, 1);

        let mut again = GraphExplorer::exhaustive();
        again.initialize(&Stubborn, 21);
        assert_eq!(again.find_next_move(&Stubborn, &state).action, Some(mv));
    }
}
