//! Baseline random policy, also used by rollout workers.

use crate::core::{nth_set_bit, Move, SearchRng, SelectionMode, SimulationState, BOARD_SIZE, MAX_AVAILABLE_CARDS};
use crate::rules::RulesEngine;

use super::agent::{Agent, Decision};

/// Picks a random legal card and a random empty cell.
///
/// In `SelectionMode::Scan` the pick starts at a random offset and walks
/// forward to the first legal index. That favors indices right after a run
/// of illegal ones; the mode is kept so win rates stay comparable with
/// older measurements. `SelectionMode::EqualDistribution` is uniform.
#[derive(Clone, Debug, Default)]
pub struct RandomAgent {
    rng: Option<SearchRng>,
    mode: SelectionMode,
}

impl RandomAgent {
    /// Uninitialized agent using the given selection mode.
    #[must_use]
    pub fn new(mode: SelectionMode) -> Self {
        Self { rng: None, mode }
    }

    /// Initialized agent; used for rollout workers.
    #[must_use]
    pub fn seeded(mode: SelectionMode, seed: u64) -> Self {
        Self::with_rng(mode, SearchRng::new(seed))
    }

    /// Initialized agent drawing from an existing stream.
    #[must_use]
    pub fn with_rng(mode: SelectionMode, rng: SearchRng) -> Self {
        Self { rng: Some(rng), mode }
    }

    #[must_use]
    pub fn mode(&self) -> SelectionMode {
        self.mode
    }

    fn pick_equal<E: RulesEngine>(rng: &mut SearchRng, engine: &E, state: &SimulationState) -> Option<Move> {
        let actions = engine.available_actions(state);
        if actions.is_empty() {
            return None;
        }

        let card_step = rng.gen_index(actions.num_cards as usize) as u32;
        let card = nth_set_bit(u32::from(actions.cards), card_step)?;
        let cell_step = rng.gen_index(actions.num_cells as usize) as u32;
        let cell = nth_set_bit(u32::from(actions.cells), cell_step)?;
        Some(Move::new(card, cell))
    }

    fn pick_scan(rng: &mut SearchRng, state: &SimulationState) -> Option<Move> {
        let mut cell = None;
        if usize::from(state.cards_placed) < BOARD_SIZE {
            let mut pos = rng.gen_index(BOARD_SIZE);
            for _ in 0..BOARD_SIZE {
                pos = (pos + 1) % BOARD_SIZE;
                if state.is_cell_empty(pos) {
                    cell = Some(pos);
                    break;
                }
            }
        }

        let deck = state.acting_deck()?;
        let mut card = None;
        if deck.available_mask > 0 {
            let mut slot = rng.gen_index(MAX_AVAILABLE_CARDS);
            for _ in 0..MAX_AVAILABLE_CARDS {
                slot = (slot + 1) % MAX_AVAILABLE_CARDS;
                if deck.is_available(slot) {
                    card = Some(slot);
                    break;
                }
            }
        }

        // A forced card overrides the scanned slot; the draw above still
        // happens so the stream stays aligned with unforced games.
        if let Some(forced) = state.forced_card.filter(|&slot| deck.is_available(slot)) {
            card = Some(forced);
        }

        Some(Move::new(card?, cell?))
    }
}

impl<E: RulesEngine> Agent<E> for RandomAgent {
    fn name(&self) -> &'static str {
        "Random"
    }

    fn initialize(&mut self, _engine: &E, session_seed: u64) {
        self.rng = Some(SearchRng::new(session_seed));
    }

    fn is_initialized(&self) -> bool {
        self.rng.is_some()
    }

    fn find_next_move(&mut self, engine: &E, state: &SimulationState) -> Decision {
        let Some(rng) = self.rng.as_mut() else {
            return Decision::none();
        };
        if state.status.is_terminal() {
            return Decision::none();
        }

        let action = match self.mode {
            SelectionMode::EqualDistribution => Self::pick_equal(rng, engine, state),
            SelectionMode::Scan => Self::pick_scan(rng, state),
        };

        Decision {
            action,
            ..Decision::none()
        }
    }
}
