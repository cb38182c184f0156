//! Triple Triad rules simulation.

use crate::core::{
    neighbor, DeckInstance, GameStatus, Owner, PlacedCard, Side, SimulationState, BOARD_SIZE,
};
use crate::rules::{ModifierFeatures, RuleModifier, RulesEngine};

/// Rules simulation with an optional set of modifiers.
#[derive(Debug, Default)]
pub struct TriadGame {
    modifiers: Vec<Box<dyn RuleModifier>>,
    /// Union of the modifiers' features, kept in step with `modifiers`.
    features: ModifierFeatures,
}

impl TriadGame {
    /// Plain rules, no modifiers.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a modifier (builder pattern).
    #[must_use]
    pub fn with_modifier<M: RuleModifier + 'static>(mut self, modifier: M) -> Self {
        self.features = self.features | modifier.features();
        self.modifiers.push(Box::new(modifier));
        self
    }

    /// Fresh game with `first` to move and start-of-game hooks applied.
    #[must_use]
    pub fn new_game(&self, blue: DeckInstance, red: DeckInstance, first: Owner) -> SimulationState {
        let mut state = SimulationState::new(blue, red).with_first_turn(first);
        self.run_post_place(&mut state);
        state
    }

    fn run_post_place(&self, state: &mut SimulationState) {
        if !self.features.contains(ModifierFeatures::POST_PLACE) {
            return;
        }
        for m in &self.modifiers {
            if m.features().contains(ModifierFeatures::POST_PLACE) {
                m.on_post_place(state);
            }
        }
    }

    /// Flip opposing neighbors beaten by the card just placed on `cell`.
    fn resolve_captures(&self, state: &mut SimulationState, cell: usize) {
        let Some(attacker) = state.board[cell] else {
            return;
        };

        for side in Side::ALL {
            let Some(target) = neighbor(cell, side) else {
                continue;
            };
            let Some(defender) = state.board[target].as_mut() else {
                continue;
            };
            if defender.owner == attacker.owner {
                continue;
            }

            let capturing = i32::from(attacker.value(side));
            let defending = i32::from(defender.value(side.opposite()));
            if self.can_capture(capturing, defending) {
                defender.owner = attacker.owner;
            }
        }
    }

    /// Final status once the board is full, relative to Blue.
    fn final_status(state: &SimulationState) -> GameStatus {
        let blue = state.count_owned(Owner::Blue) + state.deck_blue.num_available() as usize;
        let red = state.count_owned(Owner::Red) + state.deck_red.num_available() as usize;

        match blue.cmp(&red) {
            std::cmp::Ordering::Greater => GameStatus::BlueWins,
            std::cmp::Ordering::Equal => GameStatus::BlueDraw,
            std::cmp::Ordering::Less => GameStatus::BlueLost,
        }
    }
}

impl RulesEngine for TriadGame {
    fn modifiers(&self) -> &[Box<dyn RuleModifier>] {
        &self.modifiers
    }

    fn features(&self) -> ModifierFeatures {
        self.features
    }

    fn place_card(&self, state: &mut SimulationState, card: usize, cell: usize) -> bool {
        let Some(owner) = state.to_move() else {
            return false;
        };
        if cell >= BOARD_SIZE || !state.is_cell_empty(cell) {
            return false;
        }
        let forced = state
            .forced_card
            .filter(|&slot| state.deck(owner).is_available(slot));
        if forced.is_some_and(|slot| slot != card) {
            return false;
        }
        let Some(placed) = state.deck_mut(owner).take(card) else {
            return false;
        };

        state.board[cell] = Some(PlacedCard::new(placed, owner));
        state.cards_placed += 1;
        state.forced_card = None;
        self.resolve_captures(state, cell);

        if usize::from(state.cards_placed) >= BOARD_SIZE {
            state.status = Self::final_status(state);
        } else {
            state.status = GameStatus::turn_of(owner.opponent());
            self.run_post_place(state);
        }

        true
    }
}
