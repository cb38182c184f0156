//! Agent integration tests on the Triple Triad reference game.

use triad_agent::agents::{
    Agent, AgentKind, CarloScored, CarloTheExplorer, DerpyCarlo, GraphExplorer, Outcome,
    RandomAgent,
};
use triad_agent::cards::Card;
use triad_agent::core::{
    AgentConfig, DeckInstance, GameStatus, Move, Owner, PlacedCard, SearchRng, SelectionMode,
    SimulationState,
};
use triad_agent::games::triad::{deal, starter_registry, Order, TriadGame};
use triad_agent::rules::RulesEngine;

fn opening(game: &TriadGame, seed: u64) -> SimulationState {
    let registry = starter_registry();
    let mut rng = SearchRng::new(seed);
    let (blue, red) = deal(&registry, &mut rng).unwrap();
    game.new_game(blue, red, Owner::Blue)
}

fn small_config() -> AgentConfig {
    AgentConfig::default().with_workers(20)
}

fn assert_legal(game: &TriadGame, state: &SimulationState, action: Option<Move>) {
    let mv = action.expect("agent should pick a move");
    let actions = game.available_actions(state);
    assert!(mv.card < 5 && mv.cell < 9, "out of range: {mv}");
    assert!(actions.has_card(mv.card), "card {} not in hand", mv.card);
    assert!(actions.has_cell(mv.cell), "cell {} not empty", mv.cell);
}

// =============================================================================
// Opening Move Tests
// =============================================================================

#[test]
fn test_carlo_the_explorer_opening_uses_rollouts() {
    let game = TriadGame::new();
    let state = opening(&game, 11);

    let mut agent = CarloTheExplorer::carlo_the_explorer(&small_config()).unwrap();
    agent.initialize(&game, 42);
    let decision = agent.find_next_move(&game, &state);

    assert_legal(&game, &state, decision.action);
    // Every root child is estimated: 5 cards x 9 cells, 20 playouts each.
    assert_eq!(agent.stats().nodes_expanded, 45);
    assert_eq!(agent.stats().estimates, 45);
    assert_eq!(agent.stats().playouts, 45 * 20);
    assert_eq!(decision.outcome.games, 1.0);
    assert!(decision.outcome.wins + decision.outcome.draws <= 1.0);
}

#[test]
fn test_derpy_carlo_opening() {
    let game = TriadGame::new();
    let state = opening(&game, 12);

    let mut agent = DerpyCarlo::derpy_carlo(&small_config()).unwrap();
    agent.initialize(&game, 3);
    let decision = agent.find_next_move(&game, &state);

    assert_legal(&game, &state, decision.action);
    assert_eq!(agent.stats().playouts, 45 * 20);
}

#[test]
fn test_carlo_scored_opening() {
    let game = TriadGame::new();
    let state = opening(&game, 13);

    let mut agent = CarloScored::carlo_scored(&small_config()).unwrap();
    agent.initialize(&game, 9);
    let decision = agent.find_next_move(&game, &state);

    assert_legal(&game, &state, decision.action);
    assert!(decision.outcome.wins <= decision.outcome.games);
}

#[test]
fn test_every_kind_picks_legal_opening() {
    let game = TriadGame::new();
    let state = opening(&game, 14);
    let config = small_config();

    for kind in [AgentKind::Random, AgentKind::DerpyCarlo, AgentKind::CarloTheExplorer, AgentKind::CarloScored] {
        let mut agent = kind.build::<TriadGame>(&config).unwrap();
        agent.initialize(&game, 1);
        let decision = agent.find_next_move(&game, &state);
        assert_legal(&game, &state, decision.action);
    }
}

// =============================================================================
// Edge Cases
// =============================================================================

#[test]
fn test_empty_hand_yields_no_move() {
    let game = TriadGame::new();
    let mut state = opening(&game, 15);
    state.deck_blue.available_mask = 0;

    let mut agent = CarloTheExplorer::carlo_the_explorer(&small_config()).unwrap();
    agent.initialize(&game, 1);
    assert_eq!(agent.find_next_move(&game, &state).action, None);

    let mut random = RandomAgent::new(SelectionMode::EqualDistribution);
    random.initialize(&game, 1);
    assert_eq!(random.find_next_move(&game, &state).action, None);
}

#[test]
fn test_uninitialized_agents_yield_no_move() {
    let game = TriadGame::new();
    let state = opening(&game, 16);
    let config = small_config();

    for kind in AgentKind::ALL {
        let mut agent = kind.build::<TriadGame>(&config).unwrap();
        let decision = agent.find_next_move(&game, &state);
        assert_eq!(decision.action, None, "{kind} should need initialize");
    }
}

#[test]
fn test_terminal_state_reports_fixed_outcome() {
    let game = TriadGame::new();
    let mut state = opening(&game, 17);
    state.status = GameStatus::BlueDraw;

    let mut agent = GraphExplorer::exhaustive();
    agent.initialize(&game, 1);
    let decision = agent.find_next_move(&game, &state);

    assert_eq!(decision.action, None);
    assert_eq!(decision.outcome, Outcome::DRAW);
}

#[test]
fn test_forced_card_respected() {
    let game = TriadGame::new().with_modifier(Order);
    let state = opening(&game, 18);
    assert_eq!(state.forced_card, Some(0));

    let mut agent = CarloTheExplorer::carlo_the_explorer(&small_config()).unwrap();
    agent.initialize(&game, 5);
    let decision = agent.find_next_move(&game, &state);

    assert_eq!(decision.action.map(|mv| mv.card), Some(0));
    // Only the forced card is searched at the root.
    assert_eq!(agent.stats().nodes_expanded, 9);
}

// =============================================================================
// Endgame Tests
// =============================================================================

fn flat_deck(value: u8) -> DeckInstance {
    DeckInstance::new((0..5).map(|_| Card::new([value; 4], 0.5)))
}

#[test]
fn test_adaptive_switches_to_exhaustive_late() {
    let game = TriadGame::new();
    let mut state = SimulationState::new(flat_deck(5), flat_deck(5)).with_first_turn(Owner::Blue);
    let mut random = RandomAgent::seeded(SelectionMode::EqualDistribution, 8);
    for _ in 0..6 {
        let mv = random.find_next_move(&game, &state).action.unwrap();
        assert!(game.place_card(&mut state, mv.card, mv.cell));
    }

    let mut agent = CarloTheExplorer::carlo_the_explorer(&small_config()).unwrap();
    agent.initialize(&game, 2);
    let decision = agent.find_next_move(&game, &state);

    assert!(decision.action.is_some());
    assert_eq!(agent.stats().estimates, 0);
    assert_eq!(agent.stats().playouts, 0);

    let mut exhaustive = GraphExplorer::exhaustive();
    exhaustive.initialize(&game, 2);
    let reference = exhaustive.find_next_move(&game, &state);
    assert_eq!(decision.action, reference.action);
    assert_eq!(decision.outcome, reference.outcome);
}

#[test]
fn test_exhaustive_on_red_turn() {
    let game = TriadGame::new();
    let mut state = SimulationState::new(flat_deck(5), flat_deck(5)).with_first_turn(Owner::Blue);
    let mut random = RandomAgent::seeded(SelectionMode::Scan, 4);
    for _ in 0..5 {
        let mv = random.find_next_move(&game, &state).action.unwrap();
        assert!(game.place_card(&mut state, mv.card, mv.cell));
    }
    assert_eq!(state.to_move(), Some(Owner::Red));

    let mut explorer = GraphExplorer::exhaustive();
    explorer.initialize(&game, 0);
    let decision = explorer.find_next_move(&game, &state);

    assert!(decision.action.is_some());
    assert!(decision.outcome.games > 0.0);
}

// =============================================================================
// Full Games
// =============================================================================

#[test]
fn test_run_simulation_finishes() {
    let game = TriadGame::new();
    let mut state = opening(&game, 19);
    let config = small_config();

    let mut blue = AgentKind::CarloScored.build::<TriadGame>(&config).unwrap();
    let mut red = AgentKind::Random.build::<TriadGame>(&config).unwrap();
    blue.initialize(&game, 100);
    red.initialize(&game, 101);

    game.run_simulation(&mut state, blue.as_mut(), red.as_mut());

    assert!(state.status.is_terminal());
    assert_eq!(state.cards_placed, 9);
}

/// Red to move with only the center open. Red's slot 0 (all 9s) flips the
/// four Blue 5s around it; slot 1 (all 1s) flips nothing and hands Blue the game.
fn red_final_move() -> SimulationState {
    let mut state = SimulationState::new(flat_deck(5), flat_deck(5)).with_first_turn(Owner::Red);
    state.deck_blue = DeckInstance::new((0..3).map(|_| Card::new([5; 4], 0.5)));
    state.deck_red = DeckInstance::new([Card::new([9; 4], 0.5), Card::new([1; 4], 0.5)]);
    for cell in [0, 2, 6, 8] {
        state.board[cell] = Some(PlacedCard::new(Card::new([5; 4], 0.5), Owner::Red));
    }
    for cell in [1, 3, 5, 7] {
        state.board[cell] = Some(PlacedCard::new(Card::new([5; 4], 0.5), Owner::Blue));
    }
    state.cards_placed = 8;
    state
}

#[test]
fn test_red_search_agent_plays_for_red() {
    let game = TriadGame::new();
    let mut state = red_final_move();

    let mut blue = RandomAgent::seeded(SelectionMode::Scan, 1);
    let mut red = GraphExplorer::exhaustive();
    red.initialize(&game, 0);

    game.run_simulation(&mut state, &mut blue, &mut red);

    assert_eq!(state.status, GameStatus::BlueLost);
    assert!(!state.deck_red.is_available(0), "red should play its 9s");
    assert_eq!(state.count_owned(Owner::Red), 9);
}

#[test]
fn test_red_sees_mirrored_position() {
    let game = TriadGame::new();
    let state = red_final_move();

    let mut red = GraphExplorer::exhaustive();
    red.initialize(&game, 0);
    let decision = red.find_next_move(&game, &state.mirrored());

    assert_eq!(decision.action, Some(Move::new(0, 4)));
    assert_eq!(decision.outcome, Outcome::WIN);
}

#[test]
fn test_boxed_red_agent_plays_for_red() {
    let game = TriadGame::new();
    let mut state = red_final_move();
    let config = small_config();

    let mut blue = AgentKind::Random.build::<TriadGame>(&config).unwrap();
    let mut red = AgentKind::CarloTheExplorer.build::<TriadGame>(&config).unwrap();
    blue.initialize(&game, 1);
    red.initialize(&game, 2);

    game.run_simulation(&mut state, blue.as_mut(), red.as_mut());
    assert_eq!(state.status, GameStatus::BlueLost);
}

#[test]
fn test_progress_finishes_below_one() {
    let game = TriadGame::new();
    let state = opening(&game, 20);

    let mut agent = DerpyCarlo::derpy_carlo(&small_config()).unwrap();
    let handle = agent.progress_handle();
    agent.initialize(&game, 7);
    agent.find_next_move(&game, &state);

    // Last card processed starts at 4/5.
    assert!((handle.get() - 0.8).abs() < 1e-6);
}

#[test]
fn test_dedicated_pool_same_decision() {
    let game = TriadGame::new();
    let state = opening(&game, 21);

    let mut global = DerpyCarlo::derpy_carlo(&small_config()).unwrap();
    let mut pooled = DerpyCarlo::derpy_carlo(&small_config().with_threads(2)).unwrap();
    global.initialize(&game, 55);
    pooled.initialize(&game, 55);

    let a = global.find_next_move(&game, &state);
    let b = pooled.find_next_move(&game, &state);
    assert_eq!(a.action, b.action);
    assert_eq!(a.outcome, b.outcome);
}
