//! Match runner: plays seeded games between two agent kinds.
//!
//! ```bash
//! cargo run --release --features cli --bin arena -- --blue scored --red random --games 20
//! ```
//!
//! Set `RUST_LOG=debug` to see per-move search summaries.

use std::process::ExitCode;

use clap::Parser;
use log::{error, info, warn};

use triad_agent::agents::{Agent, AgentKind, Outcome};
use triad_agent::core::{AgentConfig, AgentError, Owner, SearchRng, SelectionMode};
use triad_agent::games::triad::{deal, starter_registry, TriadGame};
use triad_agent::rules::RulesEngine;

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Agent playing Blue (random, explorer, derpy, carlo, scored)
    #[arg(long, default_value = "carlo")]
    blue: AgentKind,

    /// Agent playing Red
    #[arg(long, default_value = "random")]
    red: AgentKind,

    /// Number of games
    #[arg(long, default_value_t = 10)]
    games: u32,

    /// Seed for deals and agent sessions
    #[arg(long, default_value_t = 0)]
    seed: u64,

    /// Rollout playouts per estimate
    #[arg(long, default_value_t = 2000)]
    workers: usize,

    /// Uniform random policy instead of scan selection
    #[arg(long)]
    uniform: bool,
}

fn run(args: &Args) -> Result<Outcome, AgentError> {
    let mode = if args.uniform {
        SelectionMode::EqualDistribution
    } else {
        SelectionMode::Scan
    };
    let config = AgentConfig::default()
        .with_workers(args.workers)
        .with_random_mode(mode);

    let game = TriadGame::new();
    let registry = starter_registry();
    let mut rng = SearchRng::new(args.seed);

    let mut blue = args.blue.build::<TriadGame>(&config)?;
    let mut red = args.red.build::<TriadGame>(&config)?;
    blue.initialize(&game, args.seed);
    red.initialize(&game, args.seed.wrapping_add(1));

    let mut total = Outcome::ZERO;
    for index in 0..args.games {
        let Some((deck_blue, deck_red)) = deal(&registry, &mut rng) else {
            error!("registry too small to deal two decks");
            break;
        };
        let first = if rng.gen_index(2) == 0 { Owner::Blue } else { Owner::Red };
        let mut state = game.new_game(deck_blue, deck_red, first);

        game.run_simulation(&mut state, blue.as_mut(), red.as_mut());

        match Outcome::from_status(state.status) {
            Some(outcome) => {
                info!("game {index}: {:?} (first: {first})", state.status);
                total += outcome;
            }
            None => warn!("game {index}: stopped unfinished at {:?}", state.status),
        }
    }
    Ok(total)
}

fn main() -> ExitCode {
    env_logger::init();
    let args = Args::parse();

    match run(&args) {
        Ok(total) => {
            let losses = total.games - total.wins - total.draws;
            println!(
                "{} vs {}: {} wins, {} draws, {} losses over {} games",
                args.blue, args.red, total.wins, total.draws, losses, total.games
            );
            ExitCode::SUCCESS
        }
        Err(err) => {
            error!("{err}");
            eprintln!("error: {err}");
            ExitCode::FAILURE
        }
    }
}
