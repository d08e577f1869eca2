//! Match Demo - plays memory-match games from the terminal.
//!
//! An autoplayer with perfect memory drives the controller: it only learns
//! a symbol by revealing it, but never forgets one.
//!
//! ```text
//! cargo run --features cli --bin match_demo -- --match-count 3 --cards 4 --games 5
//! RUST_LOG=memory_match=debug cargo run --features cli --bin match_demo
//! ```

use std::process::ExitCode;

use clap::Parser;
use rustc_hash::FxHashMap;
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

use memory_match::{BoardConfig, DotId, GameController, GameError, SymbolId, SymbolPool};

/// Command-line arguments.
#[derive(Debug, Parser)]
#[command(name = "match_demo", about = "Autoplay memory-match games")]
struct Args {
    /// Dots that make one set
    #[arg(long, default_value_t = 2)]
    match_count: usize,

    /// Dots on each card
    #[arg(long, default_value_t = 9)]
    dots_per_card: usize,

    /// Cards on the board (clamped into the legal range)
    #[arg(long, default_value_t = 2)]
    cards: usize,

    /// RNG seed for reproducible boards
    #[arg(long)]
    seed: Option<u64>,

    /// Number of games to play
    #[arg(long, default_value_t = 1)]
    games: u32,
}

/// What the autoplayer has seen so far.
#[derive(Debug, Default)]
struct Memory {
    seen: FxHashMap<DotId, SymbolId>,
}

impl Memory {
    fn remember(&mut self, dot: DotId, symbol: SymbolId) {
        self.seen.insert(dot, symbol);
    }

    fn forget(&mut self, dot: DotId) {
        self.seen.remove(&dot);
    }

    /// Known unmatched dots showing `symbol`, excluding `skip`.
    fn known(&self, symbol: SymbolId, skip: &[DotId]) -> Vec<DotId> {
        let mut dots: Vec<DotId> = self
            .seen
            .iter()
            .filter(|(id, s)| **s == symbol && !skip.contains(id))
            .map(|(id, _)| *id)
            .collect();
        dots.sort();
        dots
    }

    /// A symbol with at least `match_count` known dots.
    fn complete_set(&self, match_count: usize) -> Option<Vec<DotId>> {
        let mut by_symbol: FxHashMap<SymbolId, Vec<DotId>> = FxHashMap::default();
        for (id, symbol) in &self.seen {
            by_symbol.entry(*symbol).or_default().push(*id);
        }
        by_symbol
            .into_values()
            .filter(|dots| dots.len() >= match_count)
            .map(|mut dots| {
                dots.sort();
                dots.truncate(match_count);
                dots
            })
            .min()
    }
}

/// Next hidden dot the autoplayer has never revealed.
fn next_unseen(controller: &GameController, memory: &Memory, skip: &[DotId]) -> Option<DotId> {
    controller
        .state()?
        .board()
        .dots()
        .filter(|d| d.is_hidden() && !memory.seen.contains_key(&d.id) && !skip.contains(&d.id))
        .map(|d| d.id)
        .next()
}

/// Tap a dot and record what it reveals.
fn reveal(controller: &mut GameController, memory: &mut Memory, dot: DotId) -> Option<SymbolId> {
    controller.tap_dot(dot);
    let symbol = controller.state()?.board().dot(dot)?.symbol;
    memory.remember(dot, symbol);
    Some(symbol)
}

/// Make one move. Returns false when no legal move is left.
fn play_move(controller: &mut GameController, memory: &mut Memory, match_count: usize) -> bool {
    let mut picked: Vec<DotId> = Vec::with_capacity(match_count);

    if let Some(set) = memory.complete_set(match_count) {
        for dot in set {
            controller.tap_dot(dot);
            picked.push(dot);
        }
    } else {
        let first = next_unseen(controller, memory, &picked)
            .or_else(|| memory.seen.keys().min().copied());
        let Some(first) = first else {
            return false;
        };
        let Some(target) = reveal(controller, memory, first) else {
            return false;
        };
        picked.push(first);

        while picked.len() < match_count {
            let next = memory
                .known(target, &picked)
                .first()
                .copied()
                .or_else(|| next_unseen(controller, memory, &picked));
            let Some(next) = next else {
                break;
            };
            reveal(controller, memory, next);
            picked.push(next);
        }
    }

    match controller.resolve_pending() {
        Some(resolution) => {
            if resolution.outcome.is_match() {
                for dot in &resolution.dots {
                    memory.forget(*dot);
                }
            }
            true
        }
        None => false,
    }
}

/// Play one game to the end. Returns the number of moves taken.
fn play_game(controller: &mut GameController) -> Result<u32, GameError> {
    let state = controller.reset()?;
    let match_count = state.config().match_count;
    let move_limit = state.board().dot_count().saturating_mul(state.board().dot_count()).max(1);
    info!(
        cards = state.board().card_count(),
        dots = state.board().dot_count(),
        seed = state.board_seed(),
        "dealt board"
    );

    let mut memory = Memory::default();
    let mut turns = 0usize;
    while !controller.is_won() && turns < move_limit {
        if !play_move(controller, &mut memory, match_count) {
            warn!(moves = controller.moves(), "autoplayer ran out of moves");
            break;
        }
        turns += 1;
    }
    Ok(controller.moves())
}

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let args = Args::parse();

    let mut config = BoardConfig::new(args.match_count, args.dots_per_card, args.cards);
    config.validate_and_adjust();

    let mut controller = GameController::new(SymbolPool::default()).with_config(config);
    if let Some(seed) = args.seed {
        controller = controller.with_seed(seed);
    }

    let mut total_moves = 0u64;
    for game in 1..=args.games {
        match play_game(&mut controller) {
            Ok(moves) => {
                let progress = controller.progress();
                println!(
                    "game {game}: {moves} moves, {}/{} sets",
                    progress.matched_sets, progress.total_sets
                );
                total_moves += u64::from(moves);
            }
            Err(err) => {
                eprintln!("error: {err}");
                return ExitCode::FAILURE;
            }
        }
    }

    if args.games > 0 {
        println!(
            "average: {:.1} moves over {} games",
            total_moves as f64 / f64::from(args.games),
            args.games
        );
    }
    ExitCode::SUCCESS
}
