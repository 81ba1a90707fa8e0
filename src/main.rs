//! Omok AI self-play driver
//!
//! Plays the engine against itself and prints the moves and the final
//! board. Set `RUST_LOG=omok=debug` to see per-move search statistics.

use std::time::Duration;

use anyhow::{bail, Result};
use clap::Parser;
use tracing::info;
use tracing_subscriber::EnvFilter;

use omok::rules::{longest_run, winning_run};
use omok::{game_status, AIEngine, Board, EngineConfig, GameStatus, Stone, DEFAULT_BOARD_SIZE};

#[derive(Parser, Debug)]
#[command(name = "omok", about = "Omok engine self-play")]
struct Args {
    /// Board size (n for an n x n board)
    #[arg(long, default_value_t = DEFAULT_BOARD_SIZE)]
    size: usize,

    /// Search depth for Black
    #[arg(long, default_value_t = 3)]
    black_depth: u8,

    /// Search depth for White
    #[arg(long, default_value_t = 2)]
    white_depth: u8,

    /// Seed for both engines' tie-breaking
    #[arg(long)]
    seed: Option<u64>,

    /// Per-move time budget in milliseconds
    #[arg(long)]
    time_limit_ms: Option<u64>,

    /// Run plain minimax instead of alpha-beta
    #[arg(long)]
    no_pruning: bool,

    /// Stop after this many moves
    #[arg(long)]
    max_moves: Option<usize>,
}

impl Args {
    fn engine(&self, stone: Stone, depth: u8, seed_offset: u64) -> Result<AIEngine> {
        let config = EngineConfig {
            max_depth: depth,
            alpha_beta: !self.no_pruning,
            opening_book: true,
            time_limit: self.time_limit_ms.map(Duration::from_millis),
            seed: self.seed.map(|s| s.wrapping_add(seed_offset)),
        };
        Ok(AIEngine::with_config(stone, stone.opponent(), config)?)
    }
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let args = Args::parse();
    if args.size == 0 {
        bail!("board size must be at least 1");
    }

    let mut board = Board::new(args.size);
    let mut black = args.engine(Stone::Black, args.black_depth, 0)?;
    let mut white = args.engine(Stone::White, args.white_depth, 1)?;
    let max_moves = args.max_moves.unwrap_or(args.size * args.size);

    let mut to_move = Stone::Black;
    let mut moves = 0;
    while game_status(&board) == GameStatus::InProgress && moves < max_moves {
        let engine = if to_move == Stone::Black { &mut black } else { &mut white };
        let result = engine.choose_move_with_stats(&board)?;
        board.place_stone(result.best_move, to_move)?;
        moves += 1;

        info!(
            "{:>3}. {:?} {} ({:?}, score {}, {} nodes, {}ms)",
            moves,
            to_move,
            result.best_move,
            result.source,
            result.score,
            result.nodes,
            result.time_ms
        );
        to_move = to_move.opponent();
    }

    println!("{board}");
    match game_status(&board) {
        GameStatus::Won(stone) => {
            let line = winning_run(&board).map(|(_, run)| run).unwrap_or_default();
            let cells: Vec<String> = line.iter().map(ToString::to_string).collect();
            println!("{stone:?} wins after {moves} moves: {}", cells.join(" "));
        }
        GameStatus::Draw => println!("Draw after {moves} moves"),
        GameStatus::InProgress => {
            let b = longest_run(&board, Stone::Black);
            let w = longest_run(&board, Stone::White);
            println!(
                "Stopped after {moves} moves. Longest runs: Black {} ({} open), White {} ({} open)",
                b.length, b.open_ends, w.length, w.open_ends
            );
        }
    }

    Ok(())
}
