//! Console chess against the minimax AI.
//!
//! Usage: chess [--config FILE] [--depth N] [--color white|black] [--fen FEN]
//!
//! Set `RUST_LOG=debug` to see search statistics on stderr.

mod config;
mod game;
mod render;

use std::io;
use std::process::ExitCode;

use chess_core::GameState;
use minimax_engine::AiPlayer;
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

use crate::config::{config_path, PlayConfig};
use crate::game::ConsoleGame;

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .with_writer(io::stderr)
        .init();

    let args: Vec<String> = std::env::args().skip(1).collect();

    let mut config = match config_path(&args) {
        Some(path) => PlayConfig::load(&path).unwrap_or_else(|e| {
            warn!(error = %e, "using default settings");
            PlayConfig::default()
        }),
        None => PlayConfig::default(),
    };
    if let Err(e) = config.apply_args(&args) {
        eprintln!("{e}");
        return ExitCode::FAILURE;
    }

    let state = match config.start_fen.as_deref() {
        Some(fen) => match GameState::from_fen(fen) {
            Ok(state) => state,
            Err(e) => {
                eprintln!("bad --fen: {e}");
                return ExitCode::FAILURE;
            }
        },
        None => GameState::new(),
    };

    info!(human = %config.human(), depth = config.search.depth, "starting game");
    let ai = AiPlayer::new(config.human().other(), config.search);
    let mut game = ConsoleGame::new(state, config.human(), ai);

    let stdin = io::stdin();
    match game.run(stdin.lock(), &mut io::stdout()) {
        Ok(end) => {
            info!(?end, plies = game.state().history().len(), "session over");
            ExitCode::SUCCESS
        }
        Err(e) => {
            eprintln!("I/O error: {e}");
            ExitCode::FAILURE
        }
    }
}
