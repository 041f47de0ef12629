//! Perft timing over the reference positions.
//!
//! Usage:
//!   cargo run --release --example perft_bench -p chess_core -- [depth] [fen]
//!
//! With a FEN, prints the per-move split as well so a disagreeing count can be
//! traced to one branch.

use chess_core::{GameState, START_FEN, perft, perft_divide};
use std::env;
use std::time::{Duration, Instant};

const TEST_POSITIONS: &[(&str, &str)] = &[
    ("Starting position", START_FEN),
    (
        "Kiwipete",
        "r3k2r/p1ppqpb1/bn2pnp1/3PN3/1p2P3/2N2Q1p/PPPBBPPP/R3K2R w KQkq -",
    ),
    ("Position 3", "8/2p5/3p4/KP5r/1R3p1k/8/4P1P1/8 w - -"),
    (
        "Position 4",
        "r3k2r/Pppp1ppp/1b3nbN/nP6/BBP1P3/q4N2/Pp1P2PP/R2Q1RK1 w kq -",
    ),
    (
        "Position 5",
        "rnbq1k1r/pp1Pbppp/2p5/8/2B5/8/PPP1NnPP/RNBQK2R w KQ -",
    ),
];

fn nps(nodes: u64, elapsed: Duration) -> f64 {
    if elapsed.as_secs_f64() > 0.0 {
        nodes as f64 / elapsed.as_secs_f64()
    } else {
        0.0
    }
}

fn main() {
    let args: Vec<String> = env::args().collect();
    let depth: u8 = args.get(1).and_then(|s| s.parse().ok()).unwrap_or(4);

    if let Some(fen) = args.get(2) {
        let mut state = match GameState::from_fen(fen) {
            Ok(s) => s,
            Err(e) => {
                eprintln!("Bad FEN: {e}");
                std::process::exit(1);
            }
        };
        let start = Instant::now();
        let mut total = 0u64;
        for (mv, nodes) in perft_divide(&mut state, depth) {
            println!("{mv}: {nodes}");
            total += nodes;
        }
        let elapsed = start.elapsed();
        println!();
        println!("Nodes: {total}  Time: {elapsed:.3?}  NPS: {:.0}", nps(total, elapsed));
        return;
    }

    println!("=== Perft Benchmark Suite (depth {depth}) ===");
    let mut total_nodes = 0u64;
    let mut total_time = Duration::ZERO;
    for (name, fen) in TEST_POSITIONS {
        let Ok(mut state) = GameState::from_fen(fen) else {
            continue;
        };
        print!("{name:.<30}");
        let start = Instant::now();
        let nodes = perft(&mut state, depth);
        let elapsed = start.elapsed();
        total_nodes += nodes;
        total_time += elapsed;
        println!(" {nodes:>12} nodes in {elapsed:>8.3?} ({:>10.0} nps)", nps(nodes, elapsed));
    }
    println!("{:=<70}", "");
    println!(
        "TOTAL: {total_nodes} nodes in {total_time:.3?} ({:.0} nps)",
        nps(total_nodes, total_time)
    );
}
