//! Perft against published node counts.
//!
//! Each line of `standard.epd` is a FEN followed by `;D<depth> <nodes>`
//! entries. Counts above `NODE_LIMIT` run only with `FULL_PERFT` set.

use rayon::prelude::*;

use chess_core::{GameState, perft, perft_divide};

const NODE_LIMIT: u64 = 1_000_000;

struct PerftCase {
    fen: String,
    counts: Vec<(u8, u64)>,
}

impl PerftCase {
    fn parse(line: &str) -> Option<PerftCase> {
        let (fen, rest) = line.split_once(';')?;
        let counts = rest
            .split(';')
            .filter_map(|entry| {
                let (key, nodes) = entry.trim().split_once(' ')?;
                let depth = key.strip_prefix('D')?.parse().ok()?;
                Some((depth, nodes.trim().parse().ok()?))
            })
            .collect();
        Some(PerftCase {
            fen: fen.trim().to_string(),
            counts,
        })
    }

    /// Per-move breakdown for a failing depth, so the bad branch is visible.
    fn divide_report(&self, depth: u8) -> String {
        let mut state = GameState::from_fen(&self.fen).unwrap();
        perft_divide(&mut state, depth)
            .into_iter()
            .map(|(mv, n)| format!("  {mv}: {n}"))
            .collect::<Vec<_>>()
            .join("\n")
    }
}

fn load_cases() -> Vec<PerftCase> {
    include_str!("standard.epd")
        .lines()
        .filter(|l| !l.trim().is_empty())
        .filter_map(PerftCase::parse)
        .collect()
}

#[test]
fn standard_positions_match_published_counts() {
    let full = std::env::var("FULL_PERFT").is_ok();
    let cases = load_cases();
    assert_eq!(cases.len(), 6);
    assert!(cases.iter().all(|c| !c.counts.is_empty()));

    let failures: Vec<String> = cases
        .par_iter()
        .flat_map_iter(|case| {
            let mut state = GameState::from_fen(&case.fen).unwrap();
            let before = state.clone();
            let mut bad = Vec::new();
            for &(depth, expected) in &case.counts {
                if expected > NODE_LIMIT && !full {
                    continue;
                }
                let got = perft(&mut state, depth);
                assert_eq!(state, before, "perft disturbed {}", case.fen);
                if got != expected {
                    bad.push(format!(
                        "{} depth {depth}: expected {expected}, got {got}\n{}",
                        case.fen,
                        case.divide_report(depth)
                    ));
                }
            }
            bad
        })
        .collect();

    assert!(failures.is_empty(), "perft mismatches:\n{}", failures.join("\n"));
}

#[test]
fn divide_splits_the_start_position_total() {
    let mut state = GameState::new();
    let divided = perft_divide(&mut state, 3);
    assert_eq!(divided.len(), 20);
    assert!(divided.iter().all(|(_, n)| (380..=600).contains(n)));
    assert_eq!(divided.iter().map(|(_, n)| n).sum::<u64>(), 8902);
    assert_eq!(perft(&mut state, 0), 1);
}
