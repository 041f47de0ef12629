//! Human-versus-AI turn loop.

use std::io::{self, BufRead, Write};

use chess_core::{needs_promotion_choice, parse_move, Color, GameState, Outcome};
use minimax_engine::AiPlayer;
use tracing::info;

use crate::render::render_board;

/// Why the loop stopped.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameEnd {
    Finished(Outcome),
    Quit,
    /// Input ran out before the game finished
    EndOfInput,
}

pub struct ConsoleGame {
    state: GameState,
    human: Color,
    ai: AiPlayer,
}

impl ConsoleGame {
    pub fn new(state: GameState, human: Color, ai: AiPlayer) -> Self {
        Self { state, human, ai }
    }

    pub fn state(&self) -> &GameState {
        &self.state
    }

    /// Plays until the game ends, the human quits or input runs dry.
    pub fn run<R: BufRead, W: Write>(&mut self, input: R, out: &mut W) -> io::Result<GameEnd> {
        let mut lines = input.lines();

        writeln!(out, "Welcome to Chess AI!")?;
        writeln!(out, "You play {}. Enter moves like 'e2 e4', 'undo' or 'quit'.", self.human)?;
        write!(out, "{}", render_board(self.state.board()))?;

        loop {
            if let Some(outcome) = self.state.outcome() {
                self.announce(outcome, out)?;
                info!(?outcome, plies = self.state.history().len(), "game over");
                return Ok(GameEnd::Finished(outcome));
            }
            if self.state.is_in_check(self.state.turn()) {
                writeln!(out, "{} is in check!", self.state.turn())?;
            }

            if self.state.turn() == self.human {
                write!(out, "Your move > ")?;
                out.flush()?;
                let Some(line) = lines.next() else {
                    return Ok(GameEnd::EndOfInput);
                };
                let line = line?;
                match line.trim() {
                    "" => continue,
                    "quit" | "exit" => return Ok(GameEnd::Quit),
                    "undo" => {
                        if self.take_back() {
                            write!(out, "{}", render_board(self.state.board()))?;
                        } else {
                            writeln!(out, "Nothing to undo.")?;
                        }
                        continue;
                    }
                    text => match parse_move(&mut self.state, text) {
                        Some(mv) => self.state.make_move(mv),
                        None => {
                            self.explain_rejection(text, out)?;
                            continue;
                        }
                    },
                }
            } else {
                writeln!(out, "AI is thinking...")?;
                match self.ai.choose_move(&mut self.state) {
                    Some(mv) => {
                        self.state.make_move(mv);
                        writeln!(out, "AI moves {mv}")?;
                        info!(%mv, nodes = self.ai.last_nodes(), "ai moved");
                    }
                    // Not reachable with a legal-move check above, but never spin
                    None => return Ok(GameEnd::EndOfInput),
                }
            }

            write!(out, "{}", render_board(self.state.board()))?;
        }
    }

    /// Reverts the human's last move and the AI reply after it.
    fn take_back(&mut self) -> bool {
        if self.state.undo_move().is_none() {
            return false;
        }
        if self.state.turn() != self.human {
            self.state.undo_move();
        }
        true
    }

    fn explain_rejection<W: Write>(&mut self, text: &str, out: &mut W) -> io::Result<()> {
        let squares: Vec<_> = text
            .split_whitespace()
            .take(2)
            .filter_map(chess_core::parse_square)
            .collect();
        if let &[from, to] = squares.as_slice() {
            if needs_promotion_choice(&mut self.state, from, to) {
                return writeln!(out, "Choose a promotion piece, e.g. '{from} {to} q' (q, r, b, n).");
            }
        }
        writeln!(out, "Invalid move! Try again.")
    }

    fn announce<W: Write>(&self, outcome: Outcome, out: &mut W) -> io::Result<()> {
        match outcome {
            Outcome::Checkmate { winner } if winner == self.human => {
                writeln!(out, "Checkmate! You win.")
            }
            Outcome::Checkmate { .. } => writeln!(out, "Checkmate! AI wins."),
            Outcome::Stalemate => writeln!(out, "Stalemate! Draw."),
        }
    }
}
