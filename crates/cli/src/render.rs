use chess_core::{Board, Square};

const FILES: &str = "  a b c d e f g h";

/// ASCII board, White pieces uppercase, rank 8 on top.
pub fn render_board(board: &Board) -> String {
    let mut out = String::with_capacity(200);
    out.push_str(FILES);
    out.push('\n');
    for row in 0..8i8 {
        let rank = 8 - row;
        out.push_str(&format!("{rank} "));
        for col in 0..8i8 {
            let sq = Square { row, col };
            let c = board.piece_at(sq).map(|p| p.symbol()).unwrap_or('.');
            out.push(c);
            out.push(' ');
        }
        out.push_str(&format!("{rank}\n"));
    }
    out.push_str(FILES);
    out.push('\n');
    out
}
