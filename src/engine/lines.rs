//! Winning line analysis

use super::board::{Board, Cell, Player};

/// The eight cell triples that decide a game: rows, then columns, then diagonals
pub const LINES: [[(usize, usize); 3]; 8] = [
    [(0, 0), (0, 1), (0, 2)],
    [(1, 0), (1, 1), (1, 2)],
    [(2, 0), (2, 1), (2, 2)], // rows
    [(0, 0), (1, 0), (2, 0)],
    [(0, 1), (1, 1), (2, 1)],
    [(0, 2), (1, 2), (2, 2)], // columns
    [(0, 0), (1, 1), (2, 2)],
    [(0, 2), (1, 1), (2, 0)], // diagonals
];

/// Owner of a uniformly marked line, if any
///
/// Legal positions have at most one winner, so the scan order of [`LINES`]
/// never affects the result there.
pub fn line_owner(board: &Board) -> Option<Player> {
    for [a, b, c] in LINES {
        let first = board.get(a.0, a.1);
        if first != Cell::Empty && first == board.get(b.0, b.1) && first == board.get(c.0, c.1) {
            return first.player();
        }
    }
    None
}

/// Check if a player has three in a row
pub fn has_won(board: &Board, player: Player) -> bool {
    let target = player.to_cell();
    LINES
        .iter()
        .any(|line| line.iter().all(|&(row, col)| board.get(row, col) == target))
}
