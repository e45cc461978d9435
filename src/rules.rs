use serde::{Deserialize, Serialize};

use crate::board::{Board, CellId, Player};

pub type Line = [CellId; 3];

const fn cell(index: u8) -> CellId {
    match CellId::new(index) {
        Some(cell) => cell,
        None => panic!("winning line index out of range"),
    }
}

/// The 8 winning lines: rows top to bottom, then columns left to right, then
/// both diagonals. `evaluate` checks them in this order and reports the first
/// complete one, so the order is part of the contract.
pub const WIN_LINES: [Line; 8] = [
    [cell(0), cell(1), cell(2)],
    [cell(3), cell(4), cell(5)],
    [cell(6), cell(7), cell(8)],
    [cell(0), cell(3), cell(6)],
    [cell(1), cell(4), cell(7)],
    [cell(2), cell(5), cell(8)],
    [cell(0), cell(4), cell(8)],
    [cell(2), cell(4), cell(6)],
];

#[derive(Debug, PartialEq, Eq, Clone, Copy, Serialize, Deserialize)]
pub enum Conclusion {
    Win { player: Player, line: Line },
    Draw,
}

/// Pure win/draw check. `None` means the game is still open.
pub fn evaluate(board: &Board) -> Option<Conclusion> {
    for line in WIN_LINES {
        let [a, b, c] = line;
        if let Some(player) = board[a] {
            if board[b] == Some(player) && board[c] == Some(player) {
                return Some(Conclusion::Win { player, line });
            }
        }
    }

    if board.is_full() {
        return Some(Conclusion::Draw);
    }

    None
}

/// Whether `player` holds a complete line. Used by the move-selector to probe
/// hypothetical placements.
pub(crate) fn wins(board: &Board, player: Player) -> bool {
    WIN_LINES.iter().any(|&[a, b, c]| {
        board[a] == Some(player) && board[b] == Some(player) && board[c] == Some(player)
    })
}
