//! Heuristic move-selector for the automated opponent.
//!
//! A greedy one-ply lookahead, deliberately weaker than minimax: it takes an
//! immediate win, blocks an immediate loss, then prefers center, a random
//! corner, and finally any random empty cell. It does not see forks.

use rand::Rng;
use tracing::trace;

use crate::board::{Board, CellId, Player};
use crate::rules;

/// Pick a cell for `computer` on `board`, or `None` when no cell is empty.
///
/// The RNG only breaks ties in the corner and fallback branches; the win and
/// block branches scan empty cells in ascending index order and are fully
/// deterministic.
pub fn choose_move<R: Rng>(board: &Board, computer: Player, rng: &mut R) -> Option<CellId> {
    let available: Vec<CellId> = board.empty_cells().collect();
    if available.is_empty() {
        return None;
    }

    if let Some(cell) = completing_cell(board, computer, &available) {
        trace!(cell = cell.index(), "taking the win");
        return Some(cell);
    }

    if let Some(cell) = completing_cell(board, !computer, &available) {
        trace!(cell = cell.index(), "blocking the opponent");
        return Some(cell);
    }

    if available.contains(&CellId::CENTER) {
        return Some(CellId::CENTER);
    }

    let corners: Vec<CellId> = CellId::CORNERS
        .iter()
        .copied()
        .filter(|corner| available.contains(corner))
        .collect();
    if !corners.is_empty() {
        return Some(corners[rng.gen_range(0..corners.len())]);
    }

    Some(available[rng.gen_range(0..available.len())])
}

/// First empty cell (ascending) whose placement completes a line for `player`.
fn completing_cell(board: &Board, player: Player, available: &[CellId]) -> Option<CellId> {
    available.iter().copied().find(|&cell| {
        let mut probe = board.clone();
        probe.mark(cell, player);
        rules::wins(&probe, player)
    })
}
