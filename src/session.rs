use rand::{rngs::StdRng, Rng, SeedableRng};
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::debug;

use crate::ai;
use crate::board::{Board, CellId, Player};
use crate::rules::{self, Conclusion, Line};

#[derive(Debug, PartialEq, Eq, Clone, Copy, Serialize, Deserialize)]
pub enum Mode {
    PlayerVsPlayer,
    PlayerVsComputer { computer: Player },
}

impl Default for Mode {
    fn default() -> Self {
        Mode::PlayerVsComputer {
            computer: Player::O,
        }
    }
}

#[derive(Debug, PartialEq, Eq, Clone, Copy, Serialize, Deserialize)]
pub enum Status {
    InProgress,
    Won { player: Player, line: Line },
    Drawn,
}

#[derive(Debug, Error, PartialEq, Eq, Clone, Copy)]
pub enum MoveError {
    #[error("cell index out of range")]
    InvalidCell,
    #[error("cell already marked")]
    CellOccupied,
    #[error("not your turn")]
    NotYourTurn,
    #[error("game is over")]
    GameOver,
}

/// Handle for a deferred computer move.
///
/// `begin_computer_move` captures the session generation in a ticket; whoever
/// schedules the "thinking" delay hands the ticket back to
/// `complete_computer_move`, which discards it if a reset happened in between.
#[derive(Debug, Clone, Copy)]
pub struct MoveTicket {
    generation: u64,
}

/// A full round of tic-tac-toe: board, turn order, win/draw status and the
/// deferred computer move, behind read accessors for the presentation layer.
#[derive(Debug)]
pub struct GameSession<R = StdRng> {
    board: Board,
    turn: Player,
    mode: Mode,
    status: Status,
    generation: u64,
    computer_move_pending: bool,
    rng: R,
}

impl GameSession<StdRng> {
    pub fn new(mode: Mode) -> Self {
        Self::with_rng(mode, StdRng::from_entropy())
    }
}

impl<R: Rng> GameSession<R> {
    /// Build a session over an explicit RNG so tests can seed the tie-breaks.
    pub fn with_rng(mode: Mode, rng: R) -> Self {
        Self {
            board: Board::default(),
            turn: Player::X,
            mode,
            status: Status::InProgress,
            generation: 0,
            computer_move_pending: false,
            rng,
        }
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn status(&self) -> Status {
        self.status
    }

    pub fn turn(&self) -> Player {
        self.turn
    }

    pub fn mode(&self) -> Mode {
        self.mode
    }

    /// The completed line, for the collaborator's strike-through overlay.
    pub fn winning_line(&self) -> Option<Line> {
        match self.status {
            Status::Won { line, .. } => Some(line),
            _ => None,
        }
    }

    /// True between `begin_computer_move` and the matching completion, so the
    /// presentation layer can gate input without duplicating engine state.
    pub fn is_computer_turn_pending(&self) -> bool {
        self.computer_move_pending
    }

    fn computer(&self) -> Option<Player> {
        match self.mode {
            Mode::PlayerVsComputer { computer } => Some(computer),
            Mode::PlayerVsPlayer => None,
        }
    }

    /// Place the current player's mark at `index`.
    ///
    /// Rejections leave the session untouched: out-of-range index, terminal
    /// status, the computer's turn (including while its deferred move is
    /// pending), or an occupied cell.
    pub fn request_move(&mut self, index: u8) -> Result<(), MoveError> {
        let cell = CellId::new(index).ok_or(MoveError::InvalidCell)?;
        if self.status != Status::InProgress {
            return Err(MoveError::GameOver);
        }
        if self.computer() == Some(self.turn) {
            return Err(MoveError::NotYourTurn);
        }
        if self.board[cell].is_some() {
            return Err(MoveError::CellOccupied);
        }

        self.apply(cell);
        Ok(())
    }

    /// Arm the deferred computer move and return its ticket.
    ///
    /// `None` unless the mode has a computer, it is its turn, the game is in
    /// progress and no move is already pending.
    pub fn begin_computer_move(&mut self) -> Option<MoveTicket> {
        if self.status != Status::InProgress || self.computer_move_pending {
            return None;
        }
        if self.computer() != Some(self.turn) {
            return None;
        }

        self.computer_move_pending = true;
        debug!(generation = self.generation, "computer move armed");
        Some(MoveTicket {
            generation: self.generation,
        })
    }

    /// Compute and apply the computer's move now.
    ///
    /// Returns false without touching the board when the ticket is stale,
    /// i.e. the session was reset after the ticket was issued.
    pub fn complete_computer_move(&mut self, ticket: MoveTicket) -> bool {
        if ticket.generation != self.generation {
            debug!(
                ticket = ticket.generation,
                current = self.generation,
                "discarding stale computer move"
            );
            return false;
        }
        self.computer_move_pending = false;

        let computer = match self.computer() {
            Some(player) if player == self.turn && self.status == Status::InProgress => player,
            _ => return false,
        };
        let Some(cell) = ai::choose_move(&self.board, computer, &mut self.rng) else {
            return false;
        };

        self.apply(cell);
        true
    }

    /// Clear the board and return to X's turn. Any in-flight computer move
    /// ticket becomes stale.
    pub fn reset(&mut self) {
        self.board = Board::default();
        self.turn = Player::X;
        self.status = Status::InProgress;
        self.computer_move_pending = false;
        self.generation = self.generation.wrapping_add(1);
        debug!(generation = self.generation, "session reset");
    }

    /// Switch mode and restart the round, mirroring the mode-select behavior.
    pub fn set_mode(&mut self, mode: Mode) {
        self.mode = mode;
        self.reset();
    }

    fn apply(&mut self, cell: CellId) {
        self.board.mark(cell, self.turn);
        debug!(player = %self.turn, cell = cell.index(), "move accepted");

        match rules::evaluate(&self.board) {
            Some(Conclusion::Win { player, line }) => {
                debug!(winner = %player, "game won");
                self.status = Status::Won { player, line };
            }
            Some(Conclusion::Draw) => {
                debug!("game drawn");
                self.status = Status::Drawn;
            }
            None => self.turn = !self.turn,
        }
    }
}
