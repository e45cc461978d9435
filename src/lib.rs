//! Tic-tac-toe engine: board state, win/draw rules, a heuristic computer
//! opponent and a session controller, kept free of presentation concerns.

pub mod ai;
pub mod board;
pub mod rules;
pub mod session;
pub mod term;

pub use crate::board::{Board, CellId, Player};
pub use crate::rules::{evaluate, Conclusion, Line, WIN_LINES};
pub use crate::session::{GameSession, Mode, MoveError, MoveTicket, Status};
