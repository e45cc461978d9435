use tictactoe::{
    evaluate, Board, Conclusion, GameSession, Mode, MoveError, Player, Status, WIN_LINES,
};

fn board_with(marks: &[(usize, Player)]) -> Board {
    let mut cells = [None; 9];
    for &(index, player) in marks {
        cells[index] = Some(player);
    }
    Board::from(cells)
}

fn vs_computer() -> Mode {
    Mode::PlayerVsComputer {
        computer: Player::O,
    }
}

#[test]
fn evaluate_open_boards() {
    assert_eq!(evaluate(&Board::default()), None);
    let partial = board_with(&[(0, Player::X), (4, Player::O)]);
    assert_eq!(evaluate(&partial), None);
}

#[test]
fn evaluate_detects_every_line() {
    for line in WIN_LINES {
        let marks: Vec<(usize, Player)> = line
            .iter()
            .map(|cell| (cell.index() as usize, Player::X))
            .collect();
        let board = board_with(&marks);
        assert_eq!(
            evaluate(&board),
            Some(Conclusion::Win {
                player: Player::X,
                line
            })
        );
    }
}

#[test]
fn evaluate_is_deterministic_on_malformed_boards() {
    // Two complete lines at once; the first in enumeration order wins.
    let board = board_with(&[
        (0, Player::X),
        (1, Player::X),
        (2, Player::X),
        (3, Player::O),
        (4, Player::O),
        (5, Player::O),
    ]);
    let first = evaluate(&board);
    assert_eq!(first, evaluate(&board));
    assert_eq!(
        first,
        Some(Conclusion::Win {
            player: Player::X,
            line: WIN_LINES[0]
        })
    );
}

#[test]
fn evaluate_full_board_without_line_is_draw() {
    // X O X
    // X O O
    // O X X
    let board = board_with(&[
        (0, Player::X),
        (1, Player::O),
        (2, Player::X),
        (3, Player::X),
        (4, Player::O),
        (5, Player::O),
        (6, Player::O),
        (7, Player::X),
        (8, Player::X),
    ]);
    assert_eq!(evaluate(&board), Some(Conclusion::Draw));
}

#[test]
fn rejected_moves_leave_board_untouched() {
    let mut session = GameSession::new(Mode::PlayerVsPlayer);

    assert_eq!(session.request_move(9), Err(MoveError::InvalidCell));
    assert_eq!(session.board().mark_count(), 0);

    session.request_move(0).unwrap();
    assert_eq!(session.request_move(0), Err(MoveError::CellOccupied));
    assert_eq!(session.board().mark_count(), 1);
    assert_eq!(session.turn(), Player::O);
}

#[test]
fn turn_alternation_starts_with_x() {
    let mut session = GameSession::new(Mode::PlayerVsPlayer);
    // No line completes in this sequence.
    let moves = [4u8, 0, 1, 7, 6];
    for (accepted, cell) in moves.into_iter().enumerate() {
        let expected = if accepted % 2 == 0 {
            Player::X
        } else {
            Player::O
        };
        assert_eq!(session.turn(), expected);
        session.request_move(cell).unwrap();
    }
    assert_eq!(session.status(), Status::InProgress);
    assert_eq!(session.turn(), Player::O);
}

#[test]
fn terminal_session_rejects_moves_until_reset() {
    let mut session = GameSession::new(Mode::PlayerVsPlayer);
    for cell in [0u8, 3, 1, 4, 2] {
        session.request_move(cell).unwrap();
    }
    assert_eq!(
        session.status(),
        Status::Won {
            player: Player::X,
            line: WIN_LINES[0]
        }
    );
    assert_eq!(session.winning_line(), Some(WIN_LINES[0]));

    assert_eq!(session.request_move(5), Err(MoveError::GameOver));
    assert_eq!(session.board().mark_count(), 5);

    session.reset();
    assert_eq!(session.status(), Status::InProgress);
    assert_eq!(session.turn(), Player::X);
    assert_eq!(session.board().mark_count(), 0);
    session.request_move(5).unwrap();
}

#[test]
fn human_cannot_move_on_computers_turn() {
    let mut session = GameSession::new(vs_computer());
    session.request_move(0).unwrap();
    assert_eq!(session.turn(), Player::O);

    assert_eq!(session.request_move(1), Err(MoveError::NotYourTurn));

    assert!(!session.is_computer_turn_pending());
    let ticket = session.begin_computer_move().unwrap();
    assert!(session.is_computer_turn_pending());
    assert_eq!(session.request_move(1), Err(MoveError::NotYourTurn));

    assert!(session.complete_computer_move(ticket));
    assert!(!session.is_computer_turn_pending());
    assert_eq!(session.turn(), Player::X);
    assert_eq!(session.board().mark_count(), 2);
}

#[test]
fn reset_discards_pending_computer_move() {
    let mut session = GameSession::new(vs_computer());
    session.request_move(0).unwrap();
    let ticket = session.begin_computer_move().unwrap();

    session.reset();
    assert!(!session.is_computer_turn_pending());

    // The deferred callback fires after the reset; its effect is discarded.
    assert!(!session.complete_computer_move(ticket));
    assert_eq!(session.board().mark_count(), 0);
    assert_eq!(session.status(), Status::InProgress);
    assert_eq!(session.turn(), Player::X);
}

#[test]
fn set_mode_restarts_the_round() {
    let mut session = GameSession::new(Mode::PlayerVsPlayer);
    session.request_move(4).unwrap();

    session.set_mode(vs_computer());
    assert_eq!(session.mode(), vs_computer());
    assert_eq!(session.board().mark_count(), 0);
    assert_eq!(session.turn(), Player::X);
}

#[test]
fn begin_requires_computers_turn() {
    let mut session = GameSession::new(vs_computer());
    // X to move: nothing to arm yet.
    assert!(session.begin_computer_move().is_none());

    let mut pvp = GameSession::new(Mode::PlayerVsPlayer);
    assert!(pvp.begin_computer_move().is_none());
}

#[test]
fn full_round_never_sticks_in_progress() {
    let mut session = GameSession::new(vs_computer());

    for _ in 0..9 {
        if session.status() != Status::InProgress {
            break;
        }
        if let Some(ticket) = session.begin_computer_move() {
            assert!(session.complete_computer_move(ticket));
        } else {
            // The human plays the lowest empty cell.
            let cell = session.board().empty_cells().next().unwrap();
            session.request_move(cell.index()).unwrap();
        }
    }

    assert_ne!(session.status(), Status::InProgress);
    // X: 0, O: center, X: 1, O blocks 2, X: 3, O wins on the anti-diagonal.
    assert_eq!(
        session.status(),
        Status::Won {
            player: Player::O,
            line: WIN_LINES[7]
        }
    );
}
