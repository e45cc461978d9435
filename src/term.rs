use std::{
    io::{self, Write},
    time::Duration,
};

use crate::board::CellId;
use crate::session::{GameSession, Mode, MoveError, Status};

const THINK_DELAY: Duration = Duration::from_millis(700);

pub async fn play(mode: Mode) -> anyhow::Result<()> {
    let mut session = GameSession::new(mode);
    let stdin = io::stdin();
    let mut stdout = io::stdout();
    let mut input = String::new();

    loop {
        println!("\n{}\n", session.board());

        match session.status() {
            Status::Won { player, .. } => {
                println!("{player} won!");
                break;
            }
            Status::Drawn => {
                println!("Draw.");
                break;
            }
            Status::InProgress => {}
        }

        if let Some(ticket) = session.begin_computer_move() {
            print!("{} is thinking...", session.turn());
            stdout.flush()?;
            tokio::time::sleep(THINK_DELAY).await;
            session.complete_computer_move(ticket);
            println!();
            continue;
        }

        loop {
            input.clear();
            print!("{}'s turn (0-8): ", session.turn());
            stdout.flush()?;
            stdin.read_line(&mut input)?;
            let Ok(cell) = input.trim().parse::<CellId>() else {
                println!("Invalid input! Try again.");
                continue;
            };
            match session.request_move(cell.index()) {
                Ok(()) => break,
                Err(MoveError::CellOccupied) => println!("Cell already marked. Try again."),
                Err(err) => println!("{err}. Try again."),
            }
        }
    }

    Ok(())
}
