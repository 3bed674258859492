use std::io::BufRead;

use tictactoe_engine::games::tictactoe::{BOARD_SIZE, CELL_COUNT, Difficulty, Position, SessionCommand};
use tokio::sync::mpsc::UnboundedSender;

pub fn parse_command(line: &str) -> Result<SessionCommand, String> {
    let trimmed = line.trim().to_lowercase();
    match trimmed.as_str() {
        "e" | "easy" => return Ok(SessionCommand::StartGame(Difficulty::Easy)),
        "h" | "hard" => return Ok(SessionCommand::StartGame(Difficulty::Hard)),
        "q" | "quit" | "exit" => return Ok(SessionCommand::Quit),
        _ => {}
    }

    let numbers: Vec<usize> = trimmed
        .split(|c: char| c.is_whitespace() || c == ',')
        .filter(|part| !part.is_empty())
        .map(|part| part.parse::<usize>())
        .collect::<Result<_, _>>()
        .map_err(|_| format!("Unrecognised input: '{}'", line.trim()))?;

    let position = match numbers.as_slice() {
        [cell] if (1..=CELL_COUNT).contains(cell) => Position::from_index(cell - 1),
        [row, col] if *row < BOARD_SIZE && *col < BOARD_SIZE => Some(Position::new(*row, *col)),
        _ => None,
    }
    .ok_or_else(|| format!("No such cell: '{}'", line.trim()))?;

    Ok(SessionCommand::PlayerMove {
        row: position.row,
        col: position.col,
    })
}

// Blocking reader meant for a dedicated thread; end of input ends the session.
pub fn read_commands(reader: impl BufRead, command_tx: UnboundedSender<SessionCommand>) {
    for line in reader.lines() {
        let Ok(line) = line else {
            break;
        };
        if line.trim().is_empty() {
            continue;
        }
        match parse_command(&line) {
            Ok(command) => {
                let is_quit = command == SessionCommand::Quit;
                if command_tx.send(command).is_err() || is_quit {
                    return;
                }
            }
            Err(message) => println!("{}", message),
        }
    }
    let _ = command_tx.send(SessionCommand::Quit);
}
