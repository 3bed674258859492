use tokio::sync::mpsc;

use crate::log;
use super::controller::GameController;
use super::observer::CellHandle;
use super::settings::TicTacToeSessionSettings;
use super::types::{Difficulty, GamePhase, GameResult, TurnState};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionCommand {
    StartGame(Difficulty),
    PlayerMove { row: usize, col: usize },
    Quit,
}

pub struct TicTacToeSession;

impl TicTacToeSession {
    // Runs until Quit or until every sender is dropped. The AI reply waits out
    // the pacing delay and is always completed before the next command is read.
    pub async fn run<H: CellHandle>(
        controller: &mut GameController<H>,
        settings: &TicTacToeSessionSettings,
        command_rx: &mut mpsc::UnboundedReceiver<SessionCommand>,
    ) -> Vec<GameResult> {
        let mut results = Vec::new();

        while let Some(command) = command_rx.recv().await {
            match command {
                SessionCommand::StartGame(difficulty) => {
                    match controller.start_game(difficulty) {
                        Ok(GamePhase::Ended(result)) => results.push(result),
                        Ok(_) => {}
                        Err(e) => log!("Ignoring start request: {}", e),
                    }
                }
                SessionCommand::PlayerMove { row, col } => {
                    let applied = match controller.player_move(row, col) {
                        Ok(applied) => applied,
                        Err(e) => {
                            log!("Ignoring player move at ({}, {}): {}", row, col, e);
                            continue;
                        }
                    };

                    match applied.phase {
                        GamePhase::Ended(result) => results.push(result),
                        GamePhase::InProgress(TurnState::Ai) => {
                            tokio::time::sleep(settings.ai_move_delay).await;
                            match controller.ai_move() {
                                Ok(ai_applied) => {
                                    if let GamePhase::Ended(result) = ai_applied.phase {
                                        results.push(result);
                                    }
                                }
                                Err(e) => log!("AI move failed: {}", e),
                            }
                        }
                        GamePhase::InProgress(TurnState::Player) | GamePhase::NotStarted => {}
                    }
                }
                SessionCommand::Quit => break,
            }
        }

        results
    }
}
