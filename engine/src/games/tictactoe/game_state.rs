use derive_more::{Display, Error};

use super::board::{Board, FreeCells};
use super::types::{
    Difficulty, GamePhase, Mark, Outcome, Position, SideAssignment, TurnState,
    WinningLine,
};
use super::win_detector::{check_win_with_line, evaluate};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, Error)]
pub enum InvalidMove {
    #[display("game has not started")]
    NotStarted,
    #[display("game is already over")]
    GameOver,
    #[display("a game is already in progress")]
    SessionInProgress,
    #[display("not your turn")]
    NotYourTurn,
    #[display("position ({row}, {col}) is out of bounds")]
    OutOfBounds { row: usize, col: usize },
    #[display("cell ({row}, {col}) is already marked")]
    CellOccupied { row: usize, col: usize },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AppliedMove {
    pub position: Position,
    pub mark: Mark,
    pub phase: GamePhase,
}

#[derive(Debug, Clone)]
pub struct TicTacToeGameState {
    pub board: Board,
    pub free_cells: FreeCells,
    pub sides: SideAssignment,
    pub difficulty: Difficulty,
    pub phase: GamePhase,
    pub last_move: Option<Position>,
}

impl TicTacToeGameState {
    pub fn new(difficulty: Difficulty, sides: SideAssignment) -> Self {
        Self {
            board: Board::new(),
            free_cells: FreeCells::full(),
            sides,
            difficulty,
            phase: GamePhase::InProgress(sides.first_turn()),
            last_move: None,
        }
    }

    pub fn current_turn(&self) -> Option<TurnState> {
        match self.phase {
            GamePhase::InProgress(turn) => Some(turn),
            GamePhase::NotStarted | GamePhase::Ended(_) => None,
        }
    }

    pub fn outcome(&self) -> Outcome {
        evaluate(&self.board)
    }

    pub fn winning_line(&self) -> Option<WinningLine> {
        check_win_with_line(&self.board)
    }

    pub fn is_playable(&self, row: usize, col: usize) -> bool {
        self.validate_move(TurnState::Player, Position::new(row, col))
            .is_ok()
    }

    pub fn validate_move(&self, turn: TurnState, position: Position) -> Result<(), InvalidMove> {
        match self.phase {
            GamePhase::NotStarted => return Err(InvalidMove::NotStarted),
            GamePhase::Ended(_) => return Err(InvalidMove::GameOver),
            GamePhase::InProgress(current) if current != turn => {
                return Err(InvalidMove::NotYourTurn);
            }
            GamePhase::InProgress(_) => {}
        }

        if !position.is_on_board() {
            return Err(InvalidMove::OutOfBounds {
                row: position.row,
                col: position.col,
            });
        }

        if !self.board.is_empty(position.row, position.col) {
            return Err(InvalidMove::CellOccupied {
                row: position.row,
                col: position.col,
            });
        }

        Ok(())
    }

    // Nothing is mutated unless the move is valid.
    pub fn place_mark(
        &mut self,
        turn: TurnState,
        position: Position,
    ) -> Result<AppliedMove, InvalidMove> {
        self.validate_move(turn, position)?;

        let mark = self.sides.mark_for(turn);
        self.board.place(position.row, position.col, mark);
        self.free_cells.remove(position);
        self.last_move = Some(position);

        self.phase = match self.sides.result_for(self.outcome()) {
            Some(result) => GamePhase::Ended(result),
            None => GamePhase::InProgress(turn.flipped()),
        };

        Ok(AppliedMove {
            position,
            mark,
            phase: self.phase,
        })
    }
}
