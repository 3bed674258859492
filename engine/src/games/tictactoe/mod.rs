mod board;
mod bot_controller;
mod controller;
mod game_state;
mod minimax;
mod observer;
mod session;
mod settings;
mod types;
mod win_detector;

pub use board::{Board, FreeCells};
pub use bot_controller::{BotInput, BotMove, calculate_minimax_move, calculate_move, calculate_random_move};
pub use controller::GameController;
pub use game_state::{AppliedMove, InvalidMove, TicTacToeGameState};
pub use minimax::{AI_WIN_SCORE, DRAW_SCORE, HUMAN_WIN_SCORE, Minimax, ScopedMark, search};
pub use observer::{CellHandle, GameObserver};
pub use session::{SessionCommand, TicTacToeSession};
pub use settings::{DEFAULT_AI_MOVE_DELAY, TicTacToeSessionSettings};
pub use types::{
    BOARD_SIZE, CELL_COUNT, Difficulty, GamePhase, GameResult, Mark, Outcome, Position,
    SideAssignment, TurnState, WinningLine,
};
pub use win_detector::{check_win, check_win_with_line, evaluate};
