use crate::games::SessionRng;
use crate::log;
use super::board::Board;
use super::bot_controller::{BotInput, calculate_move};
use super::game_state::{AppliedMove, InvalidMove, TicTacToeGameState};
use super::observer::{CellHandle, GameObserver};
use super::types::{
    BOARD_SIZE, Difficulty, GamePhase, GameResult, Position, SideAssignment, TurnState,
    WinningLine,
};

pub struct GameController<H: CellHandle = ()> {
    rng: SessionRng,
    state: Option<TicTacToeGameState>,
    cells: [[Option<H>; BOARD_SIZE]; BOARD_SIZE],
    observers: Vec<Box<dyn GameObserver>>,
    nodes_searched: u64,
    games_started: u64,
}

impl<H: CellHandle> GameController<H> {
    pub fn new(rng: SessionRng) -> Self {
        Self {
            rng,
            state: None,
            cells: std::array::from_fn(|_| std::array::from_fn(|_| None)),
            observers: Vec::new(),
            nodes_searched: 0,
            games_started: 0,
        }
    }

    pub fn seed(&self) -> u64 {
        self.rng.seed()
    }

    pub fn register_cell(&mut self, row: usize, col: usize, handle: H) -> Result<(), InvalidMove> {
        if !Position::new(row, col).is_on_board() {
            return Err(InvalidMove::OutOfBounds { row, col });
        }
        self.cells[row][col] = Some(handle);
        Ok(())
    }

    pub fn subscribe(&mut self, observer: Box<dyn GameObserver>) {
        self.observers.push(observer);
    }

    pub fn phase(&self) -> GamePhase {
        self.state
            .as_ref()
            .map_or(GamePhase::NotStarted, |state| state.phase)
    }

    pub fn state(&self) -> Option<&TicTacToeGameState> {
        self.state.as_ref()
    }

    pub fn board(&self) -> Option<&Board> {
        self.state.as_ref().map(|state| &state.board)
    }

    pub fn sides(&self) -> Option<SideAssignment> {
        self.state.as_ref().map(|state| state.sides)
    }

    pub fn winning_line(&self) -> Option<WinningLine> {
        self.state.as_ref().and_then(|state| state.winning_line())
    }

    pub fn is_playable(&self, row: usize, col: usize) -> bool {
        self.state
            .as_ref()
            .is_some_and(|state| state.is_playable(row, col))
    }

    pub fn nodes_searched(&self) -> u64 {
        self.nodes_searched
    }

    pub fn games_started(&self) -> u64 {
        self.games_started
    }

    pub fn start_game(&mut self, difficulty: Difficulty) -> Result<GamePhase, InvalidMove> {
        if let GamePhase::InProgress(_) = self.phase() {
            return Err(InvalidMove::SessionInProgress);
        }

        let sides = if self.rng.random_bool() {
            SideAssignment::human_first()
        } else {
            SideAssignment::ai_first()
        };

        self.state = Some(TicTacToeGameState::new(difficulty, sides));
        self.games_started += 1;
        log!(
            "Game {} started: difficulty {:?}, human {:?}, ai {:?}, seed {}",
            self.games_started,
            difficulty,
            sides.human,
            sides.ai,
            self.rng.seed()
        );

        for observer in self.observers.iter_mut() {
            observer.on_game_started();
        }
        self.for_each_cell(|cell| cell.set_input_enabled(true));

        if sides.first_turn() == TurnState::Ai {
            self.ai_move()?;
        }

        Ok(self.phase())
    }

    pub fn player_move(&mut self, row: usize, col: usize) -> Result<AppliedMove, InvalidMove> {
        self.commit(TurnState::Player, Position::new(row, col))
    }

    pub fn ai_move(&mut self) -> Result<AppliedMove, InvalidMove> {
        let state = self.state.as_ref().ok_or(InvalidMove::NotStarted)?;
        match state.phase {
            GamePhase::InProgress(TurnState::Ai) => {}
            GamePhase::InProgress(TurnState::Player) => return Err(InvalidMove::NotYourTurn),
            GamePhase::Ended(_) => return Err(InvalidMove::GameOver),
            GamePhase::NotStarted => return Err(InvalidMove::NotStarted),
        }

        let input = BotInput {
            board: &state.board,
            free_cells: &state.free_cells,
            sides: state.sides,
        };
        let Some(bot_move) = calculate_move(state.difficulty, input, &mut self.rng) else {
            return Err(InvalidMove::GameOver);
        };

        self.nodes_searched += bot_move.nodes_searched;
        log!(
            "AI chose ({}, {}) after searching {} nodes",
            bot_move.position.row,
            bot_move.position.col,
            bot_move.nodes_searched
        );
        self.commit(TurnState::Ai, bot_move.position)
    }

    fn commit(&mut self, turn: TurnState, position: Position) -> Result<AppliedMove, InvalidMove> {
        let state = self.state.as_mut().ok_or(InvalidMove::NotStarted)?;

        let applied = match state.place_mark(turn, position) {
            Ok(applied) => applied,
            Err(e) => {
                log!(
                    "Rejected {:?} move at ({}, {}): {}",
                    turn,
                    position.row,
                    position.col,
                    e
                );
                return Err(e);
            }
        };

        log!(
            "{:?} placed {:?} at ({}, {})",
            turn,
            applied.mark,
            position.row,
            position.col
        );

        if let Some(cell) = self.cells[position.row][position.col].as_mut() {
            cell.show_mark(applied.mark);
            cell.set_input_enabled(false);
        }

        if let GamePhase::Ended(result) = applied.phase {
            self.finish(result);
        }

        Ok(applied)
    }

    fn finish(&mut self, result: GameResult) {
        log!("Game {} ended: {:?}", self.games_started, result);
        self.for_each_cell(|cell| cell.set_input_enabled(false));
        for observer in self.observers.iter_mut() {
            observer.on_game_ended(result);
        }
    }

    fn for_each_cell(&mut self, mut f: impl FnMut(&mut H)) {
        self.cells.iter_mut().flatten().flatten().for_each(|cell| f(cell));
    }
}
