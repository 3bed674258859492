use std::cell::RefCell;
use std::io::Write;
use std::rc::Rc;

use tictactoe_engine::games::tictactoe::{
    BOARD_SIZE, Board, CellHandle, GameObserver, GameResult, Mark, Position, check_win_with_line,
};

pub struct ConsoleView<W: Write> {
    board: Board,
    input_enabled: [[bool; BOARD_SIZE]; BOARD_SIZE],
    out: W,
}

pub type SharedView<W> = Rc<RefCell<ConsoleView<W>>>;

impl<W: Write> ConsoleView<W> {
    pub fn new(out: W) -> Self {
        Self {
            board: Board::new(),
            input_enabled: [[false; BOARD_SIZE]; BOARD_SIZE],
            out,
        }
    }

    pub fn shared(out: W) -> SharedView<W> {
        Rc::new(RefCell::new(Self::new(out)))
    }

    #[cfg(test)]
    pub fn board(&self) -> &Board {
        &self.board
    }

    #[cfg(test)]
    pub fn accepts_input(&self) -> bool {
        self.input_enabled.iter().flatten().any(|&enabled| enabled)
    }

    #[cfg(test)]
    pub fn output(&self) -> &W {
        &self.out
    }

    fn reset(&mut self) {
        self.board = Board::new();
    }

    fn show_mark(&mut self, position: Position, mark: Mark) {
        if self.board.is_empty(position.row, position.col) {
            self.board.place(position.row, position.col, mark);
        }
        self.draw();
    }

    fn draw(&mut self) {
        let _ = writeln!(self.out, "\n{}\n", self.board.render());
    }

    fn announce(&mut self, result: GameResult) {
        let message = match result {
            GameResult::Draw => "Tie",
            GameResult::AiWins => "AI wins",
            GameResult::HumanWins => "Player wins",
        };
        let _ = writeln!(self.out, "{}", message);

        if let Some(line) = check_win_with_line(&self.board) {
            let cells: Vec<String> = line
                .cells
                .iter()
                .map(|cell| (cell.index() + 1).to_string())
                .collect();
            let _ = writeln!(self.out, "Winning line: {}", cells.join("-"));
        }
        let _ = writeln!(self.out, "Type 'easy' or 'hard' to play again, 'quit' to exit.");
    }
}

pub struct ConsoleCell<W: Write> {
    position: Position,
    view: SharedView<W>,
}

impl<W: Write> ConsoleCell<W> {
    pub fn new(position: Position, view: SharedView<W>) -> Self {
        Self { position, view }
    }
}

impl<W: Write> CellHandle for ConsoleCell<W> {
    fn show_mark(&mut self, mark: Mark) {
        self.view.borrow_mut().show_mark(self.position, mark);
    }

    fn set_input_enabled(&mut self, enabled: bool) {
        let mut view = self.view.borrow_mut();
        view.input_enabled[self.position.row][self.position.col] = enabled;
    }
}

pub struct ConsoleAnnouncer<W: Write> {
    view: SharedView<W>,
}

impl<W: Write> ConsoleAnnouncer<W> {
    pub fn new(view: SharedView<W>) -> Self {
        Self { view }
    }
}

impl<W: Write> GameObserver for ConsoleAnnouncer<W> {
    fn on_game_started(&mut self) {
        let mut view = self.view.borrow_mut();
        view.reset();
        let _ = writeln!(view.out, "New game. Enter a cell number (1-9) or 'row col'.");
        view.draw();
    }

    fn on_game_ended(&mut self, result: GameResult) {
        self.view.borrow_mut().announce(result);
    }
}
