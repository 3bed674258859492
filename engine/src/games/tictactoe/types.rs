use serde::{Deserialize, Serialize};

pub const BOARD_SIZE: usize = 3;
pub const CELL_COUNT: usize = BOARD_SIZE * BOARD_SIZE;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
pub enum Mark {
    #[default]
    Empty,
    X,
    O,
}

impl Mark {
    pub fn opponent(&self) -> Option<Mark> {
        match self {
            Mark::X => Some(Mark::O),
            Mark::O => Some(Mark::X),
            Mark::Empty => None,
        }
    }

    pub fn symbol(&self) -> char {
        match self {
            Mark::Empty => ' ',
            Mark::X => 'X',
            Mark::O => 'O',
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Position {
    pub row: usize,
    pub col: usize,
}

impl Position {
    pub fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }

    pub fn from_index(index: usize) -> Option<Self> {
        if index >= CELL_COUNT {
            return None;
        }
        Some(Self::new(index / BOARD_SIZE, index % BOARD_SIZE))
    }

    pub fn index(&self) -> usize {
        self.row * BOARD_SIZE + self.col
    }

    pub fn is_on_board(&self) -> bool {
        self.row < BOARD_SIZE && self.col < BOARD_SIZE
    }

    pub fn all() -> impl Iterator<Item = Position> {
        (0..CELL_COUNT).map(|index| Self::new(index / BOARD_SIZE, index % BOARD_SIZE))
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Outcome {
    Ongoing,
    Draw,
    XWon,
    OWon,
}

impl Outcome {
    pub fn is_terminal(&self) -> bool {
        *self != Outcome::Ongoing
    }

    pub fn winner(&self) -> Option<Mark> {
        match self {
            Outcome::XWon => Some(Mark::X),
            Outcome::OWon => Some(Mark::O),
            Outcome::Ongoing | Outcome::Draw => None,
        }
    }

    pub fn won_by(mark: Mark) -> Option<Outcome> {
        match mark {
            Mark::X => Some(Outcome::XWon),
            Mark::O => Some(Outcome::OWon),
            Mark::Empty => None,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct WinningLine {
    pub mark: Mark,
    pub cells: [Position; BOARD_SIZE],
}

impl WinningLine {
    pub fn new(mark: Mark, cells: [Position; BOARD_SIZE]) -> Self {
        Self { mark, cells }
    }

    pub fn contains(&self, position: Position) -> bool {
        self.cells.contains(&position)
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Difficulty {
    Easy,
    Hard,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TurnState {
    Player,
    Ai,
}

impl TurnState {
    pub fn flipped(&self) -> TurnState {
        match self {
            TurnState::Player => TurnState::Ai,
            TurnState::Ai => TurnState::Player,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GameResult {
    HumanWins,
    AiWins,
    Draw,
}

impl GameResult {
    pub fn code(&self) -> i32 {
        match self {
            GameResult::Draw => -1,
            GameResult::HumanWins => 0,
            GameResult::AiWins => 1,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GamePhase {
    NotStarted,
    InProgress(TurnState),
    Ended(GameResult),
}

// X always moves first, so whoever holds X owns the opening turn.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SideAssignment {
    pub human: Mark,
    pub ai: Mark,
}

impl SideAssignment {
    pub fn human_first() -> Self {
        Self {
            human: Mark::X,
            ai: Mark::O,
        }
    }

    pub fn ai_first() -> Self {
        Self {
            human: Mark::O,
            ai: Mark::X,
        }
    }

    pub fn first_turn(&self) -> TurnState {
        if self.ai == Mark::X {
            TurnState::Ai
        } else {
            TurnState::Player
        }
    }

    pub fn mark_for(&self, turn: TurnState) -> Mark {
        match turn {
            TurnState::Player => self.human,
            TurnState::Ai => self.ai,
        }
    }

    pub fn result_for(&self, outcome: Outcome) -> Option<GameResult> {
        match outcome {
            Outcome::Ongoing => None,
            Outcome::Draw => Some(GameResult::Draw),
            Outcome::XWon | Outcome::OWon => {
                if outcome.winner() == Some(self.ai) {
                    Some(GameResult::AiWins)
                } else {
                    Some(GameResult::HumanWins)
                }
            }
        }
    }
}
