use super::types::{BOARD_SIZE, CELL_COUNT, Mark, Position};

#[derive(Clone, Debug, PartialEq, Eq, Default)]
pub struct Board {
    cells: [[Mark; BOARD_SIZE]; BOARD_SIZE],
}

impl Board {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, row: usize, col: usize) -> Mark {
        self.cells[row][col]
    }

    pub fn is_empty(&self, row: usize, col: usize) -> bool {
        self.cells[row][col] == Mark::Empty
    }

    // Callers check emptiness first; overwriting a mark is a logic error.
    pub fn place(&mut self, row: usize, col: usize, mark: Mark) {
        debug_assert!(mark != Mark::Empty, "place requires a player mark");
        debug_assert!(
            self.is_empty(row, col),
            "cell ({}, {}) is already marked",
            row,
            col
        );
        self.cells[row][col] = mark;
    }

    pub fn clear(&mut self, row: usize, col: usize) {
        self.cells[row][col] = Mark::Empty;
    }

    pub fn rows(&self) -> &[[Mark; BOARD_SIZE]; BOARD_SIZE] {
        &self.cells
    }

    pub fn available_moves(&self) -> Vec<Position> {
        Position::all()
            .filter(|pos| self.is_empty(pos.row, pos.col))
            .collect()
    }

    pub fn empty_count(&self) -> usize {
        self.cells
            .iter()
            .flatten()
            .filter(|&&cell| cell == Mark::Empty)
            .count()
    }

    pub fn occupied_count(&self) -> usize {
        CELL_COUNT - self.empty_count()
    }

    pub fn is_full(&self) -> bool {
        self.empty_count() == 0
    }

    pub fn render(&self) -> String {
        let mut result = String::new();
        for (row, marks) in self.rows().iter().enumerate() {
            for (col, mark) in marks.iter().enumerate() {
                let symbol = match mark {
                    Mark::Empty => char::from_digit((row * BOARD_SIZE + col + 1) as u32, 10)
                        .unwrap_or('?'),
                    _ => mark.symbol(),
                };
                result.push(symbol);
                if col + 1 < BOARD_SIZE {
                    result.push('|');
                }
            }
            if row + 1 < BOARD_SIZE {
                result.push_str("\n-+-+-\n");
            }
        }
        result
    }
}

// Linear indices (row-major) of cells not yet played, kept in ascending
// insertion order so random sampling is reproducible for a given seed.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FreeCells {
    indices: Vec<usize>,
}

impl FreeCells {
    pub fn full() -> Self {
        Self {
            indices: (0..CELL_COUNT).collect(),
        }
    }

    pub fn len(&self) -> usize {
        self.indices.len()
    }

    pub fn is_empty(&self) -> bool {
        self.indices.is_empty()
    }

    pub fn get(&self, slot: usize) -> Option<Position> {
        self.indices.get(slot).copied().and_then(Position::from_index)
    }

    pub fn contains(&self, position: Position) -> bool {
        self.indices.contains(&position.index())
    }

    pub fn remove(&mut self, position: Position) -> bool {
        match self.indices.iter().position(|&i| i == position.index()) {
            Some(slot) => {
                self.indices.remove(slot);
                true
            }
            None => false,
        }
    }

    pub fn positions(&self) -> impl Iterator<Item = Position> + '_ {
        self.indices.iter().filter_map(|&i| Position::from_index(i))
    }

    pub fn is_consistent_with(&self, board: &Board) -> bool {
        self.len() + board.occupied_count() == CELL_COUNT
            && self.positions().all(|pos| board.is_empty(pos.row, pos.col))
    }
}

impl Default for FreeCells {
    fn default() -> Self {
        Self::full()
    }
}
