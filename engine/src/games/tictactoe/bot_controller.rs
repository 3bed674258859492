use crate::games::SessionRng;
use super::board::{Board, FreeCells};
use super::minimax::Minimax;
use super::types::{Difficulty, Position, SideAssignment};

pub struct BotInput<'a> {
    pub board: &'a Board,
    pub free_cells: &'a FreeCells,
    pub sides: SideAssignment,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BotMove {
    pub position: Position,
    pub nodes_searched: u64,
}

pub fn calculate_move(
    difficulty: Difficulty,
    input: BotInput<'_>,
    rng: &mut SessionRng,
) -> Option<BotMove> {
    match difficulty {
        Difficulty::Easy => calculate_random_move(input.free_cells, rng),
        Difficulty::Hard => calculate_minimax_move(input.board, input.sides),
    }
}

pub fn calculate_random_move(free_cells: &FreeCells, rng: &mut SessionRng) -> Option<BotMove> {
    if free_cells.is_empty() {
        return None;
    }
    let slot = rng.random_range(0..free_cells.len());
    free_cells.get(slot).map(|position| BotMove {
        position,
        nodes_searched: 0,
    })
}

pub fn calculate_minimax_move(board: &Board, sides: SideAssignment) -> Option<BotMove> {
    let mut scratch = board.clone();
    let mut minimax = Minimax::new(sides);
    let position = minimax.best_move(&mut scratch)?;
    Some(BotMove {
        position,
        nodes_searched: minimax.nodes(),
    })
}
