use std::ops::{Deref, DerefMut};

use super::board::Board;
use super::types::{Mark, Outcome, Position, SideAssignment};
use super::win_detector::evaluate;

pub const AI_WIN_SCORE: i32 = 10;
pub const HUMAN_WIN_SCORE: i32 = -10;
pub const DRAW_SCORE: i32 = 0;

// Holds a probe mark on the board and clears it when dropped, so every exit
// path of the search leaves the board as it found it.
pub struct ScopedMark<'a> {
    board: &'a mut Board,
    position: Position,
}

impl<'a> ScopedMark<'a> {
    pub fn place(board: &'a mut Board, position: Position, mark: Mark) -> Self {
        board.place(position.row, position.col, mark);
        Self { board, position }
    }
}

impl Deref for ScopedMark<'_> {
    type Target = Board;

    fn deref(&self) -> &Board {
        self.board
    }
}

impl DerefMut for ScopedMark<'_> {
    fn deref_mut(&mut self) -> &mut Board {
        self.board
    }
}

impl Drop for ScopedMark<'_> {
    fn drop(&mut self) {
        self.board.clear(self.position.row, self.position.col);
    }
}

pub struct Minimax {
    sides: SideAssignment,
    nodes: u64,
}

impl Minimax {
    pub fn new(sides: SideAssignment) -> Self {
        Self { sides, nodes: 0 }
    }

    pub fn nodes(&self) -> u64 {
        self.nodes
    }

    pub fn terminal_score(&self, outcome: Outcome) -> Option<i32> {
        match outcome {
            Outcome::Ongoing => None,
            Outcome::Draw => Some(DRAW_SCORE),
            Outcome::XWon | Outcome::OWon => {
                if outcome.winner() == Some(self.sides.ai) {
                    Some(AI_WIN_SCORE)
                } else {
                    Some(HUMAN_WIN_SCORE)
                }
            }
        }
    }

    pub fn search(&mut self, board: &mut Board, maximizing: bool) -> i32 {
        self.search_window(board, maximizing, i32::MIN, i32::MAX)
    }

    // Alpha-beta only cuts branches that cannot change the value of a
    // full-window call, so `search` still returns the exact minimax score.
    fn search_window(
        &mut self,
        board: &mut Board,
        maximizing: bool,
        mut alpha: i32,
        mut beta: i32,
    ) -> i32 {
        self.nodes += 1;

        if let Some(score) = self.terminal_score(evaluate(board)) {
            return score;
        }

        let mark = if maximizing {
            self.sides.ai
        } else {
            self.sides.human
        };

        let mut best = if maximizing { i32::MIN } else { i32::MAX };
        for position in board.available_moves() {
            let score = {
                let mut probe = ScopedMark::place(board, position, mark);
                self.search_window(&mut probe, !maximizing, alpha, beta)
            };

            if maximizing {
                best = best.max(score);
                alpha = alpha.max(score);
            } else {
                best = best.min(score);
                beta = beta.min(score);
            }

            if beta <= alpha {
                break;
            }
        }

        best
    }

    // First cell in row-major order with the highest score wins ties.
    pub fn best_move(&mut self, board: &mut Board) -> Option<Position> {
        let mut best_score = i32::MIN;
        let mut best_move = None;

        for position in board.available_moves() {
            let score = {
                let mut probe = ScopedMark::place(board, position, self.sides.ai);
                self.search(&mut probe, false)
            };

            if score > best_score {
                best_score = score;
                best_move = Some(position);
            }
        }

        best_move
    }
}

pub fn search(board: &mut Board, sides: SideAssignment, maximizing: bool) -> i32 {
    Minimax::new(sides).search(board, maximizing)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn board_with(moves: &[(usize, usize, Mark)]) -> Board {
        let mut board = Board::new();
        for &(row, col, mark) in moves {
            board.place(row, col, mark);
        }
        board
    }

    #[test]
    fn test_scoped_mark_restores_cell_on_drop() {
        let mut board = Board::new();
        {
            let probe = ScopedMark::place(&mut board, Position::new(2, 1), Mark::O);
            assert_eq!(probe.get(2, 1), Mark::O);
        }
        assert_eq!(board, Board::new());
    }

    #[test]
    fn test_terminal_board_scores() {
        let sides = SideAssignment::ai_first();
        let mut ai_won = board_with(&[
            (0, 0, Mark::X),
            (0, 1, Mark::X),
            (0, 2, Mark::X),
            (1, 0, Mark::O),
            (1, 1, Mark::O),
        ]);
        let mut human_won = board_with(&[
            (0, 0, Mark::O),
            (1, 0, Mark::O),
            (2, 0, Mark::O),
            (1, 1, Mark::X),
            (2, 2, Mark::X),
        ]);

        assert_eq!(search(&mut ai_won, sides, true), AI_WIN_SCORE);
        assert_eq!(search(&mut human_won, sides, true), HUMAN_WIN_SCORE);
    }

    #[test]
    fn test_center_opening_is_a_draw_with_perfect_play() {
        let sides = SideAssignment::ai_first();
        let mut board = board_with(&[(1, 1, Mark::X)]);

        assert_eq!(search(&mut board, sides, false), DRAW_SCORE);
    }

    #[test]
    fn test_empty_board_is_a_draw() {
        let mut board = Board::new();

        assert_eq!(search(&mut board, SideAssignment::ai_first(), true), DRAW_SCORE);
        assert_eq!(board, Board::new());
    }

    #[test]
    fn test_search_restores_board() {
        let mut board = board_with(&[(0, 0, Mark::X), (1, 1, Mark::O), (2, 2, Mark::X)]);
        let before = board.clone();

        let score = search(&mut board, SideAssignment::ai_first(), false);

        assert_eq!(board, before);
        assert!([AI_WIN_SCORE, DRAW_SCORE, HUMAN_WIN_SCORE].contains(&score));
    }

    #[test]
    fn test_search_scores_are_bounded_for_every_single_move_board() {
        let sides = SideAssignment::human_first();
        for first in Position::all() {
            for second in Position::all().filter(|p| *p != first) {
                let mut board = board_with(&[
                    (first.row, first.col, Mark::X),
                    (second.row, second.col, Mark::O),
                ]);
                let score = search(&mut board, sides, false);
                assert!([AI_WIN_SCORE, DRAW_SCORE, HUMAN_WIN_SCORE].contains(&score));
            }
        }
    }

    #[test]
    fn test_best_move_takes_immediate_win() {
        // X X .
        // O O .
        // . . .
        let mut board = board_with(&[
            (0, 0, Mark::X),
            (0, 1, Mark::X),
            (1, 0, Mark::O),
            (1, 1, Mark::O),
        ]);
        let mut minimax = Minimax::new(SideAssignment::ai_first());

        assert_eq!(minimax.best_move(&mut board), Some(Position::new(0, 2)));
        assert!(minimax.nodes() > 0);
    }

    #[test]
    fn test_best_move_blocks_human_threat() {
        // O O .
        // . X .
        // . . X
        let mut board = board_with(&[
            (0, 0, Mark::O),
            (0, 1, Mark::O),
            (1, 1, Mark::X),
            (2, 2, Mark::X),
        ]);
        let mut minimax = Minimax::new(SideAssignment::ai_first());
        let before = board.clone();

        let choice = minimax.best_move(&mut board);

        assert_eq!(board, before);
        assert_eq!(choice, Some(Position::new(0, 2)));
    }

    #[test]
    fn test_best_move_on_full_board_is_none() {
        let mut board = board_with(&[
            (0, 0, Mark::X),
            (0, 1, Mark::O),
            (0, 2, Mark::X),
            (1, 0, Mark::X),
            (1, 1, Mark::O),
            (1, 2, Mark::O),
            (2, 0, Mark::O),
            (2, 1, Mark::X),
            (2, 2, Mark::X),
        ]);

        assert_eq!(Minimax::new(SideAssignment::ai_first()).best_move(&mut board), None);
    }

    #[test]
    fn test_best_move_ties_pick_first_cell() {
        // On an empty board every opening draws, so the first cell wins the tie.
        let mut board = Board::new();

        let choice = Minimax::new(SideAssignment::ai_first()).best_move(&mut board);

        assert_eq!(choice, Some(Position::new(0, 0)));
    }
}
