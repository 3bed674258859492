use super::board::Board;
use super::types::{Mark, Outcome, Position, WinningLine};

// Rows, then columns, then diagonals; the first full line found decides.
const LINES: [[(usize, usize); 3]; 8] = [
    [(0, 0), (0, 1), (0, 2)],
    [(1, 0), (1, 1), (1, 2)],
    [(2, 0), (2, 1), (2, 2)],
    [(0, 0), (1, 0), (2, 0)],
    [(0, 1), (1, 1), (2, 1)],
    [(0, 2), (1, 2), (2, 2)],
    [(0, 0), (1, 1), (2, 2)],
    [(0, 2), (1, 1), (2, 0)],
];

pub fn check_win_with_line(board: &Board) -> Option<WinningLine> {
    LINES.iter().find_map(|line| {
        let [a, b, c] = *line;
        let mark = board.get(a.0, a.1);
        if mark != Mark::Empty && mark == board.get(b.0, b.1) && mark == board.get(c.0, c.1) {
            Some(WinningLine::new(
                mark,
                line.map(|(row, col)| Position::new(row, col)),
            ))
        } else {
            None
        }
    })
}

pub fn check_win(board: &Board) -> Option<Mark> {
    check_win_with_line(board).map(|line| line.mark)
}

pub fn evaluate(board: &Board) -> Outcome {
    if let Some(outcome) = check_win(board).and_then(Outcome::won_by) {
        return outcome;
    }

    if board.is_full() {
        Outcome::Draw
    } else {
        Outcome::Ongoing
    }
}
