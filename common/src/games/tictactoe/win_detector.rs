use super::board::Board;
use super::types::{BoardSize, Mark, Outcome, Position, WinningLine};

/// Every full-length line of a board: rows, then columns, then the main
/// diagonal and the anti-diagonal.
pub fn lines(size: BoardSize) -> Vec<Vec<Position>> {
    let n = size.dimension();
    let mut lines = Vec::with_capacity(2 * n + 2);

    for row in 0..n {
        lines.push((0..n).map(|col| Position::new(row, col)).collect());
    }
    for col in 0..n {
        lines.push((0..n).map(|row| Position::new(row, col)).collect());
    }
    lines.push((0..n).map(|i| Position::new(i, i)).collect());
    lines.push((0..n).map(|i| Position::new(n - 1 - i, i)).collect());

    lines
}

fn line_owner(board: &Board, line: &[Position]) -> Option<Mark> {
    let first = board.get(*line.first()?)?.mark()?;
    line[1..]
        .iter()
        .all(|&position| board.get(position).and_then(|cell| cell.mark()) == Some(first))
        .then_some(first)
}

/// Like [`check_win`], but against lines computed once by the caller.
pub(crate) fn check_win_on_lines(board: &Board, lines: &[Vec<Position>]) -> Option<Mark> {
    lines.iter().find_map(|line| line_owner(board, line))
}

pub fn check_win_with_line(board: &Board) -> Option<WinningLine> {
    lines(board.size()).into_iter().find_map(|line| {
        let mark = line_owner(board, &line)?;
        Some(WinningLine::new(mark, line[0], line[line.len() - 1]))
    })
}

pub fn check_win(board: &Board) -> Option<Mark> {
    check_win_with_line(board).map(|line| line.mark)
}

pub fn evaluate_outcome(board: &Board) -> Outcome {
    if let Some(mark) = check_win(board) {
        return Outcome::Win(mark);
    }
    if board.is_full() {
        Outcome::Tie
    } else {
        Outcome::InProgress
    }
}
