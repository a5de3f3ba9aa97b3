use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::EngineError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Mark {
    X,
    O,
}

impl Mark {
    pub fn opponent(self) -> Mark {
        match self {
            Mark::X => Mark::O,
            Mark::O => Mark::X,
        }
    }
}

impl fmt::Display for Mark {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Mark::X => write!(f, "X"),
            Mark::O => write!(f, "O"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Cell {
    #[default]
    Empty,
    X,
    O,
}

impl Cell {
    pub fn mark(self) -> Option<Mark> {
        match self {
            Cell::Empty => None,
            Cell::X => Some(Mark::X),
            Cell::O => Some(Mark::O),
        }
    }

    pub fn is_empty(self) -> bool {
        self == Cell::Empty
    }
}

impl From<Mark> for Cell {
    fn from(mark: Mark) -> Self {
        match mark {
            Mark::X => Cell::X,
            Mark::O => Cell::O,
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
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}

/// Supported board dimensions. Win detection only counts full-length lines,
/// so the size is also the length of a winning line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(try_from = "usize", into = "usize")]
pub enum BoardSize {
    #[default]
    Three,
    Four,
    Five,
}

impl BoardSize {
    pub fn dimension(self) -> usize {
        match self {
            BoardSize::Three => 3,
            BoardSize::Four => 4,
            BoardSize::Five => 5,
        }
    }
}

impl TryFrom<usize> for BoardSize {
    type Error = EngineError;

    fn try_from(size: usize) -> Result<Self, Self::Error> {
        match size {
            3 => Ok(BoardSize::Three),
            4 => Ok(BoardSize::Four),
            5 => Ok(BoardSize::Five),
            other => Err(EngineError::InvalidBoardSize(other)),
        }
    }
}

impl From<BoardSize> for usize {
    fn from(size: BoardSize) -> Self {
        size.dimension()
    }
}

impl fmt::Display for BoardSize {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let n = self.dimension();
        write!(f, "{}x{}", n, n)
    }
}

/// Result of inspecting a board. Always recomputed from the cells, never stored.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    InProgress,
    Win(Mark),
    Tie,
}

impl Outcome {
    pub fn is_terminal(self) -> bool {
        self != Outcome::InProgress
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WinningLine {
    pub mark: Mark,
    pub start: Position,
    pub end: Position,
}

impl WinningLine {
    pub fn new(mark: Mark, start: Position, end: Position) -> Self {
        Self { mark, start, end }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameStatus {
    InProgress,
    Ended,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_board_size_accepts_only_supported_dimensions() {
        assert_eq!(BoardSize::try_from(3), Ok(BoardSize::Three));
        assert_eq!(BoardSize::try_from(4), Ok(BoardSize::Four));
        assert_eq!(BoardSize::try_from(5), Ok(BoardSize::Five));
        assert_eq!(BoardSize::try_from(6), Err(EngineError::InvalidBoardSize(6)));
        assert_eq!(BoardSize::try_from(0), Err(EngineError::InvalidBoardSize(0)));
    }

    #[test]
    fn test_cell_and_mark_conversions() {
        assert_eq!(Cell::from(Mark::X).mark(), Some(Mark::X));
        assert_eq!(Cell::from(Mark::O).mark(), Some(Mark::O));
        assert_eq!(Cell::Empty.mark(), None);
        assert_eq!(Mark::X.opponent(), Mark::O);
        assert_eq!(Mark::O.opponent(), Mark::X);
    }
}
