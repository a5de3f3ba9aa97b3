use std::fmt;

use crate::games::tictactoe::{Mark, Position};

/// Contract violations reported by the rules engine and the game session.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EngineError {
    /// Board size outside of 3, 4 and 5, or a non-square grid.
    InvalidBoardSize(usize),
    /// A move was requested on a board with no empty cells.
    NoLegalMoves,
    IllegalMove { position: Position, reason: IllegalMoveReason },
    GameOver,
    /// The side to move is not controlled the way the caller assumed.
    WrongTurn(Mark),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IllegalMoveReason {
    OutOfBounds,
    CellOccupied,
}

impl fmt::Display for IllegalMoveReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            IllegalMoveReason::OutOfBounds => write!(f, "position out of bounds"),
            IllegalMoveReason::CellOccupied => write!(f, "cell is already marked"),
        }
    }
}

impl fmt::Display for EngineError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EngineError::InvalidBoardSize(size) => {
                write!(f, "Unsupported board size {} (expected 3, 4 or 5)", size)
            }
            EngineError::NoLegalMoves => write!(f, "No legal moves left on the board"),
            EngineError::IllegalMove { position, reason } => {
                write!(f, "Illegal move at {}: {}", position, reason)
            }
            EngineError::GameOver => write!(f, "Game is already over"),
            EngineError::WrongTurn(mark) => write!(f, "Not the expected player's turn ({} to move)", mark),
        }
    }
}

impl std::error::Error for EngineError {}

impl From<EngineError> for String {
    fn from(error: EngineError) -> Self {
        error.to_string()
    }
}
