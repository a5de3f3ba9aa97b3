use crate::error::{EngineError, IllegalMoveReason};
use super::types::{BoardSize, Cell, Mark, Position};

/// Square grid of cells, addressed as `cells[row][col]`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Board {
    cells: Vec<Vec<Cell>>,
    size: BoardSize,
}

impl Board {
    pub fn new(size: BoardSize) -> Self {
        let n = size.dimension();
        Self {
            cells: vec![vec![Cell::Empty; n]; n],
            size,
        }
    }

    pub fn create(size: usize) -> Result<Self, EngineError> {
        Ok(Self::new(BoardSize::try_from(size)?))
    }

    /// Builds a board from explicit rows. The grid must be square and of a supported size.
    pub fn from_rows(rows: Vec<Vec<Cell>>) -> Result<Self, EngineError> {
        let size = BoardSize::try_from(rows.len())?;
        if let Some(row) = rows.iter().find(|row| row.len() != rows.len()) {
            return Err(EngineError::InvalidBoardSize(row.len()));
        }
        Ok(Self { cells: rows, size })
    }

    #[cfg(test)]
    pub fn from_strings(rows: &[&str]) -> Self {
        let rows = rows
            .iter()
            .map(|row| {
                row.chars()
                    .map(|c| match c {
                        'X' => Cell::X,
                        'O' => Cell::O,
                        _ => Cell::Empty,
                    })
                    .collect()
            })
            .collect();
        Self::from_rows(rows).unwrap()
    }

    pub fn size(&self) -> BoardSize {
        self.size
    }

    pub fn dimension(&self) -> usize {
        self.size.dimension()
    }

    pub fn rows(&self) -> &[Vec<Cell>] {
        &self.cells
    }

    pub fn get(&self, position: Position) -> Option<Cell> {
        self.cells.get(position.row)?.get(position.col).copied()
    }

    pub fn is_valid_move(&self, position: Position) -> bool {
        self.get(position) == Some(Cell::Empty)
    }

    pub fn apply_move(&mut self, position: Position, mark: Mark) -> Result<(), EngineError> {
        match self.get(position) {
            None => Err(EngineError::IllegalMove {
                position,
                reason: IllegalMoveReason::OutOfBounds,
            }),
            Some(Cell::Empty) => {
                self.place(position, mark);
                Ok(())
            }
            Some(_) => Err(EngineError::IllegalMove {
                position,
                reason: IllegalMoveReason::CellOccupied,
            }),
        }
    }

    pub fn is_full(&self) -> bool {
        self.cells.iter().flatten().all(|cell| !cell.is_empty())
    }

    /// Empty cells in row-major order.
    pub fn available_moves(&self) -> Vec<Position> {
        let mut moves = Vec::new();
        for (row, cells) in self.cells.iter().enumerate() {
            for (col, &cell) in cells.iter().enumerate() {
                if cell.is_empty() {
                    moves.push(Position::new(row, col));
                }
            }
        }
        moves
    }

    // Unchecked; search code places and clears on its own scratch board.
    pub(crate) fn place(&mut self, position: Position, mark: Mark) {
        self.cells[position.row][position.col] = Cell::from(mark);
    }

    pub(crate) fn clear(&mut self, position: Position) {
        self.cells[position.row][position.col] = Cell::Empty;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_create_builds_empty_square_board() {
        for n in 3..=5 {
            let board = Board::create(n).unwrap();
            assert_eq!(board.dimension(), n);
            assert_eq!(board.rows().len(), n);
            assert!(board.rows().iter().all(|row| row.len() == n));
            assert_eq!(board.available_moves().len(), n * n);
            assert!(!board.is_full());
        }
    }

    #[test]
    fn test_create_rejects_unsupported_sizes() {
        assert_eq!(Board::create(2), Err(EngineError::InvalidBoardSize(2)));
        assert_eq!(Board::create(6), Err(EngineError::InvalidBoardSize(6)));
    }

    #[test]
    fn test_from_rows_rejects_ragged_grid() {
        let rows = vec![
            vec![Cell::Empty; 3],
            vec![Cell::Empty; 2],
            vec![Cell::Empty; 3],
        ];
        assert_eq!(Board::from_rows(rows), Err(EngineError::InvalidBoardSize(2)));
    }

    #[test]
    fn test_apply_move_sets_exactly_one_cell() {
        let mut board = Board::create(3).unwrap();
        board.apply_move(Position::new(1, 2), Mark::O).unwrap();

        assert_eq!(board.get(Position::new(1, 2)), Some(Cell::O));
        assert_eq!(board.available_moves().len(), 8);
    }

    #[test]
    fn test_apply_move_rejects_occupied_cell() {
        let mut board = Board::from_strings(&["X..", "...", "..."]);
        let result = board.apply_move(Position::new(0, 0), Mark::O);

        assert_eq!(
            result,
            Err(EngineError::IllegalMove {
                position: Position::new(0, 0),
                reason: IllegalMoveReason::CellOccupied,
            })
        );
        assert_eq!(board.get(Position::new(0, 0)), Some(Cell::X));
    }

    #[test]
    fn test_apply_move_rejects_out_of_bounds() {
        let mut board = Board::create(4).unwrap();
        let result = board.apply_move(Position::new(0, 4), Mark::X);

        assert!(matches!(
            result,
            Err(EngineError::IllegalMove {
                reason: IllegalMoveReason::OutOfBounds,
                ..
            })
        ));
    }

    #[test]
    fn test_available_moves_are_row_major() {
        let board = Board::from_strings(&["X.O", ".X.", "OOX"]);
        assert_eq!(
            board.available_moves(),
            vec![Position::new(0, 1), Position::new(1, 0), Position::new(1, 2)]
        );
    }

    #[test]
    fn test_is_full() {
        assert!(Board::from_strings(&["XOX", "XOO", "OXX"]).is_full());
        assert!(!Board::from_strings(&["XOX", "XO.", "OXX"]).is_full());
    }
}
