use tictactoe_common::games::tictactoe::{Board, Cell};

fn cell_symbol(cell: Cell) -> char {
    match cell {
        Cell::Empty => '.',
        Cell::X => 'X',
        Cell::O => 'O',
    }
}

/// Draws the board with row and column indices, one text line per row.
pub fn render_board(board: &Board) -> String {
    let header: Vec<String> = (0..board.dimension()).map(|col| col.to_string()).collect();
    let mut out = format!("  {}\n", header.join(" "));

    for (row, cells) in board.rows().iter().enumerate() {
        let symbols: Vec<String> = cells.iter().map(|&cell| cell_symbol(cell).to_string()).collect();
        out.push_str(&format!("{} {}\n", row, symbols.join(" ")));
    }
    out
}
