use tictactoe_common::games::tictactoe::Position;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputCommand {
    Move(Position),
    Quit,
}

/// Parses one line typed by the user: `row col` (comma or space separated) or `q`.
pub fn parse_command(line: &str) -> Result<InputCommand, String> {
    let trimmed = line.trim();
    if trimmed.eq_ignore_ascii_case("q") || trimmed.eq_ignore_ascii_case("quit") {
        return Ok(InputCommand::Quit);
    }

    let parts: Vec<&str> = trimmed
        .split(|c: char| c == ',' || c.is_whitespace())
        .filter(|part| !part.is_empty())
        .collect();

    let [row, col] = parts.as_slice() else {
        return Err(format!("Expected `row col`, got '{}'", trimmed));
    };

    let row = row
        .parse::<usize>()
        .map_err(|e| format!("Invalid row '{}': {}", row, e))?;
    let col = col
        .parse::<usize>()
        .map_err(|e| format!("Invalid column '{}': {}", col, e))?;

    Ok(InputCommand::Move(Position::new(row, col)))
}
