use serde::{Deserialize, Serialize};

use crate::error::EngineError;
use crate::games::SessionRng;
use super::board::Board;
use super::types::{Mark, Position};
use super::win_detector::{check_win_on_lines, lines};

const WIN_SCORE: i32 = 10;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum BotType {
    Random,
    Minimax,
}

pub struct BotInput {
    pub board: Board,
    pub current_mark: Mark,
}

pub fn calculate_move(
    bot_type: BotType,
    input: &BotInput,
    rng: &mut SessionRng,
) -> Result<Position, EngineError> {
    match bot_type {
        BotType::Random => random_move(&input.board, rng),
        BotType::Minimax => best_move(&input.board, input.current_mark.opponent(), input.current_mark),
    }
}

/// Uniformly random empty cell.
pub fn random_move(board: &Board, rng: &mut SessionRng) -> Result<Position, EngineError> {
    let available_moves = board.available_moves();
    if available_moves.is_empty() {
        return Err(EngineError::NoLegalMoves);
    }
    let idx = rng.random_range(0..available_moves.len());
    Ok(available_moves[idx])
}

/// Side to move at a search node.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Turn {
    Ai,
    Human,
}

impl Turn {
    fn next(self) -> Turn {
        match self {
            Turn::Ai => Turn::Human,
            Turn::Human => Turn::Ai,
        }
    }
}

/// Exhaustive minimax from the AI's point of view.
///
/// Every empty cell is tried in row-major order and the first cell with the
/// strictly greatest value wins. Scores are +10 / -10 / 0 regardless of
/// depth, so a slower forced win ranks the same as an immediate one.
///
/// The search is unpruned and exponential in the number of empty cells; it
/// is meant for 3x3 boards.
pub fn best_move(board: &Board, human_mark: Mark, ai_mark: Mark) -> Result<Position, EngineError> {
    let available_moves = board.available_moves();
    if available_moves.is_empty() {
        return Err(EngineError::NoLegalMoves);
    }

    let lines = lines(board.size());
    let mut board = board.clone();
    let mut best_move = available_moves[0];
    let mut best_score = i32::MIN;

    for position in available_moves {
        board.place(position, ai_mark);
        let score = minimax(&mut board, &lines, 0, Turn::Human, human_mark, ai_mark);
        board.clear(position);

        if score > best_score {
            best_score = score;
            best_move = position;
        }
    }

    Ok(best_move)
}

fn evaluate(board: &Board, lines: &[Vec<Position>], human_mark: Mark, ai_mark: Mark) -> i32 {
    match check_win_on_lines(board, lines) {
        Some(mark) if mark == ai_mark => WIN_SCORE,
        Some(mark) if mark == human_mark => -WIN_SCORE,
        _ => 0,
    }
}

// Depth is carried for the recursion only; it never weights the score.
#[allow(clippy::only_used_in_recursion)]
fn minimax(
    board: &mut Board,
    lines: &[Vec<Position>],
    depth: usize,
    turn: Turn,
    human_mark: Mark,
    ai_mark: Mark,
) -> i32 {
    let score = evaluate(board, lines, human_mark, ai_mark);
    if score == WIN_SCORE || score == -WIN_SCORE {
        return score;
    }

    let moves = board.available_moves();
    if moves.is_empty() {
        return 0;
    }

    let (mark, mut best) = match turn {
        Turn::Ai => (ai_mark, i32::MIN),
        Turn::Human => (human_mark, i32::MAX),
    };

    for position in moves {
        board.place(position, mark);
        let value = minimax(board, lines, depth + 1, turn.next(), human_mark, ai_mark);
        board.clear(position);

        best = match turn {
            Turn::Ai => best.max(value),
            Turn::Human => best.min(value),
        };
    }

    best
}
