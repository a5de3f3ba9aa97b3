use std::io::{BufRead, Write};

use tictactoe_common::games::SessionRng;
use tictactoe_common::games::tictactoe::{GameStatus, TicTacToeGameState};
use tictactoe_common::log;

use crate::config::DelayConfig;
use crate::input::{InputCommand, parse_command};
use crate::render::render_board;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameEnd {
    Finished,
    Quit,
}

/// Drives one game: prompts users for moves, lets computer sides reply after
/// the configured delay, and prints the board after every move.
pub fn run_game<R: BufRead, W: Write>(
    state: &mut TicTacToeGameState,
    rng: &mut SessionRng,
    delays: &DelayConfig,
    input: &mut R,
    output: &mut W,
) -> Result<GameEnd, String> {
    let write_err = |e: std::io::Error| format!("Failed to write output: {}", e);

    write!(output, "{}", render_board(state.board())).map_err(write_err)?;

    while state.status() == GameStatus::InProgress {
        if state.is_computer_turn() {
            let delay = state.computer_delay(delays.computer_move(), delays.computer_vs_computer_move());
            if !delay.is_zero() {
                std::thread::sleep(delay);
            }
            let mark = state.current_mark();
            let position = state.play_computer_turn(rng).map_err(String::from)?;
            writeln!(output, "Computer ({}) plays {}", mark, position).map_err(write_err)?;
        } else {
            write!(output, "{} > ", state.status_text()).map_err(write_err)?;
            output.flush().map_err(write_err)?;

            let mut line = String::new();
            let read = input
                .read_line(&mut line)
                .map_err(|e| format!("Failed to read input: {}", e))?;
            if read == 0 {
                log!("Input closed, leaving game");
                return Ok(GameEnd::Quit);
            }

            match parse_command(&line) {
                Ok(InputCommand::Quit) => return Ok(GameEnd::Quit),
                Ok(InputCommand::Move(position)) => {
                    if let Err(e) = state.place_mark(position) {
                        writeln!(output, "{}", e).map_err(write_err)?;
                        continue;
                    }
                }
                Err(e) => {
                    writeln!(output, "{}", e).map_err(write_err)?;
                    continue;
                }
            }
        }

        write!(output, "{}", render_board(state.board())).map_err(write_err)?;
    }

    if let Some(line) = state.winning_line() {
        writeln!(output, "Winning line: {} to {}", line.start, line.end).map_err(write_err)?;
    }
    writeln!(output, "{}", state.status_text()).map_err(write_err)?;
    Ok(GameEnd::Finished)
}
