mod board;
mod bot_controller;
mod game_state;
mod settings;
mod types;
mod win_detector;

pub use board::Board;
pub use bot_controller::{BotInput, BotType, best_move, calculate_move, random_move};
pub use game_state::{DEFAULT_COMPUTER_DELAY, DEFAULT_COMPUTER_VS_COMPUTER_DELAY, TicTacToeGameState};
pub use settings::{GameSettings, PlayerType};
pub use types::{BoardSize, Cell, GameStatus, Mark, Outcome, Position, WinningLine};
pub use win_detector::{check_win, check_win_with_line, evaluate_outcome, lines};
