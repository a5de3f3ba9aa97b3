use std::time::Duration;

use crate::error::EngineError;
use crate::games::SessionRng;
use crate::log;
use super::board::Board;
use super::bot_controller::{BotInput, calculate_move};
use super::settings::{GameSettings, PlayerType};
use super::types::{GameStatus, Mark, Outcome, Position, WinningLine};
use super::win_detector::{check_win_with_line, evaluate_outcome};

pub const DEFAULT_COMPUTER_DELAY: Duration = Duration::from_millis(500);
pub const DEFAULT_COMPUTER_VS_COMPUTER_DELAY: Duration = Duration::from_millis(1200);

/// One game in progress: the board, whose turn it is and how it ended.
/// X always moves first.
#[derive(Debug)]
pub struct TicTacToeGameState {
    settings: GameSettings,
    board: Board,
    current_mark: Mark,
    status: GameStatus,
    last_move: Option<Position>,
}

impl TicTacToeGameState {
    pub fn new(settings: GameSettings) -> Self {
        log!(
            "Starting {} game: X is {:?}, O is {:?}, bot {:?}",
            settings.board_size,
            settings.player_x,
            settings.player_o,
            settings.bot_type()
        );

        Self {
            board: Board::new(settings.board_size),
            settings,
            current_mark: Mark::X,
            status: GameStatus::InProgress,
            last_move: None,
        }
    }

    pub fn settings(&self) -> &GameSettings {
        &self.settings
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn current_mark(&self) -> Mark {
        self.current_mark
    }

    pub fn status(&self) -> GameStatus {
        self.status
    }

    pub fn last_move(&self) -> Option<Position> {
        self.last_move
    }

    pub fn outcome(&self) -> Outcome {
        evaluate_outcome(&self.board)
    }

    pub fn winning_line(&self) -> Option<WinningLine> {
        check_win_with_line(&self.board)
    }

    pub fn controller(&self, mark: Mark) -> PlayerType {
        self.settings.controller(mark)
    }

    pub fn is_computer_turn(&self) -> bool {
        self.status == GameStatus::InProgress
            && self.controller(self.current_mark) == PlayerType::Computer
    }

    /// Pause a front-end takes before a computer move: `computer_vs_computer`
    /// when no user plays, `with_user` otherwise.
    pub fn computer_delay(&self, with_user: Duration, computer_vs_computer: Duration) -> Duration {
        if self.settings.is_computer_vs_computer() {
            computer_vs_computer
        } else {
            with_user
        }
    }

    /// Places the current mark for a user-controlled side.
    pub fn place_mark(&mut self, position: Position) -> Result<(), EngineError> {
        self.ensure_turn(PlayerType::User)?;
        self.apply(position)
    }

    /// Lets the configured bot choose and play a move for the computer-controlled side.
    pub fn play_computer_turn(&mut self, rng: &mut SessionRng) -> Result<Position, EngineError> {
        self.ensure_turn(PlayerType::Computer)?;

        let input = BotInput {
            board: self.board.clone(),
            current_mark: self.current_mark,
        };
        let position = calculate_move(self.settings.bot_type(), &input, rng)?;
        self.apply(position)?;
        Ok(position)
    }

    fn ensure_turn(&self, expected: PlayerType) -> Result<(), EngineError> {
        if self.status != GameStatus::InProgress {
            return Err(EngineError::GameOver);
        }
        if self.controller(self.current_mark) != expected {
            return Err(EngineError::WrongTurn(self.current_mark));
        }
        Ok(())
    }

    fn apply(&mut self, position: Position) -> Result<(), EngineError> {
        self.board.apply_move(position, self.current_mark)?;
        self.last_move = Some(position);
        log!("{} plays {}", self.current_mark, position);

        let outcome = self.outcome();
        if outcome.is_terminal() {
            self.status = GameStatus::Ended;
            log!("Game over: {}", self.status_text());
        } else {
            self.current_mark = self.current_mark.opponent();
        }
        Ok(())
    }

    pub fn status_text(&self) -> String {
        match (self.status, self.outcome()) {
            (GameStatus::Ended, Outcome::Win(mark)) => format!("The winner is player {}", mark),
            (GameStatus::Ended, _) => "It's a tie".to_string(),
            (GameStatus::InProgress, _) => format!("Player {}'s turn", self.current_mark),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::games::tictactoe::BoardSize;
    use super::PlayerType::{Computer, User};

    fn settings(player_x: PlayerType, player_o: PlayerType) -> GameSettings {
        GameSettings {
            player_x,
            player_o,
            board_size: BoardSize::Three,
            use_ai: false,
        }
    }

    #[test]
    fn test_new_game_starts_with_x() {
        let state = TicTacToeGameState::new(settings(User, Computer));
        assert_eq!(state.current_mark(), Mark::X);
        assert_eq!(state.status(), GameStatus::InProgress);
        assert_eq!(state.outcome(), Outcome::InProgress);
        assert_eq!(state.status_text(), "Player X's turn");
        assert!(!state.is_computer_turn());
    }

    #[test]
    fn test_board_matches_configured_size() {
        let state = TicTacToeGameState::new(GameSettings {
            board_size: BoardSize::Five,
            ..settings(User, User)
        });
        assert_eq!(state.board().dimension(), 5);
    }

    #[test]
    fn test_user_vs_user_alternates_marks() {
        let mut state = TicTacToeGameState::new(settings(User, User));
        state.place_mark(Position::new(0, 0)).unwrap();
        assert_eq!(state.current_mark(), Mark::O);
        state.place_mark(Position::new(1, 1)).unwrap();
        assert_eq!(state.current_mark(), Mark::X);
        assert_eq!(state.last_move(), Some(Position::new(1, 1)));
    }

    #[test]
    fn test_user_cannot_move_for_computer() {
        let mut state = TicTacToeGameState::new(settings(User, Computer));
        state.place_mark(Position::new(0, 0)).unwrap();

        assert!(state.is_computer_turn());
        assert_eq!(
            state.place_mark(Position::new(1, 1)),
            Err(EngineError::WrongTurn(Mark::O))
        );
    }

    #[test]
    fn test_computer_cannot_move_for_user() {
        let mut state = TicTacToeGameState::new(settings(User, Computer));
        let mut rng = SessionRng::new(1);
        assert_eq!(
            state.play_computer_turn(&mut rng),
            Err(EngineError::WrongTurn(Mark::X))
        );
    }

    #[test]
    fn test_illegal_move_keeps_turn() {
        let mut state = TicTacToeGameState::new(settings(User, User));
        state.place_mark(Position::new(0, 0)).unwrap();

        assert!(state.place_mark(Position::new(0, 0)).is_err());
        assert!(state.place_mark(Position::new(3, 0)).is_err());
        assert_eq!(state.current_mark(), Mark::O);
    }

    #[test]
    fn test_win_ends_game() {
        let mut state = TicTacToeGameState::new(settings(User, User));
        for (row, col) in [(0, 0), (1, 0), (0, 1), (1, 1), (0, 2)] {
            state.place_mark(Position::new(row, col)).unwrap();
        }

        assert_eq!(state.status(), GameStatus::Ended);
        assert_eq!(state.outcome(), Outcome::Win(Mark::X));
        assert_eq!(state.status_text(), "The winner is player X");
        assert_eq!(
            state.winning_line(),
            Some(WinningLine::new(Mark::X, Position::new(0, 0), Position::new(0, 2)))
        );
        assert_eq!(state.place_mark(Position::new(2, 2)), Err(EngineError::GameOver));
    }

    #[test]
    fn test_tie_ends_game() {
        let mut state = TicTacToeGameState::new(settings(User, User));
        // X O X / X O O / O X X
        for (row, col) in [(0, 0), (0, 1), (0, 2), (1, 1), (1, 0), (1, 2), (2, 1), (2, 0), (2, 2)] {
            state.place_mark(Position::new(row, col)).unwrap();
        }

        assert_eq!(state.status(), GameStatus::Ended);
        assert_eq!(state.outcome(), Outcome::Tie);
        assert_eq!(state.status_text(), "It's a tie");
    }

    #[test]
    fn test_computer_vs_computer_plays_to_completion() {
        let mut state = TicTacToeGameState::new(GameSettings {
            board_size: BoardSize::Four,
            ..settings(Computer, Computer)
        });
        let mut rng = SessionRng::new(99);

        let mut moves = 0;
        while state.status() == GameStatus::InProgress {
            assert!(state.is_computer_turn());
            state.play_computer_turn(&mut rng).unwrap();
            moves += 1;
        }

        assert!(moves <= 16);
        assert!(state.outcome().is_terminal());
        assert!(!state.is_computer_turn());
        assert_eq!(state.play_computer_turn(&mut rng), Err(EngineError::GameOver));
    }

    #[test]
    fn test_ai_computer_blocks_user() {
        let mut state = TicTacToeGameState::new(GameSettings {
            use_ai: true,
            ..settings(User, Computer)
        });
        let mut rng = SessionRng::new(5);

        state.place_mark(Position::new(0, 0)).unwrap();
        let reply = state.play_computer_turn(&mut rng).unwrap();
        assert_eq!(reply, Position::new(1, 1));

        state.place_mark(Position::new(0, 1)).unwrap();
        let reply = state.play_computer_turn(&mut rng).unwrap();
        assert_eq!(reply, Position::new(0, 2));
    }

    #[test]
    fn test_computer_delay_depends_on_mode() {
        let with_user = Duration::from_millis(10);
        let cvc = Duration::from_millis(20);

        let state = TicTacToeGameState::new(settings(User, Computer));
        assert_eq!(state.computer_delay(with_user, cvc), with_user);

        let state = TicTacToeGameState::new(settings(Computer, Computer));
        assert_eq!(state.computer_delay(with_user, cvc), cvc);
    }
}
