use serde::{Deserialize, Serialize};

use crate::config::Validate;
use super::bot_controller::BotType;
use super::types::{BoardSize, Mark};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PlayerType {
    User,
    Computer,
}

/// Who controls each side, how large the board is and whether computer
/// players search with minimax instead of moving at random.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameSettings {
    pub player_x: PlayerType,
    pub player_o: PlayerType,
    pub board_size: BoardSize,
    #[serde(default)]
    pub use_ai: bool,
}

impl Default for GameSettings {
    fn default() -> Self {
        Self {
            player_x: PlayerType::User,
            player_o: PlayerType::Computer,
            board_size: BoardSize::Three,
            use_ai: false,
        }
    }
}

impl GameSettings {
    pub fn controller(&self, mark: Mark) -> PlayerType {
        match mark {
            Mark::X => self.player_x,
            Mark::O => self.player_o,
        }
    }

    pub fn is_user_vs_user(&self) -> bool {
        self.player_x == PlayerType::User && self.player_o == PlayerType::User
    }

    pub fn is_computer_vs_computer(&self) -> bool {
        self.player_x == PlayerType::Computer && self.player_o == PlayerType::Computer
    }

    pub fn user_mark(&self) -> Mark {
        if self.is_user_vs_user() || self.player_x == PlayerType::User {
            Mark::X
        } else {
            Mark::O
        }
    }

    pub fn computer_mark(&self) -> Mark {
        if !self.is_computer_vs_computer() && self.player_o == PlayerType::Computer {
            Mark::O
        } else {
            Mark::X
        }
    }

    /// Minimax is offered only with a computer player on a 3x3 board;
    /// larger boards make the unpruned search impractical.
    pub fn ai_available(&self) -> bool {
        let has_computer =
            self.player_x == PlayerType::Computer || self.player_o == PlayerType::Computer;
        has_computer && self.board_size == BoardSize::Three
    }

    pub fn bot_type(&self) -> BotType {
        if self.use_ai && self.ai_available() {
            BotType::Minimax
        } else {
            BotType::Random
        }
    }
}

impl Validate for GameSettings {
    fn validate(&self) -> Result<(), String> {
        if self.use_ai && !self.ai_available() {
            return Err(format!(
                "AI requires a computer player on a 3x3 board (got {} with X: {:?}, O: {:?})",
                self.board_size, self.player_x, self.player_o
            ));
        }
        Ok(())
    }
}
