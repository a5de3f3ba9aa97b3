use std::time::Duration;

use serde::{Deserialize, Serialize};
use tictactoe_common::config::Validate;
use tictactoe_common::games::tictactoe::{DEFAULT_COMPUTER_DELAY, DEFAULT_COMPUTER_VS_COMPUTER_DELAY};

const MAX_DELAY_MS: u64 = 10_000;

#[derive(Debug, PartialEq, Serialize, Deserialize, Clone)]
pub struct DelayConfig {
    pub computer_move_ms: u64,
    pub computer_vs_computer_move_ms: u64,
}

impl DelayConfig {
    pub fn computer_move(&self) -> Duration {
        Duration::from_millis(self.computer_move_ms)
    }

    pub fn computer_vs_computer_move(&self) -> Duration {
        Duration::from_millis(self.computer_vs_computer_move_ms)
    }
}

impl Validate for DelayConfig {
    fn validate(&self) -> Result<(), String> {
        if self.computer_move_ms > MAX_DELAY_MS || self.computer_vs_computer_move_ms > MAX_DELAY_MS {
            return Err(format!("computer move delays must not exceed {} ms", MAX_DELAY_MS));
        }
        Ok(())
    }
}

impl Default for DelayConfig {
    fn default() -> Self {
        Self {
            computer_move_ms: DEFAULT_COMPUTER_DELAY.as_millis() as u64,
            computer_vs_computer_move_ms: DEFAULT_COMPUTER_VS_COMPUTER_DELAY.as_millis() as u64,
        }
    }
}
