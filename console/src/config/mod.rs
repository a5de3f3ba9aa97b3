mod config;
mod delay_config;

pub use config::{Config, get_config_manager};
pub use delay_config::DelayConfig;
