use serde::{Deserialize, Serialize};
use tictactoe_common::config::{ConfigManager, FileContentConfigProvider, Validate, YamlConfigSerializer};
use tictactoe_common::games::tictactoe::GameSettings;

use super::DelayConfig;

const CONFIG_FILE_NAME: &str = "tictactoe_console_config.yaml";

fn get_config_path() -> String {
    if let Ok(exe_path) = std::env::current_exe()
        && let Some(exe_dir) = exe_path.parent()
    {
        return exe_dir.join(CONFIG_FILE_NAME).to_string_lossy().into_owned();
    }
    CONFIG_FILE_NAME.to_string()
}

pub fn get_config_manager(
    path: Option<&str>,
) -> ConfigManager<FileContentConfigProvider, Config, YamlConfigSerializer> {
    match path {
        Some(path) => ConfigManager::from_yaml_file(path),
        None => ConfigManager::from_yaml_file(&get_config_path()),
    }
}

#[derive(Debug, PartialEq, Serialize, Deserialize, Clone, Default)]
pub struct Config {
    pub game: GameSettings,
    #[serde(default)]
    pub delays: DelayConfig,
}

impl Validate for Config {
    fn validate(&self) -> Result<(), String> {
        self.game.validate()?;
        self.delays.validate()?;
        Ok(())
    }
}
