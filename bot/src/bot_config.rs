use serde::{Deserialize, Serialize};

use common::config::{ConfigManager, FileContentConfigProvider, Validate, YamlConfigSerializer};

pub const DEFAULT_CONFIG_FILE: &str = "tictactoe_bot_config.yaml";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BotConfig {
    pub listen_address: String,
    pub greeting: String,
}

impl Default for BotConfig {
    fn default() -> Self {
        Self {
            listen_address: "0.0.0.0:5000".to_string(),
            greeting: "Hi! This is Tic-Tac-Toe. Send /play to start a game.".to_string(),
        }
    }
}

impl Validate for BotConfig {
    fn validate(&self) -> Result<(), String> {
        self.listen_address
            .parse::<std::net::SocketAddr>()
            .map_err(|e| format!("Invalid listen_address '{}': {}", self.listen_address, e))?;

        if self.greeting.trim().is_empty() {
            return Err("greeting must not be empty".to_string());
        }

        Ok(())
    }
}

pub fn get_config_manager(
    file_path: &str,
) -> ConfigManager<FileContentConfigProvider, BotConfig, YamlConfigSerializer> {
    ConfigManager::from_yaml_file(file_path)
}
