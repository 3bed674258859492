use std::time::Duration;

use serde::{Deserialize, Serialize};
use tictactoe_engine::config::{ConfigManager, FileContentConfigProvider, Validate, YamlConfigSerializer};
use tictactoe_engine::games::tictactoe::{Difficulty, TicTacToeSessionSettings};

const CONFIG_FILE_NAME: &str = "tictactoe_console_config.yaml";
const MAX_AI_MOVE_DELAY_MS: u64 = 10_000;

fn get_config_path() -> String {
    if let Ok(exe_path) = std::env::current_exe()
        && let Some(exe_dir) = exe_path.parent()
    {
        return exe_dir.join(CONFIG_FILE_NAME).to_string_lossy().into_owned();
    }
    CONFIG_FILE_NAME.to_string()
}

pub fn get_config_manager()
-> ConfigManager<FileContentConfigProvider, ConsoleConfig, YamlConfigSerializer> {
    ConfigManager::from_yaml_file(get_config_path())
}

#[derive(Debug, PartialEq, Serialize, Deserialize, Clone)]
pub struct ConsoleConfig {
    pub difficulty: Difficulty,
    pub ai_move_delay_ms: u64,
    #[serde(default)]
    pub seed: Option<u64>,
}

impl ConsoleConfig {
    pub fn session_settings(&self) -> TicTacToeSessionSettings {
        TicTacToeSessionSettings {
            ai_move_delay: Duration::from_millis(self.ai_move_delay_ms),
            seed: self.seed,
        }
    }
}

impl Validate for ConsoleConfig {
    fn validate(&self) -> Result<(), String> {
        if self.ai_move_delay_ms > MAX_AI_MOVE_DELAY_MS {
            return Err(format!(
                "ai_move_delay_ms must not exceed {} (got {})",
                MAX_AI_MOVE_DELAY_MS, self.ai_move_delay_ms
            ));
        }
        Ok(())
    }
}

impl Default for ConsoleConfig {
    fn default() -> Self {
        Self {
            difficulty: Difficulty::Hard,
            ai_move_delay_ms: 500,
            seed: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tictactoe_engine::config::{ConfigContentProvider, ConfigSerializer};

    fn get_temp_file_path() -> String {
        let mut path = std::env::temp_dir();
        let random_number: u32 = rand::random();
        path.push(format!("temp_tictactoe_console_config_{}.yaml", random_number));
        path.to_string_lossy().into_owned()
    }

    #[test]
    fn test_default_config_is_valid() {
        assert!(ConsoleConfig::default().validate().is_ok());
    }

    #[test]
    fn test_default_config_can_be_serialized_and_deserialized_string() {
        let default_config = ConsoleConfig::default();
        let serializer = YamlConfigSerializer::new();

        let serialized = serializer.serialize(&default_config).unwrap();
        let deserialized: ConsoleConfig = serializer.deserialize(&serialized).unwrap();

        assert_eq!(default_config, deserialized);
    }

    #[test]
    fn test_config_can_be_saved_and_loaded_with_manager() {
        let config = ConsoleConfig {
            difficulty: Difficulty::Easy,
            ai_move_delay_ms: 0,
            seed: Some(31),
        };
        let file_path = get_temp_file_path();
        let manager: ConfigManager<FileContentConfigProvider, ConsoleConfig> =
            ConfigManager::from_yaml_file(file_path.clone());

        manager.set_config(&config).unwrap();
        let stored = FileContentConfigProvider::new(file_path.clone())
            .get_config_content()
            .unwrap()
            .unwrap();
        let loaded = manager.get_config().unwrap();
        let _ = std::fs::remove_file(&file_path);

        assert!(stored.contains("difficulty: easy"));
        assert_eq!(config, loaded);
    }

    #[test]
    fn test_missing_seed_field_defaults_to_none() {
        let serializer = YamlConfigSerializer::new();

        let config: ConsoleConfig = serializer
            .deserialize("difficulty: hard\nai_move_delay_ms: 250\n")
            .unwrap();

        assert_eq!(config.seed, None);
        assert_eq!(config.ai_move_delay_ms, 250);
    }

    #[test]
    fn test_excessive_delay_is_rejected() {
        let config = ConsoleConfig {
            ai_move_delay_ms: MAX_AI_MOVE_DELAY_MS + 1,
            ..ConsoleConfig::default()
        };

        assert!(config.validate().is_err());
    }

    #[test]
    fn test_session_settings_carry_delay_and_seed() {
        let config = ConsoleConfig {
            difficulty: Difficulty::Hard,
            ai_move_delay_ms: 120,
            seed: Some(9),
        };

        let settings = config.session_settings();

        assert_eq!(settings.ai_move_delay, Duration::from_millis(120));
        assert_eq!(settings.create_rng().seed(), 9);
    }
}
