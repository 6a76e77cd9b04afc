use serde::{Deserialize, Serialize};
use std::env;

use crate::error::{AppError, AppResult};

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct Config {
    #[serde(default)]
    pub server: ServerConfig,
    #[serde(default)]
    pub storage: StorageConfig,
    #[serde(default)]
    pub draw: DrawConfig,
    #[serde(default)]
    pub seating: SeatingConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: 8080,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StorageConfig {
    /// Directory holding one `<key>.json` document per stored key
    pub data_dir: String,
    /// Well-known key of the persisted AppState document
    pub state_key: String,
}

impl Default for StorageConfig {
    fn default() -> Self {
        Self {
            data_dir: "data".to_string(),
            state_key: "party_manager_db_v1".to_string(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DrawConfig {
    pub spin_duration_ms: u64,
    pub spin_frame_ms: u64,
    pub max_batch_size: u32,
}

impl Default for DrawConfig {
    fn default() -> Self {
        Self {
            spin_duration_ms: 3000,
            spin_frame_ms: 50,
            max_batch_size: 10,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SeatingConfig {
    pub default_capacity: u32,
    pub capacity_options: Vec<u32>,
}

impl Default for SeatingConfig {
    fn default() -> Self {
        Self {
            default_capacity: 10,
            capacity_options: vec![6, 8, 10, 12],
        }
    }
}

impl Config {
    pub fn from_toml() -> AppResult<Self> {
        let config_path = env::var("CONFIG_PATH").unwrap_or_else(|_| "config.toml".to_string());
        use std::io::ErrorKind;

        // 配置文件不存在时使用默认值，随后统一由环境变量覆盖
        let mut config: Config = match std::fs::read_to_string(&config_path) {
            Ok(config_str) => Self::parse(&config_str)?,
            Err(e) if e.kind() == ErrorKind::NotFound => {
                log::info!("No config file at {config_path}, using defaults");
                Config::default()
            }
            Err(e) => {
                return Err(AppError::ConfigError(format!(
                    "Cannot read config file {config_path}: {e}"
                )));
            }
        };

        config.apply_env_overrides();
        config.validate()?;
        Ok(config)
    }

    pub fn parse(config_str: &str) -> AppResult<Self> {
        toml::from_str(config_str)
            .map_err(|e| AppError::ConfigError(format!("Failed to parse config file: {e}")))
    }

    fn apply_env_overrides(&mut self) {
        fn get_env_parse<T: std::str::FromStr>(name: &str) -> Option<T> {
            env::var(name).ok().and_then(|v| v.parse::<T>().ok())
        }

        if let Ok(v) = env::var("SERVER_HOST") {
            self.server.host = v;
        }
        if let Some(p) = get_env_parse("SERVER_PORT") {
            self.server.port = p;
        }
        if let Ok(v) = env::var("STORAGE_DATA_DIR") {
            self.storage.data_dir = v;
        }
        if let Ok(v) = env::var("STORAGE_STATE_KEY") {
            self.storage.state_key = v;
        }
        if let Some(n) = get_env_parse("DRAW_SPIN_DURATION_MS") {
            self.draw.spin_duration_ms = n;
        }
        if let Some(n) = get_env_parse("DRAW_SPIN_FRAME_MS") {
            self.draw.spin_frame_ms = n;
        }
        if let Some(n) = get_env_parse("DRAW_MAX_BATCH_SIZE") {
            self.draw.max_batch_size = n;
        }
        if let Some(n) = get_env_parse("SEATING_DEFAULT_CAPACITY") {
            self.seating.default_capacity = n;
        }
    }

    fn validate(&self) -> AppResult<()> {
        if self.draw.max_batch_size == 0 {
            return Err(AppError::ConfigError(
                "draw.max_batch_size must be at least 1".into(),
            ));
        }
        if self.draw.spin_frame_ms == 0 {
            return Err(AppError::ConfigError(
                "draw.spin_frame_ms must be at least 1".into(),
            ));
        }
        if self.seating.default_capacity == 0 {
            return Err(AppError::ConfigError(
                "seating.default_capacity must be at least 1".into(),
            ));
        }
        if self.storage.state_key.trim().is_empty() {
            return Err(AppError::ConfigError("storage.state_key is empty".into()));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_partial_config_fills_defaults() {
        let config = Config::parse(
            r#"
            [server]
            host = "127.0.0.1"
            port = 9000

            [draw]
            spin_duration_ms = 1500
            spin_frame_ms = 40
            max_batch_size = 5
            "#,
        )
        .unwrap();

        assert_eq!(config.server.port, 9000);
        assert_eq!(config.draw.max_batch_size, 5);
        assert_eq!(config.storage.state_key, "party_manager_db_v1");
        assert_eq!(config.seating.default_capacity, 10);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_example_config_is_valid() {
        let config = Config::parse(include_str!("../config.example.toml")).unwrap();
        assert_eq!(config.seating.capacity_options, vec![6, 8, 10, 12]);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_parse_invalid_config() {
        assert!(matches!(
            Config::parse("server = 12"),
            Err(AppError::ConfigError(_))
        ));
    }

    #[test]
    fn test_validate_rejects_zero_batch() {
        let mut config = Config::default();
        config.draw.max_batch_size = 0;
        assert!(config.validate().is_err());
    }
}
