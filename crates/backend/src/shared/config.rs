use serde::Deserialize;
use std::path::{Path, PathBuf};

#[derive(Debug, Deserialize, Clone)]
pub struct Config {
    pub server: ServerConfig,
    #[serde(default)]
    pub data: DataConfig,
}

#[derive(Debug, Deserialize, Clone)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
}

#[derive(Debug, Deserialize, Clone, Default)]
pub struct DataConfig {
    /// JSON с коллекциями вместо встроенных демо-данных
    pub fixtures_path: Option<String>,
}

/// Default configuration embedded in the binary
const DEFAULT_CONFIG: &str = r#"
[server]
host = "0.0.0.0"
port = 3000
"#;

/// Load configuration from config.toml file
///
/// Search order:
/// 1. Next to the executable (for production)
/// 2. Falls back to embedded default config
pub fn load_config() -> anyhow::Result<Config> {
    if let Ok(exe_path) = std::env::current_exe() {
        if let Some(exe_dir) = exe_path.parent() {
            let config_path = exe_dir.join("config.toml");

            if config_path.exists() {
                tracing::info!("Loading config from: {}", config_path.display());
                return parse_config(&std::fs::read_to_string(&config_path)?);
            } else {
                tracing::warn!("config.toml not found at: {}", config_path.display());
            }
        }
    }

    tracing::info!("Using default embedded configuration");
    parse_config(DEFAULT_CONFIG)
}

pub fn parse_config(contents: &str) -> anyhow::Result<Config> {
    Ok(toml::from_str(contents)?)
}

/// Путь к файлу фикстур; относительный путь считается от каталога исполняемого файла
pub fn resolve_fixtures_path(config: &Config) -> Option<PathBuf> {
    let raw = config.data.fixtures_path.as_deref()?.trim();
    if raw.is_empty() {
        return None;
    }
    let path = Path::new(raw);
    if path.is_absolute() {
        return Some(path.to_path_buf());
    }

    if let Ok(exe_path) = std::env::current_exe() {
        if let Some(exe_dir) = exe_path.parent() {
            return Some(exe_dir.join(path));
        }
    }

    Some(PathBuf::from(raw))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_loads() {
        let config = parse_config(DEFAULT_CONFIG).unwrap();
        assert_eq!(config.server.port, 3000);
        assert!(config.data.fixtures_path.is_none());
        assert!(resolve_fixtures_path(&config).is_none());
    }

    #[test]
    fn test_absolute_fixtures_path_is_kept() {
        let absolute = std::env::temp_dir().join("fixtures.json");
        let toml = format!(
            "[server]\nhost = \"127.0.0.1\"\nport = 8080\n[data]\nfixtures_path = {:?}\n",
            absolute.display().to_string()
        );
        let config = parse_config(&toml).unwrap();
        assert_eq!(config.server.host, "127.0.0.1");
        assert_eq!(resolve_fixtures_path(&config), Some(absolute));
    }

    #[test]
    fn test_missing_server_section_fails() {
        assert!(parse_config("[data]\n").is_err());
    }
}
