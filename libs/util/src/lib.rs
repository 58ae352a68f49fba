use std::path::Path;

use anyhow::{bail, Context};
use serde::Deserialize;
use toml::{map::Map, Value};
use tracing::info;

pub static SECRETS_FILE: &str = "Secrets.toml";

#[derive(Clone, Debug, Default, Deserialize, PartialEq)]
#[serde(default)]
pub struct Config {
    pub server: Server,
    pub gemini: Gemini,
}

#[derive(Clone, Debug, Deserialize, PartialEq)]
#[serde(default)]
pub struct Server {
    pub host: String,
    pub port: u16,
    /// Empty means any origin.
    pub allowed_origins: Vec<String>,
}

impl Default for Server {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: 8000,
            allowed_origins: vec![],
        }
    }
}

#[derive(Clone, Debug, Deserialize, PartialEq)]
#[serde(default)]
pub struct Gemini {
    pub base_url: String,
    pub text_model: String,
    pub vision_model: String,
    pub timeout_secs: u64,
}

impl Default for Gemini {
    fn default() -> Self {
        Self {
            base_url: "https://generativelanguage.googleapis.com/v1beta"
                .to_string(),
            text_model: "gemini-1.5-flash".to_string(),
            vision_model: "gemini-1.5-flash".to_string(),
            timeout_secs: 60,
        }
    }
}

/// Reads the toml config at `path`. A missing file yields the defaults.
pub fn load_config(path: &Path) -> anyhow::Result<Config> {
    if !path.exists() {
        info!(task = "load config", path = %path.display(), "not found, using defaults");
        return Ok(Config::default());
    }

    let config = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read {}", path.display()))?;

    toml::from_str::<Config>(&config)
        .with_context(|| format!("failed to parse {}", path.display()))
}

/// Looks `name` up in the environment first, then in `secrets_path`.
pub fn load_secret(name: &str, secrets_path: &Path) -> anyhow::Result<String> {
    if let Ok(value) = std::env::var(name) {
        if !value.is_empty() {
            return Ok(value);
        }
    }

    if secrets_path.exists() {
        let secrets = std::fs::read_to_string(secrets_path)
            .with_context(|| format!("failed to read {}", secrets_path.display()))?;
        let secrets = toml::from_str::<Map<String, Value>>(&secrets)
            .with_context(|| format!("failed to parse {}", secrets_path.display()))?;

        if let Some(value) = secrets.get(name).and_then(Value::as_str) {
            if !value.is_empty() {
                return Ok(value.to_string());
            }
        }
    }

    bail!("{} was not found", name)
}

#[cfg(test)]
mod test {
    use std::io::Write;

    use super::*;

    #[test]
    fn test_partial_config_keeps_defaults() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(
            file,
            r#"
[server]
port = 3000

[gemini]
vision_model = "gemini-1.5-pro"
timeout_secs = 30
"#
        )
        .unwrap();

        let config = load_config(file.path()).unwrap();

        assert_eq!(config.server.port, 3000);
        assert_eq!(config.server.host, "0.0.0.0");
        assert_eq!(config.gemini.vision_model, "gemini-1.5-pro");
        assert_eq!(config.gemini.text_model, "gemini-1.5-flash");
        assert_eq!(config.gemini.timeout_secs, 30);
    }

    #[test]
    fn test_missing_config_is_default() {
        let dir = tempfile::tempdir().unwrap();

        let config = load_config(&dir.path().join("Config.toml")).unwrap();

        assert_eq!(config, Config::default());
    }

    #[test]
    fn test_broken_config_is_error() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "[server\nport = ").unwrap();

        assert!(load_config(file.path()).is_err());
    }

    #[test]
    fn test_secret_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, r#"UTIL_TEST_ONLY_IN_FILE = "from-file""#).unwrap();

        let secret = load_secret("UTIL_TEST_ONLY_IN_FILE", file.path()).unwrap();

        assert_eq!(secret, "from-file");
    }

    #[test]
    fn test_missing_secret_is_error() {
        let dir = tempfile::tempdir().unwrap();

        let result =
            load_secret("UTIL_TEST_NOT_SET_ANYWHERE", &dir.path().join("x.toml"));

        assert!(result.is_err());
    }
}
