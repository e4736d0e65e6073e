use std::path::Path;

use serde::{Deserialize, Deserializer};

/// Application configuration
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub style: StyleConfig,
    pub server: ServerConfig,
    pub logging: LoggingConfig,
}

/// Where the prediction service lives
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct StyleConfig {
    pub host: String,
    #[serde(deserialize_with = "string_or_number")]
    pub port: String,
    /// Transport timeout in seconds, 0 disables it
    pub timeout_secs: u64,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    pub level: String,
    pub format: LogFormat,
}

#[derive(Debug, Clone, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    #[default]
    Pretty,
    Json,
}

impl Default for StyleConfig {
    fn default() -> Self {
        Self {
            host: "localhost".to_string(),
            port: "8080".to_string(),
            timeout_secs: 30,
        }
    }
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: 3000,
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            format: LogFormat::default(),
        }
    }
}

fn string_or_number<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Port {
        Number(u64),
        Text(String),
    }

    Ok(match Port::deserialize(deserializer)? {
        Port::Number(n) => n.to_string(),
        Port::Text(s) => s,
    })
}

impl AppConfig {
    pub fn load() -> Result<Self, config::ConfigError> {
        Self::load_from(Path::new("config"))
    }

    /// Layer `{dir}/default`, `{dir}/local`, `APP__*` variables, then the flat
    /// `STYLE_HOST` / `STYLE_PORT` overrides. Empty flat variables count as unset.
    pub fn load_from(dir: &Path) -> Result<Self, config::ConfigError> {
        let config = config::Config::builder()
            .add_source(config::File::from(dir.join("default")).required(false))
            .add_source(config::File::from(dir.join("local")).required(false))
            .add_source(
                config::Environment::with_prefix("APP")
                    .separator("__")
                    .try_parsing(true),
            )
            .set_override_option("style.host", non_empty_env("STYLE_HOST"))?
            .set_override_option("style.port", non_empty_env("STYLE_PORT"))?
            .build()?;

        config.try_deserialize()
    }
}

fn non_empty_env(key: &str) -> Option<String> {
    std::env::var(key).ok().filter(|v| !v.trim().is_empty())
}
