//! Configuration management

use anyhow::Result;
use serde::Deserialize;
use std::fmt;
use std::path::PathBuf;

/// Base name of the optional config file (`site.toml`, `site.json`, ...)
const CONFIG_FILE_NAME: &str = "site";

#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    #[serde(default = "default_port")]
    pub port: u16,

    #[serde(default)]
    pub env: Environment,

    /// Show raw errors and backtraces instead of the 500 page
    #[serde(default)]
    pub debug: bool,

    /// Site name shown in titles and the footer
    #[serde(default = "default_name")]
    pub name: String,
}

fn default_port() -> u16 {
    4000
}

fn default_name() -> String {
    "Site".to_string()
}

impl Default for Config {
    fn default() -> Self {
        Self {
            port: default_port(),
            env: Environment::default(),
            debug: false,
            name: default_name(),
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Environment {
    #[default]
    Development,
    Staging,
    Production,
}

impl Environment {
    pub fn as_str(&self) -> &'static str {
        match self {
            Environment::Development => "development",
            Environment::Staging => "staging",
            Environment::Production => "production",
        }
    }
}

impl fmt::Display for Environment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Get config directory (SITE_CONFIG_DIR or the working directory)
pub fn config_dir() -> PathBuf {
    std::env::var("SITE_CONFIG_DIR")
        .map(PathBuf::from)
        .unwrap_or_else(|_| PathBuf::from("."))
}

/// Load configuration: defaults, then `site.*` in [`config_dir`], then env vars.
pub fn load_config() -> Result<Config> {
    let config_dir = config_dir();

    let mut builder = ::config::Config::builder()
        .set_default("port", default_port() as i64)?
        .set_default("env", Environment::default().as_str())?
        .set_default("debug", false)?
        .set_default("name", default_name())?
        .add_source(
            ::config::File::with_name(&config_dir.join(CONFIG_FILE_NAME).to_string_lossy())
                .required(false),
        )
        // SITE_PORT, SITE_ENV, SITE_DEBUG, SITE_NAME
        .add_source(
            ::config::Environment::with_prefix("SITE")
                .prefix_separator("_")
                .separator("__")
                .try_parsing(true),
        );

    // Precedence: SITE_PORT > PORT > config file > default
    if std::env::var("SITE_PORT").is_err() {
        if let Ok(port) = std::env::var("PORT") {
            if let Ok(port_num) = port.parse::<u16>() {
                builder = builder.set_override("port", port_num as i64)?;
            }
        }
    }

    let config = builder.build()?;

    Ok(config.try_deserialize()?)
}
