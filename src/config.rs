use clap::Parser;
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::PathBuf;
use thiserror::Error;
use tracing::{info, warn};

/// Errors raised while loading a configuration file
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Failed to read config file {path:?}: {source}")]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("Failed to parse config file {path:?}: {source}")]
    Parse {
        path: PathBuf,
        source: toml::de::Error,
    },
}

/// Configuration for the Cardboard server
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Config {
    /// URL for the database connection
    pub database_url: String,
    /// Address the HTTP server binds to
    pub host: String,
    /// Port the HTTP server listens on
    pub port: u16,
    /// Directory for JSON log files; no file logging when unset
    pub log_dir: Option<PathBuf>,
}

/// Update structure for Config with all fields optional
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct ConfigUpdate {
    #[serde(default)]
    pub database_url: Option<String>,
    #[serde(default)]
    pub host: Option<String>,
    #[serde(default)]
    pub port: Option<u16>,
    #[serde(default)]
    pub log_dir: Option<PathBuf>,
    /// Server URL used by the CLI client; ignored by the server
    #[serde(default)]
    pub server_url: Option<String>,
}

/// Command line arguments for the server
#[derive(Parser, Debug)]
#[clap(name = "cardboard", about = "A REST service for cards")]
pub struct CliArgs {
    /// Database URL
    #[clap(long, env = "DATABASE_URL")]
    pub database_url: Option<String>,

    /// Address to bind to
    #[clap(long, env = "CARDBOARD_HOST")]
    pub host: Option<String>,

    /// Port to listen on
    #[clap(long, env = "CARDBOARD_PORT")]
    pub port: Option<u16>,

    /// Directory for JSON log files
    #[clap(long, env = "CARDBOARD_LOG_DIR")]
    pub log_dir: Option<PathBuf>,

    /// Debug mode
    #[clap(long, env = "CARDBOARD_DEBUG", default_value_t = false)]
    pub debug: bool,
}

impl Config {
    /// Applies a config update to the current configuration
    pub fn apply_update(self, update: ConfigUpdate) -> Self {
        Self {
            database_url: update.database_url.unwrap_or(self.database_url),
            host: update.host.unwrap_or(self.host),
            port: update.port.unwrap_or(self.port),
            log_dir: update.log_dir.or(self.log_dir),
        }
    }

    /// The `host:port` string the server listens on
    pub fn listen_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

/// Returns the base (default) configuration
///
/// The database lives inside `config_path` when there is one, and in the
/// working directory otherwise.
pub fn base_config(config_path: Option<PathBuf>) -> Config {
    let database_url = config_path.map_or("cardboard.db".to_string(), |path| {
        path.join("cardboard.db").to_string_lossy().to_string()
    });

    Config {
        database_url,
        host: "127.0.0.1".to_string(),
        port: 3000,
        log_dir: None,
    }
}

/// Returns the platform config directory for Cardboard, if it can be determined
pub fn get_config_dir_path() -> Option<PathBuf> {
    match ProjectDirs::from("com", "cardboard", "cardboard") {
        Some(proj_dirs) => Some(proj_dirs.config_dir().to_path_buf()),
        None => {
            warn!("Could not determine XDG config directory, skipping config file");
            None
        }
    }
}

/// Loads configuration from a TOML file
///
/// A missing path or missing file yields an empty update.
pub fn config_from_file(config_path: Option<PathBuf>) -> Result<ConfigUpdate, ConfigError> {
    let Some(config_path) = config_path else {
        return Ok(ConfigUpdate::default());
    };

    if !config_path.exists() {
        info!("Config file not found at {:?}, using defaults", config_path);
        return Ok(ConfigUpdate::default());
    }

    let content = fs::read_to_string(&config_path).map_err(|source| ConfigError::Read {
        path: config_path.clone(),
        source,
    })?;

    let update = toml::from_str::<ConfigUpdate>(&content).map_err(|source| ConfigError::Parse {
        path: config_path.clone(),
        source,
    })?;

    info!("Loaded configuration from {:?}", config_path);
    Ok(update)
}

/// Loads configuration from command line arguments
pub fn config_from_args(args: &CliArgs) -> ConfigUpdate {
    ConfigUpdate {
        database_url: args.database_url.clone(),
        host: args.host.clone(),
        port: args.port,
        log_dir: args.log_dir.clone(),
        server_url: None,
    }
}

/// Builds the configuration from an optional config directory and the
/// command line arguments
///
/// The directory supplies the default database location and `config.toml`.
///
/// ### Errors
///
/// Returns an error if `config.toml` exists but cannot be read or parsed
pub fn load_config(config_dir: Option<PathBuf>, args: &CliArgs) -> Result<Config, ConfigError> {
    let base = base_config(config_dir.clone());
    let file_update = config_from_file(config_dir.map(|path| path.join("config.toml")))?;

    Ok(base
        .apply_update(file_update)
        .apply_update(config_from_args(args)))
}

/// Gets the complete configuration by combining defaults with
/// values from config file, environment variables, and command line arguments
/// in order of increasing precedence
pub fn get_config(args: &CliArgs) -> Result<Config, ConfigError> {
    let config_dir = get_config_dir_path().filter(|path| path.exists());
    load_config(config_dir, args)
}


#[cfg(test)]
mod prop_tests;
