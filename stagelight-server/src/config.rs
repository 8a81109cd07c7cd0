//! Configuration loading
//!
//! Each setting resolves in priority order: command-line argument, then
//! environment variable (handled by clap's env support), then the TOML
//! config file, then the compiled default.

use clap::Parser;
use serde::Deserialize;
use stagelight_common::{Error, Result};
use std::path::{Path, PathBuf};

/// Default listen port, matching the original deployment
pub const DEFAULT_PORT: u16 = 3000;

/// Command-line arguments
#[derive(Parser, Debug, Default)]
#[command(
    name = "stagelight-server",
    version,
    about = "Landing-page content and backdrop service"
)]
pub struct Args {
    /// Address to bind
    #[arg(long, env = "STAGELIGHT_HOST")]
    pub host: Option<String>,

    /// Port to listen on
    #[arg(short, long, env = "STAGELIGHT_PORT")]
    pub port: Option<u16>,

    /// Directory containing the content documents
    #[arg(long, env = "STAGELIGHT_CONTENT_DIR")]
    pub content_dir: Option<PathBuf>,

    /// Allowed CORS origin for the web front end
    #[arg(long, env = "CORS_ORIGIN")]
    pub cors_origin: Option<String>,

    /// Explicit config file path (otherwise the platform config dir is
    /// checked)
    #[arg(long, env = "STAGELIGHT_CONFIG")]
    pub config: Option<PathBuf>,
}

/// Optional settings from the TOML config file
#[derive(Debug, Deserialize, Default)]
struct FileConfig {
    host: Option<String>,
    port: Option<u16>,
    content_dir: Option<PathBuf>,
    cors_origin: Option<String>,
}

/// Resolved service configuration
#[derive(Debug, Clone)]
pub struct Config {
    pub host: String,
    pub port: u16,
    pub content_dir: PathBuf,
    pub cors_origin: Option<String>,
}

impl Config {
    /// Resolve the final configuration from arguments, config file, and
    /// defaults.
    pub fn resolve(args: Args) -> Result<Self> {
        let file = load_file_config(args.config.as_deref())?;

        Ok(Self {
            host: args
                .host
                .or(file.host)
                .unwrap_or_else(|| "127.0.0.1".to_string()),
            port: args.port.or(file.port).unwrap_or(DEFAULT_PORT),
            content_dir: args
                .content_dir
                .or(file.content_dir)
                .unwrap_or_else(|| PathBuf::from("content")),
            cors_origin: args.cors_origin.or(file.cors_origin),
        })
    }
}

fn load_file_config(explicit: Option<&Path>) -> Result<FileConfig> {
    let path = match explicit {
        Some(path) => Some(path.to_path_buf()),
        // An absent default config file is not an error; an explicit one
        // that fails to load is.
        None => default_config_path().filter(|p| p.exists()),
    };

    let Some(path) = path else {
        return Ok(FileConfig::default());
    };

    let raw = std::fs::read_to_string(&path)
        .map_err(|e| Error::Config(format!("Failed to read {}: {}", path.display(), e)))?;
    toml::from_str(&raw)
        .map_err(|e| Error::Config(format!("Invalid config file {}: {}", path.display(), e)))
}

fn default_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|d| d.join("stagelight").join("config.toml"))
}
