//! Configuration handling
//!
//! Settings come from three layers: the JSON config file, environment
//! variables and command-line flags. Flags win over the environment, which
//! wins over the file; anything left unset falls back to the defaults.

use crate::state::FormVariant;
use crate::submission::{DEFAULT_REQUEST_TIMEOUT, DEFAULT_SIMULATED_DELAY};
use anyhow::{Context, Result};
use clap::Parser;
use directories::ProjectDirs;
use reqwest::Url;
use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;
use thiserror::Error;

/// Command-line interface
#[derive(Debug, Default, Parser)]
#[command(name = "oduo-leads", version, about = "Lead capture form for ODuo landing pages")]
pub struct Cli {
    /// Landing page whose form is shown
    #[arg(long, value_enum, env = "ODUO_LEADS_PAGE")]
    pub page: Option<FormVariant>,

    /// CRM webhook that receives leads; without it submissions are simulated
    #[arg(long, env = "ODUO_LEADS_WEBHOOK_URL")]
    pub webhook_url: Option<String>,

    /// Bearer token sent to the CRM webhook
    #[arg(long, env = "ODUO_LEADS_WEBHOOK_TOKEN", hide_env_values = true)]
    pub webhook_token: Option<String>,

    /// Latency of the simulated CRM, in milliseconds
    #[arg(long)]
    pub delay_ms: Option<u64>,

    /// Read configuration from this file instead of the default location
    #[arg(long, value_name = "PATH")]
    pub config: Option<PathBuf>,
}

/// User configuration file
#[derive(Debug, Clone, Deserialize, Default, PartialEq)]
pub struct LeadConfig {
    /// Landing page variant
    pub page: Option<FormVariant>,
    /// CRM webhook URL
    pub webhook_url: Option<String>,
    /// CRM webhook bearer token
    pub webhook_token: Option<String>,
    /// Simulated CRM latency
    pub simulated_delay_ms: Option<u64>,
    /// Webhook request timeout
    pub request_timeout_secs: Option<u64>,
}

impl LeadConfig {
    /// Get the config file path
    pub fn config_path() -> Option<PathBuf> {
        ProjectDirs::from("br.com", "oduo", "oduo-leads")
            .map(|dirs| dirs.config_dir().join("config.json"))
    }

    /// Load configuration from the default location
    pub fn load() -> Result<Self> {
        match Self::config_path() {
            Some(path) => Self::load_from(&path),
            None => Ok(Self::default()),
        }
    }

    /// Load configuration from a file; a missing file yields the defaults
    pub fn load_from(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }
        let content = fs::read_to_string(path)
            .with_context(|| format!("failed to read {}", path.display()))?;
        let config: LeadConfig = serde_json::from_str(&content)
            .with_context(|| format!("invalid config file {}", path.display()))?;
        Ok(config)
    }
}

/// Invalid configuration values
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("invalid webhook URL {url:?}: {reason}")]
    InvalidUrl { url: String, reason: String },

    #[error("webhook URL must use http or https, got {0:?}")]
    UnsupportedScheme(String),

    #[error("request timeout must be at least one second")]
    ZeroTimeout,
}

/// Fully resolved runtime settings
#[derive(Debug, Clone, PartialEq)]
pub struct Settings {
    pub page: FormVariant,
    pub webhook_url: Option<Url>,
    pub webhook_token: Option<String>,
    pub simulated_delay: Duration,
    pub request_timeout: Duration,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            page: FormVariant::default(),
            webhook_url: None,
            webhook_token: None,
            simulated_delay: DEFAULT_SIMULATED_DELAY,
            request_timeout: DEFAULT_REQUEST_TIMEOUT,
        }
    }
}

impl Settings {
    /// Merge command-line/environment values over the config file
    pub fn resolve(cli: &Cli, file: &LeadConfig) -> Result<Self, ConfigError> {
        let defaults = Self::default();

        let webhook_url = cli
            .webhook_url
            .as_deref()
            .or(file.webhook_url.as_deref())
            .map(str::trim)
            .filter(|url| !url.is_empty())
            .map(parse_webhook_url)
            .transpose()?;

        let request_timeout = match file.request_timeout_secs {
            Some(0) => return Err(ConfigError::ZeroTimeout),
            Some(secs) => Duration::from_secs(secs),
            None => defaults.request_timeout,
        };

        let settings = Self {
            page: cli.page.or(file.page).unwrap_or(defaults.page),
            webhook_url,
            webhook_token: cli
                .webhook_token
                .clone()
                .or_else(|| file.webhook_token.clone()),
            simulated_delay: cli
                .delay_ms
                .or(file.simulated_delay_ms)
                .map(Duration::from_millis)
                .unwrap_or(defaults.simulated_delay),
            request_timeout,
        };

        tracing::info!(
            page = %settings.page,
            webhook = settings.webhook_url.is_some(),
            "Configuration resolved"
        );
        Ok(settings)
    }

    /// Parse the command line, read the config file and resolve
    pub fn load(cli: &Cli) -> Result<Self> {
        let file = match &cli.config {
            Some(path) => LeadConfig::load_from(path)?,
            None => LeadConfig::load()?,
        };
        Ok(Self::resolve(cli, &file)?)
    }
}

fn parse_webhook_url(raw: &str) -> Result<Url, ConfigError> {
    let url = Url::parse(raw).map_err(|e| ConfigError::InvalidUrl {
        url: raw.to_string(),
        reason: e.to_string(),
    })?;
    match url.scheme() {
        "http" | "https" => Ok(url),
        other => Err(ConfigError::UnsupportedScheme(other.to_string())),
    }
}
