use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Args;

/// Options shared by every console command, env-overridable
#[derive(Args, Debug)]
pub struct GlobalArgs {
    /// Backend API base URL (e.g. https://courses.example.com/api)
    #[arg(long, env = "COURSE_API_URL", default_value = "http://localhost:8080/api")]
    pub api_url: String,

    /// Session file path (defaults to the user config directory)
    #[arg(long, env = "COURSE_SESSION_FILE")]
    pub session_file: Option<String>,

    /// HTTP request timeout in seconds
    #[arg(long, env = "HTTP_REQUEST_TIMEOUT", default_value = "30")]
    pub http_timeout: u64,

    /// Log level (trace, debug, info, warn, error)
    #[arg(long, env = "LOG_LEVEL", default_value = "info")]
    pub log_level: String,
}

#[derive(Clone, Debug)]
pub struct Config {
    pub api_url: String,
    pub session_file: PathBuf,
    pub http_timeout: u64,
    pub log_level: String,
}

impl Config {
    pub fn from_args(args: &GlobalArgs) -> Result<Self> {
        let api_url = args.api_url.trim_end_matches('/').to_string();

        let session_file = match args.session_file {
            Some(ref path) => expand_tilde(path),
            None => default_session_file()?,
        };

        Ok(Config {
            api_url,
            session_file,
            http_timeout: args.http_timeout,
            log_level: args.log_level.clone(),
        })
    }

    pub fn validate(&self) -> Result<()> {
        if !self.api_url.starts_with("http://") && !self.api_url.starts_with("https://") {
            anyhow::bail!("API URL must start with http:// or https://: {}", self.api_url);
        }
        if self.http_timeout == 0 {
            anyhow::bail!("HTTP timeout must be greater than zero");
        }
        Ok(())
    }
}

fn default_session_file() -> Result<PathBuf> {
    let base = dirs::config_dir().context("Could not determine the user config directory")?;
    Ok(base.join("course-console").join("session.json"))
}

/// Expand a leading ~ to the home directory
fn expand_tilde(path: &str) -> PathBuf {
    if let Some(stripped) = path.strip_prefix("~/") {
        if let Some(home) = dirs::home_dir() {
            return home.join(stripped);
        }
    }
    PathBuf::from(path)
}
