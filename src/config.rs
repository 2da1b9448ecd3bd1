//! Server configuration from environment variables

use std::env;
use std::net::SocketAddr;
use std::path::{Path, PathBuf};

use thiserror::Error;

/// Default corpus file name, resolved against the current directory
pub const DEFAULT_CORPUS_FILE: &str = "life_situations.jsonl";

pub const CORPUS_PATH_VAR: &str = "MINDFUL_CORPUS_PATH";
pub const HTTP_ADDR_VAR: &str = "MINDFUL_HTTP_ADDR";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Invalid {var} '{value}': {reason}")]
    InvalidValue {
        var: &'static str,
        value: String,
        reason: String,
    },
}

/// How the server exposes the search engine
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Transport {
    /// MCP JSON-RPC over stdin/stdout
    Stdio,
    /// REST API on the given address
    Http(SocketAddr),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerConfig {
    pub corpus_path: PathBuf,
    pub transport: Transport,
}

impl ServerConfig {
    /// Read configuration from the process environment
    pub fn from_env() -> Result<Self, ConfigError> {
        let current_dir = env::current_dir().unwrap_or_else(|_| PathBuf::from("."));
        Self::from_vars(
            &current_dir,
            env::var(CORPUS_PATH_VAR).ok(),
            env::var(HTTP_ADDR_VAR).ok(),
        )
    }

    /// Build configuration from raw variable values. Relative corpus paths
    /// are resolved against `current_dir`.
    pub fn from_vars(
        current_dir: &Path,
        corpus_path: Option<String>,
        http_addr: Option<String>,
    ) -> Result<Self, ConfigError> {
        let corpus_path = match corpus_path.filter(|p| !p.trim().is_empty()) {
            Some(path) if Path::new(&path).is_absolute() => PathBuf::from(path),
            Some(path) => current_dir.join(path),
            None => current_dir.join(DEFAULT_CORPUS_FILE),
        };

        let transport = match http_addr.filter(|a| !a.trim().is_empty()) {
            Some(addr) => {
                let parsed = addr
                    .trim()
                    .parse::<SocketAddr>()
                    .map_err(|e| ConfigError::InvalidValue {
                        var: HTTP_ADDR_VAR,
                        value: addr.clone(),
                        reason: e.to_string(),
                    })?;
                Transport::Http(parsed)
            }
            None => Transport::Stdio,
        };

        Ok(Self {
            corpus_path,
            transport,
        })
    }
}
