//! Process configuration, read from the environment (and an optional `.env`)

use std::env;
use std::net::SocketAddr;
use std::path::PathBuf;
use std::str::FromStr;
use std::time::Duration;

use anyhow::{Context, Result};

pub const ENV_LISTEN_ADDR: &str = "K8S_PLATFORM_LISTEN_ADDR";
pub const ENV_KUBECONFIG: &str = "K8S_PLATFORM_KUBECONFIG";
pub const ENV_POD_LOG_TAIL_LINES: &str = "K8S_PLATFORM_POD_LOG_TAIL_LINES";
pub const ENV_REQUEST_TIMEOUT_SECS: &str = "K8S_PLATFORM_REQUEST_TIMEOUT_SECS";
pub const ENV_LOG_DIR: &str = "K8S_PLATFORM_LOG_DIR";

const DEFAULT_LISTEN_ADDR: &str = "0.0.0.0:9090";
const DEFAULT_POD_LOG_TAIL_LINES: i64 = 2000;
const DEFAULT_REQUEST_TIMEOUT_SECS: u64 = 30;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    pub listen_addr: SocketAddr,
    /// Explicit kubeconfig; `None` infers in-cluster or `~/.kube/config`.
    pub kubeconfig: Option<PathBuf>,
    pub pod_log_tail_lines: i64,
    /// Read deadline attached to every control-plane call.
    pub request_timeout: Duration,
    /// When set, logs are also written to daily-rolled files here.
    pub log_dir: Option<PathBuf>,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            listen_addr: SocketAddr::from(([0, 0, 0, 0], 9090)),
            kubeconfig: None,
            pod_log_tail_lines: DEFAULT_POD_LOG_TAIL_LINES,
            request_timeout: Duration::from_secs(DEFAULT_REQUEST_TIMEOUT_SECS),
            log_dir: None,
        }
    }
}

impl AppConfig {
    /// Loads `.env` (if present) and then reads the process environment.
    pub fn load() -> Result<Self> {
        // Missing .env is fine
        let _ = dotenvy::dotenv();
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Builds the config from any key lookup; empty values count as unset.
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

        let listen_addr: SocketAddr = parse_or(
            get(ENV_LISTEN_ADDR),
            ENV_LISTEN_ADDR,
            DEFAULT_LISTEN_ADDR.parse()?,
        )?;
        let pod_log_tail_lines = parse_or(
            get(ENV_POD_LOG_TAIL_LINES),
            ENV_POD_LOG_TAIL_LINES,
            DEFAULT_POD_LOG_TAIL_LINES,
        )?;
        let timeout_secs = parse_or(
            get(ENV_REQUEST_TIMEOUT_SECS),
            ENV_REQUEST_TIMEOUT_SECS,
            DEFAULT_REQUEST_TIMEOUT_SECS,
        )?;

        if pod_log_tail_lines <= 0 {
            anyhow::bail!("{ENV_POD_LOG_TAIL_LINES} must be positive, got {pod_log_tail_lines}");
        }

        Ok(Self {
            listen_addr,
            kubeconfig: get(ENV_KUBECONFIG).map(PathBuf::from),
            pod_log_tail_lines,
            request_timeout: Duration::from_secs(timeout_secs),
            log_dir: get(ENV_LOG_DIR).map(PathBuf::from),
        })
    }
}

fn parse_or<T>(raw: Option<String>, key: &str, default: T) -> Result<T>
where
    T: FromStr,
    T::Err: std::error::Error + Send + Sync + 'static,
{
    match raw {
        Some(raw) => raw
            .trim()
            .parse()
            .with_context(|| format!("invalid value for {key}: '{raw}'")),
        None => Ok(default),
    }
}
