use std::{net::SocketAddr, str::FromStr, time::Duration};

use anyhow::Context;

const DEFAULT_TOKEN_TTL_SECS: u64 = 7 * 24 * 60 * 60;

/// Which repository implementation backs the services.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StorageKind {
    Sqlite,
    Memory,
}

impl FromStr for StorageKind {
    type Err = anyhow::Error;

    fn from_str(value: &str) -> anyhow::Result<Self> {
        match value.trim().to_ascii_lowercase().as_str() {
            "sqlite" => Ok(StorageKind::Sqlite),
            "memory" => Ok(StorageKind::Memory),
            other => anyhow::bail!("BUDGIFY_STORAGE must be sqlite or memory, got '{other}'"),
        }
    }
}

#[derive(Debug, Clone)]
pub struct Config {
    pub listen_addr: SocketAddr,
    pub storage: StorageKind,
    pub db_path: String,
    pub cors_allow: Vec<String>,
    pub request_timeout: Duration,
    /// Raw secret as configured; `None` means a random per-process key.
    pub jwt_secret: Option<String>,
    pub token_ttl: Duration,
}

impl Config {
    pub fn from_env() -> anyhow::Result<Self> {
        dotenvy::dotenv().ok();
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> anyhow::Result<Self> {
        let listen_addr: SocketAddr = lookup("BUDGIFY_LISTEN_ADDR")
            .unwrap_or_else(|| "0.0.0.0:3000".to_string())
            .parse()
            .context("Invalid BUDGIFY_LISTEN_ADDR")?;
        let storage = lookup("BUDGIFY_STORAGE")
            .map(|raw| raw.parse())
            .transpose()?
            .unwrap_or(StorageKind::Sqlite);
        let db_path = lookup("BUDGIFY_DB_PATH").unwrap_or_else(|| "./data/budgify.db".into());
        let cors_allow = lookup("BUDGIFY_CORS_ALLOW_ORIGINS")
            .unwrap_or_else(|| "*".into())
            .split(',')
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty())
            .collect();
        let timeout_ms: u64 = lookup("BUDGIFY_REQUEST_TIMEOUT_MS")
            .and_then(|raw| raw.parse().ok())
            .unwrap_or(30000);
        let jwt_secret = lookup("BUDGIFY_JWT_SECRET").filter(|s| !s.trim().is_empty());
        let token_ttl_secs = match lookup("BUDGIFY_TOKEN_TTL_SECS") {
            Some(raw) => raw
                .trim()
                .parse()
                .context("BUDGIFY_TOKEN_TTL_SECS must be a number of seconds")?,
            None => DEFAULT_TOKEN_TTL_SECS,
        };

        Ok(Self {
            listen_addr,
            storage,
            db_path,
            cors_allow,
            request_timeout: Duration::from_millis(timeout_ms),
            jwt_secret,
            token_ttl: Duration::from_secs(token_ttl_secs),
        })
    }
}
