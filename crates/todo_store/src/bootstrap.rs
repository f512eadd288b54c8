//! Connection bootstrapping.
//!
//! Normalizes provider connection strings, selects a storage backend, and
//! retries schema initialization so a database that starts after the
//! service process does not take the service down with it.

use std::time::Duration;

use crate::{StoreError, StoreResult, TodoStore};

/// Provider URL prefixes rewritten to the schemes the sqlx drivers expect.
///
/// Hosting providers hand out connection strings written for other stacks;
/// each entry maps one provider convention to the canonical driver scheme.
/// Extend the table to support further conventions.
const SCHEME_REWRITES: &[(&str, &str)] = &[
    ("postgresql://", "postgres://"),
    ("mysql+pymysql://", "mysql://"),
    ("sqlite3://", "sqlite://"),
];

/// Rewrites a provider-specific connection URL to the driver scheme.
///
/// URLs that match no table entry are returned unchanged.
pub fn normalize_database_url(url: &str) -> String {
    for (prefix, replacement) in SCHEME_REWRITES {
        if let Some(rest) = url.strip_prefix(prefix) {
            return format!("{replacement}{rest}");
        }
    }
    url.to_string()
}

/// Storage backend selected from the connection string.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Backend {
    /// In-memory storage, selected when no connection string is configured.
    Memory,
    /// PostgreSQL, identified by a `postgres://` URL.
    Postgres(String),
    /// MySQL, identified by a `mysql://` URL.
    MySql(String),
    /// SQLite, identified by a `sqlite:` URL.
    Sqlite(String),
}

impl Backend {
    /// Selects a backend from the optional `DATABASE_URL` value.
    ///
    /// The URL is normalized first; a normalized URL whose scheme matches
    /// no compiled driver is a configuration error.
    pub fn from_database_url(url: Option<&str>) -> StoreResult<Self> {
        let Some(raw) = url else {
            return Ok(Self::Memory);
        };
        let url = normalize_database_url(raw);
        if url.starts_with("postgres://") {
            Ok(Self::Postgres(url))
        } else if url.starts_with("mysql://") {
            Ok(Self::MySql(url))
        } else if url.starts_with("sqlite:") {
            Ok(Self::Sqlite(url))
        } else {
            Err(StoreError::UnsupportedScheme(url))
        }
    }

    /// Backend label, matching [`TodoStore::backend`].
    pub fn name(&self) -> &'static str {
        match self {
            Self::Memory => "in-memory",
            Self::Postgres(_) => "postgres",
            Self::MySql(_) => "mysql",
            Self::Sqlite(_) => "sqlite",
        }
    }
}

/// Retry policy for schema initialization.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RetryPolicy {
    /// Maximum number of initialization attempts.
    pub max_attempts: u32,
    /// Fixed sleep between attempts.
    pub interval: Duration,
}

impl Default for RetryPolicy {
    fn default() -> Self {
        Self {
            max_attempts: 12,
            interval: Duration::from_secs(3),
        }
    }
}

/// Runs `store.init()` until it succeeds or the policy is exhausted.
///
/// Sleeps a fixed interval between attempts; no backoff, no jitter. On
/// exhaustion the last error is returned so the caller can decide whether
/// startup continues.
pub async fn initialize_with_retry<S>(store: &S, policy: &RetryPolicy) -> StoreResult<()>
where
    S: TodoStore + ?Sized,
{
    let mut attempt = 1u32;
    loop {
        match store.init().await {
            Ok(()) => {
                tracing::info!(backend = store.backend(), attempt, "Storage initialized");
                return Ok(());
            }
            Err(err) if attempt < policy.max_attempts => {
                tracing::warn!(
                    attempt,
                    max_attempts = policy.max_attempts,
                    error = %err,
                    "Storage initialization failed, retrying"
                );
                tokio::time::sleep(policy.interval).await;
                attempt += 1;
            }
            Err(err) => {
                tracing::error!(
                    attempts = policy.max_attempts,
                    error = %err,
                    "Storage initialization failed, giving up"
                );
                return Err(err);
            }
        }
    }
}
