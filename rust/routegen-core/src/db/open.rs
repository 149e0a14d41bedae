use std::env;
use std::path::Path;
use std::time::Duration;

use rusqlite::{Connection, OpenFlags};

pub const DEFAULT_BUSY_TIMEOUT_MS: u64 = 5_000;

/// Settings for the read-only catalog connection.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DbOpenConfig {
    /// How long a read waits on a writer's lock before failing with SQLITE_BUSY.
    pub busy_timeout_ms: u64,
}

impl Default for DbOpenConfig {
    fn default() -> Self {
        Self { busy_timeout_ms: DEFAULT_BUSY_TIMEOUT_MS }
    }
}

impl DbOpenConfig {
    /// ROUTEGEN_SQLITE_BUSY_TIMEOUT_MS: integer ms. Missing/invalid keeps the default.
    pub fn from_env() -> Self {
        Self::from_vars(|name| env::var(name).ok())
    }

    fn from_vars<F: Fn(&str) -> Option<String>>(get: F) -> Self {
        let mut cfg = Self::default();
        if let Some(ms) = get("ROUTEGEN_SQLITE_BUSY_TIMEOUT_MS").and_then(|v| v.trim().parse::<u64>().ok()) {
            cfg.busy_timeout_ms = ms;
        }
        cfg
    }

    /// Never wait on a lock longer than `ms`.
    pub fn with_busy_limit(mut self, ms: u64) -> Self {
        self.busy_timeout_ms = self.busy_timeout_ms.min(ms);
        self
    }
}

/// Open an existing catalog read-only with `query_only` set. A missing file is an error.
pub fn open_read_only<P: AsRef<Path>>(path: P, cfg: &DbOpenConfig) -> rusqlite::Result<Connection> {
    let conn = Connection::open_with_flags(path, OpenFlags::SQLITE_OPEN_READ_ONLY | OpenFlags::SQLITE_OPEN_NO_MUTEX)?;
    conn.busy_timeout(Duration::from_millis(cfg.busy_timeout_ms))?;
    conn.pragma_update(None, "query_only", true)?;
    Ok(conn)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_file_is_an_error_not_a_new_db() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("catalog.db");
        assert!(open_read_only(&path, &DbOpenConfig::default()).is_err());
        assert!(!path.exists());
    }

    #[test]
    fn applies_busy_timeout_and_query_only() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("catalog.db");
        Connection::open(&path).unwrap().execute_batch("CREATE TABLE t (x INTEGER);").unwrap();

        let conn = open_read_only(&path, &DbOpenConfig { busy_timeout_ms: 250 }).unwrap();
        let busy: i64 = conn.pragma_query_value(None, "busy_timeout", |r| r.get(0)).unwrap();
        assert_eq!(busy, 250);
        let query_only: i64 = conn.pragma_query_value(None, "query_only", |r| r.get(0)).unwrap();
        assert_eq!(query_only, 1);
    }

    #[test]
    fn busy_limit_only_lowers() {
        let cfg = DbOpenConfig::from_vars(|_| Some("garbage".into()));
        assert_eq!(cfg.busy_timeout_ms, DEFAULT_BUSY_TIMEOUT_MS);
        assert_eq!(cfg.clone().with_busy_limit(100).busy_timeout_ms, 100);
        assert_eq!(cfg.with_busy_limit(60_000).busy_timeout_ms, DEFAULT_BUSY_TIMEOUT_MS);
    }
}
