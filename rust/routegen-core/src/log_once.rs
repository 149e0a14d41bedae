use std::collections::HashSet;
use std::sync::Mutex;

use tracing::warn;

/// Emits each keyed warning at most once for the lifetime of the guard.
#[derive(Debug, Default)]
pub struct WarnOnce {
    seen: Mutex<HashSet<&'static str>>,
}

impl WarnOnce {
    pub fn new() -> Self { Self::default() }

    /// Returns true when this call actually logged.
    pub fn warn(&self, key: &'static str, error: &dyn std::fmt::Display, message: &str) -> bool {
        let first = match self.seen.lock() {
            Ok(mut seen) => seen.insert(key),
            Err(poisoned) => poisoned.into_inner().insert(key),
        };
        if first {
            warn!(key, error = %error, "{}", message);
        }
        first
    }
}
