use std::path::PathBuf;
use std::time::Duration;

use routegen_core::db::open::DbOpenConfig;
use routegen_core::{CatalogSnapshot, SourceError, SqliteCatalog};
use tracing::debug;

/// Bulk read on a blocking thread, bounded by `timeout_ms`. On timeout the running query is
/// interrupted and lock waits never exceed the same bound, so the abandoned read cannot
/// outlive the run by more than one timeout.
pub async fn fetch_catalog(path: PathBuf, timeout_ms: u64) -> Result<CatalogSnapshot, SourceError> {
    let cfg = DbOpenConfig::from_env().with_busy_limit(timeout_ms);
    let catalog = SqliteCatalog::open_with(&path, &cfg)?;
    let interrupt = catalog.interrupt_handle();

    let read = tokio::task::spawn_blocking(move || {
        let snapshot = CatalogSnapshot::fetch(&catalog)?;
        debug!(
            path = ?path,
            tours = snapshot.tours.len(),
            locations = snapshot.locations.len(),
            bookings = snapshot.bookings.len(),
            "loaded catalog"
        );
        Ok::<_, SourceError>(snapshot)
    });
    match tokio::time::timeout(Duration::from_millis(timeout_ms), read).await {
        Ok(Ok(res)) => res,
        Ok(Err(join)) => Err(SourceError::unavailable(format!("catalog read task failed: {join}"))),
        Err(_) => {
            interrupt.interrupt();
            Err(SourceError::Timeout { after_ms: timeout_ms })
        }
    }
}
