use std::path::PathBuf;

use routegen_core::{ContentConfig, Pipeline, RouteSet};

pub mod export;
pub mod load;

/// One generation run against a SQLite catalog. A failed or timed-out read degrades to the
/// static route set rather than failing the run.
pub async fn route_set(sqlite: PathBuf, pipeline: &Pipeline, content: &ContentConfig) -> RouteSet {
    let fetched = load::fetch_catalog(sqlite, pipeline.options().read_timeout_ms).await;
    pipeline.complete(fetched, content)
}
