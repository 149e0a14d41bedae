pub mod assemble;
pub mod catalog;
pub mod combinations;
pub mod content;
pub mod db;
pub mod dedup;
pub mod eligibility;
pub mod engine;
pub mod error;
pub mod geography;
pub mod locale;
pub mod log_once;
pub mod models;
pub mod options;
pub mod ranking;
pub mod sitemap;

pub use catalog::{CatalogSnapshot, CatalogSource, StaticCatalog};
pub use content::ContentConfig;
pub use db::SqliteCatalog;
pub use eligibility::Matcher;
pub use engine::{Pipeline, SitemapEngine};
pub use error::{ConfigError, RenderError, SourceError};
pub use models::{GenerationMode, LinkRecord, RouteEntry, RouteSet};
pub use options::GenerationOptions;

pub fn version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
