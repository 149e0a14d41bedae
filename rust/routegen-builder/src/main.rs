use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use tracing::info;
use tracing_subscriber::{fmt, EnvFilter};

use routegen_builder::build::{export::write_outputs, route_set};
use routegen_core::{ContentConfig, GenerationOptions, Pipeline};

#[derive(Parser, Debug)]
#[command(name = "routegen-builder", version, about = "Generate sitemap and tour/hotel link records from the marketplace catalog")]
struct Args {
    /// Path to the marketplace SQLite database
    #[arg(long = "sqlite", value_name = "PATH")]
    sqlite_path: PathBuf,

    /// Directory for sitemap.xml and links.json
    #[arg(long = "out-dir", value_name = "DIR")]
    out_dir: PathBuf,

    /// Generation options (JSON); ROUTEGEN_* env vars override it
    #[arg(long = "config", value_name = "PATH")]
    config: Option<PathBuf>,

    /// Static/landing/keyword route lists (JSON)
    #[arg(long = "content", value_name = "PATH")]
    content: Option<PathBuf>,

    /// Overrides base_url from config and env
    #[arg(long = "base-url", value_name = "URL")]
    base_url: Option<String>,
}

fn load_options(args: &Args) -> Result<GenerationOptions> {
    let mut opts = match &args.config {
        Some(p) => GenerationOptions::from_json_file(p).with_context(|| format!("loading options {:?}", p))?,
        None => GenerationOptions::default(),
    };
    opts.apply_env();
    if let Some(url) = &args.base_url {
        opts.base_url = url.trim_end_matches('/').to_string();
    }
    opts.validate().context("invalid generation options")?;
    Ok(opts)
}

#[tokio::main]
async fn main() -> Result<()> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    fmt().with_env_filter(filter).with_ansi(false).json().init();

    let args = Args::parse();
    info!(?args, core_version = %routegen_core::version(), "starting builder");

    let opts = load_options(&args)?;
    let content = match &args.content {
        Some(p) => ContentConfig::from_json_file(p).with_context(|| format!("loading content {:?}", p))?,
        None => ContentConfig::default(),
    };

    let pipeline = Pipeline::new(opts);
    let set = route_set(args.sqlite_path.clone(), &pipeline, &content).await;
    let summary = write_outputs(&set, pipeline.options(), &args.out_dir)?;
    info!(
        files = summary.files.len(),
        urls = summary.urls,
        links = summary.links,
        degraded = set.mode.is_degraded(),
        "done"
    );
    Ok(())
}
