use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use routegen_core::sitemap::{chunk_routes, render_index, render_urlset};
use routegen_core::{GenerationOptions, RouteSet};
use tracing::info;

pub const SITEMAP_FILE: &str = "sitemap.xml";
pub const LINKS_FILE: &str = "links.json";

#[derive(Debug, Clone, PartialEq)]
pub struct ExportSummary {
    /// Every file written, in write order.
    pub files: Vec<PathBuf>,
    pub urls: usize,
    pub links: usize,
}

fn write_file(path: &Path, contents: &str) -> Result<()> {
    std::fs::write(path, contents).with_context(|| format!("writing {:?}", path))
}

/// Write `sitemap.xml` (an index over `sitemap-N.xml` when the routes need more than one file)
/// and `links.json` into `out_dir`.
pub fn write_outputs(set: &RouteSet, opts: &GenerationOptions, out_dir: &Path) -> Result<ExportSummary> {
    std::fs::create_dir_all(out_dir).with_context(|| format!("creating {:?}", out_dir))?;
    let mut files = Vec::new();

    let chunks = chunk_routes(&set.routes, opts.max_urls_per_file);
    if chunks.len() == 1 {
        let path = out_dir.join(SITEMAP_FILE);
        write_file(&path, &render_urlset(chunks[0])?)?;
        files.push(path);
    } else {
        let mut locs = Vec::with_capacity(chunks.len());
        for (i, chunk) in chunks.iter().enumerate() {
            let name = format!("sitemap-{}.xml", i + 1);
            let path = out_dir.join(&name);
            write_file(&path, &render_urlset(chunk)?)?;
            locs.push(opts.url_for(&format!("/{name}")));
            files.push(path);
        }
        let path = out_dir.join(SITEMAP_FILE);
        write_file(&path, &render_index(&locs)?)?;
        files.push(path);
    }

    let links_path = out_dir.join(LINKS_FILE);
    let f = File::create(&links_path).with_context(|| format!("creating {:?}", links_path))?;
    let mut w = BufWriter::new(f);
    serde_json::to_writer_pretty(&mut w, &set.links).context("serializing links")?;
    w.flush()?;
    files.push(links_path);

    info!(files = files.len(), urls = set.routes.len(), links = set.links.len(), "wrote sitemap outputs");
    Ok(ExportSummary { files, urls: set.routes.len(), links: set.links.len() })
}
