//! sitemaps.org rendering of a finished route list.

use quick_xml::se::Serializer;
use serde::Serialize;

use crate::error::RenderError;
use crate::models::RouteEntry;

pub const SITEMAP_NS: &str = "http://www.sitemaps.org/schemas/sitemap/0.9";
const XML_DECL: &str = "<?xml version=\"1.0\" encoding=\"UTF-8\"?>\n";

#[derive(Serialize)]
#[serde(rename = "urlset")]
struct UrlSet<'a> {
    #[serde(rename = "@xmlns")]
    xmlns: &'static str,
    url: Vec<UrlNode<'a>>,
}

#[derive(Serialize)]
struct UrlNode<'a> {
    loc: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    lastmod: Option<&'a str>,
    priority: String,
}

#[derive(Serialize)]
#[serde(rename = "sitemapindex")]
struct SitemapIndex<'a> {
    #[serde(rename = "@xmlns")]
    xmlns: &'static str,
    sitemap: Vec<IndexNode<'a>>,
}

#[derive(Serialize)]
struct IndexNode<'a> {
    loc: &'a str,
}

fn to_xml<T: Serialize>(doc: &T) -> Result<String, RenderError> {
    let mut body = String::new();
    let mut ser = Serializer::new(&mut body);
    ser.indent(' ', 2);
    doc.serialize(ser)?;
    Ok(format!("{XML_DECL}{body}\n"))
}

pub fn render_urlset(routes: &[RouteEntry]) -> Result<String, RenderError> {
    let doc = UrlSet {
        xmlns: SITEMAP_NS,
        url: routes
            .iter()
            .map(|r| UrlNode { loc: &r.url, lastmod: r.lastmod.as_deref(), priority: format!("{:.2}", r.priority) })
            .collect(),
    };
    to_xml(&doc)
}

pub fn render_index(sitemap_urls: &[String]) -> Result<String, RenderError> {
    let doc = SitemapIndex {
        xmlns: SITEMAP_NS,
        sitemap: sitemap_urls.iter().map(|loc| IndexNode { loc }).collect(),
    };
    to_xml(&doc)
}

/// Split into urlset-sized pieces. `max_per_file` of 0 is treated as 1.
pub fn chunk_routes(routes: &[RouteEntry], max_per_file: usize) -> Vec<&[RouteEntry]> {
    if routes.is_empty() {
        return vec![routes];
    }
    routes.chunks(max_per_file.max(1)).collect()
}
