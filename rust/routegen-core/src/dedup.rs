use indexmap::IndexMap;

use crate::models::{LinkRecord, RouteEntry};

/// First occurrence of each URL wins, keeping its priority, lastmod and position.
pub fn finalize(routes: Vec<RouteEntry>) -> Vec<RouteEntry> {
    let mut seen: IndexMap<String, RouteEntry> = IndexMap::with_capacity(routes.len());
    for r in routes {
        seen.entry(r.url.clone()).or_insert(r);
    }
    seen.into_values().collect()
}

pub fn finalize_links(links: Vec<LinkRecord>) -> Vec<LinkRecord> {
    let mut seen: IndexMap<String, LinkRecord> = IndexMap::with_capacity(links.len());
    for l in links {
        seen.entry(l.url.clone()).or_insert(l);
    }
    seen.into_values().collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn r(url: &str, priority: f32) -> RouteEntry {
        RouteEntry::new(url, priority)
    }

    #[test]
    fn first_seen_wins_regardless_of_priority() {
        let out = finalize(vec![r("a", 0.1), r("b", 0.5), r("a", 1.0)]);
        assert_eq!(out, vec![r("a", 0.1), r("b", 0.5)]);
    }

    #[test]
    fn idempotent() {
        let once = finalize(vec![r("x", 0.3), r("y", 0.2), r("x", 0.9), r("z", 0.1)]);
        let twice = finalize(once.clone());
        assert_eq!(once, twice);
    }

    #[test]
    fn links_dedup_by_url() {
        let l = |t: &str, url: &str| LinkRecord { tour_slug: t.into(), hotel_slug: "h".into(), url: url.into() };
        let out = finalize_links(vec![l("a", "u1"), l("b", "u1"), l("c", "u2")]);
        assert_eq!(out.len(), 2);
        assert_eq!(out[0].tour_slug, "a");
    }
}
