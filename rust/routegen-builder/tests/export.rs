use std::path::Path;
use std::time::{Duration, Instant};

use routegen_builder::build::export::{write_outputs, LINKS_FILE, SITEMAP_FILE};
use routegen_builder::build::load::fetch_catalog;
use routegen_builder::build::route_set;
use routegen_core::{ContentConfig, GenerationMode, GenerationOptions, LinkRecord, Pipeline, RouteEntry, RouteSet, SourceError};
use rusqlite::Connection;

fn create_catalog(path: &Path) {
    let conn = Connection::open(path).unwrap();
    conn.execute_batch(
        r#"
        CREATE TABLE countries (id TEXT PRIMARY KEY, slug TEXT NOT NULL);
        CREATE TABLE destinations (id TEXT PRIMARY KEY, slug TEXT NOT NULL, country_id TEXT NOT NULL);
        CREATE TABLE micro_zones (id TEXT PRIMARY KEY, slug TEXT NOT NULL, destination_id TEXT NOT NULL);
        CREATE TABLE tours (
            id TEXT PRIMARY KEY, slug TEXT NOT NULL, country_id TEXT NOT NULL,
            destination_id TEXT NULL, micro_zone_id TEXT NULL, category TEXT NULL,
            featured INTEGER NOT NULL DEFAULT 0, status TEXT NOT NULL, updated_at TEXT NULL
        );
        CREATE TABLE locations (
            id TEXT PRIMARY KEY, name TEXT NOT NULL, slug TEXT NOT NULL, country_id TEXT NOT NULL,
            destination_id TEXT NULL, micro_zone_id TEXT NULL, updated_at TEXT NULL
        );
        CREATE TABLE bookings (id INTEGER PRIMARY KEY, hotel TEXT NULL);

        INSERT INTO countries VALUES ('DO', 'republica-dominicana');
        INSERT INTO destinations VALUES ('d1', 'punta-cana', 'DO');
        INSERT INTO tours VALUES ('t1', 'saona-island', 'DO', 'd1', NULL, NULL, 1, 'published', '2026-02-10T08:00:00Z');
        INSERT INTO locations VALUES ('l1', 'Riu Palace', 'riu-palace', 'DO', 'd1', NULL, NULL);
        INSERT INTO bookings (hotel) VALUES ('Riu Palace');
        "#,
    )
    .unwrap();
}

fn routes(n: usize) -> RouteSet {
    RouteSet {
        routes: (0..n)
            .map(|i| RouteEntry::new(format!("https://x.test/p{i}"), 0.5))
            .collect(),
        links: vec![LinkRecord {
            tour_slug: "saona-island".into(),
            hotel_slug: "riu-palace".into(),
            url: "https://x.test/tours/saona-island/recogida/riu-palace".into(),
        }],
        mode: GenerationMode::Full,
        stats: Default::default(),
    }
}

#[test]
fn single_urlset_when_under_file_limit() {
    let dir = tempfile::tempdir().unwrap();
    let opts = GenerationOptions { base_url: "https://x.test".into(), ..GenerationOptions::default() };
    let summary = write_outputs(&routes(3), &opts, dir.path()).unwrap();

    assert_eq!(summary.files, vec![dir.path().join(SITEMAP_FILE), dir.path().join(LINKS_FILE)]);
    let xml = std::fs::read_to_string(dir.path().join(SITEMAP_FILE)).unwrap();
    assert!(xml.contains("<urlset"));
    assert_eq!(xml.matches("<url>").count(), 3);

    let raw = std::fs::read_to_string(dir.path().join(LINKS_FILE)).unwrap();
    let links: Vec<LinkRecord> = serde_json::from_str(&raw).unwrap();
    assert_eq!(links.len(), 1);
    assert_eq!(links[0].hotel_slug, "riu-palace");
}

#[test]
fn splits_into_numbered_files_with_index() {
    let dir = tempfile::tempdir().unwrap();
    let opts = GenerationOptions {
        base_url: "https://x.test".into(),
        max_urls_per_file: 2,
        ..GenerationOptions::default()
    };
    let summary = write_outputs(&routes(5), &opts, dir.path()).unwrap();
    assert_eq!(summary.files.len(), 5);
    assert_eq!(summary.urls, 5);

    for (i, expected) in [(1, 2), (2, 2), (3, 1)] {
        let xml = std::fs::read_to_string(dir.path().join(format!("sitemap-{i}.xml"))).unwrap();
        assert_eq!(xml.matches("<url>").count(), expected);
    }
    let index = std::fs::read_to_string(dir.path().join(SITEMAP_FILE)).unwrap();
    assert!(index.contains("<sitemapindex"));
    assert!(index.contains("<loc>https://x.test/sitemap-3.xml</loc>"));
    assert!(!index.contains("sitemap-4.xml"));
}

#[tokio::test]
async fn reads_catalog_file_and_generates_combinations() {
    let dir = tempfile::tempdir().unwrap();
    let db = dir.path().join("catalog.db");
    create_catalog(&db);

    let pipeline = Pipeline::new(GenerationOptions::default());
    let set = route_set(db, &pipeline, &ContentConfig::default()).await;
    assert!(!set.mode.is_degraded());
    assert_eq!(set.links.len(), 1);
    assert_eq!(set.links[0].url, "https://proactivitis.com/tours/saona-island/recogida/riu-palace");
    assert!(set.routes.iter().any(|r| r.url == "https://proactivitis.com/fr/tours/saona-island"));
    assert!(!set.routes.iter().any(|r| r.url.ends_with("/fr/tours/saona-island/recogida/riu-palace")));
}

#[tokio::test]
async fn missing_database_degrades_to_static_routes() {
    let dir = tempfile::tempdir().unwrap();
    let pipeline = Pipeline::new(GenerationOptions::default());
    let set = route_set(dir.path().join("absent.db"), &pipeline, &ContentConfig::default()).await;

    assert!(set.mode.is_degraded());
    assert!(set.links.is_empty());
    assert_eq!(set.routes[0].url, "https://proactivitis.com/");

    let out = dir.path().join("out");
    write_outputs(&set, pipeline.options(), &out).unwrap();
    assert!(out.join(SITEMAP_FILE).exists());
}

#[test]
fn locked_catalog_times_out_and_releases_the_runtime() {
    let dir = tempfile::tempdir().unwrap();
    let db = dir.path().join("catalog.db");
    create_catalog(&db);
    let writer = Connection::open(&db).unwrap();
    writer.execute_batch("BEGIN EXCLUSIVE;").unwrap();

    let started = Instant::now();
    let rt = tokio::runtime::Builder::new_multi_thread().enable_all().build().unwrap();
    let err = rt.block_on(fetch_catalog(db.clone(), 100)).unwrap_err();
    assert!(matches!(err, SourceError::Timeout { .. } | SourceError::Sqlite(_)), "{err}");

    let pipeline = Pipeline::new(GenerationOptions { read_timeout_ms: 100, ..GenerationOptions::default() });
    let set = rt.block_on(route_set(db, &pipeline, &ContentConfig::default()));
    assert!(set.mode.is_degraded());

    drop(rt);
    assert!(started.elapsed() < Duration::from_secs(3), "runtime held for {:?}", started.elapsed());
    writer.execute_batch("ROLLBACK;").unwrap();
}
