use tracing::{debug, info};

use crate::assemble::{assemble, combination_routes, content_routes, entity_routes, RouteCandidate, RouteSource};
use crate::catalog::{CatalogSnapshot, CatalogSource};
use crate::combinations::{generate, Caps};
use crate::content::ContentConfig;
use crate::dedup::{finalize, finalize_links};
use crate::eligibility::Matcher;
use crate::error::SourceError;
use crate::locale::{with_variants, LocaleRules};
use crate::log_once::WarnOnce;
use crate::models::{GenerationMode, GenerationStats, RouteEntry, RouteSet};
use crate::options::GenerationOptions;
use crate::ranking::top_locations;

const FALLBACK_KEY: &str = "sitemap-db-fallback";

/// The in-memory stages: rank, combine, assemble, localize, dedup. Holds no catalog.
#[derive(Debug)]
pub struct Pipeline {
    options: GenerationOptions,
    matcher: Matcher,
    warn_once: WarnOnce,
}

impl Pipeline {
    pub fn new(options: GenerationOptions) -> Self {
        let matcher = Matcher::from_options(&options);
        Self { options, matcher, warn_once: WarnOnce::new() }
    }

    pub fn options(&self) -> &GenerationOptions { &self.options }

    /// Finish a run from the outcome of the bulk read. A failed read degrades to the
    /// static fallback; the failure is logged once per pipeline.
    pub fn complete(&self, fetched: Result<CatalogSnapshot, SourceError>, content: &ContentConfig) -> RouteSet {
        match fetched {
            Ok(snapshot) => self.build(&snapshot, content),
            Err(e) => {
                self.warn_once.warn(FALLBACK_KEY, &e, "catalog read failed; emitting static routes only");
                self.fallback(content, e.to_string())
            }
        }
    }

    pub fn build(&self, snapshot: &CatalogSnapshot, content: &ContentConfig) -> RouteSet {
        let opts = &self.options;
        let mut stats = GenerationStats::default();

        let ranked = top_locations(&snapshot.locations, &snapshot.bookings, opts.max_top_locations);
        stats.ranked_locations = ranked.len();
        debug!(locations = snapshot.locations.len(), ranked = ranked.len(), "ranked locations by traffic");

        let combos = generate(&ranked, &snapshot.tours, &self.matcher, Caps::from_options(opts), opts.priorities.combination);
        stats.combinations = combos.len();
        debug!(combinations = combos.len(), cap = opts.max_total_combinations, "generated combinations");

        let (entity, omitted) = entity_routes(&snapshot.tours, &snapshot.locations, &snapshot.geography, &opts.priorities);
        stats.omitted_geography = omitted;

        let candidates = assemble(
            content_routes(&content.static_routes, RouteSource::Static),
            entity,
            combination_routes(&combos),
            content_routes(content.landing_and_keyword(), RouteSource::Landing),
        );
        let routes = self.emit(candidates, &mut stats);
        let links = finalize_links(combos.iter().map(|c| c.to_link(opts)).collect());

        info!(
            routes = routes.len(),
            links = links.len(),
            combinations = stats.combinations,
            omitted_geography = stats.omitted_geography,
            localized = stats.localized_variants,
            duplicates = stats.duplicates_dropped,
            "generated route set"
        );
        RouteSet { routes, links, mode: GenerationMode::Full, stats }
    }

    /// Static and landing routes plus their locale variants. No catalog data involved.
    pub fn fallback(&self, content: &ContentConfig, reason: String) -> RouteSet {
        let candidates = assemble(
            content_routes(&content.static_routes, RouteSource::Static),
            Vec::new(),
            Vec::new(),
            content_routes(content.landing_and_keyword(), RouteSource::Landing),
        );
        let mut stats = GenerationStats::default();
        let routes = self.emit(candidates, &mut stats);
        info!(routes = routes.len(), "generated fallback route set");
        RouteSet { routes, links: Vec::new(), mode: GenerationMode::Degraded { reason }, stats }
    }

    fn emit(&self, candidates: Vec<RouteCandidate>, stats: &mut GenerationStats) -> Vec<RouteEntry> {
        let opts = &self.options;
        let rules = LocaleRules {
            locales: &opts.locales,
            roots: &opts.translatable_roots,
            prefixes: &opts.translatable_prefixes,
            exclusions: &opts.locale_exclusions,
        };
        let (all, localized) = with_variants(candidates, &rules);
        stats.localized_variants = localized;

        let entries: Vec<RouteEntry> = all
            .into_iter()
            .map(|c| RouteEntry { url: opts.url_for(&c.path), priority: c.priority, lastmod: c.lastmod })
            .collect();
        let before = entries.len();
        let routes = finalize(entries);
        stats.duplicates_dropped = before - routes.len();
        routes
    }
}

/// Batch link/sitemap generator over an injected catalog.
pub struct SitemapEngine<S> {
    source: S,
    pipeline: Pipeline,
}

impl<S: CatalogSource> SitemapEngine<S> {
    pub fn new(source: S, options: GenerationOptions) -> Self {
        Self { source, pipeline: Pipeline::new(options) }
    }

    pub fn pipeline(&self) -> &Pipeline { &self.pipeline }

    /// Full run; a failing bulk read is handed back to the caller.
    pub fn try_generate(&self, content: &ContentConfig) -> Result<RouteSet, SourceError> {
        let snapshot = CatalogSnapshot::fetch(&self.source)?;
        Ok(self.pipeline.build(&snapshot, content))
    }

    /// Fail-open run: a broken catalog degrades to the static fallback instead of erroring.
    /// The failure is logged once per engine.
    pub fn generate(&self, content: &ContentConfig) -> RouteSet {
        self.pipeline.complete(CatalogSnapshot::fetch(&self.source), content)
    }
}
