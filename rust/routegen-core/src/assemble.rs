use crate::combinations::Combination;
use crate::geography::{geography_paths, GeoLevel};
use crate::models::{ContentRoute, Geography, Location, Tour};
use crate::options::PriorityTable;

/// Where a candidate route came from. Priority is a property of the source, not the content.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RouteSource {
    Static,
    Tour,
    Location,
    Country,
    Destination,
    MicroZone,
    Combination,
    Landing,
}

/// Un-localized path plus weight, before the base URL is applied.
#[derive(Clone, Debug, PartialEq)]
pub struct RouteCandidate {
    pub path: String,
    pub priority: f32,
    pub source: RouteSource,
    pub lastmod: Option<String>,
}

impl RouteCandidate {
    fn new(path: String, priority: f32, source: RouteSource) -> Self {
        Self { path, priority, source, lastmod: None }
    }

    fn with_lastmod(mut self, lastmod: Option<String>) -> Self {
        self.lastmod = lastmod;
        self
    }
}

pub fn content_routes<'a, I>(routes: I, source: RouteSource) -> Vec<RouteCandidate>
where
    I: IntoIterator<Item = &'a ContentRoute>,
{
    routes
        .into_iter()
        .map(|r| RouteCandidate::new(r.path.clone(), r.priority, source).with_lastmod(r.lastmod.clone()))
        .collect()
}

/// Tour, pickup-location and geography pages. Also returns how many geography
/// entities were dropped for a missing parent.
pub fn entity_routes(
    tours: &[Tour],
    locations: &[Location],
    geo: &Geography,
    priorities: &PriorityTable,
) -> (Vec<RouteCandidate>, usize) {
    let mut out = Vec::with_capacity(tours.len() + locations.len());
    out.extend(tours.iter().map(|t| {
        RouteCandidate::new(format!("/tours/{}", t.slug), priorities.tour, RouteSource::Tour)
            .with_lastmod(t.updated_at.clone())
    }));
    out.extend(locations.iter().map(|l| {
        RouteCandidate::new(format!("/recogida/{}", l.slug), priorities.location, RouteSource::Location)
            .with_lastmod(l.updated_at.clone())
    }));
    let (geo_paths, omitted) = geography_paths(geo);
    out.extend(geo_paths.into_iter().map(|(level, path)| match level {
        GeoLevel::Country => RouteCandidate::new(path, priorities.country, RouteSource::Country),
        GeoLevel::Destination => RouteCandidate::new(path, priorities.destination, RouteSource::Destination),
        GeoLevel::MicroZone => RouteCandidate::new(path, priorities.micro_zone, RouteSource::MicroZone),
    }));
    (out, omitted)
}

pub fn combination_routes(combos: &[Combination]) -> Vec<RouteCandidate> {
    combos
        .iter()
        .map(|c| {
            RouteCandidate::new(c.path.clone(), c.priority, RouteSource::Combination).with_lastmod(c.lastmod.clone())
        })
        .collect()
}

/// Plain concatenation: static, entity, combination, landing.
pub fn assemble(
    static_routes: Vec<RouteCandidate>,
    entity: Vec<RouteCandidate>,
    combos: Vec<RouteCandidate>,
    landing: Vec<RouteCandidate>,
) -> Vec<RouteCandidate> {
    let mut out = static_routes;
    out.reserve(entity.len() + combos.len() + landing.len());
    out.extend(entity);
    out.extend(combos);
    out.extend(landing);
    out
}
