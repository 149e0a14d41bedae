use crate::eligibility::Matcher;
use crate::models::{LinkRecord, RouteEntry, Tour};
use crate::options::GenerationOptions;
use crate::ranking::RankedLocation;

/// One generated (tour, pickup location) page.
#[derive(Clone, Debug, PartialEq)]
pub struct Combination {
    pub tour_slug: String,
    pub location_slug: String,
    pub path: String,
    pub priority: f32,
    /// Later of the tour's and the location's `updated_at`.
    pub lastmod: Option<String>,
}

impl Combination {
    pub fn to_route(&self, opts: &GenerationOptions) -> RouteEntry {
        RouteEntry { url: opts.url_for(&self.path), priority: self.priority, lastmod: self.lastmod.clone() }
    }

    pub fn to_link(&self, opts: &GenerationOptions) -> LinkRecord {
        LinkRecord {
            tour_slug: self.tour_slug.clone(),
            hotel_slug: self.location_slug.clone(),
            url: opts.url_for(&self.path),
        }
    }
}

pub fn combination_path(tour_slug: &str, location_slug: &str) -> String {
    format!("/tours/{tour_slug}/recogida/{location_slug}")
}

#[derive(Clone, Copy, Debug)]
pub struct Caps {
    pub per_location: usize,
    pub global: usize,
}

impl Caps {
    pub fn from_options(opts: &GenerationOptions) -> Self {
        Self { per_location: opts.max_tours_per_location, global: opts.max_total_combinations }
    }
}

/// Join ranked locations with their eligible tours, featured first, under both caps.
/// Hitting the global cap mid-location keeps what that location already emitted.
pub fn generate(
    ranked: &[RankedLocation<'_>],
    tours: &[Tour],
    matcher: &Matcher,
    caps: Caps,
    priority: f32,
) -> Vec<Combination> {
    let mut out = Vec::new();
    for r in ranked {
        if out.len() >= caps.global { break; }
        let mut eligible = matcher.eligible_tours(tours, r.location);
        eligible.sort_by(|a, b| b.featured.cmp(&a.featured));
        for tour in eligible.into_iter().take(caps.per_location) {
            if out.len() >= caps.global { break; }
            out.push(Combination {
                tour_slug: tour.slug.clone(),
                location_slug: r.location.slug.clone(),
                path: combination_path(&tour.slug, &r.location.slug),
                priority,
                lastmod: tour.updated_at.clone().max(r.location.updated_at.clone()),
            });
        }
    }
    out
}
