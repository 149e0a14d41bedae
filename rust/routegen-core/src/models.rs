use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Tour {
    pub id: String,
    pub slug: String,
    pub country_id: String,
    #[serde(default)]
    pub destination_id: Option<String>,
    #[serde(default)]
    pub micro_zone_id: Option<String>,
    #[serde(default)]
    pub category: Option<String>,
    #[serde(default)]
    pub featured: bool,
    /// ISO-8601 timestamp, emitted as the page's `<lastmod>`.
    #[serde(default)]
    pub updated_at: Option<String>,
}

/// Pickup point (hotel) a tour can collect travelers from.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Location {
    pub id: String,
    pub name: String,
    pub slug: String,
    pub country_id: String,
    #[serde(default)]
    pub destination_id: Option<String>,
    #[serde(default)]
    pub micro_zone_id: Option<String>,
    #[serde(default)]
    pub destination_slug: Option<String>,
    #[serde(default)]
    pub updated_at: Option<String>,
}

/// Historical booking count for a raw (un-normalized) location name.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct BookingAggregate {
    pub location_name_raw: String,
    pub count: u64,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Country {
    pub id: String,
    pub slug: String,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Destination {
    pub id: String,
    pub slug: String,
    pub country_id: String,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct MicroZone {
    pub id: String,
    pub slug: String,
    pub destination_id: String,
}

/// The three flat geography lists as read from storage.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Geography {
    pub countries: Vec<Country>,
    pub destinations: Vec<Destination>,
    pub micro_zones: Vec<MicroZone>,
}

/// Opaque page descriptor from content configuration (static pages, landings, keyword pages).
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ContentRoute {
    pub path: String,
    pub priority: f32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub lastmod: Option<String>,
}

impl ContentRoute {
    pub fn new(path: impl Into<String>, priority: f32) -> Self {
        Self { path: path.into(), priority, lastmod: None }
    }

    pub fn with_lastmod(mut self, lastmod: impl Into<String>) -> Self {
        self.lastmod = Some(lastmod.into());
        self
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct RouteEntry {
    pub url: String,
    pub priority: f32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub lastmod: Option<String>,
}

impl RouteEntry {
    pub fn new(url: impl Into<String>, priority: f32) -> Self {
        Self { url: url.into(), priority, lastmod: None }
    }
}

/// A generated tour-by-pickup page, consumed by other subsystems for cross-links.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct LinkRecord {
    pub tour_slug: String,
    pub hotel_slug: String,
    pub url: String,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "mode", rename_all = "snake_case")]
pub enum GenerationMode {
    Full,
    Degraded { reason: String },
}

impl GenerationMode {
    pub fn is_degraded(&self) -> bool {
        matches!(self, GenerationMode::Degraded { .. })
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct GenerationStats {
    pub ranked_locations: usize,
    pub combinations: usize,
    pub omitted_geography: usize,
    pub localized_variants: usize,
    pub duplicates_dropped: usize,
}

/// Result of one generation run.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct RouteSet {
    pub routes: Vec<RouteEntry>,
    pub links: Vec<LinkRecord>,
    #[serde(flatten)]
    pub mode: GenerationMode,
    pub stats: GenerationStats,
}
