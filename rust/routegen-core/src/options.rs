use std::env;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;

pub const DEFAULT_BASE_URL: &str = "https://proactivitis.com";
pub const DEFAULT_MAX_TOP_LOCATIONS: usize = 80;
pub const DEFAULT_MAX_TOURS_PER_LOCATION: usize = 35;
pub const DEFAULT_MAX_TOTAL_COMBINATIONS: usize = 4_000;
pub const DEFAULT_DOMESTIC_MARKER: &str = "nacional";
pub const DEFAULT_REGIONAL_HUB_MARKER: &str = "punta cana";
/// sitemaps.org limit per urlset file
pub const DEFAULT_MAX_URLS_PER_FILE: usize = 50_000;
pub const DEFAULT_READ_TIMEOUT_MS: u64 = 30_000;

/// Fixed weight per route source category.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PriorityTable {
    pub tour: f32,
    pub location: f32,
    pub country: f32,
    pub destination: f32,
    pub micro_zone: f32,
    pub combination: f32,
}

impl Default for PriorityTable {
    fn default() -> Self {
        Self {
            tour: 0.8,
            location: 0.7,
            country: 0.7,
            destination: 0.65,
            micro_zone: 0.6,
            combination: 0.6,
        }
    }
}

impl PriorityTable {
    fn entries(&self) -> [(&'static str, f32); 6] {
        [
            ("priorities.tour", self.tour),
            ("priorities.location", self.location),
            ("priorities.country", self.country),
            ("priorities.destination", self.destination),
            ("priorities.micro_zone", self.micro_zone),
            ("priorities.combination", self.combination),
        ]
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GenerationOptions {
    /// Scheme and host prepended to every path, without trailing slash.
    pub base_url: String,

    pub max_top_locations: usize,
    pub max_tours_per_location: usize,
    pub max_total_combinations: usize,

    pub domestic_marker: String,
    pub regional_hub_marker: String,

    pub locales: Vec<String>,
    pub translatable_roots: Vec<String>,
    pub translatable_prefixes: Vec<String>,
    /// Paths containing any of these are never localized, even under a translatable prefix.
    pub locale_exclusions: Vec<String>,

    pub priorities: PriorityTable,

    pub max_urls_per_file: usize,
    pub read_timeout_ms: u64,
}

impl Default for GenerationOptions {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            max_top_locations: DEFAULT_MAX_TOP_LOCATIONS,
            max_tours_per_location: DEFAULT_MAX_TOURS_PER_LOCATION,
            max_total_combinations: DEFAULT_MAX_TOTAL_COMBINATIONS,
            domestic_marker: DEFAULT_DOMESTIC_MARKER.to_string(),
            regional_hub_marker: DEFAULT_REGIONAL_HUB_MARKER.to_string(),
            locales: vec!["en".to_string(), "fr".to_string()],
            translatable_roots: ["/", "/tours", "/traslado", "/contact"]
                .iter()
                .map(|s| s.to_string())
                .collect(),
            translatable_prefixes: ["/tours/", "/transfer/", "/punta-cana/", "/excursiones/"]
                .iter()
                .map(|s| s.to_string())
                .collect(),
            // Tour-by-pickup pages only exist un-prefixed.
            locale_exclusions: vec!["/recogida/".to_string()],
            priorities: PriorityTable::default(),
            max_urls_per_file: DEFAULT_MAX_URLS_PER_FILE,
            read_timeout_ms: DEFAULT_READ_TIMEOUT_MS,
        }
    }
}

impl GenerationOptions {
    pub fn from_json_str(s: &str) -> Result<Self, ConfigError> {
        let opts: Self = serde_json::from_str(s)?;
        Ok(opts)
    }

    pub fn from_json_file<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let raw = std::fs::read_to_string(path)?;
        Self::from_json_str(&raw)
    }

    /// Apply environment overrides. Missing/invalid values leave the current value untouched.
    ///
    /// Variables:
    /// - ROUTEGEN_BASE_URL
    /// - ROUTEGEN_MAX_TOP_LOCATIONS, ROUTEGEN_MAX_TOURS_PER_LOCATION, ROUTEGEN_MAX_TOTAL_COMBINATIONS
    /// - ROUTEGEN_LOCALES: comma-separated, e.g. "en,fr"
    /// - ROUTEGEN_READ_TIMEOUT_MS
    pub fn apply_env(&mut self) {
        self.apply_vars(|name| env::var(name).ok());
    }

    fn apply_vars<F>(&mut self, get: F)
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(v) = get("ROUTEGEN_BASE_URL") {
            let v = v.trim();
            if !v.is_empty() { self.base_url = v.trim_end_matches('/').to_string(); }
        }
        let parse_usize = |name: &str| get(name).and_then(|v| v.trim().parse::<usize>().ok());
        if let Some(n) = parse_usize("ROUTEGEN_MAX_TOP_LOCATIONS") { self.max_top_locations = n; }
        if let Some(n) = parse_usize("ROUTEGEN_MAX_TOURS_PER_LOCATION") { self.max_tours_per_location = n; }
        if let Some(n) = parse_usize("ROUTEGEN_MAX_TOTAL_COMBINATIONS") { self.max_total_combinations = n; }
        if let Some(v) = get("ROUTEGEN_LOCALES") {
            self.locales = v
                .split(',')
                .map(|x| x.trim().to_ascii_lowercase())
                .filter(|x| !x.is_empty())
                .collect();
        }
        if let Some(ms) = get("ROUTEGEN_READ_TIMEOUT_MS").and_then(|v| v.trim().parse::<u64>().ok()) {
            self.read_timeout_ms = ms;
        }
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if !(self.base_url.starts_with("http://") || self.base_url.starts_with("https://")) {
            return Err(ConfigError::invalid("base_url", format!("{:?} is not an http(s) url", self.base_url)));
        }
        if self.base_url.ends_with('/') {
            return Err(ConfigError::invalid("base_url", "must not end with '/'"));
        }
        if self.max_urls_per_file == 0 {
            return Err(ConfigError::invalid("max_urls_per_file", "must be > 0"));
        }
        for locale in &self.locales {
            if locale.is_empty() || locale.contains('/') {
                return Err(ConfigError::invalid("locales", format!("bad locale {locale:?}")));
            }
        }
        for path in self.translatable_roots.iter().chain(&self.translatable_prefixes) {
            if !path.starts_with('/') {
                return Err(ConfigError::invalid("translatable_paths", format!("{path:?} must start with '/'")));
            }
        }
        for (field, p) in self.priorities.entries() {
            if !(0.0..=1.0).contains(&p) {
                return Err(ConfigError::invalid(field, format!("{p} outside [0, 1]")));
            }
        }
        Ok(())
    }

    pub fn url_for(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }
}
