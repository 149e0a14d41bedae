use std::collections::HashMap;

use crate::eligibility::normalize;
use crate::models::{BookingAggregate, Location};

/// Summed booking counts keyed by normalized location name.
#[derive(Debug, Default, Clone)]
pub struct TrafficMap {
    counts: HashMap<String, u64>,
}

impl TrafficMap {
    pub fn from_aggregates(aggregates: &[BookingAggregate]) -> Self {
        let mut counts: HashMap<String, u64> = HashMap::new();
        for agg in aggregates {
            let key = normalize(&agg.location_name_raw);
            if key.is_empty() { continue; }
            *counts.entry(key).or_insert(0) += agg.count;
        }
        Self { counts }
    }

    pub fn traffic_for(&self, name: &str) -> u64 {
        self.counts.get(&normalize(name)).copied().unwrap_or(0)
    }

    pub fn len(&self) -> usize { self.counts.len() }
    pub fn is_empty(&self) -> bool { self.counts.is_empty() }
}

#[derive(Debug, Clone, Copy)]
pub struct RankedLocation<'a> {
    pub location: &'a Location,
    pub traffic: u64,
}

/// All locations ordered by non-increasing traffic. Ties keep input order (stable sort).
pub fn rank<'a>(locations: &'a [Location], aggregates: &[BookingAggregate]) -> Vec<RankedLocation<'a>> {
    let traffic = TrafficMap::from_aggregates(aggregates);
    let mut ranked: Vec<RankedLocation<'a>> = locations
        .iter()
        .map(|location| RankedLocation { location, traffic: traffic.traffic_for(&location.name) })
        .collect();
    ranked.sort_by(|a, b| b.traffic.cmp(&a.traffic));
    ranked
}

/// `rank` truncated to the top `k`.
pub fn top_locations<'a>(locations: &'a [Location], aggregates: &[BookingAggregate], k: usize) -> Vec<RankedLocation<'a>> {
    let mut ranked = rank(locations, aggregates);
    ranked.truncate(k);
    ranked
}
