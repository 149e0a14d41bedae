use crate::models::{Location, Tour};
use crate::options::GenerationOptions;

/// Lowercased, trimmed form used for all name and category comparisons.
pub fn normalize(s: &str) -> String {
    s.trim().to_lowercase()
}

/// Which inheritance rule accepted a (tour, location) pair.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MatchRule {
    Domestic,
    RegionalHub,
    SameMicroZone,
    SameDestination,
    DestinationWide,
}

#[derive(Debug, Clone)]
pub struct Matcher {
    domestic_marker: String,
    regional_hub_marker: String,
}

impl Default for Matcher {
    fn default() -> Self {
        Self::from_options(&GenerationOptions::default())
    }
}

impl Matcher {
    pub fn new(domestic_marker: &str, regional_hub_marker: &str) -> Self {
        Self {
            domestic_marker: normalize(domestic_marker),
            regional_hub_marker: normalize(regional_hub_marker),
        }
    }

    pub fn from_options(opts: &GenerationOptions) -> Self {
        Self::new(&opts.domestic_marker, &opts.regional_hub_marker)
    }

    pub fn is_eligible(&self, tour: &Tour, location: &Location) -> bool {
        self.evaluate(tour, location).is_some()
    }

    /// Rules run in order; the first one that accepts wins. A country mismatch rejects outright.
    pub fn evaluate(&self, tour: &Tour, location: &Location) -> Option<MatchRule> {
        if tour.country_id != location.country_id {
            return None;
        }

        let category = tour.category.as_deref().map(normalize).unwrap_or_default();
        if contains_marker(&category, &self.domestic_marker) {
            return Some(MatchRule::Domestic);
        }
        if contains_marker(&category, &self.regional_hub_marker) && location.destination_id.is_some() {
            return Some(MatchRule::RegionalHub);
        }
        if let (Some(t), Some(l)) = (&tour.micro_zone_id, &location.micro_zone_id) {
            if t == l {
                return Some(MatchRule::SameMicroZone);
            }
        }
        if let (Some(t), Some(l)) = (&tour.destination_id, &location.destination_id) {
            if t == l {
                return Some(MatchRule::SameDestination);
            }
        }
        // Subsumed by SameDestination today; kept so the rule order stays explicit.
        if tour.micro_zone_id.is_none() && tour.destination_id.is_some()
            && tour.destination_id == location.destination_id
        {
            return Some(MatchRule::DestinationWide);
        }
        None
    }

    /// Tours eligible for `location`, in input order.
    pub fn eligible_tours<'t>(&self, tours: &'t [Tour], location: &Location) -> Vec<&'t Tour> {
        tours.iter().filter(|t| self.is_eligible(t, location)).collect()
    }
}

fn contains_marker(category: &str, marker: &str) -> bool {
    !marker.is_empty() && category.contains(marker)
}
