use std::collections::HashMap;

use crate::models::Geography;

/// Slug chain resolved for a destination or micro-zone.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SlugChain<'a> {
    pub country: &'a str,
    pub destination: Option<&'a str>,
    pub micro_zone: Option<&'a str>,
}

impl SlugChain<'_> {
    /// Canonical geography page path.
    pub fn path(&self) -> String {
        let mut out = format!("/destinations/{}", self.country);
        if let Some(d) = self.destination {
            out.push('/');
            out.push_str(d);
            if let Some(z) = self.micro_zone {
                out.push('/');
                out.push_str(z);
            }
        }
        out
    }
}

/// Id -> slug lookups over the country / destination / micro-zone tree.
#[derive(Debug, Default)]
pub struct GeoIndex<'a> {
    countries: HashMap<&'a str, &'a str>,
    // destination id -> (slug, country id)
    destinations: HashMap<&'a str, (&'a str, &'a str)>,
    // micro-zone id -> (slug, destination id)
    micro_zones: HashMap<&'a str, (&'a str, &'a str)>,
}

impl<'a> GeoIndex<'a> {
    pub fn build(geo: &'a Geography) -> Self {
        let mut idx = Self {
            countries: HashMap::with_capacity(geo.countries.len()),
            destinations: HashMap::with_capacity(geo.destinations.len()),
            micro_zones: HashMap::with_capacity(geo.micro_zones.len()),
        };
        for c in &geo.countries {
            idx.countries.insert(c.id.as_str(), c.slug.as_str());
        }
        for d in &geo.destinations {
            idx.destinations.insert(d.id.as_str(), (d.slug.as_str(), d.country_id.as_str()));
        }
        for z in &geo.micro_zones {
            idx.micro_zones.insert(z.id.as_str(), (z.slug.as_str(), z.destination_id.as_str()));
        }
        idx
    }

    pub fn country(&self, id: &str) -> Option<SlugChain<'a>> {
        let country = *self.countries.get(id)?;
        Some(SlugChain { country, destination: None, micro_zone: None })
    }

    /// None when the destination or its country is unknown.
    pub fn destination(&self, id: &str) -> Option<SlugChain<'a>> {
        let &(slug, country_id) = self.destinations.get(id)?;
        let country = *self.countries.get(country_id)?;
        Some(SlugChain { country, destination: Some(slug), micro_zone: None })
    }

    /// None when any link of the chain up to the country is missing.
    pub fn micro_zone(&self, id: &str) -> Option<SlugChain<'a>> {
        let &(slug, destination_id) = self.micro_zones.get(id)?;
        let parent = self.destination(destination_id)?;
        Some(SlugChain { micro_zone: Some(slug), ..parent })
    }
}

/// Canonical paths for every resolvable geography entity, in country, destination,
/// micro-zone order. Returns the paths and the number of entities skipped for a missing parent.
pub fn geography_paths(geo: &Geography) -> (Vec<(GeoLevel, String)>, usize) {
    let idx = GeoIndex::build(geo);
    let mut out = Vec::with_capacity(geo.countries.len() + geo.destinations.len() + geo.micro_zones.len());
    let mut omitted = 0usize;
    for c in &geo.countries {
        if let Some(chain) = idx.country(&c.id) {
            out.push((GeoLevel::Country, chain.path()));
        }
    }
    for d in &geo.destinations {
        match idx.destination(&d.id) {
            Some(chain) => out.push((GeoLevel::Destination, chain.path())),
            None => omitted += 1,
        }
    }
    for z in &geo.micro_zones {
        match idx.micro_zone(&z.id) {
            Some(chain) => out.push((GeoLevel::MicroZone, chain.path())),
            None => omitted += 1,
        }
    }
    (out, omitted)
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GeoLevel { Country, Destination, MicroZone }
