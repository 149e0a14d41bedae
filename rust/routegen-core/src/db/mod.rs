use std::path::Path;

use rusqlite::{Connection, InterruptHandle, Row};

use crate::catalog::CatalogSource;
use crate::db::queries::*;
use crate::error::SourceError;
use crate::models::{BookingAggregate, Country, Destination, Geography, Location, MicroZone, Tour};

pub mod open;
pub mod queries;

/// Catalog reader over the marketplace SQLite database.
pub struct SqliteCatalog {
    conn: Connection,
}

fn map_tour_row(r: &Row) -> rusqlite::Result<Tour> {
    Ok(Tour {
        id: r.get("id")?,
        slug: r.get("slug")?,
        country_id: r.get("country_id")?,
        destination_id: r.get("destination_id")?,
        micro_zone_id: r.get("micro_zone_id")?,
        category: r.get("category")?,
        featured: r.get::<_, Option<bool>>("featured")?.unwrap_or(false),
        updated_at: r.get("updated_at")?,
    })
}

fn map_location_row(r: &Row) -> rusqlite::Result<Location> {
    Ok(Location {
        id: r.get("id")?,
        name: r.get("name")?,
        slug: r.get("slug")?,
        country_id: r.get("country_id")?,
        destination_id: r.get("destination_id")?,
        micro_zone_id: r.get("micro_zone_id")?,
        destination_slug: r.get("destination_slug")?,
        updated_at: r.get("updated_at")?,
    })
}

fn map_booking_row(r: &Row) -> rusqlite::Result<BookingAggregate> {
    let count: i64 = r.get("bookings")?;
    Ok(BookingAggregate {
        location_name_raw: r.get("hotel")?,
        count: count.max(0) as u64,
    })
}

impl SqliteCatalog {
    /// Open read-only with settings from `ROUTEGEN_SQLITE_*`.
    pub fn open_read_only<P: AsRef<Path>>(path: P) -> Result<Self, SourceError> {
        Self::open_with(path, &open::DbOpenConfig::from_env())
    }

    pub fn open_with<P: AsRef<Path>>(path: P, cfg: &open::DbOpenConfig) -> Result<Self, SourceError> {
        let conn = open::open_read_only(path, cfg)?;
        Ok(Self { conn })
    }

    /// Handle that aborts the running query from another thread.
    pub fn interrupt_handle(&self) -> InterruptHandle { self.conn.get_interrupt_handle() }

    /// Construct from an existing connection (useful for tests).
    pub fn from_connection(conn: Connection) -> Self { Self { conn } }

    fn query_all<T, F>(&self, sql: &str, map: F) -> Result<Vec<T>, SourceError>
    where
        F: FnMut(&Row<'_>) -> rusqlite::Result<T>,
    {
        let mut stmt = self.conn.prepare_cached(sql)?;
        let rows = stmt.query_map([], map)?;
        let mut out = Vec::new();
        for r in rows {
            out.push(r?);
        }
        Ok(out)
    }
}

impl CatalogSource for SqliteCatalog {
    fn list_tours(&self) -> Result<Vec<Tour>, SourceError> {
        self.query_all(PUBLISHED_TOURS, map_tour_row)
    }

    fn list_locations(&self) -> Result<Vec<Location>, SourceError> {
        self.query_all(ALL_LOCATIONS, map_location_row)
    }

    fn list_booking_aggregates(&self) -> Result<Vec<BookingAggregate>, SourceError> {
        self.query_all(BOOKINGS_BY_HOTEL, map_booking_row)
    }

    fn list_geography(&self) -> Result<Geography, SourceError> {
        let countries = self.query_all(ALL_COUNTRIES, |r| {
            Ok(Country { id: r.get("id")?, slug: r.get("slug")? })
        })?;
        let destinations = self.query_all(ALL_DESTINATIONS, |r| {
            Ok(Destination { id: r.get("id")?, slug: r.get("slug")?, country_id: r.get("country_id")? })
        })?;
        let micro_zones = self.query_all(ALL_MICRO_ZONES, |r| {
            Ok(MicroZone { id: r.get("id")?, slug: r.get("slug")?, destination_id: r.get("destination_id")? })
        })?;
        Ok(Geography { countries, destinations, micro_zones })
    }
}
