use crate::error::SourceError;
use crate::models::{BookingAggregate, Geography, Location, Tour};

/// Read-only access to the marketplace catalog. Implementations do bulk reads only.
pub trait CatalogSource {
    /// Published tours.
    fn list_tours(&self) -> Result<Vec<Tour>, SourceError>;
    fn list_locations(&self) -> Result<Vec<Location>, SourceError>;
    fn list_booking_aggregates(&self) -> Result<Vec<BookingAggregate>, SourceError>;
    fn list_geography(&self) -> Result<Geography, SourceError>;
}

impl<T: CatalogSource + ?Sized> CatalogSource for &T {
    fn list_tours(&self) -> Result<Vec<Tour>, SourceError> { (**self).list_tours() }
    fn list_locations(&self) -> Result<Vec<Location>, SourceError> { (**self).list_locations() }
    fn list_booking_aggregates(&self) -> Result<Vec<BookingAggregate>, SourceError> { (**self).list_booking_aggregates() }
    fn list_geography(&self) -> Result<Geography, SourceError> { (**self).list_geography() }
}

impl<T: CatalogSource + ?Sized> CatalogSource for Box<T> {
    fn list_tours(&self) -> Result<Vec<Tour>, SourceError> { (**self).list_tours() }
    fn list_locations(&self) -> Result<Vec<Location>, SourceError> { (**self).list_locations() }
    fn list_booking_aggregates(&self) -> Result<Vec<BookingAggregate>, SourceError> { (**self).list_booking_aggregates() }
    fn list_geography(&self) -> Result<Geography, SourceError> { (**self).list_geography() }
}

/// Everything one generation run reads, fetched up front.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct CatalogSnapshot {
    pub tours: Vec<Tour>,
    pub locations: Vec<Location>,
    pub bookings: Vec<BookingAggregate>,
    pub geography: Geography,
}

impl CatalogSnapshot {
    pub fn fetch<S: CatalogSource + ?Sized>(source: &S) -> Result<Self, SourceError> {
        Ok(Self {
            tours: source.list_tours()?,
            locations: source.list_locations()?,
            bookings: source.list_booking_aggregates()?,
            geography: source.list_geography()?,
        })
    }
}

/// In-memory source backed by an already materialized snapshot.
#[derive(Clone, Debug, Default)]
pub struct StaticCatalog {
    snapshot: CatalogSnapshot,
}

impl StaticCatalog {
    pub fn new(snapshot: CatalogSnapshot) -> Self { Self { snapshot } }
}

impl CatalogSource for StaticCatalog {
    fn list_tours(&self) -> Result<Vec<Tour>, SourceError> { Ok(self.snapshot.tours.clone()) }
    fn list_locations(&self) -> Result<Vec<Location>, SourceError> { Ok(self.snapshot.locations.clone()) }
    fn list_booking_aggregates(&self) -> Result<Vec<BookingAggregate>, SourceError> { Ok(self.snapshot.bookings.clone()) }
    fn list_geography(&self) -> Result<Geography, SourceError> { Ok(self.snapshot.geography.clone()) }
}
