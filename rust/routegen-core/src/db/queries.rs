pub const PUBLISHED_TOURS: &str = "SELECT id, slug, country_id, destination_id, micro_zone_id, category, featured, updated_at \
    FROM tours WHERE status = 'published' ORDER BY rowid";

pub const ALL_LOCATIONS: &str = "SELECT l.id, l.name, l.slug, l.country_id, l.destination_id, l.micro_zone_id, \
    d.slug AS destination_slug, l.updated_at \
    FROM locations l LEFT JOIN destinations d ON d.id = l.destination_id \
    ORDER BY l.rowid";

// One row per raw hotel string; normalization happens in the ranker
pub const BOOKINGS_BY_HOTEL: &str = "SELECT hotel, COUNT(*) AS bookings FROM bookings \
    WHERE hotel IS NOT NULL GROUP BY hotel";

pub const ALL_COUNTRIES: &str = "SELECT id, slug FROM countries ORDER BY rowid";
pub const ALL_DESTINATIONS: &str = "SELECT id, slug, country_id FROM destinations ORDER BY rowid";
pub const ALL_MICRO_ZONES: &str = "SELECT id, slug, destination_id FROM micro_zones ORDER BY rowid";
