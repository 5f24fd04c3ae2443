//! SQL schema for the in-memory dataset store.

/// Returns the full SQL schema as a single batch string.
///
/// `records.row_id` is assigned in load order and serves as the stable
/// tie breaker for every metric sort.
pub fn create_schema() -> &'static str {
    r#"
    CREATE TABLE IF NOT EXISTS records (
        row_id INTEGER PRIMARY KEY,
        country TEXT NOT NULL,
        continent TEXT NOT NULL,
        year INTEGER NOT NULL,
        life_exp REAL NOT NULL,
        pop INTEGER NOT NULL,
        gdp_percap REAL NOT NULL,
        iso_alpha TEXT NOT NULL,
        iso_num INTEGER NOT NULL
    );
    CREATE INDEX IF NOT EXISTS idx_records_continent_year ON records(continent, year);
    CREATE INDEX IF NOT EXISTS idx_records_year ON records(year);
    "#
}
