//! In-memory SQLite dataset store for the Gapminder table.
//!
//! The dataset is loaded once from CSV and never mutated afterwards. All
//! filtering and sorting used by the dashboard charts is expressed as SQL
//! against the single `records` table.
//!
//! # Architecture
//!
//! - `Rc<RefCell<Connection>>` wrapper for interior mutability in single-threaded WASM
//! - In-memory SQLite via `rusqlite`
//! - CSV data loaded via `include_str!` at compile time in the consuming app
//! - Typed query methods returning `gm_core::Record` values
//!
//! # Usage
//!
//! ```rust
//! use gm_core::{Continent, Metric};
//! use gm_db::Database;
//!
//! let db = Database::new().unwrap();
//! db.load_records("country,continent,year,lifeExp,pop,gdpPercap,iso_alpha,iso_num\nChina,Asia,1952,44.0,556263527,400.448611,CHN,156\n").unwrap();
//!
//! let top = db.top_n("Asia", 1952, Metric::Population, 15).unwrap();
//! assert_eq!(top[0].continent, Continent::Asia);
//! ```
//!
//! # Row order
//!
//! Each row gets an increasing `row_id` in load order. Every query that
//! sorts by a metric uses `row_id` as the tie breaker, so results are
//! stable with respect to the original dataset order.

pub mod schema;
mod loader;
mod queries;

pub use queries::DEFAULT_TOP_N;

use rusqlite::Connection;
use std::cell::RefCell;
use std::rc::Rc;

/// The read-only Gapminder dataset.
///
/// Cheaply cloneable (via `Rc`); clones share the same connection.
#[derive(Clone)]
pub struct Database {
    conn: Rc<RefCell<Connection>>,
}

impl Database {
    /// Create a new, empty in-memory database with the schema applied.
    pub fn new() -> anyhow::Result<Self> {
        let conn = Connection::open_in_memory()?;
        conn.execute_batch(schema::create_schema())?;
        Ok(Self {
            conn: Rc::new(RefCell::new(conn)),
        })
    }

    /// Create a database and load it from a CSV string in one step.
    pub fn from_csv(csv_data: &str) -> anyhow::Result<Self> {
        let db = Self::new()?;
        db.load_records(csv_data)?;
        Ok(db)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn database_creates_successfully() {
        assert!(Database::new().is_ok());
    }

    #[test]
    fn database_is_cloneable() {
        let db = Database::new().unwrap();
        let db2 = db.clone();
        db.load_records(
            "country,continent,year,lifeExp,pop,gdpPercap,iso_alpha,iso_num\nChina,Asia,1952,44.0,556263527,400.448611,CHN,156\n",
        )
        .unwrap();
        assert_eq!(
            db2.record_count().unwrap(),
            1,
            "Clone should see same data via shared Rc"
        );
    }

    #[test]
    fn database_starts_empty() {
        let db = Database::new().unwrap();
        assert_eq!(db.record_count().unwrap(), 0);
        assert!(db.all_records().unwrap().is_empty());
    }
}
