//! Filter and aggregate queries over the dataset store.
//!
//! All queries are read-only and deterministic. Rows come back as
//! [`gm_core::Record`]; anything sorted by a metric falls back to load order
//! (`row_id`) for ties.

use crate::Database;
use gm_core::{Continent, Metric, Record};
use rusqlite::types::Type;
use rusqlite::{params, Row};

/// Number of bars shown by the ranking charts.
pub const DEFAULT_TOP_N: usize = 15;

const RECORD_COLUMNS: &str =
    "country, continent, year, life_exp, pop, gdp_percap, iso_alpha, iso_num";

/// SQL column holding the given metric.
fn metric_column(metric: Metric) -> &'static str {
    match metric {
        Metric::Population => "pop",
        Metric::GdpPerCapita => "gdp_percap",
        Metric::LifeExpectancy => "life_exp",
    }
}

fn record_from_row(row: &Row<'_>) -> rusqlite::Result<Record> {
    let continent: String = row.get(1)?;
    let continent = continent
        .parse::<Continent>()
        .map_err(|e| rusqlite::Error::FromSqlConversionFailure(1, Type::Text, Box::new(e)))?;
    Ok(Record {
        country: row.get(0)?,
        continent,
        year: row.get(2)?,
        life_exp: row.get(3)?,
        population: row.get(4)?,
        gdp_percap: row.get(5)?,
        iso_alpha: row.get(6)?,
        iso_num: row.get(7)?,
    })
}

impl Database {
    /// Top `n` rows of one continent and year, ranked by `metric` descending.
    ///
    /// Ties keep dataset order. An unknown continent or a year with no rows
    /// yields an empty result rather than an error.
    pub fn top_n(
        &self,
        continent: &str,
        year: i64,
        metric: Metric,
        n: usize,
    ) -> anyhow::Result<Vec<Record>> {
        let continent = match continent.parse::<Continent>() {
            Ok(c) => c,
            Err(e) => {
                log::warn!("query: top_n {}", e);
                return Ok(Vec::new());
            }
        };

        let conn = self.conn.borrow();
        let sql = format!(
            "SELECT {RECORD_COLUMNS} FROM records
             WHERE continent = ?1 AND year = ?2
             ORDER BY {} DESC, row_id ASC
             LIMIT ?3",
            metric_column(metric)
        );
        let mut stmt = conn.prepare(&sql)?;
        let limit = i64::try_from(n).unwrap_or(i64::MAX);
        let rows = stmt
            .query_map(params![continent.as_str(), year, limit], record_from_row)?
            .collect::<Result<Vec<_>, _>>()?;
        log::debug!(
            "query: top_n({}, {}, {}, {}) returned {} records",
            continent,
            year,
            metric,
            n,
            rows.len()
        );
        Ok(rows)
    }

    /// Every row observed in `year`, in dataset order.
    pub fn by_year(&self, year: i64) -> anyhow::Result<Vec<Record>> {
        let conn = self.conn.borrow();
        let mut stmt = conn.prepare(&format!(
            "SELECT {RECORD_COLUMNS} FROM records WHERE year = ?1 ORDER BY row_id"
        ))?;
        let rows = stmt
            .query_map(params![year], record_from_row)?
            .collect::<Result<Vec<_>, _>>()?;
        log::debug!("query: by_year({}) returned {} records", year, rows.len());
        Ok(rows)
    }

    /// The whole dataset, in load order.
    pub fn all_records(&self) -> anyhow::Result<Vec<Record>> {
        let conn = self.conn.borrow();
        let mut stmt = conn.prepare(&format!(
            "SELECT {RECORD_COLUMNS} FROM records ORDER BY row_id"
        ))?;
        let rows = stmt
            .query_map([], record_from_row)?
            .collect::<Result<Vec<_>, _>>()?;
        Ok(rows)
    }

    pub fn record_count(&self) -> anyhow::Result<usize> {
        let conn = self.conn.borrow();
        let count: i64 = conn.query_row("SELECT COUNT(*) FROM records", [], |row| row.get(0))?;
        Ok(count as usize)
    }

    /// Distinct continents in order of first appearance.
    pub fn continents(&self) -> anyhow::Result<Vec<Continent>> {
        let conn = self.conn.borrow();
        let mut stmt = conn.prepare(
            "SELECT continent FROM records
             GROUP BY continent
             ORDER BY MIN(row_id)",
        )?;
        let names = stmt
            .query_map([], |row| row.get::<_, String>(0))?
            .collect::<Result<Vec<_>, _>>()?;
        Ok(names
            .iter()
            .filter_map(|name| name.parse::<Continent>().ok())
            .collect())
    }

    /// Distinct years in order of first appearance.
    pub fn years(&self) -> anyhow::Result<Vec<i64>> {
        let conn = self.conn.borrow();
        let mut stmt = conn.prepare(
            "SELECT year FROM records
             GROUP BY year
             ORDER BY MIN(row_id)",
        )?;
        let years = stmt
            .query_map([], |row| row.get(0))?
            .collect::<Result<Vec<i64>, _>>()?;
        Ok(years)
    }

}
