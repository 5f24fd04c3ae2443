//! CSV loading for the dataset store.
//!
//! # CSV Format
//!
//! Headers are required and matched by name, so column order does not matter:
//!
//! ```text
//! country,continent,year,lifeExp,pop,gdpPercap,iso_alpha,iso_num
//! Afghanistan,Asia,1952,28.801,8425333,779.4453145,AFG,4
//! ```
//!
//! `iso_num` is optional and defaults to 0. Rows with an unknown continent or
//! a non-numeric year/metric are skipped; `nan`, `inf` and integers out of
//! range count as non-numeric.

use crate::Database;
use gm_core::Continent;
use rusqlite::params;

const REQUIRED_COLUMNS: [&str; 7] = [
    "country",
    "continent",
    "year",
    "lifeExp",
    "pop",
    "gdpPercap",
    "iso_alpha",
];

/// Column positions resolved from the CSV header row.
struct ColumnIndex {
    country: usize,
    continent: usize,
    year: usize,
    life_exp: usize,
    pop: usize,
    gdp_percap: usize,
    iso_alpha: usize,
    iso_num: Option<usize>,
}

impl ColumnIndex {
    fn from_headers(headers: &csv::StringRecord) -> anyhow::Result<Self> {
        let find = |name: &str| headers.iter().position(|h| h.trim() == name);
        let missing: Vec<&str> = REQUIRED_COLUMNS
            .iter()
            .copied()
            .filter(|name| find(*name).is_none())
            .collect();
        if !missing.is_empty() {
            anyhow::bail!("dataset CSV is missing columns: {}", missing.join(", "));
        }
        // Presence of every required column was checked above.
        let at = |name: &str| find(name).unwrap_or_default();
        Ok(Self {
            country: at("country"),
            continent: at("continent"),
            year: at("year"),
            life_exp: at("lifeExp"),
            pop: at("pop"),
            gdp_percap: at("gdpPercap"),
            iso_alpha: at("iso_alpha"),
            iso_num: find("iso_num"),
        })
    }
}

/// Parse a real column; `nan` and `inf` parse as `f64` but are not data.
fn parse_real(s: &str) -> Option<f64> {
    s.trim().parse::<f64>().ok().filter(|v| v.is_finite())
}

/// Parse an integer column that some exports write as a float (`8425333.0`).
///
/// Floats outside the `i64` range are rejected instead of saturated.
fn parse_integer(s: &str) -> Option<i64> {
    let s = s.trim();
    s.parse::<i64>().ok().or_else(|| {
        parse_real(s)
            .filter(|v| v.abs() < i64::MAX as f64)
            .map(|v| v.round() as i64)
    })
}

impl Database {
    /// Load dataset rows from a CSV string, appending them in file order.
    ///
    /// Returns the number of rows inserted.
    pub fn load_records(&self, csv_data: &str) -> anyhow::Result<usize> {
        let mut conn = self.conn.borrow_mut();
        let mut rdr = csv::ReaderBuilder::new()
            .has_headers(true)
            .flexible(true)
            .from_reader(csv_data.as_bytes());
        let columns = ColumnIndex::from_headers(rdr.headers()?)?;

        let tx = conn.transaction()?;
        let mut count = 0usize;
        let mut skipped = 0usize;
        {
            let mut stmt = tx.prepare(
                "INSERT INTO records
                 (country, continent, year, life_exp, pop, gdp_percap, iso_alpha, iso_num)
                 VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8)",
            )?;

            for result in rdr.records() {
                let r = result?;
                let field = |i: usize| r.get(i).unwrap_or("").trim();

                let country = field(columns.country);
                let continent = match field(columns.continent).parse::<Continent>() {
                    Ok(c) => c,
                    Err(_) => {
                        skipped += 1;
                        continue;
                    }
                };
                let year = parse_integer(field(columns.year));
                let pop = parse_integer(field(columns.pop));
                let life_exp = parse_real(field(columns.life_exp));
                let gdp_percap = parse_real(field(columns.gdp_percap));
                let iso_alpha = field(columns.iso_alpha);
                let iso_num = columns
                    .iso_num
                    .and_then(|i| parse_integer(field(i)))
                    .unwrap_or(0);

                let (Some(year), Some(pop), Some(life_exp), Some(gdp_percap)) =
                    (year, pop, life_exp, gdp_percap)
                else {
                    skipped += 1;
                    continue;
                };
                if country.is_empty() {
                    skipped += 1;
                    continue;
                }

                stmt.execute(params![
                    country,
                    continent.as_str(),
                    year,
                    life_exp,
                    pop,
                    gdp_percap,
                    iso_alpha,
                    iso_num
                ])?;
                count += 1;
            }
        }
        tx.commit()?;

        log::info!("loader: loaded {} records, skipped {} malformed", count, skipped);
        Ok(count)
    }
}

#[cfg(test)]
mod tests {
    use super::{parse_integer, parse_real};
    use crate::Database;

    const HEADER: &str = "country,continent,year,lifeExp,pop,gdpPercap,iso_alpha,iso_num\n";

    #[test]
    fn load_records_from_csv() {
        let db = Database::new().unwrap();
        let csv = format!(
            "{}{}",
            HEADER,
            "\
Afghanistan,Asia,1952,28.801,8425333,779.4453145,AFG,4
Albania,Europe,1952,55.23,1282697,1601.056136,ALB,8
"
        );
        assert_eq!(db.load_records(&csv).unwrap(), 2);

        let conn = db.conn.borrow();
        let count: i64 = conn
            .query_row("SELECT COUNT(*) FROM records", [], |row| row.get(0))
            .unwrap();
        assert_eq!(count, 2);

        let pop: i64 = conn
            .query_row(
                "SELECT pop FROM records WHERE iso_alpha = 'ALB'",
                [],
                |row| row.get(0),
            )
            .unwrap();
        assert_eq!(pop, 1282697);
    }

    #[test]
    fn load_records_matches_columns_by_header_name() {
        let db = Database::new().unwrap();
        let csv = "\
iso_alpha,pop,country,year,continent,gdpPercap,lifeExp
JPN,86459025,Japan,1952,Asia,3216.956347,63.03
";
        db.load_records(csv).unwrap();
        let records = db.all_records().unwrap();
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].country, "Japan");
        assert_eq!(records[0].population, 86459025);
        assert_eq!(records[0].iso_num, 0, "missing iso_num defaults to 0");
    }

    #[test]
    fn load_records_skips_malformed_rows() {
        let db = Database::new().unwrap();
        let csv = format!(
            "{}{}",
            HEADER,
            "\
Afghanistan,Asia,1952,28.801,8425333,779.4453145,AFG,4
Atlantis,Atlantic,1952,50.0,1000,100.0,ATL,999
Albania,Europe,nineteen,55.23,1282697,1601.056136,ALB,8
Algeria,Africa,1952,---,9279525,2449.008185,DZA,12
Angola,Africa,1952,30.015,4232095.0,3520.610273,AGO,24
Argentina,Americas,1952,62.485,17876956,inf,ARG,32
Australia,Oceania,1952,NaN,8691212,10039.59564,AUS,36
Austria,Europe,1952,66.8,1e30,6137.076492,AUT,40
Bahrain,Asia,nan,50.939,120447,9867.084765,BHR,48
"
        );
        assert_eq!(db.load_records(&csv).unwrap(), 2);
        let countries: Vec<String> = db
            .all_records()
            .unwrap()
            .into_iter()
            .map(|r| r.country)
            .collect();
        assert_eq!(countries, vec!["Afghanistan", "Angola"]);
    }

    #[test]
    fn nan_field_skips_the_row_without_aborting_the_load() {
        let csv = format!(
            "{}{}",
            HEADER,
            "\
China,Asia,1952,44.0,556263527,400.448611,CHN,156
Nowhere,Asia,1952,nan,1000,100.0,NWH,0
India,Asia,1952,37.373,372000000,546.5657493,IND,356
"
        );
        let db = Database::from_csv(&csv).unwrap();
        assert_eq!(db.record_count().unwrap(), 2);
        assert!(db.all_records().unwrap().iter().all(|r| r.country != "Nowhere"));
    }

    #[test]
    fn numeric_parsers_reject_non_finite_and_out_of_range_values() {
        assert_eq!(parse_integer("8425333"), Some(8425333));
        assert_eq!(parse_integer(" 8425333.0 "), Some(8425333));
        assert_eq!(parse_integer("nan"), None);
        assert_eq!(parse_integer("inf"), None);
        assert_eq!(parse_integer("1e30"), None);
        assert_eq!(parse_real("28.801"), Some(28.801));
        assert_eq!(parse_real("-inf"), None);
        assert_eq!(parse_real("NaN"), None);
    }

    #[test]
    fn load_records_rejects_missing_columns() {
        let db = Database::new().unwrap();
        let err = db
            .load_records("country,continent,year\nChina,Asia,1952\n")
            .unwrap_err();
        let msg = err.to_string();
        assert!(msg.contains("lifeExp"), "error should name the missing column: {}", msg);
        assert!(msg.contains("iso_alpha"));
    }

    #[test]
    fn load_records_appends_in_file_order() {
        let db = Database::new().unwrap();
        db.load_records(&format!("{}China,Asia,1952,44.0,556263527,400.448611,CHN,156\n", HEADER))
            .unwrap();
        db.load_records(&format!("{}India,Asia,1952,37.373,372000000,546.5657493,IND,356\n", HEADER))
            .unwrap();
        let names: Vec<String> = db.all_records().unwrap().into_iter().map(|r| r.country).collect();
        assert_eq!(names, vec!["China", "India"]);
    }
}
