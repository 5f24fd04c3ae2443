//! One-shot queries against a dataset file.

use crate::data::load_database;
use gm_charts::plotly;
use gm_core::{FilterQuery, Metric, Record};
use gm_dashboard::{reduce, Output};
use std::io::Write;

/// Print the `limit` highest rows of one continent and year.
pub fn run_top(
    data: &str,
    continent: &str,
    year: &str,
    metric: &str,
    limit: usize,
) -> anyhow::Result<()> {
    let db = load_database(data)?;
    let metric: Metric = metric.parse()?;
    let year: i64 = FilterQuery::ranking(continent, year).year()?;

    let rows = db.top_n(continent, year, metric, limit)?;
    if rows.is_empty() {
        log::warn!("No rows for {} in {}", continent, year);
    }
    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    for line in format_top(&rows, metric) {
        writeln!(out, "{}", line)?;
    }
    Ok(())
}

/// Tab separated `rank, country, iso, value` lines, headed by the metric label.
pub fn format_top(rows: &[Record], metric: Metric) -> Vec<String> {
    let mut lines = vec![format!("rank\tcountry\tiso_alpha\t{}", metric.label())];
    for (i, row) in rows.iter().enumerate() {
        let value = match metric {
            Metric::Population => row.population.to_string(),
            _ => format!("{:.2}", row.metric(metric)),
        };
        lines.push(format!("{}\t{}\t{}\t{}", i + 1, row.country, row.iso_alpha, value));
    }
    lines
}

/// Build one output for the given selection and write its JSON.
pub fn run_chart(
    data: &str,
    output: Output,
    continent: &str,
    year: &str,
    metric: &str,
    as_plotly: bool,
    path: Option<&str>,
) -> anyhow::Result<()> {
    let db = load_database(data)?;
    let query = match output {
        Output::Choropleth => FilterQuery::map(metric, year),
        _ => FilterQuery::ranking(continent, year),
    };
    let spec = reduce(&db, output, &query)?;
    let json = if as_plotly {
        serde_json::to_string_pretty(&plotly::figure(&spec))?
    } else {
        serde_json::to_string_pretty(&spec)?
    };

    match path {
        Some(path) => {
            std::fs::write(path, json)?;
            log::info!("Wrote {:?} chart to {}", output, path);
        }
        None => println!("{}", json),
    }
    Ok(())
}
