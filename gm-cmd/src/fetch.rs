//! Download of the full Gapminder dataset.

use crate::data;
use gm_db::Database;
use log::info;
use std::path::Path;

/// Fetch the dataset from `url`, check that it loads, and write it as CSV.
pub async fn run_fetch(url: &str, output: &str) -> anyhow::Result<()> {
    let client = reqwest::Client::builder()
        .timeout(std::time::Duration::from_secs(60))
        .build()?;

    info!("Fetching Gapminder dataset from {}", url);
    let response = client.get(url).send().await?;
    if !response.status().is_success() {
        anyhow::bail!("Bad response from {}: {}", url, response.status());
    }
    let body = response.bytes().await?;
    let csv = data::decode(&body)?;

    let db = Database::from_csv(&csv)?;
    let count = db.record_count()?;
    if count == 0 {
        anyhow::bail!("Downloaded dataset from {} has no usable rows", url);
    }
    info!(
        "Validated {} rows ({} continents, {} years)",
        count,
        db.continents()?.len(),
        db.years()?.len()
    );

    write_dataset(output, &csv)?;
    info!("Fetch complete. Output: {}", output);
    Ok(())
}

/// Write the CSV, creating missing parent directories (e.g. `fixtures/`).
pub fn write_dataset(output: &str, csv: &str) -> anyhow::Result<()> {
    if let Some(parent) = Path::new(output).parent() {
        if !parent.as_os_str().is_empty() {
            std::fs::create_dir_all(parent)?;
        }
    }
    std::fs::write(output, csv)?;
    Ok(())
}
