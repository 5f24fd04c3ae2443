//! Reading the dataset from disk or a download body.

use flate2::read::GzDecoder;
use gm_db::Database;
use std::io::Read;

const GZIP_MAGIC: [u8; 2] = [0x1f, 0x8b];

/// Decode a dataset body to text, gunzipping it when it carries the gzip magic.
pub fn decode(bytes: &[u8]) -> anyhow::Result<String> {
    if bytes.starts_with(&GZIP_MAGIC) {
        let mut text = String::new();
        GzDecoder::new(bytes).read_to_string(&mut text)?;
        Ok(text)
    } else {
        Ok(String::from_utf8(bytes.to_vec())?)
    }
}

/// Load a dataset CSV (plain or gzip) into a fresh in-memory store.
pub fn load_database(path: &str) -> anyhow::Result<Database> {
    let bytes = std::fs::read(path)
        .map_err(|e| anyhow::anyhow!("Failed to read dataset {}: {}", path, e))?;
    let csv = decode(&bytes)?;
    let db = Database::from_csv(&csv)?;
    let count = db.record_count()?;
    if count == 0 {
        anyhow::bail!("Dataset {} contains no usable rows", path);
    }
    log::info!("Loaded {} rows from {}", count, path);
    Ok(db)
}

#[cfg(test)]
mod tests {
    use super::*;
    use flate2::write::GzEncoder;
    use flate2::Compression;
    use std::io::Write;

    const CSV: &str = "country,continent,year,lifeExp,pop,gdpPercap,iso_alpha,iso_num\nChina,Asia,1952,44.0,556263527,400.448611,CHN,156\n";

    #[test]
    fn plain_text_passes_through() {
        assert_eq!(decode(CSV.as_bytes()).unwrap(), CSV);
    }

    #[test]
    fn gzip_bodies_are_decompressed() {
        let mut encoder = GzEncoder::new(Vec::new(), Compression::default());
        encoder.write_all(CSV.as_bytes()).unwrap();
        let gz = encoder.finish().unwrap();
        assert_eq!(decode(&gz).unwrap(), CSV);
    }

    #[test]
    fn missing_file_is_an_error() {
        let err = load_database("/nonexistent/gapminder.csv").err().unwrap();
        assert!(err.to_string().contains("Failed to read dataset"));
    }
}
