//! The transient filter built from one dropdown group per UI event.

use crate::error::SelectionError;
use crate::record::{Continent, Metric};
use serde::{Deserialize, Serialize};

/// Raw dropdown values of one control group.
///
/// Values are kept as the strings the UI sent so titles can always echo the
/// current selection, even a stale one. The typed accessors validate them.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FilterQuery {
    pub continent: Option<String>,
    pub year: String,
    pub variable: Option<String>,
}

impl FilterQuery {
    /// A continent + year query (the three ranking charts).
    pub fn ranking(continent: impl Into<String>, year: impl Into<String>) -> Self {
        Self {
            continent: Some(continent.into()),
            year: year.into(),
            variable: None,
        }
    }

    /// A metric + year query (the choropleth).
    pub fn map(variable: impl Into<String>, year: impl Into<String>) -> Self {
        Self {
            continent: None,
            year: year.into(),
            variable: Some(variable.into()),
        }
    }

    /// Continent label for titles, empty when the query has none.
    pub fn continent_label(&self) -> &str {
        self.continent.as_deref().unwrap_or("")
    }

    pub fn continent(&self) -> Result<Continent, SelectionError> {
        self.continent_label().parse()
    }

    pub fn year(&self) -> Result<i64, SelectionError> {
        self.year
            .trim()
            .parse()
            .map_err(|_| SelectionError::UnknownYear(self.year.clone()))
    }

    pub fn metric(&self) -> Result<Metric, SelectionError> {
        self.variable.as_deref().unwrap_or("").parse()
    }
}
