use crate::error::SelectionError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// One row of the Gapminder dataset: a country observed in a given year.
#[derive(Debug, PartialEq, Clone, Serialize, Deserialize)]
pub struct Record {
    pub country: String,
    pub continent: Continent,
    /// Observation year, in 5-year steps from 1952 to 2007
    pub year: i64,
    #[serde(rename = "lifeExp")]
    pub life_exp: f64,
    #[serde(rename = "pop")]
    pub population: i64,
    #[serde(rename = "gdpPercap")]
    pub gdp_percap: f64,
    /// ISO 3166-1 alpha-3 code, the choropleth location key
    pub iso_alpha: String,
    /// ISO 3166-1 numeric code
    pub iso_num: i64,
}

impl Record {
    /// Value of the given metric for this row.
    pub fn metric(&self, metric: Metric) -> f64 {
        match metric {
            Metric::Population => self.population as f64,
            Metric::GdpPerCapita => self.gdp_percap,
            Metric::LifeExpectancy => self.life_exp,
        }
    }
}

/// Continental grouping used to filter countries.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Continent {
    Asia,
    Europe,
    Africa,
    Americas,
    Oceania,
}

impl Continent {
    pub const ALL: [Continent; 5] = [
        Continent::Asia,
        Continent::Europe,
        Continent::Africa,
        Continent::Americas,
        Continent::Oceania,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Continent::Asia => "Asia",
            Continent::Europe => "Europe",
            Continent::Africa => "Africa",
            Continent::Americas => "Americas",
            Continent::Oceania => "Oceania",
        }
    }
}

impl fmt::Display for Continent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Continent {
    type Err = SelectionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Continent::ALL
            .into_iter()
            .find(|c| c.as_str() == s.trim())
            .ok_or_else(|| SelectionError::UnknownContinent(s.to_string()))
    }
}

/// The quantity being charted.
///
/// The dropdown values (`pop`, `gdpPercap`, `lifeExp`) match the dataset
/// column names; the labels are what titles and axes display.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Metric {
    #[serde(rename = "pop")]
    Population,
    #[serde(rename = "gdpPercap")]
    GdpPerCapita,
    #[serde(rename = "lifeExp")]
    LifeExpectancy,
}

impl Metric {
    pub const ALL: [Metric; 3] = [
        Metric::Population,
        Metric::GdpPerCapita,
        Metric::LifeExpectancy,
    ];

    /// Dropdown value and dataset column name.
    pub fn value(&self) -> &'static str {
        match self {
            Metric::Population => "pop",
            Metric::GdpPerCapita => "gdpPercap",
            Metric::LifeExpectancy => "lifeExp",
        }
    }

    /// Human-readable label for titles, axes and dropdown options.
    pub fn label(&self) -> &'static str {
        match self {
            Metric::Population => "Population",
            Metric::GdpPerCapita => "GDP per Capita",
            Metric::LifeExpectancy => "Life Expectancy",
        }
    }

    /// Label for a raw dropdown value, falling back to the value itself.
    pub fn label_for(value: &str) -> String {
        value
            .parse::<Metric>()
            .map(|m| m.label().to_string())
            .unwrap_or_else(|_| value.to_string())
    }
}

impl fmt::Display for Metric {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.value())
    }
}

impl FromStr for Metric {
    type Err = SelectionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Metric::ALL
            .into_iter()
            .find(|m| m.value() == s.trim())
            .ok_or_else(|| SelectionError::UnknownMetric(s.to_string()))
    }
}
