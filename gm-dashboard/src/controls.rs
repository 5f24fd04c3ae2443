//! Dropdown controls and the chart outputs they drive.

use crate::tabs::Tab;
use gm_core::{Continent, Metric, SelectionError};
use serde::Serialize;
use std::fmt;
use std::str::FromStr;

/// A rendered graph on the page.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
pub enum Output {
    Dataset,
    Population,
    Gdp,
    LifeExpectancy,
    Choropleth,
}

impl Output {
    pub const ALL: [Output; 5] = [
        Output::Dataset,
        Output::Population,
        Output::Gdp,
        Output::LifeExpectancy,
        Output::Choropleth,
    ];

    /// DOM id of the graph container.
    pub fn graph_id(&self) -> &'static str {
        match self {
            Output::Dataset => "dataset",
            Output::Population => "population",
            Output::Gdp => "gdp",
            Output::LifeExpectancy => "life_expectancy",
            Output::Choropleth => "choropleth_map",
        }
    }

    pub fn tab(&self) -> Tab {
        match self {
            Output::Dataset => Tab::Dataset,
            Output::Population => Tab::Population,
            Output::Gdp => Tab::Gdp,
            Output::LifeExpectancy => Tab::LifeExpectancy,
            Output::Choropleth => Tab::Choropleth,
        }
    }

    /// The two dropdowns feeding this output; the dataset table has none.
    pub fn controls(&self) -> &'static [ControlId] {
        match self {
            Output::Dataset => &[],
            Output::Population => &[ControlId::ContPop, ControlId::YearPop],
            Output::Gdp => &[ControlId::ContGdp, ControlId::YearGdp],
            Output::LifeExpectancy => &[ControlId::ContLifeExp, ControlId::YearLifeExp],
            Output::Choropleth => &[ControlId::VarMap, ControlId::YearMap],
        }
    }
}

/// What kind of value a dropdown holds.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ControlRole {
    Continent,
    Year,
    Metric,
}

/// The eight dropdowns on the page.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum ControlId {
    ContPop,
    YearPop,
    ContGdp,
    YearGdp,
    ContLifeExp,
    YearLifeExp,
    VarMap,
    YearMap,
}

impl ControlId {
    pub const ALL: [ControlId; 8] = [
        ControlId::ContPop,
        ControlId::YearPop,
        ControlId::ContGdp,
        ControlId::YearGdp,
        ControlId::ContLifeExp,
        ControlId::YearLifeExp,
        ControlId::VarMap,
        ControlId::YearMap,
    ];

    pub fn id(&self) -> &'static str {
        match self {
            ControlId::ContPop => "cont_pop",
            ControlId::YearPop => "year_pop",
            ControlId::ContGdp => "cont_gdp",
            ControlId::YearGdp => "year_gdp",
            ControlId::ContLifeExp => "cont_life_exp",
            ControlId::YearLifeExp => "year_life_exp",
            ControlId::VarMap => "var_map",
            ControlId::YearMap => "year_map",
        }
    }

    pub fn output(&self) -> Output {
        match self {
            ControlId::ContPop | ControlId::YearPop => Output::Population,
            ControlId::ContGdp | ControlId::YearGdp => Output::Gdp,
            ControlId::ContLifeExp | ControlId::YearLifeExp => Output::LifeExpectancy,
            ControlId::VarMap | ControlId::YearMap => Output::Choropleth,
        }
    }

    pub fn role(&self) -> ControlRole {
        match self {
            ControlId::ContPop | ControlId::ContGdp | ControlId::ContLifeExp => {
                ControlRole::Continent
            }
            ControlId::VarMap => ControlRole::Metric,
            _ => ControlRole::Year,
        }
    }

    /// Text shown next to the dropdown.
    pub fn label(&self) -> &'static str {
        match self.role() {
            ControlRole::Continent => "Continent:",
            ControlRole::Year => "Year:",
            ControlRole::Metric => "Variable:",
        }
    }
}

impl fmt::Display for ControlId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.id())
    }
}

impl FromStr for ControlId {
    type Err = SelectionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        ControlId::ALL
            .into_iter()
            .find(|c| c.id() == s)
            .ok_or_else(|| SelectionError::UnknownControl(s.to_string()))
    }
}

/// One entry of a dropdown.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DropdownOption {
    pub label: String,
    pub value: String,
}

impl DropdownOption {
    fn same(value: String) -> Self {
        Self {
            label: value.clone(),
            value,
        }
    }
}

pub fn continent_options(continents: &[Continent]) -> Vec<DropdownOption> {
    continents
        .iter()
        .map(|c| DropdownOption::same(c.to_string()))
        .collect()
}

pub fn year_options(years: &[i64]) -> Vec<DropdownOption> {
    years
        .iter()
        .map(|y| DropdownOption::same(y.to_string()))
        .collect()
}

/// The fixed three-entry metric dropdown.
pub fn metric_options() -> Vec<DropdownOption> {
    Metric::ALL
        .iter()
        .map(|m| DropdownOption {
            label: m.label().to_string(),
            value: m.value().to_string(),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn each_chart_output_has_two_controls_that_point_back_to_it() {
        for output in Output::ALL {
            for control in output.controls() {
                assert_eq!(control.output(), output);
            }
        }
        assert!(Output::Dataset.controls().is_empty());
        assert_eq!(ControlId::ALL.len(), 8);
    }

    #[test]
    fn control_ids_round_trip() {
        for control in ControlId::ALL {
            assert_eq!(control.id().parse::<ControlId>().unwrap(), control);
        }
        assert_eq!(
            "year_nope".parse::<ControlId>().unwrap_err(),
            SelectionError::UnknownControl("year_nope".to_string())
        );
    }

    #[test]
    fn roles_and_labels() {
        assert_eq!(ControlId::ContGdp.role(), ControlRole::Continent);
        assert_eq!(ControlId::YearMap.role(), ControlRole::Year);
        assert_eq!(ControlId::VarMap.label(), "Variable:");
    }

    #[test]
    fn metric_options_are_the_fixed_table() {
        let opts = metric_options();
        let pairs: Vec<(&str, &str)> = opts
            .iter()
            .map(|o| (o.label.as_str(), o.value.as_str()))
            .collect();
        assert_eq!(
            pairs,
            vec![
                ("Population", "pop"),
                ("GDP per Capita", "gdpPercap"),
                ("Life Expectancy", "lifeExp"),
            ]
        );
    }

    #[test]
    fn year_and_continent_options_keep_input_order() {
        let years = year_options(&[1952, 1957]);
        assert_eq!(years[1].value, "1957");
        let continents = continent_options(&[Continent::Europe, Continent::Asia]);
        assert_eq!(continents[0].label, "Europe");
    }
}
