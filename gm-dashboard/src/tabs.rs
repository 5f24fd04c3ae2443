//! Tab navigation: which of the five panels is visible.

use gm_core::SelectionError;
use serde::Serialize;
use std::fmt;
use std::str::FromStr;

/// The five dashboard tabs, in sidebar order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
pub enum Tab {
    Dataset,
    Population,
    Gdp,
    LifeExpectancy,
    Choropleth,
}

impl Tab {
    pub const ALL: [Tab; 5] = [
        Tab::Dataset,
        Tab::Population,
        Tab::Gdp,
        Tab::LifeExpectancy,
        Tab::Choropleth,
    ];

    /// Value carried by the tab-click event.
    pub fn value(&self) -> &'static str {
        match self {
            Tab::Dataset => "tab-dataset",
            Tab::Population => "tab-population",
            Tab::Gdp => "tab-gdp",
            Tab::LifeExpectancy => "tab-life-exp",
            Tab::Choropleth => "tab-choropleth",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Tab::Dataset => "Dataset",
            Tab::Population => "Population",
            Tab::Gdp => "GDP Per Capita",
            Tab::LifeExpectancy => "Life Expectancy",
            Tab::Choropleth => "Choropleth Map",
        }
    }

    /// DOM id of the panel this tab shows.
    pub fn panel_id(&self) -> &'static str {
        match self {
            Tab::Dataset => "tab-content-dataset",
            Tab::Population => "tab-content-population",
            Tab::Gdp => "tab-content-gdp",
            Tab::LifeExpectancy => "tab-content-life-exp",
            Tab::Choropleth => "tab-content-choropleth",
        }
    }
}

impl fmt::Display for Tab {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.value())
    }
}

impl FromStr for Tab {
    type Err = SelectionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Tab::ALL
            .into_iter()
            .find(|t| t.value() == s)
            .ok_or_else(|| SelectionError::UnknownTab(s.to_string()))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Visibility {
    Visible,
    Hidden,
}

impl Visibility {
    /// CSS `display` value for the panel.
    pub fn display(&self) -> &'static str {
        match self {
            Visibility::Visible => "block",
            Visibility::Hidden => "none",
        }
    }
}

/// Visibility of every panel after a tab event.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct PanelVisibility {
    pub panels: [(Tab, Visibility); 5],
}

impl PanelVisibility {
    pub fn of(&self, tab: Tab) -> Visibility {
        self.panels
            .iter()
            .find(|(t, _)| *t == tab)
            .map(|(_, v)| *v)
            .unwrap_or(Visibility::Hidden)
    }

    pub fn visible_count(&self) -> usize {
        self.panels
            .iter()
            .filter(|(_, v)| *v == Visibility::Visible)
            .count()
    }
}

/// Active tab of the session.
///
/// Starts on the dataset tab. Selecting a recognised tab always succeeds;
/// an unrecognised value leaves no tab active, so every panel is hidden.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ViewState {
    active: Option<Tab>,
}

impl Default for ViewState {
    fn default() -> Self {
        Self {
            active: Some(Tab::Dataset),
        }
    }
}

impl ViewState {
    pub fn active(&self) -> Option<Tab> {
        self.active
    }

    pub fn select(&mut self, value: &str) -> PanelVisibility {
        self.active = match value.parse::<Tab>() {
            Ok(tab) => Some(tab),
            Err(e) => {
                log::warn!("tabs: {}, hiding every panel", e);
                None
            }
        };
        self.visibility()
    }

    pub fn is_visible(&self, tab: Tab) -> bool {
        self.active == Some(tab)
    }

    pub fn visibility(&self) -> PanelVisibility {
        PanelVisibility {
            panels: Tab::ALL.map(|tab| {
                let v = if self.is_visible(tab) {
                    Visibility::Visible
                } else {
                    Visibility::Hidden
                };
                (tab, v)
            }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn starts_on_dataset_tab() {
        let view = ViewState::default();
        assert_eq!(view.active(), Some(Tab::Dataset));
        let vis = view.visibility();
        assert_eq!(vis.of(Tab::Dataset), Visibility::Visible);
        assert_eq!(vis.visible_count(), 1);
    }

    #[test]
    fn every_selection_shows_exactly_one_panel() {
        let mut view = ViewState::default();
        for tab in Tab::ALL {
            let vis = view.select(tab.value());
            assert_eq!(vis.visible_count(), 1);
            assert_eq!(vis.of(tab), Visibility::Visible);
            for other in Tab::ALL.into_iter().filter(|t| *t != tab) {
                assert_eq!(vis.of(other).display(), "none");
            }
        }
    }

    #[test]
    fn reselecting_the_active_tab_is_a_no_op() {
        let mut view = ViewState::default();
        view.select("tab-gdp");
        let before = view;
        view.select("tab-gdp");
        assert_eq!(view, before);
    }

    #[test]
    fn unknown_tab_hides_every_panel() {
        let mut view = ViewState::default();
        let vis = view.select("tab-settings");
        assert_eq!(view.active(), None);
        assert_eq!(vis.visible_count(), 0);

        // Recovers on the next valid selection.
        let vis = view.select("tab-choropleth");
        assert_eq!(vis.of(Tab::Choropleth).display(), "block");
    }

    #[test]
    fn tab_values_round_trip() {
        for tab in Tab::ALL {
            assert_eq!(tab.value().parse::<Tab>().unwrap(), tab);
        }
        assert!("Dataset".parse::<Tab>().is_err());
    }
}
