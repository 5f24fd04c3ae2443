//! The top-level dashboard controller.
//!
//! `Dashboard` owns all UI state: the active tab and the raw value of every
//! dropdown. Hosts push [`Event`]s in and apply the returned [`Effect`]; they
//! never mutate state directly.
//!
//! Each chart output has its own reducer ([`reduce`]) that only reads its own
//! dropdown group, so a change in one group never recomputes the others.

use crate::controls::{self, ControlId, ControlRole, DropdownOption, Output};
use crate::tabs::{PanelVisibility, ViewState};
use gm_charts::{choropleth_chart, dataset_table, ranking_chart, ChartSpec};
use gm_core::{FilterQuery, Metric};
use gm_db::{Database, DEFAULT_TOP_N};
use serde::Serialize;
use std::collections::BTreeMap;

pub const DEFAULT_CONTINENT: &str = "Asia";
pub const DEFAULT_YEAR: &str = "1952";
pub const DEFAULT_VARIABLE: &str = "lifeExp";

/// A user interaction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Event {
    /// A tab was clicked; carries the raw tab value.
    TabSelected(String),
    /// A dropdown changed value.
    SelectionChanged { control: ControlId, value: String },
}

/// What the host must redraw after an event.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "effect", rename_all = "snake_case")]
pub enum Effect {
    Visibility(PanelVisibility),
    Chart { output: Output, spec: ChartSpec },
}

/// Recompute one output from its dropdown group.
///
/// Unknown selections are logged and produce an empty chart whose title still
/// echoes the selection. The dataset table has no controls and ignores `query`.
pub fn reduce(db: &Database, output: Output, query: &FilterQuery) -> anyhow::Result<ChartSpec> {
    let ranked = |metric: Metric| -> anyhow::Result<ChartSpec> {
        let rows = match (query.continent(), query.year()) {
            (Ok(continent), Ok(year)) => db.top_n(continent.as_str(), year, metric, DEFAULT_TOP_N)?,
            (Err(e), _) | (_, Err(e)) => {
                log::warn!("controller: {} for {:?}, rendering empty chart", e, output);
                Vec::new()
            }
        };
        Ok(ranking_chart(metric, &rows, query))
    };

    match output {
        Output::Dataset => Ok(dataset_table(&db.all_records()?)),
        Output::Population => ranked(Metric::Population),
        Output::Gdp => ranked(Metric::GdpPerCapita),
        Output::LifeExpectancy => ranked(Metric::LifeExpectancy),
        Output::Choropleth => {
            let rows = match (query.metric(), query.year()) {
                (Ok(_), Ok(year)) => db.by_year(year)?,
                (Err(e), _) | (_, Err(e)) => {
                    log::warn!("controller: {} for {:?}, rendering empty map", e, output);
                    Vec::new()
                }
            };
            Ok(choropleth_chart(&rows, query))
        }
    }
}

fn default_query(output: Output) -> FilterQuery {
    match output {
        Output::Choropleth => FilterQuery::map(DEFAULT_VARIABLE, DEFAULT_YEAR),
        _ => FilterQuery::ranking(DEFAULT_CONTINENT, DEFAULT_YEAR),
    }
}

/// Session state of the dashboard.
#[derive(Clone)]
pub struct Dashboard {
    db: Database,
    view: ViewState,
    queries: BTreeMap<Output, FilterQuery>,
    charts: BTreeMap<Output, ChartSpec>,
    continent_options: Vec<DropdownOption>,
    year_options: Vec<DropdownOption>,
    record_count: usize,
}

impl Dashboard {
    /// Build the session and render every output once with default selections.
    pub fn new(db: Database) -> anyhow::Result<Self> {
        let continent_options = controls::continent_options(&db.continents()?);
        let year_options = controls::year_options(&db.years()?);
        let record_count = db.record_count()?;

        let mut queries = BTreeMap::new();
        let mut charts = BTreeMap::new();
        for output in Output::ALL {
            let query = default_query(output);
            charts.insert(output, reduce(&db, output, &query)?);
            queries.insert(output, query);
        }
        log::info!("controller: rendered {} initial outputs", charts.len());

        Ok(Self {
            db,
            view: ViewState::default(),
            queries,
            charts,
            continent_options,
            year_options,
            record_count,
        })
    }

    /// Effects that draw the initial page: panel visibility plus every chart.
    pub fn initial_effects(&self) -> Vec<Effect> {
        let mut effects = vec![Effect::Visibility(self.view.visibility())];
        effects.extend(self.charts.iter().map(|(output, spec)| Effect::Chart {
            output: *output,
            spec: spec.clone(),
        }));
        effects
    }

    /// Apply one event and return the single effect the host must apply.
    pub fn handle(&mut self, event: Event) -> anyhow::Result<Effect> {
        match event {
            Event::TabSelected(value) => Ok(Effect::Visibility(self.view.select(&value))),
            Event::SelectionChanged { control, value } => {
                let output = control.output();
                let query = self.queries.entry(output).or_insert_with(|| default_query(output));
                match control.role() {
                    ControlRole::Continent => query.continent = Some(value),
                    ControlRole::Year => query.year = value,
                    ControlRole::Metric => query.variable = Some(value),
                }
                let spec = reduce(&self.db, output, query)?;
                log::info!("controller: {} changed, redrawing {:?}", control, output);
                self.charts.insert(output, spec.clone());
                Ok(Effect::Chart { output, spec })
            }
        }
    }

    /// One-line description of the loaded dataset, e.g.
    /// `1704 rows, 5 continents, 12 years (1952 to 2007)`.
    pub fn summary(&self) -> String {
        let span = match (self.year_options.first(), self.year_options.last()) {
            (Some(first), Some(last)) => format!(" ({} to {})", first.value, last.value),
            _ => String::new(),
        };
        format!(
            "{} rows, {} continents, {} years{}",
            self.record_count,
            self.continent_options.len(),
            self.year_options.len(),
            span
        )
    }

    pub fn view(&self) -> &ViewState {
        &self.view
    }

    /// Currently displayed spec for an output.
    pub fn chart(&self, output: Output) -> Option<&ChartSpec> {
        self.charts.get(&output)
    }

    /// Current value of a dropdown.
    pub fn selection(&self, control: ControlId) -> String {
        let Some(query) = self.queries.get(&control.output()) else {
            return String::new();
        };
        match control.role() {
            ControlRole::Continent => query.continent.clone().unwrap_or_default(),
            ControlRole::Year => query.year.clone(),
            ControlRole::Metric => query.variable.clone().unwrap_or_default(),
        }
    }

    /// Options offered by a dropdown.
    pub fn options(&self, control: ControlId) -> Vec<DropdownOption> {
        match control.role() {
            ControlRole::Continent => self.continent_options.clone(),
            ControlRole::Year => self.year_options.clone(),
            ControlRole::Metric => controls::metric_options(),
        }
    }
}
