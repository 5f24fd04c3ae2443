//! Chart builders for the Gapminder dashboard.
//!
//! Each builder maps filtered rows plus the current [`gm_core::FilterQuery`]
//! to a [`ChartSpec`]: a renderer-agnostic description of series, labels
//! and colors.
//!
//! - `builders`: population / GDP / life expectancy rankings, choropleth, table
//! - `spec`: the serializable chart structures
//! - `style`: fixed colors, fonts and layout constants
//! - `format`: bar label formatting
//! - `plotly`: conversion of a spec into Plotly.js figure JSON

pub mod builders;
pub mod format;
pub mod plotly;
pub mod spec;
pub mod style;

pub use builders::{
    choropleth_chart, dataset_table, gdp_per_capita_chart, life_expectancy_chart,
    population_chart, ranking_chart,
};
pub use spec::{ChartSpec, TableSpec};
