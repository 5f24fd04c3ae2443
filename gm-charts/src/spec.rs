//! Declarative chart descriptions handed to the rendering layer.
//!
//! These structs carry data, labels and styling only. [`crate::plotly`]
//! turns them into Plotly.js figures.

use gm_core::Metric;
use serde::Serialize;

/// Any visualization the dashboard can show.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum ChartSpec {
    Bar(BarChart),
    Choropleth(ChoroplethMap),
    Table(TableSpec),
}

impl ChartSpec {
    pub fn title(&self) -> &str {
        match self {
            ChartSpec::Bar(bar) => &bar.title,
            ChartSpec::Choropleth(map) => &map.title,
            ChartSpec::Table(_) => "",
        }
    }

    /// True when there is nothing to draw (e.g. after an unknown selection).
    pub fn is_empty(&self) -> bool {
        match self {
            ChartSpec::Bar(bar) => bar.bars.is_empty(),
            ChartSpec::Choropleth(map) => map.regions.is_empty(),
            ChartSpec::Table(table) => table.rows.is_empty(),
        }
    }
}

/// Categorical bar chart keyed by country.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BarChart {
    pub title: String,
    pub metric: Metric,
    pub x_axis_title: String,
    pub y_axis_title: String,
    /// d3-format specifier the bar text was rendered with (`.2s` or `.2f`)
    pub text_format: &'static str,
    pub show_legend: bool,
    pub bars: Vec<Bar>,
    pub layout: Layout,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Bar {
    pub country: String,
    pub value: f64,
    /// Pre-formatted label drawn on the bar
    pub text: String,
    pub color: String,
}

/// World map shaded by one metric, keyed by ISO-3 code.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ChoroplethMap {
    pub title: String,
    /// Raw variable selection; `metric` is `None` when it is unknown.
    pub variable: String,
    pub metric: Option<Metric>,
    pub location_mode: &'static str,
    pub color_scale: &'static str,
    /// Value range the colors were interpolated over
    pub color_range: Option<(f64, f64)>,
    pub hover_fields: Vec<String>,
    pub regions: Vec<Region>,
    pub layout: Layout,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Region {
    pub iso_alpha: String,
    pub country: String,
    pub value: f64,
    pub color: String,
}

/// The dataset table.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TableSpec {
    pub columns: Vec<String>,
    pub rows: Vec<Vec<Cell>>,
    pub header_style: CellStyle,
    pub cell_style: CellStyle,
    pub layout: Layout,
}

impl TableSpec {
    /// Cell values grouped by column, the shape column-oriented renderers expect.
    pub fn column_values(&self) -> Vec<Vec<Cell>> {
        (0..self.columns.len())
            .map(|i| {
                self.rows
                    .iter()
                    .filter_map(|row| row.get(i).cloned())
                    .collect()
            })
            .collect()
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum Cell {
    Text(String),
    Integer(i64),
    Number(f64),
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CellStyle {
    pub align: &'static str,
    pub fill_color: &'static str,
    pub line_color: &'static str,
    pub font: Font,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Layout {
    pub height: u32,
    pub paper_bgcolor: &'static str,
    pub plot_bgcolor: &'static str,
    pub margin: Margin,
    pub title_font: Font,
    pub font: Font,
    /// Background of the geo subplot (maps only)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub geo_bgcolor: Option<&'static str>,
}

/// Plot margins in pixels; `None` keeps the renderer default.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize)]
pub struct Margin {
    pub t: Option<u32>,
    pub l: Option<u32>,
    pub r: Option<u32>,
    pub b: Option<u32>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Font {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub size: Option<u32>,
    pub color: &'static str,
}
