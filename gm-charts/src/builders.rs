//! Chart builders: filtered rows + the current selection in, `ChartSpec` out.
//!
//! Every builder is pure. Titles and axis labels are derived from the
//! `FilterQuery` so they always echo the dropdown state, including a stale
//! selection that matched no rows.

use crate::format::{fixed_2, si_2};
use crate::spec::{Bar, BarChart, Cell, ChartSpec, ChoroplethMap, Region, TableSpec};
use crate::style;
use gm_core::{FilterQuery, Metric, Record};

/// Columns of the dataset table, in display order.
pub const TABLE_COLUMNS: [&str; 8] = [
    "country",
    "continent",
    "year",
    "lifeExp",
    "pop",
    "gdpPercap",
    "iso_alpha",
    "iso_num",
];

pub fn ranking_title(metric: Metric, query: &FilterQuery) -> String {
    format!(
        "Top 15 Countries by {} in {} ({})",
        metric.label(),
        query.continent_label(),
        query.year
    )
}

pub fn map_title(query: &FilterQuery) -> String {
    format!(
        "{} Choropleth Map ({})",
        Metric::label_for(query.variable.as_deref().unwrap_or("")),
        query.year
    )
}

/// Bar chart of `rows` (already ranked by `top_n`) for one metric.
pub fn ranking_chart(metric: Metric, rows: &[Record], query: &FilterQuery) -> ChartSpec {
    let (text_format, format_value): (&'static str, fn(f64) -> String) = match metric {
        Metric::Population => (".2s", si_2 as fn(f64) -> String),
        Metric::GdpPerCapita | Metric::LifeExpectancy => (".2f", fixed_2 as fn(f64) -> String),
    };

    let bars = rows
        .iter()
        .enumerate()
        .map(|(i, r)| {
            let value = r.metric(metric);
            Bar {
                country: r.country.clone(),
                value,
                text: format_value(value),
                color: style::bold_color(i).to_string(),
            }
        })
        .collect();

    ChartSpec::Bar(BarChart {
        title: ranking_title(metric, query),
        metric,
        x_axis_title: "Country".to_string(),
        y_axis_title: metric.label().to_string(),
        text_format,
        show_legend: false,
        bars,
        layout: style::bar_layout(),
    })
}

pub fn population_chart(rows: &[Record], query: &FilterQuery) -> ChartSpec {
    ranking_chart(Metric::Population, rows, query)
}

pub fn gdp_per_capita_chart(rows: &[Record], query: &FilterQuery) -> ChartSpec {
    ranking_chart(Metric::GdpPerCapita, rows, query)
}

pub fn life_expectancy_chart(rows: &[Record], query: &FilterQuery) -> ChartSpec {
    ranking_chart(Metric::LifeExpectancy, rows, query)
}

/// Choropleth of one year's slice, shaded by the query's variable.
///
/// An unknown variable keeps the raw value in the title and draws no regions.
pub fn choropleth_chart(rows: &[Record], query: &FilterQuery) -> ChartSpec {
    let variable = query.variable.clone().unwrap_or_default();
    let metric = query.metric().ok();

    let (regions, color_range) = match metric {
        Some(metric) => shade_regions(rows, metric),
        None => (Vec::new(), None),
    };

    ChartSpec::Choropleth(ChoroplethMap {
        title: map_title(query),
        hover_fields: vec!["country".to_string(), variable.clone()],
        variable,
        metric,
        location_mode: "ISO-3",
        color_scale: style::RDYLBU_NAME,
        color_range,
        regions,
        layout: style::map_layout(),
    })
}

fn shade_regions(rows: &[Record], metric: Metric) -> (Vec<Region>, Option<(f64, f64)>) {
    let range = rows.iter().map(|r| r.metric(metric)).fold(None, |acc, v| match acc {
        None => Some((v, v)),
        Some((lo, hi)) => Some((f64::min(lo, v), f64::max(hi, v))),
    });
    let Some((min, max)) = range else {
        return (Vec::new(), None);
    };

    let regions = rows
        .iter()
        .map(|r| {
            let value = r.metric(metric);
            Region {
                iso_alpha: r.iso_alpha.clone(),
                country: r.country.clone(),
                value,
                color: style::rdylbu_color(value, min, max),
            }
        })
        .collect();
    (regions, range)
}

/// The full dataset as a table.
pub fn dataset_table(rows: &[Record]) -> ChartSpec {
    let rows = rows
        .iter()
        .map(|r| {
            vec![
                Cell::Text(r.country.clone()),
                Cell::Text(r.continent.to_string()),
                Cell::Integer(r.year),
                Cell::Number(r.life_exp),
                Cell::Integer(r.population),
                Cell::Number(r.gdp_percap),
                Cell::Text(r.iso_alpha.clone()),
                Cell::Integer(r.iso_num),
            ]
        })
        .collect();

    ChartSpec::Table(TableSpec {
        columns: TABLE_COLUMNS.iter().map(|c| c.to_string()).collect(),
        rows,
        header_style: style::table_header_style(),
        cell_style: style::table_cell_style(),
        layout: style::table_layout(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use gm_core::Continent;

    fn record(country: &str, iso: &str, pop: i64, gdp: f64, life: f64) -> Record {
        Record {
            country: country.to_string(),
            continent: Continent::Asia,
            year: 1952,
            life_exp: life,
            population: pop,
            gdp_percap: gdp,
            iso_alpha: iso.to_string(),
            iso_num: 0,
        }
    }

    fn asia_1952() -> Vec<Record> {
        vec![
            record("China", "CHN", 556263527, 400.448611, 44.0),
            record("India", "IND", 372000000, 546.5657493, 37.373),
            record("Japan", "JPN", 86459025, 3216.956347, 63.03),
        ]
    }

    fn bar_chart(spec: &ChartSpec) -> &BarChart {
        match spec {
            ChartSpec::Bar(bar) => bar,
            other => panic!("expected a bar chart, got {:?}", other),
        }
    }

    fn map(spec: &ChartSpec) -> &ChoroplethMap {
        match spec {
            ChartSpec::Choropleth(map) => map,
            other => panic!("expected a choropleth, got {:?}", other),
        }
    }

    #[test]
    fn population_chart_labels_follow_the_selection() {
        let query = FilterQuery::ranking("Asia", "1952");
        let spec = population_chart(&asia_1952(), &query);
        let bar = bar_chart(&spec);
        assert_eq!(bar.title, "Top 15 Countries by Population in Asia (1952)");
        assert_eq!(bar.x_axis_title, "Country");
        assert_eq!(bar.y_axis_title, "Population");
        assert_eq!(bar.text_format, ".2s");
        assert!(!bar.show_legend);
        assert_eq!(bar.bars[0].country, "China");
        assert_eq!(bar.bars[0].text, "560M");
    }

    #[test]
    fn gdp_and_life_expectancy_use_fixed_labels() {
        let query = FilterQuery::ranking("Europe", "2007");
        let gdp = gdp_per_capita_chart(&asia_1952(), &query);
        let gdp = bar_chart(&gdp);
        assert_eq!(gdp.title, "Top 15 Countries by GDP per Capita in Europe (2007)");
        assert_eq!(gdp.y_axis_title, "GDP per Capita");
        assert_eq!(gdp.bars[0].text, "400.45");

        let life = life_expectancy_chart(&asia_1952(), &query);
        let life = bar_chart(&life);
        assert_eq!(life.y_axis_title, "Life Expectancy");
        assert_eq!(life.bars[2].text, "63.03");
    }

    #[test]
    fn bars_take_distinct_palette_colors_in_order() {
        let spec = population_chart(&asia_1952(), &FilterQuery::ranking("Asia", "1952"));
        let colors: Vec<&str> = bar_chart(&spec).bars.iter().map(|b| b.color.as_str()).collect();
        assert_eq!(colors, vec![style::BOLD[0], style::BOLD[1], style::BOLD[2]]);
    }

    #[test]
    fn builders_are_pure() {
        let query = FilterQuery::ranking("Asia", "1952");
        assert_eq!(
            population_chart(&asia_1952(), &query),
            population_chart(&asia_1952(), &query)
        );
        let query = FilterQuery::map("pop", "1952");
        assert_eq!(
            choropleth_chart(&asia_1952(), &query),
            choropleth_chart(&asia_1952(), &query)
        );
    }

    #[test]
    fn empty_rows_give_empty_chart_with_title() {
        let query = FilterQuery::ranking("Atlantis", "1952");
        let spec = population_chart(&[], &query);
        assert!(spec.is_empty());
        assert_eq!(spec.title(), "Top 15 Countries by Population in Atlantis (1952)");
    }

    #[test]
    fn choropleth_has_one_region_per_row_colored_by_value() {
        let query = FilterQuery::map("lifeExp", "1952");
        let spec = choropleth_chart(&asia_1952(), &query);
        let m = map(&spec);
        assert_eq!(m.title, "Life Expectancy Choropleth Map (1952)");
        assert_eq!(m.location_mode, "ISO-3");
        assert_eq!(m.color_scale, "RdYlBu");
        assert_eq!(m.hover_fields, vec!["country", "lifeExp"]);
        assert_eq!(m.regions.len(), 3);
        assert_eq!(m.color_range, Some((37.373, 63.03)));

        let india = m.regions.iter().find(|r| r.iso_alpha == "IND").unwrap();
        let japan = m.regions.iter().find(|r| r.iso_alpha == "JPN").unwrap();
        assert_eq!(india.color, style::rdylbu_color(37.373, 37.373, 63.03));
        assert_eq!(india.color, "rgb(165, 0, 38)");
        assert_eq!(japan.color, "rgb(49, 54, 149)");
    }

    #[test]
    fn choropleth_unknown_variable_is_empty_with_raw_title() {
        let spec = choropleth_chart(&asia_1952(), &FilterQuery::map("gini", "1952"));
        let m = map(&spec);
        assert!(m.metric.is_none());
        assert!(m.regions.is_empty());
        assert_eq!(m.title, "gini Choropleth Map (1952)");
    }

    #[test]
    fn dataset_table_has_one_row_per_record() {
        let spec = dataset_table(&asia_1952());
        let ChartSpec::Table(table) = &spec else {
            panic!("expected a table");
        };
        assert_eq!(table.columns, TABLE_COLUMNS.to_vec());
        assert_eq!(table.rows.len(), 3);
        assert_eq!(table.rows[1][0], Cell::Text("India".to_string()));
        assert_eq!(table.rows[1][4], Cell::Integer(372000000));

        let by_column = table.column_values();
        assert_eq!(by_column.len(), TABLE_COLUMNS.len());
        assert_eq!(by_column[6], vec![
            Cell::Text("CHN".to_string()),
            Cell::Text("IND".to_string()),
            Cell::Text("JPN".to_string()),
        ]);
    }

    #[test]
    fn chart_spec_serializes_with_kind_tag() {
        let spec = population_chart(&asia_1952(), &FilterQuery::ranking("Asia", "1952"));
        let json = serde_json::to_value(&spec).unwrap();
        assert_eq!(json["kind"], "bar");
        assert_eq!(json["metric"], "pop");
        assert_eq!(json["bars"][1]["country"], "India");
    }
}
