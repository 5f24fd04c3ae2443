//! Conversion of [`ChartSpec`] into Plotly.js figure JSON (`{data, layout}`).

use crate::spec::{BarChart, CellStyle, ChartSpec, ChoroplethMap, Font, Layout, TableSpec};
use crate::style::RDYLBU;
use serde_json::{json, Map, Value};

/// Build the Plotly figure for a spec.
pub fn figure(spec: &ChartSpec) -> Value {
    match spec {
        ChartSpec::Bar(bar) => bar_figure(bar),
        ChartSpec::Choropleth(map) => choropleth_figure(map),
        ChartSpec::Table(table) => table_figure(table),
    }
}

fn font(font: &Font) -> Value {
    let mut obj = Map::new();
    obj.insert("color".into(), json!(font.color));
    if let Some(size) = font.size {
        obj.insert("size".into(), json!(size));
    }
    Value::Object(obj)
}

fn layout(layout: &Layout, title: Option<&str>) -> Value {
    let mut margin = Map::new();
    for (key, value) in [
        ("t", layout.margin.t),
        ("l", layout.margin.l),
        ("r", layout.margin.r),
        ("b", layout.margin.b),
    ] {
        if let Some(v) = value {
            margin.insert(key.into(), json!(v));
        }
    }

    let mut obj = json!({
        "height": layout.height,
        "paper_bgcolor": layout.paper_bgcolor,
        "plot_bgcolor": layout.plot_bgcolor,
        "margin": margin,
        "font": font(&layout.font),
    });
    if let Some(title) = title {
        obj["title"] = json!({ "text": title, "font": font(&layout.title_font) });
    }
    if let Some(bg) = layout.geo_bgcolor {
        obj["geo"] = json!({ "bgcolor": bg });
    }
    obj
}

fn bar_figure(bar: &BarChart) -> Value {
    let countries: Vec<&str> = bar.bars.iter().map(|b| b.country.as_str()).collect();
    let values: Vec<f64> = bar.bars.iter().map(|b| b.value).collect();
    let texts: Vec<&str> = bar.bars.iter().map(|b| b.text.as_str()).collect();
    let colors: Vec<&str> = bar.bars.iter().map(|b| b.color.as_str()).collect();

    let trace = json!({
        "type": "bar",
        "x": countries,
        "y": values,
        "text": texts,
        "textposition": "auto",
        "textfont": font(&bar.layout.font),
        "marker": { "color": colors },
        "hovertemplate": format!("country=%{{x}}<br>{}=%{{y}}<extra></extra>", bar.metric.value()),
        "showlegend": bar.show_legend,
    });

    let mut layout = layout(&bar.layout, Some(&bar.title));
    layout["xaxis"] = json!({ "title": { "text": bar.x_axis_title } });
    layout["yaxis"] = json!({ "title": { "text": bar.y_axis_title } });
    layout["showlegend"] = json!(bar.show_legend);

    json!({ "data": [trace], "layout": layout })
}

/// The RdYlBu stops as a Plotly colorscale array.
fn rdylbu_colorscale() -> Value {
    let last = (RDYLBU.len() - 1) as f64;
    Value::Array(
        RDYLBU
            .iter()
            .enumerate()
            .map(|(i, [r, g, b])| json!([i as f64 / last, format!("rgb({}, {}, {})", r, g, b)]))
            .collect(),
    )
}

fn choropleth_figure(map: &ChoroplethMap) -> Value {
    let locations: Vec<&str> = map.regions.iter().map(|r| r.iso_alpha.as_str()).collect();
    let values: Vec<f64> = map.regions.iter().map(|r| r.value).collect();
    let countries: Vec<&str> = map.regions.iter().map(|r| r.country.as_str()).collect();

    let mut trace = json!({
        "type": "choropleth",
        "locations": locations,
        "z": values,
        "locationmode": map.location_mode,
        "colorscale": rdylbu_colorscale(),
        "customdata": countries,
        "hovertemplate": format!(
            "country=%{{customdata}}<br>{}=%{{z}}<extra>%{{location}}</extra>",
            map.variable
        ),
        "colorbar": { "title": { "text": map.variable } },
    });
    if let Some((min, max)) = map.color_range {
        trace["zmin"] = json!(min);
        trace["zmax"] = json!(max);
    }

    json!({ "data": [trace], "layout": layout(&map.layout, Some(&map.title)) })
}

fn cell_style(style: &CellStyle, values: Value) -> Value {
    json!({
        "values": values,
        "align": style.align,
        "fill": { "color": style.fill_color },
        "font": font(&style.font),
        "line": { "color": style.line_color },
    })
}

fn table_figure(table: &TableSpec) -> Value {
    let trace = json!({
        "type": "table",
        "header": cell_style(&table.header_style, json!(table.columns)),
        "cells": cell_style(&table.cell_style, json!(table.column_values())),
    });
    json!({ "data": [trace], "layout": layout(&table.layout, None) })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::builders::{choropleth_chart, dataset_table, population_chart};
    use gm_core::{Continent, FilterQuery, Record};

    fn rows() -> Vec<Record> {
        vec![
            Record {
                country: "China".to_string(),
                continent: Continent::Asia,
                year: 1952,
                life_exp: 44.0,
                population: 556263527,
                gdp_percap: 400.448611,
                iso_alpha: "CHN".to_string(),
                iso_num: 156,
            },
            Record {
                country: "Japan".to_string(),
                continent: Continent::Asia,
                year: 1952,
                life_exp: 63.03,
                population: 86459025,
                gdp_percap: 3216.956347,
                iso_alpha: "JPN".to_string(),
                iso_num: 392,
            },
        ]
    }

    #[test]
    fn bar_figure_has_one_trace_with_titles() {
        let spec = population_chart(&rows(), &FilterQuery::ranking("Asia", "1952"));
        let fig = figure(&spec);
        assert_eq!(fig["data"][0]["type"], "bar");
        assert_eq!(fig["data"][0]["x"], json!(["China", "Japan"]));
        assert_eq!(fig["data"][0]["text"][0], "560M");
        assert_eq!(fig["layout"]["title"]["text"], "Top 15 Countries by Population in Asia (1952)");
        assert_eq!(fig["layout"]["title"]["font"]["size"], 18);
        assert_eq!(fig["layout"]["yaxis"]["title"]["text"], "Population");
        assert_eq!(fig["layout"]["margin"], json!({"t": 50, "b": 50}));
        assert_eq!(fig["layout"]["showlegend"], false);
    }

    #[test]
    fn choropleth_figure_uses_iso3_and_explicit_scale() {
        let spec = choropleth_chart(&rows(), &FilterQuery::map("lifeExp", "1952"));
        let fig = figure(&spec);
        let trace = &fig["data"][0];
        assert_eq!(trace["type"], "choropleth");
        assert_eq!(trace["locationmode"], "ISO-3");
        assert_eq!(trace["locations"], json!(["CHN", "JPN"]));
        assert_eq!(trace["zmin"], 44.0);
        assert_eq!(trace["zmax"], 63.03);
        assert_eq!(trace["colorscale"].as_array().unwrap().len(), RDYLBU.len());
        assert_eq!(trace["colorscale"][0], json!([0.0, "rgb(165, 0, 38)"]));
        assert_eq!(fig["layout"]["geo"]["bgcolor"], "#ffffff");
    }

    #[test]
    fn table_figure_is_column_oriented() {
        let fig = figure(&dataset_table(&rows()));
        let trace = &fig["data"][0];
        assert_eq!(trace["type"], "table");
        assert_eq!(trace["header"]["values"][0], "country");
        assert_eq!(trace["header"]["fill"]["color"], "#0d6efd");
        assert_eq!(trace["cells"]["values"][0], json!(["China", "Japan"]));
        assert_eq!(trace["cells"]["values"][4], json!([556263527, 86459025]));
        assert!(fig["layout"].get("title").is_none());
        assert_eq!(fig["layout"]["height"], 600);
    }
}
