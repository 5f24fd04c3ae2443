//! Gapminder Dashboard
//!
//! Single-page dashboard over the Gapminder country dataset: a raw data
//! table, three top-15 bar charts (population, GDP per capita, life
//! expectancy) filtered by continent and year, and a world choropleth.
//!
//! Data flow:
//! 1. `build.rs` copies `gapminder.csv` into `OUT_DIR`.
//! 2. `include_str!` embeds the CSV into the WASM binary.
//! 3. On mount the CSV is loaded into an in-memory SQLite database and the
//!    `Dashboard` controller draws all five figures once.
//! 4. Tab clicks and dropdown changes go through `AppState::dispatch`; only
//!    the affected figure is redrawn.

use gm_chart_ui::components::{
    ErrorDisplay, LoadingSpinner, PageHeader, TabBar, TabPanel,
};
use gm_chart_ui::js_bridge;
use gm_chart_ui::state::AppState;
use gm_dashboard::{Dashboard, Output};
use gm_db::Database;
use dioxus::prelude::*;

/// The Gapminder dataset (country, continent, year, lifeExp, pop, gdpPercap, iso codes).
const GAPMINDER_CSV: &str = include_str!(concat!(env!("OUT_DIR"), "/gapminder.csv"));

const APP_TITLE: &str = "Gapminder Dashboard";

fn main() {
    dioxus_logger::init(dioxus_logger::tracing::Level::INFO).expect("failed to init logger");
    dioxus::LaunchBuilder::new()
        .with_cfg(dioxus::web::Config::new().rootname("gapminder-root"))
        .launch(App);
}

fn load_dashboard() -> anyhow::Result<Dashboard> {
    let db = Database::from_csv(GAPMINDER_CSV)?;
    if db.record_count()? == 0 {
        anyhow::bail!(
            "no Gapminder data was bundled. Run `gm-cli fetch --output fixtures/gapminder.csv` and rebuild"
        );
    }
    Dashboard::new(db)
}

#[component]
fn App() -> Element {
    let mut state = use_context_provider(AppState::new);

    // Load the dataset and draw every figure once on mount
    use_effect(move || {
        js_bridge::set_document_title(APP_TITLE);
        match load_dashboard() {
            Ok(dashboard) => state.start(dashboard),
            Err(e) => {
                log::error!("Failed to load Gapminder data: {}", e);
                state
                    .error_msg
                    .set(Some(format!("Failed to load Gapminder data: {}", e)));
                state.loading.set(false);
            }
        }
    });

    let subtitle = state
        .dashboard
        .read()
        .as_ref()
        .map(|d| d.summary())
        .unwrap_or_default();

    rsx! {
        div {
            style: "padding: 16px; background: #f8f9fa; min-height: 100vh; font-family: -apple-system, BlinkMacSystemFont, 'Segoe UI', Roboto, sans-serif;",

            PageHeader {
                title: "Gapminder Dataset Analysis".to_string(),
                subtitle,
            }

            if let Some(err) = (state.error_msg)() {
                ErrorDisplay { message: err }
            }
            if (state.loading)() {
                LoadingSpinner {}
            } else {
                div {
                    style: "display: flex; gap: 20px; align-items: flex-start;",
                    aside {
                        style: "flex: 0 0 220px; background: #ffffff; box-shadow: 0 2px 4px rgba(0, 0, 0, 0.1); padding: 15px; border-radius: 8px;",
                        TabBar {}
                    }
                    main {
                        style: "flex: 1; min-width: 0; background: #ffffff; box-shadow: 0 2px 4px rgba(0, 0, 0, 0.1); padding: 20px; border-radius: 8px;",
                        for output in Output::ALL {
                            TabPanel { key: "{output.graph_id()}", output }
                        }
                    }
                }
            }
        }
    }
}
