//! Command implementations for the Gapminder CLI.
//!
//! Provides subcommands to download the dataset, query the top-N rankings,
//! export chart specs as JSON and drive a headless dashboard session.

use clap::{Subcommand, ValueEnum};
use gm_dashboard::Output;

pub mod data;
pub mod fetch;
pub mod query;
pub mod session;

/// Default download location of the full dataset (with ISO codes).
pub const DEFAULT_DATASET_URL: &str =
    "https://raw.githubusercontent.com/plotly/datasets/master/gapminder_with_codes.csv";

/// Chart outputs selectable on the command line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ChartKind {
    Population,
    Gdp,
    LifeExp,
    Choropleth,
    Table,
}

impl From<ChartKind> for Output {
    fn from(kind: ChartKind) -> Self {
        match kind {
            ChartKind::Population => Output::Population,
            ChartKind::Gdp => Output::Gdp,
            ChartKind::LifeExp => Output::LifeExpectancy,
            ChartKind::Choropleth => Output::Choropleth,
            ChartKind::Table => Output::Dataset,
        }
    }
}

#[derive(Subcommand)]
pub enum Command {
    /// Download the full Gapminder dataset (plain or gzip CSV)
    Fetch {
        /// Where to write the CSV
        #[arg(short, long)]
        output: String,

        /// Source URL; `.gz` bodies are decompressed
        #[arg(long, default_value = DEFAULT_DATASET_URL)]
        url: String,
    },

    /// Print the top countries of one continent and year by a metric
    Top {
        /// Path to the dataset CSV
        #[arg(short, long)]
        data: String,

        #[arg(short, long, default_value = gm_dashboard::controller::DEFAULT_CONTINENT)]
        continent: String,

        #[arg(short, long, default_value = gm_dashboard::controller::DEFAULT_YEAR)]
        year: String,

        /// pop, gdpPercap or lifeExp
        #[arg(short, long, default_value = "pop")]
        metric: String,

        #[arg(short = 'n', long, default_value_t = gm_db::DEFAULT_TOP_N)]
        limit: usize,
    },

    /// Build one chart and write its spec as JSON
    Chart {
        /// Path to the dataset CSV
        #[arg(short, long)]
        data: String,

        #[arg(value_enum)]
        kind: ChartKind,

        #[arg(short, long, default_value = gm_dashboard::controller::DEFAULT_CONTINENT)]
        continent: String,

        #[arg(short, long, default_value = gm_dashboard::controller::DEFAULT_YEAR)]
        year: String,

        /// Map variable: pop, gdpPercap or lifeExp
        #[arg(short, long, default_value = gm_dashboard::controller::DEFAULT_VARIABLE)]
        metric: String,

        /// Write the Plotly figure instead of the chart spec
        #[arg(long)]
        plotly: bool,

        /// Output file (stdout when omitted)
        #[arg(short, long)]
        output: Option<String>,
    },

    /// Run a headless dashboard session driven by events on stdin
    Session {
        /// Path to the dataset CSV
        #[arg(short, long)]
        data: String,
    },
}

pub async fn run(command: Command) -> anyhow::Result<()> {
    match command {
        Command::Fetch { output, url } => fetch::run_fetch(&url, &output).await,
        Command::Top {
            data,
            continent,
            year,
            metric,
            limit,
        } => query::run_top(&data, &continent, &year, &metric, limit),
        Command::Chart {
            data,
            kind,
            continent,
            year,
            metric,
            plotly,
            output,
        } => query::run_chart(
            &data,
            kind.into(),
            &continent,
            &year,
            &metric,
            plotly,
            output.as_deref(),
        ),
        Command::Session { data } => session::run_session(&data),
    }
}
