//! Core domain types for the Gapminder dashboard.
//!
//! - [`record`]: one row of the dataset plus the closed `Continent` and
//!   `Metric` enumerations used by every dropdown.
//! - [`query`]: the per-event `FilterQuery` built from a dropdown group.
//! - [`error`]: the `SelectionError` taxonomy for stale or unknown UI values.

pub mod error;
pub mod query;
pub mod record;

pub use error::SelectionError;
pub use query::FilterQuery;
pub use record::{Continent, Metric, Record};
