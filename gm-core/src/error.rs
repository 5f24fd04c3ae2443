//! Selection errors raised when a dropdown or tab value is not in its known set.

use thiserror::Error;

/// A UI value that does not match any known option.
///
/// Callers never surface these to the user; they map to an empty chart
/// (or to the all-hidden panel state for tabs).
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SelectionError {
    #[error("unknown continent: {0}")]
    UnknownContinent(String),
    #[error("unknown year: {0}")]
    UnknownYear(String),
    #[error("unknown metric: {0}")]
    UnknownMetric(String),
    #[error("unknown tab: {0}")]
    UnknownTab(String),
    #[error("unknown control: {0}")]
    UnknownControl(String),
}
