//! Loading and error indicators.

use dioxus::prelude::*;

/// Shown while the bundled dataset is parsed and the first charts are built.
#[component]
pub fn LoadingSpinner() -> Element {
    rsx! {
        div {
            style: "display: flex; justify-content: center; align-items: center; padding: 40px; color: #666;",
            "Loading Gapminder dataset..."
        }
    }
}

#[derive(Props, Clone, PartialEq)]
pub struct ErrorDisplayProps {
    pub message: String,
}

/// Error box for dataset load failures and failed chart updates.
#[component]
pub fn ErrorDisplay(props: ErrorDisplayProps) -> Element {
    rsx! {
        div {
            style: "padding: 12px 16px; margin: 8px 0; background: #FFEBEE; color: #C62828; border-radius: 8px; border: 1px solid #EF9A9A;",
            strong { "Dashboard error: " }
            "{props.message}"
        }
    }
}
