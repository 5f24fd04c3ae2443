//! Container div that Plotly draws a figure into.

use dioxus::prelude::*;

/// Props for ChartContainer
#[derive(Props, Clone, PartialEq)]
pub struct ChartContainerProps {
    /// The DOM id Plotly renders into
    pub id: String,
    /// Minimum height in pixels, matching the figure height
    #[props(default = 500)]
    pub min_height: u32,
}

#[component]
pub fn ChartContainer(props: ChartContainerProps) -> Element {
    let style = format!(
        "min-height: {}px; width: 100%; border-radius: 8px; overflow: hidden;",
        props.min_height
    );

    rsx! {
        div {
            id: "{props.id}",
            style: "{style}",
        }
    }
}
