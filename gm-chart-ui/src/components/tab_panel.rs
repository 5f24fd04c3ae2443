//! A tab's content panel: its dropdowns and its graph.

use super::{ChartContainer, ControlRow};
use crate::state::AppState;
use dioxus::prelude::*;
use gm_dashboard::Output;

/// Panel for one output, shown only while its tab is active.
///
/// Hidden panels stay mounted so their figures persist across tab switches.
#[component]
pub fn TabPanel(output: Output) -> Element {
    let state = use_context::<AppState>();
    let tab = output.tab();
    let display = state
        .dashboard
        .read()
        .as_ref()
        .map(|d| d.view().visibility().of(tab).display())
        .unwrap_or("none");
    let min_height = if output == Output::Dataset { 600 } else { 500 };

    rsx! {
        div {
            id: "{tab.panel_id()}",
            style: "display: {display};",
            if !output.controls().is_empty() {
                ControlRow { controls: output.controls().to_vec() }
            }
            ChartContainer { id: output.graph_id().to_string(), min_height }
        }
    }
}
