//! Vertical tab navigation in the sidebar.

use crate::state::AppState;
use dioxus::prelude::*;
use gm_dashboard::{Event as DashboardEvent, Tab};

const TAB_STYLE: &str = "display: block; width: 100%; text-align: left; padding: 10px 14px; margin-bottom: 5px; border: none; border-radius: 6px; cursor: pointer; font-size: 14px;";

/// One button per tab; clicking sends `Event::TabSelected`.
#[component]
pub fn TabBar() -> Element {
    let state = use_context::<AppState>();
    let active = state
        .dashboard
        .read()
        .as_ref()
        .and_then(|d| d.view().active());

    rsx! {
        nav {
            style: "display: flex; flex-direction: column;",
            for tab in Tab::ALL {
                TabButton { key: "{tab.value()}", tab, active: active == Some(tab) }
            }
        }
    }
}

#[component]
fn TabButton(tab: Tab, active: bool) -> Element {
    let mut state = use_context::<AppState>();
    let colors = if active {
        "background: #0d6efd; color: white; font-weight: 700;"
    } else {
        "background: transparent; color: #495057; font-weight: 500;"
    };

    rsx! {
        button {
            r#type: "button",
            style: "{TAB_STYLE} {colors}",
            onclick: move |_| state.dispatch(DashboardEvent::TabSelected(tab.value().to_string())),
            "{tab.label()}"
        }
    }
}
