//! Dropdown bound to one dashboard control.

use crate::state::AppState;
use dioxus::prelude::*;
use gm_dashboard::{ControlId, Event as DashboardEvent};

/// Labelled `<select>` for a control.
///
/// Options and the current value are read from the controller; a change is
/// sent back as `Event::SelectionChanged`. There is no empty option, so a
/// selection can never be cleared.
#[component]
pub fn ControlDropdown(control: ControlId) -> Element {
    let mut state = use_context::<AppState>();
    let (options, selected) = match state.dashboard.read().as_ref() {
        Some(d) => (d.options(control), d.selection(control)),
        None => (Vec::new(), String::new()),
    };

    let on_change = move |evt: Event<FormData>| {
        state.dispatch(DashboardEvent::SelectionChanged {
            control,
            value: evt.value(),
        });
    };

    rsx! {
        label {
            r#for: "{control.id()}",
            style: "font-weight: 500; color: #333;",
            "{control.label()}"
        }
        select {
            id: "{control.id()}",
            style: "min-width: 150px; padding: 4px 8px; border-radius: 4px;",
            onchange: on_change,
            for opt in options.iter() {
                option {
                    key: "{opt.value}",
                    value: "{opt.value}",
                    selected: opt.value == selected,
                    "{opt.label}"
                }
            }
        }
    }
}

/// The two dropdowns of one chart, side by side.
#[component]
pub fn ControlRow(controls: Vec<ControlId>) -> Element {
    rsx! {
        div {
            style: "display: flex; gap: 15px; align-items: center; margin-bottom: 20px;",
            for control in controls {
                ControlDropdown { key: "{control.id()}", control }
            }
        }
    }
}
