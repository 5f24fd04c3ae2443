//! Application state managed via Dioxus context.
//!
//! `AppState` wraps the `Dashboard` controller in a signal and is provided via
//! `use_context_provider`. Components read the controller to render and send
//! their events back through [`AppState::dispatch`], so every state change goes
//! through the controller.

use crate::js_bridge;
use gm_charts::plotly;
use gm_dashboard::{Dashboard, Effect, Event, Output};
use dioxus::prelude::*;

/// Shared application state for the dashboard page.
#[derive(Clone, Copy)]
pub struct AppState {
    /// Session controller (None until the dataset is loaded)
    pub dashboard: Signal<Option<Dashboard>>,
    /// Whether the app is still loading
    pub loading: Signal<bool>,
    /// Error message if something went wrong
    pub error_msg: Signal<Option<String>>,
}

impl AppState {
    /// Create a new AppState with default signal values.
    pub fn new() -> Self {
        Self {
            dashboard: Signal::new(None),
            loading: Signal::new(true),
            error_msg: Signal::new(None),
        }
    }

    /// Install a loaded controller and draw everything once.
    pub fn start(&mut self, dashboard: Dashboard) {
        js_bridge::init_charts();
        for effect in dashboard.initial_effects() {
            apply_effect(&effect);
        }
        self.dashboard.set(Some(dashboard));
        self.loading.set(false);
    }

    /// Route a UI event through the controller and apply its effect.
    pub fn dispatch(&mut self, event: Event) {
        let result = {
            let mut guard = self.dashboard.write();
            match guard.as_mut() {
                Some(dashboard) => dashboard.handle(event),
                None => return,
            }
        };
        match result {
            Ok(effect) => apply_effect(&effect),
            Err(e) => {
                log::error!("Failed to update dashboard: {}", e);
                self.error_msg.set(Some(format!("Failed to update chart: {}", e)));
            }
        }
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}

/// Push an effect out to the page.
///
/// Panel visibility itself is re-rendered by Dioxus from the controller
/// signal; here we only redraw or re-fit Plotly figures.
pub fn apply_effect(effect: &Effect) {
    match effect {
        Effect::Chart { output, spec } => {
            let figure = plotly::figure(spec).to_string();
            js_bridge::render_figure(output.graph_id(), &figure);
        }
        Effect::Visibility(visibility) => {
            for output in Output::ALL {
                if visibility.of(output.tab()) == gm_dashboard::Visibility::Visible {
                    js_bridge::resize_chart(output.graph_id());
                }
            }
        }
    }
}
