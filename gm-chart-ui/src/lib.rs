//! Shared Dioxus components and Plotly.js bridge for the Gapminder dashboard.
//!
//! This crate provides:
//! - `js_bridge`: Rust wrappers for Plotly.js calls via `js_sys::eval()`
//! - `state`: `AppState` signals wrapping the `Dashboard` controller
//! - `components`: RSX components (tab bar, dropdowns, panels, containers)

pub mod components;
pub mod js_bridge;
pub mod state;
