//! Session logic of the Gapminder dashboard, independent of any UI toolkit.
//!
//! - [`tabs`]: the view state machine (one visible panel out of five)
//! - [`controls`]: dropdown identities, their option sets and the outputs they drive
//! - [`controller`]: the `Dashboard` controller and the per-output reducers

pub mod controller;
pub mod controls;
pub mod tabs;

pub use controller::{reduce, Dashboard, Effect, Event};
pub use controls::{ControlId, DropdownOption, Output};
pub use tabs::{PanelVisibility, Tab, ViewState, Visibility};
