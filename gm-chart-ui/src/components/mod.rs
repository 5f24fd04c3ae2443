//! Reusable Dioxus RSX components for the dashboard page.

mod chart_container;
mod control_dropdown;
mod page_header;
mod status;
mod tab_bar;
mod tab_panel;

pub use chart_container::ChartContainer;
pub use control_dropdown::{ControlDropdown, ControlRow};
pub use page_header::PageHeader;
pub use status::{ErrorDisplay, LoadingSpinner};
pub use tab_bar::TabBar;
pub use tab_panel::TabPanel;
