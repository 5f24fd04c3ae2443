//! Page header with the dashboard title.

use dioxus::prelude::*;

#[derive(Props, Clone, PartialEq)]
pub struct PageHeaderProps {
    /// Page title
    pub title: String,
    /// Optional line under the title (e.g. dataset size)
    #[props(default = String::new())]
    pub subtitle: String,
}

/// White card across the top of the page.
#[component]
pub fn PageHeader(props: PageHeaderProps) -> Element {
    rsx! {
        div {
            style: "background: #ffffff; box-shadow: 0 2px 4px rgba(0, 0, 0, 0.1); padding: 20px; margin-bottom: 20px; border-radius: 8px; text-align: center;",
            h1 {
                style: "margin: 0; font-weight: 700; font-size: 28px; color: #333;",
                "{props.title}"
            }
            if !props.subtitle.is_empty() {
                p {
                    style: "margin: 6px 0 0 0; font-size: 12px; color: #666;",
                    "{props.subtitle}"
                }
            }
        }
    }
}
