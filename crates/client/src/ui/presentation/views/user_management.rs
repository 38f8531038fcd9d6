use dioxus::prelude::*;

use crate::ui::presentation::components::{UserFormPanel, UserListPanel};

/// The single page: form on the left, list on the right
#[component]
pub fn UserManagementView() -> Element {
    rsx! {
        div {
            class: "page",
            h1 { class: "page-title", "User Management" }

            div {
                class: "page-grid",
                section { class: "panel", UserFormPanel {} }
                section { class: "panel", UserListPanel {} }
            }
        }
    }
}
