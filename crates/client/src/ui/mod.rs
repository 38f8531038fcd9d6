use dioxus::prelude::*;

pub mod presentation;

pub fn app() -> Element {
    rsx! {
        AppRoot {}
    }
}

#[component]
fn AppRoot() -> Element {
    // Signals must be created inside an active Dioxus runtime.
    use_context_provider(presentation::state::UserFormState::new);
    use_context_provider(presentation::state::UserListState::new);

    rsx! {
        document::Stylesheet {
            href: asset!("/assets/css/main.css"),
        }

        presentation::views::UserManagementView {}
    }
}
