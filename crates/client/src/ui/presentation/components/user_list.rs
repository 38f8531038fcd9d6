//! User list pane

use dioxus::prelude::*;

use crate::application::dto::UserRecord;
use crate::application::{list_viewer, StateCell, UserList, EMPTY_LIST_MESSAGE};
use crate::ui::presentation::services::use_user_service;
use crate::ui::presentation::state::use_user_list;

/// What the pane body shows for the current list
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ListPane {
    Empty(&'static str),
    Cards(Vec<UserCardLines>),
}

impl ListPane {
    pub fn from_list(list: &UserList) -> Self {
        if list.is_empty() {
            Self::Empty(EMPTY_LIST_MESSAGE)
        } else {
            Self::Cards(list.users().iter().map(UserCardLines::from_record).collect())
        }
    }
}

/// Text of one user card, in display order
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UserCardLines {
    pub name: String,
    pub details: Vec<String>,
}

impl UserCardLines {
    /// Address and phone lines appear only when present.
    pub fn from_record(user: &UserRecord) -> Self {
        let mut details = vec![format!("Email: {}", user.email)];
        if let Some(address) = user.address() {
            details.push(format!("Address: {address}"));
        }
        if let Some(phone) = user.phone() {
            details.push(format!("Phone: {phone}"));
        }
        Self {
            name: user.full_name(),
            details,
        }
    }
}

#[component]
pub fn UserListPanel() -> Element {
    let service = use_user_service();
    let list = use_user_list();

    let pane = list.read_with(ListPane::from_list);

    let on_fetch = move |_| {
        let service = service.clone();
        let mut list = list;
        spawn(async move {
            list_viewer::refresh(&service, &mut list).await;
        });
    };

    rsx! {
        div {
            class: "user-list",

            div {
                class: "user-list-header",
                h2 { class: "section-title", "Users List" }
                button {
                    class: "btn btn-secondary",
                    onclick: on_fetch,
                    "Fetch Users"
                }
            }

            {
                match pane {
                    ListPane::Empty(message) => rsx! {
                        p { class: "user-list-empty", "{message}" }
                    },
                    ListPane::Cards(cards) => rsx! {
                        ul {
                            class: "user-cards",
                            for (index, card) in cards.into_iter().enumerate() {
                                UserCard { key: "{index}", card }
                            }
                        }
                    },
                }
            }
        }
    }
}

#[component]
fn UserCard(card: UserCardLines) -> Element {
    rsx! {
        li {
            class: "user-card",
            p { class: "user-card-name", "{card.name}" }
            for line in card.details {
                p { class: "user-card-line", "{line}" }
            }
        }
    }
}
