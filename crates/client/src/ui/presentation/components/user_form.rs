//! Create-user form
//!
//! Five inputs bound to the shared `UserForm` signal. Errors show inline once
//! a field has been touched; the submit button follows `can_submit()`.

use dioxus::prelude::*;
use userdesk_domain::UserField;

use crate::application::{form_controller, StateCell};
use crate::ui::presentation::services::use_user_service;
use crate::ui::presentation::state::{use_user_form, use_user_list};

#[component]
pub fn UserFormPanel() -> Element {
    let service = use_user_service();
    let form = use_user_form();
    let list = use_user_list();

    let (can_submit, submitting) = form.read_with(|f| (f.can_submit(), f.is_submitting()));

    let on_submit = move |evt: FormEvent| {
        evt.prevent_default();
        let service = service.clone();
        let mut form = form;
        let mut list = list;
        spawn(async move {
            form_controller::submit(&service, &mut form, &mut list).await;
        });
    };

    rsx! {
        form {
            class: "user-form",
            onsubmit: on_submit,

            for field in UserField::ALL {
                FormField { key: "{field}", field }
            }

            button {
                class: "btn btn-primary",
                r#type: "submit",
                disabled: !can_submit,
                if submitting { "Submitting..." } else { "Submit" }
            }
        }
    }
}

/// One labelled input with its inline error
#[component]
fn FormField(field: UserField) -> Element {
    let mut form = use_user_form();

    let (value, error) = form.read_with(|f| {
        (
            f.value(field).to_string(),
            f.visible_error(field).map(ToString::to_string),
        )
    });

    let key = field.key();
    let label = field.label();
    let input_type = match field {
        UserField::Phone => "tel",
        _ => "text",
    };
    let input_class = if error.is_some() {
        "form-input form-input-invalid"
    } else {
        "form-input"
    };

    rsx! {
        div {
            class: "form-group",

            label {
                class: "form-label",
                r#for: key,
                "{label}"
                if field.is_required() {
                    span { class: "form-required", " *" }
                }
            }

            input {
                id: key,
                name: key,
                class: input_class,
                r#type: input_type,
                value: "{value}",
                oninput: move |e| form.write().set(field, e.value()),
                onblur: move |_| form.write().blur(field),
            }

            if let Some(message) = error {
                p { class: "form-error", "{message}" }
            }
        }
    }
}
