//! Form Controller
//!
//! Owns the five field values, their validation state, and the submission
//! lifecycle. Every field is re-validated on change and on blur; an error is
//! only *shown* once its field has been touched, but validity (and therefore
//! whether submit is enabled) always considers every field.

use std::collections::{BTreeMap, BTreeSet};

use thiserror::Error;
use userdesk_domain::{
    validate_field, EmailAddress, PersonName, PhoneNumber, StreetAddress, User, UserField,
    ValidationError,
};

use crate::application::list_viewer::{self, RefreshOutcome, UserList};
use crate::application::services::UserService;
use crate::application::state_cell::StateCell;
use crate::ports::outbound::{ApiPort, NetworkError};

/// Current validation errors, one per failing field, in form order.
pub type FieldErrors = BTreeMap<UserField, ValidationError>;

/// Raw text of the five inputs.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct UserFormValues {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub address: String,
    pub phone: String,
}

impl UserFormValues {
    pub fn get(&self, field: UserField) -> &str {
        match field {
            UserField::FirstName => &self.first_name,
            UserField::LastName => &self.last_name,
            UserField::Email => &self.email,
            UserField::Address => &self.address,
            UserField::Phone => &self.phone,
        }
    }

    fn slot(&mut self, field: UserField) -> &mut String {
        match field {
            UserField::FirstName => &mut self.first_name,
            UserField::LastName => &mut self.last_name,
            UserField::Email => &mut self.email,
            UserField::Address => &mut self.address,
            UserField::Phone => &mut self.phone,
        }
    }

    pub fn is_empty(&self) -> bool {
        UserField::ALL.iter().all(|f| self.get(*f).is_empty())
    }
}

/// Why `begin_submit` refused to start a submission.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SubmitError {
    #[error("{} field(s) failed validation", .0.len())]
    Invalid(FieldErrors),

    #[error("A submission is already in flight")]
    AlreadySubmitting,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UserForm {
    values: UserFormValues,
    errors: FieldErrors,
    touched: BTreeSet<UserField>,
    submitting: bool,
}

impl Default for UserForm {
    fn default() -> Self {
        Self::new()
    }
}

impl UserForm {
    /// A pristine, empty form. Required fields start out invalid.
    pub fn new() -> Self {
        let mut form = Self {
            values: UserFormValues::default(),
            errors: FieldErrors::new(),
            touched: BTreeSet::new(),
            submitting: false,
        };
        for field in UserField::ALL {
            form.validate(field);
        }
        form
    }

    pub fn values(&self) -> &UserFormValues {
        &self.values
    }

    pub fn value(&self, field: UserField) -> &str {
        self.values.get(field)
    }

    /// Change handler: store the raw value and re-validate the field.
    pub fn set(&mut self, field: UserField, value: impl Into<String>) {
        *self.values.slot(field) = value.into();
        self.validate(field);
    }

    /// Blur handler: the field's error becomes visible from now on.
    pub fn blur(&mut self, field: UserField) {
        self.touched.insert(field);
        self.validate(field);
    }

    pub fn errors(&self) -> &FieldErrors {
        &self.errors
    }

    pub fn error(&self, field: UserField) -> Option<&ValidationError> {
        self.errors.get(&field)
    }

    /// The error to render next to `field`, if it has been touched.
    pub fn visible_error(&self, field: UserField) -> Option<&ValidationError> {
        if self.touched.contains(&field) {
            self.error(field)
        } else {
            None
        }
    }

    pub fn is_touched(&self, field: UserField) -> bool {
        self.touched.contains(&field)
    }

    pub fn is_valid(&self) -> bool {
        self.errors.is_empty()
    }

    pub fn is_submitting(&self) -> bool {
        self.submitting
    }

    /// Whether the submit button is enabled.
    pub fn can_submit(&self) -> bool {
        self.is_valid() && !self.submitting
    }

    /// Start a submission and hand back the validated user to send.
    ///
    /// Touches every field first, so a refused submit reveals all errors.
    pub fn begin_submit(&mut self) -> Result<User, SubmitError> {
        if self.submitting {
            return Err(SubmitError::AlreadySubmitting);
        }
        self.touched.extend(UserField::ALL);

        let user = self.build_user().map_err(SubmitError::Invalid)?;
        self.submitting = true;
        Ok(user)
    }

    /// The create call succeeded: back to a pristine form.
    pub fn complete_submit(&mut self) {
        *self = Self::new();
    }

    /// The create call failed: keep what the user typed.
    pub fn abort_submit(&mut self) {
        self.submitting = false;
    }

    fn validate(&mut self, field: UserField) {
        match validate_field(field, self.values.get(field)) {
            Ok(()) => {
                self.errors.remove(&field);
            }
            Err(e) => {
                self.errors.insert(field, e);
            }
        }
    }

    fn build_user(&self) -> Result<User, FieldErrors> {
        let v = &self.values;
        let first_name = PersonName::first(v.first_name.as_str());
        let last_name = PersonName::last(v.last_name.as_str());
        let email = EmailAddress::new(v.email.as_str());
        let phone = PhoneNumber::parse_optional(&v.phone);

        match (first_name, last_name, email, phone) {
            (Ok(first_name), Ok(last_name), Ok(email), Ok(phone)) => {
                Ok(User::new(first_name, last_name, email)
                    .with_address(StreetAddress::new(v.address.as_str()))
                    .with_phone(phone))
            }
            (first_name, last_name, email, phone) => Err([
                first_name.err(),
                last_name.err(),
                email.err(),
                phone.err(),
            ]
            .into_iter()
            .flatten()
            .map(|e| (e.field(), e))
            .collect()),
        }
    }
}

/// Result of a submit attempt.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmitOutcome {
    /// Created; the form was reset and the list refreshed once
    Created { refresh: RefreshOutcome },
    /// Never reached the network
    Rejected(SubmitError),
    /// The create call failed; the form keeps its values
    Failed(NetworkError),
}

/// Validate, create, reset, refresh.
pub async fn submit<A, F, L>(service: &UserService<A>, form: &mut F, list: &mut L) -> SubmitOutcome
where
    A: ApiPort,
    F: StateCell<UserForm>,
    L: StateCell<UserList>,
{
    let user = match form.update(UserForm::begin_submit) {
        Ok(user) => user,
        Err(e) => {
            tracing::debug!(error = %e, "Submission blocked");
            return SubmitOutcome::Rejected(e);
        }
    };

    match service.create_user(&user).await {
        Ok(()) => {
            tracing::info!("User created");
            form.update(UserForm::complete_submit);
            let refresh = list_viewer::refresh(service, list).await;
            SubmitOutcome::Created { refresh }
        }
        Err(e) => {
            tracing::error!(error = %e, status = ?e.status(), "Error submitting user");
            form.update(UserForm::abort_submit);
            SubmitOutcome::Failed(e)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::api::Api;
    use crate::ports::outbound::testing::MockRawApi;
    use serde_json::json;
    use std::cell::RefCell;
    use std::rc::Rc;
    use std::sync::Arc;
    use tracing_test::traced_test;

    fn filled() -> UserForm {
        let mut form = UserForm::new();
        form.set(UserField::FirstName, "Ada");
        form.set(UserField::LastName, "Lovelace");
        form.set(UserField::Email, "ada@example.com");
        form.set(UserField::Address, "");
        form.set(UserField::Phone, "12345");
        form
    }

    fn service(raw: MockRawApi) -> UserService<Api> {
        UserService::new(Api::new(Arc::new(raw)))
    }

    #[test]
    fn pristine_form_cannot_submit_but_shows_nothing() {
        let form = UserForm::new();

        assert!(!form.can_submit());
        assert!(form.values().is_empty());
        for field in UserField::ALL {
            assert_eq!(form.visible_error(field), None);
        }
    }

    #[test]
    fn each_empty_required_field_disables_submit() {
        for field in [UserField::FirstName, UserField::LastName, UserField::Email] {
            let mut form = filled();
            form.set(field, "");

            assert!(!form.can_submit(), "{field} empty should block submit");
            assert_eq!(form.error(field), Some(&ValidationError::Required(field)));
        }
    }

    #[test]
    fn non_digit_phone_blocks_submit_independently() {
        let mut form = filled();
        assert!(form.can_submit());

        form.set(UserField::Phone, "555-1234");

        assert!(!form.can_submit());
        assert_eq!(
            form.error(UserField::Phone).map(|e| e.to_string()),
            Some("Phone number must be digits".to_string())
        );
        assert_eq!(form.errors().len(), 1);
    }

    #[test]
    fn malformed_email_reports_invalid_email() {
        let mut form = filled();
        form.set(UserField::Email, "not-an-email");

        assert!(!form.can_submit());
        assert_eq!(form.error(UserField::Email), Some(&ValidationError::InvalidEmail));
    }

    #[test]
    fn errors_become_visible_on_blur() {
        let mut form = UserForm::new();
        form.set(UserField::Email, "nope");
        assert_eq!(form.visible_error(UserField::Email), None);

        form.blur(UserField::Email);

        assert!(form.is_touched(UserField::Email));
        assert_eq!(
            form.visible_error(UserField::Email).map(|e| e.to_string()),
            Some("Invalid email".to_string())
        );
        assert_eq!(form.visible_error(UserField::FirstName), None);
    }

    #[test]
    fn refused_submit_touches_every_field() {
        let mut form = UserForm::new();

        let err = form.begin_submit().expect_err("empty form is invalid");

        match err {
            SubmitError::Invalid(errors) => {
                let fields: Vec<_> = errors.keys().copied().collect();
                assert_eq!(
                    fields,
                    vec![UserField::FirstName, UserField::LastName, UserField::Email]
                );
            }
            other => panic!("unexpected error: {other:?}"),
        }
        assert!(!form.is_submitting());
        assert!(form.visible_error(UserField::FirstName).is_some());
    }

    #[test]
    fn second_submit_while_in_flight_is_refused() {
        let mut form = filled();
        form.begin_submit().expect("valid form");

        assert!(form.is_submitting());
        assert!(!form.can_submit());
        assert_eq!(form.begin_submit(), Err(SubmitError::AlreadySubmitting));
    }

    #[test]
    fn begin_submit_builds_user_with_optional_fields() {
        let mut form = filled();

        let user = form.begin_submit().expect("valid form");

        assert_eq!(user.full_name(), "Ada Lovelace");
        assert_eq!(user.phone().map(|p| p.as_str()), Some("12345"));
        assert!(user.address().is_none());
    }

    #[test]
    fn complete_resets_and_abort_keeps_values() {
        let mut form = filled();
        form.begin_submit().expect("valid form");
        form.abort_submit();
        assert!(!form.is_submitting());
        assert_eq!(form.value(UserField::FirstName), "Ada");

        form.begin_submit().expect("valid form");
        form.complete_submit();
        assert_eq!(form, UserForm::new());
    }

    #[tokio::test]
    async fn successful_submit_resets_form_and_refreshes_once() {
        let mut raw = MockRawApi::new();
        raw.expect_post_no_response_json()
            .withf(|_, body| {
                body == &json!({
                    "first_name": "Ada",
                    "last_name": "Lovelace",
                    "email": "ada@example.com",
                    "address": "",
                    "phone": "12345"
                })
            })
            .times(1)
            .returning(|_, _| Ok(()));
        raw.expect_get_json().times(1).returning(|_| {
            Ok(json!([{
                "first_name": "Ada",
                "last_name": "Lovelace",
                "email": "ada@example.com",
                "address": "",
                "phone": "12345"
            }]))
        });
        let service = service(raw);
        let mut form = Rc::new(RefCell::new(filled()));
        let mut list = Rc::new(RefCell::new(UserList::new()));

        let outcome = submit(&service, &mut form, &mut list).await;

        assert_eq!(
            outcome,
            SubmitOutcome::Created {
                refresh: RefreshOutcome::Applied { count: 1 }
            }
        );
        assert!(form.borrow().values().is_empty());
        assert!(!form.borrow().is_submitting());

        let list = list.borrow();
        let shown = &list.users()[0];
        assert_eq!(shown.full_name(), "Ada Lovelace");
        assert_eq!(shown.email, "ada@example.com");
        assert_eq!(shown.phone(), Some("12345"));
        assert_eq!(shown.address(), None);
    }

    #[tokio::test]
    async fn invalid_email_never_reaches_the_network() {
        // No expectations: any call on the mock panics.
        let service = service(MockRawApi::new());
        let mut form = Rc::new(RefCell::new(filled()));
        form.borrow_mut().set(UserField::Email, "not-an-email");
        let mut list = Rc::new(RefCell::new(UserList::new()));

        let outcome = submit(&service, &mut form, &mut list).await;

        assert!(matches!(
            outcome,
            SubmitOutcome::Rejected(SubmitError::Invalid(_))
        ));
        assert_eq!(
            form.borrow()
                .visible_error(UserField::Email)
                .map(|e| e.to_string()),
            Some("Invalid email".to_string())
        );
    }

    #[tokio::test]
    async fn padded_input_is_sent_as_entered() {
        let mut raw = MockRawApi::new();
        raw.expect_post_no_response_json()
            .withf(|_, body| {
                body == &json!({
                    "first_name": "Ada ",
                    "last_name": " Lovelace",
                    "email": "ada@example.com",
                    "address": " 12 Analytical Row ",
                    "phone": "12345"
                })
            })
            .times(1)
            .returning(|_, _| Ok(()));
        raw.expect_get_json().times(1).returning(|_| Ok(json!([])));
        let service = service(raw);
        let mut form = Rc::new(RefCell::new(filled()));
        {
            let mut form = form.borrow_mut();
            form.set(UserField::FirstName, "Ada ");
            form.set(UserField::LastName, " Lovelace");
            form.set(UserField::Address, " 12 Analytical Row ");
        }
        let mut list = Rc::new(RefCell::new(UserList::new()));

        let outcome = submit(&service, &mut form, &mut list).await;

        assert!(matches!(outcome, SubmitOutcome::Created { .. }));
        assert!(form.borrow().values().is_empty());
    }

    #[tokio::test]
    #[traced_test]
    async fn failed_create_keeps_values_and_skips_refresh() {
        let mut raw = MockRawApi::new();
        raw.expect_post_no_response_json()
            .times(1)
            .returning(|_, _| Err(NetworkError::RequestFailed("offline".to_string())));
        raw.expect_get_json().never();
        let service = service(raw);
        let mut form = Rc::new(RefCell::new(filled()));
        let mut list = Rc::new(RefCell::new(UserList::new()));

        let outcome = submit(&service, &mut form, &mut list).await;

        assert!(matches!(outcome, SubmitOutcome::Failed(_)));
        let form = form.borrow();
        assert!(!form.is_submitting());
        assert!(form.can_submit());
        assert_eq!(form.value(UserField::Phone), "12345");
        assert!(logs_contain("Error submitting user"));
    }
}
