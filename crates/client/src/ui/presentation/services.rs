//! Service providers for the presentation layer
//!
//! Components use `use_context` to reach application services without
//! depending on infrastructure types. The bundle is provided once by the
//! composition root (`main.rs`).

use dioxus::prelude::*;
use std::sync::Arc;

use crate::application::api::Api;
use crate::application::services::UserService;
use crate::ports::outbound::ApiPort;

/// Concrete service bundle type used by the UI.
pub type UiServices = Services<Api>;

/// All services wrapped for context provision
#[derive(Clone)]
pub struct Services<A: ApiPort> {
    pub user: Arc<UserService<A>>,
}

impl<A: ApiPort> Services<A> {
    pub fn new(api: A) -> Self {
        Self {
            user: Arc::new(UserService::new(api)),
        }
    }
}

/// Hook to access the UserService from context
pub fn use_user_service() -> Arc<UserService<Api>> {
    let services = use_context::<UiServices>();
    services.user.clone()
}
