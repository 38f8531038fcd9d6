//! User Service - create and list user records
//!
//! Both operations hit the configured API base URL directly: `GET` returns
//! the full list, `POST` creates one record.

use userdesk_domain::User;

use crate::application::dto::UserRecord;
use crate::ports::outbound::{ApiPort, NetworkError};

/// The user collection lives at the base URL itself.
const USERS_PATH: &str = "";

/// Service for the remote user collection
pub struct UserService<A: ApiPort> {
    api: A,
}

impl<A: ApiPort> UserService<A> {
    pub fn new(api: A) -> Self {
        Self { api }
    }

    /// Fetch every user, in the order the API returns them.
    pub async fn list_users(&self) -> Result<Vec<UserRecord>, NetworkError> {
        self.api.get(USERS_PATH).await
    }

    /// Create a user. The response body is ignored.
    pub async fn create_user(&self, user: &User) -> Result<(), NetworkError> {
        let record = UserRecord::from(user);
        self.api.post_no_response(USERS_PATH, &record).await
    }
}
