//! User List Viewer
//!
//! Holds the users last fetched from the API. The list is only ever replaced
//! wholesale by a successful fetch; a failed fetch leaves it untouched.
//!
//! Refreshes may overlap (manual "Fetch Users" racing the automatic refresh
//! after a create). Every refresh takes a `RefreshTicket` when it starts, and
//! a response is applied only if its ticket is newer than the last applied
//! one, so the most recently *started* refresh always wins.

use crate::application::dto::UserRecord;
use crate::application::services::UserService;
use crate::application::state_cell::StateCell;
use crate::ports::outbound::{ApiPort, NetworkError};

/// Placeholder shown when the list is empty.
pub const EMPTY_LIST_MESSAGE: &str = "No users found.";

/// Sequence number handed out when a refresh starts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct RefreshTicket(u64);

/// What happened to a refresh response.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RefreshOutcome {
    /// The list now holds exactly the response, `count` records long
    Applied { count: usize },
    /// A newer refresh already landed; this response was dropped
    Stale,
    /// The fetch failed; the previous list is kept
    Failed(NetworkError),
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct UserList {
    users: Vec<UserRecord>,
    last_issued: u64,
    last_applied: Option<RefreshTicket>,
}

impl UserList {
    pub fn new() -> Self {
        Self::default()
    }

    /// Users in API response order.
    pub fn users(&self) -> &[UserRecord] {
        &self.users
    }

    pub fn is_empty(&self) -> bool {
        self.users.is_empty()
    }

    pub fn begin_refresh(&mut self) -> RefreshTicket {
        self.last_issued += 1;
        RefreshTicket(self.last_issued)
    }

    pub fn complete_refresh(
        &mut self,
        ticket: RefreshTicket,
        result: Result<Vec<UserRecord>, NetworkError>,
    ) -> RefreshOutcome {
        let users = match result {
            Ok(users) => users,
            Err(e) => return RefreshOutcome::Failed(e),
        };

        if self.last_applied.is_some_and(|applied| ticket <= applied) {
            return RefreshOutcome::Stale;
        }

        let count = users.len();
        self.users = users;
        self.last_applied = Some(ticket);
        RefreshOutcome::Applied { count }
    }
}

/// Fetch the user list and store it in `list`.
///
/// Failures are logged and otherwise swallowed.
pub async fn refresh<A, L>(service: &UserService<A>, list: &mut L) -> RefreshOutcome
where
    A: ApiPort,
    L: StateCell<UserList>,
{
    let ticket = list.update(UserList::begin_refresh);
    let result = service.list_users().await;
    let outcome = list.update(|l| l.complete_refresh(ticket, result));

    match &outcome {
        RefreshOutcome::Applied { count } => tracing::debug!(count, "User list refreshed"),
        RefreshOutcome::Stale => tracing::debug!(?ticket, "Dropped stale user list response"),
        RefreshOutcome::Failed(e) => {
            tracing::error!(error = %e, status = ?e.status(), "Error fetching users")
        }
    }

    outcome
}
