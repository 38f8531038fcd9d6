//! Wire shape of a user record.
//!
//! Matches the JSON objects the user API accepts and returns:
//! `first_name`, `last_name`, `email`, `address`, `phone`.

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use userdesk_domain::User;

/// A user as exchanged with the API and shown in the list pane.
///
/// `address` and `phone` are `None` when the API omits them, sends `null`,
/// or sends a blank string. On the way out `None` is written as `""` so the
/// API always receives all five keys.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserRecord {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    #[serde(
        default,
        deserialize_with = "blank_as_none",
        serialize_with = "none_as_blank"
    )]
    pub address: Option<String>,
    #[serde(
        default,
        deserialize_with = "blank_as_none",
        serialize_with = "none_as_blank"
    )]
    pub phone: Option<String>,
}

impl UserRecord {
    /// "First Last"
    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }

    pub fn address(&self) -> Option<&str> {
        self.address.as_deref()
    }

    pub fn phone(&self) -> Option<&str> {
        self.phone.as_deref()
    }
}

impl From<&User> for UserRecord {
    fn from(user: &User) -> Self {
        Self {
            first_name: user.first_name().to_string(),
            last_name: user.last_name().to_string(),
            email: user.email().to_string(),
            address: user.address().map(|a| a.to_string()),
            phone: user.phone().map(|p| p.to_string()),
        }
    }
}

fn blank_as_none<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<String>::deserialize(deserializer)?;
    Ok(value.filter(|v| !v.trim().is_empty()))
}

fn none_as_blank<S>(value: &Option<String>, serializer: S) -> Result<S::Ok, S::Error>
where
    S: Serializer,
{
    serializer.serialize_str(value.as_deref().unwrap_or_default())
}
