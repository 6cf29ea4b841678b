//! Types for account and user endpoints.

use serde::{Deserialize, Serialize};
use serde_with::{DefaultOnNull, serde_as};
use time::OffsetDateTime;

use crate::rest::envelope::Resource;
use crate::types::UserRole;

/// A mite user.
#[serde_as]
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct User {
    /// User ID.
    pub id: u64,
    /// Display name.
    pub name: String,
    /// Email address.
    pub email: String,
    /// Free-form note.
    #[serde_as(deserialize_as = "DefaultOnNull")]
    #[serde(default)]
    pub note: String,
    /// Whether the user is archived.
    #[serde(default)]
    pub archived: bool,
    /// Role within the account.
    pub role: UserRole,
    /// Interface language, e.g. `"de"`.
    #[serde_as(deserialize_as = "DefaultOnNull")]
    #[serde(default)]
    pub language: String,
    /// Creation time.
    #[serde(with = "time::serde::rfc3339")]
    pub created_at: OffsetDateTime,
    /// Last update time.
    #[serde(with = "time::serde::rfc3339")]
    pub updated_at: OffsetDateTime,
}

impl Resource for User {
    const ENVELOPE_KEY: &'static str = "user";
}

/// The mite account (organization and billing context).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Account {
    /// Account ID.
    pub id: u64,
    /// Account name, the subdomain used for login.
    pub name: String,
    /// Human-readable title.
    pub title: String,
    /// Billing currency, e.g. `"EUR"`.
    pub currency: String,
    /// Creation time.
    #[serde(with = "time::serde::rfc3339")]
    pub created_at: OffsetDateTime,
    /// Last update time.
    #[serde(with = "time::serde::rfc3339")]
    pub updated_at: OffsetDateTime,
}

impl Resource for Account {
    const ENVELOPE_KEY: &'static str = "account";
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_user_null_note() {
        let json = r#"{
            "id": 3,
            "name": "Ada",
            "email": "ada@example.com",
            "note": null,
            "archived": false,
            "role": "admin",
            "language": "en",
            "created_at": "2015-10-16T12:39:32+02:00",
            "updated_at": "2016-01-02T08:00:00+01:00"
        }"#;
        let user: User = serde_json::from_str(json).unwrap();
        assert_eq!(user.note, "");
        assert!(user.role.is_admin());
        assert_eq!(user.created_at.year(), 2015);
    }
}
