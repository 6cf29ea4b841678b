//! Types for time entry endpoints.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use serde_with::{DefaultOnNull, serde_as};
use time::{Date, OffsetDateTime};

use crate::rest::envelope::Resource;
use crate::types::serde_helpers::{iso_date, option_iso_date};

/// A logged or in-progress time entry.
#[serde_as]
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TimeEntry {
    /// Time entry ID.
    pub id: u64,
    /// Logged minutes.
    pub minutes: u32,
    /// Day the work was done.
    #[serde(with = "iso_date")]
    pub date_at: Date,
    /// Free-form note.
    #[serde_as(deserialize_as = "DefaultOnNull")]
    #[serde(default)]
    pub note: String,
    /// Whether the entry is billable.
    #[serde(default)]
    pub billable: bool,
    /// Whether the entry is locked against edits.
    #[serde(default)]
    pub locked: bool,
    /// Revenue in cents, absent when no rate applies.
    #[serde(default)]
    pub revenue: Option<Decimal>,
    /// Hourly rate in cents, zero when no rate applies.
    #[serde_as(deserialize_as = "DefaultOnNull")]
    #[serde(default)]
    pub hourly_rate: u64,
    /// Owning user.
    #[serde(default)]
    pub user_id: Option<u64>,
    /// Owning user's name.
    #[serde(default)]
    pub user_name: Option<String>,
    /// Project, if assigned.
    #[serde(default)]
    pub project_id: Option<u64>,
    /// Project name, if assigned.
    #[serde(default)]
    pub project_name: Option<String>,
    /// Customer of the project, if any.
    #[serde(default)]
    pub customer_id: Option<u64>,
    /// Customer name, if any.
    #[serde(default)]
    pub customer_name: Option<String>,
    /// Service, if assigned.
    #[serde(default)]
    pub service_id: Option<u64>,
    /// Service name, if assigned.
    #[serde(default)]
    pub service_name: Option<String>,
    /// Creation time.
    #[serde(with = "time::serde::rfc3339")]
    pub created_at: OffsetDateTime,
    /// Last update time.
    #[serde(with = "time::serde::rfc3339")]
    pub updated_at: OffsetDateTime,
}

impl Resource for TimeEntry {
    const ENVELOPE_KEY: &'static str = "time_entry";
}

/// Payload for creating a time entry. Every field is optional; mite fills in
/// today's date and the authenticated user when they are omitted.
///
/// # Example
///
/// ```rust
/// use mite_api_client::rest::time_entries::NewTimeEntry;
///
/// let entry = NewTimeEntry::new()
///     .minutes(90)
///     .note("Code review")
///     .project_id(42);
/// assert_eq!(entry.minutes, Some(90));
/// ```
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct NewTimeEntry {
    /// Day the work was done.
    #[serde(with = "option_iso_date", skip_serializing_if = "Option::is_none")]
    pub date_at: Option<Date>,
    /// Minutes to log.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub minutes: Option<u32>,
    /// Free-form note.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub note: Option<String>,
    /// User to log for (admins only).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub user_id: Option<u64>,
    /// Project to assign.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub project_id: Option<u64>,
    /// Service to assign.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub service_id: Option<u64>,
    /// Lock the entry after creation.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub locked: Option<bool>,
}

impl NewTimeEntry {
    /// Create an empty payload.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the day.
    pub fn date_at(mut self, date_at: Date) -> Self {
        self.date_at = Some(date_at);
        self
    }

    /// Set the minutes.
    pub fn minutes(mut self, minutes: u32) -> Self {
        self.minutes = Some(minutes);
        self
    }

    /// Set the note.
    pub fn note(mut self, note: impl Into<String>) -> Self {
        self.note = Some(note.into());
        self
    }

    /// Set the user.
    pub fn user_id(mut self, user_id: u64) -> Self {
        self.user_id = Some(user_id);
        self
    }

    /// Set the project.
    pub fn project_id(mut self, project_id: u64) -> Self {
        self.project_id = Some(project_id);
        self
    }

    /// Set the service.
    pub fn service_id(mut self, service_id: u64) -> Self {
        self.service_id = Some(service_id);
        self
    }

    /// Set the lock flag.
    pub fn locked(mut self, locked: bool) -> Self {
        self.locked = Some(locked);
        self
    }
}

/// Query parameters for the entry collection.
#[derive(Debug, Clone, Serialize)]
pub(crate) struct TimeEntriesQuery {
    #[serde(with = "iso_date")]
    pub at: Date,
}

#[cfg(test)]
mod tests {
    use super::*;
    use time::Month;

    #[test]
    fn test_new_time_entry_skips_unset_fields() {
        let entry = NewTimeEntry::new()
            .date_at(Date::from_calendar_date(2024, Month::May, 2).unwrap())
            .minutes(45)
            .locked(false);
        let json = serde_json::to_value(&entry).unwrap();
        assert_eq!(
            json,
            serde_json::json!({"date_at": "2024-05-02", "minutes": 45, "locked": false})
        );

        let empty = serde_json::to_value(NewTimeEntry::new()).unwrap();
        assert_eq!(empty, serde_json::json!({}));
    }

    #[test]
    fn test_time_entry_without_project() {
        let json = r#"{
            "id": 11,
            "minutes": 15,
            "date_at": "2024-05-02",
            "note": "",
            "billable": true,
            "locked": false,
            "revenue": null,
            "hourly_rate": null,
            "user_id": 3,
            "user_name": "Ada",
            "project_id": null,
            "project_name": null,
            "customer_id": null,
            "customer_name": null,
            "service_id": null,
            "service_name": null,
            "created_at": "2024-05-02T09:00:00+02:00",
            "updated_at": "2024-05-02T09:15:00+02:00"
        }"#;
        let entry: TimeEntry = serde_json::from_str(json).unwrap();
        assert_eq!(entry.id, 11);
        assert!(entry.project_id.is_none());
        assert!(entry.revenue.is_none());
        assert_eq!(entry.hourly_rate, 0);
        assert_eq!(entry.user_name.as_deref(), Some("Ada"));
    }

    #[test]
    fn test_time_entry_revenue() {
        let json = r#"{
            "id": 12,
            "minutes": 60,
            "date_at": "2024-05-02",
            "note": "Planning",
            "revenue": 9000.0,
            "hourly_rate": 9000,
            "created_at": "2024-05-02T09:00:00Z",
            "updated_at": "2024-05-02T09:00:00Z"
        }"#;
        let entry: TimeEntry = serde_json::from_str(json).unwrap();
        assert_eq!(entry.revenue, Some(Decimal::new(9000, 0)));
        assert_eq!(entry.hourly_rate, 9000);
    }
}
