//! Time entry endpoints.

mod types;

pub use types::{NewTimeEntry, TimeEntry};

use reqwest::{Method, StatusCode};
use time::{Date, OffsetDateTime};

use crate::error::MiteError;
use crate::rest::MiteClient;
use crate::rest::endpoints::time_entries;
use crate::rest::envelope::{self, Resource};
use crate::rest::traits::MiteApi;
use types::TimeEntriesQuery;

impl MiteClient {
    /// Get all entries of the current day.
    pub async fn get_time_entries_for_today(&self) -> Result<Vec<TimeEntry>, MiteError> {
        self.get_list(time_entries::DAILY).await
    }

    /// Get all entries of a calendar day.
    ///
    /// The date is sent as `at=YYYY-MM-DD`.
    pub async fn get_time_entries_for_date(&self, date: Date) -> Result<Vec<TimeEntry>, MiteError> {
        self.get_list_with_params(time_entries::COLLECTION, &TimeEntriesQuery { at: date })
            .await
    }

    /// Get all entries of the UTC calendar day containing `instant`.
    pub async fn get_time_entries_for_instant(
        &self,
        instant: OffsetDateTime,
    ) -> Result<Vec<TimeEntry>, MiteError> {
        MiteApi::get_time_entries_for_instant(self, instant).await
    }

    /// Get the entry the running tracker points at.
    ///
    /// Returns `None` when no timer runs or the entry cannot be fetched.
    pub async fn get_tracking_time_entry(&self) -> Result<Option<TimeEntry>, MiteError> {
        MiteApi::get_tracking_time_entry(self).await
    }

    /// Get a single entry by ID.
    pub async fn get_time_entry(&self, id: u64) -> Result<Option<TimeEntry>, MiteError> {
        self.get_one(&time_entries::entry(id)).await
    }

    /// Create a time entry.
    ///
    /// Returns the created entry on `201 Created`, `None` otherwise.
    ///
    /// # Example
    ///
    /// ```rust,no_run
    /// use mite_api_client::rest::MiteClient;
    /// use mite_api_client::rest::time_entries::NewTimeEntry;
    ///
    /// #[tokio::main]
    /// async fn main() -> Result<(), Box<dyn std::error::Error>> {
    ///     let client = MiteClient::new("my-app/1.0", "acme", "api_key")?;
    ///     let entry = NewTimeEntry::new().minutes(30).note("Standup");
    ///     if let Some(created) = client.create_time_entry(&entry).await? {
    ///         println!("Created entry {}", created.id);
    ///     }
    ///     Ok(())
    /// }
    /// ```
    pub async fn create_time_entry(
        &self,
        entry: &NewTimeEntry,
    ) -> Result<Option<TimeEntry>, MiteError> {
        let body = envelope::wrap(TimeEntry::ENVELOPE_KEY, entry)?;
        self.send_one(
            Method::POST,
            time_entries::CREATE,
            Some(&body),
            StatusCode::CREATED,
        )
        .await
    }
}
