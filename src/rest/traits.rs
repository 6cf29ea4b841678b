//! Trait definition for the mite REST API client.
//!
//! [`MiteApi`] abstracts the operation surface so that code built on the
//! client can be tested against a mock implementation. The composed
//! operations ([`is_authorized`](MiteApi::is_authorized),
//! [`get_tracking_time_entry`](MiteApi::get_tracking_time_entry)) are
//! provided methods built on the primitive ones.
//!
//! # Example
//!
//! ```rust,ignore
//! use mite_api_client::rest::{MiteApi, MiteClient};
//!
//! async fn minutes_today<C: MiteApi>(client: &C) -> Result<u32, mite_api_client::MiteError> {
//!     let entries = client.get_time_entries_for_today().await?;
//!     Ok(entries.iter().map(|e| e.minutes).sum())
//! }
//! ```

use std::future::Future;

use time::{Date, OffsetDateTime, UtcOffset};

use crate::error::MiteError;
use crate::rest::MiteClient;
use crate::rest::account::{Account, User};
use crate::rest::catalog::{Project, Service};
use crate::rest::time_entries::{NewTimeEntry, TimeEntry};
use crate::rest::tracker::Tracker;

/// Trait defining all mite REST API operations.
///
/// Single-entity operations return `Ok(None)` and list operations return an
/// empty `Vec` when the remote call did not succeed; `Err` is reserved for
/// transport failures.
pub trait MiteApi: Send + Sync {
    /// Get the authenticated user.
    fn get_myself(&self) -> impl Future<Output = Result<Option<User>, MiteError>> + Send;

    /// Get the account of the authenticated user.
    fn get_account(&self) -> impl Future<Output = Result<Option<Account>, MiteError>> + Send;

    /// List all users of the account.
    fn get_users(&self) -> impl Future<Output = Result<Vec<User>, MiteError>> + Send;

    /// Get the running tracker.
    fn get_tracker(&self) -> impl Future<Output = Result<Option<Tracker>, MiteError>> + Send;

    /// Start tracking time on an entry.
    fn start_tracker(
        &self,
        id: u64,
    ) -> impl Future<Output = Result<Option<Tracker>, MiteError>> + Send;

    /// Stop tracking time on an entry.
    fn stop_tracker(
        &self,
        id: u64,
    ) -> impl Future<Output = Result<Option<Tracker>, MiteError>> + Send;

    /// Get all entries of the current day.
    fn get_time_entries_for_today(
        &self,
    ) -> impl Future<Output = Result<Vec<TimeEntry>, MiteError>> + Send;

    /// Get all entries of a calendar day.
    fn get_time_entries_for_date(
        &self,
        date: Date,
    ) -> impl Future<Output = Result<Vec<TimeEntry>, MiteError>> + Send;

    /// Get a single entry by ID.
    fn get_time_entry(
        &self,
        id: u64,
    ) -> impl Future<Output = Result<Option<TimeEntry>, MiteError>> + Send;

    /// Create a time entry.
    fn create_time_entry(
        &self,
        entry: &NewTimeEntry,
    ) -> impl Future<Output = Result<Option<TimeEntry>, MiteError>> + Send;

    /// List active projects.
    fn get_active_projects(&self) -> impl Future<Output = Result<Vec<Project>, MiteError>> + Send;

    /// List active services.
    fn get_active_services(&self) -> impl Future<Output = Result<Vec<Service>, MiteError>> + Send;

    /// Whether the credentials are accepted: `true` iff `get_myself` yields a user.
    fn is_authorized(&self) -> impl Future<Output = Result<bool, MiteError>> + Send {
        async move { Ok(self.get_myself().await?.is_some()) }
    }

    /// Get the entry the running tracker points at.
    ///
    /// `None` if there is no tracker, it tracks nothing, or the entry lookup
    /// comes back empty.
    fn get_tracking_time_entry(
        &self,
    ) -> impl Future<Output = Result<Option<TimeEntry>, MiteError>> + Send {
        async move {
            let Some(tracking) = self
                .get_tracker()
                .await?
                .and_then(|tracker| tracker.tracking_time_entry)
            else {
                return Ok(None);
            };
            self.get_time_entry(tracking.id).await
        }
    }

    /// Get all entries of the UTC calendar day containing `instant`.
    fn get_time_entries_for_instant(
        &self,
        instant: OffsetDateTime,
    ) -> impl Future<Output = Result<Vec<TimeEntry>, MiteError>> + Send {
        self.get_time_entries_for_date(instant.to_offset(UtcOffset::UTC).date())
    }
}

impl MiteApi for MiteClient {
    async fn get_myself(&self) -> Result<Option<User>, MiteError> {
        MiteClient::get_myself(self).await
    }

    async fn get_account(&self) -> Result<Option<Account>, MiteError> {
        MiteClient::get_account(self).await
    }

    async fn get_users(&self) -> Result<Vec<User>, MiteError> {
        MiteClient::get_users(self).await
    }

    async fn get_tracker(&self) -> Result<Option<Tracker>, MiteError> {
        MiteClient::get_tracker(self).await
    }

    async fn start_tracker(&self, id: u64) -> Result<Option<Tracker>, MiteError> {
        MiteClient::start_tracker(self, id).await
    }

    async fn stop_tracker(&self, id: u64) -> Result<Option<Tracker>, MiteError> {
        MiteClient::stop_tracker(self, id).await
    }

    async fn get_time_entries_for_today(&self) -> Result<Vec<TimeEntry>, MiteError> {
        MiteClient::get_time_entries_for_today(self).await
    }

    async fn get_time_entries_for_date(&self, date: Date) -> Result<Vec<TimeEntry>, MiteError> {
        MiteClient::get_time_entries_for_date(self, date).await
    }

    async fn get_time_entry(&self, id: u64) -> Result<Option<TimeEntry>, MiteError> {
        MiteClient::get_time_entry(self, id).await
    }

    async fn create_time_entry(
        &self,
        entry: &NewTimeEntry,
    ) -> Result<Option<TimeEntry>, MiteError> {
        MiteClient::create_time_entry(self, entry).await
    }

    async fn get_active_projects(&self) -> Result<Vec<Project>, MiteError> {
        MiteClient::get_active_projects(self).await
    }

    async fn get_active_services(&self) -> Result<Vec<Service>, MiteError> {
        MiteClient::get_active_services(self).await
    }
}
