//! Tracker (running timer) endpoints.

mod types;

pub use types::*;

use reqwest::{Method, StatusCode};

use crate::error::MiteError;
use crate::rest::MiteClient;
use crate::rest::endpoints::tracker;

impl MiteClient {
    /// Get the running tracker.
    ///
    /// Returns `None` when the response has no `tracker` key.
    pub async fn get_tracker(&self) -> Result<Option<Tracker>, MiteError> {
        self.get_one(tracker::CURRENT).await
    }

    /// Start tracking time on an existing entry.
    ///
    /// A timer running on another entry is stopped by mite and reported in
    /// [`Tracker::stopped_time_entry`].
    pub async fn start_tracker(&self, id: u64) -> Result<Option<Tracker>, MiteError> {
        self.send_one(Method::PATCH, &tracker::entry(id), None, StatusCode::OK)
            .await
    }

    /// Stop tracking time on an entry.
    pub async fn stop_tracker(&self, id: u64) -> Result<Option<Tracker>, MiteError> {
        self.send_one(Method::DELETE, &tracker::entry(id), None, StatusCode::OK)
            .await
    }
}
