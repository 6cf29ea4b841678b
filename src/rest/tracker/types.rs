//! Types for tracker endpoints.

use serde::{Deserialize, Serialize};
use time::OffsetDateTime;

use crate::rest::envelope::Resource;

/// The account's running timer, if any.
///
/// At most one time entry is tracked at a time. Start and stop responses
/// also report the entry that was stopped.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Tracker {
    /// The entry currently being tracked.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tracking_time_entry: Option<TrackingTimeEntry>,
    /// The entry that was stopped by this request.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub stopped_time_entry: Option<StoppedTimeEntry>,
}

impl Tracker {
    /// Whether a timer is running.
    pub fn is_running(&self) -> bool {
        self.tracking_time_entry.is_some()
    }
}

impl Resource for Tracker {
    const ENVELOPE_KEY: &'static str = "tracker";
}

/// Reference to the time entry being tracked.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TrackingTimeEntry {
    /// Time entry ID.
    pub id: u64,
    /// Minutes tracked so far, including time logged before the timer started.
    pub minutes: u32,
    /// When the timer was started.
    #[serde(with = "time::serde::rfc3339")]
    pub since: OffsetDateTime,
}

/// Reference to a time entry whose timer was stopped.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StoppedTimeEntry {
    /// Time entry ID.
    pub id: u64,
    /// Total minutes of the entry.
    pub minutes: u32,
}
