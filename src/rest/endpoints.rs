//! mite REST API endpoint constants.
//!
//! Paths are relative to the base URL and joined onto it by the client.

/// Base URL for the mite REST API gateway.
pub const MITE_BASE_URL: &str = "https://corsapi.mite.yo.lk/";

/// Account and user endpoints.
pub mod account {
    /// The authenticated user.
    pub const MYSELF: &str = "myself.json";
    /// The account the user belongs to.
    pub const ACCOUNT: &str = "account.json";
    /// All users of the account (admin only).
    pub const USERS: &str = "users.json";
}

/// Tracker endpoints.
pub mod tracker {
    /// The currently running tracker.
    pub const CURRENT: &str = "tracker.json";

    /// Start (PATCH) or stop (DELETE) tracking a time entry.
    pub fn entry(id: u64) -> String {
        format!("tracker/{id}.json")
    }
}

/// Time entry endpoints.
pub mod time_entries {
    /// Entries of the current day.
    pub const DAILY: &str = "daily.json";
    /// Entry collection, filtered by query parameters.
    pub const COLLECTION: &str = "time_entries/";
    /// Create a new entry.
    pub const CREATE: &str = "time_entries.json";

    /// A single entry by ID.
    pub fn entry(id: u64) -> String {
        format!("time_entries/{id}.json")
    }
}

/// Project and service endpoints.
pub mod catalog {
    /// Active projects.
    pub const PROJECTS: &str = "projects.json";
    /// Active services.
    pub const SERVICES: &str = "services.json";
}
