//! # mite Client
//!
//! An async Rust client library for the mite time-tracking REST API.
//!
//! ## Features
//!
//! - Typed access to users, account, tracker, time entries, projects and services
//! - Authentication via the `X-MiteAccount` / `X-MiteApiKey` headers
//! - Envelope unwrapping (`{"time_entry": {...}}` becomes a [`rest::time_entries::TimeEntry`])
//! - Unsuccessful responses reported as empty results, transport failures as errors
//! - A [`rest::MiteApi`] trait for mocking
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use mite_api_client::rest::MiteClient;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let client = MiteClient::new("my-app/1.0", "acme", "api_key")?;
//!     if let Some(tracker) = client.get_tracker().await? {
//!         println!("Timer running: {}", tracker.is_running());
//!     }
//!     Ok(())
//! }
//! ```

pub mod auth;
pub mod error;
pub mod rest;
pub mod types;

// Re-export commonly used types at crate root
pub use error::MiteError;
pub use rest::{MiteApi, MiteClient};
pub use types::common::{BudgetType, UserRole};

/// Result type alias using MiteError
pub type Result<T> = std::result::Result<T, MiteError>;
