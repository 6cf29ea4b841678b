//! mite REST API client.
//!
//! Endpoints are grouped by resource: [`account`], [`tracker`],
//! [`time_entries`] and [`catalog`] (projects and services). Each group adds
//! its methods to [`MiteClient`] and defines its entity types.
//!
//! # Trait-based API
//!
//! The [`MiteApi`] trait abstracts all operations, enabling mock
//! implementations for testing code that talks to mite.

pub mod account;
pub mod catalog;
mod client;
mod endpoints;
pub mod envelope;
pub mod time_entries;
pub mod tracker;
mod traits;

pub use client::{MiteClient, MiteClientBuilder};
pub use endpoints::MITE_BASE_URL;
pub use envelope::Resource;
pub use traits::MiteApi;
