//! Common types used across the mite client library.

pub mod common;
pub mod serde_helpers;

pub use common::*;
