//! Authentication module for the mite API.
//!
//! mite authenticates every request with two static headers: the account
//! name and the user's API key. This module provides credential storage
//! (with the key kept in a secret wrapper) and the header names.

mod credentials;

use reqwest::header::HeaderName;

pub use credentials::{Credentials, CredentialsProvider, EnvCredentials, StaticCredentials};

/// `X-MiteAccount`: the mite account name.
pub const ACCOUNT_HEADER: HeaderName = HeaderName::from_static("x-miteaccount");

/// `X-MiteApiKey`: the user's API key.
pub const API_KEY_HEADER: HeaderName = HeaderName::from_static("x-miteapikey");
