//! Account and user endpoints.

mod types;

pub use types::*;

use crate::error::MiteError;
use crate::rest::MiteClient;
use crate::rest::endpoints::account;
use crate::rest::traits::MiteApi;

impl MiteClient {
    /// Check whether the credentials are accepted by sending a test request.
    ///
    /// Returns `true` iff [`get_myself`](Self::get_myself) yields a user.
    pub async fn is_authorized(&self) -> Result<bool, MiteError> {
        MiteApi::is_authorized(self).await
    }

    /// Get the authenticated user.
    ///
    /// Returns `None` on any non-200 response, including bad credentials.
    pub async fn get_myself(&self) -> Result<Option<User>, MiteError> {
        self.get_one(account::MYSELF).await
    }

    /// Get the account of the authenticated user.
    pub async fn get_account(&self) -> Result<Option<Account>, MiteError> {
        self.get_one(account::ACCOUNT).await
    }

    /// List all users of the account.
    ///
    /// Requires admin privileges; other roles get an empty list.
    pub async fn get_users(&self) -> Result<Vec<User>, MiteError> {
        self.get_list(account::USERS).await
    }
}
