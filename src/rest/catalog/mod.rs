//! Project and service endpoints.

mod types;

pub use types::*;

use crate::error::MiteError;
use crate::rest::MiteClient;
use crate::rest::endpoints::catalog;

impl MiteClient {
    /// List the active projects visible to the user.
    pub async fn get_active_projects(&self) -> Result<Vec<Project>, MiteError> {
        self.get_list(catalog::PROJECTS).await
    }

    /// List the active services visible to the user.
    pub async fn get_active_services(&self) -> Result<Vec<Service>, MiteError> {
        self.get_list(catalog::SERVICES).await
    }
}
