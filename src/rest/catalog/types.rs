//! Types for project and service endpoints.

use serde::{Deserialize, Serialize};
use serde_with::{DefaultOnNull, serde_as};
use time::OffsetDateTime;

use crate::rest::envelope::Resource;
use crate::types::{ActiveHourlyRate, BudgetType};

/// A billable engagement.
#[serde_as]
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Project {
    /// Project ID.
    pub id: u64,
    /// Project name.
    pub name: String,
    /// Free-form note.
    #[serde_as(deserialize_as = "DefaultOnNull")]
    #[serde(default)]
    pub note: String,
    /// Customer, if assigned.
    #[serde(default)]
    pub customer_id: Option<u64>,
    /// Customer name, if assigned.
    #[serde(default)]
    pub customer_name: Option<String>,
    /// Budget in the unit given by `budget_type`, zero when unset.
    #[serde_as(deserialize_as = "DefaultOnNull")]
    #[serde(default)]
    pub budget: u64,
    /// Unit of `budget`.
    #[serde(default)]
    pub budget_type: Option<BudgetType>,
    /// Hourly rate in cents.
    #[serde(default)]
    pub hourly_rate: Option<u64>,
    /// Whether the project is archived.
    #[serde(default)]
    pub archived: bool,
    /// Which rate applies.
    #[serde(default)]
    pub active_hourly_rate: Option<ActiveHourlyRate>,
    /// Creation time.
    #[serde(default, with = "time::serde::rfc3339::option")]
    pub created_at: Option<OffsetDateTime>,
    /// Last update time.
    #[serde(default, with = "time::serde::rfc3339::option")]
    pub updated_at: Option<OffsetDateTime>,
}

impl Resource for Project {
    const ENVELOPE_KEY: &'static str = "project";
}

/// A billable activity type.
#[serde_as]
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Service {
    /// Service ID.
    pub id: u64,
    /// Service name.
    pub name: String,
    /// Free-form note.
    #[serde_as(deserialize_as = "DefaultOnNull")]
    #[serde(default)]
    pub note: String,
    /// Hourly rate in cents.
    #[serde(default)]
    pub hourly_rate: Option<u64>,
    /// Whether the service is archived.
    #[serde(default)]
    pub archived: bool,
    /// Whether time on this service is billable.
    #[serde(default)]
    pub billable: bool,
    /// Creation time.
    #[serde(default, with = "time::serde::rfc3339::option")]
    pub created_at: Option<OffsetDateTime>,
    /// Last update time.
    #[serde(default, with = "time::serde::rfc3339::option")]
    pub updated_at: Option<OffsetDateTime>,
}

impl Resource for Service {
    const ENVELOPE_KEY: &'static str = "service";
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_project_null_budget_defaults_to_zero() {
        let json = r#"{
            "id": 5,
            "name": "Internal",
            "note": null,
            "customer_id": null,
            "customer_name": null,
            "budget": null,
            "budget_type": null,
            "hourly_rate": null,
            "archived": false,
            "active_hourly_rate": null
        }"#;
        let project: Project = serde_json::from_str(json).unwrap();
        assert_eq!(project.budget, 0);
        assert!(project.budget_type.is_none());
        assert!(project.note.is_empty());
    }
}
