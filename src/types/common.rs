//! Common domain types for the mite API.

use serde::{Deserialize, Serialize};

/// Role of a user within a mite account.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum UserRole {
    /// Account owner
    Owner,
    /// Administrator
    Admin,
    /// Regular co-worker, sees all entries
    Coworker,
    /// Time tracker, sees only own entries
    TimeTracker,
    /// Role not known to this library
    #[serde(other)]
    Unknown,
}

impl UserRole {
    /// Whether this role may list all users of the account.
    pub fn is_admin(&self) -> bool {
        matches!(self, UserRole::Owner | UserRole::Admin)
    }
}

impl std::fmt::Display for UserRole {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            UserRole::Owner => "owner",
            UserRole::Admin => "admin",
            UserRole::Coworker => "coworker",
            UserRole::TimeTracker => "time_tracker",
            UserRole::Unknown => "unknown",
        };
        write!(f, "{}", s)
    }
}

/// Unit in which a project budget is expressed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BudgetType {
    /// Total budget in minutes
    Minutes,
    /// Monthly budget in minutes
    MinutesPerMonth,
    /// Total budget in cents
    Cents,
    /// Monthly budget in cents
    CentsPerMonth,
    /// Budget type not known to this library
    #[serde(other)]
    Unknown,
}

impl BudgetType {
    /// Whether the budget is measured in time rather than money.
    pub fn is_time_based(&self) -> bool {
        matches!(self, BudgetType::Minutes | BudgetType::MinutesPerMonth)
    }

    /// Whether the budget resets every month.
    pub fn is_monthly(&self) -> bool {
        matches!(self, BudgetType::MinutesPerMonth | BudgetType::CentsPerMonth)
    }
}

impl std::fmt::Display for BudgetType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            BudgetType::Minutes => "minutes",
            BudgetType::MinutesPerMonth => "minutes_per_month",
            BudgetType::Cents => "cents",
            BudgetType::CentsPerMonth => "cents_per_month",
            BudgetType::Unknown => "unknown",
        };
        write!(f, "{}", s)
    }
}

/// Which hourly rate is in effect for a project.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ActiveHourlyRate {
    /// A single rate for the whole project
    HourlyRate,
    /// Individual rates per service
    HourlyRatesPerService,
    /// Rate not known to this library
    #[serde(other)]
    Unknown,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_user_role_deserialize() {
        let role: UserRole = serde_json::from_str(r#""time_tracker""#).unwrap();
        assert_eq!(role, UserRole::TimeTracker);
        assert_eq!(role.to_string(), "time_tracker");
        assert!(!role.is_admin());
    }

    #[test]
    fn test_unknown_role_tolerated() {
        let role: UserRole = serde_json::from_str(r#""superhero""#).unwrap();
        assert_eq!(role, UserRole::Unknown);
    }

    #[test]
    fn test_budget_type() {
        let budget: BudgetType = serde_json::from_str(r#""minutes_per_month""#).unwrap();
        assert!(budget.is_time_based());
        assert!(budget.is_monthly());
        assert_eq!(budget.to_string(), "minutes_per_month");

        let cents: BudgetType = serde_json::from_str(r#""cents""#).unwrap();
        assert!(!cents.is_time_based());
    }
}
