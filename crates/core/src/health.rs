//! Aggregated health report.
//!
//! The service is healthy only when every dependency check passes. Checks
//! run in a fixed order (database first, then the recommendation service)
//! and the first failure ends the evaluation, so a report names at most one
//! failing component.

use std::fmt;

use serde::Serialize;

/// Overall status discriminator exposed as `"ok"` / `"error"`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum HealthStatus {
    Ok,
    Error,
}

/// A dependency that takes part in the health check, in evaluation order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HealthComponent {
    Database,
    Recommendation,
}

impl HealthComponent {
    /// Prefix used in the human-readable failure detail.
    pub fn label(self) -> &'static str {
        match self {
            HealthComponent::Database => "Database error",
            HealthComponent::Recommendation => "Recommendation service error",
        }
    }
}

impl fmt::Display for HealthComponent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            HealthComponent::Database => f.write_str("database"),
            HealthComponent::Recommendation => f.write_str("recommendation"),
        }
    }
}

/// Result of one health evaluation.
///
/// Serializes as `{"status": "ok"}` or `{"status": "error", "detail": "..."}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct HealthReport {
    pub status: HealthStatus,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub detail: Option<String>,
    /// The component whose check failed. Not part of the wire format; the
    /// HTTP layer derives the status code from it.
    #[serde(skip)]
    pub failed: Option<HealthComponent>,
}

impl HealthReport {
    pub fn ok() -> Self {
        Self {
            status: HealthStatus::Ok,
            detail: None,
            failed: None,
        }
    }

    /// Report a failed check. `cause` is the underlying error description.
    pub fn failed(component: HealthComponent, cause: impl fmt::Display) -> Self {
        Self {
            status: HealthStatus::Error,
            detail: Some(format!("{}: {cause}", component.label())),
            failed: Some(component),
        }
    }

    pub fn is_ok(&self) -> bool {
        self.status == HealthStatus::Ok
    }
}
