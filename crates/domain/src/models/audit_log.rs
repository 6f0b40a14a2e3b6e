//! Audit log domain models.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use uuid::Uuid;

use crate::error::DomainError;

/// Category of an audit log entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum AuditCategory {
    UserAction,
    ServerConnection,
    System,
    Security,
}

impl AuditCategory {
    pub const ALL: [AuditCategory; 4] = [
        AuditCategory::UserAction,
        AuditCategory::ServerConnection,
        AuditCategory::System,
        AuditCategory::Security,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            AuditCategory::UserAction => "USER_ACTION",
            AuditCategory::ServerConnection => "SERVER_CONNECTION",
            AuditCategory::System => "SYSTEM",
            AuditCategory::Security => "SECURITY",
        }
    }
}

impl FromStr for AuditCategory {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_uppercase().as_str() {
            "USER_ACTION" => Ok(AuditCategory::UserAction),
            "SERVER_CONNECTION" => Ok(AuditCategory::ServerConnection),
            "SYSTEM" => Ok(AuditCategory::System),
            "SECURITY" => Ok(AuditCategory::Security),
            _ => Err(DomainError::unknown("audit category", s)),
        }
    }
}

impl fmt::Display for AuditCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A synthesized audit log entry.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AuditLogEntry {
    pub id: Uuid,
    pub timestamp: DateTime<Utc>,
    pub category: AuditCategory,
    pub action: String,
    pub user: Option<String>,
    pub details: String,
    pub ip_address: String,
}
