//! Connection descriptor models.
//!
//! A descriptor is supplied per-request and describes how to reach an
//! external database. Nothing here is persisted.

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Database type enumeration.
///
/// Unknown literals deserialize to [`DbType::Unsupported`] so a probe can
/// report a deterministic failure instead of rejecting the request.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum DbType {
    /// PostgreSQL database.
    Postgresql,
    /// MySQL database.
    Mysql,
    /// MongoDB database.
    Mongodb,
    /// Any other (or missing) type literal.
    #[default]
    #[serde(other)]
    Unsupported,
}

impl DbType {
    /// Returns the default port for this database type.
    pub fn default_port(&self) -> Option<u16> {
        match self {
            DbType::Postgresql => Some(5432),
            DbType::Mysql => Some(3306),
            DbType::Mongodb => Some(27017),
            DbType::Unsupported => None,
        }
    }

    /// Returns the vendor display name used in probe messages.
    pub fn display_name(&self) -> &'static str {
        match self {
            DbType::Postgresql => "PostgreSQL",
            DbType::Mysql => "MySQL",
            DbType::Mongodb => "MongoDB",
            DbType::Unsupported => "Unsupported",
        }
    }
}

impl std::fmt::Display for DbType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            DbType::Postgresql => write!(f, "postgresql"),
            DbType::Mysql => write!(f, "mysql"),
            DbType::Mongodb => write!(f, "mongodb"),
            DbType::Unsupported => write!(f, "unsupported"),
        }
    }
}

/// Client-supplied description of an external database.
///
/// Every field is optional on the wire; the prober fills in per-engine
/// defaults. The password is accepted on input but never serialized back.
#[derive(Debug, Clone, Default, Serialize, Deserialize, ToSchema)]
pub struct ConnectionDescriptor {
    /// Descriptor identifier (only meaningful for the mock catalog).
    #[serde(default)]
    pub id: String,
    /// Display name.
    #[serde(default)]
    pub name: String,
    /// Database type.
    #[serde(rename = "type", default)]
    pub db_type: DbType,
    /// Database host.
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub host: Option<String>,
    /// Database port (uses the engine default if not specified).
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub port: Option<u16>,
    /// Database name.
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub database: Option<String>,
    /// Username.
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub username: Option<String>,
    /// Password (write-only, never serialized in responses).
    #[serde(skip_serializing, default)]
    pub password: Option<String>,
}

/// Response body of the connection test endpoint.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct TestConnectionResponse {
    /// Whether the probe reached the database.
    pub success: bool,
    /// Human-readable outcome message.
    pub message: String,
    /// Wall-clock duration of the attempt, formatted in seconds (e.g. "0.42s").
    pub time: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_db_type_wire_names() {
        assert_eq!(
            serde_json::from_str::<DbType>("\"postgresql\"").unwrap(),
            DbType::Postgresql
        );
        assert_eq!(
            serde_json::from_str::<DbType>("\"mysql\"").unwrap(),
            DbType::Mysql
        );
        assert_eq!(
            serde_json::from_str::<DbType>("\"mongodb\"").unwrap(),
            DbType::Mongodb
        );
    }

    #[test]
    fn test_unknown_db_type_maps_to_unsupported() {
        assert_eq!(
            serde_json::from_str::<DbType>("\"oracle\"").unwrap(),
            DbType::Unsupported
        );
    }

    #[test]
    fn test_partial_descriptor_parses() {
        let descriptor: ConnectionDescriptor =
            serde_json::from_str(r#"{"type": "mysql", "host": "db.internal"}"#).unwrap();
        assert_eq!(descriptor.db_type, DbType::Mysql);
        assert_eq!(descriptor.host.as_deref(), Some("db.internal"));
        assert_eq!(descriptor.port, None);
        assert_eq!(descriptor.db_type.default_port(), Some(3306));
    }

    #[test]
    fn test_missing_type_defaults_to_unsupported() {
        let descriptor: ConnectionDescriptor = serde_json::from_str("{}").unwrap();
        assert_eq!(descriptor.db_type, DbType::Unsupported);
    }

    #[test]
    fn test_password_is_write_only() {
        let descriptor: ConnectionDescriptor = serde_json::from_str(
            r#"{"type": "postgresql", "username": "app", "password": "hunter2"}"#,
        )
        .unwrap();
        assert_eq!(descriptor.password.as_deref(), Some("hunter2"));

        let json = serde_json::to_value(&descriptor).unwrap();
        assert!(json.get("password").is_none());
    }
}
