//! Response payloads
//!
//! Named record types for the JSON endpoints so the wire contract stays fixed.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Text returned by `GET /`
pub const SYSTEM_NAME: &str = "Vision+ Medical Imaging System";

/// Text returned by `GET /api/health`
pub const HEALTH_MESSAGE: &str = "System is healthy";

/// Published API version
pub const API_VERSION: &str = "1.0.0";

/// Developer credited by `GET /api/version`
pub const DEVELOPER: &str = "Dr. Tariq Alagha";

/// Status reported by `GET /api/status`
pub const STATUS_ONLINE: &str = "Online";

/// Version information returned by `GET /api/version`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct VersionInfo {
    /// API version
    #[schema(example = "1.0.0")]
    pub version: String,
    /// Developer of the system
    #[schema(example = "Dr. Tariq Alagha")]
    pub developer: String,
}

impl VersionInfo {
    /// The version information of this build
    pub fn current() -> Self {
        Self {
            version: API_VERSION.to_string(),
            developer: DEVELOPER.to_string(),
        }
    }
}

/// Service status returned by `GET /api/status`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct StatusInfo {
    /// Always "Online" while the service answers
    #[schema(example = "Online")]
    pub status: String,
    /// UTC instant the response was built
    pub timestamp: DateTime<Utc>,
}

impl StatusInfo {
    /// Status stamped with the current UTC time
    pub fn online() -> Self {
        Self::online_at(Utc::now())
    }

    /// Status stamped with the given instant
    pub fn online_at(timestamp: DateTime<Utc>) -> Self {
        Self {
            status: STATUS_ONLINE.to_string(),
            timestamp,
        }
    }
}
