//! Read-only application settings snapshot
//!
//! Settings are resolved once at startup (from embedded defaults or a JSON
//! document provided by the host page) and never change for the lifetime of
//! the session. Collaborators receive the snapshot behind an `Arc` and only
//! ever read from it.

use serde::{Deserialize, Serialize};

use crate::core::error::AppError;

/// Process-wide configuration snapshot
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Settings {
    /// Restrict the session to exactly one project ("Activity Mode")
    #[serde(default)]
    pub activity_mode: bool,
    /// Whether the client runs embedded in an external ITSI host
    #[serde(default)]
    pub itsi_embed: bool,
}

impl Settings {
    /// Parse a settings snapshot from a JSON document.
    ///
    /// Unknown keys are ignored and missing flags default to `false`, so a
    /// partial document from the host page is acceptable.
    pub fn from_json(raw: &str) -> Result<Self, AppError> {
        serde_json::from_str(raw)
            .map_err(|e| AppError::ConfigError(format!("invalid settings JSON: {}", e)))
    }
}
