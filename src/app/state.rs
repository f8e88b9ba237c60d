//! Shared session state
//!
//! A small mutable bag of fields visible to many collaborators for the
//! lifetime of the session: the selected area of interest, the map mask
//! indicator, and the active page title. The application root owns it behind
//! an `Arc<RwLock<...>>`; controllers are handed the same handle instead of
//! reaching into a global.

use serde::{Deserialize, Serialize};

/// Session-wide shared state
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SessionState {
    /// The user's selected area of interest as GeoJSON geometry, if any
    pub area_of_interest: Option<serde_json::Value>,
    /// Human-readable label for the area of interest
    pub area_of_interest_name: Option<String>,
    /// Whether the mask overlay is applied to the map.
    /// Once set for the session this flag is never cleared by controllers.
    pub mask_layer_applied: bool,
    /// Title of the currently active page
    pub active_page_title: String,
}

impl SessionState {
    /// Create an empty session state (no area of interest selected)
    pub fn new() -> Self {
        Self::default()
    }

    /// Whether an area of interest has been selected
    pub fn has_area_of_interest(&self) -> bool {
        self.area_of_interest.is_some()
    }
}
