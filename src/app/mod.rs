//! Application root
//!
//! Owns the session-scoped shared objects: the session state bag, the
//! nullable current-project slot, the root view with its regions, and the
//! analyze collection for the current area of interest. Controllers receive
//! these handles at construction instead of reaching into globals.

pub mod project;
pub mod state;

use std::sync::Arc;

use tokio::sync::RwLock;

use crate::analyze::collection::AnalyzeCollection;
use crate::app::project::Project;
use crate::app::state::SessionState;
use crate::ui::RootView;

/// Session-scoped application root shared by all controllers
pub struct AppRoot {
    /// Shared session state (area of interest, mask flag, page title)
    pub state: Arc<RwLock<SessionState>>,
    /// The current project, or `None` when no project is active.
    /// Controllers may replace or clear this slot but never alias it.
    pub current_project: Arc<RwLock<Option<Project>>>,
    /// Root view holding the shared UI regions
    pub root_view: Arc<RwLock<RootView>>,
    /// Analyze results for the current area of interest, set by the
    /// geoprocessing flow once surveys complete
    analyze_collection: Arc<RwLock<Option<AnalyzeCollection>>>,
}

impl AppRoot {
    /// Create a fresh application root with empty session state
    pub fn new() -> Self {
        Self {
            state: Arc::new(RwLock::new(SessionState::new())),
            current_project: Arc::new(RwLock::new(None)),
            root_view: Arc::new(RwLock::new(RootView::new())),
            analyze_collection: Arc::new(RwLock::new(None)),
        }
    }

    /// Replace the analyze collection for the current area of interest
    pub async fn set_analyze_collection(&self, collection: AnalyzeCollection) {
        *self.analyze_collection.write().await = Some(collection);
    }

    /// The analyze collection for the current area of interest.
    /// Empty when no survey has completed yet.
    pub async fn analyze_collection(&self) -> AnalyzeCollection {
        self.analyze_collection
            .read()
            .await
            .clone()
            .unwrap_or_default()
    }
}

impl Default for AppRoot {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analyze::collection::AnalysisResult;
    use serde_json::json;

    #[tokio::test]
    async fn test_new_root_is_empty() {
        let app = AppRoot::new();
        assert!(app.current_project.read().await.is_none());
        assert!(app.analyze_collection().await.is_empty());
        assert!(!app.root_view.read().await.sidebar_region.is_occupied());
    }

    #[tokio::test]
    async fn test_analyze_collection_roundtrip() {
        let app = AppRoot::new();
        let mut collection = AnalyzeCollection::new();
        collection.push(AnalysisResult::new("land", "Land Use", json!([])));
        app.set_analyze_collection(collection).await;

        assert_eq!(app.analyze_collection().await.len(), 1);
    }
}
