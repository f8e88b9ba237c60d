//! Analyze entry-transition controller
//!
//! Decides whether the user may enter the Analyze page, performs the
//! mode-dependent project side effects before the view loads, and mounts
//! and unmounts the results view in the sidebar region.

use std::sync::Arc;

use log::{debug, error, info};

use crate::analyze::views::ResultsView;
use crate::analyze::ANALYZE_PAGE_TITLE;
use crate::app::project::ProjectStore;
use crate::app::AppRoot;
use crate::core::itsi::EmbedHost;
use crate::core::navigation::{Navigator, HOME_ROUTE};
use crate::core::settings::Settings;

/// Controller for the Analyze page transitions
pub struct AnalyzeController {
    app: Arc<AppRoot>,
    settings: Arc<Settings>,
    store: Arc<dyn ProjectStore>,
    navigator: Arc<dyn Navigator>,
    itsi: Arc<dyn EmbedHost>,
}

impl AnalyzeController {
    /// Create a controller bound to the application root and its seams
    pub fn new(
        app: Arc<AppRoot>,
        settings: Arc<Settings>,
        store: Arc<dyn ProjectStore>,
        navigator: Arc<dyn Navigator>,
        itsi: Arc<dyn EmbedHost>,
    ) -> Self {
        Self {
            app,
            settings,
            store,
            navigator,
            itsi,
        }
    }

    /// Guard the Analyze route. Returns `false` when entry must be aborted,
    /// in which case the user has already been redirected home.
    pub async fn prepare_entry(&self) -> bool {
        if !self.app.state.read().await.has_area_of_interest() {
            self.navigator.navigate(HOME_ROUTE, true);
            return false;
        }

        // The mask layer should always be applied to the map when entering
        // analyze mode
        if !self.app.state.read().await.mask_layer_applied {
            self.app.state.write().await.mask_layer_applied = true;
            debug!("Applied mask layer to the map");
        }

        if self.settings.activity_mode {
            // Only one project allowed in Activity Mode. Save the current
            // project and, in embedded mode, report the new location to the
            // container.
            self.sync_activity_project().await;
        } else {
            // Multiple projects allowed in Regular Mode. Nullify the current
            // project since a new one will be created and saved by the
            // modelling flow.
            *self.app.current_project.write().await = None;
            debug!("Cleared current project for Regular Mode entry");
        }

        true
    }

    /// Activity Mode branch of the entry transition: stamp the session's
    /// area of interest onto a fresh project and persist it.
    ///
    /// Projects that already have scenario work are left untouched so the
    /// save never clobbers them. The save runs on a spawned task; entry does
    /// not wait for it.
    async fn sync_activity_project(&self) {
        let mut slot = self.app.current_project.write().await;
        let project = match slot.as_mut() {
            Some(project) if !project.has_scenarios() => project,
            _ => return,
        };

        {
            let state = self.app.state.read().await;
            project.set_area_of_interest(
                state.area_of_interest.clone(),
                state.area_of_interest_name.clone(),
            );
        }
        let snapshot = project.clone();
        drop(slot);

        let store = Arc::clone(&self.store);
        let itsi = Arc::clone(&self.itsi);
        let project_slot = Arc::clone(&self.app.current_project);
        let itsi_embed = self.settings.itsi_embed;

        tokio::spawn(async move {
            match store.save(&snapshot).await {
                Ok(id) => {
                    if let Some(project) = project_slot.write().await.as_mut() {
                        project.id = Some(id.clone());
                    }
                    if itsi_embed {
                        itsi.set_learner_url(&format!("project/{}/draw", id));
                    }
                }
                Err(e) => {
                    error!("Failed to save project: {}", e);
                }
            }
        });
    }

    /// Enter the Analyze page: bind the results view to the current analyze
    /// collection and mount it in the sidebar region.
    pub async fn enter_analyze(&self) {
        let collection = self.app.analyze_collection().await;
        let results = ResultsView::new(collection);

        self.app.state.write().await.active_page_title = ANALYZE_PAGE_TITLE.to_string();

        self.app
            .root_view
            .write()
            .await
            .sidebar_region
            .show(Box::new(results));
        info!("Entered Analyze page");
    }

    /// Leave the Analyze page, releasing the mounted results view.
    /// Safe to call when nothing is mounted.
    pub async fn exit_analyze(&self) {
        self.app.root_view.write().await.sidebar_region.empty();
        info!("Left Analyze page");
    }
}
