use log::{info, warn};
use std::sync::Arc;

mod analyze;
mod app;
mod core;
mod ui;

use crate::analyze::collection::{AnalysisResult, AnalyzeCollection};
use crate::analyze::controller::AnalyzeController;
use crate::app::project::{InMemoryProjectStore, Project};
use crate::app::AppRoot;
use crate::core::itsi::LoggingEmbedHost;
use crate::core::navigation::LoggingNavigator;
use crate::core::settings::Settings;
use serde_json::json;

#[tokio::main]
async fn main() {
    // Initialize logging
    env_logger::init_from_env(env_logger::Env::default().default_filter_or("info"));
    info!("Starting watershed client (Analyze demo)...");

    let settings = Arc::new(Settings {
        activity_mode: true,
        itsi_embed: true,
    });

    let app = Arc::new(AppRoot::new());
    {
        let mut state = app.state.write().await;
        state.area_of_interest = Some(json!({
            "type": "MultiPolygon",
            "coordinates": [[[[-75.2, 39.9], [-75.1, 39.9], [-75.1, 40.0], [-75.2, 39.9]]]],
        }));
        state.area_of_interest_name = Some("Schuylkill River Watershed".to_string());
    }
    *app.current_project.write().await = Some(Project::new("Untitled Project"));

    // Surveys normally arrive from the geoprocessing flow once the area of
    // interest is selected
    let mut collection = AnalyzeCollection::new();
    collection.push(AnalysisResult::new("land", "Land Use", json!([])));
    collection.push(AnalysisResult::new("soil", "Soil Groups", json!([])));
    collection.push(AnalysisResult::new("animals", "Animals", json!([])));
    collection.push(AnalysisResult::new("pointsource", "Point Sources", json!([])));
    collection.push(AnalysisResult::new(
        "catchment_water_quality",
        "Water Quality",
        json!([]),
    ));
    app.set_analyze_collection(collection).await;

    let controller = AnalyzeController::new(
        Arc::clone(&app),
        settings,
        Arc::new(InMemoryProjectStore::new()),
        Arc::new(LoggingNavigator),
        Arc::new(LoggingEmbedHost),
    );

    if !controller.prepare_entry().await {
        warn!("Analyze entry aborted: no area of interest selected");
        return;
    }

    controller.enter_analyze().await;
    {
        let root = app.root_view.read().await;
        if let Some(view) = root.sidebar_region.current() {
            info!("Sidebar shows: {}", view.render());
        }
    }

    // Give the deferred project save a moment to complete before exiting
    tokio::time::sleep(std::time::Duration::from_millis(50)).await;

    controller.exit_analyze().await;
    info!("Watershed client demo complete");
}
