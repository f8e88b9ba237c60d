//! Analyze results view
//!
//! Ephemeral view over the analyze collection, created when the user enters
//! the Analyze page and released when the sidebar region is emptied.

use crate::analyze::collection::AnalyzeCollection;
use crate::ui::View;

/// Sidebar view listing one tab per analysis category
pub struct ResultsView {
    collection: AnalyzeCollection,
}

impl ResultsView {
    /// Build a results view bound to the given collection
    pub fn new(collection: AnalyzeCollection) -> Self {
        Self { collection }
    }

    /// The collection this view is bound to
    pub fn collection(&self) -> &AnalyzeCollection {
        &self.collection
    }
}

impl View for ResultsView {
    fn name(&self) -> &str {
        "analyze-results"
    }

    fn render(&self) -> String {
        if self.collection.is_empty() {
            return "Analyze: no results".to_string();
        }
        let tabs: Vec<&str> = self
            .collection
            .results
            .iter()
            .map(|result| result.display_name.as_str())
            .collect();
        format!("Analyze: {}", tabs.join(" | "))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analyze::collection::AnalysisResult;
    use serde_json::json;

    #[test]
    fn test_render_lists_each_category() {
        let mut collection = AnalyzeCollection::new();
        collection.push(AnalysisResult::new("land", "Land Use", json!([])));
        collection.push(AnalysisResult::new("soil", "Soil Groups", json!([])));

        let view = ResultsView::new(collection);
        let rendered = view.render();
        assert!(rendered.contains("Land Use"));
        assert!(rendered.contains("Soil Groups"));
    }

    #[test]
    fn test_render_empty_collection() {
        let view = ResultsView::new(AnalyzeCollection::new());
        assert_eq!(view.render(), "Analyze: no results");
    }
}
