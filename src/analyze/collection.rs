//! Analyze results collection
//!
//! The geoprocessing backend reduces the area of interest to a set of
//! surveys, one per analysis category (land cover, soil groups, animal
//! density, point-source discharge, catchment water quality). The collection
//! is assembled elsewhere and handed to this app through the application
//! root; the results view only reads it.

use serde::{Deserialize, Serialize};

/// One analysis category's survey over the area of interest
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AnalysisResult {
    /// Category key, e.g. "land" or "soil"
    pub name: String,
    /// Human-readable category label, e.g. "Land Use"
    pub display_name: String,
    /// Category breakdown as produced by the geoprocessing survey,
    /// typically a list of {type, area, coverage} entries
    pub survey: serde_json::Value,
}

impl AnalysisResult {
    /// Create a result for one category
    pub fn new(name: &str, display_name: &str, survey: serde_json::Value) -> Self {
        Self {
            name: name.to_string(),
            display_name: display_name.to_string(),
            survey,
        }
    }
}

/// Ordered collection of analysis results for the current area of interest
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AnalyzeCollection {
    /// Results in display order
    pub results: Vec<AnalysisResult>,
}

impl AnalyzeCollection {
    /// Create an empty collection
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a category result
    pub fn push(&mut self, result: AnalysisResult) {
        self.results.push(result);
    }

    /// Number of category results
    pub fn len(&self) -> usize {
        self.results.len()
    }

    /// Whether the collection holds no results
    pub fn is_empty(&self) -> bool {
        self.results.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_collection_preserves_order() {
        let mut collection = AnalyzeCollection::new();
        collection.push(AnalysisResult::new("land", "Land Use", json!([])));
        collection.push(AnalysisResult::new("soil", "Soil Groups", json!([])));

        assert_eq!(collection.len(), 2);
        assert_eq!(collection.results[0].name, "land");
        assert_eq!(collection.results[1].name, "soil");
    }
}
