//! Project entity and persistence seam
//!
//! A project aggregates an area of interest and zero or more scenarios. The
//! application root owns at most one current project per session; this
//! module defines the entity, the asynchronous store it is saved through,
//! and an in-memory store implementation used by demos and tests.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use dashmap::DashMap;
use log::debug;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::core::error::AppError;

/// A modelling scenario belonging to a project
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Scenario {
    /// Scenario display name
    pub name: String,
    /// Whether this is the unmodified "current conditions" scenario
    pub is_current_condition: bool,
    /// Land-cover and conservation-practice modifications as JSON
    pub modifications: serde_json::Value,
    /// Scenario creation timestamp
    pub created_at: DateTime<Utc>,
}

impl Scenario {
    /// Create a scenario with no modifications
    pub fn new(name: &str, is_current_condition: bool) -> Self {
        Self {
            name: name.to_string(),
            is_current_condition,
            modifications: serde_json::Value::Array(Vec::new()),
            created_at: Utc::now(),
        }
    }
}

/// A persisted project: an area of interest plus its scenarios
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Project {
    /// Identifier assigned by the store on first successful save
    pub id: Option<String>,
    /// Project display name
    pub name: String,
    /// The project's area of interest as GeoJSON geometry
    pub area_of_interest: Option<serde_json::Value>,
    /// Human-readable label for the area of interest
    pub area_of_interest_name: Option<String>,
    /// Scenarios belonging to this project, in creation order
    pub scenarios: Vec<Scenario>,
    /// Project creation timestamp
    pub created_at: DateTime<Utc>,
}

impl Project {
    /// Create an unsaved project with no scenarios
    pub fn new(name: &str) -> Self {
        Self {
            id: None,
            name: name.to_string(),
            area_of_interest: None,
            area_of_interest_name: None,
            scenarios: Vec::new(),
            created_at: Utc::now(),
        }
    }

    /// Whether the project has any scenario work yet
    pub fn has_scenarios(&self) -> bool {
        !self.scenarios.is_empty()
    }

    /// Set the project's area of interest fields from the session selection
    pub fn set_area_of_interest(
        &mut self,
        area_of_interest: Option<serde_json::Value>,
        area_of_interest_name: Option<String>,
    ) {
        self.area_of_interest = area_of_interest;
        self.area_of_interest_name = area_of_interest_name;
    }
}

/// Asynchronous persistence seam for projects.
///
/// `save` persists a snapshot of the project and returns the assigned
/// identifier. Transport details (HTTP, database) belong to implementations.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ProjectStore: Send + Sync {
    /// Persist the project, returning its identifier. A project saved for
    /// the first time is assigned a fresh id; re-saving keeps the old one.
    async fn save(&self, project: &Project) -> Result<String, AppError>;
}

/// In-memory project store backed by a concurrent map
#[derive(Debug, Default)]
pub struct InMemoryProjectStore {
    projects: DashMap<String, Project>,
}

impl InMemoryProjectStore {
    /// Create an empty store
    pub fn new() -> Self {
        Self::default()
    }

    /// Fetch a saved project by id
    pub fn get(&self, id: &str) -> Option<Project> {
        self.projects.get(id).map(|entry| entry.value().clone())
    }

    /// Number of saved projects
    pub fn len(&self) -> usize {
        self.projects.len()
    }

    /// Whether the store holds no projects
    pub fn is_empty(&self) -> bool {
        self.projects.is_empty()
    }
}

#[async_trait]
impl ProjectStore for InMemoryProjectStore {
    async fn save(&self, project: &Project) -> Result<String, AppError> {
        if project.name.is_empty() {
            return Err(AppError::ValidationError(
                "project name must not be empty".to_string(),
            ));
        }

        let id = project
            .id
            .clone()
            .unwrap_or_else(|| Uuid::new_v4().to_string());

        let mut saved = project.clone();
        saved.id = Some(id.clone());
        self.projects.insert(id.clone(), saved);

        debug!("Saved project '{}' with id {}", project.name, id);
        Ok(id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_new_project_is_empty() {
        let project = Project::new("Untitled Project");
        assert!(project.id.is_none());
        assert!(!project.has_scenarios());
        assert!(project.area_of_interest.is_none());
    }

    #[test]
    fn test_set_area_of_interest() {
        let mut project = Project::new("Untitled Project");
        let aoi = json!({"type": "MultiPolygon", "coordinates": [[[[0.0, 0.0]]]]});
        project.set_area_of_interest(Some(aoi.clone()), Some("Schuylkill".to_string()));
        assert_eq!(project.area_of_interest, Some(aoi));
        assert_eq!(project.area_of_interest_name.as_deref(), Some("Schuylkill"));
    }

    #[tokio::test]
    async fn test_store_assigns_id_on_first_save() {
        let store = InMemoryProjectStore::new();
        let project = Project::new("Untitled Project");

        let id = store.save(&project).await.unwrap();
        assert!(!id.is_empty());

        let saved = store.get(&id).unwrap();
        assert_eq!(saved.id.as_deref(), Some(id.as_str()));
        assert_eq!(store.len(), 1);
    }

    #[tokio::test]
    async fn test_store_keeps_id_on_resave() {
        let store = InMemoryProjectStore::new();
        let mut project = Project::new("Untitled Project");

        let first = store.save(&project).await.unwrap();
        project.id = Some(first.clone());
        project.scenarios.push(Scenario::new("Current Conditions", true));

        let second = store.save(&project).await.unwrap();
        assert_eq!(first, second);
        assert_eq!(store.len(), 1);
        assert!(store.get(&first).unwrap().has_scenarios());
    }

    #[tokio::test]
    async fn test_store_rejects_unnamed_project() {
        let store = InMemoryProjectStore::new();
        let project = Project::new("");
        assert!(store.save(&project).await.is_err());
        assert!(store.is_empty());
    }
}
