//! UI region plumbing
//!
//! The client renders into a handful of named regions on a single root view.
//! This module defines the view trait regions accept and the sidebar region
//! the Analyze results are shown in.

pub mod region;

pub use region::{RootView, SidebarRegion};

/// A renderable piece of UI that can occupy a region
pub trait View: Send + Sync {
    /// Short name identifying the view, used for logging
    fn name(&self) -> &str;

    /// Render the view's current content
    fn render(&self) -> String;
}
