//! Sidebar region slot
//!
//! A region is a named slot on the root view that holds at most one mounted
//! view. It has exactly two states: empty, or occupied by the view it was
//! last shown. Showing a view replaces any previous occupant; emptying an
//! already empty region is a no-op.

use log::debug;

use crate::ui::View;

/// The single shared sidebar region of the root view
#[derive(Default)]
pub struct SidebarRegion {
    current: Option<Box<dyn View>>,
}

impl SidebarRegion {
    /// Create an empty region
    pub fn new() -> Self {
        Self::default()
    }

    /// Mount a view, replacing and releasing any previous occupant
    pub fn show(&mut self, view: Box<dyn View>) {
        if let Some(previous) = &self.current {
            debug!("Replacing '{}' in sidebar region", previous.name());
        }
        debug!("Showing '{}' in sidebar region", view.name());
        self.current = Some(view);
    }

    /// Unmount the current view, if any
    pub fn empty(&mut self) {
        if let Some(view) = self.current.take() {
            debug!("Emptied sidebar region (was '{}')", view.name());
        }
    }

    /// Whether a view is currently mounted
    pub fn is_occupied(&self) -> bool {
        self.current.is_some()
    }

    /// The currently mounted view, if any
    pub fn current(&self) -> Option<&dyn View> {
        self.current.as_deref()
    }
}

/// Root view of the client, owning the shared UI regions
#[derive(Default)]
pub struct RootView {
    /// The sidebar region the Analyze results mount into
    pub sidebar_region: SidebarRegion,
}

impl RootView {
    /// Create a root view with all regions empty
    pub fn new() -> Self {
        Self::default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct StubView(&'static str);

    impl View for StubView {
        fn name(&self) -> &str {
            self.0
        }

        fn render(&self) -> String {
            format!("<{}>", self.0)
        }
    }

    #[test]
    fn test_show_occupies_region() {
        let mut region = SidebarRegion::new();
        assert!(!region.is_occupied());

        region.show(Box::new(StubView("results")));
        assert!(region.is_occupied());
        assert_eq!(region.current().unwrap().render(), "<results>");
    }

    #[test]
    fn test_show_replaces_previous_view() {
        let mut region = SidebarRegion::new();
        region.show(Box::new(StubView("first")));
        region.show(Box::new(StubView("second")));
        assert_eq!(region.current().unwrap().name(), "second");
    }

    #[test]
    fn test_empty_is_idempotent() {
        let mut region = SidebarRegion::new();
        region.show(Box::new(StubView("results")));

        region.empty();
        assert!(!region.is_occupied());

        // Second empty on an already empty region must not fault
        region.empty();
        assert!(!region.is_occupied());
    }
}
