//! Navigation seam
//!
//! The router itself belongs to the wider client; controllers only need the
//! ability to request a route change. The `trigger` flag forces an immediate
//! transition instead of just updating the address.

use log::info;

/// Path of the default/home route
pub const HOME_ROUTE: &str = "";

/// Navigation requests issued by controllers
#[cfg_attr(test, mockall::automock)]
pub trait Navigator: Send + Sync {
    /// Request a transition to `path`. When `trigger` is true the route
    /// handler runs immediately.
    fn navigate(&self, path: &str, trigger: bool);
}

/// Navigator that only records the request in the log.
///
/// Stands in for the real router when the client runs outside the full
/// application shell (demos, smoke runs).
#[derive(Debug, Default)]
pub struct LoggingNavigator;

impl Navigator for LoggingNavigator {
    fn navigate(&self, path: &str, trigger: bool) {
        info!("Navigating to '{}' (trigger: {})", path, trigger);
    }
}
