//! Embedding-host seam
//!
//! When the client runs inside an ITSI activity (an iframe-like container),
//! the container tracks the learner's position so it can restore it later.
//! Controllers report position changes as relative navigation URLs.

use log::info;

/// Notifier for the external container hosting this client
#[cfg_attr(test, mockall::automock)]
pub trait EmbedHost: Send + Sync {
    /// Report the learner's current location to the container.
    fn set_learner_url(&self, path: &str);
}

/// Embed host that only records notifications in the log.
#[derive(Debug, Default)]
pub struct LoggingEmbedHost;

impl EmbedHost for LoggingEmbedHost {
    fn set_learner_url(&self, path: &str) {
        info!("Learner URL set to '{}'", path);
    }
}
