//! Analyze page: entry guard, project sync, and results view lifecycle

pub mod collection;
pub mod controller;
pub mod views;

/// Title shown while the Analyze page is active
pub const ANALYZE_PAGE_TITLE: &str = "Analyze";
