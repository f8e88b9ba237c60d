//! Core building blocks shared across the client: error type, settings
//! snapshot, and the seams to the router and the embedding host.

pub mod error;
pub mod itsi;
pub mod navigation;
pub mod settings;
