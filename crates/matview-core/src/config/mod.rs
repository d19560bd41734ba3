//! Configuration for view traversal.

pub mod traversal;

// Re-export key items
pub use traversal::{view_config, ExhaustionPolicy, ViewConfig, ViewConfigBuilder, EXHAUSTION_ENV};
