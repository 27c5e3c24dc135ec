//! Services Layer
//!
//! Multi-table business operations extracted from HTTP handlers.

pub mod import_service;

// Re-export for convenience
pub use import_service::{import_voca_book, ImportSummary, NewVocaBook};
