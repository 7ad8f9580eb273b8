//! Presentation of parsed documents

pub mod report;
mod syntax;

// Re-export all public symbols
pub use report::validate_document;
pub use syntax::*;
