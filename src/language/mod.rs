// Types representing a document in the restricted YAML grammar

mod error;
mod types;

// Re-export all public symbols
pub use error::*;
pub use types::*;
