//! Rendering backends for terminal output

mod terminal;

pub use terminal::Terminal;
