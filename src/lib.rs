pub mod formatting;
pub mod language;
pub mod parsing;
pub mod problem;
pub mod regex;
pub mod rendering;
