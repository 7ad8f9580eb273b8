//! Compiled regular expressions, cached per call site.

mod cache;
