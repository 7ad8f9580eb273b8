/// Compile a pattern once and hand back a `&'static Regex` on every
/// subsequent call. The pattern must be a literal known to be valid.
#[macro_export]
macro_rules! regex {
    ($pattern:expr) => {{
        use std::sync::OnceLock;
        static REGEX: OnceLock<::regex::Regex> = OnceLock::new();
        REGEX.get_or_init(|| ::regex::Regex::new($pattern).unwrap_or_else(|e| panic!("{}", e)))
    }};
}
