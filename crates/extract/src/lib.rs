pub mod canonical;
pub mod config;
pub mod extract;
pub mod skip;
pub mod strip;
pub mod types;

pub use config::{ConfigError, ExtractorConfig, DEFAULT_LEGAL_SUFFIXES, DEFAULT_SKIP_WORDS};
pub use extract::{extract_names, NameExtractor};
pub use types::{ExtractOptions, SkipMode};

// ── Compiled regex cache ─────────────────────────────────────────────────────

macro_rules! re {
    ($name:ident, $pat:expr) => {
        fn $name() -> &'static regex::Regex {
            static R: std::sync::OnceLock<regex::Regex> = std::sync::OnceLock::new();
            R.get_or_init(|| regex::Regex::new($pat).expect("invalid regex"))
        }
    };
}
pub(crate) use re;
