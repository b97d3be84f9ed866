use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Boilerplate phrases that mark a manifest line as route noise rather than
/// a customer name. Lowercase; multi-word phrases match as whole phrases.
pub const DEFAULT_SKIP_WORDS: &[&str] = &[
    "break",
    "meal",
    "wismettac",
    "delivery manifest",
    "route",
    "driver",
    "begin",
    "end",
    "time",
    "arrived",
    "departed",
    "dry",
    "chill",
    "frozen",
    "case",
    "each",
    "total",
    "shipping",
    "page",
];

/// Legal-entity suffixes ignored when two names are compared for duplicates,
/// so "Acme Inc." and "ACME" collapse to one entry.
pub const DEFAULT_LEGAL_SUFFIXES: &[&str] = &["inc", "llc", "co", "corp"];

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to parse TOML: {0}")]
    Toml(#[from] toml::de::Error),
    #[error("Failed to compile word table: {0}")]
    Pattern(#[from] regex::Error),
}

/// Tunable extraction policy.
///
/// The validation thresholds are empirical: they encode "a real name has
/// enough letters to be two recognizable words and is not dominated by OCR
/// garbage" and carry no deeper meaning. Defaults reproduce the shipped
/// behavior exactly.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ExtractorConfig {
    /// Lowercase phrases that classify a line as manifest boilerplate.
    pub skip_words: Vec<String>,
    /// Suffix words stripped from the dedup key.
    pub legal_suffixes: Vec<String>,
    /// Minimum ASCII letters a candidate must contain.
    pub min_letters: usize,
    /// Minimum count of 2+-letter runs a candidate must contain.
    pub min_alpha_words: usize,
    /// Maximum fraction of characters outside the allowed name alphabet.
    pub max_symbol_ratio: f32,
}

impl Default for ExtractorConfig {
    fn default() -> Self {
        Self {
            skip_words: DEFAULT_SKIP_WORDS.iter().map(|w| w.to_string()).collect(),
            legal_suffixes: DEFAULT_LEGAL_SUFFIXES.iter().map(|w| w.to_string()).collect(),
            min_letters: 5,
            min_alpha_words: 2,
            max_symbol_ratio: 0.15,
        }
    }
}

impl ExtractorConfig {
    pub fn from_toml(content: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(content)?)
    }
}
