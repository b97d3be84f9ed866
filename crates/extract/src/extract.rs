use std::collections::HashSet;
use std::sync::OnceLock;

use tracing::debug;

use crate::canonical::Canonicalizer;
use crate::config::{ConfigError, ExtractorConfig};
use crate::re;
use crate::skip::SkipFilter;
use crate::strip;
use crate::types::ExtractOptions;

re!(re_alpha_word, r"[A-Za-z]{2,}");

/// Pulls customer names out of OCR'd delivery-manifest text.
///
/// The pipeline runs per line: normalize whitespace, drop boilerplate via
/// the skip-word table, strip structural scaffolding, validate that what is
/// left looks like a name, and dedup on a canonical key. It never fails;
/// malformed input degrades to dropped lines, and the output keeps
/// first-seen order.
pub struct NameExtractor {
    config: ExtractorConfig,
    skip: SkipFilter,
    canon: Canonicalizer,
}

impl NameExtractor {
    /// Extractor over the default policy tables.
    pub fn new() -> Self {
        Self::with_config(ExtractorConfig::default()).expect("default config compiles")
    }

    /// Extractor over a custom policy. The word tables are compiled here;
    /// this is the only fallible step in the crate.
    pub fn with_config(config: ExtractorConfig) -> Result<Self, ConfigError> {
        let skip = SkipFilter::new(&config.skip_words)?;
        let canon = Canonicalizer::new(&config.legal_suffixes)?;
        Ok(Self { config, skip, canon })
    }

    pub fn config(&self) -> &ExtractorConfig {
        &self.config
    }

    /// Run the full pipeline over `text`.
    pub fn extract(&self, text: &str, options: &ExtractOptions) -> Vec<String> {
        let mut seen: HashSet<String> = HashSet::new();
        let mut names = Vec::new();

        for raw in text.lines() {
            let line = normalize_line(raw);
            if line.is_empty() {
                continue;
            }
            if self.skip.should_skip(&line, options.skip_mode) {
                debug!(line = %line, "skip word match");
                continue;
            }
            let candidate = strip::strip_structural(&line);
            if !self.is_plausible_name(&candidate) {
                debug!(line = %line, candidate = %candidate, "failed validation");
                continue;
            }
            let key = self.canon.key(&candidate);
            if !seen.insert(key) {
                debug!(candidate = %candidate, "duplicate name");
                continue;
            }
            names.push(candidate);
        }
        names
    }

    fn is_plausible_name(&self, candidate: &str) -> bool {
        let letters = candidate.chars().filter(|c| c.is_ascii_alphabetic()).count();
        if letters == 0 || letters < self.config.min_letters {
            return false;
        }
        if re_alpha_word().find_iter(candidate).count() < self.config.min_alpha_words {
            return false;
        }
        let total = candidate.chars().count().max(1);
        let noisy = candidate.chars().filter(|&c| !is_name_char(c)).count();
        noisy as f32 / total as f32 <= self.config.max_symbol_ratio
    }
}

impl Default for NameExtractor {
    fn default() -> Self {
        Self::new()
    }
}

/// Extract with the default policy. The default extractor compiles once per
/// process and is shared across calls and threads.
pub fn extract_names(text: &str, options: &ExtractOptions) -> Vec<String> {
    static DEFAULT: OnceLock<NameExtractor> = OnceLock::new();
    DEFAULT.get_or_init(NameExtractor::new).extract(text, options)
}

fn normalize_line(line: &str) -> String {
    line.split_whitespace().collect::<Vec<_>>().join(" ")
}

/// Characters a plausible business name is allowed to be made of.
fn is_name_char(c: char) -> bool {
    c.is_ascii_alphanumeric() || matches!(c, ' ' | '(' | ')' | '&' | '\'' | '.' | '/' | '-')
}
