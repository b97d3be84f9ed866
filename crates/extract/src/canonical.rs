use regex::Regex;

use crate::config::ConfigError;
use crate::re;

re!(re_non_alnum, r"[^a-z0-9\s]");
re!(re_whitespace, r"\s+");

/// Derives the dedup identity of a candidate name. Case, parentheses,
/// punctuation, and legal-entity suffixes do not distinguish two names;
/// the key is never shown to a user.
#[derive(Debug)]
pub struct Canonicalizer {
    suffix_re: Option<Regex>,
}

impl Canonicalizer {
    pub fn new(suffixes: &[String]) -> Result<Self, ConfigError> {
        if suffixes.is_empty() {
            return Ok(Self { suffix_re: None });
        }
        let alternation = suffixes
            .iter()
            .map(|w| regex::escape(&w.to_lowercase()))
            .collect::<Vec<_>>()
            .join("|");
        let suffix_re = Regex::new(&format!(r"\b(?:{alternation})\b"))?;
        Ok(Self { suffix_re: Some(suffix_re) })
    }

    /// Lowercase, drop parentheses, drop suffix words (a trailing period is
    /// swept up by the symbol pass), map remaining symbols to spaces, and
    /// collapse.
    pub fn key(&self, name: &str) -> String {
        let mut key = name.to_lowercase();
        key.retain(|c| c != '(' && c != ')');
        let key = match &self.suffix_re {
            Some(re) => re.replace_all(&key, "").into_owned(),
            None => key,
        };
        let key = re_non_alnum().replace_all(&key, " ");
        let key = re_whitespace().replace_all(&key, " ");
        key.trim().to_string()
    }
}
