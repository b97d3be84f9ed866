use regex::Regex;

use crate::config::ConfigError;
use crate::types::SkipMode;

/// Line classifier compiled from the skip-word table.
///
/// CONTAINS skips a line when any table entry appears anywhere in it as a
/// whole word. STANDALONE skips only when one entry accounts for the whole
/// line, give or take a trailing run of digits, so common words ("time")
/// inside legitimate names no longer knock the line out.
#[derive(Debug)]
pub struct SkipFilter {
    contains: Option<Regex>,
    standalone: Option<Regex>,
}

impl SkipFilter {
    pub fn new(words: &[String]) -> Result<Self, ConfigError> {
        // An empty table must skip nothing; an empty alternation would
        // match everywhere.
        if words.is_empty() {
            return Ok(Self { contains: None, standalone: None });
        }
        let alternation = words
            .iter()
            .map(|w| regex::escape(w))
            .collect::<Vec<_>>()
            .join("|");
        let contains = Regex::new(&format!(r"(?i)\b(?:{alternation})\b"))?;
        let standalone = Regex::new(&format!(r"(?i)^(?:{alternation})(?:\s*\d+)?$"))?;
        Ok(Self {
            contains: Some(contains),
            standalone: Some(standalone),
        })
    }

    pub fn should_skip(&self, line: &str, mode: SkipMode) -> bool {
        match mode {
            SkipMode::Contains => self.contains.as_ref().is_some_and(|re| re.is_match(line)),
            SkipMode::Standalone => self.standalone.as_ref().is_some_and(|re| re.is_match(line)),
        }
    }
}
