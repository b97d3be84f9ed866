use serde::{Deserialize, Deserializer, Serialize};

/// How the skip-word table is matched against a normalized line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum SkipMode {
    /// Skip a line if any skip word appears anywhere in it as a whole word.
    #[default]
    Contains,
    /// Skip only when the entire line is one skip word, optionally followed
    /// by a run of digits (a "PAGE 1" style footer).
    Standalone,
}

impl std::fmt::Display for SkipMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SkipMode::Contains => write!(f, "contains"),
            SkipMode::Standalone => write!(f, "standalone"),
        }
    }
}

impl std::str::FromStr for SkipMode {
    type Err = String;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "contains" => Ok(SkipMode::Contains),
            "standalone" => Ok(SkipMode::Standalone),
            other => Err(format!("Unknown skip mode: '{other}'")),
        }
    }
}

impl SkipMode {
    /// Parse a mode string, falling back to the default for anything
    /// unrecognized instead of failing.
    pub fn parse_lenient(s: &str) -> SkipMode {
        s.parse().unwrap_or_default()
    }
}

// Unknown mode strings degrade to the default rather than erroring, so a
// stale or mistyped value in stored options can never fail a run.
impl<'de> Deserialize<'de> for SkipMode {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        Ok(SkipMode::parse_lenient(&s))
    }
}

/// Per-invocation extraction options.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ExtractOptions {
    pub skip_mode: SkipMode,
}
