//! Argument definitions for the `maniscan` binary.

use std::path::PathBuf;

use clap::Parser;
use maniscan_extract::SkipMode;

/// Extract customer names from OCR'd delivery-manifest text.
#[derive(Debug, Parser)]
#[command(name = "maniscan")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Manifest text file; reads stdin when omitted or "-"
    pub input: Option<PathBuf>,

    /// How skip words are matched against a line
    #[arg(short, long, value_enum, default_value = "contains")]
    pub skip_mode: CliSkipMode,

    /// Extraction policy file (TOML); defaults apply when omitted
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Emit the names as a JSON array instead of one per line
    #[arg(long)]
    pub json: bool,

    /// Report the name count on stderr
    #[arg(long)]
    pub count: bool,

    /// Run on the built-in sample manifest instead of reading input
    #[arg(long)]
    pub demo: bool,
}

/// Skip-word matching mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum CliSkipMode {
    /// Skip a line if a skip word appears anywhere in it
    Contains,
    /// Skip only lines that are a lone skip word plus an optional number
    Standalone,
}

impl From<CliSkipMode> for SkipMode {
    fn from(mode: CliSkipMode) -> Self {
        match mode {
            CliSkipMode::Contains => SkipMode::Contains,
            CliSkipMode::Standalone => SkipMode::Standalone,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_defaults() {
        let cli = Cli::try_parse_from(["maniscan"]).unwrap();
        assert_eq!(cli.skip_mode, CliSkipMode::Contains);
        assert!(cli.input.is_none());
        assert!(!cli.json);
    }

    #[test]
    fn parses_mode_and_flags() {
        let cli =
            Cli::try_parse_from(["maniscan", "-s", "standalone", "--json", "route.txt"]).unwrap();
        assert_eq!(cli.skip_mode, CliSkipMode::Standalone);
        assert!(cli.json);
        assert_eq!(cli.input.unwrap(), PathBuf::from("route.txt"));
    }

    #[test]
    fn rejects_unknown_mode() {
        assert!(Cli::try_parse_from(["maniscan", "--skip-mode", "fuzzy"]).is_err());
    }

    #[test]
    fn mode_converts_to_library_enum() {
        assert_eq!(SkipMode::from(CliSkipMode::Contains), SkipMode::Contains);
        assert_eq!(SkipMode::from(CliSkipMode::Standalone), SkipMode::Standalone);
    }
}
