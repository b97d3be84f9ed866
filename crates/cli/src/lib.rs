//! maniscan: pull customer names out of OCR'd delivery-manifest text.
//!
//! The binary is a thin surface over `maniscan-extract`: resolve the policy,
//! read the text, run the pipeline, print the names.

pub mod cli;

use std::fs;
use std::io::Read;
use std::path::Path;

use anyhow::Context;

use maniscan_extract::{ExtractOptions, ExtractorConfig, NameExtractor};

pub use cli::{Cli, CliSkipMode};

/// Sample manifest for `--demo`: one page of a typical route sheet.
pub const DEMO_MANIFEST: &str = "500 12345 POKE ONE
Wismettac Asian Foods
700 KYOKO SUSHI BAR
1st Break
900 PACIFIC SUPERMARKET (HAYWARD)";

pub fn run(cli: Cli) -> anyhow::Result<()> {
    let extractor = load_extractor(cli.config.as_deref())?;

    let text = if cli.demo {
        DEMO_MANIFEST.to_string()
    } else {
        read_input(cli.input.as_deref())?
    };

    let options = ExtractOptions { skip_mode: cli.skip_mode.into() };
    let names = extractor.extract(&text, &options);
    tracing::debug!(lines = text.lines().count(), names = names.len(), "extraction complete");

    if cli.json {
        println!("{}", serde_json::to_string_pretty(&names)?);
    } else {
        for name in &names {
            println!("{name}");
        }
    }
    if cli.count {
        eprintln!("{} name(s)", names.len());
    }
    Ok(())
}

/// Build the extractor from a TOML policy file, or the defaults without one.
pub fn load_extractor(config_path: Option<&Path>) -> anyhow::Result<NameExtractor> {
    match config_path {
        Some(path) => {
            let content = fs::read_to_string(path)
                .with_context(|| format!("Failed to read config file: {}", path.display()))?;
            let config = ExtractorConfig::from_toml(&content)
                .with_context(|| format!("Failed to parse config file: {}", path.display()))?;
            NameExtractor::with_config(config).context("Failed to compile extraction policy")
        }
        None => Ok(NameExtractor::new()),
    }
}

/// Read manifest text from a file, or stdin for `-`/no path.
pub fn read_input(path: Option<&Path>) -> anyhow::Result<String> {
    match path {
        Some(p) if p.as_os_str() != "-" => fs::read_to_string(p)
            .with_context(|| format!("Failed to read manifest text: {}", p.display())),
        _ => {
            let mut buf = String::new();
            std::io::stdin()
                .read_to_string(&mut buf)
                .context("Failed to read stdin")?;
            Ok(buf)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn demo_manifest_extracts_expected_names() {
        let extractor = NameExtractor::new();
        let names = extractor.extract(DEMO_MANIFEST, &ExtractOptions::default());
        assert_eq!(
            names,
            vec!["POKE ONE", "KYOKO SUSHI BAR", "PACIFIC SUPERMARKET (HAYWARD)"]
        );
    }

    #[test]
    fn read_input_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, "AMICI SUSHI\nPOKE ONE").unwrap();
        let text = read_input(Some(file.path())).unwrap();
        assert_eq!(text, "AMICI SUSHI\nPOKE ONE");
    }

    #[test]
    fn read_input_missing_file_is_contextual_error() {
        let err = read_input(Some(Path::new("/no/such/manifest.txt"))).unwrap_err();
        assert!(err.to_string().contains("manifest.txt"));
    }

    #[test]
    fn load_extractor_without_config_uses_defaults() {
        let extractor = load_extractor(None).unwrap();
        assert_eq!(extractor.config().min_letters, 5);
    }

    #[test]
    fn load_extractor_reads_policy_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, "skip_words = [\"sushi\"]").unwrap();
        let extractor = load_extractor(Some(file.path())).unwrap();
        let names = extractor.extract("AMICI SUSHI\nPOKE ONE", &ExtractOptions::default());
        assert_eq!(names, vec!["POKE ONE"]);
    }

    #[test]
    fn load_extractor_rejects_bad_toml() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, "min_letters = \"many\"").unwrap();
        assert!(load_extractor(Some(file.path())).is_err());
    }
}
