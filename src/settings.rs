use std::{fs::read_to_string, path::PathBuf};

use anyhow::{Context, Result};
use clap::Parser;
use serde::Deserialize;

use crate::catalog::DEFAULT_SHORT_WORDS;

const DEFAULT_INPUT: &str = "public/data/products.json";

/// Regenerates product descriptions and drops warranties from non-motorcycle
/// items in a JSON catalog.
#[derive(Debug, Parser)]
pub struct Cli {
    /// Catalog to update [default: public/data/products.json]
    pub input: Option<PathBuf>,
    /// Where to write the result [default: the input file]
    #[arg(short, long)]
    pub output: Option<PathBuf>,
    /// YAML settings file
    #[arg(short, long)]
    pub config: Option<PathBuf>,
    /// Process and report without writing anything
    #[arg(long)]
    pub dry_run: bool,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default, deny_unknown_fields)]
struct FileSettings {
    input: Option<PathBuf>,
    output: Option<PathBuf>,
    short_description_max_words: Option<usize>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settings {
    pub input: PathBuf,
    pub output: PathBuf,
    pub short_description_max_words: usize,
    pub dry_run: bool,
}

impl Settings {
    pub fn load(cli: Cli) -> Result<Self> {
        let file = match &cli.config {
            Some(path) => {
                let data = read_to_string(path)
                    .with_context(|| format!("Failed to read {}", path.display()))?;
                serde_yaml::from_str(&data)
                    .with_context(|| format!("Failed to parse {}", path.display()))?
            }
            None => FileSettings::default(),
        };

        Ok(Self::merge(cli, file))
    }

    fn merge(cli: Cli, file: FileSettings) -> Self {
        let input = cli
            .input
            .or(file.input)
            .unwrap_or_else(|| PathBuf::from(DEFAULT_INPUT));
        let output = cli.output.or(file.output).unwrap_or_else(|| input.clone());

        Settings {
            input,
            output,
            short_description_max_words: file
                .short_description_max_words
                .unwrap_or(DEFAULT_SHORT_WORDS),
            dry_run: cli.dry_run,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn cli(args: &[&str]) -> Cli {
        Cli::parse_from(std::iter::once("catalog-updater").chain(args.iter().copied()))
    }

    #[test]
    fn defaults() {
        let settings = Settings::merge(cli(&[]), FileSettings::default());
        assert_eq!(settings.input, PathBuf::from(DEFAULT_INPUT));
        assert_eq!(settings.output, settings.input);
        assert_eq!(settings.short_description_max_words, 15);
        assert!(!settings.dry_run);
    }

    #[test]
    fn cli_beats_file() {
        let file: FileSettings = serde_yaml::from_str(
            "input: a.json\noutput: b.json\nshort_description_max_words: 12\n",
        )
        .unwrap();
        let settings = Settings::merge(cli(&["c.json", "--dry-run"]), file);
        assert_eq!(settings.input, PathBuf::from("c.json"));
        assert_eq!(settings.output, PathBuf::from("b.json"));
        assert_eq!(settings.short_description_max_words, 12);
        assert!(settings.dry_run);
    }

    #[test]
    fn output_follows_input() {
        let settings = Settings::merge(cli(&["x.json"]), FileSettings::default());
        assert_eq!(settings.output, PathBuf::from("x.json"));

        let settings = Settings::merge(cli(&["x.json", "-o", "y.json"]), FileSettings::default());
        assert_eq!(settings.output, PathBuf::from("y.json"));
    }

    #[test]
    fn unknown_keys_are_rejected() {
        assert!(serde_yaml::from_str::<FileSettings>("max_words: 3\n").is_err());
    }
}
