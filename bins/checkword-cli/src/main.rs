//! Command-line front-end for checkword-core.
//!
//! Completes an 11-word prefix with its checksum word, validates and scores
//! mnemonics, and derives entropy and seeds. Settings come from
//! `config.toml`, `CHECKWORD_*` environment variables and flags, in
//! increasing priority.

mod config;

use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::{Context, Result};
use checkword_core::validator::split_words;
use checkword_core::{Language, MnemonicGenerator, SearchStrategy};
use clap::{Args, Parser, Subcommand};
use serde_json::json;
use tracing::debug;

use crate::config::{CliConfig, LogFormat};

/// BIP39 mnemonic checksum completion and validation.
#[derive(Parser, Debug)]
#[command(name = "checkword", version, about = "BIP39 mnemonic checksum completion and validation")]
struct Cli {
    /// Config file (default: <config dir>/checkword/config.toml).
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Wordlist language tag (see `checkword languages`).
    #[arg(short, long, global = true)]
    language: Option<String>,

    /// Checksum search strategy: direct or scan.
    #[arg(long, global = true)]
    strategy: Option<SearchStrategy>,

    /// Log level (trace, debug, info, warn, error).
    #[arg(long, global = true)]
    log_level: Option<String>,

    /// Print results as JSON.
    #[arg(long, global = true)]
    json: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// List supported wordlist languages.
    Languages,
    /// Complete 11 words into a 12-word mnemonic.
    Complete(WordsArgs),
    /// Print only the checksum word for 11 words.
    Checksum(WordsArgs),
    /// List every word that completes 11 words, lowest index first.
    Candidates(WordsArgs),
    /// Check a mnemonic and report why it is invalid.
    Validate(WordsArgs),
    /// Advisory strength score (not an entropy measure).
    Strength(WordsArgs),
    /// Print the entropy of a mnemonic as hex.
    Entropy(WordsArgs),
    /// Derive the 64-byte seed of a mnemonic.
    Seed(SeedArgs),
    /// Generate a random mnemonic.
    Random(RandomArgs),
    /// Encode hex entropy as a mnemonic.
    FromEntropy(FromEntropyArgs),
}

#[derive(Args, Debug)]
struct WordsArgs {
    /// Words, as separate arguments or one quoted phrase.
    #[arg(required = true, num_args = 1..)]
    words: Vec<String>,
}

impl WordsArgs {
    fn words(&self) -> Vec<String> {
        split_words(&self.words.join(" "))
    }

    fn text(&self) -> String {
        self.words.join(" ")
    }
}

#[derive(Args, Debug)]
struct SeedArgs {
    #[command(flatten)]
    mnemonic: WordsArgs,

    /// Optional passphrase.
    #[arg(short, long, conflicts_with = "prompt")]
    passphrase: Option<String>,

    /// Read the passphrase from the terminal without echo.
    #[arg(long)]
    prompt: bool,
}

#[derive(Args, Debug)]
struct RandomArgs {
    /// Number of words (12, 15, 18, 21 or 24).
    #[arg(short, long, default_value_t = 12)]
    words: usize,
}

#[derive(Args, Debug)]
struct FromEntropyArgs {
    /// Entropy as hex (16, 20, 24, 28 or 32 bytes).
    hex: String,
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    let mut cfg = match CliConfig::load(cli.config.as_deref()) {
        Ok(cfg) => cfg,
        Err(e) => {
            eprintln!("error: {e:#}");
            return ExitCode::FAILURE;
        }
    };
    apply_flags(&mut cfg, &cli);
    init_logging(&cfg.log_level, cfg.log_format);

    let generator = MnemonicGenerator::new(&cfg.language).with_strategy(cfg.search_strategy);
    debug!(
        language = %generator.language(),
        strategy = %generator.strategy(),
        "generator ready"
    );

    match run(&cli, &generator) {
        Ok(code) => code,
        Err(e) => {
            if cli.json {
                println!("{}", json!({ "error": format!("{e:#}") }));
            } else {
                eprintln!("error: {e:#}");
            }
            ExitCode::FAILURE
        }
    }
}

/// Command-line flags take priority over file and environment settings.
fn apply_flags(cfg: &mut CliConfig, cli: &Cli) {
    if let Some(language) = &cli.language {
        cfg.language = language.clone();
    }
    if let Some(strategy) = cli.strategy {
        cfg.search_strategy = strategy;
    }
    if let Some(level) = &cli.log_level {
        cfg.log_level = level.clone();
    }
}

fn run(cli: &Cli, generator: &MnemonicGenerator) -> Result<ExitCode> {
    let json_out = cli.json;

    match &cli.command {
        Commands::Languages => {
            let languages = MnemonicGenerator::supported_languages();
            if json_out {
                println!("{}", json!({ "languages": languages }));
            } else {
                for tag in languages {
                    println!("{tag}");
                }
            }
        }
        Commands::Complete(args) => {
            let phrase = generator
                .generate_from_prefix(&args.words())
                .context("Cannot complete prefix")?;
            if json_out {
                println!("{}", json!({ "mnemonic": phrase, "language": generator.language() }));
            } else {
                println!("{phrase}");
            }
        }
        Commands::Checksum(args) => {
            let word = generator
                .calculate_checksum(&args.words())
                .context("Cannot compute checksum word")?;
            if json_out {
                println!("{}", json!({ "checksum_word": word }));
            } else {
                println!("{word}");
            }
        }
        Commands::Candidates(args) => {
            let words = generator
                .checksum_candidates(&args.words())
                .context("Cannot list checksum words")?;
            if json_out {
                println!("{}", json!({ "count": words.len(), "candidates": words }));
            } else {
                println!("{}", words.join(" "));
            }
        }
        Commands::Validate(args) => {
            let result = generator.validate_mnemonic_detailed(&args.text());
            if json_out {
                let error = result.as_ref().err().map(|e| e.to_string());
                println!("{}", json!({ "valid": result.is_ok(), "error": error }));
            } else {
                match &result {
                    Ok(()) => println!("valid"),
                    Err(e) => println!("invalid: {e}"),
                }
            }
            if result.is_err() {
                return Ok(ExitCode::FAILURE);
            }
        }
        Commands::Strength(args) => {
            let strength = generator.strength(&args.text());
            if json_out {
                println!("{}", serde_json::to_string(&strength)?);
            } else {
                println!("{} ({})", strength.score, strength.level);
            }
        }
        Commands::Entropy(args) => {
            let entropy = generator
                .mnemonic_to_entropy(&args.text())
                .context("Cannot decode entropy")?;
            if json_out {
                println!("{}", json!({ "entropy": entropy }));
            } else {
                println!("{entropy}");
            }
        }
        Commands::Seed(args) => {
            let passphrase = if args.prompt {
                prompt_passphrase("Passphrase")?
            } else {
                args.passphrase.clone().unwrap_or_default()
            };
            let seed = generator
                .mnemonic_to_seed(&args.mnemonic.text(), &passphrase)
                .context("Cannot derive seed")?;
            if json_out {
                println!("{}", json!({ "seed": seed.to_hex() }));
            } else {
                println!("{}", seed.to_hex());
            }
        }
        Commands::Random(args) => {
            let mnemonic = generator
                .generate_random(args.words)
                .context("Cannot generate mnemonic")?;
            print_mnemonic(json_out, &mnemonic.phrase(), generator.language());
        }
        Commands::FromEntropy(args) => {
            let mnemonic = generator
                .from_entropy_hex(&args.hex)
                .context("Cannot encode entropy")?;
            print_mnemonic(json_out, &mnemonic.phrase(), generator.language());
        }
    }

    Ok(ExitCode::SUCCESS)
}

fn print_mnemonic(json_out: bool, phrase: &str, language: Language) {
    if json_out {
        println!("{}", json!({ "mnemonic": phrase, "language": language }));
    } else {
        println!("{phrase}");
    }
}

/// Prompt for a passphrase securely (no echo).
fn prompt_passphrase(prompt: &str) -> Result<String> {
    rpassword::prompt_password(format!("{prompt}: ")).context("Failed to read passphrase")
}

/// Initialize tracing on stderr so stdout carries only results.
///
/// `RUST_LOG` wins over the configured level when set.
fn init_logging(level: &str, format: LogFormat) {
    use tracing_subscriber::filter::EnvFilter;
    use tracing_subscriber::fmt;
    use tracing_subscriber::prelude::*;

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));

    match format {
        LogFormat::Json => tracing_subscriber::registry()
            .with(filter)
            .with(fmt::layer().json().with_writer(std::io::stderr))
            .init(),
        LogFormat::Text => tracing_subscriber::registry()
            .with(filter)
            .with(fmt::layer().with_target(true).with_writer(std::io::stderr))
            .init(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_prefix_as_separate_words() {
        let cli =
            Cli::try_parse_from(["checkword", "complete", "abandon", "ability", "able"]).unwrap();
        match cli.command {
            Commands::Complete(args) => assert_eq!(args.words(), ["abandon", "ability", "able"]),
            other => panic!("unexpected command: {other:?}"),
        }
    }

    #[test]
    fn parses_quoted_phrase() {
        let cli = Cli::try_parse_from(["checkword", "validate", "  Zoo  zoo "]).unwrap();
        match cli.command {
            Commands::Validate(args) => assert_eq!(args.words(), ["zoo", "zoo"]),
            other => panic!("unexpected command: {other:?}"),
        }
    }

    #[test]
    fn global_flags_after_subcommand() {
        let cli = Cli::try_parse_from([
            "checkword",
            "checksum",
            "abandon",
            "--language",
            "french",
            "--strategy",
            "scan",
            "--json",
        ])
        .unwrap();
        assert_eq!(cli.language.as_deref(), Some("french"));
        assert_eq!(cli.strategy, Some(SearchStrategy::Scan));
        assert!(cli.json);
    }

    #[test]
    fn seed_passphrase_and_prompt_conflict() {
        let res = Cli::try_parse_from([
            "checkword", "seed", "abandon", "--passphrase", "x", "--prompt",
        ]);
        assert!(res.is_err());
    }

    #[test]
    fn words_required() {
        assert!(Cli::try_parse_from(["checkword", "complete"]).is_err());
    }

    #[test]
    fn random_defaults_to_twelve() {
        let cli = Cli::try_parse_from(["checkword", "random"]).unwrap();
        match cli.command {
            Commands::Random(args) => assert_eq!(args.words, 12),
            other => panic!("unexpected command: {other:?}"),
        }
    }

    #[test]
    fn flags_override_config() {
        let cli = Cli::try_parse_from([
            "checkword", "--language", "italian", "--log-level", "debug", "languages",
        ])
        .unwrap();
        let mut cfg = CliConfig::default();
        apply_flags(&mut cfg, &cli);
        assert_eq!(cfg.language, "italian");
        assert_eq!(cfg.log_level, "debug");
        assert_eq!(cfg.search_strategy, SearchStrategy::Direct);
    }

    #[test]
    fn generator_from_config_completes_prefix() {
        let cfg = CliConfig::default();
        let generator = MnemonicGenerator::new(&cfg.language).with_strategy(cfg.search_strategy);
        let args = WordsArgs {
            words: vec!["abandon".to_string(); 11],
        };
        assert_eq!(generator.calculate_checksum(&args.words()), Ok("about"));
    }
}
