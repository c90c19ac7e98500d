use std::{
    fs,
    path::{Path, PathBuf},
    sync::Arc,
};

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use serde::Serialize;
use tracing_subscriber::EnvFilter;

use polytext::{DetectionResult, LanguageRegistry, Polytext};

#[derive(Parser)]
#[command(name = "polytext", version, about = "Multilingual text preprocessing")]
struct Cli {
    /// JSON array of extra {code, name, script, family} entries to register first
    #[arg(long, global = true)]
    languages: Option<PathBuf>,
    /// Print the structured result as JSON
    #[arg(long, global = true)]
    json: bool,
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Detect the language(s) of a text file
    Detect {
        #[arg(long)]
        input: PathBuf,
        /// Number of candidates
        #[arg(long, default_value_t = 1)]
        top_k: usize,
    },
    /// Tokenize a text file
    Tokenize {
        #[arg(long)]
        input: PathBuf,
        /// BCP-47 code (detected when omitted)
        #[arg(long)]
        language: Option<String>,
    },
    /// Transliterate a text file from one script to another
    Transliterate {
        #[arg(long)]
        input: PathBuf,
        /// Source script, e.g. devanagari
        #[arg(long = "from")]
        source_script: String,
        /// Target script, e.g. latin
        #[arg(long = "to")]
        target_script: String,
    },
    /// Normalize a text file (NFC, whitespace, script-specific rules)
    Normalize {
        #[arg(long)]
        input: PathBuf,
        #[arg(long)]
        language: String,
    },
}

fn init_tracing() {
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_target(true)
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("polytext=warn")),
        )
        .init();
}

fn read_input(path: &Path) -> Result<String> {
    fs::read_to_string(path).with_context(|| format!("failed to read {}", path.display()))
}

fn print_json<T: Serialize + ?Sized>(value: &T) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

fn detection_line(r: &DetectionResult) -> String {
    format!(
        "{}  {:<20}  confidence={:.2}%  script={}",
        r.language.code(),
        r.language.name(),
        r.confidence() * 100.0,
        r.language.script
    )
}

fn main() -> Result<()> {
    init_tracing();
    let cli = Cli::parse();

    let registry = Arc::new(LanguageRegistry::new());
    if let Some(path) = &cli.languages {
        let doc = read_input(path)?;
        let n = registry
            .extend_from_json(&doc)
            .with_context(|| format!("invalid language file {}", path.display()))?;
        tracing::info!(count = n, file = %path.display(), "registered languages");
    }
    let polytext = Polytext::builder().registry(registry).build();

    match cli.command {
        Command::Detect { input, top_k } => {
            let text = read_input(&input)?;
            let results = polytext.detect_multiple(&text, top_k);
            if cli.json {
                print_json(&results)?;
            } else {
                for r in &results {
                    println!("{}", detection_line(r));
                }
            }
        }
        Command::Tokenize { input, language } => {
            let text = read_input(&input)?;
            let result = polytext.tokenize(&text, language.as_deref())?;
            if cli.json {
                print_json(&result)?;
            } else {
                println!("Language: {} ({})", result.language.name(), result.language.code());
                println!("Tokens ({}):", result.tokens.len());
                println!("{}", result.tokens.join(" | "));
            }
        }
        Command::Transliterate {
            input,
            source_script,
            target_script,
        } => {
            let text = read_input(&input)?;
            let result = polytext.transliterate(&text, &source_script, &target_script)?;
            if cli.json {
                print_json(&result)?;
            } else {
                println!("{}", result.target);
            }
        }
        Command::Normalize { input, language } => {
            let text = read_input(&input)?;
            let normalized = polytext.normalize(&text, &language);
            if cli.json {
                print_json(&normalized)?;
            } else {
                println!("{normalized}");
            }
        }
    }
    Ok(())
}
