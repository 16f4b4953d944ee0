//! Command-line front end: decode documents, extract sentences, and run
//! lookups against a word list.

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use tracing::info;
use tracing_subscriber::EnvFilter;
use yomiscan::{restore_position, ScanConfig, Scanner, TextSearch, WordList, DEFAULT_SCAN_LENGTH};

#[derive(Parser, Debug)]
#[command(name = "yomiscan")]
#[command(about = "Decode documents and run pop-up dictionary lookups from the command line")]
#[command(version)]
struct Args {
    /// Strip 《…》 reading annotations after decoding
    #[arg(long, global = true)]
    strip_readings: bool,

    /// Encoding candidates in priority order (repeatable); defaults to
    /// utf-8, shift_jis, euc-jp, utf-16le
    #[arg(long = "encoding", global = true)]
    encodings: Vec<String>,

    /// Emit logs as JSON
    #[arg(long, global = true)]
    log_json: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Print the detected encoding and length of a document
    Decode {
        /// Document to read
        file: PathBuf,
    },
    /// Print the sentence around a cursor position
    Sentence {
        /// Document to read
        file: PathBuf,
        /// Cursor position in codepoints
        #[arg(long, default_value_t = 0)]
        position: usize,
    },
    /// Look up the text at a cursor position and print the result as JSON
    Scan {
        /// Document to read
        file: PathBuf,
        /// Cursor position in codepoints
        #[arg(long, default_value_t = 0)]
        position: usize,
        /// Tab-separated word list (headword, gloss)
        #[arg(long)]
        dict: PathBuf,
        /// Lookup window length in codepoints
        #[arg(long, default_value_t = DEFAULT_SCAN_LENGTH)]
        scan_length: usize,
    },
    /// Find text in a document, wrapping around once
    Find {
        /// Document to read
        file: PathBuf,
        /// Text to look for
        needle: String,
        /// Position to search from
        #[arg(long, default_value_t = 0)]
        from: usize,
    },
}

fn init_logging(json: bool) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr);
    if json {
        builder.json().init();
    } else {
        builder.init();
    }
}

fn build_config(args: &Args) -> Result<ScanConfig> {
    let mut config = ScanConfig::default().with_strip_readings(args.strip_readings);
    if !args.encodings.is_empty() {
        config = config
            .with_encoding_labels(args.encodings.as_slice())
            .context("invalid --encoding")?;
    }
    if let Command::Scan { scan_length, .. } = &args.command {
        config = config
            .with_scan_length(*scan_length)
            .context("invalid --scan-length")?;
    }
    Ok(config)
}

fn main() -> Result<()> {
    let args = Args::parse();
    init_logging(args.log_json);
    info!(?args, "parsed CLI arguments");

    let scanner = Scanner::new(build_config(&args)?);

    match &args.command {
        Command::Decode { file } => {
            let decoded = scanner.open(file)?;
            println!(
                "{}\t{} chars{}",
                decoded.label(),
                decoded.text.len(),
                if decoded.had_errors {
                    "\t(replacement characters substituted)"
                } else {
                    ""
                }
            );
        }
        Command::Sentence { file, position } => {
            let decoded = scanner.open(file)?;
            let position = restore_position(&decoded.text, *position);
            let sentence = scanner.sentence(&decoded.text, position);
            println!("{}", sentence.text);
        }
        Command::Scan {
            file,
            position,
            dict,
            ..
        } => {
            let decoded = scanner.open(file)?;
            let words = WordList::load(dict)
                .with_context(|| format!("failed to load word list {}", dict.display()))?;
            info!(headwords = words.len(), "loaded word list");

            let position = restore_position(&decoded.text, *position);
            match scanner.scan(&decoded.text, position, &words) {
                Some(result) => println!("{}", serde_json::to_string_pretty(&result)?),
                None => println!("null"),
            }
        }
        Command::Find { file, needle, from } => {
            let decoded = scanner.open(file)?;
            let mut search = TextSearch::starting_at(*from);
            match search.find_next(&decoded.text, needle) {
                Some(span) => println!("{}\t{}", span.start, span.end),
                None => anyhow::bail!("search text not found: {needle}"),
            }
        }
    }

    Ok(())
}
