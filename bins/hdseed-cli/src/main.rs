//! hdseed: mnemonic phrases and HD keys from the command line.
//!
//! Generates and validates BIP-39 phrases, prints seeds, and derives
//! secp256k1 key pairs along BIP-32 paths. Passphrases are read without echo.

mod config;
mod output;

use std::io::{self, IsTerminal, Read, Write};

use anyhow::{Context, Result, bail};
use clap::{Args, Parser, Subcommand};
use hdseed_core::{Mnemonic, derive_key_pair, derive_seed, validate};
use tracing::debug;

use crate::config::Config;
use crate::output::Report;

/// Mnemonic and hierarchical deterministic key tool.
#[derive(Parser)]
#[command(name = "hdseed")]
#[command(version, about = "BIP-39 mnemonics and BIP-32 key derivation.")]
struct Cli {
    /// Print a JSON object instead of a labeled listing.
    #[arg(long, global = true)]
    json: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Generate a new mnemonic phrase.
    Generate(GenerateArgs),
    /// Check a mnemonic phrase and report why it is invalid.
    Validate(PhraseArgs),
    /// Print the 64-byte seed for a mnemonic phrase.
    Seed(SeedArgs),
    /// Derive the key pair at a path.
    Derive(DeriveArgs),
}

#[derive(Args)]
struct GenerateArgs {
    /// Entropy size in bits (128, 160, 192, 224 or 256).
    #[arg(short, long)]
    bits: Option<usize>,
}

#[derive(Args)]
struct PhraseArgs {
    /// Mnemonic words. If not provided, read from stdin.
    words: Vec<String>,
}

#[derive(Args)]
struct SeedArgs {
    #[command(flatten)]
    phrase: PhraseArgs,

    /// Prompt for a BIP-39 passphrase.
    #[arg(short, long)]
    passphrase: bool,
}

#[derive(Args)]
struct DeriveArgs {
    #[command(flatten)]
    phrase: PhraseArgs,

    /// Derivation path (default: $HDSEED_DEFAULT_PATH or m/44'/195'/0'/0/0).
    #[arg(long)]
    path: Option<String>,

    /// Prompt for a BIP-39 passphrase.
    #[arg(short, long)]
    passphrase: bool,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_writer(io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn")),
        )
        .init();

    let cli = Cli::parse();
    let config = Config::from_env()?;
    debug!(path = %config.default_path, bits = config.bit_size, "configuration loaded");

    let report = match cli.command {
        Commands::Generate(args) => generate(args, &config)?,
        Commands::Validate(args) => validate_phrase(args)?,
        Commands::Seed(args) => seed(args)?,
        Commands::Derive(args) => derive(args, &config)?,
    };

    report.print(cli.json).context("Failed to write output")
}

/// Generate a mnemonic from OS entropy.
fn generate(args: GenerateArgs, config: &Config) -> Result<Report> {
    let bits = args.bits.unwrap_or(config.bit_size);
    let mnemonic = Mnemonic::generate(bits).context("Failed to generate mnemonic")?;

    let mut report = Report::new("MNEMONIC GENERATED")
        .field("bits", bits)
        .field("words", mnemonic.word_count())
        .field("mnemonic", mnemonic.phrase());
    if let Some(created_at) = mnemonic.created_at() {
        report = report.field("created_at", created_at.format("%Y-%m-%d %H:%M:%S UTC"));
    }
    Ok(report)
}

fn validate_phrase(args: PhraseArgs) -> Result<Report> {
    let phrase = read_phrase(args)?;
    validate(&phrase).context("Invalid mnemonic")?;
    Ok(Report::new("MNEMONIC VALID").field("words", phrase.split_whitespace().count()))
}

fn seed(args: SeedArgs) -> Result<Report> {
    let phrase = read_phrase(args.phrase)?;
    let passphrase = read_passphrase(args.passphrase)?;
    let seed = derive_seed(&phrase, &passphrase).context("Failed to derive seed")?;
    Ok(Report::new("SEED").field("seed", hex::encode_upper(seed.as_bytes())))
}

/// Walk a derivation path and print the terminal key pair.
fn derive(args: DeriveArgs, config: &Config) -> Result<Report> {
    let phrase = read_phrase(args.phrase)?;
    let passphrase = read_passphrase(args.passphrase)?;
    let path = match args.path {
        Some(path) => path,
        None => config.default_path.to_string(),
    };

    let derived = derive_key_pair(&phrase, &passphrase, &path)
        .with_context(|| format!("Failed to derive key at {path}"))?;
    let info = derived.info();

    Ok(Report::new("KEY DERIVED")
        .field("mnemonic", &phrase)
        .field("path", &info.path)
        .field("depth", info.depth)
        .field("parent_fingerprint", &info.parent_fingerprint)
        .field("child_number", info.child_number)
        .field("private_key", hex::encode_upper(derived.key_pair.private_key()))
        .field("public_key", hex::encode_upper(derived.key_pair.public_key())))
}

/// Join positional words, or read the phrase from stdin when none were given.
///
/// The result is single-spaced with no leading or trailing whitespace.
fn read_phrase(args: PhraseArgs) -> Result<String> {
    let input = if args.words.is_empty() {
        let stdin = io::stdin();
        let mut input = String::new();
        if stdin.is_terminal() {
            eprint!("Enter mnemonic: ");
            io::stderr().flush().context("Failed to flush prompt")?;
            stdin
                .read_line(&mut input)
                .context("Failed to read mnemonic")?;
        } else {
            stdin
                .lock()
                .read_to_string(&mut input)
                .context("Failed to read mnemonic")?;
        }
        input
    } else {
        args.words.join(" ")
    };

    let phrase = normalize_phrase(&input);
    if phrase.is_empty() {
        bail!("No mnemonic phrase supplied");
    }
    Ok(phrase)
}

fn read_passphrase(prompt: bool) -> Result<String> {
    if prompt {
        prompt_password("Enter passphrase")
    } else {
        Ok(String::new())
    }
}

/// Prompt for a secret without echoing it.
fn prompt_password(prompt: &str) -> Result<String> {
    rpassword::prompt_password(format!("{}: ", prompt)).context("Failed to read passphrase")
}

fn normalize_phrase(phrase: &str) -> String {
    phrase.split_whitespace().collect::<Vec<_>>().join(" ")
}
