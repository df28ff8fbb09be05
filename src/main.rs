use std::{path::PathBuf, time::Instant};

use anyhow::Context;
use clap::Parser;
use tracing::{debug, info};
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{fmt, EnvFilter, Layer};
use viper::{display_error, parse_source, tokenizer::tokenizer::tokenize, SourceFile};

fn main() -> anyhow::Result<()> {
    initialize_logging();

    let cli = Cli::parse();
    let file = SourceFile::load(&cli.source)
        .with_context(|| format!("failed to read {}", cli.source.display()))?;
    debug!(file = %file.name, bytes = file.content.len(), "Read input file");

    if cli.tokens {
        let (tokens, _) = tokenize(&file);
        for token in &tokens {
            println!("{}", token);
        }
    }

    let start = Instant::now();
    let result = parse_source(&file);
    info!(elapsed = ?start.elapsed(), nodes = result.ast.len(), "Parsed");

    if !cli.quiet {
        print!("{}", result.ast);
    }

    for error in &result.errors {
        display_error(error, &file);
    }

    if result.has_errors() {
        anyhow::bail!(
            "{} produced {} diagnostic(s)",
            file.name,
            result.errors.len()
        );
    }

    Ok(())
}

fn initialize_logging() {
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("off"));

    tracing_subscriber::registry()
        .with(
            fmt::layer()
                .with_writer(std::io::stderr)
                .with_filter(env_filter),
        )
        .init();
}

/// Tokenizes and parses a Viper source file, printing the syntax tree and
/// any diagnostics.
#[derive(clap::Parser)]
#[clap(name = "viper", version)]
struct Cli {
    /// Path to the source file
    source: PathBuf,

    /// Print the token stream before parsing
    #[clap(long)]
    tokens: bool,

    /// Do not print the syntax tree
    #[clap(short, long)]
    quiet: bool,
}
