//! packlint CLI - Terraria resource pack validator

mod report;

use std::path::{Path, PathBuf};
use std::process;
use std::time::Instant;

use anyhow::Context;
use clap::{Parser, Subcommand};
use colored::*;
use packlint_core::{catalog, validate_path, ContentDump, PackSource, Severity};

#[derive(Parser)]
#[command(name = "packlint")]
#[command(author, version, about, long_about = None)]
#[command(
    about = "Terraria resource pack validator",
    long_about = "Validate a Terraria resource pack against the base game's content tables.\n\nChecks: manifest \u{2022} icon \u{2022} images \u{2022} localization \u{2022} music \u{2022} sounds"
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Pack directory or Steam Workshop ID (defaults to current directory)
    #[arg(default_value = ".")]
    pack: String,

    /// Strict mode (treat warnings as errors)
    #[arg(short, long)]
    strict: bool,

    /// Content dump artifact to validate against, instead of the embedded one
    #[arg(long, value_name = "FILE")]
    dump: Option<PathBuf>,
}

#[derive(Subcommand)]
enum Commands {
    /// Validate a resource pack
    Validate {
        /// Pack directory or Steam Workshop ID
        #[arg(default_value = ".")]
        pack: String,
    },

    /// List every diagnostic code in the catalog
    Codes,
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    let result = match &cli.command {
        Some(Commands::Validate { pack }) => validate_command(pack, &cli),
        Some(Commands::Codes) => codes_command(),
        None => validate_command(&cli.pack, &cli),
    };

    match result {
        Ok(exit_code) => process::exit(exit_code),
        Err(e) => {
            eprintln!("{} {:#}", "Error:".red().bold(), e);
            process::exit(1);
        }
    }
}

fn validate_command(arg: &str, cli: &Cli) -> anyhow::Result<i32> {
    let data = load_dump(cli.dump.as_deref())?;
    let root = PackSource::parse(arg).resolve()?;

    tracing::debug!(pack = %root.display(), "validating resource pack");
    let started = Instant::now();
    let pack = validate_path(root, &data);
    let elapsed = started.elapsed();

    report::print_report(&pack, elapsed);

    let errors = pack.sink().count(Severity::Error);
    let warnings = pack.sink().count(Severity::Warn);
    if errors > 0 || (cli.strict && warnings > 0) {
        Ok(1)
    } else {
        Ok(0)
    }
}

fn load_dump(path: Option<&Path>) -> anyhow::Result<ContentDump> {
    match path {
        Some(path) => ContentDump::from_path(path)
            .with_context(|| format!("failed to load content dump '{}'", path.display())),
        None => Ok(ContentDump::embedded()),
    }
}

fn codes_command() -> anyhow::Result<i32> {
    for spec in catalog::CATALOG {
        println!(
            "{}  {:5}  {}",
            spec.code.bold(),
            spec.severity.keyword(),
            spec.template
        );
    }
    Ok(0)
}
