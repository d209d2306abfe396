mod error;
mod hasher;
mod output;
mod registry;
mod validate;

use std::path::{Path, PathBuf};
use std::process::ExitCode;

use clap::{CommandFactory, Parser};

use error::HashError;
use registry::{AlgorithmProvider, BuiltinAlgorithms};

#[derive(Parser)]
#[command(name = "hashgen", version, about = "Generate hash values for files")]
struct Cli {
    /// Path to the file to hash
    file: Option<PathBuf>,

    /// Hash algorithm to use
    #[arg(short, long, default_value = "sha256")]
    algorithm: String,

    /// Show file size in output
    #[arg(short, long)]
    size: bool,

    /// List available hash algorithms
    #[arg(short, long)]
    list_algorithms: bool,

    /// Output only the hash value
    #[arg(short, long)]
    quiet: bool,
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    // List mode wins over everything else and never touches the filesystem.
    if cli.list_algorithms {
        println!("Available hash algorithms:");
        for name in BuiltinAlgorithms.names() {
            println!("  {name}");
        }
        return ExitCode::SUCCESS;
    }

    let Some(file) = cli.file.clone() else {
        // Reported through clap so it reads like any other usage error; exits 2.
        Cli::command()
            .error(
                clap::error::ErrorKind::MissingRequiredArgument,
                "File path is required (use --help for usage)",
            )
            .exit();
    };

    match run(&cli, &file, &BuiltinAlgorithms) {
        Ok(report) => {
            println!("{report}");
            ExitCode::SUCCESS
        }
        Err(err) => {
            report_error(&err);
            ExitCode::FAILURE
        }
    }
}

/// Hash-mode pipeline: validate, resolve, stream, format. Nothing is printed
/// from here, so a failure can never leave a partial digest on stdout.
fn run(cli: &Cli, file: &Path, provider: &dyn AlgorithmProvider) -> Result<String, HashError> {
    validate::validate_path(file)?;
    let accumulator = provider.resolve(&cli.algorithm)?;
    let digest = hasher::hash_file(file, accumulator)?;

    if cli.quiet {
        return Ok(digest);
    }

    let size = if cli.size {
        let meta = std::fs::metadata(file).map_err(|e| hasher::access_error(file, e))?;
        Some(meta.len())
    } else {
        None
    };
    Ok(output::format_report(
        &cli.algorithm,
        &digest,
        &file.display().to_string(),
        size,
    ))
}

fn report_error(err: &HashError) {
    match err {
        HashError::UnsupportedAlgorithm(_) => {
            eprintln!("Error: {err}");
            eprintln!("Use --list-algorithms to see available options.");
        }
        HashError::Io { .. } => eprintln!("Unexpected error: {err}"),
        _ => eprintln!("Error: {err}"),
    }
}
