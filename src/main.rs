//! newest - report the most recently modified entry under a path.
//!
//! Usage:
//!   newest <PATH>                  Scan and print the newest entry
//!   newest <PATH> --format json    Print the result as JSON
//!   newest --help                  Show help

use std::path::PathBuf;

use clap::{Parser, ValueEnum};
use color_eyre::eyre::{Context, Result};

use newest_scan::Scanner;

#[derive(Parser)]
#[command(
    name = "newest",
    version,
    about = "Report the most recently modified entry under a path",
    long_about = "newest recursively scans a directory tree and prints the \
                  newest modification time seen, the path that produced it, \
                  and the total number of entries visited."
)]
struct Cli {
    /// Path to scan (a directory, or a single file)
    path: PathBuf,

    /// Output format
    #[arg(short, long, default_value = "text")]
    format: OutputFormat,
}

#[derive(Debug, Clone, Copy, ValueEnum, Default)]
enum OutputFormat {
    #[default]
    Text,
    Json,
}

fn main() -> Result<()> {
    color_eyre::install()?;

    let cli = Cli::parse();

    eprintln!("Scanning {}...", cli.path.display());

    let scanner = Scanner::new();
    let result = scanner.scan(&cli.path).context("Scan failed")?;

    match cli.format {
        OutputFormat::Text => {
            if let Some(entry) = &result.newest {
                println!(
                    "{} {}",
                    newest_scan::local_from_epoch(entry.mtime).format("%Y-%m-%d %H:%M:%S %z"),
                    entry.path.display()
                );
            }
            println!("total count: {}", result.total_count);
        }
        OutputFormat::Json => {
            println!("{}", serde_json::to_string_pretty(&result)?);
        }
    }

    Ok(())
}
