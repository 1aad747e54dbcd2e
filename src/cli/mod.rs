//! Command-line interface for proyecto-dump
//!
//! `proyecto-dump [PATH]` resolves the root, collects files, writes the dump
//! and reports progress on standard output.

use anyhow::Result;
use clap::Parser;
use std::io::Write;
use std::path::PathBuf;
use tracing::Level;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use proyecto_dump::config::load_config;
use proyecto_dump::fetch::resolve_root;
use proyecto_dump::render::write_dump;
use proyecto_dump::scan::scan_repository;
use proyecto_dump::{Config, DUMP_FILE_NAME};

/// Dump a project's source files into a single text file
#[derive(Parser)]
#[command(name = "proyecto-dump")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Root directory to scan (defaults to the parent of the executable's directory)
    #[arg(value_name = "PATH")]
    path: Option<PathBuf>,

    /// Override extensions or ignored directories from a TOML/YAML file
    #[arg(short = 'c', long, value_name = "FILE")]
    config: Option<PathBuf>,

    /// Enable verbose logging (sets log level to DEBUG)
    #[arg(short, long)]
    verbose: bool,
}

pub fn run() -> Result<()> {
    let cli = Cli::parse();

    // RUST_LOG in the environment always takes precedence; --verbose falls back to DEBUG.
    let filter = if cli.verbose {
        EnvFilter::from_default_env().add_directive(Level::DEBUG.into())
    } else {
        EnvFilter::from_default_env().add_directive(Level::WARN.into())
    };
    let _ = tracing_subscriber::registry()
        .with(fmt::layer().with_writer(std::io::stderr))
        .with(filter)
        .try_init();

    let root = resolve_root(cli.path.as_deref())?;
    let config = match &cli.config {
        Some(path) => load_config(path)?,
        None => Config::default(),
    };
    let out = root.join(DUMP_FILE_NAME);

    report(format_args!("Analyzing project at: {}", root.display()))?;
    let (mut files, stats) = scan_repository(&root, &config)?;
    tracing::debug!(
        "scan: {} files seen, {} skipped by extension, {} dirs pruned, {} walk errors",
        stats.files_seen,
        stats.files_skipped_extension,
        stats.dirs_pruned,
        stats.walk_errors
    );
    report(format_args!("Found {} files. Writing to {}...", files.len(), out.display()))?;

    let summary = write_dump(&out, &mut files)?;
    tracing::debug!(
        "dump: {} entries, {} bytes written to {}",
        summary.files_written,
        summary.bytes_written,
        out.display()
    );
    if summary.read_errors > 0 {
        tracing::warn!("{} file(s) could not be read; see [ERROR ...] entries", summary.read_errors);
    }

    report(format_args!("OK. Project dump saved to: {}", out.display()))?;
    Ok(())
}

/// Print a progress line and flush so watchers see it immediately.
fn report(line: std::fmt::Arguments<'_>) -> Result<()> {
    let mut stdout = std::io::stdout().lock();
    writeln!(stdout, "{line}")?;
    stdout.flush()?;
    Ok(())
}
