//! filemanifest - deterministic file inventories for release trees.
//!
//! Usage:
//!   fman <ROOT>                      Inventory a directory tree
//!   fman <ROOT> --format json        JSON export instead of the table
//!   fman <ROOT> --output FILE        Write to a file instead of stdout
//!   fman --help                      Show help
//!
//! The table goes to stdout; progress and the final summary go to
//! stderr so the inventory itself stays clean for piping and diffing.

use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::PathBuf;

use clap::{Parser, ValueEnum};
use color_eyre::eyre::{Context, Result};

use filemanifest_core::Inventory;
use filemanifest_report::{write_table, DEFAULT_SEPARATOR};
use filemanifest_scan::{InventoryScanner, ScanConfig};

#[derive(Parser)]
#[command(
    name = "filemanifest",
    version,
    about = "Build a diffable inventory of every file under a directory",
    long_about = "filemanifest walks a directory tree and emits one record per file:\n\
                  relative path, size, last-write time, SHA-256 content hash, and\n\
                  (for .exe/.dll files) version strings, build timestamp and linker\n\
                  version read straight from the PE header."
)]
struct Cli {
    /// Root directory to inventory
    root: Option<PathBuf>,

    /// Field separator for table output
    #[arg(short, long, default_value_t = DEFAULT_SEPARATOR)]
    separator: char,

    /// Output format
    #[arg(short, long, default_value = "table")]
    format: OutputFormat,

    /// Write output to a file instead of stdout
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Maximum directory depth to traverse
    #[arg(long)]
    max_depth: Option<u32>,

    /// Follow symbolic links
    #[arg(long)]
    follow_symlinks: bool,

    /// Skip hidden files and directories
    #[arg(long)]
    skip_hidden: bool,

    /// File name patterns to skip (repeatable; `name`, `prefix*`, `*suffix`)
    #[arg(long, value_name = "PATTERN")]
    ignore: Vec<String>,

    /// Number of worker threads (0 = auto)
    #[arg(short, long, default_value = "0")]
    threads: usize,
}

#[derive(Debug, Clone, Copy, ValueEnum, Default)]
enum OutputFormat {
    #[default]
    Table,
    Json,
}

fn main() -> Result<()> {
    color_eyre::install()?;

    let cli = Cli::parse();

    // A missing root is the one distinguished usage error: exit 1
    // before any work begins.
    let Some(root) = cli.root else {
        eprintln!("error: missing <ROOT> directory");
        eprintln!("usage: fman <ROOT> [OPTIONS]");
        std::process::exit(1);
    };

    let config = ScanConfig::builder()
        .root(root)
        .follow_symlinks(cli.follow_symlinks)
        .include_hidden(!cli.skip_hidden)
        .max_depth(cli.max_depth)
        .ignore_patterns(cli.ignore.clone())
        .threads(cli.threads)
        .build()
        .context("Invalid configuration")?;

    eprintln!("Scanning {}...", config.root.display());

    let scanner = InventoryScanner::new();
    let inventory = scanner.scan(&config).context("Scan failed")?;

    match cli.output {
        Some(path) => {
            let file = File::create(&path)
                .with_context(|| format!("Cannot create {}", path.display()))?;
            let mut out = BufWriter::new(file);
            render(&inventory, cli.format, cli.separator, &mut out)?;
            out.flush()?;
            eprintln!("Wrote {}", path.display());
        }
        None => {
            let stdout = io::stdout();
            let mut out = BufWriter::new(stdout.lock());
            render(&inventory, cli.format, cli.separator, &mut out)?;
            out.flush()?;
        }
    }

    eprintln!(
        " {} files, {} in {:.2}s",
        inventory.total_files(),
        format_size(inventory.total_size()),
        inventory.scan_duration.as_secs_f64()
    );
    if inventory.has_warnings() {
        eprintln!(" {} warning(s) during scan", inventory.warnings.len());
    }

    Ok(())
}

/// Render the inventory in the selected format.
fn render(
    inventory: &Inventory,
    format: OutputFormat,
    separator: char,
    out: &mut impl Write,
) -> Result<()> {
    match format {
        OutputFormat::Table => write_table(&inventory.entries, separator, out)?,
        OutputFormat::Json => {
            serde_json::to_writer_pretty(&mut *out, &inventory.entries)?;
            writeln!(out)?;
        }
    }
    Ok(())
}

/// Format size in human-readable form.
fn format_size(bytes: u64) -> String {
    humansize::format_size(bytes, humansize::BINARY)
}
