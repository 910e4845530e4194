use std::fs;
use std::io;
use std::path::PathBuf;

use anyhow::Context;
use clap::{CommandFactory, Parser};
use clap_complete::Shell;
use owo_colors::OwoColorize;
use sightline_core::{Sightline, SightlineConfig};
use tracing::debug;
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

mod echo;

const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Collect the visible text of numbered content folders into one file
#[derive(Parser, Debug)]
#[command(name = "sightline")]
#[command(author = "Sightline Contributors")]
#[command(version)]
#[command(about = "Collect the visible text of numbered content folders into one file", long_about = None)]
struct Args {
    /// Root directory holding the numbered folders
    #[arg(long, default_value = ".", value_name = "DIR")]
    root: PathBuf,

    /// Output file
    #[arg(short, long, default_value = "pleas_visible.txt", value_name = "FILE")]
    out: PathBuf,

    /// Write words instead of text
    #[arg(long)]
    words: bool,

    /// With --words, write one word per line
    #[arg(long)]
    one_per_line: bool,

    /// Prefix each section with a ----- NNN ----- marker
    #[arg(long)]
    headers: bool,

    /// Print a line naming the output file and section count
    #[arg(long)]
    log: bool,

    /// Print the run summary as JSON on stdout
    #[arg(long)]
    json: bool,

    /// Suppress warnings
    #[arg(short, long)]
    quiet: bool,

    /// Enable debug logging
    #[arg(short, long)]
    verbose: bool,

    /// Generate shell completion script
    #[arg(long, value_name = "SHELL")]
    completions: Option<Shell>,
}

impl Args {
    fn config(&self) -> SightlineConfig {
        SightlineConfig::builder()
            .words(self.words)
            .one_per_line(self.one_per_line)
            .headers(self.headers)
            .build()
    }
}

/// Install a stderr subscriber when `--verbose` or `RUST_LOG` asks for one
fn init_tracing(verbose: bool) {
    let from_env = std::env::var_os(EnvFilter::DEFAULT_ENV).is_some();
    if !verbose && !from_env {
        return;
    }

    let filter = if from_env {
        EnvFilter::from_default_env()
    } else {
        EnvFilter::new("sightline=debug,sightline_core=debug")
    };

    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer().with_writer(io::stderr))
        .init();
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    if let Some(shell) = args.completions {
        clap_complete::generate(shell, &mut Args::command(), "sightline", &mut io::stdout());
        return Ok(());
    }

    init_tracing(args.verbose);
    debug!(?args, "parsed arguments");

    if args.verbose {
        echo::print_banner();
        echo::print_step(1, 2, &format!("Extracting visible text under {}", args.root.display().bright_white()));
    }

    let sightline = Sightline::with_config(args.config());
    debug!(config = ?sightline.config(), "extracting");

    let extraction = sightline
        .extract_root(&args.root)
        .with_context(|| format!("Failed to extract from root: {}", args.root.display()))?;

    if !args.quiet {
        for diagnostic in &extraction.diagnostics {
            echo::print_warning(&diagnostic.to_string());
        }
    }

    if args.verbose {
        echo::print_summary(&extraction.summary());
        echo::print_step(2, 2, &format!("Writing {}", args.out.display().bright_white()));
        eprintln!("  {} {}\n", "Size:".dimmed(), echo::format_size(extraction.document.len()).bright_white());
    }

    fs::write(&args.out, &extraction.document)
        .with_context(|| format!("Failed to write to file: {}", args.out.display()))?;

    if args.json {
        let report = extraction.to_json().context("Failed to build run summary")?;
        println!(
            "{}",
            serde_json::to_string_pretty(&report).context("Failed to serialize run summary")?
        );
    } else if args.log {
        let written = fs::canonicalize(&args.out).unwrap_or_else(|_| args.out.clone());
        echo::print_written(&written, extraction.sections.len());
    }

    Ok(())
}
