//! CLI entry and dispatch.

use std::io::Write;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::Parser;
use tracing::info;
use turnlog_core::{CanonicalJson, NullSurface, StdFileSystem, TranscriptController, Turn};

use crate::logging;

#[derive(Parser)]
#[command(name = "turnlog")]
#[command(version)]
#[command(about = "Transcript viewer for prompt/completion logs")]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Transcript file to open in the viewer (shorthand for `view FILE`)
    file: Option<PathBuf>,
}

#[derive(clap::Subcommand)]
enum Commands {
    /// Open a transcript in the interactive viewer
    View {
        /// Transcript file to load
        file: Option<PathBuf>,

        /// Start with a small built-in sample transcript
        #[arg(long, conflicts_with = "file")]
        demo: bool,
    },
    /// Print a transcript as canonical JSON to stdout
    Cat {
        /// Transcript file to print
        file: PathBuf,
    },
}

/// Parses arguments and dispatches.
///
/// # Errors
/// Returns an error when the invoked command fails.
pub fn run() -> Result<()> {
    let cli = Cli::parse();
    let _log_guard = logging::init();

    let command = match &cli.command {
        Some(Commands::Cat { .. }) => "cat",
        Some(Commands::View { .. }) | None => "view",
    };
    info!(command, "dispatching");

    match cli.command {
        Some(Commands::View { file, demo }) => run_view(file, demo),
        Some(Commands::Cat { file }) => run_cat(&file),
        None => run_view(cli.file, false),
    }
}

fn run_view(file: Option<PathBuf>, demo: bool) -> Result<()> {
    let seed = if demo { sample_turns() } else { Vec::new() };
    turnlog_tui::run_viewer(file, seed)
}

fn run_cat(file: &Path) -> Result<()> {
    let mut controller = TranscriptController::new(
        NullSurface,
        DiscardClipboard,
        StdFileSystem,
    );
    controller
        .load_path(file)
        .with_context(|| format!("Failed to load transcript from {}", file.display()))?;

    let json = controller.store().all().to_canonical_json();
    let mut stdout = std::io::stdout();
    writeln!(stdout, "{json}")?;
    Ok(())
}

/// Clipboard stub for non-interactive commands that never copy.
struct DiscardClipboard;

impl turnlog_core::ClipboardPort for DiscardClipboard {
    fn set_text(&mut self, _text: &str) -> Result<(), turnlog_core::ClipboardError> {
        Ok(())
    }
}

fn sample_turns() -> Vec<Turn> {
    vec![
        Turn::new(
            1_633_036_800.0,
            "User1",
            "This is a sample prompt 1.",
            "This is a sample completion 1.",
        ),
        Turn::new(
            1_633_036_900.0,
            "User2",
            "This is a sample prompt 2.",
            "This is a sample completion 2.",
        ),
        Turn::new(
            1_633_037_000.0,
            "User3",
            "This is a sample prompt 3.",
            "This is a sample completion 3.",
        ),
    ]
}
