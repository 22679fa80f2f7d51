//! Export command - save the queue to a timestamped JSON file.
//!
//! Writes every pending entry to `images_prompts_<timestamp>.json` and
//! clears the queue once the file is on disk. An empty queue is a no-op,
//! not an error.

use anyhow::Result;
use colored::Colorize;
use std::path::PathBuf;

use crate::config::Config;
use crate::export::{export_pending, ExportOutcome};
use crate::notice::{self, Notice};
use crate::storage::Database;

/// Arguments for the export command.
#[derive(clap::Args)]
#[command(after_help = "EXAMPLES:\n    \
    promptq export                     Export to the current directory\n    \
    promptq export -o ~/datasets       Export to a specific directory\n    \
    promptq export --keep              Export without clearing the queue")]
pub struct Args {
    /// Directory to write the dataset file to
    #[arg(short, long, value_name = "DIR")]
    #[arg(long_help = "Directory the dataset file is written to. Falls back to\n\
        'export_dir' from the configuration, then to the current\n\
        working directory.")]
    pub output_dir: Option<PathBuf>,

    /// Keep the queue after exporting instead of clearing it
    #[arg(long)]
    #[arg(long_help = "By default the queue is cleared once the dataset file has\n\
        been written. With this flag the entries stay queued and the\n\
        next export will include them again.")]
    pub keep: bool,
}

/// Executes the export command.
pub fn run(args: Args) -> Result<()> {
    let config = Config::load()?;
    let db = Database::open_default()?;

    let output_dir = args
        .output_dir
        .or(config.export_dir)
        .map_or_else(std::env::current_dir, Ok)?;

    match export_pending(&db, &output_dir, args.keep)? {
        ExportOutcome::NothingToSave => {
            notice::render(&Notice::info("No pending entries - nothing to save."));
        }
        ExportOutcome::Saved {
            path,
            count,
            cleared,
        } => {
            notice::render(&Notice::success(format!(
                "Exported {count} {} to {}",
                if count == 1 { "entry" } else { "entries" },
                path.display()
            )));

            if cleared {
                println!("  {} {}", "Queue cleared. Pending entries:".dimmed(), 0);
            } else {
                println!(
                    "  {} {}",
                    "Queue kept. Pending entries:".dimmed(),
                    db.pending_count()?
                );
            }
        }
    }

    Ok(())
}
