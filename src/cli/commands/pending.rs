//! Pending command - list queued entries.
//!
//! Displays the entries currently waiting for export, as a table or as
//! JSON for scripting.

use anyhow::Result;
use colored::Colorize;

use crate::cli::OutputFormat;
use crate::storage::Database;

/// Arguments for the pending command.
#[derive(clap::Args)]
#[command(after_help = "EXAMPLES:\n    \
    promptq pending                List all pending entries\n    \
    promptq pending --limit 10     Show at most 10 entries\n    \
    promptq pending --format json  Output as JSON")]
pub struct Args {
    /// Maximum number of entries to display
    #[arg(short, long, value_name = "N")]
    pub limit: Option<usize>,

    /// Output format: text (default), json
    #[arg(short, long, value_enum, default_value = "text")]
    pub format: OutputFormat,
}

/// Executes the pending command.
pub fn run(args: Args) -> Result<()> {
    let db = Database::open_default()?;

    let mut entries = db.list_entries()?;
    if let Some(limit) = args.limit {
        entries.truncate(limit);
    }

    if entries.is_empty() {
        println!("{}", "No pending entries.".dimmed());
        println!();
        println!("Run 'promptq add <image> --prompt \"...\"' to queue one.");
        return Ok(());
    }

    match args.format {
        OutputFormat::Json => {
            let json = serde_json::to_string_pretty(&entries)?;
            println!("{json}");
        }
        OutputFormat::Text => {
            // Column widths for consistent alignment
            const ID_WIDTH: usize = 15;
            const CREATED_WIDTH: usize = 19;
            const IMAGE_WIDTH: usize = 24;

            println!(
                "{}",
                format!(
                    "{:<ID_WIDTH$}  {:<CREATED_WIDTH$}  {:<IMAGE_WIDTH$}  {}",
                    "ID", "CREATED", "IMAGE", "PROMPT"
                )
                .bold()
            );

            for entry in &entries {
                let created = entry
                    .creation_datetime()
                    .map(|dt| dt.format("%Y-%m-%d %H:%M:%S").to_string())
                    .unwrap_or_else(|| entry.creation_date.clone());

                println!(
                    "{:<ID_WIDTH$}  {:<CREATED_WIDTH$}  {:<IMAGE_WIDTH$}  {}",
                    entry.id.cyan(),
                    created,
                    entry.image_file_name,
                    truncate(&entry.prompt, 60)
                );
            }

            println!();
            println!(
                "{}",
                format!(
                    "{} {}",
                    entries.len(),
                    if entries.len() == 1 { "entry" } else { "entries" }
                )
                .dimmed()
            );
        }
    }

    Ok(())
}

/// Truncates a string to `max` characters, appending an ellipsis.
fn truncate(s: &str, max: usize) -> String {
    if s.chars().count() <= max {
        s.to_string()
    } else {
        let cut: String = s.chars().take(max.saturating_sub(3)).collect();
        format!("{cut}...")
    }
}
