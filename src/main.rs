use clap::{CommandFactory, Parser, Subcommand};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

mod capture;
mod cli;
mod config;
mod export;
mod gallery;
mod notice;
mod storage;

use cli::commands;
use notice::Notice;

/// The main CLI command line interface.
#[derive(Parser)]
#[command(name = "promptq")]
#[command(version)]
#[command(about = "Stage image and prompt pairs locally, export them as JSON datasets")]
#[command(long_about = "promptq keeps a local queue of image + prompt pairs. Entries are\n\
    staged in a SQLite store, exported in one go as a timestamped JSON\n\
    dataset file, and the queue is cleared after a successful export.\n\n\
    Exported files (or any JSON array) can be rendered back as a\n\
    read-only gallery, independent of the live queue.")]
#[command(after_help = "EXAMPLES:\n    \
    promptq add fox.png -p \"a red fox in snow\"   Queue an image + prompt pair\n    \
    promptq pending                              List queued entries\n    \
    promptq status                               Show queue state\n    \
    promptq export                               Save the queue to a JSON file\n    \
    promptq gallery <file.json>                  Render an exported file\n\n\
    For more information about a command, run 'promptq <command> --help'.")]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Enable verbose output for debugging
    #[arg(short, long, global = true)]
    verbose: bool,
}

/// Available CLI subcommands.
#[derive(Subcommand)]
enum Commands {
    /// Queue an image + prompt pair
    #[command(long_about = "Validates the selected image and prompt, then stores a new\n\
        pending entry in the local queue. Only the image file name is\n\
        recorded; the image itself is not copied.")]
    Add(commands::add::Args),

    /// List pending entries
    #[command(long_about = "Displays the entries currently waiting for export, with their\n\
        ids, creation times, image names, and prompts.")]
    Pending(commands::pending::Args),

    /// Show queue status and recent entries
    #[command(long_about = "Displays the store location, the pending entry count, and the\n\
        most recently queued entries.")]
    Status,

    /// Export the queue to a timestamped JSON file
    #[command(long_about = "Serializes all pending entries to a pretty-printed JSON file\n\
        named images_prompts_<timestamp>.json and clears the queue once\n\
        the file has been written. An empty queue is a no-op.")]
    Export(commands::export::Args),

    /// Render an exported JSON file as a gallery
    #[command(long_about = "Reads a previously exported dataset file (or any JSON file\n\
        whose top-level value is an array) and prints one card per\n\
        entry. The live queue is not touched.")]
    Gallery(commands::gallery::Args),

    /// Show the effective configuration
    #[command(long_about = "Displays the configuration file location and the values in\n\
        effect, including defaults for anything the file does not set.")]
    Config(commands::config::Args),

    /// Generate shell completion scripts
    Completions(commands::completions::Args),
}

fn main() {
    let cli = Cli::parse();

    // Initialize logging
    let filter = if cli.verbose {
        "promptq=debug"
    } else {
        "promptq=info"
    };

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| filter.into()),
        )
        .with(tracing_subscriber::fmt::layer().without_time())
        .init();

    let result = match cli.command {
        Commands::Add(args) => commands::add::run(args),
        Commands::Pending(args) => commands::pending::run(args),
        Commands::Status => commands::status::run(),
        Commands::Export(args) => commands::export::run(args),
        Commands::Gallery(args) => commands::gallery::run(args),
        Commands::Config(args) => commands::config::run(args),
        Commands::Completions(args) => {
            let mut cmd = Cli::command();
            commands::completions::generate_completions(&mut cmd, args.shell);
            Ok(())
        }
    };

    // Flow errors become a rendered notice rather than a raw panic or
    // an unformatted Display chain.
    if let Err(err) = result {
        notice::render(&Notice::error(format!("{err:#}")));
        std::process::exit(1);
    }
}
