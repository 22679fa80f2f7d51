//! Config command - show the effective configuration.
//!
//! Prints the configuration file location and the values in effect,
//! including defaults for anything the file does not set.

use anyhow::Result;
use colored::Colorize;

use crate::config::Config;

/// Arguments for the config command.
#[derive(clap::Args)]
#[command(after_help = "EXAMPLES:\n    \
    promptq config    Show the effective configuration\n\n\
CONFIG FILE:\n    \
    ~/.promptq/config.yaml, for example:\n\n    \
    export_dir: /home/user/datasets\n    \
    image_extensions:\n      \
    - png\n      \
    - jpg")]
pub struct Args {}

/// Executes the config command.
pub fn run(_args: Args) -> Result<()> {
    let path = Config::config_path()?;
    let config = Config::load()?;

    println!("{}", "Configuration".bold());
    println!();

    if path.exists() {
        println!("  {}  {}", "File:".dimmed(), path.display());
    } else {
        println!(
            "  {}  {} {}",
            "File:".dimmed(),
            path.display(),
            "(not found, using defaults)".dimmed()
        );
    }

    println!();
    match &config.export_dir {
        Some(dir) => println!("  {}  {}", "export_dir:".dimmed(), dir.display()),
        None => println!(
            "  {}  {}",
            "export_dir:".dimmed(),
            "(current directory)".dimmed()
        ),
    }
    println!(
        "  {}  {}",
        "image_extensions:".dimmed(),
        config.image_extensions.join(", ")
    );

    Ok(())
}
