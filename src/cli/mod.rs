//! modelfix CLI - command-line interface for fixing model texture paths

use std::path::PathBuf;

use clap::Parser;
use tracing::Level;

use crate::batch::fix_directory;
use crate::resource::PathPrefix;

#[derive(Parser)]
#[command(name = "modelfix")]
#[command(version)]
#[command(about = "Fixes texture paths in Minecraft Java models", long_about = None)]
struct Cli {
    /// A path to a folder containing Minecraft Java models
    model_folder: PathBuf,

    /// The folder to prefix texture paths with (block or item)
    prefix_with: PathPrefix,

    /// Indentation to use when rewriting the model files
    #[arg(long, default_value_t = 4)]
    indent: usize,

    /// Set the log level (error, warn, info, debug, trace)
    #[arg(long, default_value = "info")]
    log: String,
}

/// Run the modelfix CLI
pub fn run_cli() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // Setup logging
    let level: Level = cli
        .log
        .parse()
        .map_err(|_| anyhow::anyhow!("invalid log level: {}", cli.log))?;
    tracing_subscriber::fmt().with_max_level(level).init();

    if !cli.model_folder.is_dir() {
        anyhow::bail!("not a directory: {}", cli.model_folder.display());
    }

    let result = fix_directory(&cli.model_folder, cli.prefix_with, cli.indent);

    println!(
        "Fixed {} of {} model files",
        result.success_count,
        result.success_count + result.fail_count
    );

    Ok(())
}
