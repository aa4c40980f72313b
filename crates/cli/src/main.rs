mod cmd;
mod logging;
mod prompt;

use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

#[derive(Debug, Parser)]
#[command(name = "rota", version, about = "Collects monthly availability and exports it as CSV")]
struct Cli {
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// Validate configuration and print resolved settings
    Doctor,

    /// Run the availability wizard
    Run(RunArgs),
}

#[derive(Debug, Args)]
pub struct RunArgs {
    /// Name used in the export header and the default file name
    #[arg(long)]
    pub name: Option<String>,

    /// Target month 1-12 (defaults to next month)
    #[arg(long)]
    pub month: Option<u32>,

    /// Target year (defaults to the target month's year)
    #[arg(long)]
    pub year: Option<i32>,

    /// Where to write the CSV
    #[arg(long)]
    pub output: Option<PathBuf>,

    /// Start every slot as available
    #[arg(long)]
    pub free_by_default: bool,

    /// Apply --pattern flags without prompting
    #[arg(long)]
    pub batch: bool,

    /// Availability pattern "DATES=HOURS", e.g. "1 22=10 15" or "All=9 13"
    #[arg(long = "pattern", value_name = "DATES=HOURS")]
    pub patterns: Vec<String>,
}

fn main() {
    let cli = Cli::parse();

    match cli.command {
        Commands::Doctor => cmd::doctor::run(cli.config.as_deref()),
        Commands::Run(args) => cmd::run::run(cli.config.as_deref(), args),
    }
}
