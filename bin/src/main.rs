//! skein CLI - Yarn calculator and community API server for knitters.

use anyhow::Result;
use clap::{CommandFactory, Parser, Subcommand};
use std::path::PathBuf;

mod commands;
mod logging;

#[derive(Parser)]
#[command(name = "skein")]
#[command(about = "Yarn calculator and community API server for knitters", long_about = None)]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Verbosity level (-v, -vv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    /// Quiet mode (only warnings and errors are logged)
    #[arg(short, long, global = true)]
    quiet: bool,

    /// Configuration file. Defaults to the platform config directory.
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,
}

#[derive(Subcommand)]
enum Commands {
    /// Estimate the yarn needed for a project
    Estimate {
        /// Project type (hat, scarf, sweater, blanket)
        pattern_type: String,

        /// Size (baby, child, adult for hats and sweaters; short, medium, long
        /// for scarves; baby, throw, full for blankets)
        size: String,

        /// Yarn weight (lace, fingering, dk, worsted, chunky)
        yarn_weight: String,

        /// Stitches per inch (1-20). Defaults to 4.
        #[arg(short, long)]
        gauge: Option<i64>,

        /// Print the result as JSON
        #[arg(long)]
        json: bool,
    },

    /// Show the yarn weight and project size tables
    Table,

    /// Run the HTTP API server
    Serve {
        /// Listen address, overriding the config file (e.g., 0.0.0.0:8000)
        #[arg(short, long)]
        address: Option<String>,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    logging::init(cli.verbose, cli.quiet);

    // Show help if no command provided
    let Some(command) = cli.command else {
        Cli::command().print_help()?;
        return Ok(());
    };

    match command {
        Commands::Estimate {
            pattern_type,
            size,
            yarn_weight,
            gauge,
            json,
        } => commands::estimate::estimate(
            cli.config.as_deref(),
            &pattern_type,
            &size,
            &yarn_weight,
            gauge,
            json,
        ),
        Commands::Table => {
            commands::table::show_table();
            Ok(())
        }
        Commands::Serve { address } => {
            commands::serve::serve(cli.config.as_deref(), address).await
        }
    }
}
