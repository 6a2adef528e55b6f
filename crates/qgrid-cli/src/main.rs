//! qgrid Command-Line Interface
//!
//! Checks circuit grid configurations and prints what the library crates
//! derive from them: routed control wires and the simulator program.

#[global_allocator]
static GLOBAL: mimalloc::MiMalloc = mimalloc::MiMalloc;

use clap::{Parser, Subcommand};
use console::style;
use tracing_subscriber::EnvFilter;

mod commands;

use commands::{program, route, validate, version};

/// qgrid - editable quantum circuit grids
#[derive(Parser)]
#[command(name = "qgrid")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Increase verbosity (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Validate a circuit configuration
    Validate {
        /// Configuration file (JSON or YAML)
        #[arg(short, long)]
        input: String,
    },

    /// Print the routed control wires of a grid
    Route {
        /// Configuration file (JSON or YAML)
        #[arg(short, long)]
        input: String,

        /// Route this success grid (1-based) instead of the starting grid
        #[arg(short, long)]
        success: Option<usize>,

        /// Output format (table, json, svg)
        #[arg(short, long, default_value = "table")]
        format: String,
    },

    /// Print the simulator program of a grid
    Program {
        /// Configuration file (JSON or YAML)
        #[arg(short, long)]
        input: String,

        /// Use this success grid (1-based) instead of the starting grid
        #[arg(short, long)]
        success: Option<usize>,

        /// Output format (table, json)
        #[arg(short, long, default_value = "table")]
        format: String,
    },

    /// Show version information
    Version,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // Setup logging
    let filter = match cli.verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::new(filter))
        .with_target(false)
        .init();

    // Execute command
    let result = match cli.command {
        Commands::Validate { input } => validate::execute(&input),

        Commands::Route {
            input,
            success,
            format,
        } => route::execute(&input, success, &format),

        Commands::Program {
            input,
            success,
            format,
        } => program::execute(&input, success, &format),

        Commands::Version => {
            version::execute();
            Ok(())
        }
    };

    // Handle errors
    if let Err(e) = result {
        eprintln!("{} {}", style("Error:").red().bold(), e);
        std::process::exit(1);
    }

    Ok(())
}
