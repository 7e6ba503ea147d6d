//! Costgraph CLI entry point

use clap::{Parser, Subcommand};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

mod commands;

#[derive(Parser)]
#[command(name = "costgraph")]
#[command(about = "Shortest paths over lazily costed graphs", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// List the built-in scenarios
    List,
    /// Find the cheapest path between two points of a scenario
    Route {
        /// Scenario name (see `list`)
        scenario: String,

        /// Index of the start point
        from: usize,

        /// Index of the end point
        to: usize,

        /// Print the result as JSON
        #[arg(long)]
        json: bool,
    },
    /// Show version
    Version,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // Initialize logging
    let log_level = if cli.verbose { "debug" } else { "info" };
    let filter = tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        tracing_subscriber::EnvFilter::new(format!(
            "costgraph={log_level},costgraph_core={log_level},costgraph_samples={log_level}"
        ))
    });
    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    tracing::debug!("Costgraph v{}", env!("CARGO_PKG_VERSION"));

    match cli.command {
        Commands::List => {
            commands::list();
            Ok(())
        }
        Commands::Route { scenario, from, to, json } => {
            commands::route(&scenario, from, to, json)
        }
        Commands::Version => {
            println!("Costgraph v{}", env!("CARGO_PKG_VERSION"));
            Ok(())
        }
    }
}
