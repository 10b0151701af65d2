//! Pathfinder CLI - Command-line interface for city route maps.

mod commands;
mod config;
mod map;

use anyhow::Result;
use clap::{Parser, Subcommand};
use pathfinder_core::edge::Weight;
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "pathfinder")]
#[command(author, version, about = "Pathfinder - Routes across a map of connected cities", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Map file (default: taken from pathfinder.toml)
    #[arg(short, long, global = true)]
    map: Option<PathBuf>,

    /// Verbose output
    #[arg(short, long, global = true)]
    verbose: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Initialize a new Pathfinder project with an empty map
    Init {
        /// Project directory (default: current directory)
        #[arg(short, long)]
        path: Option<String>,
    },

    /// List all cities on the map
    Cities,

    /// Place a new city on the map
    AddCity {
        /// City name
        name: String,
        /// Horizontal position on the background
        #[arg(allow_negative_numbers = true)]
        x: f64,
        /// Vertical position on the background
        #[arg(allow_negative_numbers = true)]
        y: f64,
    },

    /// Remove a city and every connection touching it
    RemoveCity {
        /// City name
        name: String,
    },

    /// List the connections leaving a city
    Connections {
        /// City name
        city: String,
    },

    /// Connect two cities
    Connect {
        from: String,
        to: String,
        /// Connection name (e.g. the road or line)
        #[arg(short, long)]
        name: String,
        /// Travel time
        #[arg(short, long, allow_negative_numbers = true)]
        weight: Weight,
    },

    /// Remove the connection between two cities
    Disconnect { from: String, to: String },

    /// Show the connection between two cities
    Show { from: String, to: String },

    /// Change the travel time of an existing connection
    SetWeight {
        from: String,
        to: String,
        /// New travel time
        #[arg(allow_negative_numbers = true)]
        weight: Weight,
    },

    /// Find the fastest path between two cities
    Path { from: String, to: String },

    /// Check whether one city can be reached from another
    Reachable { from: String, to: String },

    /// Export the map
    Export {
        /// Output file path
        output: String,

        /// Export format
        #[arg(short, long, default_value = "json")]
        format: String,
    },
}

fn init_tracing(verbose: bool) {
    let default_level = if verbose { "debug" } else { "warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let map = || -> Result<PathBuf> {
        let path = config::resolve_map(cli.map.clone())?;
        tracing::debug!(map = %path.display(), "using map file");
        Ok(path)
    };

    match cli.command {
        Commands::Init { path } => commands::init::run(path),
        Commands::Cities => commands::cities::list(&map()?),
        Commands::AddCity { name, x, y } => commands::cities::add(&map()?, &name, x, y),
        Commands::RemoveCity { name } => commands::cities::remove(&map()?, &name),
        Commands::Connections { city } => commands::cities::connections(&map()?, &city),
        Commands::Connect { from, to, name, weight } => {
            commands::connection::connect(&map()?, &from, &to, &name, weight)
        }
        Commands::Disconnect { from, to } => commands::connection::disconnect(&map()?, &from, &to),
        Commands::Show { from, to } => commands::connection::show(&map()?, &from, &to),
        Commands::SetWeight { from, to, weight } => {
            commands::connection::set_weight(&map()?, &from, &to, weight)
        }
        Commands::Path { from, to } => commands::route::path(&map()?, &from, &to),
        Commands::Reachable { from, to } => commands::route::reachable(&map()?, &from, &to),
        Commands::Export { output, format } => commands::export::run(&map()?, &output, &format),
    }
}
