//! Initialize a new Pathfinder project.

use anyhow::{Context, Result};
use colored::Colorize;
use pathfinder_runtime::map_file::{self, MapFile};
use std::path::PathBuf;

use crate::config::{Config, CONFIG_FILE};

pub fn run(path: Option<String>) -> Result<()> {
    let base_path = match path {
        Some(p) => PathBuf::from(p),
        None => std::env::current_dir().context("Failed to read current directory")?,
    };

    println!("{} Initializing Pathfinder project...", "→".blue());

    std::fs::create_dir_all(&base_path)
        .with_context(|| format!("Failed to create {}", base_path.display()))?;

    // Create default config, or reuse the one already there
    let config_path = base_path.join(CONFIG_FILE);
    let config = if config_path.exists() {
        println!("  {} {} already exists", "•".yellow(), config_path.display());
        Config::from_file(&config_path)?
    } else {
        let config = Config::default();
        config.save(&config_path)?;
        println!("  {} Created {}", "✓".green(), config_path.display());
        config
    };

    // Create an empty map
    let map_path = config.map_path(&base_path);
    if map_path.exists() {
        println!("  {} {} already exists", "•".yellow(), map_path.display());
    } else {
        map_file::save(&map_path, &MapFile::empty(config.map.background.clone()))?;
        println!("  {} Created {}", "✓".green(), map_path.display());
    }

    println!();
    println!("{} Pathfinder project initialized!", "✓".green().bold());
    println!();
    println!("Next steps:");
    println!("  {} pathfinder add-city <name> <x> <y>", "1.".blue());
    println!("  {} pathfinder connect <from> <to> --name <road> --weight <time>", "2.".blue());
    println!("  {} pathfinder path <from> <to>", "3.".blue());

    Ok(())
}
