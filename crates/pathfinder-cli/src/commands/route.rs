//! Find routes between cities.

use anyhow::Result;
use colored::Colorize;
use pathfinder_runtime::prelude::*;
use std::path::Path;

use crate::map::OpenMap;

pub fn path(map_path: &Path, from: &str, to: &str) -> Result<()> {
    let map = OpenMap::open(map_path)?;
    let (a, b) = (map.city(from)?, map.city(to)?);

    println!("{} The path from {} to {}:", "→".blue(), from.cyan(), to.cyan());
    println!();

    match map.graph.path(&a, &b) {
        Some(path) => {
            for edge in &path {
                println!("  {} {}", "│".dimmed(), edge);
            }
            println!();
            println!(
                "  Total {} {}",
                path_weight(&path).to_string().green().bold(),
                format!("({} connections)", path.len()).dimmed()
            );
        }
        None => {
            println!("  {} No path exists between {} and {}", "✗".red(), from, to);
        }
    }

    Ok(())
}

pub fn reachable(map_path: &Path, from: &str, to: &str) -> Result<()> {
    let map = OpenMap::open(map_path)?;
    let (a, b) = (map.city(from)?, map.city(to)?);

    if map.graph.path_exists(&a, &b) {
        println!("  {} {} can be reached from {}", "✓".green(), to.cyan(), from.cyan());
    } else {
        println!("  {} {} cannot be reached from {}", "✗".red(), to.cyan(), from.cyan());
    }
    Ok(())
}
