//! Connections between two cities.

use anyhow::{bail, Result};
use colored::Colorize;
use pathfinder_runtime::prelude::*;
use std::path::Path;

use crate::map::{check_field, OpenMap};

pub fn connect(map_path: &Path, from: &str, to: &str, name: &str, weight: Weight) -> Result<()> {
    check_field("Connection name", name)?;
    let mut map = OpenMap::open(map_path)?;
    let (a, b) = (map.city(from)?, map.city(to)?);

    map.graph.connect(&a, &b, name, weight)?;
    map.save()?;
    println!(
        "{} Connected {} and {} by {} ({})",
        "✓".green(),
        from.cyan(),
        to.cyan(),
        name.white().bold(),
        weight
    );
    Ok(())
}

pub fn disconnect(map_path: &Path, from: &str, to: &str) -> Result<()> {
    let mut map = OpenMap::open(map_path)?;
    let (a, b) = (map.city(from)?, map.city(to)?);

    map.graph.disconnect(&a, &b)?;
    map.save()?;
    println!("{} Disconnected {} and {}", "✓".green(), from.cyan(), to.cyan());
    Ok(())
}

pub fn show(map_path: &Path, from: &str, to: &str) -> Result<()> {
    let map = OpenMap::open(map_path)?;
    let (a, b) = (map.city(from)?, map.city(to)?);

    let Some(edge) = map.graph.edge_between(&a, &b)? else {
        bail!("No connection exists between {} and {}", from, to);
    };

    println!("{} Connection from {} to {}:", "→".blue(), from.cyan(), to.cyan());
    println!("  Name: {}", edge.name().white().bold());
    println!("  Time: {}", edge.weight());
    Ok(())
}

pub fn set_weight(map_path: &Path, from: &str, to: &str, weight: Weight) -> Result<()> {
    let mut map = OpenMap::open(map_path)?;
    let (a, b) = (map.city(from)?, map.city(to)?);

    let Some(previous) = map.graph.edge_between(&a, &b)? else {
        bail!("No connection exists between {} and {}", from, to);
    };
    map.graph.set_connection_weight(&a, &b, weight)?;
    map.save()?;

    println!(
        "{} {} – {}: {} → {}",
        "✓".green(),
        from.cyan(),
        to.cyan(),
        previous.weight().to_string().dimmed(),
        weight.to_string().white().bold()
    );
    Ok(())
}
