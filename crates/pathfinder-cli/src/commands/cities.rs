//! List, add and remove cities.

use anyhow::Result;
use colored::Colorize;
use pathfinder_runtime::prelude::*;
use std::path::Path;

use crate::map::{check_field, OpenMap};

pub fn list(map_path: &Path) -> Result<()> {
    let map = OpenMap::open(map_path)?;
    let cities = map.sorted_cities();

    println!(
        "{} {} cities, {} connections",
        "→".blue(),
        cities.len().to_string().cyan(),
        map.graph.edge_count().to_string().cyan()
    );
    println!();

    for city in &cities {
        let degree = map.graph.edges_from(city)?.len();
        println!(
            "  {} {} {}",
            "●".blue(),
            city.name.white().bold(),
            format!("({:.1}, {:.1}) · {} connections", city.x, city.y, degree).dimmed()
        );
    }

    Ok(())
}

pub fn add(map_path: &Path, name: &str, x: f64, y: f64) -> Result<()> {
    check_field("City name", name)?;
    let mut map = OpenMap::open(map_path)?;

    let city = City::new(name, x, y);
    if map.graph.contains(&city) {
        println!("  {} {} is already on the map", "•".yellow(), name.cyan());
        return Ok(());
    }

    map.graph.add(city);
    map.save()?;
    println!("{} Added {} at ({:.1}, {:.1})", "✓".green(), name.cyan(), x, y);
    Ok(())
}

pub fn remove(map_path: &Path, name: &str) -> Result<()> {
    let mut map = OpenMap::open(map_path)?;
    let city = map.city(name)?;
    let dropped = map.graph.edges_from(&city)?.len();

    map.graph.remove(&city)?;
    map.save()?;
    println!(
        "{} Removed {} and {} connections",
        "✓".green(),
        name.cyan(),
        dropped
    );
    Ok(())
}

/// Every connection leaving one city.
pub fn connections(map_path: &Path, name: &str) -> Result<()> {
    let map = OpenMap::open(map_path)?;
    let city = map.city(name)?;

    let mut edges = map.graph.edges_from(&city)?;
    edges.sort_by(|a, b| a.destination().name.cmp(&b.destination().name));

    println!("{} Connections from {}:", "→".blue(), name.cyan());
    if edges.is_empty() {
        println!("  {}", "(none)".dimmed());
    }
    for edge in &edges {
        println!("  {} {}", "│".dimmed(), edge);
    }
    Ok(())
}
