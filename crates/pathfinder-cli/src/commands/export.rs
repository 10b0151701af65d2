//! Export the map as JSON.

use anyhow::{bail, Context, Result};
use colored::Colorize;
use pathfinder_runtime::prelude::*;
use serde::Serialize;
use std::path::Path;

use crate::map::OpenMap;

#[derive(Serialize)]
struct ExportedMap {
    background: String,
    cities: Vec<City>,
    connections: Vec<ExportedConnection>,
    metadata: ExportMetadata,
}

#[derive(Serialize)]
struct ExportedConnection {
    source: String,
    target: String,
    name: String,
    weight: Weight,
}

#[derive(Serialize)]
struct ExportMetadata {
    city_count: usize,
    connection_count: usize,
}

fn build_export(map: &OpenMap) -> Result<ExportedMap> {
    let cities = map.sorted_cities();

    let mut connections = Vec::new();
    for city in &cities {
        for edge in map.graph.edges_from(city)? {
            // Only add each connection once (from lower to higher name)
            if city.name < edge.destination().name {
                connections.push(ExportedConnection {
                    source: city.name.clone(),
                    target: edge.destination().name.clone(),
                    name: edge.name().to_string(),
                    weight: edge.weight(),
                });
            }
        }
    }
    connections.sort_by(|a, b| (&a.source, &a.target).cmp(&(&b.source, &b.target)));

    Ok(ExportedMap {
        background: map.background().to_string(),
        metadata: ExportMetadata {
            city_count: cities.len(),
            connection_count: connections.len(),
        },
        cities,
        connections,
    })
}

pub fn run(map_path: &Path, output: &str, format: &str) -> Result<()> {
    println!("{} Loading {}...", "→".blue(), map_path.display());
    let map = OpenMap::open(map_path)?;
    let export = build_export(&map)?;

    let output_path = Path::new(output);
    match format.to_lowercase().as_str() {
        "json" => {
            let content = serde_json::to_string_pretty(&export)?;
            std::fs::write(output_path, content)
                .with_context(|| format!("Failed to write {}", output_path.display()))?;
        }
        _ => {
            bail!("Unsupported format: {}. Use 'json'.", format);
        }
    }

    println!();
    println!("{} Exported to {}", "✓".green().bold(), output.cyan());
    println!("  Cities: {}", export.metadata.city_count.to_string().cyan());
    println!("  Connections: {}", export.metadata.connection_count.to_string().cyan());

    Ok(())
}
