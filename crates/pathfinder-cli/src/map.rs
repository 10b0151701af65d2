//! The map a command works on: loaded from disk, edited, written back.

use anyhow::{bail, Context, Result};
use colored::Colorize;
use pathfinder_runtime::map_file::{self, SEPARATOR};
use pathfinder_runtime::prelude::*;
use std::path::{Path, PathBuf};
use tracing::debug;

/// A map file opened as a graph of cities.
pub struct OpenMap {
    path: PathBuf,
    background: String,
    pub graph: ListGraph<City>,
}

impl OpenMap {
    pub fn open(path: &Path) -> Result<Self> {
        if !path.exists() {
            bail!(
                "No map found at {}. Run {} first.",
                path.display(),
                "pathfinder init".cyan()
            );
        }

        let map = map_file::load(path)?;
        let graph = map
            .build_graph()
            .with_context(|| format!("Failed to build map: {}", path.display()))?;
        debug!(
            cities = graph.node_count(),
            connections = graph.edge_count(),
            "opened map"
        );

        Ok(Self {
            path: path.to_path_buf(),
            background: map.background,
            graph,
        })
    }

    /// Write the graph back to the file it was opened from.
    pub fn save(&self) -> Result<()> {
        let map = MapFile::from_graph(self.background.clone(), &self.graph)?;
        map_file::save(&self.path, &map)?;
        Ok(())
    }

    pub fn background(&self) -> &str {
        &self.background
    }

    /// The stored city called `name`, coordinates included.
    pub fn city(&self, name: &str) -> Result<City> {
        match self.graph.node(&City::named(name)) {
            Some(city) => Ok(city.clone()),
            None => bail!("No city named {}", name.cyan()),
        }
    }

    /// Cities sorted by name.
    pub fn sorted_cities(&self) -> Vec<City> {
        let mut cities: Vec<City> = self.graph.nodes().into_iter().collect();
        cities.sort_by(|a, b| a.name.cmp(&b.name));
        cities
    }
}

/// Names end up as map file fields, so they cannot be empty or hold the
/// field separator.
pub fn check_field(kind: &str, value: &str) -> Result<()> {
    if value.trim().is_empty() {
        bail!("{kind} can't be empty");
    }
    if value.contains(SEPARATOR) {
        bail!("{kind} can't contain '{}': {value}", SEPARATOR);
    }
    Ok(())
}
