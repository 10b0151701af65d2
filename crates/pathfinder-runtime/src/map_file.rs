//! Map files — the flat text format maps are saved in.
//!
//! ```text
//! file:europa.gif
//! Oslo;210.0;95.5;Bergen;120.0;101.0
//! Oslo;Bergen;Train;7
//! Bergen;Oslo;Train;7
//! ```
//!
//! The first line names the background image, the second holds every city as
//! `name;x;y` triples, and each following line is one direction of a
//! connection as `from;to;name;weight`. Loading replays `add` for every city
//! and then `connect` for every connection line, skipping lines whose pair is
//! already connected (the mirror direction).

use pathfinder_core::edge::{validate_weight, Weight};
use pathfinder_core::error::GraphError;
use pathfinder_core::graph::Graph;
use std::collections::HashSet;
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::{debug, info, trace, warn};

use crate::city::City;
use crate::list_graph::ListGraph;

/// Field separator of the map format.
pub const SEPARATOR: char = ';';

/// Errors raised while reading, writing or replaying a map file.
#[derive(Debug, Error)]
pub enum MapFileError {
    #[error("I/O error on {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("line {line}: {reason}")]
    Parse { line: usize, reason: String },

    #[error("line {line}: unknown city {name:?}")]
    UnknownCity { line: usize, name: String },

    #[error("line {line}: {source}")]
    Rejected {
        line: usize,
        #[source]
        source: GraphError,
    },

    #[error(transparent)]
    Graph(#[from] GraphError),
}

impl MapFileError {
    fn parse(line: usize, reason: impl Into<String>) -> Self {
        MapFileError::Parse {
            line,
            reason: reason.into(),
        }
    }
}

/// One connection line: a single direction of an undirected connection.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConnectionRecord {
    pub from: String,
    pub to: String,
    pub name: String,
    pub weight: Weight,
    /// Line number in the text the record was parsed from.
    pub line: Option<usize>,
}

/// In-memory form of a map file.
#[derive(Debug, Clone, PartialEq)]
pub struct MapFile {
    pub background: String,
    pub cities: Vec<City>,
    pub connections: Vec<ConnectionRecord>,
}

impl MapFile {
    /// A map with a background and nothing on it.
    pub fn empty(background: impl Into<String>) -> Self {
        Self {
            background: background.into(),
            cities: Vec::new(),
            connections: Vec::new(),
        }
    }

    /// Parse map file text.
    ///
    /// Connection lines must reference cities from line 2 and carry a
    /// non-negative integer weight. Blank connection lines are ignored.
    pub fn parse(input: &str) -> Result<Self, MapFileError> {
        let mut lines = input.lines().enumerate().map(|(i, line)| (i + 1, line));

        let background = lines
            .next()
            .map(|(_, line)| line.to_string())
            .ok_or_else(|| MapFileError::parse(1, "missing background line"))?;

        let cities = match lines.next() {
            Some((number, line)) => parse_cities(number, line)?,
            None => Vec::new(),
        };

        let known: HashSet<&str> = cities.iter().map(City::name).collect();
        let mut connections = Vec::new();
        for (number, line) in lines {
            if line.trim().is_empty() {
                continue;
            }
            let record = parse_connection(number, line)?;
            for name in [&record.from, &record.to] {
                if !known.contains(name.as_str()) {
                    return Err(MapFileError::UnknownCity {
                        line: number,
                        name: name.clone(),
                    });
                }
            }
            connections.push(record);
        }

        debug!(
            cities = cities.len(),
            connections = connections.len(),
            "parsed map file"
        );
        Ok(Self {
            background,
            cities,
            connections,
        })
    }

    /// Render map file text. Every connection line ends with a newline.
    pub fn render(&self) -> String {
        let cities: Vec<String> = self.cities.iter().map(City::save_info).collect();

        let mut out = String::new();
        out.push_str(&self.background);
        out.push('\n');
        out.push_str(&cities.join(&SEPARATOR.to_string()));
        out.push('\n');
        for record in &self.connections {
            out.push_str(&format!(
                "{}{sep}{}{sep}{}{sep}{}\n",
                record.from,
                record.to,
                record.name,
                record.weight,
                sep = SEPARATOR
            ));
        }
        out
    }

    /// Capture a graph of cities, ordered by city name so saves are stable.
    ///
    /// Each connection is recorded once per direction.
    pub fn from_graph<G: Graph<City>>(
        background: impl Into<String>,
        graph: &G,
    ) -> Result<Self, MapFileError> {
        let mut cities: Vec<City> = graph.nodes().into_iter().collect();
        cities.sort_by(|a, b| a.name.cmp(&b.name));

        let mut connections = Vec::new();
        for city in &cities {
            let mut edges = graph.edges_from(city)?;
            edges.sort_by(|a, b| a.destination().name.cmp(&b.destination().name));
            connections.extend(edges.into_iter().map(|edge| ConnectionRecord {
                from: city.name.clone(),
                to: edge.destination().name.clone(),
                name: edge.name().to_string(),
                weight: edge.weight(),
                line: None,
            }));
        }

        Ok(Self {
            background: background.into(),
            cities,
            connections,
        })
    }

    /// Replay the file into a fresh graph: every city first, then every
    /// connection whose pair is not connected yet.
    pub fn build_graph(&self) -> Result<ListGraph<City>, MapFileError> {
        let mut graph = ListGraph::new();
        for city in &self.cities {
            if graph.contains(city) {
                warn!(city = %city, "duplicate city in map file, keeping the first");
                continue;
            }
            graph.add(city.clone());
        }

        for record in &self.connections {
            let from = City::named(record.from.as_str());
            let to = City::named(record.to.as_str());
            let present = graph
                .edge_between(&from, &to)
                .map_err(|source| record.rejection(source))?;
            if present.is_some() {
                trace!(from = %from, to = %to, "connection already present");
                continue;
            }
            graph
                .connect(&from, &to, &record.name, record.weight)
                .map_err(|source| record.rejection(source))?;
        }

        debug!(
            cities = graph.node_count(),
            connections = graph.edge_count(),
            "built graph from map file"
        );
        Ok(graph)
    }
}

impl ConnectionRecord {
    /// Attach the record's line number to a graph error, when it has one.
    fn rejection(&self, source: GraphError) -> MapFileError {
        match self.line {
            Some(line) => MapFileError::Rejected { line, source },
            None => MapFileError::Graph(source),
        }
    }
}

fn parse_cities(number: usize, line: &str) -> Result<Vec<City>, MapFileError> {
    if line.trim().is_empty() {
        return Ok(Vec::new());
    }

    let parts: Vec<&str> = line.split(SEPARATOR).collect();
    if parts.len() % 3 != 0 {
        return Err(MapFileError::parse(
            number,
            format!(
                "expected name;x;y triples, found {} fields",
                parts.len()
            ),
        ));
    }

    parts
        .chunks(3)
        .map(|triple| {
            let x = parse_coordinate(number, triple[1])?;
            let y = parse_coordinate(number, triple[2])?;
            Ok(City::new(triple[0], x, y))
        })
        .collect()
}

fn parse_coordinate(number: usize, field: &str) -> Result<f64, MapFileError> {
    field
        .trim()
        .parse()
        .map_err(|_| MapFileError::parse(number, format!("invalid coordinate {field:?}")))
}

fn parse_connection(number: usize, line: &str) -> Result<ConnectionRecord, MapFileError> {
    let parts: Vec<&str> = line.split(SEPARATOR).collect();
    let [from, to, name, weight] = parts.as_slice() else {
        return Err(MapFileError::parse(
            number,
            format!("expected from;to;name;weight, found {} fields", parts.len()),
        ));
    };

    let weight: Weight = weight
        .trim()
        .parse()
        .map_err(|_| MapFileError::parse(number, format!("invalid weight {weight:?}")))?;
    validate_weight(weight).map_err(|source| MapFileError::Rejected {
        line: number,
        source,
    })?;

    Ok(ConnectionRecord {
        from: from.to_string(),
        to: to.to_string(),
        name: name.to_string(),
        weight,
        line: Some(number),
    })
}

/// Read and parse a map file from disk.
pub fn load(path: &Path) -> Result<MapFile, MapFileError> {
    let content = std::fs::read_to_string(path).map_err(|source| MapFileError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    let map = MapFile::parse(&content)?;
    info!(path = %path.display(), cities = map.cities.len(), "loaded map file");
    Ok(map)
}

/// Render and write a map file to disk, replacing any existing file.
pub fn save(path: &Path, map: &MapFile) -> Result<(), MapFileError> {
    std::fs::write(path, map.render()).map_err(|source| MapFileError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    info!(path = %path.display(), cities = map.cities.len(), "saved map file");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE: &str = "file:europa.gif\n\
        Oslo;210.0;95.5;Bergen;120.0;101.0;Trondheim;200.0;40.0\n\
        Oslo;Bergen;Train;7\n\
        Bergen;Oslo;Train;7\n\
        Oslo;Trondheim;Dovrebanen;6\n\
        Trondheim;Oslo;Dovrebanen;6\n";

    #[test]
    fn parses_all_three_sections() {
        let map = MapFile::parse(SAMPLE).unwrap();
        assert_eq!(map.background, "file:europa.gif");
        assert_eq!(map.cities.len(), 3);
        assert_eq!(map.cities[0].x, 210.0);
        assert_eq!(map.cities[0].y, 95.5);
        assert_eq!(map.connections.len(), 4);
        assert_eq!(
            map.connections[0],
            ConnectionRecord {
                from: "Oslo".into(),
                to: "Bergen".into(),
                name: "Train".into(),
                weight: 7,
                line: Some(3),
            }
        );
    }

    #[test]
    fn mirrored_lines_become_one_connection() {
        let graph = MapFile::parse(SAMPLE).unwrap().build_graph().unwrap();
        assert_eq!(graph.node_count(), 3);
        assert_eq!(graph.edge_count(), 2);

        let edge = graph
            .edge_between(&City::named("Bergen"), &City::named("Oslo"))
            .unwrap()
            .unwrap();
        assert_eq!(edge.name(), "Train");
        assert_eq!(edge.weight(), 7);
        assert_eq!(edge.destination().x, 210.0);
    }

    #[test]
    fn graph_round_trips_through_text() {
        let first = MapFile::parse(SAMPLE).unwrap();
        let graph = first.build_graph().unwrap();
        let saved = MapFile::from_graph(first.background.clone(), &graph).unwrap();
        let text = saved.render();

        let reloaded = MapFile::parse(&text).unwrap().build_graph().unwrap();
        assert_eq!(reloaded.nodes(), graph.nodes());
        assert_eq!(reloaded.edge_count(), graph.edge_count());
        // Cities come out sorted by name
        assert!(text.lines().nth(1).unwrap().starts_with("Bergen;120.0;101.0"));
    }

    #[test]
    fn empty_map_renders_two_lines() {
        let map = MapFile::empty("file:europa.gif");
        assert_eq!(map.render(), "file:europa.gif\n\n");

        let parsed = MapFile::parse(&map.render()).unwrap();
        assert!(parsed.cities.is_empty());
        assert!(parsed.connections.is_empty());
    }

    #[test]
    fn rejects_incomplete_city_triples() {
        let err = MapFile::parse("bg\nOslo;1.0\n").unwrap_err();
        assert!(matches!(err, MapFileError::Parse { line: 2, .. }));
    }

    #[test]
    fn rejects_connections_to_unknown_cities() {
        let err = MapFile::parse("bg\nOslo;1.0;2.0\nOslo;Narvik;Road;3\n").unwrap_err();
        match err {
            MapFileError::UnknownCity { line, name } => {
                assert_eq!(line, 3);
                assert_eq!(name, "Narvik");
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn rejects_negative_and_malformed_weights() {
        let err = MapFile::parse("bg\nA;0.0;0.0;B;1.0;1.0\nA;B;Road;-4\n").unwrap_err();
        assert!(matches!(
            err,
            MapFileError::Rejected {
                line: 3,
                source: GraphError::InvalidWeight(-4)
            }
        ));

        let err = MapFile::parse("bg\nA;0.0;0.0;B;1.0;1.0\nA;B;Road;fast\n").unwrap_err();
        assert!(matches!(err, MapFileError::Parse { line: 3, .. }));
    }

    #[test]
    fn self_loop_line_reports_its_number() {
        let map = MapFile::parse("bg\nA;0.0;0.0;B;1.0;1.0\n\nA;B;Road;1\nA;A;Road;1\n").unwrap();
        let err = map.build_graph().unwrap_err();
        assert!(matches!(
            err,
            MapFileError::Rejected {
                line: 5,
                source: GraphError::SelfLoop(_)
            }
        ));
        assert!(err.to_string().starts_with("line 5: "));
    }

    #[test]
    fn records_from_a_graph_report_bare_graph_errors() {
        let mut map = MapFile::empty("bg");
        map.cities.push(City::named("A"));
        map.connections.push(ConnectionRecord {
            from: "A".into(),
            to: "A".into(),
            name: "Loop".into(),
            weight: 1,
            line: None,
        });
        assert!(matches!(
            map.build_graph(),
            Err(MapFileError::Graph(GraphError::SelfLoop(_)))
        ));
    }

    #[test]
    fn missing_file_reports_path() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("absent.graph");
        let err = load(&path).unwrap_err();
        assert!(err.to_string().contains("absent.graph"));
    }

    #[test]
    fn save_then_load_from_disk() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("europa.graph");

        let map = MapFile::parse(SAMPLE).unwrap();
        save(&path, &map).unwrap();
        let loaded = load(&path).unwrap();

        assert_eq!(loaded.background, map.background);
        assert_eq!(loaded.connections, map.connections);
    }
}
