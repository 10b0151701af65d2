//! Route scenarios on a small city map.
//!
//! Exercises the graph contract through the runtime prelude with the node type
//! the map front end uses.

use pathfinder_runtime::prelude::*;

fn city(name: &str) -> City {
    City::named(name)
}

fn triangle() -> ListGraph<City> {
    let mut graph = ListGraph::new();
    graph.add(City::new("A", 0.0, 0.0));
    graph.add(City::new("B", 10.0, 0.0));
    graph.add(City::new("C", 10.0, 10.0));
    graph.connect(&city("A"), &city("B"), "ab", 5).unwrap();
    graph.connect(&city("B"), &city("C"), "bc", 3).unwrap();
    graph.connect(&city("A"), &city("C"), "ac", 10).unwrap();
    graph
}

#[test]
fn cheapest_route_beats_direct_connection() {
    let graph = triangle();

    let path = graph.path(&city("A"), &city("C")).expect("C is reachable");
    let described: Vec<String> = path.iter().map(ToString::to_string).collect();
    assert_eq!(described, vec!["to B by ab takes 5", "to C by bc takes 3"]);
    assert_eq!(path_weight(&path), 8);
}

#[test]
fn route_back_is_the_mirror() {
    let graph = triangle();

    let path = graph.path(&city("C"), &city("A")).unwrap();
    let stops: Vec<&str> = path.iter().map(|e| e.destination().name()).collect();
    assert_eq!(stops, vec!["B", "A"]);
    assert_eq!(path_weight(&path), 8);
}

#[test]
fn reweighting_changes_the_chosen_route() {
    let mut graph = triangle();
    graph.set_connection_weight(&city("C"), &city("A"), 7).unwrap();

    let path = graph.path(&city("A"), &city("C")).unwrap();
    assert_eq!(path.len(), 1);
    assert_eq!(path[0].name(), "ac");
    assert_eq!(path_weight(&path), 7);
}

#[test]
fn removing_a_hub_leaves_neighbors_clean() {
    let mut graph = ListGraph::new();
    for name in ["Hub", "North", "East", "West"] {
        graph.add(city(name));
    }
    graph.connect(&city("Hub"), &city("North"), "n", 1).unwrap();
    graph.connect(&city("Hub"), &city("East"), "e", 2).unwrap();
    graph.connect(&city("Hub"), &city("West"), "w", 3).unwrap();
    graph.connect(&city("North"), &city("East"), "ne", 4).unwrap();

    let before: Vec<usize> = ["North", "East", "West"]
        .iter()
        .map(|n| graph.edges_from(&city(n)).unwrap().len())
        .collect();

    graph.remove(&city("Hub")).unwrap();

    assert!(!graph.nodes().contains(&city("Hub")));
    for (name, count) in ["North", "East", "West"].iter().zip(before) {
        let edges = graph.edges_from(&city(name)).unwrap();
        assert_eq!(edges.len(), count - 1, "{name} should lose exactly one edge");
        assert!(edges.iter().all(|e| e.destination().name() != "Hub"));
        assert!(graph
            .edge_between(&city(name), &city("Hub"))
            .unwrap_err()
            .is_not_found());
    }
    assert!(!graph.path_exists(&city("North"), &city("West")));
    assert_eq!(graph.path(&city("North"), &city("West")), None);
}

#[test]
fn negative_road_is_rejected() {
    let mut graph = ListGraph::new();
    graph.add(city("x"));
    graph.add(city("y"));

    let err = graph.connect(&city("x"), &city("y"), "Road", -1).unwrap_err();
    assert_eq!(err, GraphError::InvalidWeight(-1));
    assert_eq!(graph.edge_between(&city("x"), &city("y")).unwrap(), None);
}

#[test]
fn equal_cost_routes_keep_the_first_discovered() {
    let mut graph = ListGraph::new();
    for name in ["S", "L", "R", "T"] {
        graph.add(city(name));
    }
    graph.connect(&city("S"), &city("L"), "left-1", 2).unwrap();
    graph.connect(&city("S"), &city("R"), "right-1", 2).unwrap();
    graph.connect(&city("L"), &city("T"), "left-2", 2).unwrap();
    graph.connect(&city("R"), &city("T"), "right-2", 2).unwrap();

    // The newest connection is listed first, so R is explored before L and
    // labels T first. L's route to T ties and leaves that label alone.
    let from_s: Vec<String> = graph
        .edges_from(&city("S"))
        .unwrap()
        .iter()
        .map(|e| e.name().to_string())
        .collect();
    assert_eq!(from_s, vec!["right-1", "left-1"]);

    let path = graph.path(&city("S"), &city("T")).unwrap();
    let names: Vec<&str> = path.iter().map(Edge::name).collect();
    assert_eq!(names, vec!["right-1", "right-2"]);
    assert_eq!(path_weight(&path), 4);

    for _ in 0..10 {
        assert_eq!(graph.path(&city("S"), &city("T")).unwrap(), path);
    }
}

#[test]
fn stored_city_is_found_by_name() {
    let graph = triangle();
    let stored = graph.node(&city("B")).expect("B is on the map");
    assert_eq!((stored.x, stored.y), (10.0, 0.0));
    assert!(graph.node(&city("Z")).is_none());
}

#[test]
fn loading_a_map_file_and_routing() {
    let text = "file:europa.gif\n\
        Stockholm;500.0;300.0;Goteborg;300.0;400.0;Malmo;320.0;520.0;Visby;560.0;420.0\n\
        Stockholm;Goteborg;E20;5\n\
        Goteborg;Stockholm;E20;5\n\
        Goteborg;Malmo;E6;3\n\
        Malmo;Goteborg;E6;3\n\
        Stockholm;Malmo;E4;9\n\
        Malmo;Stockholm;E4;9\n";

    let graph = MapFile::parse(text).unwrap().build_graph().unwrap();
    let path = graph.path(&city("Stockholm"), &city("Malmo")).unwrap();
    assert_eq!(path_weight(&path), 8);
    assert!(!graph.path_exists(&city("Stockholm"), &city("Visby")));
}
