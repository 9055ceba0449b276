use std::sync::Arc;

use fxhash::FxHashMap;
use parking_lot::RwLock;
use tracing::trace;

use crate::{destination::Destination, dijkstra, error::RoutingError};

pub type Distance = f64;

/// Shortest paths from one source, keyed by target node.
pub type Destinations = FxHashMap<String, Destination>;

#[derive(Debug, Clone, Copy)]
pub(crate) struct RouteEdge {
    pub(crate) to: usize,
    pub(crate) distance: Distance,
}

/// Weighted undirected graph of named locations.
///
/// Shortest path results are cached per source node. Adding an edge invalidates the
/// whole cache. The cache is behind a lock so a graph can be shared between threads;
/// the first query for a source computes and stores the result, later queries return
/// the same `Arc`.
#[derive(Default)]
pub struct RouteGraph {
    nodes: Vec<String>,
    node_ids: FxHashMap<String, usize>,
    adjacency: Vec<Vec<RouteEdge>>,
    edge_count: usize,
    cache: RwLock<FxHashMap<String, Arc<Destinations>>>,
}

impl RouteGraph {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds an undirected edge. Parallel edges are kept as separate entries.
    pub fn add_edge(
        &mut self,
        from: &str,
        to: &str,
        distance: Distance,
    ) -> Result<(), RoutingError> {
        if !distance.is_finite() || distance < 0.0 {
            return Err(RoutingError::InvalidDistance {
                from: from.to_owned(),
                to: to.to_owned(),
                distance,
            });
        }

        let from_id = self.ensure_node(from);
        let to_id = self.ensure_node(to);

        self.adjacency[from_id].push(RouteEdge {
            to: to_id,
            distance,
        });
        self.adjacency[to_id].push(RouteEdge {
            to: from_id,
            distance,
        });
        self.edge_count += 1;

        self.clear_cache();

        Ok(())
    }

    /// Shortest paths from `source` to every reachable node, including `source` itself.
    ///
    /// Unreachable nodes are absent. A source unknown to the graph only reaches itself.
    pub fn shortest_paths_from(&self, source: &str) -> Arc<Destinations> {
        if let Some(destinations) = self.cache.read().get(source) {
            return Arc::clone(destinations);
        }

        let computed = Arc::new(dijkstra::shortest_paths(self, source));
        trace!(source, reachable = computed.len(), "computed shortest paths");

        let mut cache = self.cache.write();
        Arc::clone(cache.entry(source.to_owned()).or_insert(computed))
    }

    pub fn destination(&self, source: &str, target: &str) -> Option<Destination> {
        self.shortest_paths_from(source).get(target).cloned()
    }

    pub fn clear_cache(&mut self) {
        self.cache.get_mut().clear();
    }

    pub fn cached_sources(&self) -> usize {
        self.cache.read().len()
    }

    pub fn contains_node(&self, node: &str) -> bool {
        self.node_ids.contains_key(node)
    }

    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    pub fn edge_count(&self) -> usize {
        self.edge_count
    }

    pub fn nodes(&self) -> impl Iterator<Item = &str> {
        self.nodes.iter().map(String::as_str)
    }

    /// Neighbours of `node` with the length of the connecting edge, in insertion order.
    pub fn neighbours(&self, node: &str) -> impl Iterator<Item = (&str, Distance)> {
        self.node_ids
            .get(node)
            .map(|&id| self.adjacency[id].as_slice())
            .unwrap_or_default()
            .iter()
            .map(|edge| (self.nodes[edge.to].as_str(), edge.distance))
    }

    pub(crate) fn node_id(&self, node: &str) -> Option<usize> {
        self.node_ids.get(node).copied()
    }

    pub(crate) fn node_name(&self, node_id: usize) -> &str {
        &self.nodes[node_id]
    }

    pub(crate) fn edges(&self, node_id: usize) -> &[RouteEdge] {
        &self.adjacency[node_id]
    }

    fn ensure_node(&mut self, node: &str) -> usize {
        if let Some(&id) = self.node_ids.get(node) {
            return id;
        }

        let id = self.nodes.len();
        self.nodes.push(node.to_owned());
        self.node_ids.insert(node.to_owned(), id);
        self.adjacency.push(Vec::new());
        id
    }
}

#[cfg(test)]
mod tests {
    use rand::{Rng, SeedableRng, rngs::SmallRng};

    use super::*;
    use crate::test_graph_utils::create_romania_graph;

    #[test]
    fn test_add_edge_is_undirected() {
        let mut graph = RouteGraph::new();
        graph.add_edge("A", "B", 30.0).unwrap();

        assert_eq!(graph.neighbours("A").collect::<Vec<_>>(), vec![("B", 30.0)]);
        assert_eq!(graph.neighbours("B").collect::<Vec<_>>(), vec![("A", 30.0)]);
        assert_eq!(graph.node_count(), 2);
        assert_eq!(graph.edge_count(), 1);
    }

    #[test]
    fn test_add_edge_rejects_negative_distance() {
        let mut graph = RouteGraph::new();

        let result = graph.add_edge("A", "B", -1.0);

        assert!(matches!(result, Err(RoutingError::InvalidDistance { .. })));
        assert_eq!(graph.node_count(), 0);
    }

    #[test]
    fn test_add_edge_rejects_nan_distance() {
        let mut graph = RouteGraph::new();

        assert!(graph.add_edge("A", "B", f64::NAN).is_err());
    }

    #[test]
    fn test_parallel_edges_are_kept() {
        let mut graph = RouteGraph::new();
        graph.add_edge("A", "B", 30.0).unwrap();
        graph.add_edge("A", "B", 10.0).unwrap();

        assert_eq!(graph.neighbours("A").count(), 2);
        assert_eq!(
            graph.destination("A", "B").unwrap().cumulative_distance(),
            10.0
        );
    }

    #[test]
    fn test_shortest_paths_are_cached() {
        let graph = create_romania_graph();

        let first = graph.shortest_paths_from("Arad");
        let second = graph.shortest_paths_from("Arad");

        assert!(Arc::ptr_eq(&first, &second));
        assert_eq!(first, second);
        assert_eq!(graph.cached_sources(), 1);
    }

    #[test]
    fn test_add_edge_invalidates_cache() {
        let mut graph = RouteGraph::new();
        graph.add_edge("A", "B", 30.0).unwrap();
        graph.add_edge("B", "C", 10.0).unwrap();

        assert_eq!(graph.destination("A", "C").unwrap().cumulative_distance(), 40.0);

        graph.add_edge("A", "C", 5.0).unwrap();

        assert_eq!(graph.cached_sources(), 0);
        assert_eq!(graph.destination("A", "C").unwrap().cumulative_distance(), 5.0);
    }

    #[test]
    fn test_unreachable_nodes_are_absent() {
        let mut graph = RouteGraph::new();
        graph.add_edge("A", "B", 1.0).unwrap();
        graph.add_edge("C", "D", 1.0).unwrap();

        let destinations = graph.shortest_paths_from("A");

        assert_eq!(destinations.len(), 2);
        assert!(destinations.contains_key("B"));
        assert!(!destinations.contains_key("C"));
        assert!(graph.destination("A", "D").is_none());
    }

    #[test]
    fn test_zero_distance_edge() {
        let mut graph = RouteGraph::new();
        graph.add_edge("A", "B", 0.0).unwrap();

        let destination = graph.destination("A", "B").unwrap();

        assert_eq!(destination.cumulative_distance(), 0.0);
        assert_eq!(destination.target(), "B");
        assert!(!destination.is_stationary());
    }

    fn random_graph(rng: &mut SmallRng, nodes: usize, edges: usize) -> RouteGraph {
        let mut graph = RouteGraph::new();
        for _ in 0..edges {
            let from = rng.random_range(0..nodes);
            let to = rng.random_range(0..nodes);
            let distance = rng.random_range(0..20) as Distance;
            graph
                .add_edge(&from.to_string(), &to.to_string(), distance)
                .unwrap();
        }
        graph
    }

    fn brute_force_distance(graph: &RouteGraph, from: &str, to: &str) -> Option<Distance> {
        fn visit(
            graph: &RouteGraph,
            node: &str,
            to: &str,
            length: Distance,
            visited: &mut Vec<String>,
            best: &mut Option<Distance>,
        ) {
            if node == to {
                *best = Some(best.map_or(length, |best| best.min(length)));
                return;
            }

            for (neighbour, distance) in graph.neighbours(node) {
                if visited.iter().any(|v| v == neighbour) {
                    continue;
                }
                visited.push(neighbour.to_owned());
                visit(graph, neighbour, to, length + distance, visited, best);
                visited.pop();
            }
        }

        let mut best = None;
        let mut visited = vec![from.to_owned()];
        visit(graph, from, to, 0.0, &mut visited, &mut best);
        best
    }

    #[test]
    fn test_shortest_paths_match_brute_force() {
        let mut rng = SmallRng::seed_from_u64(42);

        for _ in 0..30 {
            let graph = random_graph(&mut rng, 6, 9);
            let nodes: Vec<String> = graph.nodes().map(str::to_owned).collect();

            for source in &nodes {
                let destinations = graph.shortest_paths_from(source);

                for target in &nodes {
                    let expected = brute_force_distance(&graph, source, target);
                    let actual = destinations
                        .get(target.as_str())
                        .map(|destination| destination.cumulative_distance());

                    assert_eq!(actual, expected, "{source} -> {target}");
                }
            }
        }
    }

    #[test]
    fn test_checkpoint_legs_follow_graph_edges() {
        let mut rng = SmallRng::seed_from_u64(7);

        for _ in 0..30 {
            let graph = random_graph(&mut rng, 7, 12);
            let nodes: Vec<String> = graph.nodes().map(str::to_owned).collect();

            for source in &nodes {
                for destination in graph.shortest_paths_from(source).values() {
                    if destination.target() == source {
                        continue;
                    }

                    let mut total = 0.0;
                    let mut last = source.as_str();

                    for leg in destination.legs() {
                        assert_eq!(leg.from, last);
                        assert!(
                            graph
                                .neighbours(leg.from)
                                .any(|(node, distance)| node == leg.to && distance == leg.distance),
                            "leg {} -> {} ({}) is not an edge",
                            leg.from,
                            leg.to,
                            leg.distance
                        );
                        total += leg.distance;
                        last = leg.to;
                    }

                    assert_eq!(last, destination.target());
                    assert_eq!(total, destination.cumulative_distance());
                }
            }
        }
    }
}
