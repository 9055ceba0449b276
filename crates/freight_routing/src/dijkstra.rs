use std::cmp::Ordering;
use std::collections::BinaryHeap;

use crate::destination::{Checkpoint, Destination};
use crate::route_graph::{Destinations, Distance, RouteGraph};

const INVALID_NODE: usize = usize::MAX;

#[derive(Copy, Clone, Debug)]
struct HeapItem {
    node_id: usize,
    weight: Distance,
    sequence: usize,
}

impl PartialEq for HeapItem {
    fn eq(&self, other: &HeapItem) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for HeapItem {}

impl PartialOrd for HeapItem {
    fn partial_cmp(&self, other: &HeapItem) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for HeapItem {
    fn cmp(&self, other: &Self) -> Ordering {
        // Flip weight and sequence to make this a min-heap, earliest discovery first on ties
        other
            .weight
            .total_cmp(&self.weight)
            .then_with(|| other.sequence.cmp(&self.sequence))
    }
}

#[derive(Clone)]
struct NodeData {
    weight: Distance,
    settled: bool,
    parent: usize,
    // Length of the edge from parent to this node
    leg: Distance,
}

impl NodeData {
    fn new() -> Self {
        NodeData {
            weight: Distance::INFINITY,
            settled: false,
            parent: INVALID_NODE,
            leg: 0.0,
        }
    }
}

/// Single source shortest paths over the whole graph.
///
/// Relaxation only overwrites a tentative distance when strictly shorter, so among
/// equal length paths the first discovered one is kept.
pub(crate) fn shortest_paths(graph: &RouteGraph, source: &str) -> Destinations {
    let mut destinations = Destinations::default();

    let Some(start) = graph.node_id(source) else {
        destinations.insert(source.to_owned(), Destination::origin(source));
        return destinations;
    };

    let mut data = vec![NodeData::new(); graph.node_count()];
    let mut heap = BinaryHeap::with_capacity(graph.node_count());
    let mut settled_order = Vec::with_capacity(graph.node_count());
    let mut sequence = 0;

    data[start].weight = 0.0;
    heap.push(HeapItem {
        node_id: start,
        weight: 0.0,
        sequence,
    });

    while let Some(HeapItem {
        node_id, weight, ..
    }) = heap.pop()
    {
        if data[node_id].settled {
            continue;
        }

        data[node_id].settled = true;
        settled_order.push(node_id);

        for edge in graph.edges(node_id) {
            let adj_node = edge.to;

            if data[adj_node].settled {
                continue;
            }

            let next_weight = weight + edge.distance;

            if next_weight < data[adj_node].weight {
                data[adj_node] = NodeData {
                    weight: next_weight,
                    settled: false,
                    parent: node_id,
                    leg: edge.distance,
                };

                sequence += 1;
                heap.push(HeapItem {
                    node_id: adj_node,
                    weight: next_weight,
                    sequence,
                });
            }
        }
    }

    // Parents are always settled before their children, so each checkpoint list can
    // extend the one already built for the parent.
    for node_id in settled_order {
        let node = graph.node_name(node_id);
        let node_data = &data[node_id];

        if node_data.parent == INVALID_NODE {
            destinations.insert(node.to_owned(), Destination::origin(node));
            continue;
        }

        let parent = graph.node_name(node_data.parent);
        let mut checkpoints = destinations
            .get(parent)
            .map(|destination| destination.checkpoints().to_vec())
            .unwrap_or_default();

        if node_data.parent != start {
            checkpoints.push(Checkpoint::new(
                parent.to_owned(),
                data[node_data.parent].leg,
            ));
        }

        destinations.insert(
            node.to_owned(),
            Destination::new(
                source.to_owned(),
                node.to_owned(),
                node_data.leg,
                node_data.weight,
                checkpoints,
            ),
        );
    }

    destinations
}
