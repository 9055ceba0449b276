use std::iter;

use crate::route_graph::Distance;

/// An intermediate node on a shortest path, with the distance travelled since the
/// previous checkpoint (or since the source for the first one).
#[derive(Debug, Clone, PartialEq)]
pub struct Checkpoint {
    node: String,
    distance: Distance,
}

impl Checkpoint {
    pub fn new(node: String, distance: Distance) -> Self {
        Self { node, distance }
    }

    pub fn node(&self) -> &str {
        &self.node
    }

    pub fn distance(&self) -> Distance {
        self.distance
    }
}

/// Shortest path from a fixed source to one target.
///
/// `distance` is the length of the last leg (last checkpoint or source to target),
/// `cumulative_distance` the length of the whole path. The checkpoints exclude both
/// endpoints.
#[derive(Debug, Clone, PartialEq)]
pub struct Destination {
    source: String,
    target: String,
    distance: Distance,
    cumulative_distance: Distance,
    checkpoints: Vec<Checkpoint>,
}

/// One edge traversal of a reconstructed path.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Leg<'a> {
    pub from: &'a str,
    pub to: &'a str,
    pub distance: Distance,
}

impl Destination {
    pub fn new(
        source: String,
        target: String,
        distance: Distance,
        cumulative_distance: Distance,
        checkpoints: Vec<Checkpoint>,
    ) -> Self {
        Self {
            source,
            target,
            distance,
            cumulative_distance,
            checkpoints,
        }
    }

    /// The trivial path from a node to itself.
    pub fn origin(source: &str) -> Self {
        Self::new(source.to_owned(), source.to_owned(), 0.0, 0.0, Vec::new())
    }

    pub fn source(&self) -> &str {
        &self.source
    }

    pub fn target(&self) -> &str {
        &self.target
    }

    pub fn distance(&self) -> Distance {
        self.distance
    }

    pub fn cumulative_distance(&self) -> Distance {
        self.cumulative_distance
    }

    pub fn checkpoints(&self) -> &[Checkpoint] {
        &self.checkpoints
    }

    /// True when the path ends where it starts. A path over zero-length edges to
    /// another node is not stationary.
    pub fn is_stationary(&self) -> bool {
        self.source == self.target
    }

    /// Expands the path into one leg per traversed edge, in travel order.
    pub fn legs(&self) -> impl Iterator<Item = Leg<'_>> + '_ {
        self.checkpoints
            .iter()
            .map(|checkpoint| (checkpoint.node(), checkpoint.distance()))
            .chain(iter::once((self.target.as_str(), self.distance)))
            .scan(self.source.as_str(), |from, (to, distance)| {
                let leg = Leg {
                    from: *from,
                    to,
                    distance,
                };
                *from = to;
                Some(leg)
            })
    }
}
