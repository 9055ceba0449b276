pub mod destination;
mod dijkstra;
pub mod error;
pub mod route_graph;

pub use destination::{Checkpoint, Destination, Leg};
pub use error::RoutingError;
pub use route_graph::{Destinations, Distance, RouteGraph};

#[cfg(test)]
pub(crate) mod test_graph_utils;
