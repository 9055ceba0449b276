use freight_routing::{Destination, Distance};

use crate::problem::{package::PackageIdx, train::TrainIdx};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ActionKind {
    /// Travel to the package origin and queue it for loading.
    Pickup,
    /// Travel to the package destination, unloading everything bound for it.
    Delivery,
}

/// A decision of the search: one train handling one package.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Action {
    pub kind: ActionKind,
    pub train: TrainIdx,
    pub package: PackageIdx,
}

impl Action {
    pub fn pickup(train: TrainIdx, package: PackageIdx) -> Self {
        Action {
            kind: ActionKind::Pickup,
            train,
            package,
        }
    }

    pub fn delivery(train: TrainIdx, package: PackageIdx) -> Self {
        Action {
            kind: ActionKind::Delivery,
            train,
            package,
        }
    }
}

/// An action together with the shortest path the train takes to perform it.
#[derive(Debug, Clone, PartialEq)]
pub struct Candidate {
    pub action: Action,
    pub destination: Destination,
}

impl Candidate {
    pub fn travel_distance(&self) -> Distance {
        self.destination.cumulative_distance()
    }
}
