use freight_routing::{Distance, RouteGraph};
use fxhash::FxHashSet;

use super::{
    error::ProblemError,
    package::{Package, PackageIdx, Weight},
    train::{Train, TrainIdx},
};

/// Immutable input of a delivery run: the rail network, the trains and the packages.
///
/// Search branches share one instance; the graph's shortest path cache is the only
/// state that changes after construction.
pub struct DeliveryProblem {
    graph: RouteGraph,
    trains: Vec<Train>,
    packages: Vec<Package>,
}

impl DeliveryProblem {
    pub fn graph(&self) -> &RouteGraph {
        &self.graph
    }

    pub fn trains(&self) -> &[Train] {
        &self.trains
    }

    pub fn train(&self, train_id: TrainIdx) -> &Train {
        &self.trains[train_id]
    }

    pub fn packages(&self) -> &[Package] {
        &self.packages
    }

    pub fn package(&self, package_id: PackageIdx) -> &Package {
        &self.packages[package_id]
    }

    pub fn train_ids(&self) -> impl Iterator<Item = TrainIdx> {
        TrainIdx::all(self.trains.len())
    }

    pub fn package_ids(&self) -> impl Iterator<Item = PackageIdx> {
        PackageIdx::all(self.packages.len())
    }

    pub fn max_capacity(&self) -> Option<Weight> {
        self.trains
            .iter()
            .map(|train| train.capacity())
            .max_by(|a, b| a.total_cmp(b))
    }

    /// Whether some train can carry the package on its own, from its origin to its
    /// destination. Trains never leave the component of their start location, so a
    /// package failing this check can never be delivered.
    pub fn is_servable(&self, package_id: PackageIdx) -> bool {
        let package = self.package(package_id);
        let reachable = |from: &str, to: &str| self.graph.destination(from, to).is_some();

        reachable(package.origin(), package.destination())
            && self.trains.iter().any(|train| {
                package.weight() <= train.capacity() && reachable(train.start(), package.origin())
            })
    }

    pub fn unservable_packages(&self) -> impl Iterator<Item = PackageIdx> + '_ {
        self.package_ids()
            .filter(move |&package_id| !self.is_servable(package_id))
    }
}

#[derive(Default)]
pub struct DeliveryProblemBuilder {
    edges: Vec<(String, String, Distance)>,
    trains: Vec<Train>,
    packages: Vec<Package>,
}

impl DeliveryProblemBuilder {
    pub fn add_edge(
        &mut self,
        from: impl Into<String>,
        to: impl Into<String>,
        distance: Distance,
    ) -> &mut DeliveryProblemBuilder {
        self.edges.push((from.into(), to.into(), distance));
        self
    }

    pub fn add_train(
        &mut self,
        name: impl Into<String>,
        capacity: Weight,
        start: impl Into<String>,
    ) -> &mut DeliveryProblemBuilder {
        self.trains
            .push(Train::new(name.into(), capacity, start.into()));
        self
    }

    pub fn add_package(
        &mut self,
        name: impl Into<String>,
        weight: Weight,
        origin: impl Into<String>,
        destination: impl Into<String>,
    ) -> &mut DeliveryProblemBuilder {
        self.packages.push(Package::new(
            name.into(),
            weight,
            origin.into(),
            destination.into(),
        ));
        self
    }

    pub fn build(self) -> Result<DeliveryProblem, ProblemError> {
        let mut graph = RouteGraph::new();
        for (from, to, distance) in &self.edges {
            graph.add_edge(from, to, *distance)?;
        }

        let mut names = FxHashSet::default();
        for train in &self.trains {
            if !names.insert(train.name()) {
                return Err(ProblemError::DuplicateTrain(train.name().to_owned()));
            }
            if !train.capacity().is_finite() || train.capacity() < 0.0 {
                return Err(ProblemError::InvalidCapacity {
                    name: train.name().to_owned(),
                    capacity: train.capacity(),
                });
            }
        }

        let mut names = FxHashSet::default();
        for package in &self.packages {
            if !names.insert(package.name()) {
                return Err(ProblemError::DuplicatePackage(package.name().to_owned()));
            }
            if !package.weight().is_finite() || package.weight() < 0.0 {
                return Err(ProblemError::InvalidWeight {
                    name: package.name().to_owned(),
                    weight: package.weight(),
                });
            }
        }

        Ok(DeliveryProblem {
            graph,
            trains: self.trains,
            packages: self.packages,
        })
    }
}
