use std::sync::Arc;

use freight_routing::Distance;
use smallvec::SmallVec;

use crate::problem::{
    delivery_problem::DeliveryProblem,
    package::{PackageIdx, Weight},
    train::TrainIdx,
};

use super::movement::Movement;

pub type PackageList = SmallVec<[PackageIdx; 4]>;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PackageStatus {
    Unassigned,
    /// Queued on a train, picked up on the train's next move.
    AssignedForPickup(TrainIdx),
    Carried(TrainIdx),
    Delivered(TrainIdx),
}

impl PackageStatus {
    pub fn is_delivered(&self) -> bool {
        matches!(self, PackageStatus::Delivered(_))
    }

    pub fn train(&self) -> Option<TrainIdx> {
        match self {
            PackageStatus::Unassigned => None,
            PackageStatus::AssignedForPickup(train_id)
            | PackageStatus::Carried(train_id)
            | PackageStatus::Delivered(train_id) => Some(*train_id),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct TrainState {
    pub(crate) current_location: String,
    /// End time of the train's last movement.
    pub(crate) available_at: Distance,
    pub(crate) to_pick_up: PackageList,
    pub(crate) carried: PackageList,
    pub(crate) delivered: PackageList,
}

impl TrainState {
    fn new(start: &str) -> Self {
        TrainState {
            current_location: start.to_owned(),
            available_at: 0.0,
            to_pick_up: PackageList::new(),
            carried: PackageList::new(),
            delivered: PackageList::new(),
        }
    }

    pub fn current_location(&self) -> &str {
        &self.current_location
    }

    pub fn available_at(&self) -> Distance {
        self.available_at
    }

    pub fn to_pick_up(&self) -> &[PackageIdx] {
        &self.to_pick_up
    }

    pub fn carried(&self) -> &[PackageIdx] {
        &self.carried
    }

    pub fn delivered(&self) -> &[PackageIdx] {
        &self.delivered
    }

    /// Packages queued or carried, which all still need a delivery.
    pub fn pending(&self) -> impl Iterator<Item = PackageIdx> {
        self.to_pick_up
            .iter()
            .chain(self.carried.iter())
            .copied()
    }
}

/// Positions, loads and package statuses at one point of the search, with the
/// movements that led there.
///
/// Cloning is cheap on the static side: the problem is shared, only the dynamic
/// state is copied. A clone never aliases the state of its parent.
#[derive(Clone)]
pub struct FleetState {
    pub(crate) problem: Arc<DeliveryProblem>,
    pub(crate) trains: Vec<TrainState>,
    pub(crate) packages: Vec<PackageStatus>,
    pub(crate) movements: Vec<Movement>,
}

impl FleetState {
    pub fn new(problem: Arc<DeliveryProblem>) -> Self {
        let trains = problem
            .trains()
            .iter()
            .map(|train| TrainState::new(train.start()))
            .collect();
        let packages = vec![PackageStatus::Unassigned; problem.packages().len()];

        FleetState {
            problem,
            trains,
            packages,
            movements: Vec::new(),
        }
    }

    pub fn problem(&self) -> &DeliveryProblem {
        &self.problem
    }

    pub fn train(&self, train_id: TrainIdx) -> &TrainState {
        &self.trains[train_id]
    }

    pub fn trains(&self) -> &[TrainState] {
        &self.trains
    }

    pub fn package_status(&self, package_id: PackageIdx) -> PackageStatus {
        self.packages[package_id]
    }

    pub fn package_statuses(&self) -> &[PackageStatus] {
        &self.packages
    }

    pub fn movements(&self) -> &[Movement] {
        &self.movements
    }

    pub fn into_movements(self) -> Vec<Movement> {
        self.movements
    }

    pub fn is_complete(&self) -> bool {
        self.packages.iter().all(PackageStatus::is_delivered)
    }

    pub fn undelivered(&self) -> impl Iterator<Item = PackageIdx> + '_ {
        self.problem
            .package_ids()
            .filter(|&package_id| !self.packages[package_id].is_delivered())
    }

    /// Weight counted against the train's capacity: queued plus carried packages.
    pub fn committed_load(&self, train_id: TrainIdx) -> Weight {
        self.trains[train_id]
            .pending()
            .map(|package_id| self.problem.package(package_id).weight())
            .sum()
    }

    pub fn remaining_capacity(&self, train_id: TrainIdx) -> Weight {
        self.problem.train(train_id).capacity() - self.committed_load(train_id)
    }

    /// Completion time of the last finishing train, zero when nothing moved.
    pub fn makespan(&self) -> Distance {
        self.movements
            .iter()
            .map(|movement| movement.end_time())
            .fold(0.0, Distance::max)
    }
}
