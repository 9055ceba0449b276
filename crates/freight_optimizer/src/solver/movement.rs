use freight_routing::Distance;

use crate::problem::{package::PackageIdx, train::TrainIdx};

use super::fleet_state::PackageList;

/// A train traversing one edge of the network.
#[derive(Debug, Clone, PartialEq)]
pub struct Movement {
    start_time: Distance,
    end_time: Distance,
    train: TrainIdx,
    from: String,
    to: String,
    pub(crate) picked_up: PackageList,
    pub(crate) delivered: PackageList,
}

impl Movement {
    pub fn new(
        start_time: Distance,
        end_time: Distance,
        train: TrainIdx,
        from: String,
        to: String,
    ) -> Self {
        Movement {
            start_time,
            end_time,
            train,
            from,
            to,
            picked_up: PackageList::new(),
            delivered: PackageList::new(),
        }
    }

    pub fn start_time(&self) -> Distance {
        self.start_time
    }

    pub fn end_time(&self) -> Distance {
        self.end_time
    }

    pub fn duration(&self) -> Distance {
        self.end_time - self.start_time
    }

    pub fn train(&self) -> TrainIdx {
        self.train
    }

    pub fn from(&self) -> &str {
        &self.from
    }

    pub fn to(&self) -> &str {
        &self.to
    }

    /// Packages loaded at `from` before departing.
    pub fn picked_up(&self) -> &[PackageIdx] {
        &self.picked_up
    }

    /// Packages unloaded at `to` on arrival.
    pub fn delivered(&self) -> &[PackageIdx] {
        &self.delivered
    }
}
