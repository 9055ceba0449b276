use crate::{define_index_newtype, solver::fleet_state::TrainState};

use super::package::Weight;

define_index_newtype!(TrainIdx, Train, TrainState);

/// A train as given in the input. Its position and load over time live in
/// [`TrainState`].
#[derive(Debug, Clone, PartialEq)]
pub struct Train {
    name: String,
    capacity: Weight,
    start: String,
}

impl Train {
    pub fn new(name: String, capacity: Weight, start: String) -> Self {
        Self {
            name,
            capacity,
            start,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn capacity(&self) -> Weight {
        self.capacity
    }

    pub fn start(&self) -> &str {
        &self.start
    }
}
