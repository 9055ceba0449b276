use crate::{define_index_newtype, solver::fleet_state::PackageStatus};

pub type Weight = f64;

define_index_newtype!(PackageIdx, Package, PackageStatus);

#[derive(Debug, Clone, PartialEq)]
pub struct Package {
    name: String,
    weight: Weight,
    origin: String,
    destination: String,
}

impl Package {
    pub fn new(name: String, weight: Weight, origin: String, destination: String) -> Self {
        Self {
            name,
            weight,
            origin,
            destination,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn weight(&self) -> Weight {
        self.weight
    }

    /// Location where the package waits to be picked up.
    pub fn origin(&self) -> &str {
        &self.origin
    }

    /// Location where the package must be delivered.
    pub fn destination(&self) -> &str {
        &self.destination
    }
}
