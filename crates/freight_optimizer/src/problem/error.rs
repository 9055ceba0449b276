use freight_routing::RoutingError;
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum ProblemError {
    #[error(transparent)]
    Routing(#[from] RoutingError),
    #[error("Train {0} is defined more than once")]
    DuplicateTrain(String),
    #[error("Package {0} is defined more than once")]
    DuplicatePackage(String),
    #[error("Train {name} has an invalid capacity {capacity}")]
    InvalidCapacity { name: String, capacity: f64 },
    #[error("Package {name} has an invalid weight {weight}")]
    InvalidWeight { name: String, weight: f64 },
}
