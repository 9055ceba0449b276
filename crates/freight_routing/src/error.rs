use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum RoutingError {
    #[error("Invalid distance {distance} on edge {from} - {to}, must be finite and non-negative")]
    InvalidDistance {
        from: String,
        to: String,
        distance: f64,
    },
}
