use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum SolveError {
    /// Some package cannot be delivered: its origin or destination is out of reach, it
    /// outweighs every train, or the search budget ran out before any plan was found.
    #[error("No plan delivers every package, undelivered: {}", .undelivered.join(", "))]
    NoSolution { undelivered: Vec<String> },
}
