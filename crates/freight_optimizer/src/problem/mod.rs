pub mod delivery_problem;
pub mod error;
pub mod package;
pub mod train;
