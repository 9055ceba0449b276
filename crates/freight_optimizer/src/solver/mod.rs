pub mod action;
pub mod action_enumerator;
pub mod error;
pub mod fingerprint;
pub mod fleet_state;
pub mod greedy;
pub mod movement;
pub mod movement_simulator;
pub mod plan;
pub mod search;
pub mod search_params;
pub mod solver;
pub mod statistics;
