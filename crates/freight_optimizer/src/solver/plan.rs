use std::sync::Arc;

use freight_routing::Distance;

use crate::{
    json::types::{FromProblem, JsonMovement},
    problem::delivery_problem::DeliveryProblem,
};

use super::{fleet_state::FleetState, movement::Movement, statistics::SearchStatistics};

/// A complete delivery plan.
///
/// Movements are in chronological order of their start time. Movements starting at the
/// same time keep the order in which the search emitted them, so the movements of one
/// train always appear in travel order.
pub struct Plan {
    problem: Arc<DeliveryProblem>,
    movements: Vec<Movement>,
    makespan: Distance,
    statistics: SearchStatistics,
}

impl Plan {
    pub(crate) fn new(state: FleetState, statistics: SearchStatistics) -> Self {
        let makespan = state.makespan();
        let problem = Arc::clone(&state.problem);

        let mut movements = state.into_movements();
        movements.sort_by(|a, b| a.start_time().total_cmp(&b.start_time()));

        Plan {
            problem,
            movements,
            makespan,
            statistics,
        }
    }

    pub fn movements(&self) -> &[Movement] {
        &self.movements
    }

    pub fn makespan(&self) -> Distance {
        self.makespan
    }

    pub fn statistics(&self) -> &SearchStatistics {
        &self.statistics
    }

    pub fn problem(&self) -> &DeliveryProblem {
        &self.problem
    }

    /// The movements with trains and packages referenced by name.
    ///
    /// A package whose origin is its destination is delivered without moving, so it
    /// appears in no `picked_up` or `delivered` list. Its status in the final state is
    /// still `Delivered`.
    pub fn summaries(&self) -> Vec<JsonMovement> {
        self.movements
            .iter()
            .map(|movement| JsonMovement::from_problem(movement, &self.problem))
            .collect()
    }
}
