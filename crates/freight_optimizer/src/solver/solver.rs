use std::sync::Arc;

use tracing::{debug, warn};

use crate::{json::types::JsonMovement, problem::delivery_problem::DeliveryProblem, timer_debug};

use super::{
    error::SolveError,
    fleet_state::FleetState,
    greedy::greedy_search,
    plan::Plan,
    search::ExhaustiveSearch,
    search_params::{SearchParams, SearchStrategy},
};

pub struct Solver {
    problem: Arc<DeliveryProblem>,
    params: SearchParams,
}

impl Solver {
    pub fn new(problem: DeliveryProblem, params: SearchParams) -> Self {
        Solver {
            problem: Arc::new(problem),
            params,
        }
    }

    pub fn problem(&self) -> &DeliveryProblem {
        &self.problem
    }

    pub fn params(&self) -> &SearchParams {
        &self.params
    }

    /// Plan with the smallest makespan, or the best one found within the budget.
    pub fn try_solve(&self) -> Result<Plan, SolveError> {
        let unservable: Vec<String> = self
            .problem
            .unservable_packages()
            .map(|package_id| self.problem.package(package_id).name().to_owned())
            .collect();

        if !unservable.is_empty() {
            for package in &unservable {
                warn!(package, "Package cannot be delivered by any train");
            }
            return Err(SolveError::NoSolution {
                undelivered: unservable,
            });
        }

        let initial = FleetState::new(Arc::clone(&self.problem));

        debug!(
            trains = self.problem.trains().len(),
            packages = self.problem.packages().len(),
            strategy = ?self.params.strategy,
            "Searching delivery plan"
        );

        let result = timer_debug!(
            "Search",
            match self.params.strategy {
                SearchStrategy::Exhaustive => ExhaustiveSearch::new(&self.params).run(&initial),
                SearchStrategy::Greedy => greedy_search(&initial),
            }
        );

        match result.best {
            Some(state) => Ok(Plan::new(state, result.statistics)),
            None => Err(SolveError::NoSolution {
                undelivered: initial
                    .undelivered()
                    .map(|package_id| self.problem.package(package_id).name().to_owned())
                    .collect(),
            }),
        }
    }

    /// Movement summaries of the best plan, empty when no plan exists.
    pub fn solve(&self) -> Vec<JsonMovement> {
        match self.try_solve() {
            Ok(plan) => plan.summaries(),
            Err(error) => {
                warn!(%error, "No delivery plan found");
                vec![]
            }
        }
    }
}
