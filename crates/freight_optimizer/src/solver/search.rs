use freight_routing::Distance;
use fxhash::FxHashMap;
use jiff::Timestamp;
use tracing::{debug, warn};

use super::{
    action::Action, action_enumerator, fingerprint::StateFingerprint, fleet_state::FleetState,
    movement_simulator, search_params::SearchParams, statistics::SearchStatistics,
};

/// Best way found to finish from some state.
#[derive(Debug, Clone)]
struct Completion {
    makespan: Distance,
    /// Actions to take from that state, in order.
    actions: Vec<Action>,
}

enum Transposition {
    /// The subtree was fully explored. `None` means no plan exists from the state.
    Exact(Option<Completion>),
    /// No plan from the state finishes before this time.
    AtLeast(Distance),
}

struct Explored {
    best: Option<Completion>,
    /// False when the budget ran out before the subtree was fully explored.
    complete: bool,
}

impl Explored {
    fn pruned() -> Self {
        Explored {
            best: None,
            complete: true,
        }
    }

    fn interrupted() -> Self {
        Explored {
            best: None,
            complete: false,
        }
    }
}

/// Depth first branch and bound over action sequences.
///
/// Each child is explored on its own clone of the parent state. A child only
/// replaces the best plan of its parent when it finishes strictly earlier, so the
/// first plan found wins among plans of equal makespan.
pub struct ExhaustiveSearch<'a> {
    params: &'a SearchParams,
    statistics: SearchStatistics,
    /// Grows with the number of distinct states visited and is never evicted. Set a
    /// [`Termination`](super::search_params::Termination) or disable the table to bound
    /// memory on large problems.
    transpositions: FxHashMap<StateFingerprint, Transposition>,
    started_at: Timestamp,
}

pub struct SearchResult {
    pub best: Option<FleetState>,
    pub statistics: SearchStatistics,
}

impl<'a> ExhaustiveSearch<'a> {
    pub fn new(params: &'a SearchParams) -> Self {
        ExhaustiveSearch {
            params,
            statistics: SearchStatistics::default(),
            transpositions: FxHashMap::default(),
            started_at: Timestamp::now(),
        }
    }

    pub fn run(mut self, initial: &FleetState) -> SearchResult {
        self.started_at = Timestamp::now();

        let explored = self.explore(initial, Distance::INFINITY);

        self.statistics.elapsed = Timestamp::now().duration_since(self.started_at);
        debug!(
            nodes = self.statistics.nodes_expanded,
            dead_ends = self.statistics.dead_ends,
            pruned = self.statistics.pruned,
            transposition_hits = self.statistics.transposition_hits,
            transpositions = self.transpositions.len(),
            complete = explored.complete,
            "Exhaustive search finished"
        );

        let best = explored.best.map(|completion| {
            let mut state = initial.clone();
            movement_simulator::replay(&mut state, &completion.actions);
            debug_assert_eq!(state.makespan(), completion.makespan);
            state
        });

        SearchResult {
            best,
            statistics: self.statistics,
        }
    }

    fn budget_exhausted(&mut self) -> bool {
        if self.statistics.budget_exhausted {
            return true;
        }

        if !self.params.is_bounded() {
            return false;
        }

        let elapsed = Timestamp::now().duration_since(self.started_at);
        if self
            .params
            .should_terminate(self.statistics.nodes_expanded, elapsed)
        {
            warn!(
                nodes = self.statistics.nodes_expanded,
                ?elapsed,
                "Search budget exhausted, keeping the best plan found so far"
            );
            self.statistics.budget_exhausted = true;
        }

        self.statistics.budget_exhausted
    }

    /// Best completion from `state` finishing strictly before `bound`.
    fn explore(&mut self, state: &FleetState, bound: Distance) -> Explored {
        if self.budget_exhausted() {
            return Explored::interrupted();
        }

        self.statistics.nodes_expanded += 1;

        let makespan = state.makespan();
        if makespan >= bound {
            self.statistics.pruned += 1;
            return Explored::pruned();
        }

        if state.is_complete() {
            self.statistics.complete_branches += 1;
            return Explored {
                best: Some(Completion {
                    makespan,
                    actions: Vec::new(),
                }),
                complete: true,
            };
        }

        let fingerprint = self
            .params
            .transposition_table
            .then(|| StateFingerprint::of(state));

        if let Some(transposition) = fingerprint
            .as_ref()
            .and_then(|fingerprint| self.transpositions.get(fingerprint))
        {
            match transposition {
                Transposition::Exact(completion) => {
                    self.statistics.transposition_hits += 1;
                    return Explored {
                        best: completion
                            .as_ref()
                            .filter(|completion| completion.makespan < bound)
                            .cloned(),
                        complete: true,
                    };
                }
                Transposition::AtLeast(lower_bound) if bound <= *lower_bound => {
                    self.statistics.transposition_hits += 1;
                    return Explored::pruned();
                }
                Transposition::AtLeast(_) => {}
            }
        }

        let candidates = action_enumerator::distinct_candidates(state);
        if candidates.is_empty() {
            self.statistics.dead_ends += 1;
        }

        let mut best: Option<Completion> = None;
        let mut complete = true;

        for candidate in candidates {
            let limit = best.as_ref().map_or(bound, |best| best.makespan);

            let mut child = state.clone();
            movement_simulator::execute(&mut child, &candidate);

            let explored = self.explore(&child, limit);

            if let Some(mut completion) = explored.best {
                completion.actions.insert(0, candidate.action);
                best = Some(completion);
            }

            if !explored.complete {
                complete = false;
                break;
            }
        }

        if complete && let Some(fingerprint) = fingerprint {
            let transposition = match &best {
                Some(_) => Transposition::Exact(best.clone()),
                None if bound == Distance::INFINITY => Transposition::Exact(None),
                None => Transposition::AtLeast(bound),
            };
            self.transpositions.insert(fingerprint, transposition);
        }

        Explored { best, complete }
    }
}
