use jiff::SignedDuration;
use serde::Serialize;

#[derive(Default, Debug, Clone, PartialEq, Serialize)]
pub struct SearchStatistics {
    pub nodes_expanded: usize,
    /// States with undelivered packages and no legal action.
    pub dead_ends: usize,
    /// States abandoned because they could not beat the best plan found so far.
    pub pruned: usize,
    pub transposition_hits: usize,
    pub complete_branches: usize,
    pub budget_exhausted: bool,
    pub elapsed: SignedDuration,
}
