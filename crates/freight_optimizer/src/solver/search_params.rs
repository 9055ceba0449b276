use jiff::SignedDuration;

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub enum SearchStrategy {
    /// Explores every action sequence and keeps the one with the smallest makespan.
    #[default]
    Exhaustive,
    /// Always takes the nearest pickup, then the nearest delivery. Fast, not optimal.
    Greedy,
}

/// Budget after which the exhaustive search stops and keeps the best plan found so far.
#[derive(Clone, Debug, PartialEq)]
pub enum Termination {
    Nodes(usize),
    Duration(SignedDuration),
}

#[derive(Clone, Debug)]
pub struct SearchParams {
    pub strategy: SearchStrategy,
    pub terminations: Vec<Termination>,
    /// Memoize sub-results by state fingerprint.
    pub transposition_table: bool,
}

impl Default for SearchParams {
    fn default() -> Self {
        Self {
            strategy: SearchStrategy::Exhaustive,
            terminations: vec![],
            transposition_table: true,
        }
    }
}

impl SearchParams {
    pub fn greedy() -> Self {
        Self {
            strategy: SearchStrategy::Greedy,
            ..Self::default()
        }
    }

    pub fn is_bounded(&self) -> bool {
        !self.terminations.is_empty()
    }

    /// Whether any termination is reached after expanding `nodes` nodes in `elapsed`.
    pub fn should_terminate(&self, nodes: usize, elapsed: SignedDuration) -> bool {
        self.terminations.iter().any(|termination| match termination {
            Termination::Nodes(max_nodes) => nodes >= *max_nodes,
            Termination::Duration(max_duration) => elapsed >= *max_duration,
        })
    }
}
