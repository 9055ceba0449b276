use jiff::Timestamp;
use tracing::debug;

use super::{
    action::Candidate,
    action_enumerator,
    fleet_state::FleetState,
    movement_simulator,
    search::SearchResult,
    statistics::SearchStatistics,
};

fn nearest(candidates: Vec<Candidate>) -> Option<Candidate> {
    candidates
        .into_iter()
        .min_by(|a, b| a.travel_distance().total_cmp(&b.travel_distance()))
}

/// Nearest first construction: take the closest pickup while any train has room,
/// otherwise the closest delivery.
///
/// Every step either assigns or delivers a package, so the loop ends after at most
/// two steps per package.
pub fn greedy_search(initial: &FleetState) -> SearchResult {
    let started_at = Timestamp::now();
    let mut statistics = SearchStatistics::default();
    let mut state = initial.clone();

    let best = loop {
        if state.is_complete() {
            statistics.complete_branches += 1;
            break Some(state);
        }

        statistics.nodes_expanded += 1;

        let next = nearest(action_enumerator::pickup_candidates(&state))
            .or_else(|| nearest(action_enumerator::delivery_candidates(&state)));

        let Some(candidate) = next else {
            statistics.dead_ends += 1;
            break None;
        };

        movement_simulator::execute(&mut state, &candidate);
    };

    statistics.elapsed = Timestamp::now().duration_since(started_at);
    debug!(
        steps = statistics.nodes_expanded,
        found = best.is_some(),
        "Greedy search finished"
    );

    SearchResult { best, statistics }
}
