use fxhash::FxHashSet;

use crate::problem::train::TrainIdx;

use super::{
    action::{Action, ActionKind, Candidate},
    fleet_state::{FleetState, PackageStatus},
};

/// Resolves the path a train takes to perform `action` from its current location.
///
/// Returns `None` when the target cannot be reached.
pub fn candidate(state: &FleetState, action: Action) -> Option<Candidate> {
    let package = state.problem().package(action.package);
    let target = match action.kind {
        ActionKind::Pickup => package.origin(),
        ActionKind::Delivery => package.destination(),
    };

    state
        .problem()
        .graph()
        .destination(state.train(action.train).current_location(), target)
        .map(|destination| Candidate {
            action,
            destination,
        })
}

/// Every unassigned package paired with every train that still has room for it.
///
/// Ordered by package then train.
pub fn pickup_candidates(state: &FleetState) -> Vec<Candidate> {
    let problem = state.problem();
    let mut candidates = Vec::new();

    for package_id in problem.package_ids() {
        if state.package_status(package_id) != PackageStatus::Unassigned {
            continue;
        }

        let weight = problem.package(package_id).weight();

        for train_id in problem.train_ids() {
            if state.committed_load(train_id) + weight > problem.train(train_id).capacity() {
                continue;
            }

            if let Some(candidate) = candidate(state, Action::pickup(train_id, package_id)) {
                candidates.push(candidate);
            }
        }
    }

    candidates
}

/// Every package queued on or carried by a train, delivered by that train.
///
/// Ordered by train, queued packages before carried ones.
pub fn delivery_candidates(state: &FleetState) -> Vec<Candidate> {
    state
        .problem()
        .train_ids()
        .flat_map(|train_id| train_delivery_candidates(state, train_id))
        .collect()
}

fn train_delivery_candidates(
    state: &FleetState,
    train_id: TrainIdx,
) -> impl Iterator<Item = Candidate> + '_ {
    state
        .train(train_id)
        .pending()
        .filter_map(move |package_id| candidate(state, Action::delivery(train_id, package_id)))
}

/// Pickups followed by deliveries.
pub fn candidates(state: &FleetState) -> Vec<Candidate> {
    let mut candidates = pickup_candidates(state);
    candidates.extend(delivery_candidates(state));
    candidates
}

/// Like [`candidates`], but keeps a single delivery per (train, target) pair.
///
/// A delivery unloads every package bound for the target, so two deliveries by the
/// same train to the same location lead to identical states.
pub fn distinct_candidates(state: &FleetState) -> Vec<Candidate> {
    let mut seen = FxHashSet::default();

    candidates(state)
        .into_iter()
        .filter(|candidate| match candidate.action.kind {
            ActionKind::Pickup => true,
            ActionKind::Delivery => {
                seen.insert((candidate.action.train, candidate.destination.target().to_owned()))
            }
        })
        .collect()
}
