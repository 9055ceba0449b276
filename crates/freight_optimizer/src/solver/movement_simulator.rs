use std::ops::Range;

use freight_routing::Destination;

use crate::problem::train::TrainIdx;

use super::{
    action::{Action, ActionKind, Candidate},
    action_enumerator,
    fleet_state::{FleetState, PackageStatus},
    movement::Movement,
};

/// Moves a train along `destination`, one movement per traversed edge, and updates
/// the packages it handles on the way.
///
/// Queued packages are loaded on the first movement. On arrival every queued or
/// carried package bound for the new location is delivered and listed on the last
/// movement. Zero-length edges still produce (zero-duration) movements. Only a path
/// that ends where it starts emits no movement, but deliveries still happen.
///
/// Returns the range of the movements appended to the state.
pub fn apply_path(
    state: &mut FleetState,
    train_id: TrainIdx,
    destination: &Destination,
) -> Range<usize> {
    let first_movement = state.movements.len();
    let train = &mut state.trains[train_id];

    assert_eq!(
        destination.source(),
        train.current_location,
        "Train {train_id} cannot follow a path starting away from its location"
    );

    if !destination.is_stationary() {
        let mut time = train.available_at;
        for leg in destination.legs() {
            state.movements.push(Movement::new(
                time,
                time + leg.distance,
                train_id,
                leg.from.to_owned(),
                leg.to.to_owned(),
            ));
            time += leg.distance;
        }
        train.available_at = time;

        let loaded = std::mem::take(&mut train.to_pick_up);
        for &package_id in &loaded {
            state.packages[package_id] = PackageStatus::Carried(train_id);
        }
        train.carried.extend_from_slice(&loaded);
        state.movements[first_movement].picked_up = loaded;
    }

    train.current_location = destination.target().to_owned();

    let problem = &state.problem;
    let location = train.current_location.as_str();
    let arrived: Vec<_> = train
        .pending()
        .filter(|&package_id| problem.package(package_id).destination() == location)
        .collect();

    if !arrived.is_empty() {
        train
            .to_pick_up
            .retain(|package_id| !arrived.contains(package_id));
        train.carried.retain(|package_id| !arrived.contains(package_id));
        train.delivered.extend_from_slice(&arrived);

        for &package_id in &arrived {
            state.packages[package_id] = PackageStatus::Delivered(train_id);
        }

        if let Some(last) = state.movements[first_movement..].last_mut() {
            last.delivered.extend_from_slice(&arrived);
        }
    }

    first_movement..state.movements.len()
}

/// Performs a candidate action on the state.
///
/// Panics if the action does not fit the state: picking up a package that is already
/// assigned, or delivering a package the train does not hold.
pub fn execute(state: &mut FleetState, candidate: &Candidate) -> Range<usize> {
    let Action {
        kind,
        train,
        package,
    } = candidate.action;

    match kind {
        ActionKind::Pickup => {
            assert_eq!(
                state.packages[package],
                PackageStatus::Unassigned,
                "Package {package} is already assigned"
            );

            let movements = apply_path(state, train, &candidate.destination);
            state.trains[train].to_pick_up.push(package);
            state.packages[package] = PackageStatus::AssignedForPickup(train);
            movements
        }
        ActionKind::Delivery => {
            assert!(
                matches!(
                    state.packages[package],
                    PackageStatus::AssignedForPickup(holder) | PackageStatus::Carried(holder)
                        if holder == train
                ),
                "Package {package} is not held by train {train}"
            );

            let movements = apply_path(state, train, &candidate.destination);
            debug_assert!(state.packages[package].is_delivered());
            movements
        }
    }
}

/// Replays a sequence of actions, resolving each path from the train's location at
/// the time the action is taken.
pub fn replay(state: &mut FleetState, actions: &[Action]) {
    for &action in actions {
        let Some(candidate) = action_enumerator::candidate(state, action) else {
            panic!("Action {action:?} has no path from the current state");
        };
        execute(state, &candidate);
    }
}
