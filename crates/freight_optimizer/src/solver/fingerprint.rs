use super::fleet_state::{FleetState, PackageStatus};

/// Canonical key of a search state.
///
/// Two states with the same fingerprint have the same future: trains sit at the same
/// locations, become available at the same times and hold the same packages. Timeline
/// ends are part of the key so memoized makespans stay exact.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct StateFingerprint {
    trains: Vec<(String, u64)>,
    packages: Vec<PackageStatus>,
}

impl StateFingerprint {
    pub fn of(state: &FleetState) -> Self {
        StateFingerprint {
            trains: state
                .trains()
                .iter()
                .map(|train| {
                    (
                        train.current_location().to_owned(),
                        train.available_at().to_bits(),
                    )
                })
                .collect(),
            packages: state.package_statuses().to_vec(),
        }
    }
}
