//! The fleet: one lock around every car, shared by the dispatcher and the tick driver.
use parking_lot::Mutex;
use std::sync::Arc;

use crate::elevator::elevator_info::ElevatorInfo;

/// Cloneable handle to the fleet.
///
/// Every read-then-write over car state goes through [`SharedFleet::with_elevators`],
/// which holds the lock for the whole closure. The closure only sees a slice, so
/// cars can be changed but never added or removed.
#[derive(Clone, Debug)]
pub struct SharedFleet {
    elevators: Arc<Mutex<Vec<ElevatorInfo>>>,
    max_floor: i32,
}

impl SharedFleet {
    /// `num_elevators` cars parked at floor 0, ids `0..num_elevators`.
    pub fn new(num_elevators: usize, max_floor: i32) -> SharedFleet {
        let elevators = (0..num_elevators).map(|id| ElevatorInfo::new(id, 0)).collect();
        SharedFleet::from_elevators(elevators, max_floor)
    }

    /// Builds a fleet from existing car records. Ids are expected to match positions.
    pub fn from_elevators(elevators: Vec<ElevatorInfo>, max_floor: i32) -> SharedFleet {
        SharedFleet {
            elevators: Arc::new(Mutex::new(elevators)),
            max_floor,
        }
    }

    pub fn max_floor(&self) -> i32 {
        self.max_floor
    }

    pub fn len(&self) -> usize {
        self.elevators.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Runs `f` with exclusive access to every car. Must not be called from inside `f`.
    pub fn with_elevators<R, F>(&self, f: F) -> R
    where
        F: FnOnce(&mut [ElevatorInfo]) -> R,
    {
        let mut elevators = self.elevators.lock();
        f(elevators.as_mut_slice())
    }

    /// Copy of every car as it is right now.
    pub fn elevators(&self) -> Vec<ElevatorInfo> {
        self.elevators.lock().clone()
    }
}
