use std::convert::TryFrom;

use crate::elevator::elevator_info::CallDirection;
use crate::order_assigner::cost_function::{self, Penalties};
use crate::simulation::fleet::SharedFleet;
use crate::util::error::DispatchError;

/// Turns hall calls and in-cab selections into target floors.
///
/// Holds no state of its own besides the penalties; every decision is made on
/// the live fleet while holding the fleet lock.
#[derive(Clone, Debug)]
pub struct Dispatcher {
    fleet: SharedFleet,
    penalties: Penalties,
}

impl Dispatcher {
    pub fn new(fleet: SharedFleet, penalties: Penalties) -> Dispatcher {
        Dispatcher { fleet, penalties }
    }

    pub fn fleet(&self) -> &SharedFleet {
        &self.fleet
    }

    /// Hands a hall call to the cheapest car and returns its id.
    pub fn assign(&self, floor: i32, call_dirn: CallDirection) -> Result<usize, DispatchError> {
        self.check_floor(floor)?;
        let penalties = self.penalties;
        let chosen = self.fleet.with_elevators(|elevators| {
            let i = cost_function::find_lowest_cost_id(elevators, floor, call_dirn, &penalties)?;
            elevators[i].target_floors.add(floor);
            Some(elevators[i].id)
        });
        match chosen {
            Some(id) => {
                log::info!(
                    "Elevator {} chosen for call at floor {} going {:?}",
                    id,
                    floor,
                    call_dirn
                );
                Ok(id)
            }
            None => {
                log::error!("No elevators available for call at floor {}", floor);
                Err(DispatchError::NoElevatorsAvailable)
            }
        }
    }

    /// Adds a floor picked from inside car `elevator_id`, skipping the cost function.
    pub fn enqueue_selection(&self, elevator_id: i32, floor: i32) -> Result<(), DispatchError> {
        self.check_floor(floor)?;
        let result = self.fleet.with_elevators(|elevators| {
            let fleet_size = elevators.len();
            match usize::try_from(elevator_id).ok().and_then(|i| elevators.get_mut(i)) {
                Some(elev) => {
                    elev.target_floors.add(floor);
                    Ok(())
                }
                None => Err(DispatchError::InvalidElevatorId {
                    id: elevator_id,
                    fleet_size,
                }),
            }
        });
        match &result {
            Ok(()) => log::info!("Elevator {} was sent to floor {}", elevator_id, floor),
            Err(e) => log::warn!("Dropping floor selection: {}", e),
        }
        result
    }

    fn check_floor(&self, floor: i32) -> Result<(), DispatchError> {
        let max_floor = self.fleet.max_floor();
        if floor < 0 || floor > max_floor {
            let e = DispatchError::FloorOutOfRange { floor, max_floor };
            log::warn!("Dropping request: {}", e);
            return Err(e);
        }
        Ok(())
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::elevator::elevator_info::{Direction, ElevatorInfo, Status};

    fn dispatcher(num_elevators: usize) -> Dispatcher {
        Dispatcher::new(SharedFleet::new(num_elevators, 9), Penalties::default())
    }

    fn targets_of(dispatcher: &Dispatcher, id: usize) -> Vec<i32> {
        dispatcher.fleet().elevators()[id].target_floors.iter().collect()
    }

    #[test]
    fn it_assigns_call_to_lowest_id_among_idle_cars() {
        let d = dispatcher(3);
        assert_eq!(d.assign(5, CallDirection::Up), Ok(0));
        assert_eq!(targets_of(&d, 0), vec![5]);
        assert!(targets_of(&d, 1).is_empty());
        assert!(targets_of(&d, 2).is_empty());
    }

    #[test]
    fn it_skips_the_car_heading_the_wrong_way() {
        let mut a = ElevatorInfo::new(0, 8);
        a.status = Status::Moving;
        a.direction = Direction::Down;
        a.target_floors.add(2);
        let b = ElevatorInfo::new(1, 0);
        let d = Dispatcher::new(SharedFleet::from_elevators(vec![a, b], 9), Penalties::default());

        assert_eq!(d.assign(6, CallDirection::Up), Ok(1));
        assert_eq!(targets_of(&d, 0), vec![2]);
        assert_eq!(targets_of(&d, 1), vec![6]);
    }

    #[test]
    fn it_fails_loudly_on_an_empty_fleet() {
        let d = dispatcher(0);
        assert_eq!(d.assign(3, CallDirection::Down), Err(DispatchError::NoElevatorsAvailable));
    }

    #[test]
    fn it_enqueues_selection_on_the_given_car() {
        let d = dispatcher(3);
        assert_eq!(d.enqueue_selection(2, 7), Ok(()));
        assert_eq!(targets_of(&d, 2), vec![7]);
        assert!(targets_of(&d, 0).is_empty());
    }

    #[test]
    fn it_drops_selection_for_unknown_car() {
        let d = dispatcher(3);
        assert_eq!(
            d.enqueue_selection(3, 4),
            Err(DispatchError::InvalidElevatorId { id: 3, fleet_size: 3 })
        );
        assert_eq!(
            d.enqueue_selection(-1, 4),
            Err(DispatchError::InvalidElevatorId { id: -1, fleet_size: 3 })
        );
        for id in 0..3 {
            assert!(targets_of(&d, id).is_empty());
        }
    }

    #[test]
    fn it_drops_floors_outside_the_building() {
        let d = dispatcher(2);
        assert_eq!(
            d.assign(10, CallDirection::Up),
            Err(DispatchError::FloorOutOfRange { floor: 10, max_floor: 9 })
        );
        assert_eq!(
            d.enqueue_selection(0, -1),
            Err(DispatchError::FloorOutOfRange { floor: -1, max_floor: 9 })
        );
        assert!(targets_of(&d, 0).is_empty());
        assert!(targets_of(&d, 1).is_empty());
    }

    #[test]
    fn it_accepts_call_for_the_floor_a_car_is_on() {
        let d = dispatcher(1);
        assert_eq!(d.assign(0, CallDirection::Up), Ok(0));
        assert_eq!(targets_of(&d, 0), vec![0]);
    }
}
