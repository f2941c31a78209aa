use crate::elevator::elevator_info::{Direction, ElevatorInfo, Status};
use crate::fsm::direction_decider;

/// What a single tick did to a car.
#[derive(Copy, Clone, Debug, PartialEq)]
pub enum Transition {
    /// Nothing changed.
    Unchanged,
    /// Left `Idle` or `DoorsOpen` and started travelling.
    Departed { direction: Direction },
    /// Travelled one floor.
    Moved { floor: i32 },
    /// Stopped at a target and opened the doors.
    Arrived { floor: i32 },
    /// The current floor was requested again while the doors were open; they stay open one more tick.
    DoorsHeld { floor: i32 },
    /// Closed the doors with nothing left to do.
    Idled,
}

/// Advances one car by one simulation step.
///
/// `max_floor` is the highest floor the car can reach, motion never leaves `[0, max_floor]`.
pub fn on_tick(elev: &mut ElevatorInfo, max_floor: i32) -> Transition {
    match elev.status {
        Status::Idle => on_idle(elev),
        Status::Moving => on_moving(elev, max_floor),
        Status::DoorsOpen => on_doors_open(elev, max_floor),
    }
}

fn on_idle(elev: &mut ElevatorInfo) -> Transition {
    if elev.target_floors.is_empty() {
        elev.direction = Direction::Idle;
        return Transition::Unchanged;
    }
    // Next target is the floor we are parked at, no direction would ever be chosen.
    if direction_decider::next_target(elev) == Some(elev.current_floor) {
        elev.target_floors.remove(elev.current_floor);
        elev.status = Status::DoorsOpen;
        return Transition::Arrived { floor: elev.current_floor };
    }
    let new_dirn = direction_decider::choose_direction(elev);
    elev.direction = new_dirn;
    if new_dirn == Direction::Idle {
        return Transition::Unchanged;
    }
    elev.status = Status::Moving;
    Transition::Departed { direction: new_dirn }
}

fn on_moving(elev: &mut ElevatorInfo, max_floor: i32) -> Transition {
    if elev.target_floors.remove(elev.current_floor) {
        elev.status = Status::DoorsOpen;
        return Transition::Arrived { floor: elev.current_floor };
    }
    move_one_floor(elev, max_floor)
}

fn on_doors_open(elev: &mut ElevatorInfo, max_floor: i32) -> Transition {
    log::debug!("Elevator {} closing doors at floor {}", elev.id, elev.current_floor);
    if elev.target_floors.remove(elev.current_floor) {
        return Transition::DoorsHeld { floor: elev.current_floor };
    }
    if elev.target_floors.is_empty() {
        elev.status = Status::Idle;
        elev.direction = Direction::Idle;
        return Transition::Idled;
    }
    elev.direction = direction_decider::choose_direction(elev);
    elev.status = Status::Moving;
    move_one_floor(elev, max_floor);
    Transition::Departed { direction: elev.direction }
}

fn move_one_floor(elev: &mut ElevatorInfo, max_floor: i32) -> Transition {
    let next_floor = match elev.direction {
        Direction::Up => (elev.current_floor + 1).min(max_floor),
        Direction::Down => (elev.current_floor - 1).max(0),
        Direction::Idle => elev.current_floor,
    };
    if next_floor == elev.current_floor {
        return Transition::Unchanged;
    }
    elev.current_floor = next_floor;
    Transition::Moved { floor: next_floor }
}
