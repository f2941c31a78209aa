use crate::elevator::elevator_info::{Direction, ElevatorInfo};

/// Next floor to head for under the LOOK policy.
///
/// Keeps sweeping in the current direction while there are targets ahead
/// (including the current floor), and only turns around at the far end of the
/// sweep. An idle car starts with the lowest target. `None` if there is nothing to do.
pub fn next_target(elev: &ElevatorInfo) -> Option<i32> {
    let targets = &elev.target_floors;
    let floor = elev.current_floor;
    match elev.direction {
        Direction::Up => targets.ceiling(floor).or_else(|| targets.last()),
        Direction::Down => targets.floor(floor).or_else(|| targets.first()),
        Direction::Idle => targets.first(),
    }
}

/// Direction the car should travel in to reach its next target.
///
/// A target on the current floor leaves the direction as it is; the arrival
/// is picked up by the state machine. No targets means `Direction::Idle`.
pub fn choose_direction(elev: &ElevatorInfo) -> Direction {
    match next_target(elev) {
        None => Direction::Idle,
        Some(target) if target > elev.current_floor => Direction::Up,
        Some(target) if target < elev.current_floor => Direction::Down,
        Some(_) => elev.direction,
    }
}
