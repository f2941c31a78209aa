use crate::elevator::elevator_info::{CallDirection, Direction, ElevatorInfo};
use crate::util::constants as setting;

/// Extra cost added on top of the travel distance when a car is heading the wrong way.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Penalties {
    /// Car is committed to the opposite direction of the call.
    pub direction_change: i32,
    /// Car is committed to the opposite direction and moving away from the call floor.
    pub away: i32,
}

impl Default for Penalties {
    fn default() -> Penalties {
        Penalties {
            direction_change: setting::DIRECTION_CHANGE_PENALTY,
            away: setting::AWAY_PENALTY,
        }
    }
}

/// Cost of letting `elev` serve a hall call at `floor` going `call_dirn`.
///
/// Distance in floors, plus `direction_change` if the car is committed to the
/// other direction, plus `away` if it is also moving away from `floor`.
/// Saturates at `i32::MAX` instead of overflowing.
pub fn cost(elev: &ElevatorInfo, floor: i32, call_dirn: CallDirection, penalties: &Penalties) -> i32 {
    let distance = elev.current_floor.saturating_sub(floor).saturating_abs();
    let mut penalty: i32 = 0;
    if elev.direction != Direction::Idle && elev.direction != Direction::from(call_dirn) {
        penalty = penalty.saturating_add(penalties.direction_change);
        let moving_away = match elev.direction {
            Direction::Up => elev.current_floor > floor,
            Direction::Down => elev.current_floor < floor,
            Direction::Idle => false,
        };
        if moving_away {
            penalty = penalty.saturating_add(penalties.away);
        }
    }
    distance.saturating_add(penalty)
}

/// Position of the cheapest car for the call. The first car wins a tie, so
/// with ids matching positions the lowest id is chosen. `None` for an empty fleet.
pub fn find_lowest_cost_id(
    elevators: &[ElevatorInfo],
    floor: i32,
    call_dirn: CallDirection,
    penalties: &Penalties,
) -> Option<usize> {
    let mut lowest: Option<(usize, i32)> = None;
    for (i, elev) in elevators.iter().enumerate() {
        let elev_cost = cost(elev, floor, call_dirn, penalties);
        match lowest {
            Some((_, lowest_cost)) if elev_cost >= lowest_cost => {}
            _ => lowest = Some((i, elev_cost)),
        }
    }
    lowest.map(|(i, _)| i)
}
