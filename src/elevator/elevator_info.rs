use serde;

use crate::elevator::target_floors::TargetFloors;

#[derive(Copy, Clone, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize, Hash)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Direction {
    Up,
    Down,
    Idle,
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize, Hash)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Status {
    Idle,
    Moving,
    DoorsOpen,
}

/// Direction of a hall call. Calls always ask to go somewhere, so there is no idle variant.
#[derive(Copy, Clone, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize, Hash)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum CallDirection {
    Up,
    Down,
}

impl From<CallDirection> for Direction {
    fn from(dirn: CallDirection) -> Direction {
        match dirn {
            CallDirection::Up => Direction::Up,
            CallDirection::Down => Direction::Down,
        }
    }
}

/// Everything we know about one car: where it is, where it is heading and what it still has to visit.
#[derive(Clone, Debug, serde::Serialize, serde::Deserialize, Hash, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ElevatorInfo {
    pub id: usize,
    pub current_floor: i32,
    pub direction: Direction,
    pub status: Status,
    pub target_floors: TargetFloors,
}

impl ElevatorInfo {
    /// A car parked at `floor` with nothing to do.
    pub fn new(id: usize, floor: i32) -> ElevatorInfo {
        ElevatorInfo {
            id,
            current_floor: floor,
            direction: Direction::Idle,
            status: Status::Idle,
            target_floors: TargetFloors::new(),
        }
    }
}
